use crate::InteractionType::{AdjacencyValidated, DirectTarget, RegulonMember};
use crate::{SubnetError, SubnetworkGraph, TargetInfo};
use tracing::debug;

impl SubnetworkGraph {
    /// Assemble the subnetwork graph described by a `TargetInfo`.
    ///
    /// Interactions are created in this order:
    ///  1. `regulon -> query` (`direct_target`) for every direct regulator,
    ///  2. `regulon -> target` (`regulon_member`) for every member of these regulons, except
    ///     the query gene itself, which is already covered by the `direct_target` interaction,
    ///  3. `query -> gene` (`adjacency_validated`) for every retained adjacency.
    ///
    /// The query gene is always the first node, so an empty `TargetInfo` still yields
    /// a single-node graph. Any non-finite weight aborts the assembly.
    pub fn from_target_info(info: &TargetInfo) -> Result<SubnetworkGraph, SubnetError> {
        let query = info.query_gene();
        let mut graph = SubnetworkGraph::new();
        graph.ensure_node(query);

        for (regulon, weight) in info.direct_regulators() {
            graph.add_interaction(regulon, query, *weight, DirectTarget)?;
        }

        for (regulon, targets) in info.regulons() {
            for (target, weight) in targets.iter() {
                if target != query {
                    graph.add_interaction(regulon, target, weight, RegulonMember)?;
                }
            }
        }

        for (gene, weight) in info.adjacencies() {
            graph.add_interaction(query, gene, *weight, AdjacencyValidated)?;
        }

        debug!(
            gene = query,
            nodes = graph.num_nodes(),
            interactions = graph.num_interactions(),
            "Subnetwork assembled."
        );
        Ok(graph)
    }
}

#[cfg(test)]
mod tests {
    use crate::adjacency::ScanConfig;
    use crate::InteractionType::{AdjacencyValidated, DirectTarget, RegulonMember};
    use crate::{
        GeneRegulon, GeneWeights, InteractionType, RegulonSet, SubnetError, SubnetworkGraph,
        TargetInfo,
    };
    use pretty_assertions::assert_eq;

    fn resolve(set: &RegulonSet, table: &str, gene: &str) -> TargetInfo {
        TargetInfo::resolve_from_reader(set, table.as_bytes(), gene, &ScanConfig::default())
            .unwrap()
            .target_info
    }

    fn edges(graph: &SubnetworkGraph) -> Vec<(String, String, f64, InteractionType)> {
        graph
            .edge_list()
            .into_iter()
            .map(|(s, t, w, k)| (s.to_string(), t.to_string(), w, k))
            .collect()
    }

    #[test]
    fn scenario_with_direct_regulator() {
        let set = RegulonSet::new(vec![
            GeneRegulon::new("T1", vec![("g", 0.8), ("a", 0.3)].into_iter().collect()),
            GeneRegulon::new("T2", vec![("b", 0.5)].into_iter().collect()),
        ]);
        let info = resolve(&set, "g,a,0.9\ng,c,0.2\n", "g");
        let graph = SubnetworkGraph::from_target_info(&info).unwrap();
        assert_eq!(
            vec![
                ("T1".to_string(), "g".to_string(), 0.8, DirectTarget),
                ("T1".to_string(), "a".to_string(), 0.3, RegulonMember),
                ("g".to_string(), "a".to_string(), 0.9, AdjacencyValidated),
            ],
            edges(&graph)
        );
        assert_eq!(3, graph.num_nodes());
    }

    #[test]
    fn scenario_without_regulators() {
        let set = RegulonSet::new(vec![GeneRegulon::new(
            "T2",
            vec![("b", 0.5)].into_iter().collect(),
        )]);
        let info = resolve(&set, "g,a,0.9\ng,c,0.2\nb,g,1.0\n", "g");
        let graph = SubnetworkGraph::from_target_info(&info).unwrap();
        assert!(graph.interactions_of_type(DirectTarget).is_empty());
        assert!(graph.interactions_of_type(RegulonMember).is_empty());
        assert_eq!(
            vec![
                ("g".to_string(), "a".to_string(), 0.9, AdjacencyValidated),
                ("g".to_string(), "c".to_string(), 0.2, AdjacencyValidated),
            ],
            edges(&graph)
        );
        let g = graph.find_node("g").unwrap();
        assert!(graph.interactions().all(|i| i.get_target() != g));
    }

    #[test]
    fn empty_result_is_a_single_node() {
        let set = RegulonSet::default();
        let info = resolve(&set, "x,a,0.9\n", "g");
        assert!(info.is_empty());
        let graph = SubnetworkGraph::from_target_info(&info).unwrap();
        assert_eq!(1, graph.num_nodes());
        assert_eq!(0, graph.num_interactions());
        assert_eq!("g", graph.get_node_name(graph.nodes().next().unwrap()));
    }

    #[test]
    fn no_member_edge_to_query_gene() {
        let set = RegulonSet::new(vec![
            GeneRegulon::new("T1", vec![("a", 0.3), ("g", 0.8)].into_iter().collect()),
            GeneRegulon::new("T3", vec![("g", 0.1), ("d", 0.6)].into_iter().collect()),
        ]);
        let info = resolve(&set, "g,d,0.5\n", "g");
        let graph = SubnetworkGraph::from_target_info(&info).unwrap();
        let g = graph.find_node("g").unwrap();
        for interaction in graph.interactions_of_type(RegulonMember) {
            assert_ne!(g, interaction.get_target());
        }
        for regulon in ["T1", "T3"] {
            let r = graph.find_node(regulon).unwrap();
            let links = graph.find_interactions(r, g);
            assert_eq!(1, links.len());
            assert_eq!(DirectTarget, links[0].get_type());
        }
        // Direct targets first, then members, then adjacencies.
        let kinds: Vec<InteractionType> = graph.interactions().map(|i| i.get_type()).collect();
        assert_eq!(
            vec![
                DirectTarget,
                DirectTarget,
                RegulonMember,
                RegulonMember,
                AdjacencyValidated
            ],
            kinds
        );
    }

    #[test]
    fn assembly_is_deterministic() {
        let set = RegulonSet::new(vec![
            GeneRegulon::new("T1", vec![("g", 0.8), ("a", 0.3)].into_iter().collect()),
            GeneRegulon::new("T2", vec![("g", 0.2), ("b", 0.5)].into_iter().collect()),
        ]);
        let table = "g,a,0.9\ng,b,0.7\ng,c,0.2\n";
        let first = SubnetworkGraph::from_target_info(&resolve(&set, table, "g")).unwrap();
        let second = SubnetworkGraph::from_target_info(&resolve(&set, table, "g")).unwrap();
        assert_eq!(edges(&first), edges(&second));
    }

    #[test]
    fn invalid_regulon_weight_aborts_assembly() {
        let targets: GeneWeights = vec![("g", 0.8), ("a", f64::INFINITY)].into_iter().collect();
        let info = TargetInfo::from_parts(
            "g",
            vec![("T1".to_string(), 0.8)],
            vec![("T1".to_string(), targets)],
            Vec::new(),
        )
        .unwrap();
        match SubnetworkGraph::from_target_info(&info) {
            Err(SubnetError::InvalidWeight { from_node, to_node, .. }) => {
                assert_eq!("T1", from_node);
                assert_eq!("a", to_node);
            }
            other => panic!("Unexpected result: {:?}", other.map(|g| g.num_interactions())),
        }
    }
}
