use crate::adjacency::AdjacencyFilter;
use crate::DirectRegulation;
use fxhash::FxHashSet;

impl AdjacencyFilter {
    /// Decide the pruning policy for the given regulon lookup.
    ///
    /// When some regulon targets the query gene, the filter accepts exactly the union of all
    /// target genes of all such regulons. Otherwise, the result is `Unfiltered`.
    pub fn for_regulation(regulation: &DirectRegulation) -> AdjacencyFilter {
        if regulation.is_empty() {
            AdjacencyFilter::Unfiltered
        } else {
            let genes: FxHashSet<String> = regulation
                .members()
                .iter()
                .flat_map(|(_, targets)| targets.genes())
                .map(|gene| gene.to_string())
                .collect();
            AdjacencyFilter::Corroborated(genes)
        }
    }

    /// True if an adjacency towards `gene` should be retained.
    pub fn accepts(&self, gene: &str) -> bool {
        match self {
            AdjacencyFilter::Corroborated(genes) => genes.contains(gene),
            AdjacencyFilter::Unfiltered => true,
        }
    }

    pub fn is_unfiltered(&self) -> bool {
        matches!(self, AdjacencyFilter::Unfiltered)
    }
}

#[cfg(test)]
mod tests {
    use crate::adjacency::AdjacencyFilter;
    use crate::{DirectRegulation, GeneRegulon, RegulonSet};

    fn regulons() -> RegulonSet {
        RegulonSet::new(vec![
            GeneRegulon::new("T1", vec![("g", 0.8), ("a", 0.3)].into_iter().collect()),
            GeneRegulon::new("T2", vec![("b", 0.5)].into_iter().collect()),
            GeneRegulon::new("T3", vec![("g", 0.1), ("d", 0.3), ("a", 0.2)].into_iter().collect()),
        ])
    }

    #[test]
    fn corroborated_filter_uses_all_member_genes() {
        let set = regulons();
        let filter = AdjacencyFilter::for_regulation(&DirectRegulation::find(&set, "g"));
        assert!(!filter.is_unfiltered());
        assert!(filter.accepts("a"));
        assert!(filter.accepts("d"));
        assert!(filter.accepts("g"));
        // `b` is only a member of T2, which does not target `g`.
        assert!(!filter.accepts("b"));
        assert!(!filter.accepts("c"));
    }

    #[test]
    fn unfiltered_without_direct_regulators() {
        let set = regulons();
        let filter = AdjacencyFilter::for_regulation(&DirectRegulation::find(&set, "c"));
        assert!(filter.is_unfiltered());
        assert!(filter.accepts("anything"));
    }
}
