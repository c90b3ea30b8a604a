use crate::gexf::{AttributeType, GexfAttribute, GexfDocument, GexfEdge, GexfNode};
use crate::go_network::{EnrichmentTerm, TermNetwork, TermNode, TermOverlap};
use crate::SubnetError;
use std::collections::{BTreeSet, HashMap};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

impl TermNetwork {
    /// Build an enrichment map from an enrichment result table.
    ///
    /// Terms with adjusted p-value above `cutoff` are dropped, the rest is ordered by the
    /// adjusted p-value (ties keep the table order) and only the first `top_term` terms
    /// are used. Every pair of terms sharing at least one gene is connected, with the
    /// Jaccard and overlap coefficients of their gene sets. Terms without any connection
    /// are not part of the network.
    pub fn enrichment_map(terms: &[EnrichmentTerm], cutoff: f64, top_term: usize) -> TermNetwork {
        let mut selected: Vec<&EnrichmentTerm> = terms
            .iter()
            .filter(|t| t.adjusted_p_value <= cutoff)
            .collect();
        selected.sort_by(|a, b| a.adjusted_p_value.total_cmp(&b.adjusted_p_value));
        selected.truncate(top_term);

        let gene_sets: Vec<BTreeSet<&str>> = selected
            .iter()
            .map(|t| t.genes.iter().map(|g| g.as_str()).collect())
            .collect();

        let mut network = TermNetwork::default();
        let mut term_to_index: HashMap<String, usize> = HashMap::new();
        for i in 0..selected.len() {
            for j in (i + 1)..selected.len() {
                let intersection: Vec<String> = gene_sets[i]
                    .intersection(&gene_sets[j])
                    .map(|g| g.to_string())
                    .collect();
                if intersection.is_empty() {
                    continue;
                }
                let union = gene_sets[i].union(&gene_sets[j]).count();
                let smaller = gene_sets[i].len().min(gene_sets[j].len());
                let source = network.ensure_term(&mut term_to_index, selected[i]);
                let target = network.ensure_term(&mut term_to_index, selected[j]);
                network.overlaps.push(TermOverlap {
                    source,
                    target,
                    jaccard: intersection.len() as f64 / union as f64,
                    overlap: intersection.len() as f64 / smaller as f64,
                    intersection,
                });
            }
        }
        network
    }

    /// **(internal)** Find or create the node of `term`.
    fn ensure_term(
        &mut self,
        term_to_index: &mut HashMap<String, usize>,
        term: &EnrichmentTerm,
    ) -> usize {
        if let Some(index) = term_to_index.get(&term.term) {
            return *index;
        }
        let index = self.terms.len();
        self.terms.push(TermNode {
            term: term.term.clone(),
            pval: term.adjusted_p_value,
        });
        term_to_index.insert(term.term.clone(), index);
        index
    }

    pub fn num_terms(&self) -> usize {
        self.terms.len()
    }

    pub fn num_overlaps(&self) -> usize {
        self.overlaps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    pub fn terms(&self) -> &[TermNode] {
        &self.terms
    }

    pub fn overlaps(&self) -> &[TermOverlap] {
        &self.overlaps
    }

    /// Convert this network into an undirected `GexfDocument` with a `pval` node
    /// attribute and `jaccard`, `overlap` and `intersection` edge attributes.
    pub fn to_gexf_document(&self) -> GexfDocument {
        let nodes = self
            .terms
            .iter()
            .map(|t| GexfNode {
                id: t.term.clone(),
                label: t.term.clone(),
                values: vec![("0".to_string(), t.pval.to_string())],
            })
            .collect();
        let edges = self
            .overlaps
            .iter()
            .map(|o| GexfEdge {
                source: self.terms[o.source].term.clone(),
                target: self.terms[o.target].term.clone(),
                weight: None,
                values: vec![
                    ("0".to_string(), o.jaccard.to_string()),
                    ("1".to_string(), o.overlap.to_string()),
                    ("2".to_string(), o.intersection.join(",")),
                ],
            })
            .collect();
        GexfDocument {
            directed: false,
            node_attributes: vec![GexfAttribute::new("0", "pval", AttributeType::Double)],
            edge_attributes: vec![
                GexfAttribute::new("0", "jaccard", AttributeType::Double),
                GexfAttribute::new("1", "overlap", AttributeType::Double),
                GexfAttribute::new("2", "intersection", AttributeType::String),
            ],
            nodes,
            edges,
        }
    }

    pub fn to_gexf(&self) -> String {
        self.to_gexf_document().to_gexf()
    }

    /// Write this network as a GEXF file at `path`.
    pub fn export_gexf(&self, path: &Path) -> Result<(), SubnetError> {
        let file = File::create(path).map_err(|e| SubnetError::io(path, e))?;
        let mut writer = BufWriter::new(file);
        self.to_gexf_document()
            .write(&mut writer)
            .and_then(|_| writer.flush())
            .map_err(|e| SubnetError::io(path, e))
    }
}

impl TermNode {
    pub fn get_term(&self) -> &String {
        &self.term
    }

    pub fn get_pval(&self) -> f64 {
        self.pval
    }
}

impl TermOverlap {
    /// Indices of the two connected terms in `TermNetwork::terms`.
    pub fn get_terms(&self) -> (usize, usize) {
        (self.source, self.target)
    }

    pub fn get_jaccard(&self) -> f64 {
        self.jaccard
    }

    pub fn get_overlap(&self) -> f64 {
        self.overlap
    }

    /// Shared genes, sorted.
    pub fn get_intersection(&self) -> &[String] {
        &self.intersection
    }
}

#[cfg(test)]
mod tests {
    use crate::gexf::GexfDocument;
    use crate::go_network::{EnrichmentTerm, TermNetwork};
    use pretty_assertions::assert_eq;

    fn term(name: &str, pval: f64, genes: &[&str]) -> EnrichmentTerm {
        EnrichmentTerm {
            term: name.to_string(),
            adjusted_p_value: pval,
            genes: genes.iter().map(|g| g.to_string()).collect(),
        }
    }

    fn table() -> Vec<EnrichmentTerm> {
        vec![
            term("cell cycle", 0.02, &["Ccnb1", "Cdk1", "Mki67"]),
            term("mitotic division", 0.001, &["Cdk1", "Mki67"]),
            term("apoptosis", 0.01, &["Casp3", "Bax"]),
            term("DNA repair", 0.5, &["Cdk1", "Brca1"]),
        ]
    }

    #[test]
    fn enrichment_map_connects_overlapping_terms() {
        let network = TermNetwork::enrichment_map(&table(), 0.05, 300);
        // `apoptosis` has no overlap and `DNA repair` is not significant.
        assert_eq!(2, network.num_terms());
        assert_eq!(1, network.num_overlaps());
        assert_eq!("mitotic division", network.terms()[0].get_term());
        assert_eq!(0.001, network.terms()[0].get_pval());

        let overlap = &network.overlaps()[0];
        assert_eq!((0, 1), overlap.get_terms());
        assert_eq!(vec!["Cdk1", "Mki67"], overlap.get_intersection().to_vec());
        assert!((overlap.get_jaccard() - 2.0 / 3.0).abs() < 1e-12);
        assert_eq!(1.0, overlap.get_overlap());
    }

    #[test]
    fn enrichment_map_respects_top_term() {
        let network = TermNetwork::enrichment_map(&table(), 0.05, 1);
        assert!(network.is_empty());
        let network = TermNetwork::enrichment_map(&table(), 1.0, 300);
        // With the cutoff relaxed, `DNA repair` overlaps both cell cycle terms.
        assert_eq!(3, network.num_terms());
        assert_eq!(3, network.num_overlaps());
    }

    #[test]
    fn term_network_gexf() {
        let network = TermNetwork::enrichment_map(&table(), 0.05, 300);
        let document = GexfDocument::parse(&network.to_gexf()).unwrap();
        assert!(!document.directed);
        assert_eq!(Some("0"), document.node_attribute_id("pval"));
        assert_eq!(Some("2"), document.edge_attribute_id("intersection"));
        assert_eq!(2, document.nodes.len());
        assert_eq!(Some("0.001"), document.nodes[0].value("0"));
        assert_eq!(None, document.edges[0].weight);
        assert_eq!(Some("Cdk1,Mki67"), document.edges[0].value("2"));
        assert_eq!(Some("1"), document.edges[0].value("1"));
    }
}
