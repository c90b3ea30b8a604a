use crate::gexf::{AttributeType, GexfAttribute, GexfDocument, GexfEdge, GexfNode};
use crate::util::parse_weight;
use crate::{InteractionType, SubnetError, SubnetworkGraph};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;
use std::str::FromStr;

const PVAL_ATTRIBUTE: &str = "0";
const TYPE_ATTRIBUTE: &str = "1";

impl SubnetworkGraph {
    /// Convert this graph into a directed `GexfDocument`.
    ///
    /// Node ids and labels are the node names. Nodes declare a `pval` attribute (only written
    /// when set), edges carry the native GEXF `weight` and a `type` attribute with
    /// the name of the `InteractionType`.
    pub fn to_gexf_document(&self) -> GexfDocument {
        let nodes = self
            .nodes()
            .map(|id| {
                let node = self.get_node(id);
                let values = match node.get_pval() {
                    Some(pval) => vec![(PVAL_ATTRIBUTE.to_string(), pval.to_string())],
                    None => Vec::new(),
                };
                GexfNode {
                    id: node.get_name().clone(),
                    label: node.get_name().clone(),
                    values,
                }
            })
            .collect();
        let edges = self
            .interactions()
            .map(|i| GexfEdge {
                source: self.get_node_name(i.get_source()).clone(),
                target: self.get_node_name(i.get_target()).clone(),
                weight: Some(i.get_weight()),
                values: vec![(TYPE_ATTRIBUTE.to_string(), i.get_type().to_string())],
            })
            .collect();
        GexfDocument {
            directed: true,
            node_attributes: vec![GexfAttribute::new(
                PVAL_ATTRIBUTE,
                "pval",
                AttributeType::Double,
            )],
            edge_attributes: vec![GexfAttribute::new(
                TYPE_ATTRIBUTE,
                "type",
                AttributeType::String,
            )],
            nodes,
            edges,
        }
    }

    /// Export this graph to a GEXF string.
    pub fn to_gexf(&self) -> String {
        self.to_gexf_document().to_gexf()
    }

    pub fn write_as_gexf(&self, output: &mut dyn Write) -> Result<(), std::io::Error> {
        self.to_gexf_document().write(output)
    }

    /// Write this graph as a GEXF file at `path`, replacing any existing file.
    pub fn export_gexf(&self, path: &Path) -> Result<(), SubnetError> {
        let file = File::create(path).map_err(|e| SubnetError::io(path, e))?;
        let mut writer = BufWriter::new(file);
        self.write_as_gexf(&mut writer)
            .and_then(|_| writer.flush())
            .map_err(|e| SubnetError::io(path, e))
    }

    /// Read a `SubnetworkGraph` back from a directed GEXF document.
    ///
    /// Every edge must have a weight and a valid `type` attribute.
    pub fn try_from_gexf(gexf: &str) -> Result<SubnetworkGraph, String> {
        let document = GexfDocument::parse(gexf)?;
        if !document.directed {
            return Err("Subnetwork graphs must be directed.".to_string());
        }
        let pval_id = document.node_attribute_id("pval");
        let type_id = document
            .edge_attribute_id("type")
            .ok_or("Missing edge attribute `type`.")?;

        let mut graph = SubnetworkGraph::new();
        for node in &document.nodes {
            let id = graph.ensure_node(&node.id);
            if let Some(pval) = pval_id.and_then(|attr| node.value(attr)) {
                let pval = parse_weight(pval).ok_or(format!("Invalid pval `{}`.", pval))?;
                graph.set_node_pval(id, Some(pval));
            }
        }
        for edge in &document.edges {
            let weight = edge
                .weight
                .ok_or(format!("Edge {} -> {} has no weight.", edge.source, edge.target))?;
            let kind = edge
                .value(type_id)
                .ok_or(format!("Edge {} -> {} has no type.", edge.source, edge.target))?;
            let kind = InteractionType::from_str(kind)?;
            graph
                .add_interaction(&edge.source, &edge.target, weight, kind)
                .map_err(|e| e.to_string())?;
        }
        Ok(graph)
    }
}
