use crate::gexf::{AttributeType, GexfAttribute, GexfDocument, GexfEdge, GexfNode, GEXF};
use crate::util::parse_weight;
use roxmltree::{ExpandedName, Node};

impl GexfDocument {
    /// Try to read a `GexfDocument` from a GEXF string.
    ///
    /// Dynamic graphs, hierarchies and visualisation attributes are not supported and
    /// are silently ignored.
    pub fn parse(gexf: &str) -> Result<GexfDocument, String> {
        let document =
            roxmltree::Document::parse(gexf).map_err(|e| format!("XML Error: {:?}", e))?;
        let root = document.root_element();
        if root.tag_name().name() != "gexf" {
            return Err("Root element is not <gexf>.".into());
        }
        if root.tag_name().namespace() != Some(GEXF) {
            return Err("The document does not use the GEXF 1.2 namespace.".into());
        }

        let graph = read_unique_child(root, (GEXF, "graph"))?;
        let directed = match graph.attribute("defaultedgetype") {
            Some("directed") => true,
            None | Some("undirected") => false,
            Some(other) => return Err(format!("Unsupported edge type `{}`.", other)),
        };

        let mut result = GexfDocument {
            directed,
            ..GexfDocument::default()
        };

        for attributes in child_tags(graph, (GEXF, "attributes")) {
            let declared = read_attributes(attributes)?;
            match attributes.attribute("class") {
                Some("node") => result.node_attributes.extend(declared),
                Some("edge") => result.edge_attributes.extend(declared),
                other => return Err(format!("Unknown attribute class {:?}.", other)),
            }
        }

        if let Some(nodes) = read_optional_child(graph, (GEXF, "nodes"))? {
            for node in child_tags(nodes, (GEXF, "node")) {
                let id = read_required_attribute(node, "id")?;
                let label = node.attribute("label").unwrap_or(id.as_str()).to_string();
                let values = read_values(node)?;
                result.nodes.push(GexfNode { id, label, values });
            }
        }

        if let Some(edges) = read_optional_child(graph, (GEXF, "edges"))? {
            for edge in child_tags(edges, (GEXF, "edge")) {
                let source = read_required_attribute(edge, "source")?;
                let target = read_required_attribute(edge, "target")?;
                let weight = match edge.attribute("weight") {
                    None => None,
                    Some(value) => Some(
                        parse_weight(value)
                            .ok_or_else(|| format!("Invalid edge weight `{}`.", value))?,
                    ),
                };
                let values = read_values(edge)?;
                result.edges.push(GexfEdge {
                    source,
                    target,
                    weight,
                    values,
                });
            }
        }

        Ok(result)
    }
}

fn read_attributes(list: Node) -> Result<Vec<GexfAttribute>, String> {
    let mut result = Vec::new();
    for attribute in child_tags(list, (GEXF, "attribute")) {
        let id = read_required_attribute(attribute, "id")?;
        let title = attribute.attribute("title").unwrap_or(id.as_str()).to_string();
        let kind = attribute.attribute("type").unwrap_or("string");
        let kind = AttributeType::try_from_str(kind)
            .ok_or_else(|| format!("Unsupported attribute type `{}`.", kind))?;
        result.push(GexfAttribute { id, title, kind });
    }
    Ok(result)
}

fn read_values(element: Node) -> Result<Vec<(String, String)>, String> {
    let mut result = Vec::new();
    if let Some(values) = read_optional_child(element, (GEXF, "attvalues"))? {
        for value in child_tags(values, (GEXF, "attvalue")) {
            let id = read_required_attribute(value, "for")?;
            let value = read_required_attribute(value, "value")?;
            result.push((id, value));
        }
    }
    Ok(result)
}

fn read_required_attribute(node: Node, name: &str) -> Result<String, String> {
    node.attribute(name).map(|s| s.to_string()).ok_or_else(|| {
        format!(
            "Missing attribute `{}` in <{}>.",
            name,
            node.tag_name().name()
        )
    })
}

/// **(internal)** Utility method to read child tags with a given name.
fn child_tags<'a, 'input: 'a>(
    node: Node<'a, 'input>,
    tag: (&'static str, &'static str),
) -> Vec<Node<'a, 'input>> {
    let name = ExpandedName::from(tag);
    node.children().filter(|n| n.tag_name() == name).collect()
}

/// **(internal)** Read a child tag which may appear at most once.
fn read_optional_child<'a, 'input: 'a>(
    node: Node<'a, 'input>,
    tag: (&'static str, &'static str),
) -> Result<Option<Node<'a, 'input>>, String> {
    let mut children = child_tags(node, tag);
    match children.len() {
        0 => Ok(None),
        1 => Ok(children.pop()),
        _ => Err(format!(
            "Expected at most one {} in {}.",
            tag.1,
            node.tag_name().name()
        )),
    }
}

/// **(internal)** Read a child tag which must appear exactly once.
fn read_unique_child<'a, 'input: 'a>(
    node: Node<'a, 'input>,
    tag: (&'static str, &'static str),
) -> Result<Node<'a, 'input>, String> {
    read_optional_child(node, tag)?.ok_or_else(|| {
        format!(
            "Expected one {} in {}, found none.",
            tag.1,
            node.tag_name().name()
        )
    })
}
