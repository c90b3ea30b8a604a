//! Adds support for GEXF (Graph Exchange XML Format) export and import.
//!
//! `GexfDocument` is a neutral, already "flattened" view of an attributed graph. Typed
//! graphs of this crate are first converted into a document, which is then written as XML.

/// A very crude GEXF writer. It dumps a `GexfDocument` into a valid GEXF 1.2 file.
pub mod export;

/// Reads GEXF documents using the `roxmltree` library. Only the subset of GEXF produced by
/// the writer (static graphs with attributes) is supported.
pub mod import;

pub(crate) const GEXF: &str = "http://www.gexf.net/1.2draft";

/// Type of a declared GEXF attribute.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum AttributeType {
    Integer,
    Double,
    Boolean,
    String,
}

/// Declaration of a node or edge attribute (`<attribute id=".." title=".." type=".."/>`).
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct GexfAttribute {
    pub id: String,
    pub title: String,
    pub kind: AttributeType,
}

/// A node with its attribute values, given as `(attribute id, value)` pairs.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct GexfNode {
    pub id: String,
    pub label: String,
    pub values: Vec<(String, String)>,
}

/// An edge with an optional native `weight` and attribute values.
#[derive(Clone, Debug, PartialEq)]
pub struct GexfEdge {
    pub source: String,
    pub target: String,
    pub weight: Option<f64>,
    pub values: Vec<(String, String)>,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct GexfDocument {
    pub directed: bool,
    pub node_attributes: Vec<GexfAttribute>,
    pub edge_attributes: Vec<GexfAttribute>,
    pub nodes: Vec<GexfNode>,
    pub edges: Vec<GexfEdge>,
}

impl AttributeType {
    pub fn as_str(&self) -> &'static str {
        match self {
            AttributeType::Integer => "integer",
            AttributeType::Double => "double",
            AttributeType::Boolean => "boolean",
            AttributeType::String => "string",
        }
    }

    pub fn try_from_str(value: &str) -> Option<AttributeType> {
        match value {
            "integer" | "long" => Some(AttributeType::Integer),
            "double" | "float" => Some(AttributeType::Double),
            "boolean" => Some(AttributeType::Boolean),
            "string" => Some(AttributeType::String),
            _ => None,
        }
    }
}

impl GexfAttribute {
    pub fn new(id: &str, title: &str, kind: AttributeType) -> GexfAttribute {
        GexfAttribute {
            id: id.to_string(),
            title: title.to_string(),
            kind,
        }
    }
}

impl GexfNode {
    /// Value of the attribute with the given `id`, if set.
    pub fn value(&self, id: &str) -> Option<&str> {
        find_value(&self.values, id)
    }
}

impl GexfEdge {
    /// Value of the attribute with the given `id`, if set.
    pub fn value(&self, id: &str) -> Option<&str> {
        find_value(&self.values, id)
    }
}

impl GexfDocument {
    /// Find the id of a declared node attribute with the given `title`.
    pub fn node_attribute_id(&self, title: &str) -> Option<&str> {
        find_attribute(&self.node_attributes, title)
    }

    /// Find the id of a declared edge attribute with the given `title`.
    pub fn edge_attribute_id(&self, title: &str) -> Option<&str> {
        find_attribute(&self.edge_attributes, title)
    }
}

fn find_value<'a>(values: &'a [(String, String)], id: &str) -> Option<&'a str> {
    values
        .iter()
        .find(|(key, _)| key == id)
        .map(|(_, value)| value.as_str())
}

fn find_attribute<'a>(attributes: &'a [GexfAttribute], title: &str) -> Option<&'a str> {
    attributes
        .iter()
        .find(|a| a.title == title)
        .map(|a| a.id.as_str())
}

/// Escape the five XML special characters.
pub(crate) fn escape_xml(value: &str) -> String {
    let mut result = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => result.push_str("&amp;"),
            '<' => result.push_str("&lt;"),
            '>' => result.push_str("&gt;"),
            '"' => result.push_str("&quot;"),
            '\'' => result.push_str("&apos;"),
            _ => result.push(c),
        }
    }
    result
}
