use crate::{Interaction, InteractionType, Node, NodeId};
use std::fmt::{Display, Error, Formatter};
use std::str::FromStr;

impl From<usize> for NodeId {
    fn from(val: usize) -> Self {
        NodeId(val)
    }
}

impl From<NodeId> for usize {
    fn from(value: NodeId) -> Self {
        value.0
    }
}

impl Display for NodeId {
    fn fmt(&self, f: &mut Formatter) -> Result<(), Error> {
        write!(f, "SubnetNode({})", self.0)
    }
}

impl Display for Node {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), Error> {
        write!(f, "{}", self.name)
    }
}

impl Node {
    /// Gene or regulon identifier of this node.
    pub fn get_name(&self) -> &String {
        &self.name
    }

    /// Significance attached to this node, if any.
    pub fn get_pval(&self) -> Option<f64> {
        self.pval
    }
}

impl InteractionType {
    /// All interaction types, in the order in which the assembler emits them.
    pub const ALL: [InteractionType; 3] = [
        InteractionType::DirectTarget,
        InteractionType::RegulonMember,
        InteractionType::AdjacencyValidated,
    ];

    /// The name used for this type in exported graphs.
    pub fn as_str(&self) -> &'static str {
        match self {
            InteractionType::DirectTarget => "direct_target",
            InteractionType::RegulonMember => "regulon_member",
            InteractionType::AdjacencyValidated => "adjacency_validated",
        }
    }
}

impl Display for InteractionType {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), Error> {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for InteractionType {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        InteractionType::ALL
            .iter()
            .find(|kind| kind.as_str() == value)
            .cloned()
            .ok_or_else(|| format!("Unknown interaction type `{}`.", value))
    }
}

impl Interaction {
    pub fn get_source(&self) -> NodeId {
        self.source
    }

    pub fn get_target(&self) -> NodeId {
        self.target
    }

    pub fn get_weight(&self) -> f64 {
        self.weight
    }

    pub fn get_type(&self) -> InteractionType {
        self.kind
    }
}
