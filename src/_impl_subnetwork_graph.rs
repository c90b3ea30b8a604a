use crate::{
    Interaction, InteractionIterator, InteractionType, Node, NodeId, NodeIdIterator,
    SubnetError, SubnetworkGraph,
};
use std::collections::HashMap;
use std::ops::Index;

/// Methods for safely constructing new instances of `SubnetworkGraph`s.
impl SubnetworkGraph {
    /// Create an empty `SubnetworkGraph`.
    pub fn new() -> SubnetworkGraph {
        SubnetworkGraph {
            nodes: Vec::new(),
            interactions: Vec::new(),
            node_to_index: HashMap::new(),
        }
    }

    /// Find or create the node with the given `name`.
    pub fn ensure_node(&mut self, name: &str) -> NodeId {
        if let Some(id) = self.find_node(name) {
            id
        } else {
            let id = NodeId(self.nodes.len());
            self.nodes.push(Node {
                name: name.to_string(),
                pval: None,
            });
            self.node_to_index.insert(name.to_string(), id);
            id
        }
    }

    /// Attach a significance value to a node.
    pub fn set_node_pval(&mut self, id: NodeId, pval: Option<f64>) {
        self.nodes[id.0].pval = pval;
    }

    /// Add a new `Interaction` from `source` to `target`, creating the nodes when necessary.
    ///
    /// Interactions are never merged: adding the same pair twice creates two interactions.
    /// Returns `Err` if `weight` is not a finite number.
    pub fn add_interaction(
        &mut self,
        source: &str,
        target: &str,
        weight: f64,
        kind: InteractionType,
    ) -> Result<(), SubnetError> {
        if !weight.is_finite() {
            return Err(SubnetError::InvalidWeight {
                from_node: source.to_string(),
                to_node: target.to_string(),
                weight,
            });
        }
        let source = self.ensure_node(source);
        let target = self.ensure_node(target);
        self.interactions.push(Interaction {
            source,
            target,
            weight,
            kind,
        });
        Ok(())
    }
}

/// Some basic utility methods for inspecting the `SubnetworkGraph`.
impl SubnetworkGraph {
    pub fn num_nodes(&self) -> usize {
        self.nodes.len()
    }

    pub fn num_interactions(&self) -> usize {
        self.interactions.len()
    }

    /// Find a `NodeId` for the given name, or `None` if the node does not exist.
    pub fn find_node(&self, name: &str) -> Option<NodeId> {
        self.node_to_index.get(name).cloned()
    }

    pub fn get_node(&self, id: NodeId) -> &Node {
        &self.nodes[id.0]
    }

    /// Shorthand for `self.get_node(id).get_name()`.
    pub fn get_node_name(&self, id: NodeId) -> &String {
        &self.nodes[id.0].name
    }

    /// Return an iterator over all node ids of this graph.
    pub fn nodes(&self) -> NodeIdIterator {
        (0..self.nodes.len()).map(NodeId)
    }

    /// Return an iterator over all interactions in insertion order.
    pub fn interactions(&self) -> InteractionIterator {
        self.interactions.iter()
    }

    /// All interactions of the given type, in insertion order.
    pub fn interactions_of_type(&self, kind: InteractionType) -> Vec<&Interaction> {
        self.interactions.iter().filter(|i| i.kind == kind).collect()
    }

    /// All interactions from `source` to `target` (there can be more than one).
    pub fn find_interactions(&self, source: NodeId, target: NodeId) -> Vec<&Interaction> {
        self.interactions
            .iter()
            .filter(|i| i.source == source && i.target == target)
            .collect()
    }

    /// Interactions as `(source name, target name, weight, type)` tuples.
    pub fn edge_list(&self) -> Vec<(&str, &str, f64, InteractionType)> {
        self.interactions
            .iter()
            .map(|i| {
                (
                    self.get_node_name(i.source).as_str(),
                    self.get_node_name(i.target).as_str(),
                    i.weight,
                    i.kind,
                )
            })
            .collect()
    }
}

/// Allow indexing `SubnetworkGraph` using `NodeId` objects.
impl Index<NodeId> for SubnetworkGraph {
    type Output = Node;

    fn index(&self, index: NodeId) -> &Self::Output {
        self.get_node(index)
    }
}
