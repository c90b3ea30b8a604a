//! Extraction of query-gene subnetworks from regulon-based gene regulatory networks.
//!
//! Given a collection of regulons (named, weighted target sets of presumed transcription
//! factors), an adjacency table of weighted gene-gene candidate edges and a query gene, the
//! library collects the regulons directly targeting the gene, their complete membership,
//! and the adjacencies of the gene which are corroborated by shared regulon membership.
//! The result is assembled into a typed directed graph that can be exported to GEXF.

use std::collections::HashMap;
use std::iter::Map;
use std::ops::Range;

pub mod adjacency;
pub mod gexf;
pub mod go_network;

/// **(internal)** The `SubnetError` type used by fallible pipeline operations.
mod error;
/// **(internal)** Utility methods for `GeneWeights`.
mod _impl_gene_weights;
/// **(internal)** Utility methods for `GeneRegulon` and `RegulonSet`.
mod _impl_regulon;
/// **(internal)** Reading `RegulonSet` from a `regulon,target,weight` table.
mod _impl_regulon_table;
/// **(internal)** Lookup of regulons targeting a query gene.
mod _impl_direct_regulation;
/// **(internal)** Resolution of `TargetInfo` from regulons and an adjacency table.
mod _impl_target_info;
/// **(internal)** Utility methods for `NodeId`, `Node` and `InteractionType`.
mod _impl_node;
/// **(internal)** Construction and inspection of `SubnetworkGraph`.
mod _impl_subnetwork_graph;
/// **(internal)** Assembly of a `SubnetworkGraph` from a `TargetInfo`.
mod _impl_subnetwork_graph_assembly;
/// **(internal)** `SubnetworkGraph` to and from GEXF.
mod _impl_subnetwork_graph_gexf;
/// **(internal)** `SubnetworkGraph` to GraphViz `.dot`.
mod _impl_subnetwork_graph_to_dot;
/// **(internal)** The one-shot `subnet_grep` entry point and its configuration.
mod _impl_subnet_grep;
/// **(internal)** Small helpers shared by the rest of the crate.
mod util;

pub use _impl_subnet_grep::{subnet_grep, SubnetConfig, SubnetGrepOutput};
pub use error::SubnetError;

/// A capability which exposes the two members the subnetwork extraction reads from a regulon:
/// its `name` and its weighted target genes.
///
/// Implement this for any regulon representation produced by an external inference tool.
/// The crate itself provides `GeneRegulon`.
pub trait Regulon {
    /// Unique name of this regulon (typically derived from the transcription factor).
    fn name(&self) -> &str;

    /// Target genes of this regulon together with their regulatory weights.
    fn gene_weights(&self) -> &GeneWeights;
}

/// An insertion-ordered mapping from gene identifiers to regulatory weights.
///
/// Iteration always follows the order in which the genes were first inserted, which makes
/// every derived structure (and the exported graph) reproducible.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct GeneWeights {
    entries: Vec<(String, f64)>,
    gene_to_index: HashMap<String, usize>,
}

/// A regulon given by its `name` and its `GeneWeights`.
#[derive(Clone, Debug, PartialEq)]
pub struct GeneRegulon {
    name: String,
    weights: GeneWeights,
}

/// An ordered collection of `GeneRegulon` objects.
///
/// Can be read from a simple comma separated table (see `RegulonSet::try_from_table`).
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RegulonSet {
    regulons: Vec<GeneRegulon>,
}

/// Regulons that directly target one query gene.
///
/// `direct` maps each regulon name to the weight of the query gene in that regulon, and
/// `members` maps the same names (in the same order) to the full target set of the regulon.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct DirectRegulation {
    gene: String,
    direct: Vec<(String, f64)>,
    members: Vec<(String, GeneWeights)>,
}

/// The result of a subnetwork resolution for a single query gene.
///
///  - `direct_regulators`: regulons that target the query gene, with the weight of the gene.
///  - `regulons`: full target sets of exactly those regulons.
///  - `adjacencies`: adjacency table rows of the query gene that survived pruning.
#[derive(Clone, Debug, PartialEq)]
pub struct TargetInfo {
    query_gene: String,
    direct_regulators: Vec<(String, f64)>,
    regulons: Vec<(String, GeneWeights)>,
    adjacencies: Vec<(String, f64)>,
}

/// A `TargetInfo` together with the report of the adjacency scan that produced it.
#[derive(Clone, Debug, PartialEq)]
pub struct Resolution {
    pub target_info: TargetInfo,
    pub report: adjacency::ScanReport,
}

/// A type-safe index of a `Node` inside a `SubnetworkGraph`.
///
/// Genes and regulons share one namespace: a regulon name and a gene identifier which
/// coincide refer to the same node.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct NodeId(usize);

/// A node of a `SubnetworkGraph`: a gene or a regulon, identified by its `name`.
#[derive(Clone, Debug, PartialEq)]
pub struct Node {
    name: String,
    pval: Option<f64>,
}

/// The semantic category of an `Interaction`.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum InteractionType {
    /// A regulon targeting the query gene.
    DirectTarget,
    /// A regulon targeting some other gene.
    RegulonMember,
    /// An adjacency of the query gene supported by shared regulon membership.
    AdjacencyValidated,
}

/// A weighted, typed edge of a `SubnetworkGraph`.
#[derive(Clone, Debug, PartialEq)]
pub struct Interaction {
    source: NodeId,
    target: NodeId,
    weight: f64,
    kind: InteractionType,
}

/// A directed graph of genes and regulons centred around a query gene.
///
/// Nodes are interned by name in the order of their first appearance. Interactions are kept
/// in insertion order and are never merged, so one pair of nodes can be connected by several
/// interactions.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SubnetworkGraph {
    nodes: Vec<Node>,
    interactions: Vec<Interaction>,
    node_to_index: HashMap<String, NodeId>,
}

/// An iterator over all `NodeId`s of a `SubnetworkGraph`.
pub type NodeIdIterator = Map<Range<usize>, fn(usize) -> NodeId>;

/// An iterator over all `Interaction`s of a `SubnetworkGraph`.
pub type InteractionIterator<'a> = std::slice::Iter<'a, Interaction>;
