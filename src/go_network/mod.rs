//! Networks of enriched GO terms built from differential expression results.
//!
//! The statistics (GO enrichment) and the chromosome annotation of genes are provided by
//! external services, represented here by the `EnrichmentService` and `ChromosomeAnnotation`
//! traits. This module selects the gene lists, calls the services, and turns the enrichment
//! table into an undirected "enrichment map" of overlapping terms, exported as GEXF.

use crate::SubnetError;
use std::collections::HashMap;
use std::path::PathBuf;

/// **(internal)** Reading and filtering differential expression results.
mod _impl_deg_result;
/// **(internal)** The orchestration of the whole GO network pipeline.
mod _impl_go_net;
/// **(internal)** Enrichment map construction and export.
mod _impl_term_network;

pub use _impl_go_net::go_net;

/// Differentially expressed genes of one group, with their average log2 fold change.
#[derive(Clone, Debug, PartialEq)]
pub struct DegResult {
    group: String,
    genes: Vec<(String, f64)>,
}

/// Direction of differential expression.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Direction {
    Up,
    Down,
}

/// A query sent to an `EnrichmentService`.
#[derive(Clone, Debug, PartialEq)]
pub struct EnrichmentRequest<'a> {
    pub genes: &'a [String],
    /// Organism name as understood by the service (e.g. `Mouse`).
    pub organism: &'a str,
    /// Name of the gene set library (e.g. `GO_Biological_Process_2023`).
    pub gene_sets: &'a str,
    /// Significance cutoff on the adjusted p-value.
    pub cutoff: f64,
}

/// One row of an enrichment result table.
#[derive(Clone, Debug, PartialEq)]
pub struct EnrichmentTerm {
    pub term: String,
    pub adjusted_p_value: f64,
    /// Genes of the query list that overlap the term's gene set.
    pub genes: Vec<String>,
}

/// An external GO enrichment service.
pub trait EnrichmentService {
    fn enrich(&self, request: &EnrichmentRequest) -> Result<Vec<EnrichmentTerm>, SubnetError>;
}

/// An external source of gene annotations.
pub trait ChromosomeAnnotation {
    /// Map genes of `species` to the names of their chromosomes. Genes without
    /// an annotation can be omitted from the result.
    fn chromosomes(
        &self,
        species: &str,
        genes: &[String],
    ) -> Result<HashMap<String, String>, SubnetError>;
}

/// Options of the GO network pipeline.
#[derive(Clone, Debug, PartialEq)]
pub struct GoNetConfig {
    /// Species name, e.g. `mmusculus`.
    pub species: String,
    pub out_dir: PathBuf,
    /// Genes with log2 fold change strictly above this value are up-regulated.
    pub lfc_up: f64,
    /// Genes with log2 fold change strictly below this value are down-regulated.
    pub lfc_down: f64,
    /// Remove genes located on the X and Y chromosomes before the selection.
    pub remove_sex_genes: bool,
    /// Gene lists shorter than this are not sent for enrichment.
    pub min_genes: usize,
    pub gene_sets: String,
    pub cutoff: f64,
    /// Maximal number of terms in the enrichment map.
    pub top_term: usize,
}

/// A node of a `TermNetwork`.
#[derive(Clone, Debug, PartialEq)]
pub struct TermNode {
    term: String,
    pval: f64,
}

/// An undirected edge between two terms which share some genes.
#[derive(Clone, Debug, PartialEq)]
pub struct TermOverlap {
    source: usize,
    target: usize,
    jaccard: f64,
    overlap: f64,
    intersection: Vec<String>,
}

/// An enrichment map: enriched terms connected by the overlap of their gene sets.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TermNetwork {
    terms: Vec<TermNode>,
    overlaps: Vec<TermOverlap>,
}

/// What happened with one selected gene list.
#[derive(Clone, Debug, PartialEq)]
pub enum ListOutcome {
    /// The list was shorter than `GoNetConfig::min_genes`.
    Skipped,
    /// The list was enriched and the resulting network exported to `path`.
    Enriched {
        terms: Vec<EnrichmentTerm>,
        network: TermNetwork,
        path: PathBuf,
    },
}

/// One group/direction gene list of a GO network run.
#[derive(Clone, Debug, PartialEq)]
pub struct GeneListResult {
    pub group: String,
    pub direction: Direction,
    pub genes: Vec<String>,
    pub outcome: ListOutcome,
}

impl Direction {
    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::Up => "up",
            Direction::Down => "down",
        }
    }
}

impl std::fmt::Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl Default for GoNetConfig {
    fn default() -> Self {
        GoNetConfig {
            species: "mmusculus".to_string(),
            out_dir: PathBuf::from("."),
            lfc_up: 0.5,
            lfc_down: -0.05,
            remove_sex_genes: true,
            min_genes: 30,
            gene_sets: "GO_Biological_Process_2023".to_string(),
            cutoff: 0.05,
            top_term: 300,
        }
    }
}

impl GoNetConfig {
    /// The file where the network of one group/direction is exported.
    pub fn output_path(&self, group: &str, direction: Direction) -> PathBuf {
        self.out_dir
            .join(format!("GOnet_{}_{}.gexf", group, direction.as_str()))
    }
}

/// Translate a species name into the organism name used by enrichment services.
pub fn organism_for_species(species: &str) -> Result<&'static str, SubnetError> {
    match species {
        "mmusculus" => Ok("Mouse"),
        "hsapiens" => Ok("Human"),
        _ => Err(SubnetError::UnsupportedSpecies(species.to_string())),
    }
}
