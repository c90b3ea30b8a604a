use crate::adjacency::MalformedRow;
use std::path::PathBuf;
use thiserror::Error;

/// Failures which abort a subnetwork (or GO network) extraction.
///
/// Recoverable problems, like a malformed adjacency row under the default policy, are not
/// errors: they are reported through `adjacency::ScanReport` instead.
#[derive(Debug, Error)]
pub enum SubnetError {
    #[error("I/O error on `{}`: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed adjacency row: {0}")]
    MalformedRow(MalformedRow),

    #[error("Invalid weight {weight} on edge {from_node} -> {to_node}.")]
    InvalidWeight {
        from_node: String,
        to_node: String,
        weight: f64,
    },

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Unsupported species `{0}`.")]
    UnsupportedSpecies(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Enrichment service error: {0}")]
    Enrichment(String),

    #[error("Annotation service error: {0}")]
    Annotation(String),
}

impl SubnetError {
    /// Attach a file path to an I/O error.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> SubnetError {
        SubnetError::Io {
            path: path.into(),
            source,
        }
    }
}
