//! Streaming access to a comma separated `source,target,weight` adjacency table.
//!
//! The table is read once, front to back, and only rows whose source is the query gene are
//! retained. Retained rows can be further pruned by an `AdjacencyFilter`.

use fxhash::FxHashSet;
use std::fmt::{Display, Formatter};

/// **(internal)** Implements the corroboration policy.
mod _impl_adjacency_filter;
/// **(internal)** Implements the table scanner.
mod _impl_scanner;

/// How the adjacencies of a query gene are pruned.
///
/// The policy is decided once per query, right after the regulon lookup: if some regulons
/// target the query gene, only adjacencies towards genes that are members of one of these
/// regulons are trusted. Otherwise no corroboration is possible and everything is kept.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AdjacencyFilter {
    /// Keep only rows whose target is in the set.
    Corroborated(FxHashSet<String>),
    /// Keep every row.
    Unfiltered,
}

/// What to do with a row that cannot be parsed.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum MalformedRowPolicy {
    /// Report the row in `ScanReport` and continue with the next one.
    #[default]
    Skip,
    /// Abort the whole scan with `SubnetError::MalformedRow`.
    Fail,
}

/// Options of the adjacency scan.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ScanConfig {
    pub malformed_rows: MalformedRowPolicy,
    /// Ignore the first line of the table.
    pub skip_header: bool,
}

/// Why a row was rejected.
#[derive(Clone, Debug, PartialEq)]
pub enum MalformedReason {
    /// The row has fewer than three fields (the number of fields found is given).
    MissingFields(usize),
    /// The weight field is not a finite number.
    InvalidWeight(String),
}

/// A rejected row of the adjacency table.
#[derive(Clone, Debug, PartialEq)]
pub struct MalformedRow {
    pub line_number: usize,
    pub line: String,
    pub reason: MalformedReason,
}

/// Bookkeeping of a single adjacency scan.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ScanReport {
    /// Number of non-empty rows read (including malformed ones).
    pub rows_read: usize,
    /// Number of well-formed rows whose source is the query gene.
    pub rows_matched: usize,
    /// Number of matching rows accepted by the filter.
    pub rows_retained: usize,
    /// Rows which were skipped because they could not be parsed.
    pub skipped: Vec<MalformedRow>,
}

/// Retained `(target, weight)` pairs in table order, together with a `ScanReport`.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct AdjacencyScan {
    pub adjacencies: Vec<(String, f64)>,
    pub report: ScanReport,
}

/// Reads adjacency rows of one query gene.
///
/// ```rust
/// use biodivine_lib_subnet::adjacency::{AdjacencyFilter, AdjacencyScanner, ScanConfig};
///
/// let table = "g,a,0.9\ng,c,0.2\nx,a,1.0\n";
/// let scanner = AdjacencyScanner::new("g", AdjacencyFilter::Unfiltered, ScanConfig::default());
/// let scan = scanner.scan(table.as_bytes()).unwrap();
/// assert_eq!(2, scan.adjacencies.len());
/// ```
#[derive(Clone, Debug)]
pub struct AdjacencyScanner {
    gene: String,
    filter: AdjacencyFilter,
    config: ScanConfig,
}

impl ScanReport {
    pub fn skipped_count(&self) -> usize {
        self.skipped.len()
    }
}

impl Display for MalformedReason {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            MalformedReason::MissingFields(found) => {
                write!(f, "expected 3 fields, found {}", found)
            }
            MalformedReason::InvalidWeight(weight) => write!(f, "invalid weight `{}`", weight),
        }
    }
}

impl Display for MalformedRow {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "line {} (`{}`): {}", self.line_number, self.line, self.reason)
    }
}
