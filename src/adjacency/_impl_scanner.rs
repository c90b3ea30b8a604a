use crate::adjacency::{
    AdjacencyFilter, AdjacencyScan, AdjacencyScanner, MalformedReason, MalformedRow,
    MalformedRowPolicy, ScanConfig,
};
use crate::util::parse_weight;
use crate::SubnetError;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use tracing::{debug, warn};

impl AdjacencyScanner {
    /// Create a scanner for rows of `gene`, pruned using `filter`.
    pub fn new(gene: &str, filter: AdjacencyFilter, config: ScanConfig) -> AdjacencyScanner {
        AdjacencyScanner {
            gene: gene.to_string(),
            filter,
            config,
        }
    }

    pub fn gene(&self) -> &str {
        self.gene.as_str()
    }

    pub fn filter(&self) -> &AdjacencyFilter {
        &self.filter
    }

    /// Scan the adjacency table stored in the file at `path`.
    ///
    /// The file is opened for the duration of this call only. Failing to open or read it
    /// is an error.
    pub fn scan_file(&self, path: &Path) -> Result<AdjacencyScan, SubnetError> {
        let file = File::open(path).map_err(|e| SubnetError::io(path, e))?;
        self.scan_lines(BufReader::new(file), path)
    }

    /// Scan an adjacency table provided by a `reader`.
    pub fn scan<R: BufRead>(&self, reader: R) -> Result<AdjacencyScan, SubnetError> {
        self.scan_lines(reader, Path::new("<reader>"))
    }

    fn scan_lines<R: BufRead>(&self, reader: R, source: &Path) -> Result<AdjacencyScan, SubnetError> {
        let mut result = AdjacencyScan::default();
        for (i, line) in reader.lines().enumerate() {
            let line = line.map_err(|e| SubnetError::io(source, e))?;
            let line_number = i + 1;
            if line_number == 1 && self.config.skip_header {
                continue;
            }
            let line = line.trim();
            if line.is_empty() {
                continue;
            }
            result.report.rows_read += 1;

            let (regulator, target, weight) = match parse_row(line) {
                Ok(row) => row,
                Err(reason) => {
                    let row = MalformedRow {
                        line_number,
                        line: line.to_string(),
                        reason,
                    };
                    match self.config.malformed_rows {
                        MalformedRowPolicy::Fail => return Err(SubnetError::MalformedRow(row)),
                        MalformedRowPolicy::Skip => {
                            warn!(file = %source.display(), "Skipping malformed adjacency row: {}", row);
                            result.report.skipped.push(row);
                            continue;
                        }
                    }
                }
            };

            if regulator != self.gene {
                continue;
            }
            result.report.rows_matched += 1;
            if self.filter.accepts(target) {
                result.report.rows_retained += 1;
                result.adjacencies.push((target.to_string(), weight));
            }
        }

        debug!(
            gene = self.gene.as_str(),
            read = result.report.rows_read,
            matched = result.report.rows_matched,
            retained = result.report.rows_retained,
            "Adjacency scan finished."
        );
        if !result.report.skipped.is_empty() {
            warn!(
                file = %source.display(),
                "Skipped {} malformed adjacency row(s).",
                result.report.skipped.len()
            );
        }
        Ok(result)
    }
}

/// **(internal)** Split a trimmed `source,target,weight` row. Fields beyond the third are ignored.
fn parse_row(line: &str) -> Result<(&str, &str, f64), MalformedReason> {
    let fields: Vec<&str> = line.split(',').collect();
    if fields.len() < 3 {
        return Err(MalformedReason::MissingFields(fields.len()));
    }
    let weight = parse_weight(fields[2])
        .ok_or_else(|| MalformedReason::InvalidWeight(fields[2].to_string()))?;
    Ok((fields[0], fields[1], weight))
}
