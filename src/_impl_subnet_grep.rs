use crate::adjacency::{ScanConfig, ScanReport};
use crate::{Regulon, SubnetError, SubnetworkGraph, TargetInfo};
use std::path::{Path, PathBuf};
use tracing::info;

/// Configuration of a single `subnet_grep` invocation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SubnetConfig {
    pub scan: ScanConfig,
    /// Directory for the default `<gene>_subnetwork.gexf` output file.
    pub output_dir: PathBuf,
    /// Explicit output file. Takes precedence over `output_dir`.
    pub output_file: Option<PathBuf>,
}

/// Everything produced by `subnet_grep`.
#[derive(Clone, Debug, PartialEq)]
pub struct SubnetGrepOutput {
    pub target_info: TargetInfo,
    pub report: ScanReport,
    pub graph: SubnetworkGraph,
    pub path: PathBuf,
}

impl Default for SubnetConfig {
    fn default() -> Self {
        SubnetConfig {
            scan: ScanConfig::default(),
            output_dir: PathBuf::from("."),
            output_file: None,
        }
    }
}

impl SubnetConfig {
    /// The file where the subnetwork of `gene` is exported.
    pub fn output_path(&self, gene: &str) -> PathBuf {
        match &self.output_file {
            Some(file) => file.clone(),
            None => self.output_dir.join(format!("{}_subnetwork.gexf", gene)),
        }
    }
}

/// Extract the second-order subnetwork of `gene` and export it as GEXF.
///
/// The subnetwork contains the regulons directly targeting `gene`, all other members of
/// these regulons, and the adjacencies of `gene` from `adjacency_file`. If at least one
/// regulon targets `gene`, only adjacencies corroborated by regulon membership are kept.
/// Malformed adjacency rows are skipped (unless `config.scan` says otherwise) and reported
/// in the output.
pub fn subnet_grep<'a, R, I>(
    regulons: I,
    adjacency_file: &Path,
    gene: &str,
    config: &SubnetConfig,
) -> Result<SubnetGrepOutput, SubnetError>
where
    R: Regulon + ?Sized + 'a,
    I: IntoIterator<Item = &'a R>,
{
    let resolution = TargetInfo::resolve(regulons, adjacency_file, gene, &config.scan)?;
    let graph = SubnetworkGraph::from_target_info(&resolution.target_info)?;
    let path = config.output_path(gene);
    graph.export_gexf(&path)?;
    info!("Network exported to {}", path.display());
    Ok(SubnetGrepOutput {
        target_info: resolution.target_info,
        report: resolution.report,
        graph,
        path,
    })
}

#[cfg(test)]
mod tests {
    use crate::adjacency::{MalformedRowPolicy, ScanConfig};
    use crate::InteractionType::{AdjacencyValidated, DirectTarget, RegulonMember};
    use crate::{subnet_grep, GeneRegulon, RegulonSet, SubnetConfig, SubnetError, SubnetworkGraph};
    use pretty_assertions::assert_eq;
    use std::path::{Path, PathBuf};

    fn regulons() -> RegulonSet {
        RegulonSet::new(vec![
            GeneRegulon::new("T1", vec![("g", 0.8), ("a", 0.3)].into_iter().collect()),
            GeneRegulon::new("T2", vec![("b", 0.5)].into_iter().collect()),
        ])
    }

    fn config(dir: &Path) -> SubnetConfig {
        SubnetConfig {
            output_dir: dir.to_path_buf(),
            ..SubnetConfig::default()
        }
    }

    #[test]
    fn output_path_naming() {
        let config = SubnetConfig::default();
        assert_eq!(PathBuf::from("./Nanog_subnetwork.gexf"), config.output_path("Nanog"));
        let config = SubnetConfig {
            output_file: Some(PathBuf::from("out.gexf")),
            ..SubnetConfig::default()
        };
        assert_eq!(PathBuf::from("out.gexf"), config.output_path("Nanog"));
    }

    #[test]
    fn subnet_grep_end_to_end() {
        let dir = tempfile::tempdir().unwrap();
        let adjacency = dir.path().join("adjacencies.csv");
        std::fs::write(&adjacency, "g,a,0.9\ng,c,0.2\ng,b\n").unwrap();

        let output = subnet_grep(&regulons(), &adjacency, "g", &config(dir.path())).unwrap();
        assert_eq!(dir.path().join("g_subnetwork.gexf"), output.path);
        assert_eq!(1, output.report.skipped_count());
        assert_eq!(
            vec![
                ("T1", "g", 0.8, DirectTarget),
                ("T1", "a", 0.3, RegulonMember),
                ("g", "a", 0.9, AdjacencyValidated),
            ],
            output.graph.edge_list()
        );

        let written = std::fs::read_to_string(&output.path).unwrap();
        let read = SubnetworkGraph::try_from_gexf(&written).unwrap();
        assert_eq!(output.graph, read);
    }

    #[test]
    fn empty_result_is_still_exported() {
        let dir = tempfile::tempdir().unwrap();
        let adjacency = dir.path().join("adjacencies.csv");
        std::fs::write(&adjacency, "x,a,0.9\n").unwrap();

        let output = subnet_grep(&regulons(), &adjacency, "q", &config(dir.path())).unwrap();
        assert!(output.target_info.is_empty());
        assert_eq!(1, output.graph.num_nodes());
        assert!(output.path.exists());
    }

    #[test]
    fn strict_scan_aborts_export() {
        let dir = tempfile::tempdir().unwrap();
        let adjacency = dir.path().join("adjacencies.csv");
        std::fs::write(&adjacency, "g,a,0.9\ng,b\n").unwrap();
        let mut config = config(dir.path());
        config.scan = ScanConfig {
            malformed_rows: MalformedRowPolicy::Fail,
            skip_header: false,
        };

        let result = subnet_grep(&regulons(), &adjacency, "g", &config);
        assert!(matches!(result, Err(SubnetError::MalformedRow(_))));
        assert!(!config.output_path("g").exists());
    }

    #[test]
    fn missing_adjacency_file_aborts_export() {
        let dir = tempfile::tempdir().unwrap();
        let config = config(dir.path());
        let result = subnet_grep(&regulons(), &dir.path().join("none.csv"), "g", &config);
        assert!(matches!(result, Err(SubnetError::Io { .. })));
        assert!(!config.output_path("g").exists());
    }
}
