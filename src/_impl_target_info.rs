use crate::adjacency::{AdjacencyFilter, AdjacencyScan, AdjacencyScanner, ScanConfig};
use crate::{DirectRegulation, GeneWeights, Regulon, Resolution, SubnetError, TargetInfo};
use std::io::BufRead;
use std::path::Path;
use tracing::info;

impl TargetInfo {
    /// Resolve the subnetwork of `gene` using the given `regulons` and the adjacency table
    /// stored at `adjacency_file`.
    ///
    /// The regulon lookup runs first, because its result decides how the adjacency rows
    /// are pruned (see `AdjacencyFilter::for_regulation`).
    pub fn resolve<'a, R, I>(
        regulons: I,
        adjacency_file: &Path,
        gene: &str,
        config: &ScanConfig,
    ) -> Result<Resolution, SubnetError>
    where
        R: Regulon + ?Sized + 'a,
        I: IntoIterator<Item = &'a R>,
    {
        let regulation = DirectRegulation::find(regulons, gene);
        let scanner = Self::scanner(&regulation, config);
        let scan = scanner.scan_file(adjacency_file)?;
        Ok(TargetInfo::assemble(regulation, scan))
    }

    /// Same as `TargetInfo::resolve`, but the adjacency table is read from a `reader`.
    pub fn resolve_from_reader<'a, R, I, B>(
        regulons: I,
        adjacency: B,
        gene: &str,
        config: &ScanConfig,
    ) -> Result<Resolution, SubnetError>
    where
        R: Regulon + ?Sized + 'a,
        I: IntoIterator<Item = &'a R>,
        B: BufRead,
    {
        let regulation = DirectRegulation::find(regulons, gene);
        let scanner = Self::scanner(&regulation, config);
        let scan = scanner.scan(adjacency)?;
        Ok(TargetInfo::assemble(regulation, scan))
    }

    /// **(internal)** Report the regulon lookup and build a scanner with the matching filter.
    fn scanner(regulation: &DirectRegulation, config: &ScanConfig) -> AdjacencyScanner {
        let names = regulation.regulon_names();
        info!(
            "{} is a direct target of {} regulon(s): {:?}.",
            regulation.gene(),
            names.len(),
            names
        );
        if regulation.is_empty() {
            info!(
                "No regulon targets {}, adjacencies will not be pruned.",
                regulation.gene()
            );
        }
        let filter = AdjacencyFilter::for_regulation(regulation);
        AdjacencyScanner::new(regulation.gene(), filter, config.clone())
    }

    fn assemble(regulation: DirectRegulation, scan: AdjacencyScan) -> Resolution {
        let query_gene = regulation.gene().to_string();
        let (direct_regulators, regulons) = regulation.into_parts();
        Resolution {
            target_info: TargetInfo {
                query_gene,
                direct_regulators,
                regulons,
                adjacencies: scan.adjacencies,
            },
            report: scan.report,
        }
    }

    /// Build a `TargetInfo` directly from its parts.
    ///
    /// Returns an error if the regulon names of `direct_regulators` and `regulons` differ.
    pub fn from_parts(
        query_gene: &str,
        direct_regulators: Vec<(String, f64)>,
        regulons: Vec<(String, GeneWeights)>,
        adjacencies: Vec<(String, f64)>,
    ) -> Result<TargetInfo, String> {
        let direct_names = direct_regulators.iter().map(|(n, _)| n);
        let member_names = regulons.iter().map(|(n, _)| n);
        if direct_regulators.len() != regulons.len() || !direct_names.eq(member_names) {
            return Err(
                "Direct regulators and regulon target sets must name the same regulons.".to_string(),
            );
        }
        Ok(TargetInfo {
            query_gene: query_gene.to_string(),
            direct_regulators,
            regulons,
            adjacencies,
        })
    }

    pub fn query_gene(&self) -> &str {
        self.query_gene.as_str()
    }

    /// Regulons targeting the query gene, with the weight of the query gene in each.
    pub fn direct_regulators(&self) -> &[(String, f64)] {
        &self.direct_regulators
    }

    /// Complete target sets of the regulons in `direct_regulators`.
    pub fn regulons(&self) -> &[(String, GeneWeights)] {
        &self.regulons
    }

    /// Pruned adjacencies of the query gene, in table order.
    pub fn adjacencies(&self) -> &[(String, f64)] {
        &self.adjacencies
    }

    /// True if neither a regulon nor an adjacency was found for the query gene.
    pub fn is_empty(&self) -> bool {
        self.direct_regulators.is_empty() && self.adjacencies.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use crate::adjacency::ScanConfig;
    use crate::{GeneRegulon, GeneWeights, RegulonSet, SubnetError, TargetInfo};
    use pretty_assertions::assert_eq;
    use std::io::Write;

    fn scenario_regulons() -> RegulonSet {
        RegulonSet::new(vec![
            GeneRegulon::new("T1", vec![("g", 0.8), ("a", 0.3)].into_iter().collect()),
            GeneRegulon::new("T2", vec![("b", 0.5)].into_iter().collect()),
        ])
    }

    #[test]
    fn corroborated_adjacencies_are_retained() {
        let set = scenario_regulons();
        let table = "g,a,0.9\ng,c,0.2\n";
        let resolution =
            TargetInfo::resolve_from_reader(&set, table.as_bytes(), "g", &ScanConfig::default())
                .unwrap();
        let info = resolution.target_info;
        let t1: GeneWeights = vec![("g", 0.8), ("a", 0.3)].into_iter().collect();

        assert_eq!("g", info.query_gene());
        assert_eq!(vec![("T1".to_string(), 0.8)], info.direct_regulators().to_vec());
        assert_eq!(vec![("T1".to_string(), t1)], info.regulons().to_vec());
        assert_eq!(vec![("a".to_string(), 0.9)], info.adjacencies().to_vec());
        assert_eq!(2, resolution.report.rows_matched);
        assert_eq!(1, resolution.report.rows_retained);
    }

    #[test]
    fn adjacencies_pass_through_without_regulons() {
        let set = scenario_regulons();
        let table = "q,a,0.9\nq,c,0.2\ng,a,0.1\nq,q,1.0\n";
        let resolution =
            TargetInfo::resolve_from_reader(&set, table.as_bytes(), "q", &ScanConfig::default())
                .unwrap();
        let info = resolution.target_info;
        assert!(info.direct_regulators().is_empty());
        assert!(info.regulons().is_empty());
        assert_eq!(
            vec![
                ("a".to_string(), 0.9),
                ("c".to_string(), 0.2),
                ("q".to_string(), 1.0)
            ],
            info.adjacencies().to_vec()
        );
    }

    #[test]
    fn pruning_has_no_false_negatives() {
        let set = RegulonSet::new(vec![
            GeneRegulon::new("T1", vec![("g", 0.8), ("a", 0.3)].into_iter().collect()),
            GeneRegulon::new("T2", vec![("g", 0.1), ("b", 0.5)].into_iter().collect()),
            GeneRegulon::new("T3", vec![("c", 0.5)].into_iter().collect()),
        ]);
        let table = "g,a,1\ng,b,2\ng,c,3\ng,g,4\nh,a,5\n";
        let info =
            TargetInfo::resolve_from_reader(&set, table.as_bytes(), "g", &ScanConfig::default())
                .unwrap()
                .target_info;
        let retained: Vec<&str> = info.adjacencies().iter().map(|(g, _)| g.as_str()).collect();
        assert_eq!(vec!["a", "b", "g"], retained);
        for (gene, _) in info.adjacencies() {
            assert!(info.regulons().iter().any(|(_, t)| t.contains(gene)));
        }
    }

    #[test]
    fn malformed_row_does_not_abort_resolution() {
        let set = scenario_regulons();
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "g,a,0.9\ng,a\ng,a,0.4\n").unwrap();
        let resolution =
            TargetInfo::resolve(&set, file.path(), "g", &ScanConfig::default()).unwrap();
        assert_eq!(
            vec![("a".to_string(), 0.9), ("a".to_string(), 0.4)],
            resolution.target_info.adjacencies().to_vec()
        );
        assert_eq!(1, resolution.report.skipped_count());
    }

    #[test]
    fn missing_adjacency_file_is_fatal() {
        let set = scenario_regulons();
        let dir = tempfile::tempdir().unwrap();
        let result = TargetInfo::resolve(
            &set,
            &dir.path().join("missing.csv"),
            "g",
            &ScanConfig::default(),
        );
        assert!(matches!(result, Err(SubnetError::Io { .. })));
    }

    #[test]
    fn resolution_is_idempotent() {
        let set = scenario_regulons();
        let table = "g,a,0.9\ng,c,0.2\ng,g,0.1\n";
        let first =
            TargetInfo::resolve_from_reader(&set, table.as_bytes(), "g", &ScanConfig::default())
                .unwrap();
        let second =
            TargetInfo::resolve_from_reader(&set, table.as_bytes(), "g", &ScanConfig::default())
                .unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn target_info_from_parts() {
        let t1: GeneWeights = vec![("g", 0.8)].into_iter().collect();
        let info = TargetInfo::from_parts(
            "g",
            vec![("T1".to_string(), 0.8)],
            vec![("T1".to_string(), t1.clone())],
            Vec::new(),
        )
        .unwrap();
        assert!(!info.is_empty());

        let invalid = TargetInfo::from_parts(
            "g",
            vec![("T1".to_string(), 0.8)],
            vec![("T2".to_string(), t1)],
            Vec::new(),
        );
        assert!(invalid.is_err());
        assert!(TargetInfo::from_parts("g", vec![], vec![], vec![]).unwrap().is_empty());
    }
}
