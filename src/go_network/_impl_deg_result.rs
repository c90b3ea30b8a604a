use crate::go_network::{DegResult, Direction};
use crate::util::parse_weight;
use std::collections::HashSet;

impl DegResult {
    pub fn new(group: &str, genes: Vec<(String, f64)>) -> DegResult {
        DegResult {
            group: group.to_string(),
            genes,
        }
    }

    /// Read the differential expression table of `group` from a `gene,avg_log2FC` table.
    ///
    /// Empty lines and `#` comments are ignored. The first row is a header (and is skipped)
    /// when its second column is not a number. Columns after the second are ignored.
    pub fn try_from_csv(group: &str, table: &str) -> Result<DegResult, String> {
        let mut genes = Vec::new();
        let mut first_row = true;
        for (i, line) in table.lines().enumerate() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            let fields: Vec<&str> = line.split(',').map(|f| f.trim()).collect();
            if fields.len() < 2 || fields[0].is_empty() {
                return Err(format!("Line {}: expected `gene,avg_log2FC`.", i + 1));
            }
            match parse_weight(fields[1]) {
                Some(lfc) => genes.push((fields[0].to_string(), lfc)),
                None if first_row => {}
                None => {
                    return Err(format!(
                        "Line {}: invalid log2 fold change `{}`.",
                        i + 1,
                        fields[1]
                    ))
                }
            }
            first_row = false;
        }
        Ok(DegResult::new(group, genes))
    }

    pub fn group(&self) -> &str {
        self.group.as_str()
    }

    /// `(gene, avg_log2fc)` pairs in table order.
    pub fn genes(&self) -> &[(String, f64)] {
        &self.genes
    }

    pub fn gene_names(&self) -> Vec<String> {
        self.genes.iter().map(|(gene, _)| gene.clone()).collect()
    }

    /// A copy of this result without the given genes.
    pub fn without(&self, removed: &HashSet<String>) -> DegResult {
        DegResult {
            group: self.group.clone(),
            genes: self
                .genes
                .iter()
                .filter(|(gene, _)| !removed.contains(gene))
                .cloned()
                .collect(),
        }
    }

    /// Genes regulated in the given `direction`: fold change strictly above `lfc_up`
    /// for `Up`, strictly below `lfc_down` for `Down`.
    pub fn select(&self, direction: Direction, lfc_up: f64, lfc_down: f64) -> Vec<String> {
        self.genes
            .iter()
            .filter(|(_, lfc)| match direction {
                Direction::Up => *lfc > lfc_up,
                Direction::Down => *lfc < lfc_down,
            })
            .map(|(gene, _)| gene.clone())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use crate::go_network::{DegResult, Direction};
    use pretty_assertions::assert_eq;
    use std::collections::HashSet;

    const DEG_TABLE: &str = r"gene,avg_log2FC,p_val_adj
Xist,2.5,0.001
Nanog,0.5,0.01
Sox2,0.75,0.02
# a comment
Klf4,-0.05,0.03
Myc,-1.2,0.04
";

    #[test]
    fn read_deg_table() {
        let deg = DegResult::try_from_csv("cluster_1", DEG_TABLE).unwrap();
        assert_eq!("cluster_1", deg.group());
        assert_eq!(5, deg.genes().len());
        assert_eq!(("Myc".to_string(), -1.2), deg.genes()[4]);
        assert!(DegResult::try_from_csv("x", "a,1\nb,oops").is_err());
        assert!(DegResult::try_from_csv("x", "a").is_err());
    }

    #[test]
    fn select_by_direction() {
        let deg = DegResult::try_from_csv("cluster_1", DEG_TABLE).unwrap();
        // Thresholds are strict.
        assert_eq!(vec!["Xist", "Sox2"], deg.select(Direction::Up, 0.5, -0.05));
        assert_eq!(vec!["Myc"], deg.select(Direction::Down, 0.5, -0.05));
    }

    #[test]
    fn remove_genes() {
        let deg = DegResult::try_from_csv("cluster_1", DEG_TABLE).unwrap();
        let removed: HashSet<String> = ["Xist".to_string()].into_iter().collect();
        let clean = deg.without(&removed);
        assert_eq!(4, clean.genes().len());
        assert_eq!(vec!["Sox2"], clean.select(Direction::Up, 0.5, -0.05));
        assert_eq!(5, deg.gene_names().len());
    }
}
