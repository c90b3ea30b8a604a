use crate::util::parse_weight;
use crate::{GeneRegulon, GeneWeights, RegulonSet, SubnetError};
use lazy_static::lazy_static;
use regex::Regex;
use std::collections::HashMap;
use std::convert::TryFrom;
use std::path::Path;

lazy_static! {
    /// Matches one `regulon,target,weight` line. Names cannot contain commas or whitespace.
    static ref REGULON_ROW: Regex =
        Regex::new(r"^\s*([^,\s]+)\s*,\s*([^,\s]+)\s*,\s*([^,]*?)\s*$").unwrap();
}

impl RegulonSet {
    /// Read a `RegulonSet` from a comma separated `regulon,target,weight` table.
    ///
    /// Empty lines and lines starting with `#` are ignored. The first row is treated as
    /// a header (and skipped) when its weight column is not a number. Regulons are created
    /// in the order in which their names first appear in the table.
    pub fn try_from_table(table: &str) -> Result<RegulonSet, String> {
        let mut names: Vec<String> = Vec::new();
        let mut weights: HashMap<String, GeneWeights> = HashMap::new();
        let mut first_row = true;
        for (i, line) in table.lines().enumerate() {
            let line_number = i + 1;
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            let Some(captures) = REGULON_ROW.captures(line) else {
                return Err(format!(
                    "Line {}: expected `regulon,target,weight`, found `{}`.",
                    line_number, line
                ));
            };
            let regulon = &captures[1];
            let target = &captures[2];
            let Some(weight) = parse_weight(&captures[3]) else {
                if first_row {
                    first_row = false;
                    continue; // Header.
                }
                return Err(format!(
                    "Line {}: invalid weight `{}`.",
                    line_number, &captures[3]
                ));
            };
            first_row = false;

            let regulon_weights = weights.entry(regulon.to_string()).or_insert_with(|| {
                names.push(regulon.to_string());
                GeneWeights::new()
            });
            if regulon_weights.insert(target, weight).is_some() {
                return Err(format!(
                    "Line {}: duplicate target `{}` in regulon `{}`.",
                    line_number, target, regulon
                ));
            }
        }

        let regulons = names
            .into_iter()
            .map(|name| {
                let targets = weights.remove(&name).unwrap_or_default();
                GeneRegulon::new(name.as_str(), targets)
            })
            .collect();
        Ok(RegulonSet::new(regulons))
    }

    /// Read a regulon table from a file. See `RegulonSet::try_from_table`.
    pub fn try_from_table_file(path: &Path) -> Result<RegulonSet, SubnetError> {
        let table = std::fs::read_to_string(path).map_err(|e| SubnetError::io(path, e))?;
        RegulonSet::try_from_table(table.as_str()).map_err(SubnetError::InvalidInput)
    }
}

impl TryFrom<&str> for RegulonSet {
    type Error = String;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        RegulonSet::try_from_table(value)
    }
}

#[cfg(test)]
mod tests {
    use crate::{Regulon, RegulonSet};
    use pretty_assertions::assert_eq;
    use std::convert::TryFrom;
    use std::io::Write;

    const REGULON_TABLE: &str = r"# regulons exported from a GRN inference run
TF,target,importance
Sox2(+), Nanog, 2.5
Sox2(+),Pou5f1,1.25
Klf4(+),Nanog,-0.5

Sox2(+),Klf4,0.75
";

    #[test]
    fn read_regulon_table() {
        let set = RegulonSet::try_from(REGULON_TABLE).unwrap();
        assert_eq!(2, set.len());

        let sox2 = &set[0];
        assert_eq!("Sox2(+)", sox2.name());
        let targets: Vec<(&str, f64)> = sox2.gene_weights().iter().collect();
        assert_eq!(
            vec![("Nanog", 2.5), ("Pou5f1", 1.25), ("Klf4", 0.75)],
            targets
        );

        let klf4 = &set[1];
        assert_eq!("Klf4(+)", klf4.name());
        assert_eq!(Some(-0.5), klf4.gene_weights().get("Nanog"));
    }

    #[test]
    fn read_regulon_table_without_header() {
        let set = RegulonSet::try_from_table("T1,g,0.8\nT1,a,0.3\nT2,b,0.5").unwrap();
        assert_eq!(2, set.len());
        assert_eq!(2, set[0].gene_weights().len());
    }

    #[test]
    fn invalid_regulon_tables() {
        let err = RegulonSet::try_from_table("T1,g,0.8\nT1,a,abc").unwrap_err();
        assert!(err.contains("Line 2"));
        assert!(RegulonSet::try_from_table("T1,g,0.8\nT1,g,0.3").is_err());
        assert!(RegulonSet::try_from_table("T1,g").is_err());
        assert!(RegulonSet::try_from_table("T1,g,0.8\nT1,a,NaN").is_err());
        assert!(RegulonSet::try_from_table("").unwrap().is_empty());
    }

    #[test]
    fn read_regulon_table_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "{}", REGULON_TABLE).unwrap();
        let set = RegulonSet::try_from_table_file(file.path()).unwrap();
        assert_eq!(2, set.len());

        let missing = file.path().with_extension("missing");
        assert!(RegulonSet::try_from_table_file(&missing).is_err());
    }
}
