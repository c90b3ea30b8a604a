use crate::{DirectRegulation, GeneWeights, Regulon};
use tracing::debug;

impl DirectRegulation {
    /// Scan all `regulons` and collect the ones which directly target `gene`.
    ///
    /// For every such regulon, the weight of `gene` and the complete target set are recorded.
    /// The collection is scanned in full on every call and the results follow its iteration
    /// order. If two regulons share a name, the later one replaces the earlier one but keeps
    /// its position.
    pub fn find<'a, R, I>(regulons: I, gene: &str) -> DirectRegulation
    where
        R: Regulon + ?Sized + 'a,
        I: IntoIterator<Item = &'a R>,
    {
        let mut result = DirectRegulation {
            gene: gene.to_string(),
            direct: Vec::new(),
            members: Vec::new(),
        };
        let mut scanned = 0usize;
        for regulon in regulons {
            scanned += 1;
            let weights = regulon.gene_weights();
            if let Some(weight) = weights.get(gene) {
                result.insert(regulon.name(), weight, weights);
            }
        }
        debug!(
            gene,
            scanned,
            found = result.direct.len(),
            "Regulon lookup finished."
        );
        result
    }

    /// **(internal)** Record one regulon, keeping `direct` and `members` aligned.
    fn insert(&mut self, name: &str, weight: f64, targets: &GeneWeights) {
        if let Some(i) = self.direct.iter().position(|(n, _)| n == name) {
            self.direct[i].1 = weight;
            self.members[i].1 = targets.clone();
        } else {
            self.direct.push((name.to_string(), weight));
            self.members.push((name.to_string(), targets.clone()));
        }
    }

    /// The query gene of this lookup.
    pub fn gene(&self) -> &str {
        self.gene.as_str()
    }

    /// Regulons targeting the query gene, paired with the weight of the query gene.
    pub fn direct(&self) -> &[(String, f64)] {
        &self.direct
    }

    /// Full target sets of the regulons in `direct`, in the same order.
    pub fn members(&self) -> &[(String, GeneWeights)] {
        &self.members
    }

    /// True if no regulon targets the query gene.
    pub fn is_empty(&self) -> bool {
        self.direct.is_empty()
    }

    /// Names of the regulons targeting the query gene.
    pub fn regulon_names(&self) -> Vec<&str> {
        self.direct.iter().map(|(name, _)| name.as_str()).collect()
    }

    /// Deconstruct into the `direct` and `members` parts.
    pub fn into_parts(self) -> (Vec<(String, f64)>, Vec<(String, GeneWeights)>) {
        (self.direct, self.members)
    }
}
