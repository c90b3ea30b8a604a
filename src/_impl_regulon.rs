use crate::{GeneRegulon, GeneWeights, Regulon, RegulonSet};
use std::ops::Index;

impl GeneRegulon {
    /// Create a new regulon with the given `name` and target `weights`.
    pub fn new(name: &str, weights: GeneWeights) -> GeneRegulon {
        GeneRegulon {
            name: name.to_string(),
            weights,
        }
    }

    pub fn get_name(&self) -> &String {
        &self.name
    }
}

impl Regulon for GeneRegulon {
    fn name(&self) -> &str {
        self.name.as_str()
    }

    fn gene_weights(&self) -> &GeneWeights {
        &self.weights
    }
}

impl<T: Regulon + ?Sized> Regulon for &T {
    fn name(&self) -> &str {
        (**self).name()
    }

    fn gene_weights(&self) -> &GeneWeights {
        (**self).gene_weights()
    }
}

impl<T: Regulon + ?Sized> Regulon for Box<T> {
    fn name(&self) -> &str {
        (**self).name()
    }

    fn gene_weights(&self) -> &GeneWeights {
        (**self).gene_weights()
    }
}

impl RegulonSet {
    pub fn new(regulons: Vec<GeneRegulon>) -> RegulonSet {
        RegulonSet { regulons }
    }

    pub fn push(&mut self, regulon: GeneRegulon) {
        self.regulons.push(regulon);
    }

    pub fn len(&self) -> usize {
        self.regulons.len()
    }

    pub fn is_empty(&self) -> bool {
        self.regulons.is_empty()
    }

    /// Iterate over regulons in the order in which they were added.
    pub fn iter(&self) -> std::slice::Iter<'_, GeneRegulon> {
        self.regulons.iter()
    }

    /// Find the first regulon with the given `name`.
    pub fn find_regulon(&self, name: &str) -> Option<&GeneRegulon> {
        self.regulons.iter().find(|r| r.name == name)
    }
}

impl<'a> IntoIterator for &'a RegulonSet {
    type Item = &'a GeneRegulon;
    type IntoIter = std::slice::Iter<'a, GeneRegulon>;

    fn into_iter(self) -> Self::IntoIter {
        self.regulons.iter()
    }
}

impl Index<usize> for RegulonSet {
    type Output = GeneRegulon;

    fn index(&self, index: usize) -> &Self::Output {
        &self.regulons[index]
    }
}
