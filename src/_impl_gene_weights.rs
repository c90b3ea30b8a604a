use crate::GeneWeights;
use std::collections::HashMap;

impl GeneWeights {
    /// Create an empty mapping.
    pub fn new() -> GeneWeights {
        GeneWeights {
            entries: Vec::new(),
            gene_to_index: HashMap::new(),
        }
    }

    /// Set the weight of `gene`.
    ///
    /// A gene that is already present keeps its position and only its weight is replaced.
    /// In that case, the previous weight is returned.
    pub fn insert(&mut self, gene: &str, weight: f64) -> Option<f64> {
        if let Some(index) = self.gene_to_index.get(gene) {
            let previous = self.entries[*index].1;
            self.entries[*index].1 = weight;
            Some(previous)
        } else {
            self.gene_to_index
                .insert(gene.to_string(), self.entries.len());
            self.entries.push((gene.to_string(), weight));
            None
        }
    }

    /// Weight of the given `gene`, or `None` if the gene is not present.
    pub fn get(&self, gene: &str) -> Option<f64> {
        self.gene_to_index.get(gene).map(|i| self.entries[*i].1)
    }

    pub fn contains(&self, gene: &str) -> bool {
        self.gene_to_index.contains_key(gene)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over `(gene, weight)` pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> + '_ {
        self.entries.iter().map(|(gene, weight)| (gene.as_str(), *weight))
    }

    /// Iterate over genes in insertion order.
    pub fn genes(&self) -> impl Iterator<Item = &str> + '_ {
        self.entries.iter().map(|(gene, _)| gene.as_str())
    }
}

impl FromIterator<(String, f64)> for GeneWeights {
    fn from_iter<T: IntoIterator<Item = (String, f64)>>(iter: T) -> Self {
        let mut weights = GeneWeights::new();
        for (gene, weight) in iter {
            weights.insert(gene.as_str(), weight);
        }
        weights
    }
}

impl<'a> FromIterator<(&'a str, f64)> for GeneWeights {
    fn from_iter<T: IntoIterator<Item = (&'a str, f64)>>(iter: T) -> Self {
        let mut weights = GeneWeights::new();
        for (gene, weight) in iter {
            weights.insert(gene, weight);
        }
        weights
    }
}
