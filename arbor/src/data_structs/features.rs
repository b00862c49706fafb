use std::fmt::{
    self,
    Display,
};

use indexmap::IndexMap;
use itertools::Itertools;

use crate::data_structs::typedef::{
    ProteinId,
    SymbolBucket,
};
use crate::error::ArborError;
use crate::utils::{
    format_distance,
    format_fraction,
};

/// Per-protein feature vector: translation length, distance to the nearest
/// repeat region of the same record and amino-acid composition.
#[derive(Debug, Clone, PartialEq)]
pub struct Feature {
    /// Number of residues in the translation. Always positive.
    length:        usize,
    /// Directional distance to the closest repeat region, `+inf` if the
    /// record has none. Negative when the intervals overlap.
    min_distance:  f64,
    /// `count(symbol) / length` for every symbol present in the translation.
    symbol_bucket: SymbolBucket,
}

impl Feature {
    pub fn new(
        length: usize,
        min_distance: f64,
        symbol_bucket: SymbolBucket,
    ) -> Self {
        Self {
            length,
            min_distance,
            symbol_bucket,
        }
    }

    pub fn length(&self) -> usize {
        self.length
    }

    pub fn min_distance(&self) -> f64 {
        self.min_distance
    }

    pub fn symbol_bucket(&self) -> &SymbolBucket {
        &self.symbol_bucket
    }
}

/// Three-line dump: `length`, `minDistance` and `symbolBucket`. The bucket
/// is rendered as `{'A': 0.5, 'C': 0.5}` in first-occurrence order.
impl Display for Feature {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        let bucket = self
            .symbol_bucket
            .iter()
            .map(|(symbol, fraction)| format!("'{}': {}", symbol, format_fraction(*fraction)))
            .join(", ");
        write!(
            f,
            "length: {}\nminDistance: {}\nsymbolBucket: {{{}}}",
            self.length,
            format_distance(self.min_distance),
            bucket
        )
    }
}

/// Protein identifier to [`Feature`] mapping.
///
/// Inserting an identifier that is already present replaces its feature but
/// keeps the slot of the first insertion, so iteration follows the order in
/// which identifiers were first seen.
#[derive(Debug, Clone, Default)]
pub struct FeatureTable {
    entries: IndexMap<ProteinId, Feature>,
}

impl FeatureTable {
    pub fn new() -> Self {
        Self {
            entries: IndexMap::new(),
        }
    }

    /// Inserts a feature, returning the one it replaced.
    pub fn insert<S: Into<ProteinId>>(
        &mut self,
        protein_id: S,
        feature: Feature,
    ) -> Option<Feature> {
        self.entries
            .insert(protein_id.into(), feature)
    }

    pub fn get(
        &self,
        protein_id: &str,
    ) -> Option<&Feature> {
        self.entries.get(protein_id)
    }

    /// Looks up a feature that must be present.
    pub fn try_get(
        &self,
        protein_id: &str,
    ) -> Result<&Feature, ArborError> {
        self.get(protein_id)
            .ok_or_else(|| ArborError::MissingReference(protein_id.to_string()))
    }

    pub fn contains(
        &self,
        protein_id: &str,
    ) -> bool {
        self.entries.contains_key(protein_id)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&ProteinId, &Feature)> {
        self.entries.iter()
    }

    pub fn ids(&self) -> impl Iterator<Item = &ProteinId> {
        self.entries.keys()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bucket(pairs: &[(char, f64)]) -> SymbolBucket {
        pairs.iter().copied().collect()
    }

    #[test]
    fn test_feature_display() {
        let feature = Feature::new(4, 50.0, bucket(&[('M', 0.25), ('K', 0.75)]));
        assert_eq!(
            feature.to_string(),
            "length: 4\nminDistance: 50\nsymbolBucket: {'M': 0.25, 'K': 0.75}"
        );
    }

    #[test]
    fn test_feature_display_infinite_distance() {
        let feature = Feature::new(1, f64::INFINITY, bucket(&[('M', 1.0)]));
        assert_eq!(
            feature.to_string(),
            "length: 1\nminDistance: inf\nsymbolBucket: {'M': 1.0}"
        );
    }

    #[test]
    fn test_table_last_write_wins() {
        let mut table = FeatureTable::new();
        assert!(table
            .insert("WP_1.1", Feature::new(3, 10.0, bucket(&[('A', 1.0)])))
            .is_none());
        table.insert("WP_2.1", Feature::new(5, 20.0, bucket(&[('C', 1.0)])));
        let replaced = table.insert("WP_1.1", Feature::new(7, 30.0, bucket(&[('G', 1.0)])));

        assert_eq!(replaced.map(|f| f.length()), Some(3));
        assert_eq!(table.len(), 2);
        assert_eq!(table.get("WP_1.1").unwrap().length(), 7);
        // Overwrite keeps the first-seen position.
        assert_eq!(table.ids().collect_vec(), vec!["WP_1.1", "WP_2.1"]);
    }

    #[test]
    fn test_table_try_get_missing() {
        let table = FeatureTable::new();
        assert!(table.is_empty());
        assert!(!table.contains("WP_404.1"));
        let err = table.try_get("WP_404.1").unwrap_err();
        assert!(matches!(err, ArborError::MissingReference(ref id) if id == "WP_404.1"));
    }
}
