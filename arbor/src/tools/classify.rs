use log::{
    debug,
    info,
};
use serde::{
    Deserialize,
    Serialize,
};

use crate::data_structs::typedef::SymbolBucket;
use crate::data_structs::{
    Feature,
    FeatureTable,
};
use crate::with_field_fn;

/// Asymmetric L1 distance between two composition vectors.
///
/// Only symbols present in `reference` are summed; symbols that appear only
/// in `candidate` contribute nothing. The reference vector must always be
/// passed first.
pub fn l1_distance(
    reference: &SymbolBucket,
    candidate: &SymbolBucket,
) -> f64 {
    reference
        .iter()
        .map(|(symbol, fraction)| {
            (fraction - candidate.get(symbol).copied().unwrap_or(0.0)).abs()
        })
        .sum()
}

/// Thresholds of the similarity and proximity checks. All comparisons are
/// strict.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ClassifierConfig {
    /// Proteins must be longer than this to match.
    pub min_length:          usize,
    /// Upper bound of the L1 distance for a bucket match.
    pub bucket_threshold:    f64,
    /// Upper bound of the repeat distance for a proximity match.
    pub proximity_threshold: f64,
}

impl Default for ClassifierConfig {
    fn default() -> Self {
        Self {
            min_length:          1000,
            bucket_threshold:    0.2,
            proximity_threshold: 5000.0,
        }
    }
}

impl ClassifierConfig {
    with_field_fn!(min_length, usize);

    with_field_fn!(bucket_threshold, f64);

    with_field_fn!(proximity_threshold, f64);

    /// `0 < distance < bucket_threshold`. A zero distance is taken as the
    /// reference matching itself and rejected.
    fn is_close(
        &self,
        distance: f64,
    ) -> bool {
        distance > 0.0 && distance < self.bucket_threshold
    }

    pub fn is_bucket_match(
        &self,
        feature: &Feature,
        distances: (f64, f64),
    ) -> bool {
        feature.length() > self.min_length
            && (self.is_close(distances.0) || self.is_close(distances.1))
    }

    pub fn is_proximity_match(
        &self,
        feature: &Feature,
    ) -> bool {
        feature.min_distance() < self.proximity_threshold
            && feature.length() > self.min_length
    }
}

/// Result of classifying a [`FeatureTable`] against two reference proteins.
#[derive(Debug, Clone)]
pub struct Report<'a> {
    match_count:       usize,
    total:             usize,
    proximity_matches: Vec<(&'a str, &'a Feature)>,
    references:        [(&'a str, &'a Feature); 2],
}

impl<'a> Report<'a> {
    /// Number of bucket matches.
    pub fn match_count(&self) -> usize {
        self.match_count
    }

    /// Number of proteins that were classified.
    pub fn total(&self) -> usize {
        self.total
    }

    /// Bucket matches as a percentage of every classified protein.
    pub fn match_percentage(&self) -> f64 {
        self.match_count as f64 / self.total as f64 * 100.0
    }

    /// Long proteins close to a repeat region, in table order.
    pub fn proximity_matches(&self) -> &[(&'a str, &'a Feature)] {
        &self.proximity_matches
    }

    /// The first and second reference protein, in configuration order.
    pub fn references(&self) -> &[(&'a str, &'a Feature); 2] {
        &self.references
    }
}

/// Scores every protein of a table against two reference proteins.
#[derive(Debug, Clone, Default)]
pub struct SimilarityClassifier {
    config: ClassifierConfig,
}

impl SimilarityClassifier {
    pub fn new(config: ClassifierConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ClassifierConfig {
        &self.config
    }

    /// Classifies every protein of `table`.
    ///
    /// Fails with [`ArborError::MissingReference`] if either reference
    /// identifier is absent.
    ///
    /// [`ArborError::MissingReference`]: crate::error::ArborError::MissingReference
    pub fn classify<'a>(
        &self,
        table: &'a FeatureTable,
        reference_ids: (&'a str, &'a str),
    ) -> anyhow::Result<Report<'a>> {
        let first = table.try_get(reference_ids.0)?;
        let second = table.try_get(reference_ids.1)?;
        debug!(
            "Classifying {} proteins against {} and {}",
            table.len(),
            reference_ids.0,
            reference_ids.1
        );

        let mut match_count = 0;
        let mut proximity_matches = Vec::new();
        for (protein_id, feature) in table.iter() {
            let distances = (
                l1_distance(first.symbol_bucket(), feature.symbol_bucket()),
                l1_distance(second.symbol_bucket(), feature.symbol_bucket()),
            );
            if self.config.is_bucket_match(feature, distances) {
                debug!(
                    "Bucket match {}: distances {:.4} / {:.4}",
                    protein_id, distances.0, distances.1
                );
                match_count += 1;
            }
            if self.config.is_proximity_match(feature) {
                proximity_matches.push((protein_id.as_str(), feature));
            }
        }

        info!(
            "{} bucket matches and {} proximity matches among {} proteins",
            match_count,
            proximity_matches.len(),
            table.len()
        );

        Ok(Report {
            match_count,
            total: table.len(),
            proximity_matches,
            references: [(reference_ids.0, first), (reference_ids.1, second)],
        })
    }
}
