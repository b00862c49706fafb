use itertools::Itertools;

use super::AnnotatedFeature;
use crate::data_structs::coords::Interval;
use crate::getter_fn;

/// One annotated genomic record (a contig, chromosome or plasmid) with its
/// features in file order.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct AnnotatedRecord {
    name:     String,
    features: Vec<AnnotatedFeature>,
}

impl AnnotatedRecord {
    getter_fn!(name, String);

    getter_fn!(features, Vec<AnnotatedFeature>);

    pub fn new<S: Into<String>>(
        name: S,
        features: Vec<AnnotatedFeature>,
    ) -> Self {
        Self {
            name: name.into(),
            features,
        }
    }

    pub fn push(
        &mut self,
        feature: AnnotatedFeature,
    ) {
        self.features.push(feature);
    }

    /// Locations of every `repeat_region` feature in this record.
    pub fn repeat_intervals(&self) -> Vec<Interval> {
        self.features
            .iter()
            .filter(|f| f.is_repeat_region())
            .map(|f| *f.location())
            .collect_vec()
    }

    /// Iterates over the `CDS` features of this record.
    pub fn coding_regions(&self) -> impl Iterator<Item = &AnnotatedFeature> {
        self.features
            .iter()
            .filter(|f| f.is_coding_region())
    }

    pub fn len(&self) -> usize {
        self.features.len()
    }

    pub fn is_empty(&self) -> bool {
        self.features.is_empty()
    }
}
