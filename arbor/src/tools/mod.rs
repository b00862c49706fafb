//! Feature extraction and classification.
//!
//! - [`proximity`]: directional distance from coding regions to repeats.
//! - [`composition`]: normalized amino-acid composition vectors.
//! - [`table_builder`]: turns annotated records into a [`FeatureTable`].
//! - [`classify`]: L1 similarity to two reference proteins and the
//!   repeat-proximity filter.
//!
//! [`FeatureTable`]: crate::data_structs::FeatureTable

pub mod classify;
pub mod composition;
pub mod proximity;
pub mod table_builder;
