//! Core data structures of the `arbor` crate.
//!
//! - [`annotation`]: the annotation data model consumed from the parser:
//!   [`AnnotatedRecord`] with its [`AnnotatedFeature`]s.
//! - [`coords`]: half-open genomic [`Interval`]s.
//! - [`Feature`] and [`FeatureTable`]: the per-protein feature vectors built
//!   from the annotation and consumed by the classifier.
//! - [`typedef`]: type aliases for positions, symbols and composition
//!   vectors.

pub mod annotation;
pub mod coords;
mod features;
pub mod typedef;

pub use annotation::{
    AnnotatedFeature,
    AnnotatedRecord,
    FeatureKind,
};
pub use coords::Interval;
pub use features::{
    Feature,
    FeatureTable,
};
