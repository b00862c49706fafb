pub use crate::config::ArborConfig;
pub use crate::data_structs::annotation::{
    AnnotatedFeature,
    AnnotatedRecord,
    FeatureKind,
};
pub use crate::data_structs::coords::Interval;
pub use crate::data_structs::typedef::SymbolBucket;
pub use crate::data_structs::{
    Feature,
    FeatureTable,
};
pub use crate::error::ArborError;
pub use crate::io::{
    AnnotationSource,
    GenbankReader,
    ReportWriter,
};
pub use crate::tools::classify::{
    ClassifierConfig,
    Report,
    SimilarityClassifier,
};
pub use crate::tools::table_builder::FeatureTableBuilder;
