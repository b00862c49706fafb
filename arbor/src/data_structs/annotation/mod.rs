mod feature;
mod record;

pub use feature::{
    AnnotatedFeature,
    FeatureKind,
    PROTEIN_ID_QUALIFIER,
    TRANSLATION_QUALIFIER,
};
pub use record::AnnotatedRecord;
