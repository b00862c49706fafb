use std::convert::Infallible;
use std::fmt::{
    self,
    Display,
};
use std::str::FromStr;

use hashbrown::HashMap;

use crate::data_structs::coords::Interval;
use crate::getter_fn;

const REPEAT_REGION_NAME: &str = "repeat_region";
const CODING_REGION_NAME: &str = "CDS";

/// Qualifier holding the protein accession of a coding region.
pub const PROTEIN_ID_QUALIFIER: &str = "protein_id";
/// Qualifier holding the amino-acid translation of a coding region.
pub const TRANSLATION_QUALIFIER: &str = "translation";

/// Type tag of an annotated feature. Only repeat and coding regions carry
/// meaning for the analysis, every other key is kept verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum FeatureKind {
    /// `repeat_region`
    RepeatRegion,
    /// `CDS`
    CodingRegion,
    Other(String),
}

impl FromStr for FeatureKind {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s {
            REPEAT_REGION_NAME => FeatureKind::RepeatRegion,
            CODING_REGION_NAME => FeatureKind::CodingRegion,
            other => FeatureKind::Other(other.to_string()),
        })
    }
}

impl From<&str> for FeatureKind {
    fn from(value: &str) -> Self {
        match FeatureKind::from_str(value) {
            Ok(kind) => kind,
            Err(never) => match never {},
        }
    }
}

impl Display for FeatureKind {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        match self {
            FeatureKind::RepeatRegion => write!(f, "{}", REPEAT_REGION_NAME),
            FeatureKind::CodingRegion => write!(f, "{}", CODING_REGION_NAME),
            FeatureKind::Other(name) => write!(f, "{}", name),
        }
    }
}

/// A single annotated feature: type tag, location and qualifiers.
///
/// Qualifiers keep every listed value in file order; a qualifier present
/// without a value is stored as an empty string.
#[derive(Debug, Clone, PartialEq)]
pub struct AnnotatedFeature {
    kind:       FeatureKind,
    location:   Interval,
    qualifiers: HashMap<String, Vec<String>>,
}

impl AnnotatedFeature {
    getter_fn!(kind, FeatureKind);

    getter_fn!(location, Interval);

    getter_fn!(qualifiers, HashMap<String, Vec<String>>);

    pub fn new(
        kind: FeatureKind,
        location: Interval,
    ) -> Self {
        Self {
            kind,
            location,
            qualifiers: HashMap::new(),
        }
    }

    /// Appends a value to the qualifier `key`.
    pub fn with_qualifier<K: Into<String>, V: Into<String>>(
        mut self,
        key: K,
        value: V,
    ) -> Self {
        self.push_qualifier(key, value);
        self
    }

    pub fn push_qualifier<K: Into<String>, V: Into<String>>(
        &mut self,
        key: K,
        value: V,
    ) {
        self.qualifiers
            .entry(key.into())
            .or_default()
            .push(value.into());
    }

    /// All values listed for `key`, empty if the qualifier is absent.
    pub fn qualifier_values(
        &self,
        key: &str,
    ) -> &[String] {
        self.qualifiers
            .get(key)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// First listed value of `key`, if it exists and is not empty.
    pub fn first_qualifier(
        &self,
        key: &str,
    ) -> Option<&str> {
        self.qualifier_values(key)
            .first()
            .map(String::as_str)
            .filter(|value| !value.is_empty())
    }

    pub fn is_repeat_region(&self) -> bool {
        self.kind == FeatureKind::RepeatRegion
    }

    pub fn is_coding_region(&self) -> bool {
        self.kind == FeatureKind::CodingRegion
    }
}
