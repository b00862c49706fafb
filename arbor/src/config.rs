use std::fs::File;
use std::io::BufReader;
use std::path::{
    Path,
    PathBuf,
};

use anyhow::Context as AnyhowContext;
use serde::{
    Deserialize,
    Serialize,
};

use crate::tools::classify::ClassifierConfig;
use crate::with_field_fn;

/// Reference proteins of interest, in classification order.
pub const DEFAULT_REFERENCE_IDS: (&str, &str) = ("WP_010922251.1", "WP_053019794.1");

/// Genome assemblies analysed when no inputs are given.
pub const DEFAULT_INPUT_FILES: [&str; 2] = [
    "GCF_002014815.1_ASM201481v1_genomic.gbff",
    "GCF_001239625.1_7068_7_24_genomic.gbff",
];

/// Settings of one analysis run.
///
/// Loaded from JSON with [`ArborConfig::from_json_file`]; missing keys fall
/// back to the defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ArborConfig {
    pub reference_ids:       (String, String),
    pub input_files:         Vec<PathBuf>,
    pub min_length:          usize,
    pub bucket_threshold:    f64,
    pub proximity_threshold: f64,
}

impl Default for ArborConfig {
    fn default() -> Self {
        let classifier = ClassifierConfig::default();
        Self {
            reference_ids:       (
                DEFAULT_REFERENCE_IDS.0.to_string(),
                DEFAULT_REFERENCE_IDS.1.to_string(),
            ),
            input_files:         DEFAULT_INPUT_FILES
                .iter()
                .map(PathBuf::from)
                .collect(),
            min_length:          classifier.min_length,
            bucket_threshold:    classifier.bucket_threshold,
            proximity_threshold: classifier.proximity_threshold,
        }
    }
}

impl ArborConfig {
    with_field_fn!(reference_ids, (String, String));

    with_field_fn!(input_files, Vec<PathBuf>);

    with_field_fn!(min_length, usize);

    with_field_fn!(bucket_threshold, f64);

    with_field_fn!(proximity_threshold, f64);

    pub fn from_json_file<P: AsRef<Path>>(path: P) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let file = File::open(path)
            .with_context(|| format!("Failed to open config file {}", path.display()))?;
        let config: Self = serde_json::from_reader(BufReader::new(file))
            .with_context(|| format!("Failed to parse config file {}", path.display()))?;
        Ok(config)
    }

    pub fn validate(&self) -> anyhow::Result<()> {
        anyhow::ensure!(!self.input_files.is_empty(), "No input files supplied");
        anyhow::ensure!(
            self.reference_ids.0 != self.reference_ids.1,
            "Reference proteins must differ, got {} twice",
            self.reference_ids.0
        );
        anyhow::ensure!(
            self.bucket_threshold > 0.0,
            "Bucket threshold must be positive, got {}",
            self.bucket_threshold
        );
        Ok(())
    }

    pub fn classifier_config(&self) -> ClassifierConfig {
        ClassifierConfig {
            min_length:          self.min_length,
            bucket_threshold:    self.bucket_threshold,
            proximity_threshold: self.proximity_threshold,
        }
    }

    pub fn reference_ids(&self) -> (&str, &str) {
        (&self.reference_ids.0, &self.reference_ids.1)
    }
}
