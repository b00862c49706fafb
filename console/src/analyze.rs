use std::io::stdout;
use std::path::PathBuf;
use std::process::exit;

use arbor::prelude::*;
use clap::Args;
use console::style;
use itertools::Itertools;
use log::info;

use crate::strings::analyze as strings;
use crate::utils::{
    expand_wildcards,
    UtilsArgs,
};

#[derive(Args, Debug, Clone)]
pub(crate) struct AnalyzeArgs {
    #[arg(value_parser, num_args = 0.., help = strings::FILES)]
    files:               Vec<String>,
    #[arg(short, long, help = strings::CONFIG)]
    config:              Option<PathBuf>,
    #[arg(
        short,
        long = "reference",
        num_args = 1,
        help_heading = "CLASSIFIER ARGS",
        help = strings::REFERENCE
    )]
    references:          Vec<String>,
    #[arg(long, help_heading = "CLASSIFIER ARGS", help = strings::MIN_LENGTH)]
    min_length:          Option<usize>,
    #[arg(long, help_heading = "CLASSIFIER ARGS", help = strings::BUCKET_THRESHOLD)]
    bucket_threshold:    Option<f64>,
    #[arg(long, help_heading = "CLASSIFIER ARGS", help = strings::PROXIMITY_THRESHOLD)]
    proximity_threshold: Option<f64>,
}

impl AnalyzeArgs {
    /// Config file (or defaults) with command line overrides applied.
    fn resolve_config(&self) -> anyhow::Result<ArborConfig> {
        let mut config = match &self.config {
            Some(path) => ArborConfig::from_json_file(path)?,
            None => ArborConfig::default(),
        };

        if !self.files.is_empty() {
            config = config.with_input_files(expand_wildcards(&self.files));
        }
        match self.references.as_slice() {
            [] => {},
            [first, second] => {
                config = config.with_reference_ids((first.clone(), second.clone()));
            },
            other => {
                anyhow::bail!(
                    "Expected exactly two --reference values, got {}",
                    other.len()
                )
            },
        }
        if let Some(min_length) = self.min_length {
            config = config.with_min_length(min_length);
        }
        if let Some(threshold) = self.bucket_threshold {
            config = config.with_bucket_threshold(threshold);
        }
        if let Some(threshold) = self.proximity_threshold {
            config = config.with_proximity_threshold(threshold);
        }

        config.validate()?;
        Ok(config)
    }

    pub fn run(
        &self,
        utils: &UtilsArgs,
    ) -> anyhow::Result<()> {
        let config = self.resolve_config()?;

        for path in config.input_files.iter() {
            if !path.exists() {
                eprintln!("Path {} does not exist.", style(path.display()).red());
                exit(-1);
            }
            if !path.is_file() {
                eprintln!("Path {} is not a file.", style(path.display()).red());
                exit(-1);
            }
        }
        info!(
            "Analysing {} with references {} and {}",
            config
                .input_files
                .iter()
                .map(|p| p.display())
                .join(", "),
            config.reference_ids.0,
            config.reference_ids.1
        );

        let progress_bar = utils.progress_bar(config.input_files.len())?;
        let mut builder = FeatureTableBuilder::new();
        for path in config.input_files.iter() {
            progress_bar.set_message(format!("Reading {}", path.display()));
            builder.add_path(path)?;
            progress_bar.inc(1);
        }
        progress_bar.finish_and_clear();
        let table = builder.finish();

        let report = SimilarityClassifier::new(config.classifier_config())
            .classify(&table, config.reference_ids())?;
        ReportWriter::new(stdout().lock()).write_report(&report)?;
        Ok(())
    }
}
