use std::path::PathBuf;

use clap::{
    ArgAction,
    Args,
};
use console::style;
use glob::glob;
use indicatif::{
    ProgressBar,
    ProgressStyle,
};
use log::LevelFilter;

use crate::strings::utils as strings;

#[derive(Args, Debug, Clone)]
pub(crate) struct UtilsArgs {
    #[arg(
        short,
        long,
        action = ArgAction::Count,
        help_heading = "UTILS",
        help = strings::VERBOSE
    )]
    pub verbose:  u8,
    #[arg(
        long,
        default_value_t = false,
        help_heading = "UTILS",
        help = strings::PROGRESS
    )]
    pub progress: bool,
}

impl UtilsArgs {
    pub fn setup(&self) -> anyhow::Result<()> {
        init_logger(self.verbose)
    }

    pub fn progress_bar(
        &self,
        total: usize,
    ) -> anyhow::Result<ProgressBar> {
        if self.progress {
            init_pbar(total)
        }
        else {
            Ok(ProgressBar::hidden())
        }
    }
}

pub(crate) fn init_logger(verbose: u8) -> anyhow::Result<()> {
    let mut builder = pretty_env_logger::formatted_builder();
    if let Ok(filters) = std::env::var("RUST_LOG") {
        builder.parse_filters(&filters);
    }
    else {
        builder.filter_level(match verbose {
            0 => LevelFilter::Warn,
            1 => LevelFilter::Info,
            2 => LevelFilter::Debug,
            _ => LevelFilter::Trace,
        });
    }
    builder.try_init()?;
    Ok(())
}

pub fn init_pbar(total: usize) -> anyhow::Result<ProgressBar> {
    let progress_bar = ProgressBar::new(total as u64);
    progress_bar.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos:>3.green}/{len:3} {msg}")?
            .progress_chars("#>-"),
    );
    progress_bar.set_message("Reading annotation...");
    Ok(progress_bar)
}

pub(crate) fn expand_wildcards_single(path: &str) -> Vec<PathBuf> {
    if path.contains('*') || path.contains('?') {
        match glob(path) {
            Ok(matches) => matches.filter_map(Result::ok).collect(),
            Err(e) => {
                eprintln!(
                    "Error processing wildcard '{}': {}",
                    style(path).red(),
                    e
                );
                Vec::new()
            },
        }
    }
    else {
        vec![PathBuf::from(path)]
    }
}

pub(crate) fn expand_wildcards(paths: &[String]) -> Vec<PathBuf> {
    paths
        .iter()
        .flat_map(|path| expand_wildcards_single(path))
        .collect()
}
