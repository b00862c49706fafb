//! # arbor
//!
//! `arbor` measures, for every protein-coding gene of a set of annotated
//! bacterial genomes, how close it lies to the nearest repeat region and
//! what its amino-acid composition looks like, then scores every protein
//! against two reference proteins of interest.
//!
//! If you do not want to use arbor as a crate, check out the `arbor`
//! command-line tool in the `console` workspace member.
//!
//! ## Pipeline
//!
//! 1. GenBank records are read with [`GenbankReader`] (backed by `gb-io`)
//!    into [`AnnotatedRecord`]s.
//! 2. [`FeatureTableBuilder`] turns every `CDS` carrying a `protein_id` and a
//!    `translation` into a [`Feature`]: translation length, distance to the
//!    nearest `repeat_region` of the same record and composition vector.
//! 3. [`SimilarityClassifier`] compares every composition vector to the two
//!    references with an asymmetric L1 distance, counts long proteins that
//!    are close but not identical to a reference and lists long proteins
//!    close to a repeat.
//! 4. [`ReportWriter`] prints the result.
//!
//! ## Structure
//!
//! * [`data_structs`]: annotation data model, [`Interval`], [`Feature`] and
//!   [`FeatureTable`].
//! * [`io`]: GenBank input and text report output.
//! * [`tools`]: proximity, composition, table building and classification.
//! * [`config`]: [`ArborConfig`], the run settings.
//!
//! ## Usage
//!
//! ```no_run
//! use std::io::stdout;
//! use arbor::prelude::*;
//!
//! fn main() -> anyhow::Result<()> {
//!     let config = ArborConfig::default();
//!
//!     let mut builder = FeatureTableBuilder::new();
//!     for path in config.input_files.iter() {
//!         builder.add_path(path)?;
//!     }
//!     let table = builder.finish();
//!
//!     let report = SimilarityClassifier::new(config.classifier_config())
//!         .classify(&table, config.reference_ids())?;
//!     ReportWriter::new(stdout().lock()).write_report(&report)?;
//!     Ok(())
//! }
//! ```

pub mod config;
pub mod data_structs;
pub mod error;
pub mod io;
pub mod prelude;
pub mod tools;
pub mod utils;

#[allow(unused_imports)]
use prelude::*;
