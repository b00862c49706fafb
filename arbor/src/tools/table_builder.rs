use std::path::Path;

use anyhow::Context as AnyhowContext;
use log::{
    debug,
    info,
    trace,
};

use crate::data_structs::annotation::{
    AnnotatedFeature,
    AnnotatedRecord,
    PROTEIN_ID_QUALIFIER,
    TRANSLATION_QUALIFIER,
};
use crate::data_structs::{
    Feature,
    FeatureTable,
};
use crate::io::{
    AnnotationSource,
    GenbankReader,
};
use crate::tools::composition::vectorize;
use crate::tools::proximity::distance_to_nearest_repeat;

/// Canonical protein identifier and translation of a coding region, or
/// `None` if either is missing or empty. Such entries are expected data
/// sparsity and are left out of the table.
pub fn usable_entry(feature: &AnnotatedFeature) -> Option<(&str, &str)> {
    let protein_id = feature.first_qualifier(PROTEIN_ID_QUALIFIER)?;
    let translation = feature.first_qualifier(TRANSLATION_QUALIFIER)?;
    Some((protein_id, translation))
}

/// Accumulates records into a [`FeatureTable`].
///
/// Records are processed in the order they are added; a protein identifier
/// seen again replaces the earlier feature.
#[derive(Debug, Default)]
pub struct FeatureTableBuilder {
    table:       FeatureTable,
    records:     usize,
    coding:      usize,
    skipped:     usize,
    overwritten: usize,
}

impl FeatureTableBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds every coding region of `record`, measured against the repeat
    /// regions of the same record only.
    pub fn add_record(
        &mut self,
        record: &AnnotatedRecord,
    ) -> &mut Self {
        let repeats = record.repeat_intervals();
        trace!(
            "Record {}: {} features, {} repeat regions",
            record.name(),
            record.len(),
            repeats.len()
        );

        for cds in record.coding_regions() {
            self.coding += 1;
            let Some((protein_id, translation)) = usable_entry(cds)
            else {
                trace!(
                    "Skipping CDS at {} in {}: no protein_id or translation",
                    cds.location(),
                    record.name()
                );
                self.skipped += 1;
                continue;
            };

            let feature = Feature::new(
                translation.chars().count(),
                distance_to_nearest_repeat(cds.location(), &repeats),
                vectorize(translation),
            );
            if self.table.insert(protein_id, feature).is_some() {
                debug!("Protein {} seen again, replacing earlier entry", protein_id);
                self.overwritten += 1;
            }
        }
        self.records += 1;
        self
    }

    /// Drains an annotation source, failing on the first bad record.
    pub fn try_extend<S: AnnotationSource>(
        &mut self,
        source: S,
    ) -> anyhow::Result<&mut Self> {
        for record in source {
            self.add_record(&record?);
        }
        Ok(self)
    }

    /// Reads every record of a GenBank file.
    pub fn add_path<P: AsRef<Path>>(
        &mut self,
        path: P,
    ) -> anyhow::Result<&mut Self> {
        let path = path.as_ref();
        debug!("Reading annotation file {}", path.display());
        let reader = GenbankReader::from_path(path)?;
        self.try_extend(reader)
            .with_context(|| format!("Failed to read records from {}", path.display()))
    }

    pub fn records(&self) -> usize {
        self.records
    }

    pub fn skipped(&self) -> usize {
        self.skipped
    }

    pub fn finish(self) -> FeatureTable {
        info!(
            "Built feature table: {} proteins from {} coding regions in {} records \
             ({} skipped, {} overwritten)",
            self.table.len(),
            self.coding,
            self.records,
            self.skipped,
            self.overwritten
        );
        self.table
    }
}

/// Builds a table from in-memory records.
pub fn build<'a, I>(records: I) -> FeatureTable
where
    I: IntoIterator<Item = &'a AnnotatedRecord>, {
    let mut builder = FeatureTableBuilder::new();
    for record in records {
        builder.add_record(record);
    }
    builder.finish()
}
