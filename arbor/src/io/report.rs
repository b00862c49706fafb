use std::io::Write;

use crate::tools::classify::Report;
use crate::utils::format_fraction;

/// Writes a classification [`Report`] as plain text.
///
/// Layout: one `Matching protein:` block per proximity match, the bucket
/// match percentage, then the reference proteins, second reference first.
pub struct ReportWriter<W: Write> {
    sink: W,
}

impl<W: Write> ReportWriter<W> {
    pub fn new(sink: W) -> Self {
        Self { sink }
    }

    pub fn write_report(
        &mut self,
        report: &Report,
    ) -> anyhow::Result<()> {
        for (_protein_id, feature) in report.proximity_matches() {
            writeln!(self.sink, "Matching protein:")?;
            writeln!(self.sink, "{}", feature)?;
            writeln!(self.sink)?;
        }

        writeln!(self.sink, "Symbol Bucket Matches:")?;
        writeln!(self.sink, "{}%", format_fraction(report.match_percentage()))?;
        writeln!(self.sink)?;

        writeln!(self.sink, "Target Proteins:")?;
        for (_protein_id, feature) in report.references().iter().rev() {
            writeln!(self.sink, "{}", feature)?;
        }
        self.sink.flush()?;
        Ok(())
    }

    pub fn into_inner(self) -> W {
        self.sink
    }
}
