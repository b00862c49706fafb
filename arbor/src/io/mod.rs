//! Input and output of the analysis: GenBank annotation records in, a plain
//! text report out.

mod genbank;
mod report;

pub use genbank::{
    AnnotationSource,
    GenbankReader,
};
pub use report::ReportWriter;
