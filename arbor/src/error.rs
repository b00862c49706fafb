use std::path::PathBuf;

use thiserror::Error;

/// Fatal conditions of an analysis run. Both abort the run; there is no
/// partial result.
#[derive(Debug, Error)]
pub enum ArborError {
    /// Annotation file could not be opened or read.
    #[error("failed to read annotation file {}: {source}", path.display())]
    Input {
        path:   PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// Annotation record could not be parsed or converted.
    #[error("malformed annotation record in {origin}: {message}")]
    MalformedRecord { origin: String, message: String },
    /// Reference protein identifier is absent from the feature table.
    #[error("reference protein {0} not found in the feature table")]
    MissingReference(String),
}
