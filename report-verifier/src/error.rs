//! Error types for report verification.
//!
//! A missing report is not an error: it is a failed check. `VerifyError`
//! covers only the I/O and encoding failures that stop a run from completing.

use std::path::PathBuf;

use thiserror::Error;

/// A failure that prevented verification from running to completion.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum VerifyError {
    /// The report exists but could not be opened or read.
    #[error("Failed to read report {}: {source}", path.display())]
    ReadReport {
        /// Path of the report.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The report is not valid UTF-8 text.
    #[error("Report {} is not valid UTF-8", path.display())]
    InvalidEncoding {
        /// Path of the report.
        path: PathBuf,
        /// Underlying decoding error.
        #[source]
        source: std::string::FromUtf8Error,
    },

    /// The result record could not be serialized.
    #[error("Failed to serialize verification result: {0}")]
    Serialize(#[from] serde_json::Error),

    /// The result record could not be written.
    #[error("Failed to write result {}: {source}", path.display())]
    WriteResult {
        /// Path of the result file.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },
}
