//! Filesystem access for the report and the result record.

use std::io::Write;
use std::path::Path;

use crate::error::VerifyError;
use crate::report::CheckResults;

/// Whether a filesystem entry exists at `path`. Absence is not an error.
#[must_use]
pub fn report_exists(path: &Path) -> bool {
    path.exists()
}

/// Read the whole report as UTF-8 text.
///
/// The file handle is released before this returns.
///
/// # Errors
///
/// Returns [`VerifyError::ReadReport`] if the file cannot be opened or read,
/// and [`VerifyError::InvalidEncoding`] if it is not valid UTF-8.
pub fn read_report(path: &Path) -> Result<String, VerifyError> {
    let buffer = std::fs::read(path).map_err(|source| VerifyError::ReadReport {
        path: path.to_owned(),
        source,
    })?;

    String::from_utf8(buffer).map_err(|source| VerifyError::InvalidEncoding {
        path: path.to_owned(),
        source,
    })
}

/// Render the result record as 2-space indented JSON.
///
/// # Errors
///
/// Returns [`VerifyError::Serialize`] if serialization fails.
pub fn result_json(results: &CheckResults) -> Result<String, VerifyError> {
    Ok(serde_json::to_string_pretty(results)?)
}

/// Write the result record to `path`, replacing any previous content.
///
/// # Errors
///
/// Returns [`VerifyError::Serialize`] or [`VerifyError::WriteResult`].
pub fn write_result(path: &Path, results: &CheckResults) -> Result<(), VerifyError> {
    let json = result_json(results)?;
    let write_err = |source| VerifyError::WriteResult {
        path: path.to_owned(),
        source,
    };

    let mut file = std::fs::File::create(path).map_err(write_err)?;
    file.write_all(json.as_bytes()).map_err(write_err)?;
    file.flush().map_err(write_err)
}
