//! # report-verifier
//!
//! Verifier for the ML tool installation homework report.
//!
//! The report is a plain-text file. It passes when the student name and HPC
//! cluster fields are filled in and at least three tools from
//! [`TOOL_ROSTER`] are mentioned. Results are persisted as a four-field JSON
//! record for the autograder.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use report_verifier::{VerifierConfig, persist, verify};
//!
//! let config = VerifierConfig::default();
//! let verification = verify(&config).unwrap();
//! persist(&config, &verification.results).unwrap();
//! println!("{}/4 checks passed", verification.results.passed());
//! ```

mod checks;
mod config;
mod error;
pub mod output;
mod report;
mod source;

pub use checks::{ToolCoverage, documented_tools, field_filled};
pub use config::{
    DEFAULT_MIN_TOOLS, DEFAULT_REPORT_PATH, DEFAULT_RESULT_PATH, FieldMarker, TOOL_ROSTER,
    VerifierConfig,
};
pub use error::VerifyError;
pub use report::{CheckResults, Verification};

use tracing::{debug, info};

/// Run every check against the configured report.
///
/// A missing report is a normal outcome: `report_exists` is `false`, the
/// content checks stay `false` and `tools_found` is `None`. Otherwise the
/// report is read once and each content check runs against that text.
///
/// # Errors
///
/// Returns an error if the report exists but cannot be read as UTF-8 text.
pub fn verify(config: &VerifierConfig) -> Result<Verification, VerifyError> {
    let report_name = config.report_display_name();
    let mut results = CheckResults::default();

    if !source::report_exists(&config.report_path) {
        info!(path = %config.report_path.display(), "report not found");
        return Ok(Verification {
            report_name,
            results,
            tools_found: None,
            min_tools: config.min_tools,
        });
    }
    results.report_exists = true;

    let content = source::read_report(&config.report_path)?;
    debug!(bytes = content.len(), "report read");

    results.student_name_filled = field_filled(&content, &config.name_field);
    debug!(filled = results.student_name_filled, label = config.name_field.label, "name field");

    results.has_cluster_info = field_filled(&content, &config.cluster_field);
    debug!(filled = results.has_cluster_info, label = config.cluster_field.label, "cluster field");

    let coverage = ToolCoverage::scan(&content, config.tool_roster, config.min_tools);
    results.report_has_content = coverage.is_sufficient();
    debug!(found = ?coverage.found, required = coverage.required, "tool coverage");

    info!(passed = results.passed(), total = CheckResults::TOTAL, "verification complete");
    Ok(Verification {
        report_name,
        results,
        tools_found: Some(coverage.found),
        min_tools: config.min_tools,
    })
}

/// Write the result record to `config.result_path`, overwriting it.
///
/// # Errors
///
/// Returns an error if the record cannot be serialized or written.
pub fn persist(config: &VerifierConfig, results: &CheckResults) -> Result<(), VerifyError> {
    source::write_result(&config.result_path, results)?;
    info!(path = %config.result_path.display(), "result record written");
    Ok(())
}
