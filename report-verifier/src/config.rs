//! Configuration types for report verification.
//!
//! Everything the checker needs is fixed at compile time, but it is still
//! gathered into one struct and handed to [`crate::verify`] explicitly. The
//! binary always uses [`VerifierConfig::default`]; tests point the paths at
//! temporary directories.

use std::path::PathBuf;

/// Default location of the student's report, relative to the working directory.
pub const DEFAULT_REPORT_PATH: &str = "installation_report.txt";

/// Default location of the autograder result record.
pub const DEFAULT_RESULT_PATH: &str = "verification_result.json";

/// Minimum number of roster tools that must be documented.
pub const DEFAULT_MIN_TOOLS: usize = 3;

/// Tools students are expected to install and document, in display order.
pub const TOOL_ROSTER: &[&str] = &[
    "LocalColabFold",
    "LigandMPNN",
    "RFdiffusion2",
    "ESMFold",
    "OpenFold",
    "Chai-1",
    "Boltz-2",
    "DiffDock-PP",
    "PLACER",
];

/// A labelled field in the report template.
///
/// The field counts as filled when `label` occurs somewhere in the report and
/// the template's `placeholder` occurs nowhere.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldMarker {
    /// Label text, e.g. `Student Name:`.
    pub label: &'static str,
    /// Unfilled template value, e.g. `[Your Name]`.
    pub placeholder: &'static str,
}

impl FieldMarker {
    /// The student name field.
    pub const STUDENT_NAME: Self = Self {
        label: "Student Name:",
        placeholder: "[Your Name]",
    };

    /// The HPC cluster field.
    pub const HPC_CLUSTER: Self = Self {
        label: "HPC Cluster:",
        placeholder: "[Cluster Name]",
    };
}

/// Fixed configuration for a verification run.
#[derive(Debug, Clone)]
#[non_exhaustive]
pub struct VerifierConfig {
    /// Report to inspect.
    pub report_path: PathBuf,
    /// Where the JSON result record is written (overwritten every run).
    pub result_path: PathBuf,
    /// Marker for the student name field.
    pub name_field: FieldMarker,
    /// Marker for the HPC cluster field.
    pub cluster_field: FieldMarker,
    /// Known tool names, in the order they are reported.
    pub tool_roster: &'static [&'static str],
    /// Minimum number of distinct roster tools for the tool check to pass.
    pub min_tools: usize,
}

impl Default for VerifierConfig {
    fn default() -> Self {
        Self {
            report_path: PathBuf::from(DEFAULT_REPORT_PATH),
            result_path: PathBuf::from(DEFAULT_RESULT_PATH),
            name_field: FieldMarker::STUDENT_NAME,
            cluster_field: FieldMarker::HPC_CLUSTER,
            tool_roster: TOOL_ROSTER,
            min_tools: DEFAULT_MIN_TOOLS,
        }
    }
}

impl VerifierConfig {
    /// Display name of the report (its file name, falling back to the full path).
    #[must_use]
    pub fn report_display_name(&self) -> String {
        self.report_path.file_name().map_or_else(
            || self.report_path.display().to_string(),
            |name| name.to_string_lossy().into_owned(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_uses_fixed_paths() {
        let cfg = VerifierConfig::default();
        assert_eq!(cfg.report_path, PathBuf::from("installation_report.txt"));
        assert_eq!(cfg.result_path, PathBuf::from("verification_result.json"));
        assert_eq!(cfg.min_tools, 3);
        assert_eq!(cfg.tool_roster.len(), 9);
    }

    #[test]
    fn test_roster_order() {
        assert_eq!(TOOL_ROSTER.first(), Some(&"LocalColabFold"));
        assert_eq!(TOOL_ROSTER.get(6), Some(&"Boltz-2"));
        assert_eq!(TOOL_ROSTER.last(), Some(&"PLACER"));
    }

    #[test]
    fn test_report_display_name_strips_directories() {
        let mut cfg = VerifierConfig::default();
        cfg.report_path = PathBuf::from("/tmp/submission/installation_report.txt");
        assert_eq!(cfg.report_display_name(), "installation_report.txt");
    }
}
