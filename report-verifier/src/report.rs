//! Verification result types.

use serde::Serialize;

/// The four-check record persisted for the autograder.
///
/// Field order is the serialized key order.
#[derive(Debug, Clone, Copy, Default, Serialize, PartialEq, Eq)]
#[allow(clippy::struct_excessive_bools)]
pub struct CheckResults {
    /// The report file exists.
    pub report_exists: bool,
    /// At least the minimum number of roster tools are documented.
    pub report_has_content: bool,
    /// The HPC cluster field is filled in.
    pub has_cluster_info: bool,
    /// The student name field is filled in.
    pub student_name_filled: bool,
}

impl CheckResults {
    /// Number of checks in the record.
    pub const TOTAL: usize = 4;

    /// Number of checks that passed.
    #[must_use]
    pub fn passed(&self) -> usize {
        [
            self.report_exists,
            self.report_has_content,
            self.has_cluster_info,
            self.student_name_filled,
        ]
        .into_iter()
        .filter(|ok| *ok)
        .count()
    }

    /// Whether every check passed.
    #[must_use]
    pub fn all_passed(&self) -> bool {
        self.passed() == Self::TOTAL
    }
}

/// Result of a verification run.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub struct Verification {
    /// Display name of the inspected report.
    pub report_name: String,
    /// The check record.
    pub results: CheckResults,
    /// Tools found in roster order; `None` when the report does not exist.
    pub tools_found: Option<Vec<String>>,
    /// Minimum number of tools that was required.
    pub min_tools: usize,
}

impl Verification {
    /// Process exit status for this outcome: 0 when all checks pass, 1 otherwise.
    #[must_use]
    pub fn exit_code(&self) -> i32 {
        i32::from(!self.results.all_passed())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_record_fails_everything() {
        let results = CheckResults::default();
        assert_eq!(results.passed(), 0);
        assert!(!results.all_passed());
    }

    #[test]
    fn test_partial_record_counts() {
        let results = CheckResults {
            report_exists: true,
            report_has_content: true,
            has_cluster_info: false,
            student_name_filled: true,
        };
        assert_eq!(results.passed(), 3);
        assert!(!results.all_passed());
    }

    #[test]
    fn test_exit_code_tracks_full_success() {
        let mut verification = Verification {
            report_name: "installation_report.txt".to_owned(),
            results: CheckResults {
                report_exists: true,
                report_has_content: true,
                has_cluster_info: true,
                student_name_filled: true,
            },
            tools_found: Some(vec![]),
            min_tools: 3,
        };
        assert_eq!(verification.exit_code(), 0);
        verification.results.has_cluster_info = false;
        assert_eq!(verification.exit_code(), 1);
    }

    #[test]
    fn test_serialized_key_order() {
        let json = serde_json::to_string(&CheckResults::default()).unwrap();
        assert_eq!(
            json,
            r#"{"report_exists":false,"report_has_content":false,"has_cluster_info":false,"student_name_filled":false}"#
        );
    }
}
