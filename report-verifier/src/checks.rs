//! Content predicates evaluated against the report text.
//!
//! Every check is plain substring containment over the whole text: not
//! line-anchored, not case-folded, no pattern matching.

use crate::config::FieldMarker;

/// Whether a template field has been filled in.
///
/// True iff `marker.label` occurs in `content` and `marker.placeholder` does
/// not occur anywhere. A leftover placeholder elsewhere in the file fails the
/// check even when a real value follows the label.
#[must_use]
pub fn field_filled(content: &str, marker: &FieldMarker) -> bool {
    content.contains(marker.label) && !content.contains(marker.placeholder)
}

/// Roster entries mentioned in `content`, in roster order.
///
/// Each tool is listed at most once regardless of how often it occurs.
#[must_use]
pub fn documented_tools<'r>(content: &str, roster: &[&'r str]) -> Vec<&'r str> {
    roster
        .iter()
        .copied()
        .filter(|tool| content.contains(tool))
        .collect()
}

/// Outcome of the tool documentation check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolCoverage {
    /// Tools found, in roster order.
    pub found: Vec<String>,
    /// Number of tools required.
    pub required: usize,
}

impl ToolCoverage {
    /// Scan `content` for roster tools.
    #[must_use]
    pub fn scan(content: &str, roster: &[&str], required: usize) -> Self {
        let found = documented_tools(content, roster)
            .into_iter()
            .map(str::to_owned)
            .collect();
        Self { found, required }
    }

    /// Whether enough distinct tools were documented.
    #[must_use]
    pub fn is_sufficient(&self) -> bool {
        self.found.len() >= self.required
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::TOOL_ROSTER;

    #[test]
    fn test_field_filled_requires_label() {
        assert!(!field_filled("Name: Alice", &FieldMarker::STUDENT_NAME));
        assert!(field_filled("Student Name: Alice", &FieldMarker::STUDENT_NAME));
    }

    #[test]
    fn test_placeholder_anywhere_fails_field() {
        let content = "Student Name: Alice\n# template default was [Your Name]\n";
        assert!(!field_filled(content, &FieldMarker::STUDENT_NAME));
    }

    #[test]
    fn test_field_match_is_case_sensitive() {
        assert!(!field_filled("hpc cluster: Midway3", &FieldMarker::HPC_CLUSTER));
        assert!(field_filled("HPC Cluster: Midway3", &FieldMarker::HPC_CLUSTER));
    }

    #[test]
    fn test_cluster_placeholder_fails_field() {
        let content = "HPC Cluster: [Cluster Name]";
        assert!(!field_filled(content, &FieldMarker::HPC_CLUSTER));
    }

    #[test]
    fn test_documented_tools_follow_roster_order() {
        let content = "Installed Boltz-2 first, then LocalColabFold.";
        assert_eq!(
            documented_tools(content, TOOL_ROSTER),
            vec!["LocalColabFold", "Boltz-2"]
        );
    }

    #[test]
    fn test_repeated_tool_counted_once() {
        let content = "ESMFold ESMFold ESMFold";
        assert_eq!(documented_tools(content, TOOL_ROSTER), vec!["ESMFold"]);
    }

    #[test]
    fn test_tool_threshold_boundary() {
        let two = ToolCoverage::scan("OpenFold and Chai-1", TOOL_ROSTER, 3);
        assert_eq!(two.found.len(), 2);
        assert!(!two.is_sufficient());

        let three = ToolCoverage::scan("OpenFold, Chai-1 and PLACER", TOOL_ROSTER, 3);
        assert_eq!(three.found, vec!["OpenFold", "Chai-1", "PLACER"]);
        assert!(three.is_sufficient());
    }

    #[test]
    fn test_empty_content_matches_nothing() {
        assert!(documented_tools("", TOOL_ROSTER).is_empty());
        assert!(!field_filled("", &FieldMarker::STUDENT_NAME));
    }
}
