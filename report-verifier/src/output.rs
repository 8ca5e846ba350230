//! Console rendering for a [`Verification`].
//!
//! Split in two so the caller can persist the result record between the check
//! lines and the summary.

use std::io::Write;

use crate::report::{CheckResults, Verification};

const PASS: &str = "\u{2713}";
const FAIL: &str = "\u{2717}";

fn glyph(ok: bool) -> &'static str {
    if ok { PASS } else { FAIL }
}

/// Write one status line per check, then the found-tools line.
///
/// # Errors
///
/// Returns an error if writing fails.
pub fn write_checks(verification: &Verification, writer: &mut dyn Write) -> std::io::Result<()> {
    let results = &verification.results;
    let Some(tools) = &verification.tools_found else {
        writeln!(writer, "{FAIL} {} not found", verification.report_name)?;
        return Ok(());
    };

    writeln!(writer, "{PASS} {} found", verification.report_name)?;

    let name = if results.student_name_filled {
        "Student name filled in"
    } else {
        "Student name not filled in"
    };
    writeln!(writer, "{} {name}", glyph(results.student_name_filled))?;

    let cluster = if results.has_cluster_info {
        "HPC Cluster information provided"
    } else {
        "HPC Cluster information missing"
    };
    writeln!(writer, "{} {cluster}", glyph(results.has_cluster_info))?;

    let count = tools.len();
    let min = verification.min_tools;
    let coverage = if results.report_has_content {
        format!("At least {min} tools documented ({count} found)")
    } else {
        format!("Not enough tools documented ({count} found, need at least {min})")
    };
    writeln!(writer, "{} {coverage}", glyph(results.report_has_content))?;

    writeln!(writer)?;
    writeln!(writer, "Tools documented: {}", tools.join(", "))?;
    Ok(())
}

/// Write the pass count and the closing message.
///
/// # Errors
///
/// Returns an error if writing fails.
pub fn write_summary(results: &CheckResults, writer: &mut dyn Write) -> std::io::Result<()> {
    writeln!(writer)?;
    writeln!(writer, "{}", "=".repeat(50))?;
    writeln!(
        writer,
        "Verification: {}/{} checks passed",
        results.passed(),
        CheckResults::TOTAL
    )?;
    writeln!(writer)?;

    if results.all_passed() {
        writeln!(
            writer,
            "\u{1f389} Great job! Your installation report looks good!"
        )?;
        writeln!(
            writer,
            "Make sure you've actually tested all the tools on your HPC!"
        )?;
    } else {
        writeln!(
            writer,
            "\u{26a0}\u{fe0f}  Some checks failed. Please review the report requirements."
        )?;
    }
    Ok(())
}
