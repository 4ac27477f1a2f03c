//! Shared output formatting for validation reports.
//!
//! Provides JSON and plain-text formatters for `ValidationReport`.
//! Color/terminal formatting is left to the CLI layer.

use std::io::Write;

use crate::header::RequiredField;
use crate::report::ValidationReport;

/// Format a `ValidationReport` as JSON to a writer.
///
/// # Errors
///
/// Returns an error if serialization or writing fails.
pub fn write_json(report: &ValidationReport, writer: &mut dyn Write) -> anyhow::Result<()> {
    let json = serde_json::to_string_pretty(report)?;
    writeln!(writer, "{json}")?;
    Ok(())
}

/// Format a `ValidationReport` as human-readable plain text to a writer.
///
/// Failing files are always listed; passing files only with `show_passed`.
///
/// # Errors
///
/// Returns an error if writing fails.
pub fn write_human(
    report: &ValidationReport,
    show_passed: bool,
    writer: &mut dyn Write,
) -> anyhow::Result<()> {
    writeln!(writer)?;
    writeln!(writer, "{}", "=".repeat(80))?;
    writeln!(writer, "  SOURCE HEADER VALIDATOR")?;
    writeln!(writer, "{}", "=".repeat(80))?;
    writeln!(writer)?;
    writeln!(writer, "  Files checked:  {}", report.checked)?;
    writeln!(writer, "  Files passed:   {}", report.passed)?;
    writeln!(writer, "  Files failed:   {}", report.failed)?;
    if report.unreadable > 0 {
        writeln!(writer, "  Unreadable:     {}", report.unreadable)?;
    }
    writeln!(writer)?;

    if !report.ok {
        writeln!(writer, "{}", "-".repeat(80))?;
        writeln!(writer, "  FAILED FILES")?;
        writeln!(writer, "{}", "-".repeat(80))?;
        for result in report.failures() {
            writeln!(writer, "{}", result.format_human_readable())?;
        }
        writeln!(writer)?;
    }

    if show_passed && report.passed > 0 {
        writeln!(writer, "{}", "-".repeat(80))?;
        writeln!(writer, "  PASSED FILES")?;
        writeln!(writer, "{}", "-".repeat(80))?;
        for result in report.passes() {
            writeln!(writer, "{}", result.format_human_readable())?;
        }
        writeln!(writer)?;
    }

    writeln!(writer, "{}", "=".repeat(80))?;
    if report.ok {
        writeln!(
            writer,
            "\u{2713} All {} files passed header validation",
            report.checked
        )?;
    } else {
        writeln!(
            writer,
            "\u{2717} {} file(s) failed header validation",
            report.failed
        )?;
        if report.unreadable > 0 {
            writeln!(
                writer,
                "\u{2717} {} file(s) could not be read",
                report.unreadable
            )?;
        }
        writeln!(writer)?;
        writeln!(writer, "  To fix:")?;
        writeln!(
            writer,
            "    - Start each file with a comment block containing one line per field:"
        )?;
        for field in RequiredField::ALL {
            writeln!(writer, "        {}: <value>", field.label())?;
        }
    }
    writeln!(writer, "{}", "=".repeat(80))?;

    Ok(())
}
