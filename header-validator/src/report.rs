//! Per-file results and the aggregate validation report.

use std::path::PathBuf;

use serde::Serialize;

use crate::error::{ReadError, ReadErrorKind};
use crate::header::{RequiredField, join_labels};
use crate::language::Language;

/// Evidence recorded for a file with no leading comment at all.
pub const NO_HEADER_EVIDENCE: &str = "no leading comment block";

/// A source file as seen by one validation run.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct SourceFile {
    /// Path as discovered under the root.
    pub path: PathBuf,
    /// Detected language; `None` only for walk errors on non-file entries.
    pub language: Option<Language>,
    /// Text of the header block, comment markers stripped.
    #[serde(skip_serializing)]
    pub header: Vec<String>,
}

/// Verdict for one file.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Outcome {
    /// All required fields are present.
    Passed,
    /// One or more required fields are absent from the header block.
    MissingFields,
    /// The file could not be read; nothing was checked.
    Unreadable,
}

/// Validation result for a single file.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct HeaderResult {
    /// The checked file; its fields are inlined in JSON output.
    #[serde(flatten)]
    pub file: SourceFile,
    /// Verdict for the file.
    pub outcome: Outcome,
    /// Missing fields in canonical order. For unreadable files, all fields.
    pub missing: Vec<RequiredField>,
    /// Confirming content on pass, offending content on failure.
    pub evidence: String,
    /// Why the file could not be read, for unreadable results.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub read_error: Option<ReadErrorKind>,
}

impl HeaderResult {
    /// Result for a file whose header was checked.
    #[must_use]
    pub fn checked(file: SourceFile, missing: Vec<RequiredField>, confirming: Option<&str>) -> Self {
        let (outcome, evidence) = if missing.is_empty() {
            (Outcome::Passed, confirming.unwrap_or_default().to_owned())
        } else {
            let evidence = file
                .header
                .first()
                .map_or_else(|| NO_HEADER_EVIDENCE.to_owned(), Clone::clone);
            (Outcome::MissingFields, evidence)
        };
        Self {
            file,
            outcome,
            missing,
            evidence,
            read_error: None,
        }
    }

    /// Result for a file that could not be read.
    #[must_use]
    pub fn unreadable(error: ReadError, language: Option<Language>) -> Self {
        Self {
            file: SourceFile {
                path: error.file,
                language,
                header: Vec::new(),
            },
            outcome: Outcome::Unreadable,
            missing: RequiredField::ALL.to_vec(),
            evidence: error.message,
            read_error: Some(error.kind),
        }
    }

    /// Whether the file passed validation.
    #[must_use]
    pub fn passed(&self) -> bool {
        self.outcome == Outcome::Passed
    }

    /// Format the result for human-readable output.
    ///
    /// - passed: `{path}: ok [{evidence}]`
    /// - missing fields: `{path}: missing {fields} [{evidence}]`
    /// - unreadable: `{path}: [unreadable] {message}`
    #[must_use]
    pub fn format_human_readable(&self) -> String {
        let path = self.file.path.display();
        match self.outcome {
            Outcome::Passed => format!("{path}: ok [{}]", self.evidence),
            Outcome::MissingFields => format!(
                "{path}: missing {} [{}]",
                join_labels(&self.missing),
                self.evidence
            ),
            Outcome::Unreadable => format!("{path}: [unreadable] {}", self.evidence),
        }
    }
}

/// Result of a validation run.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[non_exhaustive]
pub struct ValidationReport {
    /// Number of files checked, unreadable ones included.
    pub checked: usize,
    /// Number of files that passed.
    pub passed: usize,
    /// Number of files that failed, unreadable ones included.
    pub failed: usize,
    /// Number of failed files that could not be read at all.
    pub unreadable: usize,
    /// `true` iff no file failed.
    pub ok: bool,
    /// Per-file results, ordered by path.
    pub results: Vec<HeaderResult>,
}

impl ValidationReport {
    /// Build a report from unordered results.
    #[must_use]
    pub fn from_results(mut results: Vec<HeaderResult>) -> Self {
        results.sort_by(|a, b| a.file.path.cmp(&b.file.path));
        let checked = results.len();
        let passed = results.iter().filter(|r| r.passed()).count();
        let unreadable = results
            .iter()
            .filter(|r| r.outcome == Outcome::Unreadable)
            .count();
        Self {
            checked,
            passed,
            failed: checked - passed,
            unreadable,
            ok: passed == checked,
            results,
        }
    }

    /// Results that did not pass, in path order.
    pub fn failures(&self) -> impl Iterator<Item = &HeaderResult> {
        self.results.iter().filter(|r| !r.passed())
    }

    /// Results that passed, in path order.
    pub fn passes(&self) -> impl Iterator<Item = &HeaderResult> {
        self.results.iter().filter(|r| r.passed())
    }
}
