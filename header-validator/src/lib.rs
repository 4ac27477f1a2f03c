//! # header-validator
//!
//! Checks that every source file in a tree starts with a comment block
//! carrying four metadata fields: `Purpose`, `Author`, `Date`, `Modified By`.
//!
//! The crate separates the **header checks** (comment extraction and field
//! matching, input-agnostic) from the **filesystem strategy** that discovers
//! and reads files.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use header_validator::{ScanConfig, validate_tree};
//!
//! let mut config = ScanConfig::new("code");
//! config.exclude_dirs = vec!["vendor".to_owned()];
//!
//! let report = validate_tree(&config).unwrap();
//! println!("Files checked: {}", report.checked);
//! println!("Files failed:  {}", report.failed);
//! println!("OK: {}", report.ok);
//! ```

mod comment;
mod config;
mod error;
mod header;
mod language;
pub mod output;
mod report;
mod strategy;

pub use comment::extract_header;
pub use config::{DEFAULT_SKIP_DIRS, ScanConfig};
pub use error::{ConfigError, ReadError, ReadErrorKind};
pub use header::{RequiredField, find_fields, missing_fields};
pub use language::{CommentFamily, Language};
pub use report::{HeaderResult, NO_HEADER_EVIDENCE, Outcome, SourceFile, ValidationReport};

use std::path::PathBuf;

use tracing::{debug, info, warn};

use strategy::fs::{find_files, read_file_bounded};

/// Validate the headers of all source files under `config.root`.
///
/// This is the primary public API. Files are visited in path order, so two
/// runs over an unmodified tree produce identical reports.
///
/// # Errors
///
/// Returns a [`ConfigError`] if the root does not exist or cannot be used,
/// or if an exclude entry is not a valid pattern. Per-file problems
/// (unreadable, too large, not UTF-8) never abort the run; they are recorded
/// as [`Outcome::Unreadable`] results.
pub fn validate_tree(config: &ScanConfig) -> Result<ValidationReport, ConfigError> {
    if !config.root.exists() {
        return Err(ConfigError::MissingRoot(config.root.clone()));
    }

    let discovery = find_files(config)?;
    let mut results = Vec::with_capacity(discovery.files.len() + discovery.errors.len());

    for (error, language) in discovery.errors {
        warn!(path = %error.file.display(), kind = ?error.kind, "{}", error.message);
        results.push(HeaderResult::unreadable(error, language));
    }

    for candidate in discovery.files {
        let result = match read_file_bounded(&candidate.path, config.max_file_size) {
            Ok(content) => check_source(candidate.path, candidate.language, &content),
            Err(error) => {
                warn!(path = %error.file.display(), kind = ?error.kind, "{}", error.message);
                HeaderResult::unreadable(error, Some(candidate.language))
            }
        };
        debug!(
            path = %result.file.path.display(),
            outcome = ?result.outcome,
            missing = result.missing.len(),
            "checked header"
        );
        results.push(result);
    }

    let report = ValidationReport::from_results(results);
    info!(
        checked = report.checked,
        passed = report.passed,
        failed = report.failed,
        unreadable = report.unreadable,
        "header validation finished"
    );
    Ok(report)
}

/// Check the header of one file's `content`.
///
/// Input-agnostic core of [`validate_tree`]: no filesystem access.
#[must_use]
pub fn check_source(path: impl Into<PathBuf>, language: Language, content: &str) -> HeaderResult {
    let header = extract_header(content, language.comment_families());
    let found = find_fields(&header);
    let missing = missing_fields(&found);
    let confirming = found.get(&RequiredField::Purpose).map(|line| (*line).to_owned());

    HeaderResult::checked(
        SourceFile {
            path: path.into(),
            language: Some(language),
            header,
        },
        missing,
        confirming.as_deref(),
    )
}
