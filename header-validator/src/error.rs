//! Error types for header validation.

use std::path::PathBuf;

use serde::Serialize;
use thiserror::Error;

/// A configuration problem that prevents the run from starting at all.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ConfigError {
    /// The root path does not exist.
    #[error("Root path does not exist: {}", .0.display())]
    MissingRoot(PathBuf),

    /// The root path exists but could not be resolved (permissions, broken link).
    #[error("Failed to resolve root path {}: {source}", .path.display())]
    UnreadableRoot {
        /// The configured root.
        path: PathBuf,
        /// Underlying I/O failure.
        source: std::io::Error,
    },

    /// The root is neither a directory nor a regular file.
    #[error("Root path is neither a directory nor a regular file: {}", .0.display())]
    UnsupportedRoot(PathBuf),

    /// The root is a single file whose extension has no known comment syntax.
    #[error("Root file has no recognized source extension: {}", .0.display())]
    UnknownLanguage(PathBuf),

    /// An exclude entry is not a valid glob pattern.
    #[error("Invalid exclude pattern '{pattern}': {message}")]
    InvalidExclude {
        /// The offending exclude entry.
        pattern: String,
        /// Parser message.
        message: String,
    },
}

/// Why a file could not be checked.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
#[non_exhaustive]
pub enum ReadErrorKind {
    /// An I/O error occurred while opening or reading the file.
    Io,
    /// The file exceeded the configured maximum size.
    TooLarge,
    /// The file content is not valid UTF-8.
    InvalidEncoding,
    /// A directory traversal error, such as permission denied.
    Walk,
    /// The resolved path is outside the root (symlink escape).
    OutsideRoot,
    /// `max_files` was reached and the walk was truncated.
    LimitExceeded,
}

/// A per-file failure. Never fatal: it becomes an unreadable entry in the report.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub struct ReadError {
    /// The path that could not be checked.
    pub file: PathBuf,
    /// The kind of failure.
    pub kind: ReadErrorKind,
    /// Human-readable description of the failure.
    pub message: String,
}

impl ReadError {
    pub(crate) fn new(file: impl Into<PathBuf>, kind: ReadErrorKind, message: String) -> Self {
        Self {
            file: file.into(),
            kind,
            message,
        }
    }

    /// Format the error for human-readable output.
    #[must_use]
    pub fn format_human_readable(&self) -> String {
        format!("{}: [unreadable] {}", self.file.display(), self.message)
    }
}
