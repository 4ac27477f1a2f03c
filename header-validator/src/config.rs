//! Configuration for a header validation run.

use std::path::PathBuf;

/// Directories skipped unless `skip_default_dirs` is turned off.
pub const DEFAULT_SKIP_DIRS: &[&str] = &[".git", "node_modules", "target"];

/// Source options for a header validation run.
///
/// `root` is required. Everything else has a conservative default; see
/// [`ScanConfig::new`].
#[derive(Debug, Clone)]
#[non_exhaustive]
pub struct ScanConfig {
    /// Directory (or single file) to validate.
    pub root: PathBuf,
    /// Directory names excluded from the walk, at any depth below `root`.
    ///
    /// Each entry is matched against the directory's own name, either
    /// exactly or as a glob pattern (`build*`, `gen_?`).
    pub exclude_dirs: Vec<String>,
    /// Also skip [`DEFAULT_SKIP_DIRS`] (default: `true`).
    pub skip_default_dirs: bool,
    /// Whether to follow symbolic links.
    ///
    /// **Defaults to `false`**. Even when enabled, files resolving outside
    /// `root` are reported as unreadable rather than validated.
    pub follow_links: bool,
    /// Maximum directory traversal depth (default: 64).
    pub max_depth: usize,
    /// Maximum number of files to validate (default: `100_000`).
    pub max_files: usize,
    /// Maximum file size in bytes (default: 10 MB).
    pub max_file_size: u64,
}

impl ScanConfig {
    /// Create a config for `root` with default limits.
    #[must_use]
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            ..Self::default()
        }
    }
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            root: PathBuf::from("."),
            exclude_dirs: Vec::new(),
            skip_default_dirs: true,
            follow_links: false,
            max_depth: 64,
            max_files: 100_000,
            max_file_size: 10_485_760,
        }
    }
}
