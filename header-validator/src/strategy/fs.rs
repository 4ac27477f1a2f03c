//! Filesystem source for header validation.
//!
//! Discovers source files under the root and reads them safely.
//! Properties enforced here:
//! - Excluded directories are pruned before descending into them
//! - Symlinks, to files or directories, are skipped by default (`follow_links: false`)
//! - Resolved paths are checked to remain within the root
//! - Only regular files are selected; devices, pipes, and sockets are skipped
//! - Symlink loops are logged and skipped, not counted as failures
//! - Bounded reads cap memory use per file

use std::io::Read;
use std::path::{Path, PathBuf};

use glob::Pattern;
use tracing::warn;
use walkdir::{DirEntry, WalkDir};

use crate::config::{DEFAULT_SKIP_DIRS, ScanConfig};
use crate::error::{ConfigError, ReadError, ReadErrorKind};
use crate::language::Language;

/// A file selected for validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Candidate {
    pub path: PathBuf,
    pub language: Language,
}

/// Files to validate plus discovery failures (walk errors, root escapes, limits).
#[derive(Debug, Default)]
pub struct Discovery {
    pub files: Vec<Candidate>,
    pub errors: Vec<(ReadError, Option<Language>)>,
}

/// Compiled directory exclusion rules.
struct DirFilter {
    patterns: Vec<Pattern>,
    skip_defaults: bool,
}

impl DirFilter {
    fn new(config: &ScanConfig) -> Result<Self, ConfigError> {
        let mut patterns = Vec::with_capacity(config.exclude_dirs.len());
        for raw in &config.exclude_dirs {
            let pattern = Pattern::new(raw).map_err(|e| ConfigError::InvalidExclude {
                pattern: raw.clone(),
                message: e.to_string(),
            })?;
            patterns.push(pattern);
        }
        Ok(Self {
            patterns,
            skip_defaults: config.skip_default_dirs,
        })
    }

    fn excludes(&self, name: &str) -> bool {
        (self.skip_defaults && DEFAULT_SKIP_DIRS.contains(&name))
            || self.patterns.iter().any(|p| p.matches(name))
    }

    /// `WalkDir::filter_entry` predicate: `true` if the entry should be kept.
    /// The root itself is never excluded.
    fn keeps(&self, entry: &DirEntry) -> bool {
        if entry.depth() == 0 || !entry.file_type().is_dir() {
            return true;
        }
        entry
            .file_name()
            .to_str()
            .is_none_or(|name| !self.excludes(name))
    }
}

/// Find all source files to validate under `config.root`.
///
/// # Errors
///
/// Returns a [`ConfigError`] if the root cannot be resolved or read, is not a
/// file or directory, is a file of unknown language, or an exclude entry is not a
/// valid pattern. Per-path problems are collected in [`Discovery::errors`].
pub fn find_files(config: &ScanConfig) -> Result<Discovery, ConfigError> {
    let filter = DirFilter::new(config)?;
    let root = &config.root;

    let canonical_root = root
        .canonicalize()
        .map_err(|source| ConfigError::UnreadableRoot {
            path: root.clone(),
            source,
        })?;

    let mut discovery = Discovery::default();

    if root.is_file() {
        std::fs::File::open(root).map_err(|source| ConfigError::UnreadableRoot {
            path: root.clone(),
            source,
        })?;
        let language =
            Language::from_path(root).ok_or_else(|| ConfigError::UnknownLanguage(root.clone()))?;
        discovery.files.push(Candidate {
            path: root.clone(),
            language,
        });
        return Ok(discovery);
    }

    if !root.is_dir() {
        return Err(ConfigError::UnsupportedRoot(root.clone()));
    }

    std::fs::read_dir(root).map_err(|source| ConfigError::UnreadableRoot {
        path: root.clone(),
        source,
    })?;

    for entry_result in WalkDir::new(root)
        .follow_links(config.follow_links)
        .max_depth(config.max_depth)
        .into_iter()
        .filter_entry(|e| filter.keeps(e))
    {
        let entry = match entry_result {
            Ok(e) => e,
            Err(walk_err) => {
                if walk_err.loop_ancestor().is_some() {
                    warn!("Skipping symlink loop: {walk_err}");
                    continue;
                }
                let path = walk_err
                    .path()
                    .map_or_else(|| root.clone(), Path::to_path_buf);
                let language = Language::from_path(&path);
                discovery.errors.push((
                    ReadError::new(
                        path,
                        ReadErrorKind::Walk,
                        format!("Directory traversal error: {walk_err}"),
                    ),
                    language,
                ));
                continue;
            }
        };

        // Without follow_links a symlink reports its own type and is skipped here.
        if !entry.file_type().is_file() {
            continue;
        }
        let file_path = entry.path();

        let Some(language) = Language::from_path(file_path) else {
            continue;
        };

        match file_path.canonicalize() {
            Ok(canonical_path) if !canonical_path.starts_with(&canonical_root) => {
                discovery.errors.push((
                    ReadError::new(
                        file_path,
                        ReadErrorKind::OutsideRoot,
                        format!(
                            "Path resolves outside root: {} -> {}",
                            file_path.display(),
                            canonical_path.display()
                        ),
                    ),
                    Some(language),
                ));
                continue;
            }
            Ok(_) => {}
            Err(e) => {
                discovery.errors.push((
                    ReadError::new(
                        file_path,
                        ReadErrorKind::Io,
                        format!("Failed to canonicalize path: {e}"),
                    ),
                    Some(language),
                ));
                continue;
            }
        }

        if discovery.files.len() >= config.max_files {
            discovery.errors.push((
                ReadError::new(
                    file_path,
                    ReadErrorKind::LimitExceeded,
                    format!(
                        "Scan aborted: max_files limit ({}) reached; remaining files not checked",
                        config.max_files
                    ),
                ),
                Some(language),
            ));
            break;
        }

        discovery.files.push(Candidate {
            path: file_path.to_path_buf(),
            language,
        });
    }

    discovery.files.sort_by(|a, b| a.path.cmp(&b.path));
    discovery.files.dedup();
    Ok(discovery)
}

/// Read a file with a bounded read, enforcing `max_file_size`.
///
/// Reads at most `max_file_size + 1` bytes so oversized files are detected
/// without loading them whole. The handle is dropped before returning.
///
/// # Errors
///
/// Returns a [`ReadError`] if the file cannot be opened or read, exceeds
/// `max_file_size`, or is not valid UTF-8.
pub fn read_file_bounded(path: &Path, max_file_size: u64) -> Result<String, ReadError> {
    let file = std::fs::File::open(path).map_err(|e| {
        ReadError::new(path, ReadErrorKind::Io, format!("Failed to open file: {e}"))
    })?;

    let mut buffer = Vec::new();
    file.take(max_file_size.saturating_add(1))
        .read_to_end(&mut buffer)
        .map_err(|e| {
            ReadError::new(path, ReadErrorKind::Io, format!("Failed to read file: {e}"))
        })?;

    if buffer.len() as u64 > max_file_size {
        return Err(ReadError::new(
            path,
            ReadErrorKind::TooLarge,
            format!("File exceeds maximum size of {max_file_size} bytes"),
        ));
    }

    String::from_utf8(buffer).map_err(|_| {
        ReadError::new(
            path,
            ReadErrorKind::InvalidEncoding,
            "File is not valid UTF-8".to_owned(),
        )
    })
}
