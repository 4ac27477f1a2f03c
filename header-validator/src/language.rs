//! Language detection by file extension and the comment syntax each language uses.

use std::fmt;
use std::path::Path;

use serde::Serialize;

/// A family of comment syntax that can open a header block.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommentFamily {
    /// `/* ... */` block comments, possibly spanning several lines.
    SlashStar,
    /// `// ...` line comments.
    DoubleSlash,
    /// `# ...` line comments.
    Hash,
}

const C_LIKE: &[CommentFamily] = &[CommentFamily::SlashStar, CommentFamily::DoubleSlash];
const BLOCK_ONLY: &[CommentFamily] = &[CommentFamily::SlashStar];
const HASH_ONLY: &[CommentFamily] = &[CommentFamily::Hash];

/// Source language, detected from the file extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
#[non_exhaustive]
pub enum Language {
    JavaScript,
    TypeScript,
    Python,
    Java,
    Go,
    Rust,
    C,
    Cpp,
    CSharp,
    Kotlin,
    Swift,
    Scala,
    Css,
    Shell,
    Ruby,
    Perl,
    Yaml,
    Toml,
}

impl Language {
    /// Detect the language of `path` from its extension (case-insensitive).
    ///
    /// Returns `None` for files that have no known comment syntax; those are
    /// not considered by the validator.
    #[must_use]
    pub fn from_path(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?.to_ascii_lowercase();
        let language = match ext.as_str() {
            "js" | "jsx" | "mjs" | "cjs" => Self::JavaScript,
            "ts" | "tsx" => Self::TypeScript,
            "py" => Self::Python,
            "java" => Self::Java,
            "go" => Self::Go,
            "rs" => Self::Rust,
            "c" | "h" => Self::C,
            "cc" | "cpp" | "cxx" | "hpp" => Self::Cpp,
            "cs" => Self::CSharp,
            "kt" | "kts" => Self::Kotlin,
            "swift" => Self::Swift,
            "scala" => Self::Scala,
            "css" => Self::Css,
            "sh" | "bash" => Self::Shell,
            "rb" => Self::Ruby,
            "pl" => Self::Perl,
            "yaml" | "yml" => Self::Yaml,
            "toml" => Self::Toml,
            _ => return None,
        };
        Some(language)
    }

    /// Comment families accepted in this language's header block.
    #[must_use]
    pub const fn comment_families(self) -> &'static [CommentFamily] {
        match self {
            Self::JavaScript
            | Self::TypeScript
            | Self::Java
            | Self::Go
            | Self::Rust
            | Self::C
            | Self::Cpp
            | Self::CSharp
            | Self::Kotlin
            | Self::Swift
            | Self::Scala => C_LIKE,
            Self::Css => BLOCK_ONLY,
            Self::Python | Self::Shell | Self::Ruby | Self::Perl | Self::Yaml | Self::Toml => {
                HASH_ONLY
            }
        }
    }

    /// Display name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::JavaScript => "JavaScript",
            Self::TypeScript => "TypeScript",
            Self::Python => "Python",
            Self::Java => "Java",
            Self::Go => "Go",
            Self::Rust => "Rust",
            Self::C => "C",
            Self::Cpp => "C++",
            Self::CSharp => "C#",
            Self::Kotlin => "Kotlin",
            Self::Swift => "Swift",
            Self::Scala => "Scala",
            Self::Css => "CSS",
            Self::Shell => "Shell",
            Self::Ruby => "Ruby",
            Self::Perl => "Perl",
            Self::Yaml => "YAML",
            Self::Toml => "TOML",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detect_known_extensions() {
        assert_eq!(
            Language::from_path(Path::new("app/main.go")),
            Some(Language::Go)
        );
        assert_eq!(
            Language::from_path(Path::new("ui/View.TSX")),
            Some(Language::TypeScript)
        );
        assert_eq!(
            Language::from_path(Path::new("tools/run.py")),
            Some(Language::Python)
        );
    }

    #[test]
    fn test_unknown_extension_is_ignored() {
        assert_eq!(Language::from_path(Path::new("README.md")), None);
        assert_eq!(Language::from_path(Path::new("Makefile")), None);
        assert_eq!(Language::from_path(Path::new(".gitignore")), None);
    }

    #[test]
    fn test_comment_families() {
        assert!(
            Language::Java
                .comment_families()
                .contains(&CommentFamily::SlashStar)
        );
        assert!(
            Language::Java
                .comment_families()
                .contains(&CommentFamily::DoubleSlash)
        );
        assert_eq!(Language::Css.comment_families(), &[CommentFamily::SlashStar]);
        assert_eq!(Language::Python.comment_families(), &[CommentFamily::Hash]);
    }

    #[test]
    fn test_language_serializes_lowercase() {
        let json = serde_json::to_string(&Language::JavaScript).unwrap();
        assert_eq!(json, "\"javascript\"");
    }
}
