//! Extraction of the leading comment block ("header block") of a source file.
//!
//! The block is the run of comment lines at the top of the file:
//! - blank lines are skipped, before the first comment and between comments;
//! - the block ends at the first line that is neither blank nor a comment
//!   line of one of the file's comment families;
//! - inside an open `/* ... */` comment every line belongs to the block until
//!   `*/`; another comment after `*/` on the same line continues the block,
//!   code after it ends the block;
//! - a `#!` shebang on the first line of a hash-family file is skipped.
//!
//! Comment markers and `*` decoration are stripped, and empty comment lines
//! are dropped, so callers receive only the text of the header.

use crate::language::CommentFamily;

/// Tracks whether a `/* ... */` comment is still open.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum BlockState {
    Outside,
    InsideBlock,
}

/// How a line ended: entirely comment text, or with code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum LineKind {
    Comment,
    Code,
}

/// Comment syntax accepted for one file.
#[derive(Debug, Clone, Copy)]
struct Syntax {
    slash_star: bool,
    double_slash: bool,
    hash: bool,
}

impl Syntax {
    fn new(families: &[CommentFamily]) -> Self {
        Self {
            slash_star: families.contains(&CommentFamily::SlashStar),
            double_slash: families.contains(&CommentFamily::DoubleSlash),
            hash: families.contains(&CommentFamily::Hash),
        }
    }

    /// Consume `line` segment by segment, pushing comment text to `header`.
    ///
    /// A line may hold several comments (`/* a */ // b`, `/* a */ /* b */`);
    /// it is `Code` as soon as a segment outside a comment is not one.
    fn scan_line(
        self,
        line: &str,
        state: &mut BlockState,
        header: &mut Vec<String>,
    ) -> LineKind {
        let mut rest = line.trim();
        loop {
            if *state == BlockState::InsideBlock {
                let Some(end) = rest.find("*/") else {
                    push_text(header, rest);
                    return LineKind::Comment;
                };
                push_text(header, &rest[..end]);
                *state = BlockState::Outside;
                rest = rest[end + 2..].trim();
                continue;
            }

            if rest.is_empty() {
                return LineKind::Comment;
            }
            if self.double_slash
                && let Some(text) = rest.strip_prefix("//")
            {
                push_text(header, text.trim_start_matches('/'));
                return LineKind::Comment;
            }
            if self.hash
                && let Some(text) = rest.strip_prefix('#')
            {
                push_text(header, text.trim_start_matches('#'));
                return LineKind::Comment;
            }
            if self.slash_star
                && let Some(text) = rest.strip_prefix("/*")
            {
                *state = BlockState::InsideBlock;
                rest = text;
                continue;
            }
            return LineKind::Code;
        }
    }
}

/// Strip the `*` gutter used inside block comments (` * Author: x`).
fn strip_decoration(text: &str) -> &str {
    text.trim().trim_start_matches(['*', '!']).trim()
}

fn push_text(header: &mut Vec<String>, text: &str) {
    let text = strip_decoration(text);
    if !text.is_empty() {
        header.push(text.to_owned());
    }
}

/// Extract the header block of `content` for a file using `families`.
#[must_use]
pub fn extract_header(content: &str, families: &[CommentFamily]) -> Vec<String> {
    let syntax = Syntax::new(families);
    let content = content.strip_prefix('\u{feff}').unwrap_or(content);
    let mut header = Vec::new();
    let mut state = BlockState::Outside;

    for (index, line) in content.lines().enumerate() {
        if syntax.hash && index == 0 && line.trim_start().starts_with("#!") {
            continue;
        }
        if syntax.scan_line(line, &mut state, &mut header) == LineKind::Code {
            break;
        }
    }

    header
}
