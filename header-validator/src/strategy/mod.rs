//! Validation source strategies.
//!
//! Only the filesystem strategy exists; `validate_tree()` uses it directly.

pub mod fs;
