//!
//! Represents a single output file in a set of many.
//!

use std::path::PathBuf;

///
/// Represents a single output file in a set of many.
///
pub struct File {
    /// Path to this file relative to the user-provided root.
    pub path: PathBuf,
    /// File contents.
    pub contents: String,
}

impl File {
    ///
    /// A shortcut constructor.
    ///
    pub fn new(path: impl Into<PathBuf>, contents: String) -> Self {
        Self {
            path: path.into(),
            contents,
        }
    }
}
