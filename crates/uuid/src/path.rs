//! Logical path normalisation.
//!
//! Paths are compared as plain strings inside the canonical DID, so equivalent spellings of the
//! same repository path (`data/a.bam`, `/data//a.bam/`, `data\a.bam`) must collapse to one form
//! before hashing.
//!
//! Rules, applied in order:
//! 1. backslashes become forward slashes
//! 2. runs of slashes collapse to one
//! 3. trailing slashes are removed unless the path is `/`
//! 4. a leading slash is added if missing
//!
//! `.` and `..` segments are not resolved. The path is never touched on disk.

use std::fmt;

/// A path in normalised form.
///
/// Always starts with `/`, contains no backslashes, no `//`, and has no trailing slash unless it
/// is exactly `/`.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct LogicalPath(String);

impl LogicalPath {
    /// Normalises `input` into a [`LogicalPath`]. Never fails.
    pub fn new(input: &str) -> Self {
        Self(normalize_logical_path(input))
    }

    /// Returns the normalised path as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for LogicalPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for LogicalPath {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Normalises a file path so that equivalent spellings yield the same identifier.
///
/// Any string is accepted. The empty string normalises to `/`.
pub fn normalize_logical_path(path: &str) -> String {
    let mut normalized = String::with_capacity(path.len() + 1);

    // Steps 1 and 2 in one pass: a backslash counts as a slash when collapsing runs.
    let mut prev_slash = false;
    for ch in path.chars() {
        let ch = if ch == '\\' { '/' } else { ch };
        if ch == '/' {
            if prev_slash {
                continue;
            }
            prev_slash = true;
        } else {
            prev_slash = false;
        }
        normalized.push(ch);
    }

    if normalized.len() > 1 {
        while normalized.ends_with('/') {
            normalized.pop();
        }
    }

    if !normalized.starts_with('/') {
        normalized.insert(0, '/');
    }

    tracing::debug!(input = path, normalized = %normalized, "normalized logical path");
    normalized
}
