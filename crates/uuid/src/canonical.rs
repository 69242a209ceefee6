//! Canonical DID string.
//!
//! Format: `did:gen3:<authority>:<path>:<sha256>:<size>`
//!
//! Fields are joined with `:` and never escaped. A path containing `:` makes the string
//! ambiguous to parse back, but the string is only ever hashed, never parsed, and other
//! implementations build it the same way.

use crate::constants::{AUTHORITY, DID_METHOD_PREFIX};
use crate::{ContentDigest, LogicalPath};
use std::fmt;

/// The exact string hashed to produce a file identifier.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct CanonicalDid(String);

impl CanonicalDid {
    /// Builds the canonical string from already-normalised parts.
    ///
    /// The digest is lowercase by construction of [`ContentDigest`]; the size is written in
    /// decimal without padding or separators.
    pub fn build(path: &LogicalPath, digest: &ContentDigest, size: u64) -> Self {
        Self(format!(
            "{DID_METHOD_PREFIX}:{AUTHORITY}:{path}:{digest}:{size}"
        ))
    }

    /// Returns the canonical string.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns the raw bytes fed to the UUID derivation.
    pub fn as_bytes(&self) -> &[u8] {
        self.0.as_bytes()
    }
}

impl fmt::Display for CanonicalDid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
