//! SHA-256 content digest in canonical form.

use crate::validation::validate_digest;
use crate::UuidResult;
use std::fmt;

/// A validated SHA-256 digest, stored as 64 lowercase hex characters.
///
/// Input is accepted in any case. Once constructed the digest is always lowercase, so two
/// digests that differ only in case compare equal.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct ContentDigest(String);

impl ContentDigest {
    /// Validates `input` and lowercases it.
    ///
    /// # Arguments
    ///
    /// * `input` - Hex digest in any case.
    ///
    /// # Returns
    ///
    /// Returns the digest in lowercase form.
    ///
    /// # Errors
    ///
    /// Returns [`crate::UuidError::InvalidDigestLength`] or
    /// [`crate::UuidError::InvalidDigestFormat`].
    pub fn parse(input: &str) -> UuidResult<Self> {
        validate_digest(input)?;
        Ok(Self(input.to_ascii_lowercase()))
    }

    /// Returns the lowercase hex digest.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ContentDigest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
