//! Input validation for digest and size.
//!
//! Runs before any derivation work. Rules are checked in order and the first failure wins:
//! digest length, digest characters, then size.

use crate::constants::DIGEST_HEX_LEN;
use crate::{UuidError, UuidResult};

/// Validates a SHA-256 digest and a byte size.
///
/// The digest may use either case; lowercasing happens later when the canonical string is
/// built.
///
/// # Errors
///
/// - [`UuidError::InvalidDigestLength`] if `digest` is not exactly 64 characters
/// - [`UuidError::InvalidDigestFormat`] if `digest` contains a non-hex character
/// - [`UuidError::NegativeSize`] if `size` is below zero
pub fn validate_inputs(digest: &str, size: i64) -> UuidResult<()> {
    validate_digest(digest)?;
    checked_size(size)?;
    Ok(())
}

/// Size rule only. Returns the size as an unsigned byte count.
pub(crate) fn checked_size(size: i64) -> UuidResult<u64> {
    u64::try_from(size).map_err(|_| UuidError::NegativeSize { size })
}

/// Digest rules only: length in characters, then hex characters.
pub(crate) fn validate_digest(digest: &str) -> UuidResult<()> {
    let actual = digest.chars().count();
    if actual != DIGEST_HEX_LEN {
        return Err(UuidError::InvalidDigestLength { actual });
    }

    if !is_hex_digest(digest) {
        return Err(UuidError::InvalidDigestFormat);
    }

    Ok(())
}

/// Returns true if `input` is 64 hex characters in either case.
pub fn is_hex_digest(input: &str) -> bool {
    input.len() == DIGEST_HEX_LEN && input.bytes().all(|b| b.is_ascii_hexdigit())
}
