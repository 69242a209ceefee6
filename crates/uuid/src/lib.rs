//! Deterministic, content-addressed file identifiers.
//!
//! Independent tools that register the same file must arrive at the same identifier without
//! talking to each other. This crate derives that identifier from three facts the caller already
//! knows about a file: its logical path, its SHA-256 digest, and its size in bytes.
//!
//! ## Derivation
//! 1. The digest and size are validated ([`validate_inputs`]).
//! 2. The path is normalised ([`normalize_logical_path`]).
//! 3. A canonical DID string is built ([`CanonicalDid::build`]):
//!    `did:gen3:calypr.org:<path>:<sha256_lowercase>:<size>`
//! 4. The identifier is `UUIDv5(namespace, canonical)` where the namespace is
//!    `UUIDv3(NAMESPACE_DNS, "aced-idp.org")` ([`aced_namespace`]).
//!
//! The namespace is fixed at `3dbb886f-620b-3c52-bcb1-1992e7c6ccd5`.
//!
//! ## Example
//! ```
//! let id = drs_uuid::compute_deterministic_uuid(
//!     "/projectA/raw/reads/R1.fastq.gz",
//!     "4d9670e4c8f3e8b8a6c2d4f9136d7b89e4b9d5e0d2a1c0b9f4c2de0e8c7ac1a0",
//!     382991274,
//! )
//! .unwrap();
//! assert_eq!(id.to_string(), "d61939fc-2919-511f-88f6-3d2d8566f5a4");
//! ```
//!
//! ## Known limitation
//! Colons in the path are not escaped inside the canonical string. Such paths give an
//! ambiguous canonical string, which is still deterministic and is kept as-is so that every
//! implementation of the scheme agrees.

mod canonical;
pub mod constants;
mod digest;
mod path;
mod self_check;
mod service;
mod validation;

// Re-export public types
pub use canonical::CanonicalDid;
pub use digest::ContentDigest;
pub use path::{normalize_logical_path, LogicalPath};
pub use self_check::{run_self_check, SelfCheck};
pub use service::{
    aced_namespace, compute_deterministic_uuid, derive_many, derive_uuid, DrsIdentity, DrsUuid,
    Uuid,
};
pub use validation::{is_hex_digest, validate_inputs};

/// Error type for identifier derivation.
///
/// Every variant is an input validation failure. They are all detected before any derivation
/// work starts, so a returned error never means a partially derived identifier.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum UuidError {
    /// Digest does not have exactly 64 characters
    #[error("SHA256 must be 64 characters, got {actual}")]
    InvalidDigestLength { actual: usize },
    /// Digest has the right length but is not hexadecimal
    #[error("SHA256 must be hexadecimal")]
    InvalidDigestFormat,
    /// Size is below zero
    #[error("Size must be non-negative, got {size}")]
    NegativeSize { size: i64 },
}

/// Result type for identifier derivation.
pub type UuidResult<T> = Result<T, UuidError>;
