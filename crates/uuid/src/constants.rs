//! Fixed inputs of the identifier scheme.
//!
//! Every implementation that wants to produce the same identifiers must use these exact values.

/// Authority segment of the canonical DID string.
pub const AUTHORITY: &str = "calypr.org";

/// Method prefix of the canonical DID string.
pub const DID_METHOD_PREFIX: &str = "did:gen3";

/// Name hashed under the DNS namespace to obtain the identifier namespace.
pub const NAMESPACE_NAME: &str = "aced-idp.org";

/// Expected hyphenated form of `UUIDv3(NAMESPACE_DNS, NAMESPACE_NAME)`.
pub const EXPECTED_NAMESPACE: &str = "3dbb886f-620b-3c52-bcb1-1992e7c6ccd5";

/// Number of hex characters in a SHA-256 digest.
pub const DIGEST_HEX_LEN: usize = 64;

/// Logical path of the published reference vector.
pub const REFERENCE_PATH: &str = "/projectA/raw/reads/R1.fastq.gz";

/// SHA-256 of the published reference vector.
pub const REFERENCE_SHA256: &str =
    "4d9670e4c8f3e8b8a6c2d4f9136d7b89e4b9d5e0d2a1c0b9f4c2de0e8c7ac1a0";

/// Size of the published reference vector.
pub const REFERENCE_SIZE: i64 = 382991274;

/// Identifier every implementation must derive for the reference vector.
pub const REFERENCE_UUID: &str = "d61939fc-2919-511f-88f6-3d2d8566f5a4";
