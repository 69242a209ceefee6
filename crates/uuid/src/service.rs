//! Namespace and identifier derivation.
//!
//! Two name-based UUIDs are chained:
//! - the namespace is `UUIDv3(NAMESPACE_DNS, "aced-idp.org")`, computed once per process
//! - each file identifier is `UUIDv5(namespace, canonical_did_bytes)`
//!
//! Both follow RFC 4122: the namespace UUID's 16 bytes in network order are concatenated with
//! the name bytes, hashed (MD5 for v3, SHA-1 for v5), and the version and variant bits are
//! written into the first 16 bytes of the hash.

use crate::constants::NAMESPACE_NAME;
use crate::validation::checked_size;
use crate::{CanonicalDid, ContentDigest, LogicalPath, UuidResult};
use std::fmt;
use std::sync::LazyLock;

/// Re-exported for convenience.
pub use ::uuid::Uuid;

static ACED_NAMESPACE: LazyLock<Uuid> =
    LazyLock::new(|| Uuid::new_v3(&Uuid::NAMESPACE_DNS, NAMESPACE_NAME.as_bytes()));

/// Returns the namespace all file identifiers are derived under.
///
/// The value is `UUIDv3(NAMESPACE_DNS, "aced-idp.org")`. It is computed on first use and
/// reused for the rest of the process; every later call returns the same value.
///
/// # Returns
///
/// Returns `3dbb886f-620b-3c52-bcb1-1992e7c6ccd5`. Any other value means the name-based
/// derivation is broken, which [`crate::run_self_check`] reports.
pub fn aced_namespace() -> Uuid {
    *ACED_NAMESPACE
}

/// Derives the file identifier for a canonical DID under `namespace`.
///
/// This is the raw v5 step with no validation or normalisation. Callers holding unvalidated
/// input should use [`DrsIdentity::derive`] instead.
///
/// # Arguments
///
/// * `namespace` - Namespace UUID, normally [`aced_namespace`].
/// * `canonical` - Canonical DID string whose bytes are hashed.
///
/// # Returns
///
/// Returns a version 5, RFC 4122 variant identifier.
pub fn derive_uuid(namespace: &Uuid, canonical: &CanonicalDid) -> DrsUuid {
    let uuid = Uuid::new_v5(namespace, canonical.as_bytes());
    tracing::debug!(canonical = %canonical, %uuid, "derived file identifier");
    DrsUuid(uuid)
}

/// Validates inputs and returns the deterministic identifier for a file.
///
/// Shorthand for [`DrsIdentity::derive`] when only the identifier is needed.
///
/// # Arguments
///
/// * `path` - Logical path in any spelling; it is normalised.
/// * `sha256` - SHA-256 hex digest in any case.
/// * `size` - Size in bytes.
///
/// # Returns
///
/// Returns the identifier. Equivalent spellings of the same inputs give the same value.
///
/// # Errors
///
/// Returns the first validation failure, in the order of [`crate::validate_inputs`].
pub fn compute_deterministic_uuid(path: &str, sha256: &str, size: i64) -> UuidResult<DrsUuid> {
    DrsIdentity::derive(path, sha256, size).map(|identity| identity.uuid)
}

/// Derives identifiers for many files at once.
///
/// Each `(path, sha256, size)` triple is validated and derived independently, so one bad entry
/// does not stop the rest.
///
/// # Arguments
///
/// * `items` - Triples in the same form [`DrsIdentity::derive`] takes.
///
/// # Returns
///
/// Returns one result per item, in input order.
pub fn derive_many<'a, I>(items: I) -> Vec<UuidResult<DrsIdentity>>
where
    I: IntoIterator<Item = (&'a str, &'a str, i64)>,
{
    items
        .into_iter()
        .map(|(path, sha256, size)| DrsIdentity::derive(path, sha256, size))
        .collect()
}

/// A derived file identifier.
///
/// Only produced by derivation, never parsed from outside input, so it is always a version 5
/// UUID under the ACED namespace. Displays in lowercase hyphenated form, e.g.
/// `d61939fc-2919-511f-88f6-3d2d8566f5a4`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct DrsUuid(Uuid);

impl DrsUuid {
    /// Returns the underlying `uuid::Uuid`.
    ///
    /// # Returns
    ///
    /// Returns a copy of the inner UUID, for callers that need the version, variant or raw
    /// bytes.
    pub fn uuid(&self) -> Uuid {
        self.0
    }

    /// Returns true if `expected` is exactly this identifier's display form.
    ///
    /// The comparison is plain string equality against the lowercase hyphenated form, so
    /// uppercase, braced, simple or whitespace-padded spellings do not match. This keeps
    /// verification results identical to other tools implementing the same scheme.
    ///
    /// # Arguments
    ///
    /// * `expected` - Identifier string supplied by the caller, used as-is.
    pub fn matches(&self, expected: &str) -> bool {
        expected == self.to_string()
    }
}

impl fmt::Display for DrsUuid {
    /// Formats as 36 lowercase characters with hyphens.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.hyphenated())
    }
}

/// Every intermediate value of one derivation, kept together for reporting.
///
/// Built only by [`DrsIdentity::derive`], so the fields are always consistent with each other:
/// `canonical` is built from `path`, `sha256` and `size`, and `uuid` is derived from
/// `namespace` and `canonical`.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct DrsIdentity {
    /// Normalised logical path.
    pub path: LogicalPath,
    /// Lowercase SHA-256 digest.
    pub sha256: ContentDigest,
    /// Size in bytes.
    pub size: u64,
    /// Canonical DID string that was hashed.
    pub canonical: CanonicalDid,
    /// Namespace the identifier was derived under.
    pub namespace: Uuid,
    /// The identifier.
    pub uuid: DrsUuid,
}

impl DrsIdentity {
    /// Runs the full pipeline: validate, normalise, build the canonical DID, derive.
    ///
    /// Validation is the same rule set as [`crate::validate_inputs`], applied once: parsing
    /// the digest checks length then characters, and the size check yields the unsigned size.
    ///
    /// # Arguments
    ///
    /// * `path` - Logical path in any spelling; it is normalised.
    /// * `sha256` - SHA-256 hex digest in any case; it is lowercased.
    /// * `size` - Size in bytes; must not be negative.
    ///
    /// # Returns
    ///
    /// Returns the identity with every intermediate value filled in.
    ///
    /// # Errors
    ///
    /// Returns [`crate::UuidError::InvalidDigestLength`],
    /// [`crate::UuidError::InvalidDigestFormat`] or [`crate::UuidError::NegativeSize`], the
    /// first rule that fails. Nothing is derived when validation fails.
    pub fn derive(path: &str, sha256: &str, size: i64) -> UuidResult<Self> {
        let sha256 = ContentDigest::parse(sha256)?;
        let size = checked_size(size)?;

        let path = LogicalPath::new(path);
        let canonical = CanonicalDid::build(&path, &sha256, size);
        let namespace = aced_namespace();
        let uuid = derive_uuid(&namespace, &canonical);

        Ok(Self {
            path,
            sha256,
            size,
            canonical,
            namespace,
            uuid,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::EXPECTED_NAMESPACE;
    use crate::UuidError;

    const SHA: &str = "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855";
    const VECTOR_PATH: &str = "/projectA/raw/reads/R1.fastq.gz";
    const VECTOR_SHA: &str = "4d9670e4c8f3e8b8a6c2d4f9136d7b89e4b9d5e0d2a1c0b9f4c2de0e8c7ac1a0";
    const VECTOR_SIZE: i64 = 382991274;
    const VECTOR_UUID: &str = "d61939fc-2919-511f-88f6-3d2d8566f5a4";

    #[test]
    fn test_namespace_anchor() {
        assert_eq!(aced_namespace().to_string(), EXPECTED_NAMESPACE);
        assert_eq!(aced_namespace().get_version_num(), 3);
    }

    #[test]
    fn test_namespace_is_stable() {
        assert_eq!(aced_namespace(), aced_namespace());
    }

    #[test]
    fn test_reference_vector() {
        let uuid = compute_deterministic_uuid(VECTOR_PATH, VECTOR_SHA, VECTOR_SIZE).unwrap();

        assert_eq!(uuid.to_string(), VECTOR_UUID);
    }

    #[test]
    fn test_reference_vector_with_unnormalised_inputs() {
        let uuid = compute_deterministic_uuid(
            "projectA\\raw//reads/R1.fastq.gz/",
            &VECTOR_SHA.to_uppercase(),
            VECTOR_SIZE,
        )
        .unwrap();

        assert_eq!(uuid.to_string(), VECTOR_UUID);
    }

    #[test]
    fn test_version_and_variant_bits() {
        let uuid = compute_deterministic_uuid("/data/sample.fastq", SHA, 1024000)
            .unwrap()
            .uuid();

        assert_eq!(uuid.get_version_num(), 5);
        assert_eq!(uuid.get_variant(), ::uuid::Variant::RFC4122);
    }

    #[test]
    fn test_reproducible() {
        let a = compute_deterministic_uuid("/data/sample.fastq", SHA, 1024000).unwrap();
        let b = compute_deterministic_uuid("/data/sample.fastq", SHA, 1024000).unwrap();
        let c = compute_deterministic_uuid("/data/sample.fastq", SHA, 1024000).unwrap();

        assert_eq!(a, b);
        assert_eq!(b, c);
    }

    #[test]
    fn test_case_insensitive_digest() {
        let lower = compute_deterministic_uuid("/data/sample.fastq", SHA, 1024000).unwrap();
        let upper =
            compute_deterministic_uuid("/data/sample.fastq", &SHA.to_uppercase(), 1024000)
                .unwrap();

        assert_eq!(lower, upper);
    }

    #[test]
    fn test_equivalent_paths_same_uuid() {
        let expected = compute_deterministic_uuid("/data/sample.fastq", SHA, 10).unwrap();

        for p in [
            "data/sample.fastq",
            "//data//sample.fastq",
            "/data/sample.fastq/",
            "data\\sample.fastq",
        ] {
            assert_eq!(
                compute_deterministic_uuid(p, SHA, 10).unwrap(),
                expected,
                "path {p:?}"
            );
        }
    }

    #[test]
    fn test_different_inputs_different_uuids() {
        let base = compute_deterministic_uuid("/data/sample.fastq", SHA, 1024000).unwrap();
        let other_path = compute_deterministic_uuid("/backup/sample.fastq", SHA, 1024000).unwrap();
        let other_sha = compute_deterministic_uuid(
            "/data/sample.fastq",
            "a3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855",
            1024000,
        )
        .unwrap();
        let other_size = compute_deterministic_uuid("/data/sample.fastq", SHA, 1024001).unwrap();

        assert_ne!(base, other_path);
        assert_ne!(base, other_sha);
        assert_ne!(base, other_size);
    }

    #[test]
    fn test_derive_uuid_matches_pipeline() {
        let identity = DrsIdentity::derive("/data/sample.fastq", SHA, 5).unwrap();
        let direct = derive_uuid(&aced_namespace(), &identity.canonical);

        assert_eq!(direct, identity.uuid);
    }

    #[test]
    fn test_derive_uuid_depends_on_namespace() {
        let identity = DrsIdentity::derive("/data/sample.fastq", SHA, 5).unwrap();
        let under_dns = derive_uuid(&Uuid::NAMESPACE_DNS, &identity.canonical);

        assert_ne!(under_dns, identity.uuid);
    }

    #[test]
    fn test_identity_fields() {
        let identity =
            DrsIdentity::derive("projectA/raw/reads/R1.fastq.gz", VECTOR_SHA, VECTOR_SIZE)
                .unwrap();

        assert_eq!(identity.path.as_str(), VECTOR_PATH);
        assert_eq!(identity.sha256.as_str(), VECTOR_SHA);
        assert_eq!(identity.size, 382991274);
        assert_eq!(
            identity.canonical.as_str(),
            format!("did:gen3:calypr.org:{VECTOR_PATH}:{VECTOR_SHA}:382991274")
        );
        assert_eq!(identity.namespace.to_string(), EXPECTED_NAMESPACE);
        assert_eq!(identity.uuid.to_string(), VECTOR_UUID);
    }

    #[test]
    fn test_derive_checks_rules_in_order() {
        // bad length beats bad size, bad characters beat bad size
        assert_eq!(
            DrsIdentity::derive("/a", "zz", -1),
            Err(UuidError::InvalidDigestLength { actual: 2 })
        );
        assert_eq!(
            DrsIdentity::derive("/a", &"z".repeat(64), -1),
            Err(UuidError::InvalidDigestFormat)
        );
    }

    #[test]
    fn test_validation_runs_first() {
        assert_eq!(
            DrsIdentity::derive("/a", &SHA[..63], 1),
            Err(UuidError::InvalidDigestLength { actual: 63 })
        );
        assert_eq!(
            compute_deterministic_uuid("/a", SHA, -1),
            Err(UuidError::NegativeSize { size: -1 })
        );
    }

    #[test]
    fn test_derive_many_keeps_order_and_errors() {
        let results = derive_many([
            (VECTOR_PATH, VECTOR_SHA, VECTOR_SIZE),
            ("/bad", "nothex", 1),
            ("/data/sample.fastq", SHA, -3),
        ]);

        assert_eq!(results.len(), 3);
        assert_eq!(
            results[0].as_ref().unwrap().uuid.to_string(),
            VECTOR_UUID
        );
        assert!(matches!(
            results[1],
            Err(UuidError::InvalidDigestLength { actual: 6 })
        ));
        assert!(matches!(results[2], Err(UuidError::NegativeSize { size: -3 })));
    }

    #[test]
    fn test_matches() {
        let uuid = compute_deterministic_uuid(VECTOR_PATH, VECTOR_SHA, VECTOR_SIZE).unwrap();

        assert!(uuid.matches(VECTOR_UUID));
        assert!(!uuid.matches(&VECTOR_UUID.to_uppercase()));
        assert!(!uuid.matches(&format!(" {VECTOR_UUID} ")));
        assert!(!uuid.matches(&format!("{{{VECTOR_UUID}}}")));
        assert!(!uuid.matches("d61939fc2919511f88f63d2d8566f5a4"));
        assert!(!uuid.matches("00000000-0000-0000-0000-000000000000"));
        assert!(!uuid.matches(""));
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_identity_serializes_as_flat_strings() {
        let identity = DrsIdentity::derive(VECTOR_PATH, VECTOR_SHA, VECTOR_SIZE).unwrap();
        let value = serde_json::to_value(&identity).unwrap();

        assert_eq!(value["path"], VECTOR_PATH);
        assert_eq!(value["sha256"], VECTOR_SHA);
        assert_eq!(value["size"], 382991274);
        assert_eq!(value["namespace"], EXPECTED_NAMESPACE);
        assert_eq!(value["uuid"], VECTOR_UUID);
        assert!(value["canonical"]
            .as_str()
            .unwrap()
            .starts_with("did:gen3:calypr.org:"));
    }
}
