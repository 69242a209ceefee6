//! Known-answer checks for the derivation.
//!
//! Lets an installed binary confirm it derives the same identifiers as every other
//! implementation of the scheme, without any input files.

use crate::constants::{
    EXPECTED_NAMESPACE, REFERENCE_PATH, REFERENCE_SHA256, REFERENCE_SIZE, REFERENCE_UUID,
};
use crate::{aced_namespace, compute_deterministic_uuid, UuidResult};

/// Result of one known-answer check.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SelfCheck {
    /// Short description of what was checked.
    pub name: &'static str,
    /// Value a conforming implementation produces.
    pub expected: String,
    /// Value this build produced.
    pub actual: String,
}

impl SelfCheck {
    /// Returns true if the produced value equals the expected one.
    pub fn passed(&self) -> bool {
        self.expected == self.actual
    }
}

/// Runs every known-answer check.
///
/// Checks the namespace anchor, the reference vector, path normalisation, digest case folding
/// and the version of derived identifiers. A validation error inside a check is reported as
/// that check's actual value rather than aborting the run.
///
/// # Returns
///
/// Returns one [`SelfCheck`] per check, in a fixed order.
pub fn run_self_check() -> Vec<SelfCheck> {
    let lower = REFERENCE_SHA256.to_ascii_lowercase();
    let upper = REFERENCE_SHA256.to_ascii_uppercase();
    let relative = REFERENCE_PATH.trim_start_matches('/');

    let checks = vec![
        SelfCheck {
            name: "namespace UUID",
            expected: EXPECTED_NAMESPACE.to_owned(),
            actual: aced_namespace().to_string(),
        },
        SelfCheck {
            name: "reference vector",
            expected: REFERENCE_UUID.to_owned(),
            actual: render(compute_deterministic_uuid(
                REFERENCE_PATH,
                REFERENCE_SHA256,
                REFERENCE_SIZE,
            )),
        },
        SelfCheck {
            name: "path normalisation",
            expected: render(compute_deterministic_uuid(
                REFERENCE_PATH,
                &lower,
                REFERENCE_SIZE,
            )),
            actual: render(compute_deterministic_uuid(relative, &lower, REFERENCE_SIZE)),
        },
        SelfCheck {
            name: "case-insensitive digest",
            expected: render(compute_deterministic_uuid(
                REFERENCE_PATH,
                &lower,
                REFERENCE_SIZE,
            )),
            actual: render(compute_deterministic_uuid(
                REFERENCE_PATH,
                &upper,
                REFERENCE_SIZE,
            )),
        },
        SelfCheck {
            name: "identifier version",
            expected: "5".to_owned(),
            actual: render(
                compute_deterministic_uuid(REFERENCE_PATH, REFERENCE_SHA256, REFERENCE_SIZE)
                    .map(|id| id.uuid().get_version_num()),
            ),
        },
    ];

    for check in &checks {
        tracing::debug!(name = check.name, passed = check.passed(), "self check");
    }
    checks
}

fn render<T: std::fmt::Display>(result: UuidResult<T>) -> String {
    match result {
        Ok(value) => value.to_string(),
        Err(e) => format!("error: {e}"),
    }
}
