//! Reference code generation.
//!
//! Every billable entity carries a human-readable `{PREFIX}-{SUFFIX}` code
//! next to its ID. Suffixes are random, so uniqueness is enforced by the
//! database and generation is retried on collisions.

use serde::Deserialize;
use smart_default::SmartDefault;
use uuid::Uuid;

/// Length of the random suffix in a reference code.
pub(crate) const SUFFIX_LENGTH: usize = 6;

/// Generates a random reference code suffix.
pub(crate) fn random_suffix() -> String {
    Uuid::new_v4().simple().to_string()[..SUFFIX_LENGTH].to_uppercase()
}

/// Checks whether the provided `code` is a `{prefix}-{suffix}` reference
/// code with the expected `prefix`.
pub(crate) fn check(code: &str, prefix: &str) -> bool {
    code.strip_prefix(prefix)
        .and_then(|rest| rest.strip_prefix('-'))
        .is_some_and(|suffix| {
            suffix.len() == SUFFIX_LENGTH
                && suffix.chars().all(|c| {
                    c.is_ascii_hexdigit() && !c.is_ascii_lowercase()
                })
        })
}

/// Configuration of reference code generation.
#[derive(Clone, Copy, Debug, Deserialize, SmartDefault)]
#[serde(default)]
pub struct Config {
    /// Maximum number of generation attempts before giving up on finding a
    /// vacant reference code.
    #[default(5)]
    pub max_attempts: u32,
}

#[cfg(test)]
mod spec {
    use super::{check, random_suffix, SUFFIX_LENGTH};

    #[test]
    fn random_suffix_is_uppercase_hex() {
        for _ in 0..64 {
            let suffix = random_suffix();
            assert_eq!(suffix.len(), SUFFIX_LENGTH);
            assert!(suffix
                .chars()
                .all(|c| c.is_ascii_hexdigit() && !c.is_ascii_lowercase()));
        }
    }

    #[test]
    fn check_accepts_well_formed_codes_only() {
        assert!(check("CT-0A1B2C", "CT"));
        assert!(check("PM-FFFFFF", "PM"));

        assert!(!check("CT-0A1B2", "CT"));
        assert!(!check("CT-0A1B2C7", "CT"));
        assert!(!check("CT0A1B2C", "CT"));
        assert!(!check("PM-0A1B2C", "CT"));
        assert!(!check("CT-0a1b2c", "CT"));
        assert!(!check("CT-0A1B2G", "CT"));
    }
}
