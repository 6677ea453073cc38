//! Memory-Hard Digest Derivation
//!
//! Argon2id digest derivation with explicit, pinned cost parameters.
//!
//! ## Security Model
//! - Memory-hard hashing resists GPU/ASIC brute force
//! - Cost parameters are provisioning-time configuration, never derived
//!   from the host (a digest computed under one parallelism degree does
//!   not verify under another, so deriving parallelism from the processor
//!   count breaks verification after migrating between hosts)
//! - Comparison against a reference digest is constant-time

use argon2::{Algorithm, Argon2, Params, Version};
use thiserror::Error;

use crate::crypto::constant_time_eq;

/// Derived digest length in bytes
pub const DIGEST_LEN: usize = 32;

/// Minimum salt length accepted by Argon2
pub const MIN_SALT_LEN: usize = 8;

/// Pinned Argon2id cost parameters
///
/// All three values are fixed at provisioning time and must be identical
/// when the reference digest is computed and when a submitted secret is
/// verified. Treat them as versioned configuration, not tunables.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HashParams {
    /// Number of iterations (time cost)
    pub time_cost: u32,
    /// Memory size in KiB
    pub memory_kib: u32,
    /// Degree of parallelism (lanes)
    pub parallelism: u32,
}

impl Default for HashParams {
    fn default() -> Self {
        Self {
            time_cost: 4,
            memory_kib: 65536, // 64 MiB
            parallelism: 2,
        }
    }
}

/// Digest derivation errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HashingError {
    /// Cost parameters rejected by Argon2
    #[error("Invalid Argon2 parameters: {0}")]
    InvalidParams(String),

    /// Salt shorter than the Argon2 minimum
    #[error("Salt must be at least {min} bytes (got {actual})")]
    SaltTooShort { min: usize, actual: usize },

    /// Derivation itself failed
    #[error("Digest derivation failed: {0}")]
    DerivationFailed(String),
}

/// Derive a fixed-length Argon2id digest from a secret and salt
///
/// The same (secret, salt, params) triple always yields the same digest;
/// changing any single cost parameter changes the digest.
pub fn derive_digest(
    secret: &[u8],
    salt: &[u8],
    params: &HashParams,
) -> Result<[u8; DIGEST_LEN], HashingError> {
    if salt.len() < MIN_SALT_LEN {
        return Err(HashingError::SaltTooShort {
            min: MIN_SALT_LEN,
            actual: salt.len(),
        });
    }

    let argon2_params = Params::new(
        params.memory_kib,
        params.time_cost,
        params.parallelism,
        Some(DIGEST_LEN),
    )
    .map_err(|e| HashingError::InvalidParams(e.to_string()))?;

    let argon2 = Argon2::new(Algorithm::Argon2id, Version::V0x13, argon2_params);

    let mut digest = [0u8; DIGEST_LEN];
    argon2
        .hash_password_into(secret, salt, &mut digest)
        .map_err(|e| HashingError::DerivationFailed(e.to_string()))?;

    Ok(digest)
}

/// Derive a digest and compare it to a reference in constant time
///
/// Returns `Ok(false)` on any mismatch, including a reference of the
/// wrong length. Errors only for unusable inputs (bad salt/parameters).
pub fn verify_digest(
    secret: &[u8],
    salt: &[u8],
    params: &HashParams,
    reference: &[u8],
) -> Result<bool, HashingError> {
    let digest = derive_digest(secret, salt, params)?;
    Ok(constant_time_eq(&digest, reference))
}

#[cfg(test)]
mod tests {
    use super::*;

    // Small parameters keep the unit tests fast; the provisioning-scale
    // scenario below uses the real defaults.
    const FAST: HashParams = HashParams {
        time_cost: 1,
        memory_kib: 1024,
        parallelism: 1,
    };

    #[test]
    fn test_derivation_is_reproducible() {
        let a = derive_digest(b"CorrectHorseBattery", b"abc123-salt", &FAST).unwrap();
        let b = derive_digest(b"CorrectHorseBattery", b"abc123-salt", &FAST).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_secret_changes_digest() {
        let a = derive_digest(b"CorrectHorseBattery", b"abc123-salt", &FAST).unwrap();
        let b = derive_digest(b"WrongHorseBattery", b"abc123-salt", &FAST).unwrap();
        assert_ne!(a, b);
    }

    #[test]
    fn test_salt_changes_digest() {
        let a = derive_digest(b"CorrectHorseBattery", b"abc123-salt", &FAST).unwrap();
        let b = derive_digest(b"CorrectHorseBattery", b"xyz789-salt", &FAST).unwrap();
        assert_ne!(a, b);
    }

    #[test]
    fn test_parallelism_changes_digest() {
        // The digest is sensitive to the parallelism degree. If the degree
        // were recomputed from the host processor count, a reference digest
        // provisioned on one machine would stop verifying on another.
        let two_lanes = HashParams {
            parallelism: 2,
            ..FAST
        };
        let eight_lanes = HashParams {
            parallelism: 8,
            ..FAST
        };

        let a = derive_digest(b"CorrectHorseBattery", b"abc123-salt", &two_lanes).unwrap();
        let b = derive_digest(b"CorrectHorseBattery", b"abc123-salt", &eight_lanes).unwrap();
        assert_ne!(a, b);
    }

    #[test]
    fn test_time_and_memory_change_digest() {
        let base = derive_digest(b"CorrectHorseBattery", b"abc123-salt", &FAST).unwrap();

        let more_time = HashParams {
            time_cost: 2,
            ..FAST
        };
        assert_ne!(
            base,
            derive_digest(b"CorrectHorseBattery", b"abc123-salt", &more_time).unwrap()
        );

        let more_memory = HashParams {
            memory_kib: 2048,
            ..FAST
        };
        assert_ne!(
            base,
            derive_digest(b"CorrectHorseBattery", b"abc123-salt", &more_memory).unwrap()
        );
    }

    #[test]
    fn test_salt_too_short() {
        let result = derive_digest(b"CorrectHorseBattery", b"abc123", &FAST);
        assert!(matches!(
            result,
            Err(HashingError::SaltTooShort { min: 8, actual: 6 })
        ));
    }

    #[test]
    fn test_verify_digest() {
        let reference = derive_digest(b"CorrectHorseBattery", b"abc123-salt", &FAST).unwrap();

        assert!(verify_digest(b"CorrectHorseBattery", b"abc123-salt", &FAST, &reference).unwrap());
        assert!(!verify_digest(b"WrongHorseBattery", b"abc123-salt", &FAST, &reference).unwrap());
        // Truncated reference never matches
        assert!(
            !verify_digest(b"CorrectHorseBattery", b"abc123-salt", &FAST, &reference[..16])
                .unwrap()
        );
    }

    #[test]
    fn test_provisioning_scale_parallelism_pinning() {
        // Provisioning-scale parameters: a reference digest computed with
        // parallelism=2 verifies only under parallelism=2. Recomputing the
        // degree as 8 (a larger host) must fail verification.
        let provisioned = HashParams {
            time_cost: 4,
            memory_kib: 65536,
            parallelism: 2,
        };
        let migrated_host = HashParams {
            parallelism: 8,
            ..provisioned
        };

        let reference =
            derive_digest(b"CorrectHorseBattery", b"abc123-salt", &provisioned).unwrap();

        assert!(
            verify_digest(b"CorrectHorseBattery", b"abc123-salt", &provisioned, &reference)
                .unwrap()
        );
        assert!(
            !verify_digest(b"CorrectHorseBattery", b"abc123-salt", &migrated_host, &reference)
                .unwrap()
        );
    }

    #[test]
    fn test_invalid_params_rejected() {
        // Argon2 requires memory >= 8 * parallelism
        let bad = HashParams {
            time_cost: 1,
            memory_kib: 8,
            parallelism: 4,
        };
        let result = derive_digest(b"CorrectHorseBattery", b"abc123-salt", &bad);
        assert!(matches!(result, Err(HashingError::InvalidParams(_))));
    }
}
