//! Stored Credential
//!
//! The single provisioned credential this deployment verifies against:
//! a salt, a reference digest, and the pinned cost parameters both were
//! provisioned with. Built once at startup from configuration and passed
//! to the handlers as explicit state; the running process never writes it.

use std::fmt;

use platform::hashing::{self, DIGEST_LEN, HashParams, MIN_SALT_LEN};

use crate::domain::value_object::master_secret::MasterSecret;
use crate::error::{AuthError, AuthResult};

/// The provisioned master credential
#[derive(Clone)]
pub struct StoredCredential {
    salt: Vec<u8>,
    reference_digest: Vec<u8>,
    params: HashParams,
}

impl StoredCredential {
    /// Create a stored credential, validating the provisioned values
    ///
    /// Rejecting a short salt or a wrong-length digest here makes bad
    /// provisioning a startup failure instead of a per-request one.
    pub fn new(
        salt: Vec<u8>,
        reference_digest: Vec<u8>,
        params: HashParams,
    ) -> AuthResult<Self> {
        if salt.len() < MIN_SALT_LEN {
            return Err(AuthError::Configuration(format!(
                "salt must be at least {} bytes (got {})",
                MIN_SALT_LEN,
                salt.len()
            )));
        }

        if reference_digest.len() != DIGEST_LEN {
            return Err(AuthError::Configuration(format!(
                "reference digest must be {} bytes (got {})",
                DIGEST_LEN,
                reference_digest.len()
            )));
        }

        Ok(Self {
            salt,
            reference_digest,
            params,
        })
    }

    /// Check a submitted secret against this credential
    ///
    /// Derives the digest under the pinned parameters and compares it to
    /// the reference in constant time. Pure over its inputs; `Ok(false)`
    /// on mismatch.
    pub fn matches(&self, secret: &MasterSecret) -> AuthResult<bool> {
        hashing::verify_digest(
            secret.as_bytes(),
            &self.salt,
            &self.params,
            &self.reference_digest,
        )
        .map_err(|e| AuthError::Internal(e.to_string()))
    }

    /// The pinned cost parameters this credential was provisioned with
    pub fn params(&self) -> &HashParams {
        &self.params
    }
}

impl fmt::Debug for StoredCredential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StoredCredential")
            .field("salt_len", &self.salt.len())
            .field("reference_digest", &"[DIGEST]")
            .field("params", &self.params)
            .finish()
    }
}
