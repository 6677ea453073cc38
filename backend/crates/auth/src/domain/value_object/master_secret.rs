//! Master Secret Value Object
//!
//! The submitted master password, validated and held only for the
//! lifetime of a single authorization attempt.
//!
//! ## Security
//! - Implements `Zeroize` and `ZeroizeOnDrop`
//! - Does not implement `Clone` to prevent accidental copies
//! - Debug output is redacted

use std::fmt;

use unicode_normalization::UnicodeNormalization;
use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::error::{AuthError, AuthResult};

/// Minimum master secret length in Unicode scalar values
pub const MIN_SECRET_LENGTH: usize = 8;

/// Maximum master secret length in Unicode scalar values
pub const MAX_SECRET_LENGTH: usize = 32;

/// Validated master secret from user input
///
/// Input is NFKC-normalized before validation so that visually identical
/// secrets typed on different platforms compare equal after hashing.
#[derive(Zeroize, ZeroizeOnDrop)]
pub struct MasterSecret(String);

impl MasterSecret {
    /// Create a new master secret with validation
    ///
    /// The only validation rule is the length constraint: the normalized
    /// secret must contain between [`MIN_SECRET_LENGTH`] and
    /// [`MAX_SECRET_LENGTH`] Unicode scalar values. Anything in range is
    /// accepted; a wrong-but-well-formed secret simply fails verification.
    pub fn new(raw: String) -> AuthResult<Self> {
        let normalized: String = raw.nfkc().collect();

        let char_count = normalized.chars().count();

        if char_count < MIN_SECRET_LENGTH {
            return Err(AuthError::SecretValidation(format!(
                "must be at least {} characters (got {})",
                MIN_SECRET_LENGTH, char_count
            )));
        }

        if char_count > MAX_SECRET_LENGTH {
            return Err(AuthError::SecretValidation(format!(
                "must be at most {} characters (got {})",
                MAX_SECRET_LENGTH, char_count
            )));
        }

        Ok(Self(normalized))
    }

    /// Get the secret as bytes for digest derivation
    pub fn as_bytes(&self) -> &[u8] {
        self.0.as_bytes()
    }
}

impl fmt::Debug for MasterSecret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("MasterSecret").field(&"[REDACTED]").finish()
    }
}
