//! Session Token Codec
//!
//! Sessions are referenced by a signed token of the form
//! `<session uuid>.<base64url HMAC-SHA256 signature>`. The signature lets
//! the endpoint reject forged or damaged cookies without touching the
//! registry.

use base64::Engine;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use hmac::{Hmac, Mac};
use kernel::id::SessionId;
use sha2::Sha256;
use uuid::Uuid;

use crate::error::{AuthError, AuthResult};

type HmacSha256 = Hmac<Sha256>;

/// Generate a signed session token
pub fn sign_session_token(secret: &[u8; 32], session_id: SessionId) -> String {
    let session_id = session_id.to_string();

    let mut mac = HmacSha256::new_from_slice(secret).expect("HMAC can take key of any size");
    mac.update(session_id.as_bytes());
    let signature = mac.finalize().into_bytes();

    format!("{}.{}", session_id, URL_SAFE_NO_PAD.encode(signature))
}

/// Parse and verify a session token
///
/// Any deviation from the expected shape or signature yields
/// `SessionInvalid`; callers cannot distinguish forged from stale.
pub fn parse_session_token(secret: &[u8; 32], token: &str) -> AuthResult<SessionId> {
    let (session_id_str, signature_b64) = token
        .split_once('.')
        .filter(|(_, sig)| !sig.contains('.'))
        .ok_or(AuthError::SessionInvalid)?;

    let mut mac = HmacSha256::new_from_slice(secret).expect("HMAC can take key of any size");
    mac.update(session_id_str.as_bytes());

    let signature = URL_SAFE_NO_PAD
        .decode(signature_b64)
        .map_err(|_| AuthError::SessionInvalid)?;

    mac.verify_slice(&signature)
        .map_err(|_| AuthError::SessionInvalid)?;

    let uuid: Uuid = session_id_str
        .parse()
        .map_err(|_| AuthError::SessionInvalid)?;

    Ok(SessionId::from_uuid(uuid))
}
