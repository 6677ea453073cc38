//! Auth (Authorization Gate) Backend Module
//!
//! The master-password gate in front of the Corso vault.
//!
//! Clean Architecture structure:
//! - `domain/` - Credential, session entity, registry trait
//! - `application/` - Use cases, config, token codec
//! - `infra/` - In-memory registry implementation
//! - `presentation/` - HTTP handlers, DTOs, router, middleware
//!
//! ## Features
//! - Single-operator master password verification (Argon2id, pinned
//!   cost parameters, constant-time comparison)
//! - Server-side sessions with HMAC-signed cookie tokens
//! - Session status, revocation, and a gate middleware for vault routes
//!
//! ## Security Model
//! - One provisioned credential per deployment; the process only reads it
//! - Cost parameters are provisioning-time constants, never derived from
//!   the host processor count
//! - Session cookies are HttpOnly, Secure, SameSite=Strict

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;


// Re-exports for convenience
pub use application::config::AuthConfig;
pub use domain::credential::StoredCredential;
pub use domain::value_object::master_secret::MasterSecret;
pub use error::{AuthError, AuthResult};
pub use infra::memory::MemorySessionRegistry;
pub use presentation::router::{auth_router, auth_router_generic};

// Re-export kernel error types for unified error handling
pub use kernel::error::{
    app_error::{AppError, AppResult},
    kind::ErrorKind,
};
