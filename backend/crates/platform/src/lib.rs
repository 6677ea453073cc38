//! Platform Crate - Technical Infrastructure
//!
//! This crate provides shared technical foundations:
//! - Cryptographic utilities (SHA-256, HMAC, Base64, constant-time compare)
//! - Memory-hard digest derivation (Argon2id with pinned cost parameters)
//! - Cookie management
//! - Client IP extraction
//! - Rate limiting infrastructure

pub mod client;
pub mod cookie;
pub mod crypto;
pub mod hashing;
pub mod rate_limit;
