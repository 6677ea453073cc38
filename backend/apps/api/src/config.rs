//! Runtime Configuration
//!
//! Loads the provisioned credential and server settings from the
//! environment. A missing or malformed required value is fatal: `main`
//! propagates the error and the process never starts serving.

use std::env;
use std::net::SocketAddr;

use anyhow::{Context, bail};
use auth::{AuthConfig, StoredCredential};
use platform::crypto::from_base64;
use platform::hashing::HashParams;

/// Everything `main` needs, resolved from the environment
#[derive(Debug)]
pub struct RuntimeConfig {
    pub credential: StoredCredential,
    pub auth: AuthConfig,
    pub listen_addr: SocketAddr,
}

impl RuntimeConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        let salt = env::var("CORSO_SALT")
            .context("CORSO_SALT must be set (the provisioned salt string)")?;

        let master_hash = env::var("CORSO_MASTER_HASH")
            .context("CORSO_MASTER_HASH must be set (base64 reference digest)")?;
        let reference_digest =
            from_base64(&master_hash).context("CORSO_MASTER_HASH must be valid base64")?;

        let params = hash_params_from_env()?;

        let credential = StoredCredential::new(salt.into_bytes(), reference_digest, params)?;

        let auth = auth_config_from_env()?;

        let listen_addr = match env::var("CORSO_LISTEN_ADDR") {
            Ok(value) => value
                .parse()
                .context("CORSO_LISTEN_ADDR must be a socket address like 0.0.0.0:8080")?,
            Err(_) => SocketAddr::from(([0, 0, 0, 0], 8080)),
        };

        Ok(Self {
            credential,
            auth,
            listen_addr,
        })
    }
}

/// Pinned Argon2 cost parameters, with optional environment overrides
///
/// These must stay byte-identical to the values used when the reference
/// digest was provisioned. They are never derived from the host.
fn hash_params_from_env() -> anyhow::Result<HashParams> {
    let defaults = HashParams::default();

    Ok(HashParams {
        time_cost: env_u32("CORSO_ARGON2_TIME_COST", defaults.time_cost)?,
        memory_kib: env_u32("CORSO_ARGON2_MEMORY_KIB", defaults.memory_kib)?,
        parallelism: env_u32("CORSO_ARGON2_PARALLELISM", defaults.parallelism)?,
    })
}

fn auth_config_from_env() -> anyhow::Result<AuthConfig> {
    match env::var("CORSO_SESSION_SECRET") {
        Ok(b64) => {
            let bytes =
                from_base64(&b64).context("CORSO_SESSION_SECRET must be valid base64")?;
            if bytes.len() != 32 {
                bail!(
                    "CORSO_SESSION_SECRET must decode to 32 bytes (got {})",
                    bytes.len()
                );
            }
            let mut secret = [0u8; 32];
            secret.copy_from_slice(&bytes);
            Ok(AuthConfig {
                session_secret: secret,
                ..AuthConfig::default()
            })
        }
        Err(_) if cfg!(debug_assertions) => {
            tracing::warn!("CORSO_SESSION_SECRET not set, using a random per-process secret");
            Ok(AuthConfig::development())
        }
        Err(_) => bail!("CORSO_SESSION_SECRET must be set in release builds"),
    }
}

fn env_u32(name: &str, default: u32) -> anyhow::Result<u32> {
    match env::var(name) {
        Ok(value) => value
            .parse()
            .with_context(|| format!("{name} must be an unsigned integer")),
        Err(_) => Ok(default),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use platform::crypto::to_base64;

    fn digest_b64() -> String {
        to_base64(&[0u8; 32])
    }

    fn secret_b64() -> String {
        to_base64(&[1u8; 32])
    }

    #[test]
    fn test_missing_salt_is_fatal() {
        let digest = digest_b64();
        temp_env::with_vars(
            [
                ("CORSO_SALT", None::<&str>),
                ("CORSO_MASTER_HASH", Some(digest.as_str())),
            ],
            || {
                let err = RuntimeConfig::from_env().unwrap_err();
                assert!(err.to_string().contains("CORSO_SALT"));
            },
        );
    }

    #[test]
    fn test_missing_master_hash_is_fatal() {
        temp_env::with_vars(
            [
                ("CORSO_SALT", Some("abc123-salt")),
                ("CORSO_MASTER_HASH", None),
            ],
            || {
                let err = RuntimeConfig::from_env().unwrap_err();
                assert!(err.to_string().contains("CORSO_MASTER_HASH"));
            },
        );
    }

    #[test]
    fn test_invalid_base64_hash_is_fatal() {
        let secret = secret_b64();
        temp_env::with_vars(
            [
                ("CORSO_SALT", Some("abc123-salt")),
                ("CORSO_MASTER_HASH", Some("!!not base64!!")),
                ("CORSO_SESSION_SECRET", Some(secret.as_str())),
            ],
            || {
                let err = RuntimeConfig::from_env().unwrap_err();
                assert!(err.to_string().contains("base64"));
            },
        );
    }

    #[test]
    fn test_short_salt_is_fatal() {
        let digest = digest_b64();
        let secret = secret_b64();
        temp_env::with_vars(
            [
                ("CORSO_SALT", Some("abc123")),
                ("CORSO_MASTER_HASH", Some(digest.as_str())),
                ("CORSO_SESSION_SECRET", Some(secret.as_str())),
            ],
            || {
                let err = RuntimeConfig::from_env().unwrap_err();
                assert!(err.to_string().contains("salt"));
            },
        );
    }

    #[test]
    fn test_wrong_secret_length_is_fatal() {
        let digest = digest_b64();
        let short_secret = to_base64(&[1u8; 16]);
        temp_env::with_vars(
            [
                ("CORSO_SALT", Some("abc123-salt")),
                ("CORSO_MASTER_HASH", Some(digest.as_str())),
                ("CORSO_SESSION_SECRET", Some(short_secret.as_str())),
            ],
            || {
                let err = RuntimeConfig::from_env().unwrap_err();
                assert!(err.to_string().contains("32 bytes"));
            },
        );
    }

    #[test]
    fn test_full_environment_loads() {
        let digest = digest_b64();
        let secret = secret_b64();
        temp_env::with_vars(
            [
                ("CORSO_SALT", Some("abc123-salt")),
                ("CORSO_MASTER_HASH", Some(digest.as_str())),
                ("CORSO_SESSION_SECRET", Some(secret.as_str())),
                ("CORSO_ARGON2_TIME_COST", Some("3")),
                ("CORSO_ARGON2_MEMORY_KIB", Some("32768")),
                ("CORSO_ARGON2_PARALLELISM", Some("1")),
                ("CORSO_LISTEN_ADDR", Some("127.0.0.1:9000")),
            ],
            || {
                let config = RuntimeConfig::from_env().unwrap();

                assert_eq!(config.credential.params().time_cost, 3);
                assert_eq!(config.credential.params().memory_kib, 32768);
                assert_eq!(config.credential.params().parallelism, 1);
                assert_eq!(config.listen_addr, "127.0.0.1:9000".parse().unwrap());
                assert_eq!(config.auth.session_secret, [1u8; 32]);
            },
        );
    }

    #[test]
    fn test_params_default_to_pinned_values() {
        let digest = digest_b64();
        let secret = secret_b64();
        temp_env::with_vars(
            [
                ("CORSO_SALT", Some("abc123-salt")),
                ("CORSO_MASTER_HASH", Some(digest.as_str())),
                ("CORSO_SESSION_SECRET", Some(secret.as_str())),
                ("CORSO_ARGON2_TIME_COST", None),
                ("CORSO_ARGON2_MEMORY_KIB", None),
                ("CORSO_ARGON2_PARALLELISM", None),
            ],
            || {
                let config = RuntimeConfig::from_env().unwrap();
                assert_eq!(*config.credential.params(), HashParams::default());
            },
        );
    }

    #[test]
    fn test_bad_parallelism_is_fatal() {
        let digest = digest_b64();
        let secret = secret_b64();
        temp_env::with_vars(
            [
                ("CORSO_SALT", Some("abc123-salt")),
                ("CORSO_MASTER_HASH", Some(digest.as_str())),
                ("CORSO_SESSION_SECRET", Some(secret.as_str())),
                ("CORSO_ARGON2_PARALLELISM", Some("two")),
            ],
            || {
                let err = RuntimeConfig::from_env().unwrap_err();
                assert!(err.to_string().contains("CORSO_ARGON2_PARALLELISM"));
            },
        );
    }
}
