//! Authorize Use Case
//!
//! Verifies a submitted master password and issues a session.

use std::sync::Arc;

use crate::application::config::AuthConfig;
use crate::application::token;
use crate::domain::credential::StoredCredential;
use crate::domain::entity::session::Session;
use crate::domain::repository::SessionRegistry;
use crate::domain::value_object::master_secret::MasterSecret;
use crate::error::{AuthError, AuthResult};

/// Authorize input
pub struct AuthorizeInput {
    /// Submitted master password
    pub master_password: String,
    /// Client IP, for session records and logs
    pub client_ip: Option<String>,
}

/// Authorize output
pub struct AuthorizeOutput {
    /// Session token for cookie
    pub session_token: String,
    /// Session expiration (Unix timestamp ms)
    pub expires_at_ms: i64,
}

/// Authorize use case
pub struct AuthorizeUseCase<S>
where
    S: SessionRegistry,
{
    registry: Arc<S>,
    credential: Arc<StoredCredential>,
    config: Arc<AuthConfig>,
}

impl<S> AuthorizeUseCase<S>
where
    S: SessionRegistry,
{
    pub fn new(
        registry: Arc<S>,
        credential: Arc<StoredCredential>,
        config: Arc<AuthConfig>,
    ) -> Self {
        Self {
            registry,
            credential,
            config,
        }
    }

    pub async fn execute(&self, input: AuthorizeInput) -> AuthResult<AuthorizeOutput> {
        // Length validation happens before any digest work
        let secret = MasterSecret::new(input.master_password)?;

        if !self.credential.matches(&secret)? {
            return Err(AuthError::InvalidCredentials);
        }

        // Opportunistic sweep keeps the registry bounded without a
        // background task
        self.registry.cleanup_expired().await?;

        let ttl = chrono::Duration::from_std(self.config.session_ttl)
            .map_err(|e| AuthError::Internal(format!("Invalid session TTL: {e}")))?;

        let session = Session::new(input.client_ip, ttl);
        self.registry.create(&session).await?;

        let session_token =
            token::sign_session_token(&self.config.session_secret, session.session_id);

        tracing::info!(
            session_id = %session.session_id,
            client_ip = session.client_ip.as_deref().unwrap_or("unknown"),
            "Master password accepted, session issued"
        );

        Ok(AuthorizeOutput {
            session_token,
            expires_at_ms: session.expires_at_ms,
        })
    }
}
