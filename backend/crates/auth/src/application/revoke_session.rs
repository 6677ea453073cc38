//! Revoke Session Use Case
//!
//! Explicitly invalidates the current session.

use std::sync::Arc;

use crate::application::config::AuthConfig;
use crate::application::token;
use crate::domain::repository::SessionRegistry;
use crate::error::AuthResult;

/// Revoke session use case
pub struct RevokeSessionUseCase<S>
where
    S: SessionRegistry,
{
    registry: Arc<S>,
    config: Arc<AuthConfig>,
}

impl<S> RevokeSessionUseCase<S>
where
    S: SessionRegistry,
{
    pub fn new(registry: Arc<S>, config: Arc<AuthConfig>) -> Self {
        Self { registry, config }
    }

    /// Revoke the session referenced by the token
    pub async fn execute(&self, session_token: &str) -> AuthResult<()> {
        let session_id = token::parse_session_token(&self.config.session_secret, session_token)?;
        self.registry.delete(session_id).await?;

        tracing::info!(session_id = %session_id, "Session revoked");
        Ok(())
    }
}
