//! Check Session Use Case
//!
//! Verifies and retrieves session information.

use std::sync::Arc;

use crate::application::config::AuthConfig;
use crate::application::token;
use crate::domain::entity::session::Session;
use crate::domain::repository::SessionRegistry;
use crate::error::{AuthError, AuthResult};

/// Session info output
pub struct SessionStatus {
    pub expires_at_ms: i64,
}

/// Check session use case
pub struct CheckSessionUseCase<S>
where
    S: SessionRegistry,
{
    registry: Arc<S>,
    config: Arc<AuthConfig>,
}

impl<S> CheckSessionUseCase<S>
where
    S: SessionRegistry,
{
    pub fn new(registry: Arc<S>, config: Arc<AuthConfig>) -> Self {
        Self { registry, config }
    }

    /// Check if session is valid and return session info
    pub async fn execute(&self, session_token: &str) -> AuthResult<SessionStatus> {
        let session = self.get_session(session_token).await?;

        Ok(SessionStatus {
            expires_at_ms: session.expires_at_ms,
        })
    }

    /// Just check if session is valid (returns bool)
    pub async fn is_valid(&self, session_token: &str) -> bool {
        self.get_session(session_token).await.is_ok()
    }

    /// Get session and update last activity
    ///
    /// Expired sessions are removed on sight (lazy enforcement).
    pub async fn get_session(&self, session_token: &str) -> AuthResult<Session> {
        let session_id = token::parse_session_token(&self.config.session_secret, session_token)?;

        let session = self
            .registry
            .find_by_id(session_id)
            .await?
            .ok_or(AuthError::SessionInvalid)?;

        if session.is_expired() {
            self.registry.delete(session_id).await?;
            return Err(AuthError::SessionInvalid);
        }

        let mut session = session;
        session.touch();
        self.registry.update(&session).await?;

        Ok(session)
    }
}
