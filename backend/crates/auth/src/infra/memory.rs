//! In-Memory Registry Implementation
//!
//! Session storage for the single-process, single-operator deployment
//! model. Sessions do not survive a restart; the operator re-authorizes.

use std::collections::HashMap;
use std::sync::Arc;

use kernel::id::SessionId;
use tokio::sync::RwLock;

use crate::domain::entity::session::Session;
use crate::domain::repository::SessionRegistry;
use crate::error::{AuthError, AuthResult};

/// Memory-backed session registry
#[derive(Clone, Default)]
pub struct MemorySessionRegistry {
    sessions: Arc<RwLock<HashMap<SessionId, Session>>>,
}

impl MemorySessionRegistry {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SessionRegistry for MemorySessionRegistry {
    async fn create(&self, session: &Session) -> AuthResult<()> {
        let mut sessions = self.sessions.write().await;

        // UUID v4 collisions are not expected; refuse rather than clobber
        if sessions.contains_key(&session.session_id) {
            return Err(AuthError::Internal(format!(
                "duplicate session id {}",
                session.session_id
            )));
        }

        sessions.insert(session.session_id, session.clone());
        Ok(())
    }

    async fn find_by_id(&self, session_id: SessionId) -> AuthResult<Option<Session>> {
        let sessions = self.sessions.read().await;
        Ok(sessions.get(&session_id).cloned())
    }

    async fn update(&self, session: &Session) -> AuthResult<()> {
        let mut sessions = self.sessions.write().await;
        sessions.insert(session.session_id, session.clone());
        Ok(())
    }

    async fn delete(&self, session_id: SessionId) -> AuthResult<()> {
        let mut sessions = self.sessions.write().await;
        sessions.remove(&session_id);
        Ok(())
    }

    async fn count(&self) -> AuthResult<usize> {
        let sessions = self.sessions.read().await;
        Ok(sessions.len())
    }

    async fn cleanup_expired(&self) -> AuthResult<u64> {
        let mut sessions = self.sessions.write().await;

        let before = sessions.len();
        sessions.retain(|_, session| !session.is_expired());
        let removed = (before - sessions.len()) as u64;

        if removed > 0 {
            tracing::debug!(sessions_deleted = removed, "Cleaned up expired sessions");
        }

        Ok(removed)
    }
}
