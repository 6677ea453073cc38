//! Registry Traits
//!
//! Interface for session persistence. Implementation is in the
//! infrastructure layer.

use kernel::id::SessionId;

use crate::domain::entity::session::Session;
use crate::error::AuthResult;

/// Session registry trait
#[trait_variant::make(SessionRegistry: Send)]
pub trait LocalSessionRegistry {
    /// Insert a new session
    async fn create(&self, session: &Session) -> AuthResult<()>;

    /// Find session by ID
    async fn find_by_id(&self, session_id: SessionId) -> AuthResult<Option<Session>>;

    /// Update session (e.g., last activity)
    async fn update(&self, session: &Session) -> AuthResult<()>;

    /// Delete a session
    async fn delete(&self, session_id: SessionId) -> AuthResult<()>;

    /// Number of live entries
    async fn count(&self) -> AuthResult<usize>;

    /// Remove expired sessions, returning how many were dropped
    async fn cleanup_expired(&self) -> AuthResult<u64>;
}
