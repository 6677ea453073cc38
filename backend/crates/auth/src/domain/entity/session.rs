//! Session Entity
//!
//! Represents an authorized operator session. Stored in the process-wide
//! session registry with a cookie-based token reference.

use chrono::{DateTime, Duration, Utc};
use kernel::id::SessionId;

/// Auth session entity
#[derive(Debug, Clone)]
pub struct Session {
    /// Session ID (UUID v4, unguessable)
    pub session_id: SessionId,
    /// Session expiration (Unix timestamp ms)
    pub expires_at_ms: i64,
    /// Client IP (optional, for logging)
    pub client_ip: Option<String>,
    /// Created timestamp
    pub created_at: DateTime<Utc>,
    /// Last activity timestamp
    pub last_activity_at: DateTime<Utc>,
}

impl Session {
    /// Create a new session
    ///
    /// TTL is provided by the application layer (config), not hard-coded here.
    pub fn new(client_ip: Option<String>, ttl: Duration) -> Self {
        let now = Utc::now();

        Self {
            session_id: SessionId::new(),
            expires_at_ms: (now + ttl).timestamp_millis(),
            client_ip,
            created_at: now,
            last_activity_at: now,
        }
    }

    /// Check if session has expired
    pub fn is_expired(&self) -> bool {
        Utc::now().timestamp_millis() > self.expires_at_ms
    }

    /// Update last activity timestamp
    pub fn touch(&mut self) {
        self.last_activity_at = Utc::now();
    }

    /// Get remaining time until expiration
    pub fn remaining_ms(&self) -> i64 {
        let now_ms = Utc::now().timestamp_millis();
        (self.expires_at_ms - now_ms).max(0)
    }
}
