//! Auth Router

use axum::{
    Router,
    routing::{get, post},
};
use std::sync::Arc;

use platform::rate_limit::MemoryRateLimitStore;

use crate::application::config::AuthConfig;
use crate::domain::credential::StoredCredential;
use crate::domain::repository::SessionRegistry;
use crate::infra::memory::MemorySessionRegistry;
use crate::presentation::handlers::{self, AuthAppState};

/// Create the auth router with the in-memory session registry
pub fn auth_router(credential: StoredCredential, config: AuthConfig) -> Router {
    auth_router_generic(MemorySessionRegistry::new(), credential, config)
}

/// Create an auth router for any registry implementation
pub fn auth_router_generic<S>(registry: S, credential: StoredCredential, config: AuthConfig) -> Router
where
    S: SessionRegistry + Clone + Send + Sync + 'static,
{
    let state = AuthAppState {
        registry: Arc::new(registry),
        credential: Arc::new(credential),
        config: Arc::new(config),
        rate_limiter: Arc::new(MemoryRateLimitStore::new()),
    };

    Router::new()
        .route(
            "/authorizations",
            post(handlers::authorize::<S>).delete(handlers::revoke::<S>),
        )
        .route(
            "/authorizations/status",
            get(handlers::session_status::<S>),
        )
        .with_state(state)
}
