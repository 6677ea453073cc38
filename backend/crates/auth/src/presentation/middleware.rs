//! Auth Middleware
//!
//! Middleware for requiring an authorized session on protected routes
//! (the vault surfaces mounted behind this gate).

use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};
use std::sync::Arc;

use crate::application::CheckSessionUseCase;
use crate::application::config::AuthConfig;
use crate::domain::repository::SessionRegistry;

/// Middleware state
#[derive(Clone)]
pub struct SessionMiddlewareState<S>
where
    S: SessionRegistry + Clone + Send + Sync + 'static,
{
    pub registry: Arc<S>,
    pub config: Arc<AuthConfig>,
}

/// Middleware that requires a valid session
pub async fn require_session<S>(
    state: SessionMiddlewareState<S>,
    req: Request<Body>,
    next: Next,
) -> Result<Response, Response>
where
    S: SessionRegistry + Clone + Send + Sync + 'static,
{
    let token =
        platform::cookie::extract_cookie(req.headers(), &state.config.session_cookie_name);

    let use_case = CheckSessionUseCase::new(state.registry.clone(), state.config.clone());

    let session_valid = if let Some(token) = token {
        use_case.is_valid(&token).await
    } else {
        false
    };

    if !session_valid {
        return Err((StatusCode::UNAUTHORIZED, [("X-Auth-Required", "true")]).into_response());
    }

    Ok(next.run(req).await)
}
