//! HTTP Handlers

use axum::Json;
use axum::extract::State;
use axum::http::{HeaderMap, StatusCode, header};
use axum::response::IntoResponse;
use std::sync::Arc;

use platform::client::extract_client_ip;
use platform::cookie::extract_cookie;
use platform::rate_limit::{MemoryRateLimitStore, RateLimitStore};

use crate::application::config::AuthConfig;
use crate::application::{
    AuthorizeInput, AuthorizeUseCase, CheckSessionUseCase, RevokeSessionUseCase,
};
use crate::domain::credential::StoredCredential;
use crate::domain::repository::SessionRegistry;
use crate::error::{AuthError, AuthResult};
use crate::presentation::dto::{AuthorizeRequest, AuthorizeResponse, SessionStatusResponse};

/// Shared state for auth handlers
#[derive(Clone)]
pub struct AuthAppState<S>
where
    S: SessionRegistry + Clone + Send + Sync + 'static,
{
    pub registry: Arc<S>,
    pub credential: Arc<StoredCredential>,
    pub config: Arc<AuthConfig>,
    pub rate_limiter: Arc<MemoryRateLimitStore>,
}

// ============================================================================
// Authorize
// ============================================================================

/// POST /authorizations
pub async fn authorize<S>(
    State(state): State<AuthAppState<S>>,
    headers: HeaderMap,
    axum::extract::ConnectInfo(addr): axum::extract::ConnectInfo<std::net::SocketAddr>,
    Json(req): Json<AuthorizeRequest>,
) -> AuthResult<impl IntoResponse>
where
    S: SessionRegistry + Clone + Send + Sync + 'static,
{
    let client_ip = extract_client_ip(&headers, Some(addr.ip()));
    let rate_key = client_ip
        .map(|ip| ip.to_string())
        .unwrap_or_else(|| "unknown".to_string());

    let limit = state
        .rate_limiter
        .check_and_increment(&rate_key, &state.config.rate_limit)
        .await
        .map_err(|e| AuthError::Internal(e.to_string()))?;

    if !limit.allowed {
        return Err(AuthError::RateLimited);
    }

    let use_case = AuthorizeUseCase::new(
        state.registry.clone(),
        state.credential.clone(),
        state.config.clone(),
    );

    let output = use_case
        .execute(AuthorizeInput {
            master_password: req.master_password,
            client_ip: client_ip.map(|ip| ip.to_string()),
        })
        .await?;

    let cookie = state
        .config
        .cookie_config()
        .build_set_cookie(&output.session_token);

    Ok((
        StatusCode::OK,
        [(header::SET_COOKIE, cookie)],
        Json(AuthorizeResponse {
            expires_at_ms: output.expires_at_ms,
        }),
    ))
}

// ============================================================================
// Revoke
// ============================================================================

/// DELETE /authorizations
pub async fn revoke<S>(
    State(state): State<AuthAppState<S>>,
    headers: HeaderMap,
) -> AuthResult<impl IntoResponse>
where
    S: SessionRegistry + Clone + Send + Sync + 'static,
{
    let token = extract_cookie(&headers, &state.config.session_cookie_name);

    if let Some(token) = token {
        let use_case = RevokeSessionUseCase::new(state.registry.clone(), state.config.clone());
        // Ignore errors - just clear the cookie
        let _ = use_case.execute(&token).await;
    }

    let cookie = state.config.cookie_config().build_delete_cookie();

    Ok((StatusCode::NO_CONTENT, [(header::SET_COOKIE, cookie)]))
}

// ============================================================================
// Session Status
// ============================================================================

/// GET /authorizations/status
pub async fn session_status<S>(
    State(state): State<AuthAppState<S>>,
    headers: HeaderMap,
) -> AuthResult<Json<SessionStatusResponse>>
where
    S: SessionRegistry + Clone + Send + Sync + 'static,
{
    let token = extract_cookie(&headers, &state.config.session_cookie_name);

    let use_case = CheckSessionUseCase::new(state.registry.clone(), state.config.clone());

    let status = if let Some(token) = token {
        use_case.execute(&token).await.ok()
    } else {
        None
    };

    match status {
        Some(info) => Ok(Json(SessionStatusResponse {
            authenticated: true,
            expires_at_ms: Some(info.expires_at_ms),
        })),
        None => Ok(Json(SessionStatusResponse {
            authenticated: false,
            expires_at_ms: None,
        })),
    }
}
