//! API key authentication middleware

use axum::{
    body::Body,
    extract::State,
    http::Request,
    middleware::Next,
    response::Response,
};
use subtle::ConstantTimeEq;
use tracing::{debug, warn};

use crate::{
    error::{AppError, AppResult},
    services::api_key::get_api_key,
    state::AppState,
};

/// Marker placed in request extensions once the caller's key was accepted.
#[derive(Debug, Clone, Copy)]
pub struct AuthenticatedKey;

/// Validates `Authorization: ApiKey <token>` against the configured API key.
pub async fn api_key_auth(
    State(state): State<AppState>,
    mut req: Request<Body>,
    next: Next,
) -> AppResult<Response> {
    let key = get_api_key(req.headers()).map_err(|e| {
        debug!(error = %e, path = %req.uri().path(), "Rejected request credentials");
        AppError::from(e)
    })?;

    // Constant-time comparison
    let matches: bool = key.as_bytes().ct_eq(state.api_key.as_bytes()).into();
    if !matches {
        warn!(path = %req.uri().path(), "Rejected unknown API key");
        return Err(AppError::Unauthorized("Invalid API key".to_string()));
    }

    req.extensions_mut().insert(AuthenticatedKey);
    Ok(next.run(req).await)
}
