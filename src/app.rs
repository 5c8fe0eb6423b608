//! HTTP routing configuration

use axum::{middleware::from_fn_with_state, routing::get, Router};
use tower_http::trace::TraceLayer;

use crate::{handlers, middlewares, state};

/// Creates the Axum router with all routes configured.
pub fn app(state: state::AppState) -> Router {
    let auth = from_fn_with_state(state.clone(), middlewares::auth_middlewares::api_key_auth);

    Router::new()
        // Health check endpoint (no auth required)
        .route("/health", get(handlers::health_handlers::health))
        // API endpoints
        .route(
            "/v1/auth/check",
            get(handlers::auth_handlers::check).layer(auth),
        )
        .fallback(handlers::health_handlers::not_found)
        .with_state(state)
        .layer(TraceLayer::new_for_http())
}
