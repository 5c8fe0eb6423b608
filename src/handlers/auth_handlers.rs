//! Credential check endpoint

use axum::{http::StatusCode, response::IntoResponse, Extension, Json};
use serde::Serialize;

use crate::middlewares::auth_middlewares::AuthenticatedKey;

#[derive(Serialize)]
struct AuthCheckResponse {
    status: &'static str,
}

/// Confirms that the presented API key was accepted.
pub async fn check(Extension(_): Extension<AuthenticatedKey>) -> impl IntoResponse {
    (
        StatusCode::OK,
        Json(AuthCheckResponse {
            status: "authorized",
        }),
    )
}
