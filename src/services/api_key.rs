//! `Authorization: ApiKey <token>` header parsing

use axum::http::{header::AUTHORIZATION, HeaderMap};
use thiserror::Error;

use crate::constants::API_KEY_SCHEME;

/// Reasons an API key could not be read from a request.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthError {
    /// `Authorization` is absent or its value is empty
    #[error("no authorization header included")]
    NoAuthHeaderIncluded,

    /// `Authorization` does not look like `ApiKey <token>`
    #[error("malformed authorization header")]
    MalformedHeader,
}

/// Extracts the API key from the `Authorization` header.
///
/// Only the first `Authorization` value is considered. The token is the
/// text after the first space, returned as-is.
pub fn get_api_key(headers: &HeaderMap) -> Result<&str, AuthError> {
    let Some(value) = headers.get(AUTHORIZATION) else {
        return Err(AuthError::NoAuthHeaderIncluded);
    };

    if value.is_empty() {
        return Err(AuthError::NoAuthHeaderIncluded);
    }

    let value = value.to_str().map_err(|_| AuthError::MalformedHeader)?;

    let (scheme, token) = value.split_once(' ').ok_or(AuthError::MalformedHeader)?;

    if scheme != API_KEY_SCHEME || token.is_empty() {
        return Err(AuthError::MalformedHeader);
    }

    Ok(token)
}
