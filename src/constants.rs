//! Common constants used across the application

/// Credential scheme expected in front of the key in `Authorization`
pub const API_KEY_SCHEME: &str = "ApiKey";
