//! 환경 변수 설정 모듈.

use std::env;
use std::sync::{LazyLock, Once};

static INIT: Once = Once::new();

/// Loads the `.env` file once per process.
fn init_env() {
    INIT.call_once(|| {
        if let Err(e) = dotenvy::dotenv() {
            tracing::warn!("Warning: .env file not found or error loading: {e}");
        }
    });
}

/// Retrieves an environment variable by key.
///
/// Falls back to `default`, or an empty string when no default is given.
#[must_use]
pub fn get_env(key: &str, default: Option<&str>) -> String {
    init_env();
    env::var(key).unwrap_or_else(|_| default.unwrap_or("").to_string())
}

/// Retrieves an environment variable as a parsed type.
#[must_use]
pub fn get_env_parsed<T: std::str::FromStr>(key: &str, default: T) -> T {
    init_env();
    env::var(key)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}

/// Application configuration loaded from environment variables.
#[derive(Clone)]
pub struct AppConfig {
    pub server_port: String,

    // Key every protected request must present
    pub api_key: String,

    pub sentry_dsn: String,
    pub sentry_traces_sample_rate: f32,
}

impl AppConfig {
    /// Creates a new `AppConfig` from environment variables.
    #[must_use]
    pub fn from_env() -> Self {
        Self {
            server_port: get_env("SERVER_PORT", Some("8080")),

            api_key: get_env(
                "API_KEY",
                if cfg!(test) {
                    Some("test-api-key-12345")
                } else {
                    None
                },
            ),

            sentry_dsn: get_env("SENTRY_DSN", None),
            sentry_traces_sample_rate: get_env_parsed("SENTRY_TRACES_SAMPLE_RATE", 0.1),
        }
    }

    /// Settings that leave the service running but unable to do its job.
    #[must_use]
    pub fn issues(&self) -> Vec<&'static str> {
        let mut issues = Vec::new();
        if self.api_key.is_empty() {
            issues.push("API_KEY is not set; every protected request will be rejected");
        }
        if !(0.0..=1.0).contains(&self.sentry_traces_sample_rate) {
            issues.push("SENTRY_TRACES_SAMPLE_RATE must be between 0.0 and 1.0");
        }
        issues
    }
}

impl std::fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppConfig")
            .field("server_port", &self.server_port)
            .field("api_key", &"<redacted>")
            .field("sentry_dsn", &self.sentry_dsn)
            .field("sentry_traces_sample_rate", &self.sentry_traces_sample_rate)
            .finish()
    }
}

/// Global application configuration instance.
pub static APP_CONFIG: LazyLock<AppConfig> = LazyLock::new(AppConfig::from_env);

#[cfg(test)]
#[must_use]
pub fn get_environments() -> &'static AppConfig {
    &APP_CONFIG
}
