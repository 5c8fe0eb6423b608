//! HTTP service guarding routes with `Authorization: ApiKey <token>` credentials

mod app;
mod config;
mod constants;
mod error;
mod handlers;
mod middlewares;
mod services;
mod state;

#[cfg(test)]
mod tests;

use tokio::signal;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::APP_CONFIG;

// High-performance memory allocator for non-MSVC targets
#[cfg(not(target_env = "msvc"))]
#[global_allocator]
static GLOBAL: mimalloc::MiMalloc = mimalloc::MiMalloc;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_logger();
    info!("Starting apikey-gate...");

    let _sentry_guard = init_sentry();
    report_config_issues();

    let state = state::AppState::new(APP_CONFIG.api_key.as_str());
    let app = app::app(state);

    let port = &APP_CONFIG.server_port;
    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{port}")).await?;
    info!("Server running on http://0.0.0.0:{port}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Shutting down...");

    // Flush Sentry events before exit
    if let Some(client) = sentry::Hub::current().client() {
        client.flush(Some(std::time::Duration::from_secs(2)));
    }

    info!("Server shutdown complete");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => info!("Received Ctrl+C, initiating graceful shutdown..."),
        () = terminate => info!("Received SIGTERM, initiating graceful shutdown..."),
    }
}

fn init_logger() {
    let log_level = std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_owned());
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(true)
                .with_level(true)
                .with_thread_ids(true),
        )
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&log_level)))
        .init();
}

/// Starts the Sentry client when `SENTRY_DSN` is configured.
fn init_sentry() -> Option<sentry::ClientInitGuard> {
    if APP_CONFIG.sentry_dsn.is_empty() {
        info!("SENTRY_DSN not set, error reporting disabled");
        return None;
    }

    Some(sentry::init((
        APP_CONFIG.sentry_dsn.as_str(),
        sentry::ClientOptions {
            release: sentry::release_name!(),
            traces_sample_rate: APP_CONFIG.sentry_traces_sample_rate,
            sample_rate: 1.0,
            ..Default::default()
        },
    )))
}

/// Logs settings the service cannot work with and reports them to Sentry.
fn report_config_issues() {
    for issue in APP_CONFIG.issues() {
        warn!("{issue}");
        sentry::capture_message(issue, sentry::Level::Warning);
    }
}
