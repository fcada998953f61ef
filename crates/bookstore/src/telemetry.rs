//! Tracing subscriber setup.
//!
//! `RUST_LOG` overrides the default filters.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Human-readable logs for the local server.
pub fn init() {
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "bookstore=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();
}

/// JSON logs for Lambda.
///
/// CloudWatch timestamps every line and does not render colors, so both are
/// left out.
pub fn init_lambda() {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| "bookstore=info".into()))
        .with(
            tracing_subscriber::fmt::layer()
                .json()
                .with_ansi(false)
                .without_time()
                .with_target(false),
        )
        .init();
}
