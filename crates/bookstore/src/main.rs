use anyhow::Result;
use clap::{Parser, ValueEnum};
use listenfd::ListenFd;
use tokio::{net::TcpListener, signal};

use bookstore::{app::create_app, state::AppState, telemetry};

/// Storage backend for the local server.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Storage {
    /// In-process HashMap, lost on exit
    Memory,
    /// The table named by BOOKS_TABLE
    Dynamodb,
}

/// Bookstore - local server for the book resolvers
#[derive(Parser, Debug)]
#[command(name = "bookstore")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Host address to bind the server to
    #[arg(long, short = 'H', default_value = "0.0.0.0", env = "HOST")]
    host: String,

    /// Port to listen on
    #[arg(long, short, default_value = "3000", env = "PORT")]
    port: u16,

    /// Storage backend
    #[arg(long, value_enum, default_value = "memory", env = "BOOKSTORE_STORAGE")]
    storage: Storage,

    /// Load demo books into the memory store
    #[arg(long)]
    seed: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    telemetry::init();

    let state = build_state(&cli).await?;
    let app = create_app(state);

    // Auto-reload support via listenfd
    let mut listenfd = ListenFd::from_env();
    let listener = match listenfd.take_tcp_listener(0)? {
        // If we are given a tcp listener on listen fd 0, use that one
        Some(listener) => {
            listener.set_nonblocking(true)?;
            TcpListener::from_std(listener)?
        }
        // Otherwise fall back to CLI-specified host:port
        None => {
            let addr = format!("{}:{}", cli.host, cli.port);
            TcpListener::bind(&addr).await?
        }
    };

    tracing::info!("listening on {}", listener.local_addr()?);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}

async fn build_state(cli: &Cli) -> Result<AppState> {
    match cli.storage {
        Storage::Memory if cli.seed => {
            tracing::info!("Using in-memory storage with demo books");
            Ok(AppState::with_demo_data())
        }
        Storage::Memory => {
            tracing::info!("Using in-memory storage");
            Ok(AppState::in_memory())
        }
        Storage::Dynamodb => {
            if cli.seed {
                tracing::warn!("--seed only applies to the memory store, ignoring");
            }
            dynamodb_state().await
        }
    }
}

#[cfg(feature = "dynamodb")]
async fn dynamodb_state() -> Result<AppState> {
    Ok(AppState::from_env().await)
}

#[cfg(not(feature = "dynamodb"))]
async fn dynamodb_state() -> Result<AppState> {
    anyhow::bail!("bookstore was built without the `dynamodb` feature")
}

/// Wait for shutdown signals (Ctrl+C or SIGTERM).
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!(error = %e, "Failed to install Ctrl+C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::info!("Received Ctrl+C, shutting down...");
        }
        _ = terminate => {
            tracing::info!("Received SIGTERM, shutting down...");
        }
    }
}
