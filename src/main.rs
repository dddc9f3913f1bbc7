use std::net::SocketAddr;
use std::sync::Arc;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use navicomputer::config::Config;
use navicomputer::create_router;
use navicomputer::repository::SqliteRouteSource;
use navicomputer::services::{AppState, OnboardComputer};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::from_env()?;

    let mut computer = OnboardComputer::new(SqliteRouteSource::new());
    if let Some(path) = &config.falcon_config {
        // The server stays up without a preloaded mission; loads can still
        // arrive over the API.
        match computer.load_millennium_falcon(path).await {
            Ok(()) => tracing::info!(path = %path.display(), "default mission config loaded"),
            Err(err) => {
                tracing::warn!(path = %path.display(), error = %err, "default mission config rejected")
            }
        }
    }

    let state = Arc::new(AppState::new(computer));
    let app = create_router(state);

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    tracing::info!("starting navicomputer on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    use tokio::signal;

    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("Failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received, starting graceful shutdown");
}
