//! VisuWeave Asset Host
//!
//! Serves the image directory under `/images`. No other routes.

use anyhow::Context;
use axum::Router;
use std::future::Future;
use std::path::Path;
use tokio::net::TcpListener;
use tower_http::cors::CorsLayer;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;
use visuweave_core::infrastructure::logging::{level_to_str, resolve_default_level};
use visuweave_core::HostConfig;

pub const IMAGES_MOUNT: &str = "/images";

pub fn build_router(images_dir: impl AsRef<Path>) -> Router {
    Router::new()
        .nest_service(IMAGES_MOUNT, ServeDir::new(images_dir.as_ref()))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
}

/// Binds the configured address and serves until Ctrl-C.
pub async fn serve(config: &HostConfig) -> anyhow::Result<()> {
    if !config.images_dir.is_dir() {
        warn!(
            "Images directory does not exist, every request will 404: {}",
            config.images_dir.display()
        );
    }

    let addr = config.bind_addr();
    let listener = TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;

    serve_on(listener, &config.images_dir, shutdown_signal()).await
}

pub async fn serve_on(
    listener: TcpListener,
    images_dir: &Path,
    shutdown: impl Future<Output = ()> + Send + 'static,
) -> anyhow::Result<()> {
    let local_addr = listener.local_addr()?;
    info!("Server running at http://{}", local_addr);
    info!("Serving {} from {}", IMAGES_MOUNT, images_dir.display());

    axum::serve(listener, build_router(images_dir))
        .with_graceful_shutdown(shutdown)
        .await
        .context("Asset host terminated")?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
}

/// `RUST_LOG` takes precedence; otherwise `VISUWEAVE_LOG_LEVEL` or the
/// debug/info default.
pub fn init_logging(is_debug: bool) {
    let level = level_to_str(resolve_default_level(is_debug));
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}
