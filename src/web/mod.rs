//! Web interface: selection form, document downloads and a health check

pub mod handlers;
pub mod pages;

use crate::config::Config;
use crate::documents::DocumentRenderer;
use crate::error::AppError;
use axum::Router;
use axum::routing::get;
use reqwest::Client;
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::info;

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub client: Client,
    pub renderer: Arc<dyn DocumentRenderer>,
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::index).post(handlers::submit))
        .route("/download/{filename}", get(handlers::download))
        .route("/health", get(handlers::health))
        .with_state(state)
}

/// Serves on an already bound listener until `shutdown_signal` completes.
pub async fn serve(
    listener: TcpListener,
    state: AppState,
    shutdown_signal: impl std::future::Future<Output = ()> + Send + 'static,
) -> Result<(), AppError> {
    axum::serve(listener, router(state))
        .with_graceful_shutdown(shutdown_signal)
        .await?;

    info!("Web server shut down gracefully");
    Ok(())
}

/// Binds the configured address and serves until `shutdown_signal` completes.
pub async fn run(
    state: AppState,
    shutdown_signal: impl std::future::Future<Output = ()> + Send + 'static,
) -> Result<(), AppError> {
    let listener = TcpListener::bind(&state.config.bind_address).await?;
    info!("Web server listening on http://{}", listener.local_addr()?);
    serve(listener, state, shutdown_signal).await
}
