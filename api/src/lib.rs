use std::{env, error::Error, sync::Arc};

mod core;
mod error_handler;
mod routes;

use axum::{
    Router,
    routing::{get, post},
};
use tokio::signal;
use tracing::warn;

use crate::core::app_state::AppState;
use crate::routes::{predict::predict_route::predict, root_route::root};

pub async fn start() -> Result<(), Box<dyn Error>> {
    let host_url = env::var("API_ADDRESS").unwrap_or_else(|_| "127.0.0.1:8000".into());

    let state = Arc::new(AppState::from_env()?);

    // Best-effort provider probe; boot continues either way.
    match state.svc.health_all().await {
        Ok(statuses) => {
            for s in statuses.iter().filter(|s| !s.ok) {
                warn!(provider = %s.provider, endpoint = %s.endpoint, message = %s.message, "LLM backend unhealthy");
            }
        }
        Err(e) => warn!(error = %e, "health probe failed"),
    }

    let app = Router::new()
        .route("/", get(root))
        .route("/predict", post(predict))
        .with_state(state);

    // Bind to address
    let listener = tokio::net::TcpListener::bind(&host_url)
        .await
        .map_err(error_handler::AppError::Bind)?;

    tracing::info!("listening on {host_url}");

    // Start server with graceful shutdown on Ctrl+C
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(error_handler::AppError::Server)?;

    Ok(())
}

/// Returns a future that resolves when Ctrl+C is pressed
async fn shutdown_signal() {
    // Wait for the Ctrl+C signal
    signal::ctrl_c()
        .await
        .expect("Failed to listen for shutdown signal");
}
