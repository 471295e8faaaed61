pub mod handlers;
pub mod types;

use crate::{
    Error, Result,
    config::Config,
    inference::{Pipelines, accelerator_available},
};
use axum::{
    Router,
    routing::{get, post},
};
use handlers::AppState;
use std::net::SocketAddr;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::health))
        .route("/analyze_text", post(handlers::analyze_text))
        .route("/describe", post(handlers::describe))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

pub async fn run(config: Config) -> Result<()> {
    // Models must be in memory before the listener is bound.
    let models = config.models.clone();
    let pipelines = tokio::task::spawn_blocking(move || Pipelines::load(&models))
        .await
        .map_err(|e| Error::internal(format!("Model loading task failed: {}", e)))??;

    let gpu = accelerator_available();
    info!("Accelerator available: {}", gpu);

    let app = router(AppState { pipelines, gpu });

    let addr = SocketAddr::new(config.server.host.parse()?, config.server.port);

    info!("Starting SenseMesh AI Engine on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
