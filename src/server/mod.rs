//! HTTP surface for the dashboard: `GET /api/aqi?city=<name>`.

mod handlers;

use crate::config::Config;
use crate::error::Result;
use crate::pipeline::AirQualityService;
use axum::routing::get;
use axum::Router;
use tower_http::cors::CorsLayer;
use tracing::{error, info};

pub fn build_router(service: AirQualityService) -> Router {
    Router::new()
        .route("/api/aqi", get(handlers::get_aqi))
        .layer(CorsLayer::permissive())
        .with_state(service)
}

/// Binds `config.host:config.port` and serves until Ctrl+C.
pub async fn start(config: &Config) -> Result<()> {
    let service = AirQualityService::from_config(config)?;
    let app = build_router(service);

    let addr = format!("{}:{}", config.host, config.port);
    let listener = tokio::net::TcpListener::bind(&addr).await.map_err(|e| {
        error!("Cannot bind to {}: {}", addr, e);
        e
    })?;

    info!("Server listening on http://{}", addr);
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        error!("Failed to listen for Ctrl+C: {}", e);
    }
}
