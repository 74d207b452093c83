use crate::state::AppState;
use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Json},
};
use serde::{Deserialize, Serialize};
use tracing::info;
use tracing_subscriber::EnvFilter;
use utoipa::ToSchema;

/// Application health status
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct HealthStatus {
    pub status: String,
    pub version: String,
    pub uptime_seconds: u64,
    pub collection: String,
}

/// Health check endpoint handler
#[utoipa::path(
    get,
    path = "/health",
    responses((status = 200, description = "Service is up", body = HealthStatus)),
    tag = "Health"
)]
pub async fn health_handler(State(state): State<AppState>) -> impl IntoResponse {
    let uptime = state.uptime_seconds();

    let health = HealthStatus {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        uptime_seconds: uptime,
        collection: state.products.collection().to_string(),
    };

    info!("Health check requested - uptime: {}s", uptime);
    (StatusCode::OK, Json(health))
}

/// Initialize tracing subscriber for structured logging
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("product_api=info,tower_http=info"));
    let directives = filter.to_string();

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .json()
        .init();

    info!("Tracing initialized with filter: {}", directives);
}
