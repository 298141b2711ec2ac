use axum::{extract::State, response::Json};
use tracing::instrument;

use crate::schemas::{AppState, AssetStatus, HealthResponse};

/// Health check endpoint
#[utoipa::path(
    get,
    path = "/health",
    tag = "health",
    responses(
        (status = 200, description = "Service is up; `assets` tells whether the bundle is deployed", body = HealthResponse),
    )
)]
#[instrument(skip(state))]
pub async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    let assets = if state.config.index_file().is_file() {
        AssetStatus::Present
    } else {
        tracing::warn!("index.html missing in {}", state.config.static_dir.display());
        AssetStatus::Missing
    };

    Json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        assets,
    })
}
