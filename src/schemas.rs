use common::{ActualDataRecord, ContactMessage, PredictionRequest, PredictionResult, SubmissionAck};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use utoipa::{OpenApi, ToSchema};

use crate::config::ServerConfig;

/// Application state shared across handlers
#[derive(Clone, Debug)]
pub struct AppState {
    pub config: Arc<ServerConfig>,
}

impl AppState {
    pub fn new(config: ServerConfig) -> Self {
        Self {
            config: Arc::new(config),
        }
    }
}

/// Whether the built front-end bundle can be served
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum AssetStatus {
    Present,
    Missing,
}

/// Health check response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct HealthResponse {
    /// Service status
    pub status: String,
    /// Service version
    pub version: String,
    /// Presence of `index.html` in the asset directory
    pub assets: AssetStatus,
}

/// OpenAPI documentation
///
/// Besides the host's own endpoint it carries the payload schemas of the
/// prediction service the front-end talks to.
#[derive(OpenApi)]
#[openapi(
    paths(
        crate::handlers::health::health_check,
    ),
    components(
        schemas(
            HealthResponse,
            AssetStatus,
            PredictionRequest,
            PredictionResult,
            ActualDataRecord,
            SubmissionAck,
            ContactMessage,
        )
    ),
    tags(
        (name = "health", description = "Health check endpoints"),
    ),
    info(
        title = "AgriPredict",
        description = "Static host of the AgriPredict crop price prediction front-end",
        version = "0.1.0",
    )
)]
pub struct ApiDoc;
