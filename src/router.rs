use crate::handlers::health::health_check;
use crate::schemas::{ApiDoc, AppState};
use axum::{routing::get, Router};
use tower::ServiceBuilder;
use tower_http::{
    compression::CompressionLayer,
    cors::CorsLayer,
    services::{ServeDir, ServeFile},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

/// Create application router with all routes and middleware
///
/// Anything not matched by the health or documentation routes is looked up in
/// the asset directory; unknown paths get `index.html` so deep links resolve.
pub fn create_router(state: AppState) -> Router {
    let static_dir = state.config.static_dir.clone();
    let timeout = state.config.request_timeout();
    let assets = ServeDir::new(&static_dir).fallback(ServeFile::new(state.config.index_file()));

    tracing::debug!("Serving assets from {}", static_dir.display());

    Router::new()
        // Health check
        .route("/health", get(health_check))
        // Swagger UI
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        // Front-end bundle
        .fallback_service(assets)
        // Add middleware
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(CompressionLayer::new())
                .layer(TimeoutLayer::new(timeout))
                .layer(CorsLayer::permissive()),
        )
        .with_state(state)
}
