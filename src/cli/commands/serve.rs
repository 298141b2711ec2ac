use anyhow::Result;
use tokio::net::TcpListener;
use tracing::{debug, error, info, trace, warn};

use crate::config::ServerConfig;
use crate::router::create_router;
use crate::schemas::AppState;

pub async fn serve(config: ServerConfig) -> Result<()> {
    trace!("Entering serve function");
    info!("AgriPredict asset host starting up");
    debug!("Configuration: {:?}", config);

    if !config.index_file().is_file() {
        warn!(
            "No index.html in {}; build the front-end with `trunk build` first",
            config.static_dir.display()
        );
    }

    let bind_address = config.bind_address.clone();

    // Create router
    trace!("Creating application router");
    let app = create_router(AppState::new(config));
    debug!("Router created successfully");

    // Start server
    info!("Starting server on {}", bind_address);
    trace!("Attempting to bind TCP listener to {}", bind_address);
    let listener = match TcpListener::bind(&bind_address).await {
        Ok(listener) => {
            debug!("Successfully bound to address: {}", bind_address);
            listener
        }
        Err(e) => {
            error!("Failed to bind to address {}: {}", bind_address, e);
            return Err(e.into());
        }
    };

    info!("AgriPredict running on http://{}", bind_address);
    info!("Swagger UI available at http://{}/swagger-ui", bind_address);
    debug!("Server is ready to accept connections");

    trace!("Starting axum server");
    if let Err(e) = axum::serve(listener, app).await {
        error!("Server error: {}", e);
        return Err(e.into());
    }

    info!("Server shutdown gracefully");
    Ok(())
}
