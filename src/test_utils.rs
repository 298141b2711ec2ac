#[cfg(test)]
pub mod test_utils {
    use crate::config::ServerConfig;
    use crate::router::create_router;
    use crate::schemas::AppState;
    use axum::Router;
    use std::fs;
    use tempfile::TempDir;
    use tracing::subscriber::DefaultGuard;
    use tracing::Level;
    use tracing_subscriber::FmtSubscriber;

    pub const INDEX_MARKER: &str = "<title>AgriPredict</title>";

    /// A bundle directory shaped like the output of `trunk build`.
    pub fn setup_asset_dir() -> TempDir {
        let dir = tempfile::tempdir().expect("Failed to create asset directory");
        // long enough for the compression layer to kick in
        let filler = "<p>Crop price forecasts from weather and market conditions.</p>\n".repeat(40);
        fs::write(
            dir.path().join("index.html"),
            format!("<!DOCTYPE html><html><head>{INDEX_MARKER}</head><body>{filler}</body></html>"),
        )
        .expect("Failed to write index.html");
        fs::write(dir.path().join("frontend.js"), "export default function init() {}")
            .expect("Failed to write frontend.js");
        dir
    }

    /// Create AppState for testing
    pub fn setup_test_app_state(static_dir: &std::path::Path) -> AppState {
        AppState::new(ServerConfig {
            static_dir: static_dir.to_path_buf(),
            ..ServerConfig::default()
        })
    }

    /// Initialize tracing for tests with output to STDERR.
    ///
    /// The log level is determined by the RUST_LOG environment variable,
    /// defaulting to WARN if not set.
    fn init_test_tracing() -> DefaultGuard {
        let log_level = std::env::var("RUST_LOG")
            .ok()
            .and_then(|level| match level.to_uppercase().as_str() {
                "ERROR" => Some(Level::ERROR),
                "WARN" => Some(Level::WARN),
                "INFO" => Some(Level::INFO),
                "DEBUG" => Some(Level::DEBUG),
                "TRACE" => Some(Level::TRACE),
                _ => None,
            })
            .unwrap_or(Level::WARN);

        let subscriber = FmtSubscriber::builder()
            .with_max_level(log_level)
            .with_writer(std::io::stderr)
            .finish();
        tracing::subscriber::set_default(subscriber)
    }

    /// Create axum app for testing.
    ///
    /// Test logging stays installed for as long as the returned guard lives.
    pub fn setup_test_app(static_dir: &std::path::Path) -> (Router, DefaultGuard) {
        let guard = init_test_tracing();
        (create_router(setup_test_app_state(static_dir)), guard)
    }
}
