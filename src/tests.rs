#[cfg(test)]
mod integration_tests {
    use crate::schemas::{AssetStatus, HealthResponse};
    use crate::test_utils::test_utils::{setup_asset_dir, setup_test_app, INDEX_MARKER};
    use axum::http::{header, HeaderValue, StatusCode};
    use axum_test::TestServer;

    #[tokio::test]
    async fn test_health_reports_present_assets() {
        let assets = setup_asset_dir();
        let (app, _tracing) = setup_test_app(assets.path());
        let server = TestServer::new(app).unwrap();

        let response = server.get("/health").await;

        response.assert_status(StatusCode::OK);
        let body: HealthResponse = response.json();
        assert_eq!(body.status, "healthy");
        assert_eq!(body.version, env!("CARGO_PKG_VERSION"));
        assert_eq!(body.assets, AssetStatus::Present);
    }

    #[tokio::test]
    async fn test_health_reports_missing_assets() {
        let empty = tempfile::tempdir().unwrap();
        let (app, _tracing) = setup_test_app(empty.path());
        let server = TestServer::new(app).unwrap();

        let response = server.get("/health").await;

        response.assert_status(StatusCode::OK);
        let body: serde_json::Value = response.json();
        assert_eq!(body["assets"], "missing");
    }

    #[test]
    fn test_tracing_stays_installed_while_guard_lives() {
        let assets = setup_asset_dir();
        let installed = || {
            tracing::dispatcher::get_default(|dispatch| {
                !dispatch.is::<tracing::subscriber::NoSubscriber>()
            })
        };

        let (_app, tracing_guard) = setup_test_app(assets.path());
        assert!(installed());

        drop(tracing_guard);
        assert!(!installed());
    }

    #[tokio::test]
    async fn test_root_serves_index() {
        let assets = setup_asset_dir();
        let (app, _tracing) = setup_test_app(assets.path());
        let server = TestServer::new(app).unwrap();

        let response = server.get("/").await;

        response.assert_status(StatusCode::OK);
        assert!(response.text().contains(INDEX_MARKER));
    }

    #[tokio::test]
    async fn test_bundle_files_are_served() {
        let assets = setup_asset_dir();
        let (app, _tracing) = setup_test_app(assets.path());
        let server = TestServer::new(app).unwrap();

        let response = server.get("/frontend.js").await;

        response.assert_status(StatusCode::OK);
        assert_eq!(response.text(), "export default function init() {}");
    }

    #[tokio::test]
    async fn test_unknown_path_falls_back_to_index() {
        let assets = setup_asset_dir();
        let (app, _tracing) = setup_test_app(assets.path());
        let server = TestServer::new(app).unwrap();

        for path in ["/predict", "/submit-data", "/nested/deep/link"] {
            let response = server.get(path).await;
            response.assert_status(StatusCode::OK);
            assert!(response.text().contains(INDEX_MARKER), "no index for {path}");
        }
    }

    #[tokio::test]
    async fn test_openapi_document_is_served() {
        let assets = setup_asset_dir();
        let (app, _tracing) = setup_test_app(assets.path());
        let server = TestServer::new(app).unwrap();

        let response = server.get("/api-docs/openapi.json").await;

        response.assert_status(StatusCode::OK);
        let body: serde_json::Value = response.json();
        assert!(body["paths"]["/health"]["get"].is_object());
        assert!(body["components"]["schemas"]["PredictionRequest"].is_object());
    }

    #[tokio::test]
    async fn test_cors_is_permissive() {
        let assets = setup_asset_dir();
        let (app, _tracing) = setup_test_app(assets.path());
        let server = TestServer::new(app).unwrap();

        let response = server
            .get("/health")
            .add_header(header::ORIGIN, HeaderValue::from_static("http://localhost:5000"))
            .await;

        response.assert_status(StatusCode::OK);
        assert_eq!(
            response.headers().get(header::ACCESS_CONTROL_ALLOW_ORIGIN),
            Some(&HeaderValue::from_static("*"))
        );
    }

    #[tokio::test]
    async fn test_index_is_gzip_compressed_on_request() {
        let assets = setup_asset_dir();
        let (app, _tracing) = setup_test_app(assets.path());
        let server = TestServer::new(app).unwrap();

        let response = server
            .get("/")
            .add_header(header::ACCEPT_ENCODING, HeaderValue::from_static("gzip"))
            .await;

        response.assert_status(StatusCode::OK);
        assert_eq!(
            response.headers().get(header::CONTENT_ENCODING),
            Some(&HeaderValue::from_static("gzip"))
        );
    }
}
