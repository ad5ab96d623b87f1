//! Test application factory for integration tests.

use axum::{
    body::Body,
    http::{Request, StatusCode},
};
use http_body_util::BodyExt;
use std::sync::Arc;
use tower::ServiceExt;

use huegrid::models::AppConfig;
use huegrid::server::{build_router, create_app_state};
use huegrid::services::{PaletteStore, SheetService};

/// Test application with router and direct access to services
pub struct TestApp {
    router: axum::Router,
    pub palette: Arc<dyn PaletteStore>,
    pub sheets: Arc<SheetService>,
}

impl TestApp {
    /// Create a new test application with the default seed palette
    pub async fn new() -> Self {
        let state = create_app_state(&AppConfig::default()).await;

        // Keep references for test assertions
        let palette = state.palette.clone();
        let sheets = state.sheets.clone();

        // Build router using shared server module (same as production)
        let router = build_router(state);

        Self {
            router,
            palette,
            sheets,
        }
    }

    /// Make a GET request to the given path
    pub async fn get(&self, path: &str) -> TestResponse {
        self.request(Request::get(path).body(Body::empty()).unwrap())
            .await
    }

    /// Make a POST request with JSON body
    pub async fn post_json(&self, path: &str, body: &str) -> TestResponse {
        self.request(
            Request::post(path)
                .header("Content-Type", "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
    }

    /// Make a PUT request with JSON body
    pub async fn put_json(&self, path: &str, body: &str) -> TestResponse {
        self.request(
            Request::put(path)
                .header("Content-Type", "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
    }

    /// Make a DELETE request to the given path
    pub async fn delete(&self, path: &str) -> TestResponse {
        self.request(Request::delete(path).body(Body::empty()).unwrap())
            .await
    }

    /// Send a request to the router
    async fn request(&self, request: Request<Body>) -> TestResponse {
        let response = self
            .router
            .clone()
            .oneshot(request)
            .await
            .expect("Request failed");

        let status = response.status();
        let body = response
            .into_body()
            .collect()
            .await
            .expect("Failed to collect body")
            .to_bytes()
            .to_vec();

        TestResponse { status, body }
    }

    /// Generate a sheet and return its JSON snapshot
    pub async fn generate_sheet(&self, rows: usize, cols: usize, colors: usize) -> serde_json::Value {
        let body = format!(
            r#"{{"rows": {rows}, "cols": {cols}, "colors": {colors}}}"#
        );
        let response = self.post_json("/api/sheet", &body).await;
        assert_eq!(
            response.status,
            StatusCode::CREATED,
            "generate failed; body: {}",
            response.text()
        );
        response.json()
    }
}

/// Test response with convenience methods
pub struct TestResponse {
    pub status: StatusCode,
    pub body: Vec<u8>,
}

impl TestResponse {
    /// Parse body as JSON
    pub fn json<T: serde::de::DeserializeOwned>(&self) -> T {
        serde_json::from_slice(&self.body).expect("Failed to parse JSON response")
    }

    /// Get body as string
    pub fn text(&self) -> String {
        String::from_utf8_lossy(&self.body).to_string()
    }
}
