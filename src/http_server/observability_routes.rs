//! Observability HTTP Routes
//!
//! Liveness with the current store size, and operation counters.

use std::sync::Arc;

use axum::{extract::State, http::StatusCode, response::IntoResponse, routing::get, Json, Router};
use serde::Serialize;

use crate::students::StudentService;

/// Body of `GET /health`
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
    /// Records currently held by the store
    pub records: usize,
}

impl HealthResponse {
    fn for_service(service: &StudentService) -> Self {
        Self {
            status: "ok",
            version: env!("CARGO_PKG_VERSION"),
            records: service.len(),
        }
    }
}

/// `/health` and `/metrics`, nested under `/observability` by the server
pub fn observability_routes(service: Arc<StudentService>) -> Router {
    Router::new()
        .route("/health", get(health_handler))
        .route("/metrics", get(metrics_handler))
        .with_state(service)
}

/// `/health` at the root
pub fn health_routes(service: Arc<StudentService>) -> Router {
    Router::new()
        .route("/health", get(health_handler))
        .with_state(service)
}

async fn health_handler(State(service): State<Arc<StudentService>>) -> Json<HealthResponse> {
    Json(HealthResponse::for_service(&service))
}

async fn metrics_handler(State(service): State<Arc<StudentService>>) -> impl IntoResponse {
    (StatusCode::OK, Json(service.metrics().snapshot()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::{to_bytes, Body};
    use axum::http::Request;
    use serde_json::Value;
    use tower::ServiceExt;

    use crate::store::StudentFields;

    async fn get_json(router: Router, uri: &str) -> (StatusCode, Value) {
        let request = Request::builder().uri(uri).body(Body::empty()).unwrap();
        let response = router.oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn test_health_reports_version_and_records() {
        let service = Arc::new(StudentService::new());
        service.create(StudentFields::required("A", "B", "2000-01-01", "X", "Y"));

        let (status, body) = get_json(health_routes(service), "/health").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "ok");
        assert_eq!(body["version"], env!("CARGO_PKG_VERSION"));
        assert_eq!(body["records"], 1);
    }

    #[tokio::test]
    async fn test_metrics_follow_service() {
        let service = Arc::new(StudentService::new());
        let router = observability_routes(service.clone());
        service.create(StudentFields::default());
        let _ = service.delete("7");

        let (status, body) = get_json(router, "/metrics").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["students_created"], 1);
        assert_eq!(body["not_found_errors"], 1);
        assert_eq!(body["records"], 1);
    }
}
