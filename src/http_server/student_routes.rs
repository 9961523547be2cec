//! Student HTTP Routes
//!
//! Verb-based create/update/delete. There are no GET routes here; reads go
//! through `/graphql`.
//!
//! Bodies are not validated. A request without a JSON content type, or with
//! an empty body, is treated as `{}`; missing fields are forwarded to the
//! service as absent and scalar values are read as text.

use std::sync::Arc;

use axum::{
    body::Bytes,
    extract::{Path, State},
    http::{header, HeaderMap},
    routing::{post, put},
    Json, Router,
};

use crate::store::{Student, StudentFields};
use crate::students::StudentService;

use super::errors::{RestError, RestResult};

/// Create student routes
pub fn student_routes(service: Arc<StudentService>) -> Router {
    Router::new()
        .route("/students", post(create_student_handler))
        .route(
            "/students/:id",
            put(update_student_handler).delete(delete_student_handler),
        )
        .with_state(service)
}

fn is_json(headers: &HeaderMap) -> bool {
    headers
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .map(|v| {
            let mime = v.split(';').next().unwrap_or("").trim();
            mime == "application/json" || mime.ends_with("+json")
        })
        .unwrap_or(false)
}

/// Body fields, or none at all when the body is not JSON
fn parse_fields(headers: &HeaderMap, body: &[u8]) -> RestResult<StudentFields> {
    if !is_json(headers) || body.iter().all(u8::is_ascii_whitespace) {
        return Ok(StudentFields::default());
    }
    serde_json::from_slice(body).map_err(|e| RestError::InvalidBody(e.to_string()))
}

async fn create_student_handler(
    State(service): State<Arc<StudentService>>,
    headers: HeaderMap,
    body: Bytes,
) -> RestResult<Json<Student>> {
    let fields = parse_fields(&headers, &body)?;
    Ok(Json(service.create(fields)))
}

async fn update_student_handler(
    State(service): State<Arc<StudentService>>,
    Path(id): Path<String>,
    headers: HeaderMap,
    body: Bytes,
) -> RestResult<Json<Student>> {
    let patch = parse_fields(&headers, &body)?;
    Ok(Json(service.update(&id, patch)?))
}

async fn delete_student_handler(
    State(service): State<Arc<StudentService>>,
    Path(id): Path<String>,
) -> RestResult<Json<Student>> {
    Ok(Json(service.delete(&id)?))
}
