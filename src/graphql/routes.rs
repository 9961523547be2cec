//! GraphQL HTTP Routes
//!
//! - `POST /graphql` executes any operation
//! - `GET /graphql?query=...` executes queries only
//! - `GET /graphql` without a query, or from a browser asking for HTML,
//!   serves the GraphiQL explorer when it is enabled

use std::sync::Arc;

use async_graphql::http::GraphiQLSource;
use async_graphql::parser::{parse_query, types::OperationType};
use async_graphql::{ServerError, Variables};
use axum::{
    extract::{Query, State},
    http::{header, HeaderMap, StatusCode},
    response::{Html, IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde::Deserialize;

use crate::observability::{log_event_with_fields, Event};
use crate::students::StudentService;

use super::schema::{build_schema, StudentSchema};

pub const GRAPHQL_PATH: &str = "/graphql";

/// GraphQL state shared across handlers
pub struct GraphqlState {
    pub schema: StudentSchema,
    pub service: Arc<StudentService>,
    /// Serve GraphiQL on `GET`
    pub explorer: bool,
}

impl GraphqlState {
    pub fn new(service: Arc<StudentService>, explorer: bool) -> Self {
        Self {
            schema: build_schema(service.clone()),
            service,
            explorer,
        }
    }
}

/// Query string of a `GET /graphql` request
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GraphqlGetParams {
    pub query: Option<String>,
    pub operation_name: Option<String>,
    /// JSON-encoded variables object
    pub variables: Option<String>,
}

/// Create GraphQL routes
pub fn graphql_routes(state: Arc<GraphqlState>) -> Router {
    Router::new()
        .route(GRAPHQL_PATH, get(graphql_get_handler).post(graphql_handler))
        .with_state(state)
}

async fn execute(state: &GraphqlState, request: async_graphql::Request) -> async_graphql::Response {
    let operation = request.operation_name.clone().unwrap_or_default();
    let response = state.schema.execute(request).await;

    state.service.metrics().increment_graphql_requests();
    log_event_with_fields(
        Event::GraphqlRequest,
        &[
            ("errors", &response.errors.len().to_string()),
            ("operation", &operation),
        ],
    );

    response
}

async fn graphql_handler(
    State(state): State<Arc<GraphqlState>>,
    Json(request): Json<async_graphql::Request>,
) -> Json<async_graphql::Response> {
    Json(execute(&state, request).await)
}

async fn graphql_get_handler(
    State(state): State<Arc<GraphqlState>>,
    headers: HeaderMap,
    Query(params): Query<GraphqlGetParams>,
) -> Response {
    let query = match params.query {
        Some(query) if !(state.explorer && prefers_html(&headers)) => query,
        _ if state.explorer => {
            return Html(GraphiQLSource::build().endpoint(GRAPHQL_PATH).finish()).into_response()
        }
        _ => return error_response(StatusCode::BAD_REQUEST, "Must provide query string."),
    };

    let mut request = async_graphql::Request::new(query);
    if let Some(name) = params.operation_name {
        request = request.operation_name(name);
    }
    if let Some(raw) = params.variables {
        match serde_json::from_str(&raw) {
            Ok(value) => request = request.variables(Variables::from_json(value)),
            Err(_) => return error_response(StatusCode::BAD_REQUEST, "Variables are invalid JSON."),
        }
    }

    if selects_mutation(&request) {
        return error_response(
            StatusCode::METHOD_NOT_ALLOWED,
            "Can only perform a mutation operation from a POST request.",
        );
    }

    Json(execute(&state, request).await).into_response()
}

fn prefers_html(headers: &HeaderMap) -> bool {
    headers
        .get(header::ACCEPT)
        .and_then(|v| v.to_str().ok())
        .map(|v| v.contains("text/html"))
        .unwrap_or(false)
}

/// Whether the operation a request would run is not a query
///
/// Unparseable documents return false; execution reports the syntax error.
fn selects_mutation(request: &async_graphql::Request) -> bool {
    let Ok(document) = parse_query(&request.query) else {
        return false;
    };
    document.operations.iter().any(|(name, operation)| {
        let selected = match (&request.operation_name, name) {
            (Some(wanted), Some(name)) => wanted.as_str() == name.as_str(),
            _ => true,
        };
        selected && operation.node.ty != OperationType::Query
    })
}

fn error_response(status: StatusCode, message: &str) -> Response {
    let body = async_graphql::Response::from_errors(vec![ServerError::new(message, None)]);
    (status, Json(body)).into_response()
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::{to_bytes, Body};
    use axum::http::{header, Method, Request, StatusCode};
    use serde_json::{json, Value};
    use tower::ServiceExt;

    fn router(explorer: bool) -> Router {
        let state = Arc::new(GraphqlState::new(Arc::new(StudentService::new()), explorer));
        graphql_routes(state)
    }

    async fn get_json(router: Router, uri: &str) -> (StatusCode, Value) {
        let request = Request::builder()
            .uri(uri)
            .header(header::ACCEPT, "application/json")
            .body(Body::empty())
            .unwrap();

        let response = router.oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn test_post_executes_query() {
        let request = Request::builder()
            .method(Method::POST)
            .uri("/graphql")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(json!({ "query": "{ students { id } }" }).to_string()))
            .unwrap();

        let response = router(true).oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body: Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body, json!({ "data": { "students": [] } }));
    }

    #[tokio::test]
    async fn test_get_serves_explorer() {
        let request = Request::builder().uri("/graphql").body(Body::empty()).unwrap();

        let response = router(true).oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let html = String::from_utf8(bytes.to_vec()).unwrap();
        assert!(html.contains("graphiql"));
    }

    #[tokio::test]
    async fn test_explorer_disabled() {
        let (status, body) = get_json(router(false), "/graphql").await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["errors"][0]["message"], "Must provide query string.");
    }

    #[tokio::test]
    async fn test_get_executes_query() {
        let (status, body) = get_json(router(true), "/graphql?query=%7Bstudents%7Bid%7D%7D").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({ "data": { "students": [] } }));
    }

    #[tokio::test]
    async fn test_get_with_variables() {
        let uri = "/graphql?query=query%20One(%24id%3A%20ID!)%7Bstudent(id%3A%20%24id)%7Bid%7D%7D&variables=%7B%22id%22%3A%221%22%7D";
        let (status, body) = get_json(router(false), uri).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({ "data": { "student": null } }));
    }

    #[tokio::test]
    async fn test_get_rejects_mutation() {
        let uri = "/graphql?query=mutation%7BdeleteStudent(id%3A%221%22)%7Bid%7D%7D";
        let (status, body) = get_json(router(true), uri).await;

        assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED);
        assert_eq!(
            body["errors"][0]["message"],
            "Can only perform a mutation operation from a POST request."
        );
    }

    #[tokio::test]
    async fn test_browser_get_with_query_serves_explorer() {
        let request = Request::builder()
            .uri("/graphql?query=%7Bstudents%7Bid%7D%7D")
            .header(header::ACCEPT, "text/html,application/xhtml+xml")
            .body(Body::empty())
            .unwrap();

        let response = router(true).oneshot(request).await.unwrap();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        assert!(String::from_utf8(bytes.to_vec()).unwrap().contains("graphiql"));
    }

    #[test]
    fn test_selects_mutation_by_operation_name() {
        let doc = "query Read { students { id } } mutation Drop { deleteStudent(id: \"1\") { id } }";

        let read = async_graphql::Request::new(doc).operation_name("Read");
        assert!(!selects_mutation(&read));

        let drop = async_graphql::Request::new(doc).operation_name("Drop");
        assert!(selects_mutation(&drop));

        assert!(!selects_mutation(&async_graphql::Request::new("{ students { id } }")));
        assert!(!selects_mutation(&async_graphql::Request::new("{ broken")));
    }
}
