//! # HTTP Server
//!
//! Builds the student service once and hands it to every router.

use std::sync::Arc;

use axum::Router;
use tokio::net::TcpListener;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};

use crate::graphql::{graphql_routes, GraphqlState};
use crate::observability::{log_event, log_event_with_fields, Event};
use crate::students::StudentService;

use super::config::HttpServerConfig;
use super::observability_routes::{health_routes, observability_routes};
use super::student_routes::student_routes;

/// HTTP Server for studentdb
pub struct HttpServer {
    config: HttpServerConfig,
    service: Arc<StudentService>,
    router: Router,
}

impl HttpServer {
    /// Create a new HTTP server with default configuration
    pub fn new() -> Self {
        Self::with_config(HttpServerConfig::default())
    }

    /// Create a new HTTP server with custom configuration
    pub fn with_config(config: HttpServerConfig) -> Self {
        let service = Arc::new(StudentService::with_id_strategy(config.id_strategy));
        if config.seed_sample_data {
            service.seed_samples();
        }
        let router = Self::build_router(&config, service.clone());
        Self {
            config,
            service,
            router,
        }
    }

    /// Build the combined router with all endpoints
    fn build_router(config: &HttpServerConfig, service: Arc<StudentService>) -> Router {
        let graphql_state = Arc::new(GraphqlState::new(service.clone(), config.graphiql));

        let cors = if config.cors_origins.is_empty() {
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any)
        } else {
            let origins: Vec<_> = config
                .cors_origins
                .iter()
                .filter_map(|s| s.parse().ok())
                .collect();

            CorsLayer::new()
                .allow_origin(AllowOrigin::list(origins))
                .allow_methods(Any)
                .allow_headers(Any)
        };

        Router::new()
            .merge(health_routes(service.clone()))
            .merge(graphql_routes(graphql_state))
            .merge(student_routes(service.clone()))
            .nest("/observability", observability_routes(service))
            .layer(cors)
    }

    /// Get the socket address
    pub fn socket_addr(&self) -> String {
        self.config.socket_addr()
    }

    /// Handle to the service behind the routers
    pub fn service(&self) -> Arc<StudentService> {
        self.service.clone()
    }

    /// Get the router (for testing)
    pub fn router(self) -> Router {
        self.router
    }

    /// Bind and serve until Ctrl-C
    pub async fn start(self) -> Result<(), std::io::Error> {
        let addr = self.config.socket_addr();
        let listener = TcpListener::bind(addr.as_str()).await?;

        log_event_with_fields(
            Event::Serving,
            &[
                ("addr", &addr),
                ("graphiql", if self.config.graphiql { "on" } else { "off" }),
                ("id_strategy", self.config.id_strategy.as_str()),
                ("records", &self.service.len().to_string()),
            ],
        );

        axum::serve(listener, self.router)
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        log_event(Event::ShutdownComplete);
        Ok(())
    }
}

impl Default for HttpServer {
    fn default() -> Self {
        Self::new()
    }
}

async fn shutdown_signal() {
    // If the handler cannot be installed, serve until killed
    if tokio::signal::ctrl_c().await.is_err() {
        std::future::pending::<()>().await;
    }
    log_event(Event::ShutdownStart);
}
