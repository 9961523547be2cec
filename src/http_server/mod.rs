//! # studentdb HTTP Server Module
//!
//! Combines every router into a single Axum server.
//!
//! # Endpoints
//!
//! - `/health` - Health check
//! - `/graphql` - GraphQL execution and explorer
//! - `/students` - Verb-based create/update/delete
//! - `/observability/*` - Metrics

pub mod config;
pub mod errors;
pub mod observability_routes;
pub mod server;
pub mod student_routes;

pub use config::HttpServerConfig;
pub use errors::{RestError, RestResult};
pub use server::HttpServer;
