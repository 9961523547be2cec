//! studentdb - in-memory student records over GraphQL and HTTP
//!
//! Layers, leaf to root:
//! - `store`: ordered in-memory record collection
//! - `students`: CRUD operations over the store
//! - `graphql`, `http_server`: transport adapters

pub mod cli;
pub mod graphql;
pub mod http_server;
pub mod observability;
pub mod store;
pub mod students;
