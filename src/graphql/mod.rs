//! # GraphQL Interface
//!
//! Typed query/mutation surface over the student service, served at
//! `/graphql`:
//!
//! - `POST /graphql` - execute a request, standard `{data, errors}` envelope
//! - `GET /graphql` - GraphiQL explorer (when enabled)

pub mod routes;
pub mod schema;

pub use routes::{graphql_routes, GraphqlState};
pub use schema::{build_schema, MutationRoot, QueryRoot, StudentObject, StudentSchema};
