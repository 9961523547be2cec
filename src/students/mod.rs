//! CRUD operations over the student record store
//!
//! `StudentService` owns the single `RecordStore` of the process and is the
//! only path through which either transport adapter reads or mutates it.
//!
//! # Semantics
//!
//! - `list` and `get` never fail; absence is `None`
//! - `update` and `delete` return `StudentError::NotFound` for unknown ids
//! - `update` only replaces a field when the supplied value is truthy
//! - Every operation runs to completion under the service lock

mod errors;
mod ids;
mod seed;
mod service;

pub use errors::{StudentError, StudentResult};
pub use ids::IdStrategy;
pub use seed::sample_students;
pub use service::StudentService;
