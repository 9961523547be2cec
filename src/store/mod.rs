//! Record store for studentdb
//!
//! The store holds the ordered sequence of student records for the lifetime
//! of the process. Nothing is persisted: restart discards all state.
//!
//! # Design Principles
//!
//! - Insertion order is preserved
//! - Removal shifts later entries, ids are never rewritten
//! - Lookups return the first match by id
//! - No failure modes of its own (absence is `None`)

mod memory;
mod record;

pub use memory::RecordStore;
pub use record::{Student, StudentFields};
