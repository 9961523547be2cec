//! Student operation errors
//!
//! There is exactly one failure mode: the requested id matches no record.

use thiserror::Error;

/// Result type for student operations
pub type StudentResult<T> = Result<T, StudentError>;

/// Student operation errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StudentError {
    /// No record carries the requested id
    #[error("Student not found")]
    NotFound { id: String },
}

impl StudentError {
    pub fn not_found(id: impl Into<String>) -> Self {
        Self::NotFound { id: id.into() }
    }

    /// The id the failed operation was called with
    pub fn id(&self) -> &str {
        match self {
            StudentError::NotFound { id } => id,
        }
    }
}
