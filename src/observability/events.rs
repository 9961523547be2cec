//! Observable events in studentdb

use std::fmt;

use super::Severity;

/// Observable events
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    // Lifecycle
    /// Process startup begins
    BootStart,
    /// Configuration loaded
    ConfigLoaded,
    /// Sample records inserted
    StoreSeeded,
    /// Listener bound, ready for requests
    Serving,
    /// Server could not start, or stopped on an I/O error
    BootFailed,
    /// Shutdown signal received
    ShutdownStart,
    /// Server stopped
    ShutdownComplete,

    // Operations
    /// Record created
    StudentCreated,
    /// Record updated
    StudentUpdated,
    /// Record deleted
    StudentDeleted,
    /// Update or delete named an unknown id
    StudentNotFound,
    /// GraphQL request executed
    GraphqlRequest,
}

impl Event {
    /// Returns the string representation of the event
    pub fn as_str(&self) -> &'static str {
        match self {
            Event::BootStart => "STUDENTDB_STARTUP_BEGIN",
            Event::ConfigLoaded => "CONFIG_LOADED",
            Event::StoreSeeded => "STORE_SEEDED",
            Event::Serving => "STUDENTDB_SERVING",
            Event::BootFailed => "STUDENTDB_BOOT_FAILED",
            Event::ShutdownStart => "SHUTDOWN_START",
            Event::ShutdownComplete => "SHUTDOWN_COMPLETE",

            Event::StudentCreated => "STUDENT_CREATED",
            Event::StudentUpdated => "STUDENT_UPDATED",
            Event::StudentDeleted => "STUDENT_DELETED",
            Event::StudentNotFound => "STUDENT_NOT_FOUND",
            Event::GraphqlRequest => "GRAPHQL_REQUEST",
        }
    }

    pub fn severity(&self) -> Severity {
        match self {
            Event::BootFailed => Severity::Error,
            Event::StudentNotFound => Severity::Warn,
            _ => Severity::Info,
        }
    }
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
