//! Operation counters
//!
//! - Counters only increase, except `records` which tracks the store size
//! - Reset only on process start

use std::sync::atomic::{AtomicU64, Ordering};

use serde::Serialize;

/// Registry of operation counters
///
/// All counters use Relaxed atomics; readers only need eventually exact values.
#[derive(Debug, Default)]
pub struct MetricsRegistry {
    students_created: AtomicU64,
    students_updated: AtomicU64,
    students_deleted: AtomicU64,
    /// Update/delete calls naming an unknown id
    not_found_errors: AtomicU64,
    graphql_requests: AtomicU64,
    /// Current store size
    records: AtomicU64,
}

impl MetricsRegistry {
    /// Create a new registry with all counters at zero
    pub fn new() -> Self {
        Self::default()
    }

    pub fn increment_created(&self) {
        self.students_created.fetch_add(1, Ordering::Relaxed);
        self.records.fetch_add(1, Ordering::Relaxed);
    }

    pub fn increment_updated(&self) {
        self.students_updated.fetch_add(1, Ordering::Relaxed);
    }

    pub fn increment_deleted(&self) {
        self.students_deleted.fetch_add(1, Ordering::Relaxed);
        self.records.fetch_sub(1, Ordering::Relaxed);
    }

    pub fn increment_not_found(&self) {
        self.not_found_errors.fetch_add(1, Ordering::Relaxed);
    }

    pub fn increment_graphql_requests(&self) {
        self.graphql_requests.fetch_add(1, Ordering::Relaxed);
    }

    /// Get all metrics as a snapshot
    pub fn snapshot(&self) -> MetricsSnapshot {
        MetricsSnapshot {
            students_created: self.students_created.load(Ordering::Relaxed),
            students_updated: self.students_updated.load(Ordering::Relaxed),
            students_deleted: self.students_deleted.load(Ordering::Relaxed),
            not_found_errors: self.not_found_errors.load(Ordering::Relaxed),
            graphql_requests: self.graphql_requests.load(Ordering::Relaxed),
            records: self.records.load(Ordering::Relaxed),
        }
    }
}

/// A point-in-time snapshot of all metrics
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MetricsSnapshot {
    pub students_created: u64,
    pub students_updated: u64,
    pub students_deleted: u64,
    pub not_found_errors: u64,
    pub graphql_requests: u64,
    pub records: u64,
}
