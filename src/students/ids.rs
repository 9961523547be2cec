//! Id assignment strategies

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// How the service picks the id of a newly created record
///
/// `Length` is the compatibility scheme: the id is the current record count
/// plus one. It is a known defect: once a record has been deleted, a later
/// create can hand out an id that is still in use.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IdStrategy {
    /// `count + 1`, may collide after deletions
    #[default]
    Length,
    /// Monotonic counter, never reused within a process
    Counter,
    /// Random v4 UUID
    Uuid,
}

impl IdStrategy {
    /// Produce the next id.
    ///
    /// `current_len` is the store size before the insert, `issued` the number
    /// of ids this service has handed out so far.
    pub fn next_id(&self, current_len: usize, issued: u64) -> String {
        match self {
            IdStrategy::Length => (current_len + 1).to_string(),
            IdStrategy::Counter => (issued + 1).to_string(),
            IdStrategy::Uuid => Uuid::new_v4().to_string(),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            IdStrategy::Length => "length",
            IdStrategy::Counter => "counter",
            IdStrategy::Uuid => "uuid",
        }
    }
}
