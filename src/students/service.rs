//! Student service: the CRUD operations

use std::sync::{Mutex, MutexGuard, PoisonError};

use crate::observability::{log_event_with_fields, Event, MetricsRegistry};
use crate::store::{RecordStore, Student, StudentFields};

use super::errors::{StudentError, StudentResult};
use super::ids::IdStrategy;
use super::seed::sample_students;

struct ServiceState {
    store: RecordStore,
    /// Ids handed out so far, for `IdStrategy::Counter`
    issued: u64,
}

/// Owner of the process's record store
///
/// Constructed once and shared by handle (`Arc<StudentService>`) with the
/// transport adapters. Each operation holds the lock for its whole body and
/// never awaits, so one operation's effects are either fully visible to
/// another or not at all.
pub struct StudentService {
    state: Mutex<ServiceState>,
    id_strategy: IdStrategy,
    metrics: MetricsRegistry,
}

impl StudentService {
    /// Empty service using the compatibility id scheme
    pub fn new() -> Self {
        Self::with_id_strategy(IdStrategy::default())
    }

    /// Empty service using the given id scheme
    pub fn with_id_strategy(id_strategy: IdStrategy) -> Self {
        Self {
            state: Mutex::new(ServiceState {
                store: RecordStore::new(),
                issued: 0,
            }),
            id_strategy,
            metrics: MetricsRegistry::new(),
        }
    }

    /// Insert the sample records through the regular create path
    pub fn seed_samples(&self) -> usize {
        let samples = sample_students();
        let count = samples.len();
        for fields in samples {
            self.create(fields);
        }
        log_event_with_fields(Event::StoreSeeded, &[("count", &count.to_string())]);
        count
    }

    pub fn metrics(&self) -> &MetricsRegistry {
        &self.metrics
    }

    fn lock(&self) -> MutexGuard<'_, ServiceState> {
        // A panic mid-operation cannot leave the Vec half-written
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// All records in store order
    pub fn list(&self) -> Vec<Student> {
        self.lock().store.all().to_vec()
    }

    /// The first record with this id, if any
    pub fn get(&self, id: &str) -> Option<Student> {
        self.lock().store.find_by_id(id).cloned()
    }

    pub fn len(&self) -> usize {
        self.lock().store.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().store.is_empty()
    }

    /// Create a record from the supplied fields, copied verbatim
    ///
    /// Missing fields are stored absent; nothing is defaulted or validated.
    pub fn create(&self, fields: StudentFields) -> Student {
        let mut state = self.lock();
        let id = self.id_strategy.next_id(state.store.len(), state.issued);
        state.issued += 1;

        let student = Student::from_fields(id, fields);
        state.store.append(student.clone());
        // Under the lock so `records` tracks the store exactly
        self.metrics.increment_created();
        drop(state);

        log_event_with_fields(Event::StudentCreated, &[("id", &student.id)]);
        student
    }

    /// Merge `patch` into the record with this id
    ///
    /// A field is replaced only when the supplied value is truthy. `None` and
    /// `Some("")` both leave the stored value as it is, so a field cannot be
    /// cleared through an update.
    pub fn update(&self, id: &str, patch: StudentFields) -> StudentResult<Student> {
        let mut state = self.lock();
        let index = match state.store.find_index_by_id(id) {
            Some(index) => index,
            None => {
                drop(state);
                return Err(self.not_found(id, "update"));
            }
        };

        let current = &state.store.all()[index];
        let merged = Student {
            id: current.id.clone(),
            first_name: truthy_or(patch.first_name, &current.first_name),
            last_name: truthy_or(patch.last_name, &current.last_name),
            date_of_birth: truthy_or(patch.date_of_birth, &current.date_of_birth),
            address: truthy_or(patch.address, &current.address),
            nationality: truthy_or(patch.nationality, &current.nationality),
            email: truthy_or(patch.email, &current.email),
            phone: truthy_or(patch.phone, &current.phone),
        };
        state.store.replace_at(index, merged.clone());
        self.metrics.increment_updated();
        drop(state);

        log_event_with_fields(Event::StudentUpdated, &[("id", id)]);
        Ok(merged)
    }

    /// Remove the record with this id and return it as it was
    pub fn delete(&self, id: &str) -> StudentResult<Student> {
        let mut state = self.lock();
        let removed = match state.store.find_index_by_id(id) {
            Some(index) => state.store.remove_at(index),
            None => {
                drop(state);
                return Err(self.not_found(id, "delete"));
            }
        };
        self.metrics.increment_deleted();
        drop(state);

        log_event_with_fields(Event::StudentDeleted, &[("id", id)]);
        Ok(removed)
    }

    fn not_found(&self, id: &str, op: &str) -> StudentError {
        self.metrics.increment_not_found();
        log_event_with_fields(Event::StudentNotFound, &[("id", id), ("op", op)]);
        StudentError::not_found(id)
    }
}

impl Default for StudentService {
    fn default() -> Self {
        Self::new()
    }
}

fn truthy_or(supplied: Option<String>, current: &Option<String>) -> Option<String> {
    match supplied {
        Some(value) if !value.is_empty() => Some(value),
        _ => current.clone(),
    }
}
