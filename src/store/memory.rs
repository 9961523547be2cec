//! In-memory ordered record store

use super::record::Student;

/// Ordered, mutable collection of student records
///
/// All operations are synchronous and cannot fail. Callers that need
/// atomicity across several calls hold their own lock around the store.
#[derive(Debug, Default)]
pub struct RecordStore {
    records: Vec<Student>,
}

impl RecordStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// All records, in insertion order
    pub fn all(&self) -> &[Student] {
        &self.records
    }

    /// First record whose id matches
    pub fn find_by_id(&self, id: &str) -> Option<&Student> {
        self.records.iter().find(|s| s.id == id)
    }

    /// Position of the first record whose id matches
    pub fn find_index_by_id(&self, id: &str) -> Option<usize> {
        self.records.iter().position(|s| s.id == id)
    }

    /// Add a record at the end
    pub fn append(&mut self, record: Student) {
        self.records.push(record);
    }

    /// Overwrite the record at `index`
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of bounds. Indices come from
    /// `find_index_by_id` under the same lock.
    pub fn replace_at(&mut self, index: usize, record: Student) {
        self.records[index] = record;
    }

    /// Remove the record at `index`, shifting later entries down
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of bounds.
    pub fn remove_at(&mut self, index: usize) -> Student {
        self.records.remove(index)
    }

    /// Number of records currently held
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
