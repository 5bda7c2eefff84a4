//! In-memory record store

use super::Student;
use tracing::debug;

/// Ordered collection of the session's records
///
/// Appending keeps the records sorted by name. Replacing adopts the new
/// sequence in the order it was given.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecordStore {
    students: Vec<Student>,
}

impl RecordStore {
    /// Create an empty store
    #[must_use]
    #[inline]
    pub const fn new() -> Self {
        Self {
            students: Vec::new(),
        }
    }

    /// Add one record, then re-sort by name
    ///
    /// No uniqueness check: identical records may coexist.
    #[inline]
    pub fn append(&mut self, student: Student) {
        self.students.push(student);
        if self.students.len() > 1 {
            // Stable, so equal names keep their insertion order
            self.students.sort_by(|a, b| a.name.cmp(&b.name));
        }
        debug!("Store now holds {} record(s)", self.students.len());
    }

    /// Discard the current contents and adopt `students` wholesale
    #[inline]
    pub fn replace(&mut self, students: Vec<Student>) {
        debug!(
            "Replacing {} record(s) with {}",
            self.students.len(),
            students.len()
        );
        self.students = students;
    }

    /// Records in their current order
    #[must_use]
    #[inline]
    pub fn students(&self) -> &[Student] {
        &self.students
    }

    #[must_use]
    #[inline]
    pub fn len(&self) -> usize {
        self.students.len()
    }

    #[must_use]
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.students.is_empty()
    }
}
