//! Record file storage
//!
//! Saves the store as an indented JSON array and loads it back, checking the
//! loaded document against the embedded JSON schema first.

pub mod json;
pub mod schema;

pub use json::{load_students, save_students};
pub use schema::SchemaViolation;

use crate::records::Student;

/// What to do with a record file that parses but breaks the schema
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LoadPolicy {
    /// Reject the file and keep the current records
    #[default]
    Strict,

    /// Report the violations, then adopt whatever records can be salvaged
    Advisory,
}

/// Outcome of a successful load
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadReport {
    /// Records to adopt, in file order
    pub students: Vec<Student>,

    /// Schema violations found; only non-empty under [`LoadPolicy::Advisory`]
    pub violations: Vec<SchemaViolation>,
}

impl LoadReport {
    /// Whether the file matched the schema
    #[must_use]
    #[inline]
    pub fn is_valid(&self) -> bool {
        self.violations.is_empty()
    }
}
