//! Student records
//!
//! The record type, the in-memory store that keeps records sorted by name,
//! and the failing-mark query.

pub mod query;
pub mod store;

pub use query::{FAILING_MARK, select_failing};
pub use store::RecordStore;

use crate::error::RosterError;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// One student's entry
///
/// All three fields are text. The group number may carry leading zeros or
/// letters, and the grades are a space-separated run of marks that is never
/// parsed into numbers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Student {
    /// Surname and initials; the sort key of the store
    pub name: String,

    /// Group identifier
    #[serde(rename = "number")]
    pub group_number: String,

    /// Marks, e.g. `"2 3 4 5 5"`
    #[serde(rename = "z")]
    pub grades: String,
}

impl Student {
    /// Build a record from operator input
    ///
    /// Surrounding whitespace is trimmed from every field.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The name is empty after trimming
    #[inline]
    pub fn new(name: &str, group_number: &str, grades: &str) -> Result<Self, RosterError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(RosterError::input("student name cannot be empty"));
        }

        Ok(Self {
            name: name.to_owned(),
            group_number: group_number.trim().to_owned(),
            grades: grades.trim().to_owned(),
        })
    }

    /// Build a record from an arbitrary JSON value, filling gaps instead of failing
    ///
    /// Used when loaded data is adopted despite schema violations. Missing
    /// fields become empty text, non-string scalars keep their JSON text.
    /// Returns `None` when the value is not an object at all.
    #[must_use]
    pub fn from_value_lenient(value: &Value) -> Option<Self> {
        let object = value.as_object()?;
        let field = |key: &str| match object.get(key) {
            None | Some(Value::Null) => String::new(),
            Some(Value::String(text)) => text.clone(),
            Some(other) => other.to_string(),
        };

        Some(Self {
            name: field("name"),
            group_number: field("number"),
            grades: field("z"),
        })
    }
}
