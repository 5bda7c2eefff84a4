//! JSON Schema validation for record files

use anyhow::{Result, anyhow};
use jsonschema::Validator;
use serde_json::Value;
use std::fmt;

/// A single place where a document breaks the record schema
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SchemaViolation {
    /// JSON pointer to the offending value, `/` for the document root
    pub path: String,

    /// What was expected versus what was found
    pub message: String,
}

impl fmt::Display for SchemaViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Path '{}': {}", self.path, self.message)
    }
}

/// Get the embedded JSON schema for record files
pub fn get_schema() -> Result<Validator> {
    let schema_str = include_str!("../../docs/schema.json");
    let schema: Value = serde_json::from_str(schema_str)
        .map_err(|e| anyhow!("Failed to parse embedded JSON schema: {}", e))?;

    jsonschema::draft7::new(&schema).map_err(|e| anyhow!("Failed to compile JSON schema: {}", e))
}

/// Validate a parsed document against the record schema
///
/// Returns every violation found; an empty list means the document is valid.
///
/// # Errors
///
/// Returns an error only if the embedded schema itself cannot be compiled.
pub fn validate_students(document: &Value) -> Result<Vec<SchemaViolation>> {
    let schema = get_schema()?;

    let violations = schema
        .iter_errors(document)
        .map(|e| {
            let pointer = e.instance_path.to_string();
            SchemaViolation {
                path: if pointer.is_empty() {
                    "/".to_owned()
                } else {
                    pointer
                },
                message: e.to_string(),
            }
        })
        .collect();

    Ok(violations)
}
