//! JSON record file loading and saving

use super::schema::{SchemaViolation, validate_students};
use super::{LoadPolicy, LoadReport};
use crate::error::RosterError;
use crate::records::Student;
use crate::system::System;
use anyhow::{Context as _, Result};
use serde::Serialize as _;
use serde_json::ser::PrettyFormatter;
use serde_json::{Serializer, Value};
use std::io;
use std::path::Path;
use tracing::{debug, info, warn};

/// Indentation used in saved record files
const INDENT: &[u8] = b"    ";

/// Serialize records as an indented JSON array
///
/// Non-ASCII text is written as-is, not escaped.
pub fn to_json(students: &[Student]) -> Result<String> {
    let mut buffer = Vec::new();
    let mut serializer = Serializer::with_formatter(&mut buffer, PrettyFormatter::with_indent(INDENT));
    students
        .serialize(&mut serializer)
        .context("Failed to serialize student records")?;

    String::from_utf8(buffer).context("Serialized records are not valid UTF-8")
}

/// Save all records to `path`, overwriting any existing file
///
/// # Errors
///
/// Returns an error if:
/// - The path is a directory
/// - The file cannot be written
pub fn save_students(system: &dyn System, path: &Path, students: &[Student]) -> Result<()> {
    if system.is_dir(path)? {
        return Err(RosterError::storage(format!(
            "Cannot save to {}: it is a directory",
            path.display()
        ))
        .into());
    }

    let content = to_json(students)?;

    system.write(path, content.as_bytes()).map_err(|e| {
        return RosterError::storage(format!("Failed to write {}: {e}", path.display()));
    })?;

    info!("Saved {} record(s) to {}", students.len(), path.display());
    Ok(())
}

/// Load records from `path`
///
/// The file is parsed into a generic JSON value and checked against the
/// record schema. Under [`LoadPolicy::Strict`] any violation rejects the
/// file; under [`LoadPolicy::Advisory`] the violations travel back in the
/// report alongside the records that could be salvaged.
///
/// # Errors
///
/// Returns an error if:
/// - The file does not exist or cannot be read
/// - The file is not valid JSON
/// - The document breaks the schema and the policy is strict
/// - The document is not an array, whatever the policy
pub fn load_students(system: &dyn System, path: &Path, policy: LoadPolicy) -> Result<LoadReport> {
    let content = system.read_to_string(path).map_err(|e| {
        return match e.kind() {
            io::ErrorKind::NotFound => {
                RosterError::storage(format!("Record file not found: {}", path.display()))
            }
            _ => RosterError::storage(format!("Failed to read {}: {e}", path.display())),
        };
    })?;

    let document: Value = serde_json::from_str(&content).map_err(|e| {
        return RosterError::format(format!("{} is not valid JSON: {e}", path.display()));
    })?;

    let violations = validate_students(&document)?;

    if violations.is_empty() {
        let students: Vec<Student> = serde_json::from_value(document).map_err(|e| {
            return RosterError::format(format!(
                "Failed to read records from {}: {e}",
                path.display()
            ));
        })?;
        debug!("Loaded {} valid record(s) from {}", students.len(), path.display());
        return Ok(LoadReport {
            students,
            violations,
        });
    }

    let Some(items) = document.as_array() else {
        return Err(RosterError::validation(describe(path, &violations)).into());
    };

    match policy {
        LoadPolicy::Strict => Err(RosterError::validation(describe(path, &violations)).into()),
        LoadPolicy::Advisory => {
            warn!(
                "{} breaks the record schema in {} place(s); adopting it anyway",
                path.display(),
                violations.len()
            );
            let students = items
                .iter()
                .filter_map(Student::from_value_lenient)
                .collect();
            Ok(LoadReport {
                students,
                violations,
            })
        }
    }
}

fn describe(path: &Path, violations: &[SchemaViolation]) -> String {
    let lines: Vec<String> = violations.iter().map(|v| format!("  - {v}")).collect();
    format!(
        "{} does not match the record schema:\n{}",
        path.display(),
        lines.join("\n")
    )
}
