//! Custom error types with exit codes

use thiserror::Error;

/// Main error type for roster operations
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum RosterError {
    /// Input Error - malformed command or missing argument
    #[error("Input error: {message}")]
    Input { message: String },

    /// Storage Error - a record file could not be read or written
    #[error("Storage error: {message}")]
    Storage { message: String },

    /// Format Error - a record file is not valid JSON
    #[error("Format error: {message}")]
    Format { message: String },

    /// Validation Error - a record file does not match the schema
    #[error("Validation error: {message}")]
    Validation { message: String },
}

impl RosterError {
    /// Get the appropriate exit code for this error type
    #[must_use]
    #[inline]
    pub const fn exit_code(&self) -> i32 {
        match *self {
            Self::Input { .. } => 1,
            Self::Storage { .. } => 2,
            Self::Format { .. } => 3,
            Self::Validation { .. } => 4,
        }
    }

    /// Create an input error
    #[inline]
    pub fn input<S: Into<String>>(message: S) -> Self {
        Self::Input {
            message: message.into(),
        }
    }

    /// Create an input error for a command that needs an argument
    #[inline]
    pub fn missing_argument(command: &str, argument: &str) -> Self {
        Self::input(format!(
            "missing argument: '{command}' expects a {argument}, e.g. '{command} students.json'"
        ))
    }

    /// Create a storage error
    #[inline]
    pub fn storage<S: Into<String>>(message: S) -> Self {
        Self::Storage {
            message: message.into(),
        }
    }

    /// Create a format error
    #[inline]
    pub fn format<S: Into<String>>(message: S) -> Self {
        Self::Format {
            message: message.into(),
        }
    }

    /// Create a validation error
    #[inline]
    pub fn validation<S: Into<String>>(message: S) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }
}
