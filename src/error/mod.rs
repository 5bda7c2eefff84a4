//! Error handling module
//!
//! Defines the roster error type and its exit codes

pub mod types;

pub use types::*;
