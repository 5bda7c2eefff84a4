//! Command-line interface module
//!
//! Handles the launch options of the console

pub mod args;

pub use args::*;
