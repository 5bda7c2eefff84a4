//! System abstraction for filesystem operations
//!
//! Record files are only ever touched through the [`System`] trait, so the
//! console and the storage layer can be exercised against an in-memory
//! filesystem in tests.

use std::io;
use std::path::Path;

pub mod mock;
pub mod real;

pub use mock::MockSystem;
pub use real::RealSystem;

/// Unified trait for the filesystem operations the roster needs
///
/// # Implementations
/// - `RealSystem`: Production implementation using `std::fs`
/// - `MockSystem`: Test implementation using in-memory storage
pub trait System: Send + Sync {
    /// Read entire file contents as a UTF-8 string
    fn read_to_string(&self, path: &Path) -> io::Result<String>;

    /// Write bytes to a file, creating it or truncating any previous contents
    fn write(&self, path: &Path, contents: &[u8]) -> io::Result<()>;

    /// Check if a path points to a directory
    fn is_dir(&self, path: &Path) -> io::Result<bool>;
}
