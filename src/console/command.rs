//! Command line parsing

use crate::error::RosterError;
use std::path::PathBuf;

/// A parsed operator command
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum Command {
    Exit,
    Add,
    List,
    Select,
    Help,
    Save(PathBuf),
    Load(PathBuf),
    /// Anything else, kept verbatim for the error report
    Unknown(String),
}

impl Command {
    /// Parse one line of operator input
    ///
    /// The keyword is matched case-insensitively; the argument of `save` and
    /// `load` is everything after the first whitespace run, with its case
    /// preserved. Blank lines yield `Ok(None)`.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `save` or `load` is given without a file path
    pub fn parse(line: &str) -> Result<Option<Self>, RosterError> {
        let line = line.trim();
        if line.is_empty() {
            return Ok(None);
        }

        let (keyword, argument) = match line.split_once(char::is_whitespace) {
            Some((keyword, rest)) => (keyword, rest.trim_start()),
            None => (line, ""),
        };
        let keyword = keyword.to_lowercase();

        let command = match (keyword.as_str(), argument.is_empty()) {
            ("exit", true) => Self::Exit,
            ("add", true) => Self::Add,
            ("list", true) => Self::List,
            ("select", true) => Self::Select,
            ("help", true) => Self::Help,
            ("save", false) => Self::Save(PathBuf::from(argument)),
            ("load", false) => Self::Load(PathBuf::from(argument)),
            ("save" | "load", true) => {
                return Err(RosterError::missing_argument(&keyword, "file path"));
            }
            _ => Self::Unknown(line.to_lowercase()),
        };

        Ok(Some(command))
    }
}
