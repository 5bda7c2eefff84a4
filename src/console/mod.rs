//! Interactive console
//!
//! Reads one command per line, dispatches it against the record store and
//! the storage layer, and renders records as a text table.

pub mod command;
pub mod render;
pub mod session;

pub use command::Command;
pub use render::{EMPTY_NOTICE, render_table};
pub use session::Session;

/// Prompt shown before each command
pub const PROMPT: &str = ">>> ";

/// Static command summary printed by `help`
pub const HELP_TEXT: &str = "\
Commands:

add - add a student;
list - list all students;
select - list students with a failing mark (2);
help - show this help;
load <file> - load students from a JSON file;
save <file> - save students to a JSON file;
exit - quit the program.
";
