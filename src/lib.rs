//! `Roster` - an interactive console for a small list of student records
//!
//! Records are added at the prompt, listed as a fixed-width table, filtered
//! for failing marks, and saved to or loaded from an indented JSON file that
//! is checked against an embedded JSON schema.

pub mod cli;
pub mod console;
pub mod error;
pub mod records;
pub mod storage;
pub mod system;

use anyhow::Result;
use cli::Args;
use console::Session;
use std::io;
use system::RealSystem;

/// Main entry point for the roster library
///
/// Runs one session over the process's standard streams.
pub fn run(args: &Args) -> Result<()> {
    let system = RealSystem::new();
    let stdin = io::stdin();

    let mut session = Session::new(&system, stdin.lock(), io::stdout().lock(), io::stderr())
        .with_policy(args.load_policy());
    session.run()
}
