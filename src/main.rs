//! # `Roster`
//!
//! `Roster` is an interactive console for keeping a small list of student
//! records: name, group number and marks.
//!
//! ## Commands
//! - `add` - prompt for a student and add it, keeping the list sorted by name.
//! - `list` - print every student as a table.
//! - `select` - print the students whose marks contain a 2.
//! - `save <file>` / `load <file>` - write or read the list as JSON.
//! - `help`, `exit`.
//!
//! ## Usage
//!
//! ```sh
//! roster
//! >>> load students.json
//! >>> list
//! ```
//!
//! See `roster --help` for the launch options.

use anyhow::Result;
use clap::Parser as _;
use roster::cli::Args;
use roster::error::RosterError;
use tracing::error;
use tracing_subscriber::{EnvFilter, fmt};

fn main() -> Result<()> {
    let args = Args::parse();

    // Logs go to stderr so they never land inside a rendered table
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(args.log_level()));

    fmt()
        .with_target(false)
        .with_writer(std::io::stderr)
        .with_env_filter(filter)
        .init();

    match roster::run(&args) {
        Ok(()) => std::process::exit(0),
        Err(err) => {
            error!("{}", err);
            std::process::exit(
                err.downcast_ref::<RosterError>()
                    .map_or(1, RosterError::exit_code),
            );
        }
    }
}
