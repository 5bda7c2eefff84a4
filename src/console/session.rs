//! Interactive command loop

use super::command::Command;
use super::render::render_table;
use super::{HELP_TEXT, PROMPT};
use crate::error::RosterError;
use crate::records::{RecordStore, Student, select_failing};
use crate::storage::{LoadPolicy, load_students, save_students};
use crate::system::System;
use anyhow::Result;
use std::io::{self, BufRead, Write};
use std::path::Path;
use tracing::{debug, info};

/// Whether the loop keeps reading after a command
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flow {
    Continue,
    Exit,
}

/// One interactive session over a record store
///
/// The session owns the store for its whole lifetime. Commands are read from
/// `input` one line at a time; tables and confirmations go to `out`, error
/// reports and validation warnings to `err`.
pub struct Session<'sys, R, W, E> {
    store: RecordStore,
    system: &'sys dyn System,
    policy: LoadPolicy,
    input: R,
    out: W,
    err: E,
}

impl<'sys, R: BufRead, W: Write, E: Write> Session<'sys, R, W, E> {
    /// Create a session with an empty store and strict loading
    #[inline]
    pub fn new(system: &'sys dyn System, input: R, out: W, err: E) -> Self {
        Self {
            store: RecordStore::new(),
            system,
            policy: LoadPolicy::default(),
            input,
            out,
            err,
        }
    }

    /// Set how schema violations are handled on `load`
    #[must_use]
    #[inline]
    pub fn with_policy(mut self, policy: LoadPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Start from an existing store instead of an empty one
    #[must_use]
    #[inline]
    pub fn with_store(mut self, store: RecordStore) -> Self {
        self.store = store;
        self
    }

    #[must_use]
    #[inline]
    pub const fn store(&self) -> &RecordStore {
        &self.store
    }

    /// Run the loop until `exit` or end of input
    ///
    /// Roster errors (bad commands, unreadable or invalid files) are reported
    /// on the error stream and the loop carries on.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - Reading the input or writing the output streams fails
    pub fn run(&mut self) -> Result<()> {
        info!("Session started");

        loop {
            let Some(line) = self.prompt(PROMPT)? else {
                debug!("End of input");
                break;
            };

            let command = match Command::parse(&line) {
                Ok(Some(command)) => command,
                Ok(None) => continue,
                Err(err) => {
                    self.report(&err)?;
                    continue;
                }
            };
            debug!("Dispatching {command:?}");

            match self.dispatch(command) {
                Ok(Flow::Continue) => {}
                Ok(Flow::Exit) => break,
                Err(err) => match err.downcast_ref::<RosterError>() {
                    Some(roster_err) => self.report(roster_err)?,
                    None => return Err(err),
                },
            }
        }

        info!("Session finished with {} record(s)", self.store.len());
        Ok(())
    }

    fn dispatch(&mut self, command: Command) -> Result<Flow> {
        match command {
            Command::Exit => return Ok(Flow::Exit),
            Command::Add => return self.add_student(),
            Command::List => {
                self.out.write_all(render_table(self.store.students())?.as_bytes())?;
            }
            Command::Select => {
                let failing = select_failing(self.store.students());
                self.out.write_all(render_table(&failing)?.as_bytes())?;
            }
            Command::Help => self.out.write_all(HELP_TEXT.as_bytes())?,
            Command::Save(path) => self.save(&path)?,
            Command::Load(path) => self.load(&path)?,
            Command::Unknown(text) => {
                return Err(RosterError::input(format!("unknown command '{text}'")).into());
            }
        }

        Ok(Flow::Continue)
    }

    fn add_student(&mut self) -> Result<Flow> {
        let Some(name) = self.prompt("Surname and initials? ")? else {
            return Ok(Flow::Exit);
        };
        let Some(group) = self.prompt("Group number? ")? else {
            return Ok(Flow::Exit);
        };
        let Some(grades) = self.prompt("Grades: ")? else {
            return Ok(Flow::Exit);
        };

        let student = Student::new(&name, &group, &grades)?;
        debug!("Adding {}", student.name);
        self.store.append(student);
        Ok(Flow::Continue)
    }

    fn save(&mut self, path: &Path) -> Result<()> {
        save_students(self.system, path, self.store.students())?;
        writeln!(
            self.out,
            "Saved {} record(s) to {}",
            self.store.len(),
            path.display()
        )?;
        Ok(())
    }

    fn load(&mut self, path: &Path) -> Result<()> {
        let report = load_students(self.system, path, self.policy)?;

        if report.is_valid() {
            writeln!(self.out, "Validation passed")?;
        } else {
            writeln!(
                self.err,
                "warning: {} does not match the record schema:",
                path.display()
            )?;
            for violation in &report.violations {
                writeln!(self.err, "warning:   - {violation}")?;
            }
        }

        self.store.replace(report.students);
        writeln!(
            self.out,
            "Loaded {} record(s) from {}",
            self.store.len(),
            path.display()
        )?;
        Ok(())
    }

    /// Show `text` and read one line; `None` at end of input
    fn prompt(&mut self, text: &str) -> io::Result<Option<String>> {
        self.out.write_all(text.as_bytes())?;
        self.out.flush()?;

        // Undecodable bytes become U+FFFD instead of ending the session
        let mut bytes = Vec::new();
        if self.input.read_until(b'\n', &mut bytes)? == 0 {
            return Ok(None);
        }
        Ok(Some(String::from_utf8_lossy(&bytes).into_owned()))
    }

    fn report(&mut self, err: &RosterError) -> io::Result<()> {
        debug!("Command failed: {err}");
        writeln!(self.err, "error: {err}")?;
        self.err.flush()
    }
}
