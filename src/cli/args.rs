use crate::storage::LoadPolicy;
use clap::Parser;

/// Command-line arguments for roster
///
/// The console itself is driven by commands typed at its prompt; these
/// options only tune logging and how record files are validated.
#[derive(Parser, Debug, Clone, Default)]
#[command(name = "roster")]
#[command(about = "An interactive console for keeping a small list of student records")]
#[command(long_about = None)]
#[command(version)]
pub struct Args {
    /// Enable verbose logging output
    #[arg(short, long)]
    pub verbose: bool,

    /// Adopt loaded files even when they break the record schema,
    /// reporting the violations as warnings
    #[arg(long = "advisory-validation")]
    pub advisory_validation: bool,
}

impl Args {
    /// Load policy selected by the flags
    #[must_use]
    #[inline]
    pub const fn load_policy(&self) -> LoadPolicy {
        if self.advisory_validation {
            LoadPolicy::Advisory
        } else {
            LoadPolicy::Strict
        }
    }

    /// Default tracing filter when `RUST_LOG` is not set
    #[must_use]
    #[inline]
    pub const fn log_level(&self) -> &'static str {
        if self.verbose { "debug" } else { "warn" }
    }
}
