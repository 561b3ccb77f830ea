//! User-facing status output.
//!
//! Command results go to stdout and never pass through the [`Printer`]; it
//! only writes diagnostics to stderr, filtered by `--quiet` and `--verbose`.
//! Errors are printed at every level.

use std::fmt::Display;

use anstream::eprintln;
use owo_colors::OwoColorize;

/// How much status output to write to stderr.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Printer {
    /// Only errors.
    Quiet,
    /// Errors and warnings.
    Default,
    /// Errors, warnings and debug messages.
    Verbose,
}

impl Printer {
    /// Pick a printer from the `--verbose` count and `--quiet` flag.
    pub fn new(verbosity: u8, quiet: bool) -> Self {
        match (quiet, verbosity) {
            (true, _) => Self::Quiet,
            (false, 0) => Self::Default,
            (false, _) => Self::Verbose,
        }
    }

    pub fn warn(self, message: impl Display) {
        if self != Self::Quiet {
            eprintln!("{}: {message}", "warning".yellow().bold());
        }
    }

    pub fn error(self, message: impl Display) {
        eprintln!("{}: {message}", "error".red().bold());
    }

    /// Print an error and each of its causes.
    pub fn error_chain(self, err: &anyhow::Error) {
        let mut causes = err.chain();
        if let Some(error) = causes.next() {
            self.error(error);
        }
        for cause in causes {
            eprintln!(
                "  {}: {}",
                "Caused by".red().bold(),
                cause.to_string().trim()
            );
        }
    }

    pub fn debug(self, message: impl Display) {
        if self == Self::Verbose {
            eprintln!("{}: {message}", "debug".dimmed());
        }
    }
}
