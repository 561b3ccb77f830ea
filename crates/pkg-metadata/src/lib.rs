//! pkg-metadata: convert Python package metadata between representations.
//!
//! Three forms are supported:
//!
//! - the core metadata header format of `METADATA` and `PKG-INFO` files,
//! - a JSON-compatible mapping ([`Metadata`]),
//! - the `[project]` table of `pyproject.toml` (PEP 621, read only).
//!
//! [`decode`] and [`encode`] convert between the header format and the
//! mapping; [`project`] converts a `[project]` table into the mapping. The
//! crate also provides the `pkg-metadata` command-line tool, whose entry point
//! is [`main`].

#![deny(clippy::print_stdout, clippy::print_stderr)]

use std::ffi::OsString;
use std::process::ExitCode;

use clap::Parser;

use crate::cli::Cli;
use crate::commands::ExitStatus;
use crate::printer::Printer;

pub mod cli;
pub mod commands;
mod logging;
pub mod metadata;
pub mod printer;
pub mod pyproject;

pub use metadata::{FieldValue, Metadata, decode, decode_str, encode};
pub use pyproject::{Project, PyProjectToml, project, project_relative_to};

/// Entry point for the `pkg-metadata` CLI.
///
/// Parses CLI arguments, installs the tracing subscriber, and dispatches to
/// the appropriate command handler.
pub fn main<I, T>(args: I) -> ExitCode
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let cli = match Cli::try_parse_from(args) {
        Ok(cli) => cli,
        Err(err) => err.exit(),
    };

    let printer = Printer::new(cli.verbose, cli.quiet);
    if let Err(err) = logging::setup_logging(cli.verbose, cli.quiet) {
        printer.warn(format_args!("failed to initialize logging: {err}"));
    }

    match commands::dispatch(cli.command, printer) {
        Ok(status) => status.into(),
        Err(err) => {
            printer.error_chain(&err);
            ExitStatus::Error.into()
        }
    }
}
