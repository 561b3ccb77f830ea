//! Command dispatch for pkg-metadata.
//!
//! Each subcommand reads its input from a file or stdin, converts it with the
//! library, and writes the result to stdout.

use std::io::{Read, Write};
use std::path::Path;
use std::process::ExitCode;

use anyhow::{Context, Result};

use crate::cli;
use crate::printer::Printer;

mod from_json;
mod pyproject;
mod to_json;

/// Exit status for pkg-metadata commands.
#[derive(Copy, Clone)]
pub enum ExitStatus {
    /// The command succeeded.
    Success,

    /// The command failed due to an error in the user input.
    Failure,

    /// The command failed with an unexpected error.
    Error,
}

impl From<ExitStatus> for ExitCode {
    fn from(status: ExitStatus) -> Self {
        match status {
            ExitStatus::Success => Self::from(0),
            ExitStatus::Failure => Self::from(1),
            ExitStatus::Error => Self::from(2),
        }
    }
}

/// Dispatch a parsed CLI command to the appropriate handler.
pub fn dispatch(command: cli::Commands, printer: Printer) -> Result<ExitStatus> {
    printer.debug(format_args!("Running `pkg-metadata {}`", command.name()));
    match command {
        cli::Commands::ToJson(args) => to_json::execute(&args, printer),
        cli::Commands::FromJson(args) => from_json::execute(&args, printer),
        cli::Commands::Pyproject(args) => pyproject::execute(&args, printer),
    }
}

/// Read a command's input: the given file, or stdin for `None` and `-`.
fn read_input(path: Option<&Path>) -> Result<Vec<u8>> {
    match path {
        Some(path) if path != Path::new("-") => Ok(fs_err::read(path)?),
        _ => {
            let mut content = Vec::new();
            std::io::stdin()
                .read_to_end(&mut content)
                .context("failed to read stdin")?;
            Ok(content)
        }
    }
}

/// Write a command's output to stdout.
fn write_output(content: &[u8]) -> Result<()> {
    let mut stdout = std::io::stdout().lock();
    stdout
        .write_all(content)
        .context("failed to write to stdout")?;
    stdout.flush().context("failed to write to stdout")?;
    Ok(())
}
