//! `pkg-metadata to-json`: core metadata to JSON.

use anyhow::{Context, Result};

use crate::cli::ToJsonArgs;
use crate::commands::{ExitStatus, read_input, write_output};
use crate::metadata;
use crate::printer::Printer;

/// Execute `pkg-metadata to-json`.
pub(crate) fn execute(args: &ToJsonArgs, printer: Printer) -> Result<ExitStatus> {
    let content = read_input(args.file.as_deref())?;

    let metadata = match metadata::decode(&content) {
        Ok(metadata) => metadata,
        Err(err) => {
            printer.error(format_args!("Failed to parse core metadata: {err}"));
            return Ok(ExitStatus::Failure);
        }
    };
    printer.debug(format_args!("Decoded {} metadata fields", metadata.len()));

    let json = serde_json::to_string_pretty(&metadata).context("failed to serialize metadata")?;
    write_output(format!("{json}\n").as_bytes())?;
    Ok(ExitStatus::Success)
}
