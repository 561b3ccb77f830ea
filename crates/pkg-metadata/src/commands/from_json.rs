//! `pkg-metadata from-json`: JSON to core metadata.

use anyhow::Result;

use crate::cli::FromJsonArgs;
use crate::commands::{ExitStatus, read_input, write_output};
use crate::metadata::{self, Metadata};
use crate::printer::Printer;

/// Execute `pkg-metadata from-json`.
pub(crate) fn execute(args: &FromJsonArgs, printer: Printer) -> Result<ExitStatus> {
    let content = read_input(args.file.as_deref())?;

    let metadata: Metadata = match serde_json::from_slice(&content) {
        Ok(metadata) => metadata,
        Err(err) => {
            printer.error(format_args!("Invalid JSON metadata: {err}"));
            return Ok(ExitStatus::Failure);
        }
    };

    let mut output = metadata::encode(&metadata);
    output.push(b'\n');
    write_output(&output)?;
    Ok(ExitStatus::Success)
}
