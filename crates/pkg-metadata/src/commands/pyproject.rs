//! `pkg-metadata pyproject`: the `[project]` table of a `pyproject.toml`.

use std::path::Path;

use anyhow::{Context, Result};

use crate::cli::{OutputFormat, PyprojectArgs};
use crate::commands::{ExitStatus, write_output};
use crate::metadata;
use crate::printer::Printer;
use crate::pyproject::{self, PyProjectToml};

/// Execute `pkg-metadata pyproject`.
pub(crate) fn execute(args: &PyprojectArgs, printer: Printer) -> Result<ExitStatus> {
    let pyproject = PyProjectToml::from_path(&args.file)
        .with_context(|| format!("failed to read `{}`", args.file.display()))?;

    let Some(project) = pyproject.project else {
        printer.error(format_args!(
            "No `[project]` table found in `{}`",
            args.file.display()
        ));
        return Ok(ExitStatus::Failure);
    };

    // Readme paths are relative to the directory containing pyproject.toml.
    let root = args.file.parent().unwrap_or(Path::new(""));
    printer.debug(format_args!("Resolving readme relative to `{}`", root.display()));

    let metadata = pyproject::project_relative_to(&project, root)
        .with_context(|| format!("failed to convert `{}`", args.file.display()))?;

    match args.format {
        OutputFormat::Json => {
            let json =
                serde_json::to_string_pretty(&metadata).context("failed to serialize metadata")?;
            write_output(format!("{json}\n").as_bytes())?;
        }
        OutputFormat::Metadata => {
            let mut output = metadata::encode(&metadata);
            output.push(b'\n');
            write_output(&output)?;
        }
    }
    Ok(ExitStatus::Success)
}
