//! CLI argument definitions for pkg-metadata.
//!
//! All clap derive structs live here. The [`Cli`] struct is the top-level
//! parser; [`Commands`] enumerates every subcommand.

use std::path::PathBuf;

use clap::builder::styling::{AnsiColor, Effects, Styles};
use clap::{Parser, Subcommand, ValueEnum};

/// Clap v3-style help menu colors.
const STYLES: Styles = Styles::styled()
    .header(AnsiColor::Green.on_default().effects(Effects::BOLD))
    .usage(AnsiColor::Green.on_default().effects(Effects::BOLD))
    .literal(AnsiColor::Cyan.on_default().effects(Effects::BOLD))
    .placeholder(AnsiColor::Cyan.on_default());

/// Convert Python package metadata between formats.
#[derive(Parser, Debug)]
#[command(
    name = "pkg-metadata",
    author,
    version,
    about = "Convert Python package metadata between formats.",
    styles = STYLES,
    after_help = "Use `pkg-metadata help <command>` for more information on a specific command."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Increase logging verbosity.
    #[arg(global = true, short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress all output except errors.
    #[arg(global = true, short, long)]
    pub quiet: bool,
}

/// Top-level subcommands for pkg-metadata.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Convert a core metadata file (METADATA, PKG-INFO) to JSON.
    ToJson(ToJsonArgs),

    /// Convert JSON metadata to the core metadata format.
    FromJson(FromJsonArgs),

    /// Read the [project] table of a pyproject.toml as metadata.
    Pyproject(PyprojectArgs),
}

impl Commands {
    /// Return the subcommand name as a static string (for diagnostics).
    pub fn name(&self) -> &'static str {
        match self {
            Self::ToJson(_) => "to-json",
            Self::FromJson(_) => "from-json",
            Self::Pyproject(_) => "pyproject",
        }
    }
}

/// Output format for commands that produce metadata.
#[derive(ValueEnum, Debug, Copy, Clone, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// Pretty-printed JSON.
    #[default]
    Json,
    /// The core metadata header format.
    Metadata,
}

/// Arguments for `pkg-metadata to-json`.
#[derive(Parser, Debug)]
pub struct ToJsonArgs {
    /// The core metadata file to read. Reads stdin if omitted or `-`.
    pub file: Option<PathBuf>,
}

/// Arguments for `pkg-metadata from-json`.
#[derive(Parser, Debug)]
pub struct FromJsonArgs {
    /// The JSON file to read. Reads stdin if omitted or `-`.
    pub file: Option<PathBuf>,
}

/// Arguments for `pkg-metadata pyproject`.
#[derive(Parser, Debug)]
pub struct PyprojectArgs {
    /// The pyproject.toml to read.
    #[arg(default_value = "pyproject.toml")]
    pub file: PathBuf,

    /// The output format.
    #[arg(long, value_enum, default_value_t = OutputFormat::Json)]
    pub format: OutputFormat,
}
