//! Tracing setup for the CLI.
//!
//! Library code logs through `tracing`; the binary writes those events to
//! stderr. The level follows `--verbose` / `--quiet`:
//!
//! | Flags   | Level   |
//! |---------|---------|
//! | `-q`    | `error` |
//! | (none)  | `warn`  |
//! | `-v`    | `debug` |
//! | `-vv`   | `trace` |

use anyhow::{Result, anyhow};
use tracing::level_filters::LevelFilter;

/// Install a stderr `fmt` subscriber for the given verbosity.
pub(crate) fn setup_logging(verbosity: u8, quiet: bool) -> Result<()> {
    let level = match (quiet, verbosity) {
        (true, _) => LevelFilter::ERROR,
        (false, 0) => LevelFilter::WARN,
        (false, 1) => LevelFilter::DEBUG,
        (false, _) => LevelFilter::TRACE,
    };

    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .with_target(verbosity > 1)
        .without_time()
        .try_init()
        .map_err(|err| anyhow!(err))
}
