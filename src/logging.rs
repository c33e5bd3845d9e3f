//! Logging setup shared by the binaries.
//!
//! All diagnostics go through `tracing` and are written to stderr, leaving
//! stdout to the report each tool prints. `RUST_LOG` takes precedence over the
//! `-v` count.

use tracing::Level;
use tracing_subscriber::EnvFilter;

use crate::error::{Result, ToolError};

/// Maps a `-v` occurrence count onto a level: none → warn, `-v` → info,
/// `-vv` → debug, more → trace.
pub fn level_from_verbosity(verbosity: u8) -> Level {
    match verbosity {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    }
}

/// Installs the global subscriber. Call once at startup.
pub fn init_logging(verbosity: u8) -> Result<()> {
    let level = level_from_verbosity(verbosity);
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(format!(
            "warn,csv_toolkit={level}",
            level = level.as_str().to_lowercase()
        ))
    });

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .try_init()
        .map_err(|error| ToolError::Logging(error.to_string()))
}
