//! Diagnostic sink: `tracing` events appended to a log file.
//!
//! The terminal belongs to the UI, so nothing is ever written to stdout or
//! stderr while the app runs.

use std::fs::{self, OpenOptions};
use std::sync::Arc;

use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, fmt};

use crate::config::Config;

/// Environment variable holding the log filter directive.
pub const LOG_ENV: &str = "LINEDRAFT_LOG";

/// Errors that can occur while installing the log subscriber.
#[derive(Debug, thiserror::Error)]
pub enum LoggingError {
    /// The log file or its directory could not be opened.
    #[error("could not open log file: {0}")]
    Io(#[from] std::io::Error),

    /// A global subscriber was already installed.
    #[error("could not install log subscriber: {0}")]
    Init(#[from] tracing_subscriber::util::TryInitError),
}

/// Installs the global subscriber, appending to [`Config::log_path`].
///
/// The filter comes from [`LOG_ENV`] and defaults to `info`.
#[cfg_attr(coverage_nightly, coverage(off))]
#[mutants::skip]
pub fn init(config: &Config) -> Result<(), LoggingError> {
    fs::create_dir_all(config.data_dir())?;
    let log_file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(config.log_path())?;

    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_writer(Arc::new(log_file))
                .with_ansi(false),
        )
        .try_init()?;
    Ok(())
}
