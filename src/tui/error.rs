use crate::config::ConfigError;

/// Errors that can stop the application before or while it runs.
///
/// Storage and logging failures are not among them: the session reports
/// those through its status line and keeps running.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// An I/O error occurred (terminal, event reading, etc.).
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration could not be resolved.
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
}
