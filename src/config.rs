//! Runtime configuration: line count, storage key, and data locations.

use std::env;
use std::path::{Path, PathBuf};

/// Number of lines on the form unless overridden.
pub const DEFAULT_LINE_COUNT: usize = 12;

/// Key the draft is stored under.
pub const DEFAULT_STORAGE_KEY: &str = "proofOfConceptFormData";

/// Environment variable overriding the data directory.
pub const DATA_DIR_ENV: &str = "LINEDRAFT_DATA_DIR";

/// Environment variable overriding the line count.
pub const LINES_ENV: &str = "LINEDRAFT_LINES";

/// Errors that can occur while resolving configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The platform does not provide a data directory.
    #[error("could not determine XDG data directory")]
    NoDataDir,

    /// The line count override is not a positive integer.
    #[error("invalid line count {0:?}: expected a positive integer")]
    InvalidLineCount(String),
}

/// Settings shared by the store, the session, and logging.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Number of editable lines.
    pub line_count: usize,
    /// Key the draft is stored under.
    pub storage_key: String,
    /// Root directory for the stored draft and the log file.
    pub data_dir: PathBuf,
}

impl Config {
    /// Resolves configuration from the environment.
    ///
    /// The data directory defaults to `~/.local/share/linedraft/` (or the
    /// platform equivalent); see [`DATA_DIR_ENV`] and [`LINES_ENV`] for
    /// overrides.
    pub fn new() -> Result<Self, ConfigError> {
        let data_dir = match env::var_os(DATA_DIR_ENV) {
            Some(dir) => PathBuf::from(dir),
            None => dirs::data_dir()
                .ok_or(ConfigError::NoDataDir)?
                .join("linedraft"),
        };
        let line_count = match env::var(LINES_ENV) {
            Ok(raw) => parse_line_count(&raw)?,
            Err(_) => DEFAULT_LINE_COUNT,
        };
        Ok(Self {
            line_count,
            storage_key: DEFAULT_STORAGE_KEY.to_string(),
            data_dir,
        })
    }

    /// Creates a default configuration rooted at `path`.
    pub fn with_data_dir(path: impl Into<PathBuf>) -> Self {
        Self {
            line_count: DEFAULT_LINE_COUNT,
            storage_key: DEFAULT_STORAGE_KEY.to_string(),
            data_dir: path.into(),
        }
    }

    /// Directory the [`FileStore`](crate::storage::FileStore) writes into.
    pub fn store_dir(&self) -> PathBuf {
        self.data_dir.join("store")
    }

    /// File the diagnostic log is appended to.
    pub fn log_path(&self) -> PathBuf {
        self.data_dir.join("linedraft.log")
    }

    /// Root data directory.
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }
}

/// Parses a line count override, rejecting zero and non-numbers.
fn parse_line_count(raw: &str) -> Result<usize, ConfigError> {
    match raw.trim().parse::<usize>() {
        Ok(n) if n > 0 => Ok(n),
        _ => Err(ConfigError::InvalidLineCount(raw.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn with_data_dir_uses_defaults() {
        let config = Config::with_data_dir("/tmp/linedraft-test");
        assert_eq!(config.line_count, 12);
        assert_eq!(config.storage_key, "proofOfConceptFormData");
        assert_eq!(config.data_dir(), Path::new("/tmp/linedraft-test"));
    }

    #[test]
    fn derived_paths_live_under_data_dir() {
        let config = Config::with_data_dir("/data");
        assert_eq!(config.store_dir(), PathBuf::from("/data/store"));
        assert_eq!(config.log_path(), PathBuf::from("/data/linedraft.log"));
    }

    #[test]
    fn parse_line_count_accepts_positive() {
        assert_eq!(parse_line_count("5").unwrap(), 5);
        assert_eq!(parse_line_count(" 20 ").unwrap(), 20);
    }

    #[test]
    fn parse_line_count_rejects_zero() {
        assert!(matches!(
            parse_line_count("0"),
            Err(ConfigError::InvalidLineCount(_))
        ));
    }

    #[test]
    fn parse_line_count_rejects_garbage() {
        assert!(matches!(
            parse_line_count("twelve"),
            Err(ConfigError::InvalidLineCount(s)) if s == "twelve"
        ));
        assert!(parse_line_count("-3").is_err());
    }
}
