//! Error types for terminal, configuration and rendering failures.

use std::path::PathBuf;

/// Errors raised by the terminal driver.
#[derive(Debug, thiserror::Error)]
pub enum TerminalError {
    #[error("No usable terminal: {reason}")]
    Unavailable { reason: String },

    #[error("Terminal I/O failed: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors that can occur while loading or validating configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Could not determine config directory")]
    NoConfigDir,

    #[error("Failed to read config file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Invalid config value for '{field}': {message}")]
    Invalid { field: &'static str, message: String },
}

/// Errors that can occur while drawing a frame.
#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    #[error(transparent)]
    Terminal(#[from] TerminalError),

    #[error("Failed to write frame: {0}")]
    Io(#[from] std::io::Error),
}
