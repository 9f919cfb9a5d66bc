//! Logging setup.
//!
//! The animation owns the screen, so logs go to a file when one is given and
//! to stderr otherwise. The filter is read from `EARTHSPIN_LOG` and defaults
//! to `warn`.

use std::fs::File;
use std::path::Path;
use std::sync::Mutex;

use anyhow::{Context, Result};
use tracing_subscriber::{fmt, EnvFilter};

/// Environment variable holding the log filter directive.
pub const LOG_ENV: &str = "EARTHSPIN_LOG";

/// Default filter directive when `EARTHSPIN_LOG` is unset or invalid.
pub const DEFAULT_FILTER: &str = "warn";

/// Build the filter from `EARTHSPIN_LOG`, falling back to [`DEFAULT_FILTER`].
pub fn env_filter() -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}

/// Install the global tracing subscriber.
///
/// Calling this twice is harmless; the second call keeps the first subscriber.
pub fn init_logging(log_file: Option<&Path>) -> Result<()> {
    let builder = fmt().with_env_filter(env_filter()).with_target(true);

    let installed = match log_file {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("Failed to create log file {}", path.display()))?;
            builder
                .with_ansi(false)
                .with_writer(Mutex::new(file))
                .try_init()
        }
        None => builder.with_writer(std::io::stderr).try_init(),
    };

    if installed.is_err() {
        tracing::debug!("tracing subscriber already installed");
    }
    Ok(())
}
