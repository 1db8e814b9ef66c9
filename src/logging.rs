//! Log setup
//!
//! The terminal UI owns stdout, so every log line goes to `paisa.log` in the
//! base directory. The filter comes from `PAISA_LOG`, then from settings.

use std::fs::OpenOptions;
use std::sync::Mutex;

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::{PaisaPaths, Settings};
use crate::error::{PaisaError, PaisaResult};

/// Environment variable holding a tracing filter directive
pub const LOG_ENV: &str = "PAISA_LOG";

const FALLBACK_FILTER: &str = "paisa=info";

/// Build the filter from the environment, then settings, then the fallback
pub fn build_filter(settings: &Settings) -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV)
        .or_else(|_| EnvFilter::try_new(&settings.log_filter))
        .unwrap_or_else(|_| EnvFilter::new(FALLBACK_FILTER))
}

/// Install the global subscriber writing to the log file
pub fn init_logging(paths: &PaisaPaths, settings: &Settings) -> PaisaResult<()> {
    paths.ensure_directories()?;

    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(paths.log_file())
        .map_err(|e| PaisaError::Io(format!("Failed to open log file: {}", e)))?;

    tracing_subscriber::registry()
        .with(build_filter(settings))
        .with(fmt::layer().with_writer(Mutex::new(file)).with_ansi(false))
        .try_init()
        .map_err(|e| PaisaError::Config(format!("Failed to initialize logging: {}", e)))?;

    tracing::debug!(log_file = %paths.log_file().display(), "Logging initialized");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_invalid_settings_filter_falls_back() {
        let mut settings = Settings::default();
        settings.log_filter = "paisa=[".into();
        // must not panic
        let _ = build_filter(&settings);
    }

    #[test]
    fn test_init_creates_log_file() {
        let temp_dir = TempDir::new().unwrap();
        let paths = PaisaPaths::with_base_dir(temp_dir.path().join("nested"));

        // another test may already own the global subscriber
        let _ = init_logging(&paths, &Settings::default());
        assert!(paths.log_file().exists());
    }
}
