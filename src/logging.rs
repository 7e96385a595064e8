//! Logging setup.
//!
//! The terminal belongs to the TUI, so log lines go to a file instead of
//! stderr. `RUST_LOG` takes precedence over the configured level.

use std::fs::{self, OpenOptions};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use tracing_subscriber::EnvFilter;

use crate::app_dirs::AppDirs;
use crate::error::Result;

pub struct LoggingConfig {
    pub level: String,
    pub path: PathBuf,
}

impl LoggingConfig {
    pub fn new(level: impl Into<String>, path: impl AsRef<Path>) -> Self {
        Self {
            level: level.into(),
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn filter(&self) -> EnvFilter {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&self.level))
    }

    /// Install the global subscriber. Fails if the log file cannot be opened
    /// or a subscriber is already installed.
    pub fn init(&self) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;

        tracing_subscriber::fmt()
            .with_env_filter(self.filter())
            .with_writer(Mutex::new(file))
            .with_ansi(false)
            .with_target(false)
            .with_level(true)
            .try_init()
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::AlreadyExists, e.to_string()))?;

        Ok(())
    }
}

/// Log to the default state-dir file at `level`; returns the file used
pub fn init_default(level: &str) -> Option<PathBuf> {
    let path = AppDirs::log_path()?;
    let config = LoggingConfig::new(level, &path);
    config.init().ok().map(|_| path)
}
