//! Logging through `tracing` and `tracing-subscriber`.
//!
//! The terminal belongs to the TUI, so logs only ever go to a file, and only
//! when `TABSET_LOG` is set. Its value is an `EnvFilter` directive such as
//! `debug` or `tabset::tabs=trace`.

use anyhow::{Context, Result};
use std::fs::OpenOptions;
use std::path::PathBuf;
use std::sync::Mutex;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Environment variable that enables logging.
pub const LOG_ENV: &str = "TABSET_LOG";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogConfig {
    /// Filter directive passed to `EnvFilter`.
    pub directive: String,
    pub log_file: PathBuf,
}

impl LogConfig {
    /// Reads `TABSET_LOG`. Returns `None` when logging is disabled.
    pub fn from_env(log_file: PathBuf) -> Option<Self> {
        let directive = std::env::var(LOG_ENV).ok()?;
        Self::from_directive(&directive, log_file)
    }

    /// Blank directives disable logging.
    pub fn from_directive(directive: &str, log_file: PathBuf) -> Option<Self> {
        let directive = directive.trim();
        if directive.is_empty() {
            return None;
        }
        Some(LogConfig {
            directive: directive.to_string(),
            log_file,
        })
    }
}

/// Installs the global subscriber. Call once, before the TUI starts.
pub fn init_logging(config: &LogConfig) -> Result<()> {
    if let Some(parent) = config.log_file.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create log directory: {}", parent.display()))?;
    }

    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&config.log_file)
        .with_context(|| format!("Failed to open log file {}", config.log_file.display()))?;

    let filter = EnvFilter::try_new(&config.directive)
        .with_context(|| format!("Invalid {} directive '{}'", LOG_ENV, config.directive))?;

    let layer = fmt::layer()
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(true);

    tracing_subscriber::registry()
        .with(filter)
        .with(layer)
        .try_init()
        .context("Failed to install log subscriber")?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_directive_blank_disables_logging() {
        assert_eq!(LogConfig::from_directive("  ", PathBuf::from("x.log")), None);
    }

    #[test]
    fn test_from_directive_trims_value() {
        let config = LogConfig::from_directive(" debug ", PathBuf::from("x.log")).unwrap();
        assert_eq!(config.directive, "debug");
        assert_eq!(config.log_file, PathBuf::from("x.log"));
    }

    #[test]
    fn test_init_logging_rejects_bad_directive() {
        let temp_dir = tempfile::TempDir::new().unwrap();
        let config = LogConfig {
            directive: "tabset=loud".to_string(),
            log_file: temp_dir.path().join("tabset.log"),
        };
        assert!(init_logging(&config).is_err());
    }
}
