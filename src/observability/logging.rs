//! Structured logging configuration.

use std::path::PathBuf;

use tracing_subscriber::EnvFilter;

use crate::config::LoggingSettings;

/// Default filter when nothing is configured.
const DEFAULT_LEVEL: &str = "warn";

/// Filter used with `--verbose`.
const VERBOSE_LEVEL: &str = "debug";

/// Log output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    /// Human-readable multi-line output.
    #[default]
    Pretty,
    /// One JSON object per event.
    Json,
}

impl LogFormat {
    /// Parses a format name, defaulting to `Pretty`.
    #[must_use]
    pub fn parse(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "json" => Self::Json,
            _ => Self::Pretty,
        }
    }
}

/// Resolved logging configuration.
#[derive(Debug)]
pub struct LoggingConfig {
    /// Event filter.
    pub filter: EnvFilter,
    /// Output format.
    pub format: LogFormat,
    /// Log file; stderr when `None`.
    pub file: Option<PathBuf>,
}

impl LoggingConfig {
    /// Resolves logging from config settings and the process environment.
    ///
    /// Filter precedence: `NFTLIB_LOG`, `RUST_LOG`, `--verbose`, the
    /// configured level, then `warn`.
    #[must_use]
    pub fn from_settings(settings: &LoggingSettings, verbose: bool) -> Self {
        Self::from_sources(settings, verbose, |key| std::env::var(key).ok())
    }

    /// Resolves logging from config settings and any variable lookup.
    #[must_use]
    pub fn from_sources(
        settings: &LoggingSettings,
        verbose: bool,
        lookup: impl Fn(&str) -> Option<String>,
    ) -> Self {
        let directive = lookup("NFTLIB_LOG")
            .or_else(|| lookup("RUST_LOG"))
            .or_else(|| verbose.then(|| VERBOSE_LEVEL.to_string()))
            .or_else(|| settings.level.clone())
            .unwrap_or_else(|| DEFAULT_LEVEL.to_string());

        let filter = EnvFilter::try_new(&directive).unwrap_or_else(|e| {
            tracing::warn!(directive = %directive, error = %e, "invalid log filter, using default");
            EnvFilter::new(DEFAULT_LEVEL)
        });

        Self {
            filter,
            format: settings
                .format
                .as_deref()
                .map(LogFormat::parse)
                .unwrap_or_default(),
            file: settings.file.clone(),
        }
    }
}
