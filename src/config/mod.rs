//! Configuration management.
//!
//! Values are layered: built-in defaults, then an optional TOML file, then
//! `NFTLIB_*` environment variables, then command-line flags.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::io::Source;
use crate::rendering::Locale;
use crate::services::DEFAULT_DEBOUNCE;

/// Default catalog document.
pub const DEFAULT_CATALOG: &str = "data/nfts.json";

/// Default about document.
pub const DEFAULT_ABOUT: &str = "data/about.json";

/// Main configuration for nftlib.
#[derive(Debug, Clone)]
pub struct LibraryConfig {
    /// Catalog document.
    pub catalog: Source,
    /// About document.
    pub about: Source,
    /// Display language.
    pub locale: Locale,
    /// Search debounce window.
    pub debounce: Duration,
    /// Logging settings.
    pub logging: LoggingSettings,
    /// File the configuration was read from, if any.
    pub path: Option<PathBuf>,
}

/// `[logging]` section.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoggingSettings {
    /// Filter directive (`warn`, `nftlib=debug`, ...).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub level: Option<String>,
    /// Output format: `pretty` or `json`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub format: Option<String>,
    /// Log file; stderr when unset.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file: Option<PathBuf>,
}

/// Configuration file structure (for TOML parsing).
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct ConfigFile {
    /// Catalog path or URL.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub catalog: Option<String>,
    /// About path or URL.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub about: Option<String>,
    /// Display language.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub locale: Option<String>,
    /// Search debounce in milliseconds.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub debounce_ms: Option<u64>,
    /// Logging section.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub logging: Option<LoggingSettings>,
}

impl Default for LibraryConfig {
    fn default() -> Self {
        Self {
            catalog: Source::parse(DEFAULT_CATALOG),
            about: Source::parse(DEFAULT_ABOUT),
            locale: Locale::default(),
            debounce: DEFAULT_DEBOUNCE,
            logging: LoggingSettings::default(),
            path: None,
        }
    }
}

impl LibraryConfig {
    /// Creates a new configuration with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads configuration from a file path.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn load_from_file(path: &Path) -> crate::Result<Self> {
        let contents =
            std::fs::read_to_string(path).map_err(|e| crate::Error::OperationFailed {
                operation: "read_config_file".to_string(),
                cause: format!("{}: {e}", path.display()),
            })?;

        let file: ConfigFile =
            toml::from_str(&contents).map_err(|e| crate::Error::OperationFailed {
                operation: "parse_config_file".to_string(),
                cause: e.to_string(),
            })?;

        let mut config = Self::from_config_file(file);
        config.path = Some(path.to_path_buf());
        Ok(config)
    }

    /// Loads configuration from the default location.
    ///
    /// Checks the platform config dir (`~/.config/nftlib/` on Linux,
    /// `~/Library/Application Support/nftlib/` on macOS), then
    /// `~/.config/nftlib/`. Returns defaults if no readable file is found.
    #[must_use]
    pub fn load_default() -> Self {
        let Some(base_dirs) = directories::BaseDirs::new() else {
            return Self::default();
        };

        let candidates = [
            base_dirs.config_dir().join("nftlib").join("config.toml"),
            base_dirs
                .home_dir()
                .join(".config")
                .join("nftlib")
                .join("config.toml"),
        ];

        candidates
            .iter()
            .filter(|path| path.exists())
            .find_map(|path| match Self::load_from_file(path) {
                Ok(config) => Some(config),
                Err(e) => {
                    tracing::warn!(error = %e, "ignoring unreadable config file");
                    None
                },
            })
            .unwrap_or_default()
    }

    /// Loads an explicit file, or the default location when `path` is `None`.
    ///
    /// # Errors
    ///
    /// Returns an error only if an explicit file cannot be read or parsed.
    pub fn load(path: Option<&Path>) -> crate::Result<Self> {
        path.map_or_else(|| Ok(Self::load_default()), Self::load_from_file)
    }

    /// Converts a `ConfigFile` to `LibraryConfig`.
    fn from_config_file(file: ConfigFile) -> Self {
        let mut config = Self::default();

        if let Some(catalog) = file.catalog {
            config.catalog = Source::parse(&catalog);
        }
        if let Some(about) = file.about {
            config.about = Source::parse(&about);
        }
        if let Some(locale) = file.locale {
            config.set_locale(&locale);
        }
        if let Some(ms) = file.debounce_ms {
            config.debounce = Duration::from_millis(ms);
        }
        if let Some(logging) = file.logging {
            config.logging = logging;
        }

        config
    }

    /// Applies `NFTLIB_*` environment variable overrides.
    #[must_use]
    pub fn with_env_overrides(self) -> Self {
        self.with_overrides_from(|key| std::env::var(key).ok())
    }

    /// Applies overrides from any variable lookup.
    ///
    /// Recognised keys: `NFTLIB_CATALOG`, `NFTLIB_ABOUT`, `NFTLIB_LOCALE`,
    /// `NFTLIB_DEBOUNCE_MS`, `NFTLIB_LOG_FORMAT`, `NFTLIB_LOG_FILE`.
    #[must_use]
    pub fn with_overrides_from(mut self, lookup: impl Fn(&str) -> Option<String>) -> Self {
        if let Some(v) = lookup("NFTLIB_CATALOG") {
            self.catalog = Source::parse(&v);
        }
        if let Some(v) = lookup("NFTLIB_ABOUT") {
            self.about = Source::parse(&v);
        }
        if let Some(v) = lookup("NFTLIB_LOCALE") {
            self.set_locale(&v);
        }
        if let Some(v) = lookup("NFTLIB_DEBOUNCE_MS") {
            match v.trim().parse::<u64>() {
                Ok(ms) => self.debounce = Duration::from_millis(ms),
                Err(_) => tracing::warn!(value = %v, "ignoring invalid NFTLIB_DEBOUNCE_MS"),
            }
        }
        if let Some(v) = lookup("NFTLIB_LOG_FORMAT") {
            self.logging.format = Some(v);
        }
        if let Some(v) = lookup("NFTLIB_LOG_FILE") {
            self.logging.file = Some(PathBuf::from(v));
        }
        self
    }

    /// Sets the catalog source.
    #[must_use]
    pub fn with_catalog(mut self, source: Source) -> Self {
        self.catalog = source;
        self
    }

    /// Sets the about source.
    #[must_use]
    pub fn with_about(mut self, source: Source) -> Self {
        self.about = source;
        self
    }

    /// Sets the display language.
    #[must_use]
    pub const fn with_locale(mut self, locale: Locale) -> Self {
        self.locale = locale;
        self
    }

    /// Returns the configuration in file form, for display.
    #[must_use]
    pub fn to_config_file(&self) -> ConfigFile {
        let logging = (self.logging != LoggingSettings::default()).then(|| self.logging.clone());
        ConfigFile {
            catalog: Some(self.catalog.to_string()),
            about: Some(self.about.to_string()),
            locale: Some(self.locale.as_str().to_string()),
            debounce_ms: Some(u64::try_from(self.debounce.as_millis()).unwrap_or(u64::MAX)),
            logging,
        }
    }

    fn set_locale(&mut self, value: &str) {
        match Locale::parse(value) {
            Some(locale) => self.locale = locale,
            None => tracing::warn!(value, "ignoring unsupported locale"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_defaults() {
        let config = LibraryConfig::new();
        assert_eq!(config.catalog, Source::parse(DEFAULT_CATALOG));
        assert_eq!(config.about, Source::parse(DEFAULT_ABOUT));
        assert_eq!(config.locale, Locale::Fr);
        assert_eq!(config.debounce, Duration::from_millis(200));
        assert!(config.path.is_none());
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(
            &path,
            r#"
catalog = "https://example.org/nfts.json"
locale = "en-CA"
debounce_ms = 50

[logging]
level = "debug"
format = "json"
"#,
        )
        .unwrap();

        let config = LibraryConfig::load_from_file(&path).unwrap();
        assert!(config.catalog.is_remote());
        assert_eq!(config.about, Source::parse(DEFAULT_ABOUT));
        assert_eq!(config.locale, Locale::En);
        assert_eq!(config.debounce, Duration::from_millis(50));
        assert_eq!(config.logging.level.as_deref(), Some("debug"));
        assert_eq!(config.logging.format.as_deref(), Some("json"));
        assert_eq!(config.path.as_deref(), Some(path.as_path()));
    }

    #[test]
    fn test_load_from_file_rejects_bad_toml() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "catalog = [").unwrap();

        let err = LibraryConfig::load_from_file(&path).unwrap_err();
        assert!(err.to_string().contains("parse_config_file"));
        assert!(LibraryConfig::load(Some(dir.path().join("missing.toml").as_path())).is_err());
    }

    #[test]
    fn test_env_overrides() {
        let vars: HashMap<&str, &str> = HashMap::from([
            ("NFTLIB_CATALOG", "other.json"),
            ("NFTLIB_LOCALE", "en"),
            ("NFTLIB_DEBOUNCE_MS", "0"),
            ("NFTLIB_LOG_FORMAT", "json"),
        ]);
        let config = LibraryConfig::new()
            .with_overrides_from(|key| vars.get(key).map(|v| (*v).to_string()));

        assert_eq!(config.catalog, Source::File(PathBuf::from("other.json")));
        assert_eq!(config.locale, Locale::En);
        assert_eq!(config.debounce, Duration::ZERO);
        assert_eq!(config.logging.format.as_deref(), Some("json"));
    }

    #[test]
    fn test_invalid_overrides_keep_previous_values() {
        let config = LibraryConfig::new().with_overrides_from(|key| match key {
            "NFTLIB_LOCALE" => Some("de".to_string()),
            "NFTLIB_DEBOUNCE_MS" => Some("soon".to_string()),
            _ => None,
        });
        assert_eq!(config.locale, Locale::Fr);
        assert_eq!(config.debounce, DEFAULT_DEBOUNCE);
    }

    #[test]
    fn test_to_config_file_round_trips_through_toml() {
        let config = LibraryConfig::new().with_locale(Locale::En);
        let text = toml::to_string(&config.to_config_file()).unwrap();
        assert!(text.contains("locale = \"en\""));
        assert!(!text.contains("[logging]"));

        let file: ConfigFile = toml::from_str(&text).unwrap();
        assert_eq!(file.debounce_ms, Some(200));
    }
}
