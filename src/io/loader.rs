//! Catalog and about loading.

use std::time::Duration;

use serde_json::Value;
use tracing::{debug, instrument, warn};

use crate::Result;
use crate::config::LibraryConfig;
use crate::models::AboutInfo;
use crate::services::{Catalog, LibrarySession};

use super::source::{Source, build_http_client};

/// Timeout for URL sources.
pub const DEFAULT_FETCH_TIMEOUT: Duration = Duration::from_secs(10);

/// Reads the catalog and about documents and opens sessions over them.
#[derive(Debug, Clone)]
pub struct Loader {
    client: reqwest::blocking::Client,
}

impl Default for Loader {
    fn default() -> Self {
        Self::new(DEFAULT_FETCH_TIMEOUT)
    }
}

impl Loader {
    /// Creates a loader whose URL fetches time out after `timeout`.
    #[must_use]
    pub fn new(timeout: Duration) -> Self {
        Self {
            client: build_http_client(timeout),
        }
    }

    /// Reads and ingests a catalog document.
    ///
    /// # Errors
    ///
    /// Returns an error if the document cannot be read, is not JSON, or has
    /// an unsupported shape.
    #[instrument(skip_all, fields(source = %source))]
    pub fn load_catalog(&self, source: &Source) -> Result<Catalog> {
        let text = source.read_to_string(&self.client)?;
        let catalog = Catalog::parse(&text)?;
        debug!(
            records = catalog.len(),
            drafts = catalog.drafts_dropped(),
            "catalog loaded"
        );
        Ok(catalog)
    }

    /// Reads the about document.
    ///
    /// Failures are not errors: the about section is optional, so any read
    /// or parse problem yields `None` and a debug event.
    #[instrument(skip_all, fields(source = %source))]
    pub fn load_about(&self, source: &Source) -> Option<AboutInfo> {
        let text = match source.read_to_string(&self.client) {
            Ok(text) => text,
            Err(e) => {
                debug!(error = %e, "about document unavailable");
                return None;
            },
        };
        match serde_json::from_str::<Value>(&text) {
            Ok(value) => Some(AboutInfo::from_value(&value)),
            Err(e) => {
                debug!(error = %e, "about document is not valid JSON");
                None
            },
        }
    }

    /// Loads both documents and opens a session.
    ///
    /// A catalog failure never aborts: the session starts empty and carries
    /// the localized load error message.
    #[must_use]
    pub fn open_session(&self, config: &LibraryConfig) -> LibrarySession {
        let session = match self.load_catalog(&config.catalog) {
            Ok(catalog) => LibrarySession::new(catalog, config.locale),
            Err(e) => {
                warn!(error = %e, source = %config.catalog, "catalog failed to load");
                LibrarySession::failed(config.locale.load_error_message(), config.locale)
            },
        };

        let about = self.load_about(&config.about).unwrap_or_default();
        session.with_about(about).with_debounce(config.debounce)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rendering::Locale;
    use std::fs;
    use tempfile::TempDir;

    fn write(dir: &TempDir, name: &str, contents: &str) -> Source {
        let path = dir.path().join(name);
        fs::write(&path, contents).unwrap();
        Source::File(path)
    }

    #[test]
    fn test_load_catalog_from_file() {
        let dir = TempDir::new().unwrap();
        let source = write(
            &dir,
            "nfts.json",
            r#"[{"title": "A", "status": "published"}, {"title": "B", "status": "draft"}]"#,
        );

        let catalog = Loader::default().load_catalog(&source).unwrap();
        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog.drafts_dropped(), 1);
    }

    #[test]
    fn test_load_catalog_rejects_bad_json() {
        let dir = TempDir::new().unwrap();
        let source = write(&dir, "nfts.json", "not json");
        assert!(Loader::default().load_catalog(&source).is_err());
    }

    #[test]
    fn test_load_about_is_silent() {
        let dir = TempDir::new().unwrap();
        let loader = Loader::default();

        let missing = Source::File(dir.path().join("about.json"));
        assert!(loader.load_about(&missing).is_none());

        let broken = write(&dir, "broken.json", "{");
        assert!(loader.load_about(&broken).is_none());

        let about = write(&dir, "about.json", r#"{"vision": "Voir loin"}"#);
        let info = loader.load_about(&about).unwrap();
        assert_eq!(info.vision.as_deref(), Some("Voir loin"));
    }

    #[test]
    fn test_open_session_survives_missing_catalog() {
        let dir = TempDir::new().unwrap();
        let config = LibraryConfig {
            catalog: Source::File(dir.path().join("nfts.json")),
            about: Source::File(dir.path().join("about.json")),
            locale: Locale::Fr,
            ..LibraryConfig::default()
        };

        let session = Loader::default().open_session(&config);
        let view = session.render();
        assert_eq!(
            view.error.as_deref(),
            Some("Erreur lors du chargement des données.")
        );
        assert!(view.empty);
        assert!(session.about().is_empty());
    }
}
