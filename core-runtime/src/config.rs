//! # Core Configuration Module
//!
//! Provides configuration management for the playlist core.
//!
//! ## Overview
//!
//! The configuration system uses a builder pattern to construct a `CoreConfig`
//! instance that holds the catalog settings, the event bus capacity and an
//! optional logging setup. `build()` validates everything up front so a bad
//! setting fails at startup rather than halfway through a refresh.
//!
//! [`CatalogConfig`] also implements `Deserialize`, so hosts that already
//! parse their own TOML or JSON configuration can embed it directly:
//!
//! ```toml
//! [catalog]
//! radio_stations_as_playlists = true
//! radio_stations_count = 10
//! radio_tracks_count = 50
//! ```
//!
//! ## Usage
//!
//! ```
//! use core_runtime::config::CoreConfig;
//!
//! let config = CoreConfig::builder()
//!     .radio_stations_as_playlists(true)
//!     .radio_stations_count(10)
//!     .radio_tracks_count(50)
//!     .build()
//!     .expect("valid config");
//!
//! assert!(config.catalog.radio_stations_as_playlists);
//! ```
//!
//! ## Error Handling
//!
//! ```should_panic
//! use core_runtime::config::CoreConfig;
//!
//! // Zero is not a usable page size for radio expansion
//! let config = CoreConfig::builder()
//!     .radio_tracks_count(0)
//!     .build()
//!     .expect("Should fail - radio_tracks_count must be positive");
//! ```

use crate::error::{Error, Result};
use crate::events::DEFAULT_EVENT_BUFFER_SIZE;
use crate::logging::LoggingConfig;
use serde::{Deserialize, Serialize};

/// URI scheme used when no scheme is configured.
pub const DEFAULT_URI_SCHEME: &str = "gmusic";

/// Default number of radio stations materialized as playlists.
pub const DEFAULT_RADIO_STATIONS_COUNT: u32 = 25;

/// Default number of tracks fetched per radio station.
pub const DEFAULT_RADIO_TRACKS_COUNT: u32 = 25;

/// Settings consumed by the playlist catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CatalogConfig {
    /// Scheme prefix for every playlist and track URI (`<scheme>:playlist:...`)
    pub uri_scheme: String,

    /// Expose radio stations as static playlists
    pub radio_stations_as_playlists: bool,

    /// Upper bound on stations fetched during radio expansion
    pub radio_stations_count: u32,

    /// Upper bound on tracks fetched per station
    pub radio_tracks_count: u32,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            uri_scheme: DEFAULT_URI_SCHEME.to_string(),
            radio_stations_as_playlists: false,
            radio_stations_count: DEFAULT_RADIO_STATIONS_COUNT,
            radio_tracks_count: DEFAULT_RADIO_TRACKS_COUNT,
        }
    }
}

impl CatalogConfig {
    /// Validates the catalog settings.
    ///
    /// The radio counts are checked even when radio expansion is disabled so
    /// that toggling the flag later cannot surface a latent bad value.
    pub fn validate(&self) -> Result<()> {
        if self.uri_scheme.is_empty() {
            return Err(Error::Config("URI scheme cannot be empty".to_string()));
        }

        if self.uri_scheme.contains(':') {
            return Err(Error::Config(format!(
                "URI scheme '{}' must not contain ':'",
                self.uri_scheme
            )));
        }

        if self.radio_stations_count == 0 {
            return Err(Error::Config(
                "radio_stations_count must be greater than 0".to_string(),
            ));
        }

        if self.radio_tracks_count == 0 {
            return Err(Error::Config(
                "radio_tracks_count must be greater than 0".to_string(),
            ));
        }

        Ok(())
    }
}

/// Core configuration for the playlist core.
///
/// Use [`CoreConfigBuilder`] to construct instances.
#[derive(Debug, Clone)]
pub struct CoreConfig {
    /// Catalog refresh settings
    pub catalog: CatalogConfig,

    /// Number of events buffered per event bus subscriber
    pub event_buffer_size: usize,

    /// Logging setup; `None` leaves subscriber installation to the host
    pub logging: Option<LoggingConfig>,
}

impl CoreConfig {
    /// Creates a new builder for constructing a `CoreConfig`.
    pub fn builder() -> CoreConfigBuilder {
        CoreConfigBuilder::default()
    }

    /// Validates the configuration and returns an error if invalid.
    pub fn validate(&self) -> Result<()> {
        self.catalog.validate()?;

        if self.event_buffer_size == 0 {
            return Err(Error::Config(
                "Event buffer size must be greater than 0".to_string(),
            ));
        }

        Ok(())
    }
}

/// Builder for constructing [`CoreConfig`] instances.
#[derive(Debug, Default)]
pub struct CoreConfigBuilder {
    catalog: Option<CatalogConfig>,
    uri_scheme: Option<String>,
    radio_stations_as_playlists: Option<bool>,
    radio_stations_count: Option<u32>,
    radio_tracks_count: Option<u32>,
    event_buffer_size: Option<usize>,
    logging: Option<LoggingConfig>,
}

impl CoreConfigBuilder {
    /// Starts from a complete catalog section, e.g. one parsed from a host
    /// config file. Individual setters called afterwards still win.
    pub fn catalog(mut self, catalog: CatalogConfig) -> Self {
        self.catalog = Some(catalog);
        self
    }

    /// Sets the URI scheme (default: `gmusic`).
    pub fn uri_scheme(mut self, scheme: impl Into<String>) -> Self {
        self.uri_scheme = Some(scheme.into());
        self
    }

    /// Enables or disables radio stations as playlists.
    pub fn radio_stations_as_playlists(mut self, enabled: bool) -> Self {
        self.radio_stations_as_playlists = Some(enabled);
        self
    }

    /// Sets the maximum number of radio stations to expand.
    pub fn radio_stations_count(mut self, count: u32) -> Self {
        self.radio_stations_count = Some(count);
        self
    }

    /// Sets the maximum number of tracks per radio station.
    pub fn radio_tracks_count(mut self, count: u32) -> Self {
        self.radio_tracks_count = Some(count);
        self
    }

    /// Sets the event bus buffer size.
    ///
    /// Default: [`DEFAULT_EVENT_BUFFER_SIZE`]
    pub fn event_buffer_size(mut self, size: usize) -> Self {
        self.event_buffer_size = Some(size);
        self
    }

    /// Sets the logging configuration applied by the service bootstrap.
    pub fn logging(mut self, logging: LoggingConfig) -> Self {
        self.logging = Some(logging);
        self
    }

    /// Builds the `CoreConfig`, validating all settings.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`] with an actionable message when any setting
    /// is out of range.
    pub fn build(self) -> Result<CoreConfig> {
        let mut catalog = self.catalog.unwrap_or_default();

        if let Some(scheme) = self.uri_scheme {
            catalog.uri_scheme = scheme;
        }
        if let Some(enabled) = self.radio_stations_as_playlists {
            catalog.radio_stations_as_playlists = enabled;
        }
        if let Some(count) = self.radio_stations_count {
            catalog.radio_stations_count = count;
        }
        if let Some(count) = self.radio_tracks_count {
            catalog.radio_tracks_count = count;
        }

        let config = CoreConfig {
            catalog,
            event_buffer_size: self.event_buffer_size.unwrap_or(DEFAULT_EVENT_BUFFER_SIZE),
            logging: self.logging,
        };

        config.validate()?;

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_defaults() {
        let config = CoreConfig::builder().build().unwrap();

        assert_eq!(config.catalog.uri_scheme, "gmusic");
        assert!(!config.catalog.radio_stations_as_playlists);
        assert_eq!(config.catalog.radio_stations_count, DEFAULT_RADIO_STATIONS_COUNT);
        assert_eq!(config.catalog.radio_tracks_count, DEFAULT_RADIO_TRACKS_COUNT);
        assert_eq!(config.event_buffer_size, DEFAULT_EVENT_BUFFER_SIZE);
        assert!(config.logging.is_none());
    }

    #[test]
    fn test_builder_overrides_catalog_section() {
        let section = CatalogConfig {
            radio_stations_as_playlists: true,
            radio_stations_count: 3,
            ..Default::default()
        };

        let config = CoreConfig::builder()
            .catalog(section)
            .radio_stations_count(7)
            .uri_scheme("music")
            .build()
            .unwrap();

        assert!(config.catalog.radio_stations_as_playlists);
        assert_eq!(config.catalog.radio_stations_count, 7);
        assert_eq!(config.catalog.uri_scheme, "music");
    }

    #[test]
    fn test_rejects_zero_radio_counts() {
        let err = CoreConfig::builder()
            .radio_stations_count(0)
            .build()
            .unwrap_err();
        assert!(err.to_string().contains("radio_stations_count"));

        let err = CoreConfig::builder()
            .radio_tracks_count(0)
            .build()
            .unwrap_err();
        assert!(err.to_string().contains("radio_tracks_count"));
    }

    #[test]
    fn test_rejects_bad_scheme() {
        assert!(CoreConfig::builder().uri_scheme("").build().is_err());

        let err = CoreConfig::builder()
            .uri_scheme("g:music")
            .build()
            .unwrap_err();
        assert!(err.to_string().contains("must not contain ':'"));
    }

    #[test]
    fn test_rejects_zero_event_buffer() {
        let result = CoreConfig::builder().event_buffer_size(0).build();
        assert!(matches!(result, Err(Error::Config(_))));
    }

    #[test]
    fn test_catalog_config_deserializes_with_defaults() {
        let json = r#"{"radio_stations_as_playlists": true, "radio_tracks_count": 40}"#;
        let catalog: CatalogConfig = serde_json::from_str(json).unwrap();

        assert!(catalog.radio_stations_as_playlists);
        assert_eq!(catalog.radio_tracks_count, 40);
        assert_eq!(catalog.radio_stations_count, DEFAULT_RADIO_STATIONS_COUNT);
        assert_eq!(catalog.uri_scheme, DEFAULT_URI_SCHEME);
        assert!(catalog.validate().is_ok());
    }
}
