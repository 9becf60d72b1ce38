//! Core service façade and bootstrap helpers.
//!
//! This crate wires the host-provided remote session (and optionally a track
//! normalizer) into the playlist catalog, sets up logging and the event bus,
//! and exposes the catalog operations hosts call. Catalog activity is
//! published on the bus as [`CatalogEvent`]s.

pub mod error;

pub use error::{CoreError, Result};

pub use bridge_traits::error::BridgeError;
pub use bridge_traits::session::{
    EntrySource, PlaylistEntry, PlaylistKind, PlaylistSummary, RadioStation, Rating, RawTrack,
    RemoteSession, UserPlaylist,
};
pub use core_catalog::{CatalogError, PlaylistCatalog, RefreshSummary};
pub use core_library::{DefaultTrackNormalizer, Playlist, Ref, RefKind, Track, TrackNormalizer};
pub use core_runtime::config::{CatalogConfig, CoreConfig};
pub use core_runtime::events::{CatalogEvent, CoreEvent, EventBus, EventStream};

use std::sync::Arc;

use core_catalog::EventBusListener;
use core_library::uri::track_id_from_uri;
use core_runtime::logging::init_logging;
use tracing::{debug, info};

/// Host-supplied collaborators the core requires.
pub struct CoreDependencies {
    pub session: Arc<dyn RemoteSession>,
    /// Falls back to [`DefaultTrackNormalizer`] for the configured scheme
    pub normalizer: Option<Arc<dyn TrackNormalizer>>,
}

impl CoreDependencies {
    pub fn new(session: Arc<dyn RemoteSession>) -> Self {
        Self {
            session,
            normalizer: None,
        }
    }

    pub fn with_normalizer(mut self, normalizer: Arc<dyn TrackNormalizer>) -> Self {
        self.normalizer = Some(normalizer);
        self
    }
}

struct Inner {
    catalog: PlaylistCatalog,
    events: EventBus,
    config: CoreConfig,
}

/// Primary façade exposed to host applications.
#[derive(Clone)]
pub struct CoreService {
    inner: Arc<Inner>,
}

impl CoreService {
    /// Validates the configuration, installs logging when configured, and
    /// builds an empty catalog. Call [`CoreService::refresh_playlists`] to
    /// load data.
    pub fn bootstrap(deps: CoreDependencies, config: CoreConfig) -> Result<Self> {
        config.validate()?;

        if let Some(logging) = config.logging.clone() {
            init_logging(logging)
                .map_err(|e| CoreError::InitializationFailed(format!("logging: {}", e)))?;
        }

        let events = EventBus::new(config.event_buffer_size);
        let normalizer: Arc<dyn TrackNormalizer> = match deps.normalizer {
            Some(normalizer) => normalizer,
            None => Arc::new(DefaultTrackNormalizer::new(config.catalog.uri_scheme.clone())),
        };
        let catalog = PlaylistCatalog::new(
            deps.session,
            normalizer,
            config.catalog.clone(),
            Arc::new(EventBusListener::new(events.clone())),
        );

        info!(
            scheme = %config.catalog.uri_scheme,
            radio_stations_as_playlists = config.catalog.radio_stations_as_playlists,
            "Core service initialized"
        );

        Ok(Self {
            inner: Arc::new(Inner {
                catalog,
                events,
                config,
            }),
        })
    }

    pub fn catalog(&self) -> &PlaylistCatalog {
        &self.inner.catalog
    }

    pub fn config(&self) -> &CoreConfig {
        &self.inner.config
    }

    pub fn event_bus(&self) -> &EventBus {
        &self.inner.events
    }

    pub fn subscribe(&self) -> EventStream {
        EventStream::new(self.inner.events.subscribe())
    }

    // ------------------------------------------------------------------
    // Reads
    // ------------------------------------------------------------------

    pub fn list_playlists(&self) -> Vec<Ref> {
        self.inner.catalog.as_list()
    }

    pub fn playlist_items(&self, uri: &str) -> Option<Vec<Ref>> {
        self.inner.catalog.get_items(uri)
    }

    pub fn lookup_playlist(&self, uri: &str) -> Option<Playlist> {
        self.inner.catalog.lookup(uri)
    }

    // ------------------------------------------------------------------
    // Refresh & mutation
    // ------------------------------------------------------------------

    /// Refreshes the catalog, publishing start and failure events around it.
    /// Success is announced by the catalog listener as `PlaylistsLoaded`.
    pub async fn refresh_playlists(&self) -> Result<RefreshSummary> {
        self.publish(CatalogEvent::RefreshStarted);

        match self.inner.catalog.refresh().await {
            Ok(summary) => Ok(summary),
            Err(e) => {
                self.publish(CatalogEvent::RefreshFailed {
                    message: e.to_string(),
                });
                Err(e.into())
            }
        }
    }

    pub fn create_playlist(&self, name: &str) -> Result<Playlist> {
        Ok(self.inner.catalog.create(name)?)
    }

    pub fn delete_playlist(&self, uri: &str) -> Result<()> {
        Ok(self.inner.catalog.delete(uri)?)
    }

    /// Forwards to [`PlaylistCatalog::save`] and announces the downvote.
    pub async fn save_playlist(&self, playlist: &Playlist) -> Result<Playlist> {
        let saved = self.inner.catalog.save(playlist).await?;

        if let Some(track_id) = playlist
            .tracks
            .first()
            .and_then(|track| track_id_from_uri(&track.uri))
        {
            self.publish(CatalogEvent::TrackDownvoted {
                track_id: track_id.to_string(),
            });
        }

        Ok(saved)
    }

    fn publish(&self, event: CatalogEvent) {
        if self.inner.events.emit(CoreEvent::Catalog(event)).is_err() {
            debug!("No event subscribers");
        }
    }
}

impl std::fmt::Debug for CoreService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CoreService")
            .field("catalog", &self.inner.catalog)
            .field("events", &self.inner.events)
            .finish()
    }
}
