//! Playlist catalog: reads and the refresh/merge cycle.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};

use bridge_traits::session::{PlaylistKind, RemoteSession};
use core_library::uri::{playlist_uri, promoted_uri, thumbs_down_uri, PROMOTED_NAME, THUMBS_DOWN_NAME};
use core_library::{Playlist, Ref, TrackNormalizer};
use core_runtime::config::CatalogConfig;
use core_runtime::logging::redact_if_sensitive;
use parking_lot::RwLock;
use tokio::sync::Mutex;
use tracing::{debug, error, info, instrument, warn};

use crate::error::{CatalogError, Result};
use crate::listener::CatalogListener;
use crate::merge::{resolve_entries, LibraryIndex};
use crate::radio::expand_stations;
use crate::snapshot::{Snapshot, SnapshotBuilder};

/// Outcome of a successful refresh.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RefreshSummary {
    /// Generation of the snapshot now current
    pub generation: u64,
    /// Owned tracks indexed for entry resolution
    pub library_tracks: usize,
    /// Playlists in the snapshot, radios included
    pub playlists: usize,
    /// Station-derived playlists
    pub radios: usize,
    pub duration: Duration,
}

/// In-memory playlist catalog backed by a remote session.
///
/// Reads are synchronous and only hold the snapshot lock long enough to clone
/// an `Arc`, so they never wait on a refresh in progress. Refreshes run one at
/// a time.
pub struct PlaylistCatalog {
    pub(crate) session: Arc<dyn RemoteSession>,
    normalizer: Arc<dyn TrackNormalizer>,
    listener: Arc<dyn CatalogListener>,
    pub(crate) config: CatalogConfig,
    current: RwLock<Arc<Snapshot>>,
    refresh_lock: Mutex<()>,
    next_generation: AtomicU64,
}

impl PlaylistCatalog {
    pub fn new(
        session: Arc<dyn RemoteSession>,
        normalizer: Arc<dyn TrackNormalizer>,
        config: CatalogConfig,
        listener: Arc<dyn CatalogListener>,
    ) -> Self {
        Self {
            session,
            normalizer,
            listener,
            config,
            current: RwLock::new(Arc::new(Snapshot::empty())),
            refresh_lock: Mutex::new(()),
            next_generation: AtomicU64::new(0),
        }
    }

    pub fn config(&self) -> &CatalogConfig {
        &self.config
    }

    // =========================================================================
    // Reads
    // =========================================================================

    /// The snapshot readers currently see.
    pub fn snapshot(&self) -> Arc<Snapshot> {
        Arc::clone(&self.current.read())
    }

    /// One reference per playlist, sorted by name (see [`Snapshot::sorted_refs`]).
    pub fn as_list(&self) -> Vec<Ref> {
        self.snapshot().sorted_refs()
    }

    /// Track references of a playlist in stored order.
    ///
    /// `None` when the URI is unknown; an empty vector when the playlist
    /// exists without tracks.
    pub fn get_items(&self, uri: &str) -> Option<Vec<Ref>> {
        self.snapshot().get(uri).map(Playlist::track_refs)
    }

    pub fn lookup(&self, uri: &str) -> Option<Playlist> {
        self.snapshot().get(uri).cloned()
    }

    /// Generation of the current snapshot; 0 until the first refresh succeeds.
    pub fn generation(&self) -> u64 {
        self.current.read().generation()
    }

    pub fn playlist_count(&self) -> usize {
        self.current.read().len()
    }

    // =========================================================================
    // Refresh
    // =========================================================================

    /// Rebuilds the catalog from the remote session.
    ///
    /// Concurrent calls queue behind each other. On error nothing is
    /// installed, the listener is not called, and the previous snapshot stays
    /// current.
    #[instrument(skip(self), fields(scheme = %self.config.uri_scheme))]
    pub async fn refresh(&self) -> Result<RefreshSummary> {
        let _guard = self.refresh_lock.lock().await;
        let started = Instant::now();
        let generation = self.next_generation.fetch_add(1, Ordering::SeqCst) + 1;

        let (snapshot, library_tracks, radios) = match self.build_snapshot(generation).await {
            Ok(built) => built,
            Err(e) => {
                error!(generation, "Playlist refresh failed: {}", e);
                return Err(e);
            }
        };
        let playlists = snapshot.len();

        if !self.commit(snapshot) {
            // refresh_lock makes this unreachable today
            warn!(generation, "Discarded refresh superseded by a newer snapshot");
        } else {
            self.listener.playlists_loaded();
        }

        let summary = RefreshSummary {
            generation,
            library_tracks,
            playlists,
            radios,
            duration: started.elapsed(),
        };
        info!(
            generation,
            playlists,
            radios,
            duration_ms = summary.duration.as_millis() as u64,
            "Playlist refresh complete"
        );
        Ok(summary)
    }

    /// Installs `snapshot` if it is newer than the current one.
    fn commit(&self, snapshot: Snapshot) -> bool {
        let mut current = self.current.write();
        if snapshot.generation() <= current.generation() {
            return false;
        }
        *current = Arc::new(snapshot);
        true
    }

    /// Runs every refresh stage. Returns the snapshot together with the
    /// library size and number of radio playlists for the summary.
    async fn build_snapshot(&self, generation: u64) -> Result<(Snapshot, usize, usize)> {
        let scheme = self.config.uri_scheme.as_str();
        let normalizer = self.normalizer.as_ref();
        let mut builder = SnapshotBuilder::new();

        // Library first: playlist entries resolve against it
        let library = self
            .session
            .library_tracks()
            .await
            .map_err(CatalogError::remote("library_tracks"))?;
        let index = LibraryIndex::build(&library, normalizer)?;
        drop(library);
        info!("Indexed {} library tracks", index.len());

        let promoted = self
            .session
            .promoted_tracks()
            .await
            .map_err(CatalogError::remote("promoted_tracks"))?
            .iter()
            .map(|record| normalizer.normalize(record))
            .collect::<core_library::Result<Vec<_>>>()?;
        if promoted.is_empty() {
            debug!("No promoted tracks, skipping promoted playlist");
        } else {
            builder.insert(Playlist::new(promoted_uri(scheme), PROMOTED_NAME, promoted));
        }

        builder.insert(Playlist::empty(thumbs_down_uri(scheme), THUMBS_DOWN_NAME));

        let user_playlists = self
            .session
            .user_playlists()
            .await
            .map_err(CatalogError::remote("user_playlists"))?;
        for playlist in &user_playlists {
            let tracks = resolve_entries(&playlist.id, &playlist.tracks, &index, normalizer)?;
            debug!(playlist_id = %playlist.id, tracks = tracks.len(), "Merged user playlist");
            self.register(
                &mut builder,
                Playlist::new(playlist_uri(scheme, &playlist.id), playlist.name.clone(), tracks),
            );
        }

        let summaries = self
            .session
            .playlists()
            .await
            .map_err(CatalogError::remote("playlists"))?;
        for summary in summaries.iter().filter(|s| s.kind == PlaylistKind::Shared) {
            let token = summary.share_token.as_deref().ok_or_else(|| {
                CatalogError::MissingShareToken {
                    playlist_id: summary.id.clone(),
                }
            })?;
            debug!(
                playlist_id = %summary.id,
                share_token = %redact_if_sensitive("share_token", token),
                "Fetching shared playlist"
            );
            let entries = self
                .session
                .shared_playlist_entries(token)
                .await
                .map_err(CatalogError::remote("shared_playlist_entries"))?;
            let tracks = resolve_entries(&summary.id, &entries, &index, normalizer)?;
            self.register(
                &mut builder,
                Playlist::new(playlist_uri(scheme, &summary.id), summary.name.clone(), tracks),
            );
        }

        info!("Loaded {} playlists", builder.len());

        let mut radios = 0;
        if self.config.radio_stations_as_playlists {
            for station in expand_stations(self.session.as_ref(), normalizer, &self.config).await? {
                radios += 1;
                self.register(&mut builder, station);
            }
        }

        let library_tracks = index.len();
        drop(index);

        Ok((builder.build(generation), library_tracks, radios))
    }

    fn register(&self, builder: &mut SnapshotBuilder, playlist: Playlist) {
        if let Some(previous) = builder.insert(playlist) {
            warn!(uri = %previous.uri, "Playlist URI seen twice in one refresh, keeping the later one");
        }
    }
}

impl std::fmt::Debug for PlaylistCatalog {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PlaylistCatalog")
            .field("config", &self.config)
            .field("generation", &self.generation())
            .field("playlists", &self.playlist_count())
            .finish()
    }
}
