//! Constrained mutation
//!
//! The service offers no playlist editing, so `create` and `delete` always
//! reject. `save` accepts exactly one gesture: dropping a single track on the
//! thumbs-down action playlist, which rates that track down remotely.

use bridge_traits::session::Rating;
use core_library::uri::{thumbs_down_uri, track_id_from_uri, THUMBS_DOWN_NAME};
use core_library::Playlist;
use tracing::{error, info, instrument};

use crate::catalog::PlaylistCatalog;
use crate::error::{CatalogError, Result};

impl PlaylistCatalog {
    pub fn create(&self, name: &str) -> Result<Playlist> {
        Err(CatalogError::unsupported(
            "create",
            format!("cannot create playlist '{}': playlists are read-only", name),
        ))
    }

    pub fn delete(&self, uri: &str) -> Result<()> {
        Err(CatalogError::unsupported(
            "delete",
            format!("cannot delete {}: playlists are read-only", uri),
        ))
    }

    /// Submits a playlist back to the catalog.
    ///
    /// Only the thumbs-down playlist holding exactly one track is accepted.
    /// That track is rated down on the service and a fresh, empty thumbs-down
    /// playlist is returned. The snapshot is never modified; if the remote
    /// update fails the error is returned as is.
    #[instrument(skip(self, playlist), fields(uri = %playlist.uri, tracks = playlist.tracks.len()))]
    pub async fn save(&self, playlist: &Playlist) -> Result<Playlist> {
        let thumbs_down = thumbs_down_uri(&self.config.uri_scheme);
        if playlist.uri != thumbs_down {
            error!("Changing playlists is not supported");
            return Err(CatalogError::unsupported(
                "save",
                format!("{} is read-only", playlist.uri),
            ));
        }

        let track = match playlist.tracks.as_slice() {
            [track] => track,
            tracks => {
                error!("Tried to thumb down {} tracks at once", tracks.len());
                return Err(CatalogError::unsupported(
                    "save",
                    format!(
                        "thumbs down takes exactly one track, got {}",
                        tracks.len()
                    ),
                ));
            }
        };

        let track_id = track_id_from_uri(&track.uri)
            .ok_or_else(|| CatalogError::InvalidTrackUri(track.uri.clone()))?;
        self.downvote(track_id).await?;

        Ok(Playlist::empty(thumbs_down, THUMBS_DOWN_NAME))
    }

    /// Fetches the track's current metadata and resubmits it rated down.
    pub async fn downvote(&self, track_id: &str) -> Result<()> {
        let downvote_error = |source| CatalogError::Downvote {
            track_id: track_id.to_string(),
            source,
        };

        let mut record = self
            .session
            .track_info(track_id)
            .await
            .map_err(downvote_error)?;
        record.rating = Rating::Down;
        self.session
            .update_track_metadata(record)
            .await
            .map_err(downvote_error)?;

        info!(track_id, "Rated track thumbs down");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::listener::NoopListener;
    use crate::test_support::{empty_session, MockSession};
    use bridge_traits::error::BridgeError;
    use bridge_traits::session::RawTrack;
    use core_library::{DefaultTrackNormalizer, Track};
    use core_runtime::config::CatalogConfig;
    use serde_json::Value;
    use std::sync::Arc;

    fn catalog(session: MockSession) -> PlaylistCatalog {
        PlaylistCatalog::new(
            Arc::new(session),
            Arc::new(DefaultTrackNormalizer::new("gmusic")),
            CatalogConfig::default(),
            Arc::new(NoopListener),
        )
    }

    fn track(uri: &str) -> Track {
        Track {
            uri: uri.to_string(),
            name: "Song".to_string(),
            ..Default::default()
        }
    }

    fn thumbs_down(tracks: Vec<Track>) -> Playlist {
        Playlist::new("gmusic:playlist:thumbsdown", THUMBS_DOWN_NAME, tracks)
    }

    #[tokio::test]
    async fn test_save_single_track_downvotes() {
        let mut session = MockSession::new();
        session
            .expect_track_info()
            .withf(|id| id == "Tabc")
            .times(1)
            .returning(|id| {
                let mut record = RawTrack {
                    id: Some(id.to_string()),
                    title: "Song".to_string(),
                    ..Default::default()
                };
                record
                    .extra
                    .insert("playCount".to_string(), Value::from(4));
                Ok(record)
            });
        session
            .expect_update_track_metadata()
            .withf(|record| {
                record.rating == Rating::Down
                    && record.id.as_deref() == Some("Tabc")
                    && record.extra.get("playCount") == Some(&Value::from(4))
            })
            .times(1)
            .returning(|_| Ok(()));

        let catalog = catalog(session);
        let result = catalog
            .save(&thumbs_down(vec![track("gmusic:track:Tabc")]))
            .await
            .unwrap();

        assert_eq!(result.uri, "gmusic:playlist:thumbsdown");
        assert_eq!(result.name, THUMBS_DOWN_NAME);
        assert!(result.is_empty());
    }

    #[tokio::test]
    async fn test_save_rejects_wrong_track_counts() {
        // No remote expectations: any call would panic
        let catalog = catalog(MockSession::new());

        let err = catalog.save(&thumbs_down(Vec::new())).await.unwrap_err();
        assert!(matches!(err, CatalogError::Unsupported { operation: "save", .. }));

        let two = vec![track("gmusic:track:a"), track("gmusic:track:b")];
        let err = catalog.save(&thumbs_down(two)).await.unwrap_err();
        assert!(err.to_string().contains("exactly one track, got 2"));
    }

    #[tokio::test]
    async fn test_save_rejects_other_playlists() {
        let catalog = catalog(empty_session());
        catalog.refresh().await.unwrap();
        let before = catalog.snapshot();

        let playlist = Playlist::new(
            "gmusic:playlist:abc",
            "Mine",
            vec![track("gmusic:track:a")],
        );
        let err = catalog.save(&playlist).await.unwrap_err();

        assert!(matches!(err, CatalogError::Unsupported { .. }));
        assert!(Arc::ptr_eq(&before, &catalog.snapshot()));
    }

    #[tokio::test]
    async fn test_save_rejects_malformed_track_uri() {
        let catalog = catalog(MockSession::new());
        let err = catalog
            .save(&thumbs_down(vec![track("gmusic:playlist:oops")]))
            .await
            .unwrap_err();
        assert!(matches!(err, CatalogError::InvalidTrackUri(_)));
    }

    #[tokio::test]
    async fn test_failed_metadata_update_is_reported() {
        let mut session = MockSession::new();
        session
            .expect_track_info()
            .returning(|id| {
                Ok(RawTrack {
                    id: Some(id.to_string()),
                    ..Default::default()
                })
            });
        session
            .expect_update_track_metadata()
            .returning(|_| Err(BridgeError::OperationFailed("rejected".to_string())));

        let catalog = catalog(session);
        let err = catalog
            .save(&thumbs_down(vec![track("gmusic:track:Tabc")]))
            .await
            .unwrap_err();

        assert!(matches!(
            err,
            CatalogError::Downvote { ref track_id, .. } if track_id == "Tabc"
        ));
    }

    #[test]
    fn test_create_and_delete_always_fail() {
        let catalog = catalog(MockSession::new());
        assert!(matches!(
            catalog.create("New"),
            Err(CatalogError::Unsupported { operation: "create", .. })
        ));
        assert!(matches!(
            catalog.delete("gmusic:playlist:abc"),
            Err(CatalogError::Unsupported { operation: "delete", .. })
        ));
    }
}
