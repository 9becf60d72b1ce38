//! Remote record normalization
//!
//! Converts one [`RawTrack`] into a local [`Track`]. Implementations must be
//! pure: the same record always yields the same track and nothing else is
//! touched, since the catalog may normalize a record on every refresh.

use bridge_traits::session::RawTrack;

use crate::error::{LibraryError, Result};
use crate::models::Track;
use crate::uri::track_uri;

/// Maps a raw remote record to the local track model.
pub trait TrackNormalizer: Send + Sync {
    fn normalize(&self, record: &RawTrack) -> Result<Track>;
}

/// Field-by-field mapping used when the host has no normalizer of its own.
#[derive(Debug, Clone)]
pub struct DefaultTrackNormalizer {
    scheme: String,
}

impl DefaultTrackNormalizer {
    pub fn new(scheme: impl Into<String>) -> Self {
        Self {
            scheme: scheme.into(),
        }
    }

    pub fn scheme(&self) -> &str {
        &self.scheme
    }
}

impl TrackNormalizer for DefaultTrackNormalizer {
    fn normalize(&self, record: &RawTrack) -> Result<Track> {
        let id = record
            .identifier()
            .ok_or_else(|| LibraryError::invalid_input("id", "track record has no identifier"))?;

        let length_ms = record
            .duration_millis
            .as_deref()
            .map(|raw| {
                raw.trim().parse::<u64>().map_err(|_| {
                    LibraryError::invalid_input(
                        "durationMillis",
                        format!("'{}' is not a millisecond count", raw),
                    )
                })
            })
            .transpose()?;

        Ok(Track {
            uri: track_uri(&self.scheme, id),
            name: record.title.clone(),
            artist: non_empty(&record.artist),
            album: non_empty(&record.album),
            album_artist: non_empty(&record.album_artist),
            // The service reports 0 for unknown positions and years
            track_no: record.track_number.filter(|n| *n > 0),
            disc_no: record.disc_number.filter(|n| *n > 0),
            year: record.year.filter(|y| *y > 0),
            genre: non_empty(&record.genre),
            length_ms,
            remote_id: Some(id.to_string()),
        })
    }
}

fn non_empty(value: &Option<String>) -> Option<String> {
    value.as_ref().filter(|v| !v.is_empty()).cloned()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn normalizer() -> DefaultTrackNormalizer {
        DefaultTrackNormalizer::new("gmusic")
    }

    #[test]
    fn test_normalize_library_record() {
        let record: RawTrack = serde_json::from_str(
            r#"{
                "id": "lib-a",
                "title": "Song A",
                "artist": "Artist",
                "album": "Album",
                "albumArtist": "",
                "trackNumber": 3,
                "discNumber": 0,
                "year": 2011,
                "durationMillis": "215000"
            }"#,
        )
        .unwrap();

        let track = normalizer().normalize(&record).unwrap();
        assert_eq!(track.uri, "gmusic:track:lib-a");
        assert_eq!(track.name, "Song A");
        assert_eq!(track.artist.as_deref(), Some("Artist"));
        assert_eq!(track.album_artist, None);
        assert_eq!(track.track_no, Some(3));
        assert_eq!(track.disc_no, None);
        assert_eq!(track.year, Some(2011));
        assert_eq!(track.length_ms, Some(215_000));
        assert_eq!(track.remote_id.as_deref(), Some("lib-a"));
    }

    #[test]
    fn test_store_record_falls_back_to_store_id() {
        let record = RawTrack {
            store_id: Some("Tstore".to_string()),
            nid: Some("Tnid".to_string()),
            title: "Store Song".to_string(),
            ..Default::default()
        };

        let track = normalizer().normalize(&record).unwrap();
        assert_eq!(track.uri, "gmusic:track:Tstore");
        assert_eq!(track.length_ms, None);
    }

    #[test]
    fn test_record_without_identifier_is_rejected() {
        let record = RawTrack {
            title: "Orphan".to_string(),
            ..Default::default()
        };

        let err = normalizer().normalize(&record).unwrap_err();
        assert!(matches!(err, LibraryError::InvalidInput { ref field, .. } if field == "id"));
    }

    #[test]
    fn test_bad_duration_is_rejected() {
        let record = RawTrack {
            id: Some("a".to_string()),
            duration_millis: Some("three minutes".to_string()),
            ..Default::default()
        };

        let err = normalizer().normalize(&record).unwrap_err();
        assert!(err.to_string().contains("durationMillis"));
    }

    #[test]
    fn test_normalize_is_idempotent() {
        let record = RawTrack {
            id: Some("a".to_string()),
            title: "A".to_string(),
            duration_millis: Some("1000".to_string()),
            ..Default::default()
        };

        let n = normalizer();
        assert_eq!(n.normalize(&record).unwrap(), n.normalize(&record).unwrap());
    }
}
