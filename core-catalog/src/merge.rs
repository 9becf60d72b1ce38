//! Entry resolution
//!
//! Playlist payloads reference owned library tracks by id only, while every
//! other entry embeds a full track record. [`TrackReference`] captures that
//! split so the merge loop resolves both kinds through one call.

use std::collections::HashMap;

use bridge_traits::session::{EntrySource, PlaylistEntry, RawTrack};
use core_library::{LibraryError, Track, TrackNormalizer};
use tracing::trace;

use crate::error::{CatalogError, Result};

/// Owned library tracks keyed by remote track id.
///
/// Lives for a single refresh and is dropped once the snapshot is committed.
#[derive(Debug, Default)]
pub struct LibraryIndex {
    tracks: HashMap<String, Track>,
}

impl LibraryIndex {
    /// Normalizes every library record and indexes it by its identifier.
    pub fn build(records: &[RawTrack], normalizer: &dyn TrackNormalizer) -> Result<Self> {
        let mut tracks = HashMap::with_capacity(records.len());
        for record in records {
            let id = record.identifier().ok_or_else(|| {
                LibraryError::invalid_input("id", "library track record has no identifier")
            })?;
            tracks.insert(id.to_string(), normalizer.normalize(record)?);
        }
        Ok(Self { tracks })
    }

    pub fn get(&self, track_id: &str) -> Option<&Track> {
        self.tracks.get(track_id)
    }

    pub fn len(&self) -> usize {
        self.tracks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tracks.is_empty()
    }
}

/// How a playlist entry's track is obtained.
#[derive(Debug, Clone, Copy)]
pub enum TrackReference<'a> {
    /// Owned track, looked up in the [`LibraryIndex`]
    Library { track_id: &'a str },
    /// Track shipped inside the entry
    Inline {
        track_id: &'a str,
        record: &'a RawTrack,
    },
}

impl<'a> TrackReference<'a> {
    /// Classifies an entry by its source tag.
    pub fn from_entry(playlist_id: &str, entry: &'a PlaylistEntry) -> Result<Self> {
        match (&entry.source, entry.track.as_ref()) {
            (EntrySource::Library, _) => Ok(TrackReference::Library {
                track_id: &entry.track_id,
            }),
            (_, Some(record)) => Ok(TrackReference::Inline {
                track_id: &entry.track_id,
                record,
            }),
            (_, None) => Err(CatalogError::MissingEmbeddedTrack {
                playlist_id: playlist_id.to_string(),
                track_id: entry.track_id.clone(),
            }),
        }
    }

    pub fn track_id(&self) -> &'a str {
        match *self {
            TrackReference::Library { track_id } | TrackReference::Inline { track_id, .. } => {
                track_id
            }
        }
    }

    /// Produces the full track.
    ///
    /// A library reference missing from the index is an integrity failure:
    /// the service guarantees owned entries appear in the library listing.
    /// Inline records get the entry's track id injected as `id` before
    /// normalization so the resulting URI follows the entry.
    pub fn resolve(
        &self,
        playlist_id: &str,
        index: &LibraryIndex,
        normalizer: &dyn TrackNormalizer,
    ) -> Result<Track> {
        match *self {
            TrackReference::Library { track_id } => {
                index
                    .get(track_id)
                    .cloned()
                    .ok_or_else(|| CatalogError::MissingLibraryTrack {
                        playlist_id: playlist_id.to_string(),
                        track_id: track_id.to_string(),
                    })
            }
            TrackReference::Inline { track_id, record } => {
                let mut record = record.clone();
                record.id = Some(track_id.to_string());
                Ok(normalizer.normalize(&record)?)
            }
        }
    }
}

/// Resolves a playlist's entries in order, skipping soft-deleted rows.
pub fn resolve_entries(
    playlist_id: &str,
    entries: &[PlaylistEntry],
    index: &LibraryIndex,
    normalizer: &dyn TrackNormalizer,
) -> Result<Vec<Track>> {
    let mut tracks = Vec::with_capacity(entries.len());
    for entry in entries {
        if entry.deleted {
            trace!(playlist_id, track_id = %entry.track_id, "Skipping deleted entry");
            continue;
        }
        let reference = TrackReference::from_entry(playlist_id, entry)?;
        tracks.push(reference.resolve(playlist_id, index, normalizer)?);
    }
    Ok(tracks)
}

#[cfg(test)]
mod tests {
    use super::*;
    use core_library::DefaultTrackNormalizer;

    fn raw(id: &str, title: &str) -> RawTrack {
        RawTrack {
            id: Some(id.to_string()),
            title: title.to_string(),
            ..Default::default()
        }
    }

    fn library_entry(track_id: &str, deleted: bool) -> PlaylistEntry {
        PlaylistEntry {
            id: format!("entry-{}", track_id),
            deleted,
            source: EntrySource::Library,
            track_id: track_id.to_string(),
            track: None,
        }
    }

    fn store_entry(track_id: &str, record: Option<RawTrack>) -> PlaylistEntry {
        PlaylistEntry {
            id: format!("entry-{}", track_id),
            deleted: false,
            source: EntrySource::Store,
            track_id: track_id.to_string(),
            track: record,
        }
    }

    fn index(normalizer: &DefaultTrackNormalizer) -> LibraryIndex {
        LibraryIndex::build(
            &[raw("A", "Song A"), raw("B", "Song B"), raw("C", "Song C")],
            normalizer,
        )
        .unwrap()
    }

    #[test]
    fn test_library_index_lookup() {
        let normalizer = DefaultTrackNormalizer::new("gmusic");
        let index = index(&normalizer);
        assert_eq!(index.len(), 3);
        assert_eq!(
            index.get("B").map(|t| t.uri.as_str()),
            Some("gmusic:track:B")
        );
        assert!(index.get("Z").is_none());
    }

    #[test]
    fn test_resolve_skips_deleted_and_keeps_order() {
        let normalizer = DefaultTrackNormalizer::new("gmusic");
        let index = index(&normalizer);
        let entries = vec![
            library_entry("C", false),
            library_entry("B", true),
            library_entry("A", false),
        ];

        let tracks = resolve_entries("pl-1", &entries, &index, &normalizer).unwrap();
        let names: Vec<_> = tracks.iter().map(|t| t.name.as_str()).collect();
        assert_eq!(names, vec!["Song C", "Song A"]);
    }

    #[test]
    fn test_inline_entry_takes_entry_track_id() {
        let normalizer = DefaultTrackNormalizer::new("gmusic");
        let index = LibraryIndex::default();
        let record = RawTrack {
            store_id: Some("Tstore".to_string()),
            title: "Catalogue Song".to_string(),
            ..Default::default()
        };
        let entries = vec![store_entry("Tentry", Some(record))];

        let tracks = resolve_entries("pl-1", &entries, &index, &normalizer).unwrap();
        assert_eq!(tracks[0].uri, "gmusic:track:Tentry");
        assert_eq!(tracks[0].remote_id.as_deref(), Some("Tentry"));
    }

    #[test]
    fn test_missing_library_track_is_integrity_error() {
        let normalizer = DefaultTrackNormalizer::new("gmusic");
        let index = index(&normalizer);
        let entries = vec![library_entry("A", false), library_entry("Z", false)];

        let err = resolve_entries("pl-1", &entries, &index, &normalizer).unwrap_err();
        assert!(err.is_integrity_error());
        assert!(matches!(
            err,
            CatalogError::MissingLibraryTrack { ref track_id, .. } if track_id == "Z"
        ));
    }

    #[test]
    fn test_inline_entry_without_record_is_rejected() {
        let normalizer = DefaultTrackNormalizer::new("gmusic");
        let entry = store_entry("T1", None);

        let err = TrackReference::from_entry("pl-9", &entry).unwrap_err();
        assert!(matches!(
            err,
            CatalogError::MissingEmbeddedTrack { ref playlist_id, .. } if playlist_id == "pl-9"
        ));

        // Deleted rows are never classified, so a missing record there is fine
        let deleted = PlaylistEntry {
            deleted: true,
            ..entry
        };
        let tracks =
            resolve_entries("pl-9", &[deleted], &LibraryIndex::default(), &normalizer).unwrap();
        assert!(tracks.is_empty());
    }

    #[test]
    fn test_track_reference_track_id() {
        let entry = library_entry("A", false);
        let reference = TrackReference::from_entry("pl", &entry).unwrap();
        assert_eq!(reference.track_id(), "A");
        assert!(matches!(reference, TrackReference::Library { .. }));
    }
}
