//! Domain models for the playlist catalog
//!
//! `Track` and `Playlist` are plain values. A refresh builds new ones from
//! scratch; nothing mutates a value once it has been handed to a snapshot.

use serde::{Deserialize, Serialize};

// =============================================================================
// Domain Models
// =============================================================================

/// Playable item, identified by its URI
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Track {
    /// Stable identity (`<scheme>:track:<id>`)
    pub uri: String,
    /// Track title
    pub name: String,
    pub artist: Option<String>,
    pub album: Option<String>,
    /// Album artist (for compilations)
    pub album_artist: Option<String>,
    /// Track position on album
    pub track_no: Option<u32>,
    /// Disc number for multi-disc albums
    pub disc_no: Option<u32>,
    /// Release year
    pub year: Option<i32>,
    pub genre: Option<String>,
    /// Duration in milliseconds
    pub length_ms: Option<u64>,

    /// Remote identifier the track was resolved from. Merge bookkeeping only,
    /// so it takes no part in equality or serialization.
    #[serde(skip)]
    pub remote_id: Option<String>,
}

impl PartialEq for Track {
    fn eq(&self, other: &Self) -> bool {
        self.uri == other.uri
            && self.name == other.name
            && self.artist == other.artist
            && self.album == other.album
            && self.album_artist == other.album_artist
            && self.track_no == other.track_no
            && self.disc_no == other.disc_no
            && self.year == other.year
            && self.genre == other.genre
            && self.length_ms == other.length_ms
    }
}

impl Eq for Track {}

impl Track {
    pub fn to_ref(&self) -> Ref {
        Ref::track(self.uri.clone(), self.name.clone())
    }
}

/// Named, ordered track list. Track order is playback order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Playlist {
    pub uri: String,
    pub name: String,
    pub tracks: Vec<Track>,
}

impl Playlist {
    pub fn new(uri: impl Into<String>, name: impl Into<String>, tracks: Vec<Track>) -> Self {
        Self {
            uri: uri.into(),
            name: name.into(),
            tracks,
        }
    }

    /// Playlist with no tracks
    pub fn empty(uri: impl Into<String>, name: impl Into<String>) -> Self {
        Self::new(uri, name, Vec::new())
    }

    pub fn len(&self) -> usize {
        self.tracks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tracks.is_empty()
    }

    pub fn to_ref(&self) -> Ref {
        Ref::playlist(self.uri.clone(), self.name.clone())
    }

    /// References to the tracks, in stored order
    pub fn track_refs(&self) -> Vec<Ref> {
        self.tracks.iter().map(Track::to_ref).collect()
    }
}

/// What a [`Ref`] points at
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RefKind {
    Playlist,
    Track,
}

/// Lightweight `(uri, name)` pair used by listings.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Ref {
    pub kind: RefKind,
    pub uri: String,
    pub name: String,
}

impl Ref {
    pub fn playlist(uri: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            kind: RefKind::Playlist,
            uri: uri.into(),
            name: name.into(),
        }
    }

    pub fn track(uri: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            kind: RefKind::Track,
            uri: uri.into(),
            name: name.into(),
        }
    }
}
