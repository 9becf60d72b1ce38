//! Remote Session Abstractions
//!
//! Raw records returned by the remote streaming service and the trait the
//! host implements to fetch them.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::Result;

/// Tri-state track rating as stored by the remote service.
///
/// The service encodes ratings as strings: `"0"` (no rating), `"1"`
/// (thumbs down) and `"5"` (thumbs up).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Rating {
    #[default]
    Neutral,
    Down,
    Up,
}

impl Rating {
    pub fn code(&self) -> &'static str {
        match self {
            Rating::Neutral => "0",
            Rating::Down => "1",
            Rating::Up => "5",
        }
    }
}

impl From<String> for Rating {
    fn from(value: String) -> Self {
        match value.as_str() {
            "1" => Rating::Down,
            "5" => Rating::Up,
            _ => Rating::Neutral,
        }
    }
}

impl From<Rating> for String {
    fn from(rating: Rating) -> Self {
        rating.code().to_string()
    }
}

/// Track metadata record as reported by the remote service.
///
/// Library tracks carry `id`; catalogue tracks usually carry `storeId` and
/// `nid` instead. Fields the core does not model are kept in `extra` so a
/// record fetched for a metadata update can be submitted back unchanged.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawTrack {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub store_id: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nid: Option<String>,

    #[serde(default)]
    pub title: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub artist: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub album: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub album_artist: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub track_number: Option<u32>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub disc_number: Option<u32>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub year: Option<i32>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub genre: Option<String>,

    /// Duration in milliseconds, transmitted as a decimal string
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration_millis: Option<String>,

    #[serde(default)]
    pub rating: Rating,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl RawTrack {
    /// First identifier present, in `id`, `storeId`, `nid` order.
    pub fn identifier(&self) -> Option<&str> {
        [
            self.id.as_deref(),
            self.store_id.as_deref(),
            self.nid.as_deref(),
        ]
        .into_iter()
        .flatten()
        .find(|id| !id.is_empty())
    }
}

/// Where a playlist entry's track comes from.
///
/// Entries tagged [`EntrySource::Library`] reference a track in the user's
/// own library and arrive without embedded metadata.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum EntrySource {
    Library,
    Store,
    Other(String),
}

impl From<String> for EntrySource {
    fn from(value: String) -> Self {
        match value.as_str() {
            "1" => EntrySource::Library,
            "2" => EntrySource::Store,
            _ => EntrySource::Other(value),
        }
    }
}

impl From<EntrySource> for String {
    fn from(source: EntrySource) -> Self {
        match source {
            EntrySource::Library => "1".to_string(),
            EntrySource::Store => "2".to_string(),
            EntrySource::Other(value) => value,
        }
    }
}

/// One row of a user or shared playlist.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlaylistEntry {
    #[serde(default)]
    pub id: String,

    /// Soft-delete flag; deleted rows stay in the payload
    #[serde(default)]
    pub deleted: bool,

    pub source: EntrySource,

    pub track_id: String,

    /// Embedded metadata, omitted for library entries
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub track: Option<RawTrack>,
}

/// A playlist owned by the user, with its entries.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserPlaylist {
    pub id: String,

    pub name: String,

    #[serde(default)]
    pub tracks: Vec<PlaylistEntry>,
}

/// Playlist type tag from the playlist listing.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum PlaylistKind {
    #[default]
    UserGenerated,
    Magic,
    Shared,
    Other(String),
}

impl From<String> for PlaylistKind {
    fn from(value: String) -> Self {
        match value.as_str() {
            "USER_GENERATED" => PlaylistKind::UserGenerated,
            "MAGIC" => PlaylistKind::Magic,
            "SHARED" => PlaylistKind::Shared,
            _ => PlaylistKind::Other(value),
        }
    }
}

impl From<PlaylistKind> for String {
    fn from(kind: PlaylistKind) -> Self {
        match kind {
            PlaylistKind::UserGenerated => "USER_GENERATED".to_string(),
            PlaylistKind::Magic => "MAGIC".to_string(),
            PlaylistKind::Shared => "SHARED".to_string(),
            PlaylistKind::Other(value) => value,
        }
    }
}

/// Playlist listing row, without entries.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlaylistSummary {
    pub id: String,

    pub name: String,

    #[serde(rename = "type", default)]
    pub kind: PlaylistKind,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub share_token: Option<String>,
}

/// A service-generated radio station.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RadioStation {
    pub id: String,
    pub name: String,
}

/// Session with the remote streaming service.
///
/// Implementations own authentication and transport. Every method maps one
/// remote call; the core decides ordering and never retries on its own.
///
/// # Example
///
/// ```ignore
/// use bridge_traits::session::RemoteSession;
///
/// async fn count_owned(session: &dyn RemoteSession) -> bridge_traits::error::Result<usize> {
///     Ok(session.library_tracks().await?.len())
/// }
/// ```
#[async_trait]
pub trait RemoteSession: Send + Sync {
    /// Every track in the user's library
    async fn library_tracks(&self) -> Result<Vec<RawTrack>>;

    /// Promoted ("thumbs up") tracks, with full metadata per record
    async fn promoted_tracks(&self) -> Result<Vec<RawTrack>>;

    /// Owned playlists with their entries
    async fn user_playlists(&self) -> Result<Vec<UserPlaylist>>;

    /// Every playlist visible to the user, including shared ones
    async fn playlists(&self) -> Result<Vec<PlaylistSummary>>;

    /// Entries of a shared playlist, addressed by share token
    async fn shared_playlist_entries(&self, share_token: &str) -> Result<Vec<PlaylistEntry>>;

    /// At most `limit` radio stations
    async fn radio_stations(&self, limit: u32) -> Result<Vec<RadioStation>>;

    /// At most `limit` tracks generated by a station
    async fn station_tracks(&self, station_id: &str, limit: u32) -> Result<Vec<RawTrack>>;

    /// Current metadata of one track
    async fn track_info(&self, track_id: &str) -> Result<RawTrack>;

    /// Submit a metadata change for one track
    async fn update_track_metadata(&self, track: RawTrack) -> Result<()>;
}
