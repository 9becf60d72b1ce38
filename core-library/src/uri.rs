//! Wire-stable URIs
//!
//! Playlists live at `<scheme>:playlist:<id>` and tracks at
//! `<scheme>:track:<id>`. Hosts persist these, so the layout must not change
//! between releases.

/// Constant id of the synthesized promoted-tracks playlist.
pub const PROMOTED_ID: &str = "promoted";

/// Constant id of the thumbs-down action playlist.
pub const THUMBS_DOWN_ID: &str = "thumbsdown";

/// Display name of the promoted-tracks playlist.
pub const PROMOTED_NAME: &str = "Promoted";

/// Display name of the thumbs-down action playlist.
pub const THUMBS_DOWN_NAME: &str = "Thumbs down [ACTION ONLY]";

const PLAYLIST_SEGMENT: &str = "playlist";
const TRACK_SEGMENT: &str = "track";

pub fn playlist_uri(scheme: &str, id: &str) -> String {
    format!("{}:{}:{}", scheme, PLAYLIST_SEGMENT, id)
}

pub fn track_uri(scheme: &str, id: &str) -> String {
    format!("{}:{}:{}", scheme, TRACK_SEGMENT, id)
}

pub fn promoted_uri(scheme: &str) -> String {
    playlist_uri(scheme, PROMOTED_ID)
}

pub fn thumbs_down_uri(scheme: &str) -> String {
    playlist_uri(scheme, THUMBS_DOWN_ID)
}

/// Remote track id carried by a track URI.
///
/// Returns `None` unless the URI has the `<scheme>:track:<id>` shape with a
/// non-empty id. The scheme itself is not checked.
pub fn track_id_from_uri(uri: &str) -> Option<&str> {
    let mut parts = uri.splitn(3, ':');
    let _scheme = parts.next()?;
    if parts.next()? != TRACK_SEGMENT {
        return None;
    }
    parts.next().filter(|id| !id.is_empty())
}
