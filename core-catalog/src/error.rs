use bridge_traits::error::BridgeError;
use core_library::LibraryError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("Remote call '{operation}' failed: {source}")]
    Remote {
        operation: &'static str,
        #[source]
        source: BridgeError,
    },

    #[error("Playlist {playlist_id} references library track {track_id} missing from the library")]
    MissingLibraryTrack {
        playlist_id: String,
        track_id: String,
    },

    #[error("Playlist {playlist_id} entry for track {track_id} carries no track record")]
    MissingEmbeddedTrack {
        playlist_id: String,
        track_id: String,
    },

    #[error("Shared playlist {playlist_id} has no share token")]
    MissingShareToken { playlist_id: String },

    #[error("Track normalization failed: {0}")]
    Normalize(#[from] LibraryError),

    #[error("Unsupported operation '{operation}': {reason}")]
    Unsupported {
        operation: &'static str,
        reason: String,
    },

    #[error("Not a track URI: {0}")]
    InvalidTrackUri(String),

    #[error("Thumbs down for track {track_id} failed: {source}")]
    Downvote {
        track_id: String,
        #[source]
        source: BridgeError,
    },
}

impl CatalogError {
    /// Adapter for `map_err` on a remote call made during refresh.
    pub(crate) fn remote(operation: &'static str) -> impl FnOnce(BridgeError) -> Self {
        move |source| CatalogError::Remote { operation, source }
    }

    pub(crate) fn unsupported(operation: &'static str, reason: impl Into<String>) -> Self {
        CatalogError::Unsupported {
            operation,
            reason: reason.into(),
        }
    }

    /// True for failures caused by the data the service returned rather than
    /// by the call itself.
    pub fn is_integrity_error(&self) -> bool {
        matches!(
            self,
            CatalogError::MissingLibraryTrack { .. }
                | CatalogError::MissingEmbeddedTrack { .. }
                | CatalogError::MissingShareToken { .. }
        )
    }
}

pub type Result<T> = std::result::Result<T, CatalogError>;
