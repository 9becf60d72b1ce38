//! Mock remote session shared by the unit tests.

use async_trait::async_trait;
use bridge_traits::error::Result;
use bridge_traits::session::{
    PlaylistEntry, PlaylistSummary, RadioStation, RawTrack, RemoteSession, UserPlaylist,
};
use mockall::mock;

mock! {
    pub Session {}

    #[async_trait]
    impl RemoteSession for Session {
        async fn library_tracks(&self) -> Result<Vec<RawTrack>>;
        async fn promoted_tracks(&self) -> Result<Vec<RawTrack>>;
        async fn user_playlists(&self) -> Result<Vec<UserPlaylist>>;
        async fn playlists(&self) -> Result<Vec<PlaylistSummary>>;
        async fn shared_playlist_entries(&self, share_token: &str) -> Result<Vec<PlaylistEntry>>;
        async fn radio_stations(&self, limit: u32) -> Result<Vec<RadioStation>>;
        async fn station_tracks(&self, station_id: &str, limit: u32) -> Result<Vec<RawTrack>>;
        async fn track_info(&self, track_id: &str) -> Result<RawTrack>;
        async fn update_track_metadata(&self, track: RawTrack) -> Result<()>;
    }
}

/// Session whose refresh sources are all empty.
pub fn empty_session() -> MockSession {
    let mut session = MockSession::new();
    session.expect_library_tracks().returning(|| Ok(Vec::new()));
    session.expect_promoted_tracks().returning(|| Ok(Vec::new()));
    session.expect_user_playlists().returning(|| Ok(Vec::new()));
    session.expect_playlists().returning(|| Ok(Vec::new()));
    session
}
