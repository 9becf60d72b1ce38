//! Radio stations as playlists
//!
//! Each station becomes a static playlist holding one page of its generated
//! tracks. Both the station list and every track page are capped by the
//! configured counts, even if the service hands back more than requested.

use bridge_traits::session::RemoteSession;
use core_library::uri::playlist_uri;
use core_library::{Playlist, TrackNormalizer};
use core_runtime::config::CatalogConfig;
use tracing::{debug, info};

use crate::error::{CatalogError, Result};

/// Fetches stations and their tracks. Any failed call aborts the expansion.
pub async fn expand_stations(
    session: &dyn RemoteSession,
    normalizer: &dyn TrackNormalizer,
    config: &CatalogConfig,
) -> Result<Vec<Playlist>> {
    info!("Starting to load radio stations");

    let mut stations = session
        .radio_stations(config.radio_stations_count)
        .await
        .map_err(CatalogError::remote("radio_stations"))?;
    stations.truncate(config.radio_stations_count as usize);

    let mut playlists = Vec::with_capacity(stations.len());
    for (position, station) in stations.iter().enumerate() {
        let mut records = session
            .station_tracks(&station.id, config.radio_tracks_count)
            .await
            .map_err(CatalogError::remote("station_tracks"))?;
        records.truncate(config.radio_tracks_count as usize);

        let tracks = records
            .iter()
            .map(|record| normalizer.normalize(record))
            .collect::<core_library::Result<Vec<_>>>()?;

        debug!(
            station_id = %station.id,
            tracks = tracks.len(),
            "Loaded radio station {}/{}",
            position + 1,
            stations.len()
        );

        playlists.push(Playlist::new(
            playlist_uri(&config.uri_scheme, &station.id),
            station.name.clone(),
            tracks,
        ));
    }

    info!("Loaded {} radios", playlists.len());
    Ok(playlists)
}
