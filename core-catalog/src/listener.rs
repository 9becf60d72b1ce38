//! Refresh notifications
//!
//! The catalog calls its listener exactly once per successful refresh, after
//! the new snapshot is current. Failed refreshes never notify.

use core_runtime::events::{CatalogEvent, CoreEvent, EventBus};
use tracing::debug;

/// Observer told when a refresh has installed a new snapshot.
pub trait CatalogListener: Send + Sync {
    fn playlists_loaded(&self);
}

/// Listener for hosts that poll instead of subscribing.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopListener;

impl CatalogListener for NoopListener {
    fn playlists_loaded(&self) {}
}

/// Publishes [`CatalogEvent::PlaylistsLoaded`] on an [`EventBus`].
#[derive(Debug, Clone)]
pub struct EventBusListener {
    bus: EventBus,
}

impl EventBusListener {
    pub fn new(bus: EventBus) -> Self {
        Self { bus }
    }
}

impl CatalogListener for EventBusListener {
    fn playlists_loaded(&self) {
        // No subscribers is normal before the host attaches
        if self
            .bus
            .emit(CoreEvent::Catalog(CatalogEvent::PlaylistsLoaded))
            .is_err()
        {
            debug!("No subscribers for playlists loaded event");
        }
    }
}
