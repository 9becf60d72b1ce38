//! # Playlist Catalog
//!
//! Builds one consistent, addressable snapshot of the user's playlists out of
//! the heterogeneous sources a remote streaming service exposes, and serves
//! reads from whichever snapshot is current.
//!
//! ## Overview
//!
//! A refresh pulls, in order:
//! 1. The owned library, indexed by remote track id
//! 2. Promoted tracks (a "Promoted" playlist, only when non-empty)
//! 3. The thumbs-down action playlist (always present, always empty)
//! 4. User playlists, resolving each entry against the library index or its
//!    embedded record
//! 5. Shared playlists, resolved the same way
//! 6. Radio stations as playlists, when enabled
//!
//! The finished snapshot replaces the current one in a single pointer swap,
//! then the [`CatalogListener`] is told playlists were loaded. Any failure
//! aborts the refresh and leaves the previous snapshot in place.
//!
//! ## Usage
//!
//! ```ignore
//! use std::sync::Arc;
//! use core_catalog::{NoopListener, PlaylistCatalog};
//! use core_library::DefaultTrackNormalizer;
//! use core_runtime::config::CatalogConfig;
//!
//! let config = CatalogConfig::default();
//! let catalog = PlaylistCatalog::new(
//!     session,
//!     Arc::new(DefaultTrackNormalizer::new(config.uri_scheme.clone())),
//!     config,
//!     Arc::new(NoopListener),
//! );
//!
//! catalog.refresh().await?;
//! for playlist in catalog.as_list() {
//!     println!("{} ({})", playlist.name, playlist.uri);
//! }
//! ```

pub mod catalog;
pub mod error;
pub mod listener;
pub mod merge;
pub mod mutation;
pub mod radio;
pub mod snapshot;

#[cfg(test)]
mod test_support;

pub use catalog::{PlaylistCatalog, RefreshSummary};
pub use error::{CatalogError, Result};
pub use listener::{CatalogListener, EventBusListener, NoopListener};
pub use merge::{LibraryIndex, TrackReference};
pub use snapshot::{Snapshot, SnapshotBuilder};
