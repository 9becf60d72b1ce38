//! # Library Model Module
//!
//! Local representation of the user's music as the host sees it.
//!
//! ## Overview
//!
//! This module provides:
//! - `Track` and `Playlist` domain models, immutable once built
//! - `Ref` values for listing playlists and their items
//! - Well-known playlist URIs (`<scheme>:playlist:promoted`, ...)
//! - The `TrackNormalizer` seam that turns remote records into `Track`s

pub mod error;
pub mod models;
pub mod normalizer;
pub mod uri;

pub use error::{LibraryError, Result};
pub use models::{Playlist, Ref, RefKind, Track};
pub use normalizer::{DefaultTrackNormalizer, TrackNormalizer};
