//! # Remote Bridge Traits
//!
//! Contracts between the playlist core and the remote streaming service.
//!
//! ## Overview
//!
//! The core never talks to the remote service directly. Instead, the host
//! injects an implementation of [`RemoteSession`](session::RemoteSession)
//! that owns authentication, transport and rate limiting. This crate defines
//! that trait together with the raw wire records it returns.
//!
//! ## Records
//!
//! - [`RawTrack`](session::RawTrack) - Track metadata as the service reports it
//! - [`PlaylistEntry`](session::PlaylistEntry) - One row of a playlist, possibly
//!   referencing an owned library track by identifier only
//! - [`UserPlaylist`](session::UserPlaylist) - An owned playlist with entries
//! - [`PlaylistSummary`](session::PlaylistSummary) - Playlist listing row with
//!   its type tag and share token
//! - [`RadioStation`](session::RadioStation) - A service-generated station
//!
//! ## Error Handling
//!
//! All session calls return [`BridgeError`](error::BridgeError). Implementations
//! should map transport, authentication and rate-limit failures onto the
//! matching variant so callers can report a stated reason.
//!
//! ## Thread Safety
//!
//! `RemoteSession` requires `Send + Sync` so one session can be shared between
//! the refresh task and concurrent downvote requests.

pub mod error;
pub mod session;

pub use error::BridgeError;

pub use session::{
    EntrySource, PlaylistEntry, PlaylistKind, PlaylistSummary, RadioStation, Rating, RawTrack,
    RemoteSession, UserPlaylist,
};
