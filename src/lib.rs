//! Workspace facade crate.
//!
//! Host applications can depend on `playlist-sync` and enable the `service`
//! feature instead of wiring `core-service`, `core-catalog` and the bridge
//! crates individually.

#[cfg(feature = "service")]
pub use core_service::*;
