//! Catalog snapshots
//!
//! A [`Snapshot`] is the complete set of playlists one refresh produced. It
//! is built through a [`SnapshotBuilder`] and never modified after
//! [`SnapshotBuilder::build`]; the catalog publishes it behind an `Arc`.

use std::collections::HashMap;

use core_library::{Playlist, Ref};

/// Immutable URI → playlist mapping that remembers insertion order.
#[derive(Debug, Default)]
pub struct Snapshot {
    generation: u64,
    playlists: Vec<Playlist>,
    by_uri: HashMap<String, usize>,
}

impl Snapshot {
    /// The snapshot a catalog starts with before its first refresh.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Refresh sequence number that produced this snapshot; 0 for the initial
    /// empty one.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn get(&self, uri: &str) -> Option<&Playlist> {
        self.by_uri.get(uri).map(|&slot| &self.playlists[slot])
    }

    pub fn contains(&self, uri: &str) -> bool {
        self.by_uri.contains_key(uri)
    }

    pub fn len(&self) -> usize {
        self.playlists.len()
    }

    pub fn is_empty(&self) -> bool {
        self.playlists.is_empty()
    }

    /// Playlists in the order the refresh registered them.
    pub fn iter(&self) -> impl Iterator<Item = &Playlist> {
        self.playlists.iter()
    }

    /// Playlist references sorted by name.
    ///
    /// Names compare byte-wise, so the order is case-sensitive ("Zed" sorts
    /// before "abc"). The sort is stable: equal names keep registration order.
    pub fn sorted_refs(&self) -> Vec<Ref> {
        let mut refs: Vec<Ref> = self.playlists.iter().map(Playlist::to_ref).collect();
        refs.sort_by(|a, b| a.name.cmp(&b.name));
        refs
    }
}

/// Accumulates playlists for the next snapshot.
#[derive(Debug, Default)]
pub struct SnapshotBuilder {
    playlists: Vec<Playlist>,
    by_uri: HashMap<String, usize>,
}

impl SnapshotBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a playlist under its URI.
    ///
    /// A URI seen earlier in the same refresh is overwritten in place and
    /// keeps its original position; the replaced playlist is returned.
    pub fn insert(&mut self, playlist: Playlist) -> Option<Playlist> {
        match self.by_uri.get(&playlist.uri) {
            Some(&slot) => Some(std::mem::replace(&mut self.playlists[slot], playlist)),
            None => {
                self.by_uri.insert(playlist.uri.clone(), self.playlists.len());
                self.playlists.push(playlist);
                None
            }
        }
    }

    pub fn len(&self) -> usize {
        self.playlists.len()
    }

    pub fn is_empty(&self) -> bool {
        self.playlists.is_empty()
    }

    pub fn build(self, generation: u64) -> Snapshot {
        Snapshot {
            generation,
            playlists: self.playlists,
            by_uri: self.by_uri,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn playlist(uri: &str, name: &str) -> Playlist {
        Playlist::empty(uri, name)
    }

    #[test]
    fn test_empty_snapshot() {
        let snapshot = Snapshot::empty();
        assert_eq!(snapshot.generation(), 0);
        assert!(snapshot.is_empty());
        assert!(snapshot.get("gmusic:playlist:x").is_none());
        assert!(snapshot.sorted_refs().is_empty());
    }

    #[test]
    fn test_sorted_refs_case_sensitive_and_stable() {
        let mut builder = SnapshotBuilder::new();
        builder.insert(playlist("s:playlist:1", "beta"));
        builder.insert(playlist("s:playlist:2", "Alpha"));
        builder.insert(playlist("s:playlist:3", "Zulu"));
        builder.insert(playlist("s:playlist:4", "Alpha"));
        let snapshot = builder.build(1);

        let uris: Vec<_> = snapshot.sorted_refs().into_iter().map(|r| r.uri).collect();
        assert_eq!(
            uris,
            vec!["s:playlist:2", "s:playlist:4", "s:playlist:3", "s:playlist:1"]
        );
    }

    #[test]
    fn test_duplicate_uri_replaces_in_place() {
        let mut builder = SnapshotBuilder::new();
        assert!(builder.insert(playlist("s:playlist:a", "First")).is_none());
        builder.insert(playlist("s:playlist:b", "Second"));

        let replaced = builder.insert(playlist("s:playlist:a", "Replacement"));
        assert_eq!(replaced.map(|p| p.name), Some("First".to_string()));
        assert_eq!(builder.len(), 2);

        let snapshot = builder.build(7);
        assert_eq!(snapshot.generation(), 7);
        let names: Vec<_> = snapshot.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["Replacement", "Second"]);
        assert_eq!(
            snapshot.get("s:playlist:a").map(|p| p.name.as_str()),
            Some("Replacement")
        );
    }
}
