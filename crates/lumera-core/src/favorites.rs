//! Persistent favorites store.
//!
//! An ordered sequence with set semantics: at most one entry per
//! `(id, media_type)` key, insertion order preserved. Every mutation is
//! written through to a single JSON file; a failed write is logged and the
//! in-memory state stays authoritative for the rest of the session.

use std::path::{Path, PathBuf};

use crate::models::{FavoriteItem, MediaKey};

/// What a mutation did, so views can react without diffing the whole list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FavoritesChange {
    Added(MediaKey),
    Removed(MediaKey),
    /// The call was a no-op (add of a present key, remove of an absent one).
    Unchanged,
}

/// Process-wide favorites list, persisted to `favorites.json`.
#[derive(Debug)]
pub struct FavoritesStore {
    items: Vec<FavoriteItem>,
    path: Option<PathBuf>,
    generation: u64,
}

impl FavoritesStore {
    /// Load the store from `path`. A missing or unreadable file yields an
    /// empty store; this never fails.
    pub fn load(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let items = read_items(&path);
        Self {
            items,
            path: Some(path),
            generation: 0,
        }
    }

    /// An unpersisted store (tests, or when no data dir is available).
    pub fn in_memory() -> Self {
        Self {
            items: Vec::new(),
            path: None,
            generation: 0,
        }
    }

    /// Insert `item` unless an entry with the same key exists. Idempotent.
    pub fn add(&mut self, item: FavoriteItem) -> FavoritesChange {
        let key = item.key();
        if self.contains(key) {
            return FavoritesChange::Unchanged;
        }
        self.items.push(item);
        self.commit();
        FavoritesChange::Added(key)
    }

    /// Delete the entry with `key` if present. Idempotent.
    pub fn remove(&mut self, key: MediaKey) -> FavoritesChange {
        let before = self.items.len();
        self.items.retain(|i| i.key() != key);
        if self.items.len() == before {
            return FavoritesChange::Unchanged;
        }
        self.commit();
        FavoritesChange::Removed(key)
    }

    /// Remove if present, add otherwise.
    pub fn toggle(&mut self, item: FavoriteItem) -> FavoritesChange {
        match self.remove(item.key()) {
            FavoritesChange::Unchanged => self.add(item),
            removed => removed,
        }
    }

    /// Pure membership lookup.
    pub fn contains(&self, key: MediaKey) -> bool {
        self.items.iter().any(|i| i.key() == key)
    }

    /// Saved items in insertion order.
    pub fn items(&self) -> &[FavoriteItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Bumped on every effective mutation; cheap change detection for views.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Persist the full sequence and bump the generation. Write failures are
    /// logged, never surfaced: losing durability is acceptable, losing
    /// in-session state is not.
    fn commit(&mut self) {
        self.generation += 1;
        let Some(path) = &self.path else {
            return;
        };
        if let Some(parent) = path.parent() {
            let _ = std::fs::create_dir_all(parent);
        }
        match serde_json::to_string_pretty(&self.items) {
            Ok(json) => {
                if let Err(e) = std::fs::write(path, json) {
                    tracing::warn!("Failed to save favorites: {e}");
                }
            }
            Err(e) => tracing::warn!("Failed to serialize favorites: {e}"),
        }
    }
}

/// Read the persisted sequence; absence or a parse failure means empty.
fn read_items(path: &Path) -> Vec<FavoriteItem> {
    let Ok(content) = std::fs::read_to_string(path) else {
        return Vec::new();
    };
    match serde_json::from_str(&content) {
        Ok(items) => items,
        Err(e) => {
            tracing::warn!("Malformed favorites file, starting empty: {e}");
            Vec::new()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::MediaType;

    fn item(id: u64, media_type: MediaType) -> FavoriteItem {
        FavoriteItem {
            id,
            media_type,
            title: format!("Title {id}"),
            poster_path: None,
            backdrop_path: None,
            vote_average: 7.0,
            release_date: Some("2020-01-01".into()),
        }
    }

    #[test]
    fn test_add_is_idempotent() {
        let mut store = FavoritesStore::in_memory();
        assert_eq!(
            store.add(item(1, MediaType::Movie)),
            FavoritesChange::Added(MediaKey::new(1, MediaType::Movie))
        );
        for _ in 0..5 {
            assert_eq!(store.add(item(1, MediaType::Movie)), FavoritesChange::Unchanged);
        }
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_same_id_different_type_coexist() {
        let mut store = FavoritesStore::in_memory();
        store.add(item(1, MediaType::Movie));
        store.add(item(1, MediaType::Tv));
        assert_eq!(store.len(), 2);
        assert!(store.contains(MediaKey::new(1, MediaType::Movie)));
        assert!(store.contains(MediaKey::new(1, MediaType::Tv)));
    }

    #[test]
    fn test_remove_absent_is_noop() {
        let mut store = FavoritesStore::in_memory();
        store.add(item(1, MediaType::Movie));
        let gen = store.generation();
        assert_eq!(
            store.remove(MediaKey::new(99, MediaType::Movie)),
            FavoritesChange::Unchanged
        );
        assert_eq!(store.len(), 1);
        assert_eq!(store.generation(), gen);
    }

    #[test]
    fn test_order_preserved_across_removal() {
        let mut store = FavoritesStore::in_memory();
        for id in 1..=4 {
            store.add(item(id, MediaType::Movie));
        }
        store.remove(MediaKey::new(2, MediaType::Movie));
        // Re-adding appends at the end rather than restoring the old slot.
        store.add(item(3, MediaType::Movie));

        let ids: Vec<u64> = store.items().iter().map(|i| i.id).collect();
        assert_eq!(ids, vec![1, 3, 4]);
    }

    #[test]
    fn test_toggle_flips_membership() {
        let mut store = FavoritesStore::in_memory();
        let key = MediaKey::new(5, MediaType::Tv);
        assert_eq!(store.toggle(item(5, MediaType::Tv)), FavoritesChange::Added(key));
        assert!(store.contains(key));
        assert_eq!(store.toggle(item(5, MediaType::Tv)), FavoritesChange::Removed(key));
        assert!(!store.contains(key));
    }

    #[test]
    fn test_round_trip_persistence() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("favorites.json");

        let mut store = FavoritesStore::load(&path);
        store.add(item(10, MediaType::Movie));
        store.add(item(11, MediaType::Tv));
        store.add(item(12, MediaType::Movie));

        let reloaded = FavoritesStore::load(&path);
        assert_eq!(reloaded.len(), 3);
        for key in [
            MediaKey::new(10, MediaType::Movie),
            MediaKey::new(11, MediaType::Tv),
            MediaKey::new(12, MediaType::Movie),
        ] {
            assert!(reloaded.contains(key));
        }
        // Order survives the round trip too.
        let ids: Vec<u64> = reloaded.items().iter().map(|i| i.id).collect();
        assert_eq!(ids, vec![10, 11, 12]);
    }

    #[test]
    fn test_malformed_file_loads_empty() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("favorites.json");
        std::fs::write(&path, "{not json").unwrap();

        let store = FavoritesStore::load(&path);
        assert!(store.is_empty());
    }

    #[test]
    fn test_missing_file_loads_empty() {
        let dir = tempfile::tempdir().unwrap();
        let store = FavoritesStore::load(dir.path().join("nope.json"));
        assert!(store.is_empty());
    }

    #[test]
    fn test_generation_tracks_effective_mutations() {
        let mut store = FavoritesStore::in_memory();
        assert_eq!(store.generation(), 0);
        store.add(item(1, MediaType::Movie));
        assert_eq!(store.generation(), 1);
        store.add(item(1, MediaType::Movie)); // no-op
        assert_eq!(store.generation(), 1);
        store.remove(MediaKey::new(1, MediaType::Movie));
        assert_eq!(store.generation(), 2);
    }
}
