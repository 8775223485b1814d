// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Performance set registry.
//!
//! Sets are kept in user order; the position is their public identity in the
//! persisted form. Within a session each stored set also carries a
//! [`SetHandle`], minted whenever a set is added or put in place, so that
//! callers can find "the set I was editing" even after other sets moved or
//! when another set holds the same values. The whole list is saved after
//! every mutation; save failures are logged and ignored.

use tracing::{debug, info};

use super::performance_set::{placeholder_sets, PerformanceSet};
use crate::storage::{self, BlobStore, SETS_KEY};

/// Session-scoped identity of a stored performance set
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SetHandle(u64);

#[derive(Debug)]
struct Entry {
    handle: SetHandle,
    set: PerformanceSet,
}

/// Ordered registry of performance sets
pub struct SetRegistry {
    entries: Vec<Entry>,
    next_handle: u64,
    store: Box<dyn BlobStore>,
    key: String,
}

impl SetRegistry {
    /// Create an empty registry backed by `store`, persisted under the default key
    pub fn new(store: impl BlobStore + 'static) -> Self {
        Self::with_key(store, SETS_KEY)
    }

    /// Create an empty registry persisted under a custom key
    pub fn with_key(store: impl BlobStore + 'static, key: impl Into<String>) -> Self {
        Self {
            entries: Vec::new(),
            next_handle: 0,
            store: Box::new(store),
            key: key.into(),
        }
    }

    /// Load persisted sets, or seed placeholders when there are none.
    /// Does nothing if sets are already loaded.
    pub fn initialize(&mut self) {
        if !self.entries.is_empty() {
            return;
        }

        let loaded = storage::load_best_effort::<_, Vec<PerformanceSet>>(&*self.store, &self.key);
        let seeded = loaded.is_none();
        let sets = match loaded {
            Some(sets) => {
                debug!(count = sets.len(), "loaded performance sets");
                sets
            }
            None => {
                info!("no saved performance sets, seeding placeholders");
                placeholder_sets()
            }
        };

        self.entries = self.wrap_all(sets);
        if seeded {
            self.persist();
        }
    }

    /// Number of sets
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if there are no sets
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Get the set at index
    pub fn get(&self, index: usize) -> Option<&PerformanceSet> {
        self.entries.get(index).map(|e| &e.set)
    }

    /// Get an independent copy of the set at index, for edit flows
    pub fn get_copy(&self, index: usize) -> Option<PerformanceSet> {
        self.get(index).cloned()
    }

    /// Get the handle of the set at index
    pub fn handle_at(&self, index: usize) -> Option<SetHandle> {
        self.entries.get(index).map(|e| e.handle)
    }

    /// Get a set by handle
    pub fn get_by_handle(&self, handle: SetHandle) -> Option<&PerformanceSet> {
        self.index_of(handle).and_then(|index| self.get(index))
    }

    /// Current position of the set with this handle
    pub fn index_of(&self, handle: SetHandle) -> Option<usize> {
        self.entries.iter().position(|e| e.handle == handle)
    }

    /// Iterate over sets in order
    pub fn iter(&self) -> impl Iterator<Item = &PerformanceSet> {
        self.entries.iter().map(|e| &e.set)
    }

    /// Append a set, returns its handle
    pub fn add(&mut self, set: PerformanceSet) -> SetHandle {
        let handle = self.mint();
        self.entries.push(Entry { handle, set });
        debug!(index = self.entries.len() - 1, "added performance set");
        self.persist();
        handle
    }

    /// Overwrite the set at index. The stored set gets a fresh handle, which is
    /// returned; `None` and no change if the index is out of range.
    pub fn replace_at(&mut self, index: usize, set: PerformanceSet) -> Option<SetHandle> {
        if index >= self.entries.len() {
            return None;
        }
        let handle = self.mint();
        self.entries[index] = Entry { handle, set };
        debug!(index, "replaced performance set");
        self.persist();
        Some(handle)
    }

    /// Replace the set identified by `old` with `set`; no-op if `old` is not tracked
    pub fn replace(&mut self, old: SetHandle, set: PerformanceSet) -> Option<SetHandle> {
        let index = self.index_of(old)?;
        self.replace_at(index, set)
    }

    /// Remove the set at index
    pub fn remove_at(&mut self, index: usize) -> Option<PerformanceSet> {
        if index >= self.entries.len() {
            return None;
        }
        let entry = self.entries.remove(index);
        debug!(index, "removed performance set");
        self.persist();
        Some(entry.set)
    }

    fn mint(&mut self) -> SetHandle {
        let handle = SetHandle(self.next_handle);
        self.next_handle += 1;
        handle
    }

    fn wrap_all(&mut self, sets: Vec<PerformanceSet>) -> Vec<Entry> {
        sets.into_iter()
            .map(|set| Entry {
                handle: self.mint(),
                set,
            })
            .collect()
    }

    fn persist(&self) {
        let sets: Vec<&PerformanceSet> = self.iter().collect();
        storage::save_best_effort(&*self.store, &self.key, &sets);
    }
}

impl std::fmt::Debug for SetRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SetRegistry")
            .field("entries", &self.entries)
            .field("key", &self.key)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::library::SongId;
    use crate::storage::MemoryStore;

    fn empty() -> SetRegistry {
        SetRegistry::new(MemoryStore::new())
    }

    fn named(name: &str) -> PerformanceSet {
        PerformanceSet::new().with_name(name)
    }

    #[test]
    fn test_initialize_seeds_placeholders() {
        let mut registry = empty();
        registry.initialize();
        assert_eq!(registry.len(), 3);
        assert_eq!(registry.get(0).unwrap().song_ids(), &[SongId(1)]);
    }

    #[test]
    fn test_initialize_is_idempotent() {
        let mut registry = empty();
        registry.initialize();
        registry.add(named("Fourth"));
        registry.initialize();
        assert_eq!(registry.len(), 4);
    }

    #[test]
    fn test_get_out_of_range() {
        let registry = empty();
        assert!(registry.get(0).is_none());
        assert!(registry.get_copy(0).is_none());
        assert!(registry.handle_at(0).is_none());
    }

    #[test]
    fn test_copy_does_not_touch_original() {
        let mut registry = empty();
        registry.add(named("Original").with_song_ids([SongId(1)]));

        let mut copy = registry.get_copy(0).unwrap();
        copy.set_name(Some("Edited".to_string()));
        copy.push_song(SongId(2));

        let stored = registry.get(0).unwrap();
        assert_eq!(stored.name(), Some("Original"));
        assert_eq!(stored.song_ids(), &[SongId(1)]);
    }

    #[test]
    fn test_index_of_distinguishes_equal_sets() {
        let mut registry = empty();
        let first = registry.add(named("Twin"));
        let second = registry.add(named("Twin"));

        assert_eq!(registry.get(0), registry.get(1));
        assert_eq!(registry.index_of(first), Some(0));
        assert_eq!(registry.index_of(second), Some(1));
    }

    #[test]
    fn test_index_follows_removals() {
        let mut registry = empty();
        registry.add(named("A"));
        let b = registry.add(named("B"));
        registry.remove_at(0);
        assert_eq!(registry.index_of(b), Some(0));
        assert_eq!(registry.get_by_handle(b).unwrap().name(), Some("B"));
    }

    #[test]
    fn test_replace_by_handle() {
        let mut registry = empty();
        registry.add(named("A"));
        let b = registry.add(named("B"));

        let mut edited = registry.get_copy(1).unwrap();
        edited.set_name(Some("B2".to_string()));
        let new_handle = registry.replace(b, edited).unwrap();

        assert_eq!(registry.get(1).unwrap().name(), Some("B2"));
        assert_eq!(registry.index_of(new_handle), Some(1));
        // The old handle named the instance that was replaced
        assert_eq!(registry.index_of(b), None);
    }

    #[test]
    fn test_replace_untracked_is_noop() {
        let mut registry = empty();
        let gone = registry.add(named("Gone"));
        registry.add(named("Stays"));
        registry.remove_at(0);

        assert!(registry.replace(gone, named("Intruder")).is_none());
        assert_eq!(registry.len(), 1);
        assert_eq!(registry.get(0).unwrap().name(), Some("Stays"));
    }

    #[test]
    fn test_replace_at_out_of_range() {
        let mut registry = empty();
        assert!(registry.replace_at(0, named("X")).is_none());
        assert!(registry.is_empty());
    }

    #[test]
    fn test_remove_at() {
        let mut registry = empty();
        registry.add(named("A"));
        registry.add(named("B"));
        assert_eq!(registry.remove_at(0).unwrap().name(), Some("A"));
        assert!(registry.remove_at(5).is_none());
        let names: Vec<_> = registry.iter().map(|s| s.name()).collect();
        assert_eq!(names, vec![Some("B")]);
    }

    #[test]
    fn test_every_mutation_persists() {
        let backing = MemoryStore::new();
        let mut registry = SetRegistry::new(backing.clone());
        registry.add(named("A"));
        registry.add(named("B"));
        registry.replace_at(0, named("A2"));
        registry.remove_at(1);

        let mut reloaded = SetRegistry::new(backing);
        reloaded.initialize();
        assert_eq!(reloaded.len(), 1);
        assert_eq!(reloaded.get(0).unwrap().name(), Some("A2"));
    }
}
