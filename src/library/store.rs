// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Song store.
//!
//! Owns every song keyed by id, hands out ids, builds the sorted listings
//! and tells observers about committed changes. State is saved to the
//! backing [`BlobStore`] on every structural change; save failures are
//! logged and otherwise ignored, the in-memory map stays authoritative.
//!
//! Editing is two-phase: callers mutate a song through the `&mut Song` they
//! get back from [`SongStore::create_song`] or [`SongStore::song_mut`], then
//! call [`SongStore::commit_changes`] so observers refresh.

use std::collections::BTreeMap;

use tracing::{debug, info, warn};

use super::observer::{ObserverHandle, ObserverList, SongObserver};
use super::song::{compare_listing, compare_section, placeholder_songs, Song, SongId};
use crate::storage::{self, BlobStore, SONGS_KEY};

/// Header of the finished songs section
pub const FINISHED_SECTION: &str = "Finished Songs";

/// Header of the draft songs section
pub const DRAFT_SECTION: &str = "Draft Songs";

/// A titled group of songs for list screens
#[derive(Debug, Clone, PartialEq)]
pub struct SongSection<'a> {
    pub title: &'static str,
    pub songs: Vec<&'a Song>,
}

/// Registry of all songs
pub struct SongStore {
    songs: BTreeMap<SongId, Song>,
    highest_id: SongId,
    observers: ObserverList,
    store: Box<dyn BlobStore>,
    key: String,
}

impl SongStore {
    /// Create an empty store backed by `store`, persisted under the default key
    pub fn new(store: impl BlobStore + 'static) -> Self {
        Self::with_key(store, SONGS_KEY)
    }

    /// Create an empty store persisted under a custom key
    pub fn with_key(store: impl BlobStore + 'static, key: impl Into<String>) -> Self {
        Self {
            songs: BTreeMap::new(),
            highest_id: SongId(0),
            observers: ObserverList::new(),
            store: Box::new(store),
            key: key.into(),
        }
    }

    /// Load persisted songs, or seed placeholders when there are none.
    /// Does nothing if songs are already loaded.
    pub fn initialize(&mut self) {
        if !self.songs.is_empty() {
            return;
        }

        match storage::load_best_effort::<_, BTreeMap<SongId, Song>>(&*self.store, &self.key) {
            Some(loaded) => {
                self.songs = loaded
                    .into_iter()
                    .map(|(id, mut song)| {
                        if song.id() != id {
                            warn!(key = %id, stored = %song.id(), "song id differs from its key, using key");
                            song.restamp(id);
                        }
                        (id, song)
                    })
                    .collect();
                debug!(count = self.songs.len(), "loaded songs");
            }
            None => {
                info!("no saved songs, seeding placeholders");
                self.songs = placeholder_songs()
                    .into_iter()
                    .map(|song| (song.id(), song))
                    .collect();
                self.persist();
            }
        }

        if let Some(&max) = self.songs.keys().next_back() {
            self.highest_id = self.highest_id.max(max);
        }
    }

    /// Create an empty draft song with the next id and return it for editing.
    ///
    /// Observers are not told until [`commit_changes`](Self::commit_changes).
    pub fn create_song(&mut self) -> &mut Song {
        let id = self.allocate_id();
        self.songs.insert(id, Song::new(id));
        self.persist();
        debug!(%id, "created song");
        // Occupied since the insert above, the closure never runs
        self.songs.entry(id).or_insert_with(|| Song::new(id))
    }

    /// Get a song by id
    pub fn get_song(&self, id: SongId) -> Option<&Song> {
        self.songs.get(&id)
    }

    /// Get a song by id for editing
    pub fn song_mut(&mut self, id: SongId) -> Option<&mut Song> {
        self.songs.get_mut(&id)
    }

    /// Get songs in the given id order, skipping ids that are not present
    pub fn get_songs(&self, ids: &[SongId]) -> Vec<&Song> {
        ids.iter().filter_map(|id| self.songs.get(id)).collect()
    }

    /// Remove a song, returns whether anything was removed
    pub fn remove_song(&mut self, song: impl Into<SongId>) -> bool {
        let id = song.into();
        if self.songs.remove(&id).is_none() {
            return false;
        }
        debug!(%id, "removed song");
        self.songs_updated();
        true
    }

    /// Remove the song if it is an untouched draft, returns whether it was removed
    pub fn discard_if_empty(&mut self, song: impl Into<SongId>) -> bool {
        let id = song.into();
        let empty = self.songs.get(&id).map_or(false, Song::is_empty);
        empty && self.remove_song(id)
    }

    /// Publish edits: notify observers and save
    pub fn commit_changes(&mut self) {
        self.songs_updated();
    }

    /// All songs by title, artist, finished before draft, then id
    pub fn song_list(&self) -> Vec<&Song> {
        let mut songs: Vec<&Song> = self.songs.values().collect();
        songs.sort_by(|a, b| compare_listing(a, b));
        songs
    }

    /// Finished songs by title, artist, id
    pub fn finished_song_list(&self) -> Vec<&Song> {
        self.sorted_where(|song| !song.is_draft())
    }

    /// Draft songs by title, artist, id
    pub fn draft_song_list(&self) -> Vec<&Song> {
        self.sorted_where(Song::is_draft)
    }

    /// Finished then draft sections, as shown on the song list screen
    pub fn sections(&self) -> [SongSection<'_>; 2] {
        [
            SongSection {
                title: FINISHED_SECTION,
                songs: self.finished_song_list(),
            },
            SongSection {
                title: DRAFT_SECTION,
                songs: self.draft_song_list(),
            },
        ]
    }

    /// Number of songs
    pub fn len(&self) -> usize {
        self.songs.len()
    }

    /// Check if there are no songs
    pub fn is_empty(&self) -> bool {
        self.songs.is_empty()
    }

    /// Highest id handed out or loaded so far
    pub fn highest_id(&self) -> SongId {
        self.highest_id
    }

    /// Register an observer
    pub fn add_observer(&mut self, observer: impl SongObserver + 'static) -> ObserverHandle {
        self.observers.add(Box::new(observer))
    }

    /// Unregister an observer, returns whether it was registered
    pub fn remove_observer(&mut self, handle: ObserverHandle) -> bool {
        self.observers.remove(handle)
    }

    /// Number of registered observers
    pub fn observer_count(&self) -> usize {
        self.observers.len()
    }

    /// Next id above `highest_id`. Once the range is used up, falls back to
    /// the lowest free id so an existing song is never overwritten.
    fn allocate_id(&mut self) -> SongId {
        if let Some(id) = self.highest_id.checked_next() {
            self.highest_id = id;
            return id;
        }

        let mut candidate = 1u64;
        for &SongId(taken) in self.songs.keys() {
            if taken == candidate {
                candidate = candidate.saturating_add(1);
            } else if taken > candidate {
                break;
            }
        }
        warn!(id = candidate, "song ids exhausted, reusing lowest free id");
        SongId(candidate)
    }

    fn sorted_where(&self, keep: impl Fn(&Song) -> bool) -> Vec<&Song> {
        let mut songs: Vec<&Song> = self.songs.values().filter(|&song| keep(song)).collect();
        songs.sort_by(|a, b| compare_section(a, b));
        songs
    }

    fn songs_updated(&self) {
        self.observers.notify();
        self.persist();
    }

    fn persist(&self) {
        storage::save_best_effort(&*self.store, &self.key, &self.songs);
    }
}

impl std::fmt::Debug for SongStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SongStore")
            .field("songs", &self.songs.len())
            .field("highest_id", &self.highest_id)
            .field("observers", &self.observers)
            .field("key", &self.key)
            .finish()
    }
}
