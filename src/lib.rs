// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Setlist - songs and performance sets for live gigs.
//!
//! The crate keeps two registries: a [`SongStore`] holding every song keyed
//! by id, and a [`SetRegistry`] holding the ordered performance sets whose
//! setlists refer to songs by id. Both save to a [`BlobStore`] on every
//! change and keep working from memory if saving fails.

pub mod config;
pub mod error;
pub mod library;
pub mod logging;
pub mod performance;
pub mod storage;

pub use config::{LoggingConfig, StoreConfig};
pub use error::StorageError;
pub use library::{ObserverHandle, Song, SongId, SongObserver, SongStore};
pub use performance::{reconcile_song_ids, Instrument, PerformanceSet, SetHandle, SetRegistry};
pub use storage::{BlobStore, FileStore, MemoryStore};

/// Both registries, opened on the same document store
#[derive(Debug)]
pub struct Library {
    pub songs: SongStore,
    pub sets: SetRegistry,
}

impl Library {
    /// Open and initialize both registries from the configured data directory
    pub fn open(config: &StoreConfig) -> Self {
        let store = config.open_file_store();
        Self::open_with(store, config)
    }

    /// Open and initialize both registries on a given store
    pub fn open_with<S: BlobStore + Clone + 'static>(store: S, config: &StoreConfig) -> Self {
        let mut songs = SongStore::with_key(store.clone(), config.songs_key.clone());
        let mut sets = SetRegistry::with_key(store, config.sets_key.clone());
        songs.initialize();
        sets.initialize();
        Self { songs, sets }
    }

    /// Songs of the set at index, in setlist order; `None` if there is no such set
    pub fn setlist(&self, index: usize) -> Option<Vec<&Song>> {
        self.sets.get(index).map(|set| set.resolve_songs(&self.songs))
    }
}
