// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Song library.
//!
//! This module provides:
//! - Song: one tune with its chord sheet
//! - SongStore: the registry of all songs, with sorted listings
//! - SongObserver: change notification for list screens

pub mod observer;
pub mod song;
pub mod store;

pub use observer::{ObserverHandle, SongObserver};
pub use song::{Song, SongId};
pub use store::{SongSection, SongStore, DRAFT_SECTION, FINISHED_SECTION};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStore;

    #[test]
    fn test_new_song_flow() {
        let mut store = SongStore::new(MemoryStore::new());
        store.initialize();

        let song = store.create_song();
        assert_eq!(song.id(), SongId(3));
        song.set_title("Test");
        store.commit_changes();

        assert!(store.draft_song_list().iter().any(|s| s.id() == SongId(3)));
        assert!(!store.finished_song_list().iter().any(|s| s.id() == SongId(3)));
    }
}
