// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Merging a song selection back into an ordered setlist.

use std::collections::BTreeSet;

use crate::library::SongId;

/// Apply a multi-select result to an ordered setlist.
///
/// Ids still selected keep their relative order, deselected ids drop out and
/// newly selected ids are appended in ascending order. A repeated id in
/// `current` survives only at its first position.
pub fn reconcile_song_ids(
    current: &[SongId],
    selected: impl IntoIterator<Item = SongId>,
) -> Vec<SongId> {
    let mut remaining: BTreeSet<SongId> = selected.into_iter().collect();
    let mut merged = Vec::with_capacity(current.len().max(remaining.len()));

    for &id in current {
        if remaining.remove(&id) {
            merged.push(id);
        }
    }
    merged.extend(remaining);
    merged
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(raw: &[u64]) -> Vec<SongId> {
        raw.iter().copied().map(SongId).collect()
    }

    #[test]
    fn test_same_selection_keeps_order() {
        let current = ids(&[3, 1, 2]);
        let merged = reconcile_song_ids(&current, ids(&[3, 1, 2]));
        assert_eq!(merged, ids(&[3, 1, 2]));
    }

    #[test]
    fn test_drop_and_append() {
        let current = ids(&[3, 1, 2]);
        let merged = reconcile_song_ids(&current, ids(&[1, 2, 4]));
        assert_eq!(merged, ids(&[1, 2, 4]));
    }

    #[test]
    fn test_new_ids_go_last_in_ascending_order() {
        let current = ids(&[10, 5]);
        let merged = reconcile_song_ids(&current, ids(&[8, 5, 1, 10, 7]));
        assert_eq!(merged, ids(&[10, 5, 1, 7, 8]));
    }

    #[test]
    fn test_empty_selection_clears() {
        let merged = reconcile_song_ids(&ids(&[1, 2]), Vec::new());
        assert!(merged.is_empty());
    }

    #[test]
    fn test_empty_setlist() {
        let merged = reconcile_song_ids(&[], ids(&[2, 1]));
        assert_eq!(merged, ids(&[1, 2]));
    }

    #[test]
    fn test_duplicate_in_setlist_kept_once() {
        let merged = reconcile_song_ids(&ids(&[2, 1, 2]), ids(&[1, 2]));
        assert_eq!(merged, ids(&[2, 1]));
    }
}
