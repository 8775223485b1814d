// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Performance set entity.
//!
//! A performance set is one planned (or past) gig: where and when, which
//! instruments, an optional picture, and the setlist as an ordered list of
//! song ids pointing into the [`SongStore`].

use std::collections::BTreeSet;
use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::reconcile::reconcile_song_ids;
use crate::library::{Song, SongId, SongStore};

/// Instruments selectable for a performance
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Instrument {
    Piano,
    Guitar,
    #[serde(alias = "Ukelele")]
    Ukulele,
    Other,
}

impl Instrument {
    /// Every instrument, in display order
    pub const ALL: [Instrument; 4] = [
        Instrument::Piano,
        Instrument::Guitar,
        Instrument::Ukulele,
        Instrument::Other,
    ];

    /// Display name
    pub fn name(self) -> &'static str {
        match self {
            Instrument::Piano => "Piano",
            Instrument::Guitar => "Guitar",
            Instrument::Ukulele => "Ukulele",
            Instrument::Other => "Other",
        }
    }
}

impl fmt::Display for Instrument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A planned performance with its setlist
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PerformanceSet {
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    location: Option<String>,
    #[serde(default)]
    date: Option<DateTime<Utc>>,
    #[serde(default)]
    instruments: BTreeSet<Instrument>,
    /// Opaque picture bytes
    #[serde(default)]
    image: Option<Vec<u8>>,
    #[serde(default)]
    song_ids: Vec<SongId>,
}

impl PerformanceSet {
    /// Create an empty set with no songs
    pub fn new() -> Self {
        Self::default()
    }

    /// Get name
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Set name
    pub fn set_name(&mut self, name: Option<String>) {
        self.name = name;
    }

    /// Get location
    pub fn location(&self) -> Option<&str> {
        self.location.as_deref()
    }

    /// Set location
    pub fn set_location(&mut self, location: Option<String>) {
        self.location = location;
    }

    /// Get performance date
    pub fn date(&self) -> Option<DateTime<Utc>> {
        self.date
    }

    /// Set performance date
    pub fn set_date(&mut self, date: Option<DateTime<Utc>>) {
        self.date = date;
    }

    /// Get instruments
    pub fn instruments(&self) -> &BTreeSet<Instrument> {
        &self.instruments
    }

    /// Replace the instrument selection
    pub fn set_instruments(&mut self, instruments: impl IntoIterator<Item = Instrument>) {
        self.instruments = instruments.into_iter().collect();
    }

    /// Add the instrument if missing, remove it otherwise.
    /// Returns whether it is selected afterwards.
    pub fn toggle_instrument(&mut self, instrument: Instrument) -> bool {
        if self.instruments.remove(&instrument) {
            false
        } else {
            self.instruments.insert(instrument);
            true
        }
    }

    /// Instruments as a comma separated list, e.g. "Piano, Guitar"
    pub fn instruments_label(&self) -> String {
        self.instruments
            .iter()
            .map(|i| i.name())
            .collect::<Vec<_>>()
            .join(", ")
    }

    /// Get image bytes
    pub fn image(&self) -> Option<&[u8]> {
        self.image.as_deref()
    }

    /// Set image bytes
    pub fn set_image(&mut self, image: Option<Vec<u8>>) {
        self.image = image;
    }

    /// Get the setlist
    pub fn song_ids(&self) -> &[SongId] {
        &self.song_ids
    }

    /// Replace the setlist
    pub fn set_song_ids(&mut self, song_ids: Vec<SongId>) {
        self.song_ids = song_ids;
    }

    /// Append a song to the setlist
    pub fn push_song(&mut self, id: SongId) {
        self.song_ids.push(id);
    }

    /// Check if a song is on the setlist
    pub fn contains_song(&self, id: SongId) -> bool {
        self.song_ids.contains(&id)
    }

    /// Remove the setlist entry at index
    pub fn remove_song_at(&mut self, index: usize) -> Option<SongId> {
        if index < self.song_ids.len() {
            Some(self.song_ids.remove(index))
        } else {
            None
        }
    }

    /// Move a setlist entry, returns false if either index is out of range
    pub fn move_song(&mut self, from: usize, to: usize) -> bool {
        if from >= self.song_ids.len() || to >= self.song_ids.len() {
            return false;
        }
        let id = self.song_ids.remove(from);
        self.song_ids.insert(to, id);
        true
    }

    /// Merge a multi-select result into the setlist, keeping existing order
    pub fn apply_selection(&mut self, selected: impl IntoIterator<Item = SongId>) {
        self.song_ids = reconcile_song_ids(&self.song_ids, selected);
    }

    /// Songs on the setlist, in order. Ids no longer in the store are skipped.
    pub fn resolve_songs<'a>(&self, songs: &'a SongStore) -> Vec<&'a Song> {
        songs.get_songs(&self.song_ids)
    }

    /// Builder: set name
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Builder: set location
    pub fn with_location(mut self, location: impl Into<String>) -> Self {
        self.location = Some(location.into());
        self
    }

    /// Builder: set date
    pub fn with_date(mut self, date: DateTime<Utc>) -> Self {
        self.date = Some(date);
        self
    }

    /// Builder: add instrument
    pub fn with_instrument(mut self, instrument: Instrument) -> Self {
        self.instruments.insert(instrument);
        self
    }

    /// Builder: set image
    pub fn with_image(mut self, image: Vec<u8>) -> Self {
        self.image = Some(image);
        self
    }

    /// Builder: set setlist
    pub fn with_song_ids(mut self, song_ids: impl IntoIterator<Item = SongId>) -> Self {
        self.song_ids = song_ids.into_iter().collect();
        self
    }
}

/// Seed sets used when nothing has been persisted yet
pub fn placeholder_sets() -> Vec<PerformanceSet> {
    let now = Utc::now();
    let set = |name: &str, location: &str| {
        PerformanceSet::new()
            .with_name(name)
            .with_location(location)
            .with_date(now)
            .with_instrument(Instrument::Piano)
    };

    vec![
        set("My First Set", "The Bathroom").with_song_ids([SongId(1)]),
        set("My Second Set", "The Laundry Room"),
        set("My Third Set", "Mars"),
    ]
}
