// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Song entity.
//!
//! A song holds the metadata and chord/lyric sheet for one tune. Songs are
//! only ever created by the [`SongStore`](super::SongStore), which assigns
//! their id.

use std::cmp::Ordering;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Unique song identifier, assigned by the song store
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SongId(pub u64);

impl SongId {
    /// Get the raw id
    pub fn get(self) -> u64 {
        self.0
    }

    /// The id after this one, `None` at the top of the range
    pub fn checked_next(self) -> Option<Self> {
        self.0.checked_add(1).map(SongId)
    }
}

impl From<u64> for SongId {
    fn from(id: u64) -> Self {
        SongId(id)
    }
}

impl From<&Song> for SongId {
    fn from(song: &Song) -> Self {
        song.id
    }
}

impl fmt::Display for SongId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A song with chords and lyrics
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Song {
    id: SongId,
    #[serde(default)]
    title: String,
    #[serde(default)]
    artist: String,
    /// Capo fret offset
    #[serde(default)]
    capo: i32,
    /// Chords and lyrics, free text
    #[serde(default)]
    chords: String,
    #[serde(default = "default_draft")]
    draft: bool,
}

fn default_draft() -> bool {
    true
}

impl Song {
    /// Create a new empty draft song
    pub(crate) fn new(id: SongId) -> Self {
        Self {
            id,
            title: String::new(),
            artist: String::new(),
            capo: 0,
            chords: String::new(),
            draft: true,
        }
    }

    /// Create a finished song with content
    pub(crate) fn finished(
        id: SongId,
        title: impl Into<String>,
        artist: impl Into<String>,
        capo: i32,
        chords: impl Into<String>,
    ) -> Self {
        Self {
            id,
            title: title.into(),
            artist: artist.into(),
            capo,
            chords: chords.into(),
            draft: false,
        }
    }

    /// Get song id
    pub fn id(&self) -> SongId {
        self.id
    }

    pub(crate) fn restamp(&mut self, id: SongId) {
        self.id = id;
    }

    /// Get title
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Set title
    pub fn set_title(&mut self, title: impl Into<String>) {
        self.title = title.into();
    }

    /// Get artist
    pub fn artist(&self) -> &str {
        &self.artist
    }

    /// Set artist
    pub fn set_artist(&mut self, artist: impl Into<String>) {
        self.artist = artist.into();
    }

    /// Get capo fret
    pub fn capo(&self) -> i32 {
        self.capo
    }

    /// Set capo fret
    pub fn set_capo(&mut self, capo: i32) {
        self.capo = capo;
    }

    /// Get chords and lyrics
    pub fn chords(&self) -> &str {
        &self.chords
    }

    /// Set chords and lyrics
    pub fn set_chords(&mut self, chords: impl Into<String>) {
        self.chords = chords.into();
    }

    /// Check if still a draft
    pub fn is_draft(&self) -> bool {
        self.draft
    }

    /// Set draft flag
    pub fn set_draft(&mut self, draft: bool) {
        self.draft = draft;
    }

    /// Mark the song as finished
    pub fn finish(&mut self) {
        self.draft = false;
    }

    /// True for an untouched draft: nothing entered, never finished.
    /// Abandoned creations in this state are discarded silently.
    pub fn is_empty(&self) -> bool {
        self.title.is_empty()
            && self.artist.is_empty()
            && self.chords.is_empty()
            && self.capo == 0
            && self.draft
    }
}

/// Full listing order: title, artist, finished before draft, id
pub fn compare_listing(a: &Song, b: &Song) -> Ordering {
    a.title
        .cmp(&b.title)
        .then_with(|| a.artist.cmp(&b.artist))
        .then_with(|| a.draft.cmp(&b.draft))
        .then_with(|| a.id.cmp(&b.id))
}

/// Order within a single section (all finished or all drafts): title, artist, id
pub fn compare_section(a: &Song, b: &Song) -> Ordering {
    a.title
        .cmp(&b.title)
        .then_with(|| a.artist.cmp(&b.artist))
        .then_with(|| a.id.cmp(&b.id))
}

/// Seed songs used when nothing has been persisted yet
pub fn placeholder_songs() -> Vec<Song> {
    vec![
        Song::finished(
            SongId(1),
            "My Bonnie Lies Over the Ocean",
            "Somebody",
            0,
            "These are the chords",
        ),
        Song::finished(SongId(2), "Bill Nye the Science Guy", "Bill Nye", 0, "N/A"),
    ]
}
