// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Performance sets and their setlists.
//!
//! This module provides:
//! - PerformanceSet: one gig with an ordered list of song ids
//! - SetRegistry: the ordered collection of all sets
//! - Reconciliation of song selections into an existing setlist

pub mod performance_set;
pub mod reconcile;
pub mod registry;

pub use performance_set::{Instrument, PerformanceSet};
pub use reconcile::reconcile_song_ids;
pub use registry::{SetHandle, SetRegistry};
