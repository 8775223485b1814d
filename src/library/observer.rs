// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Change notification for song store listeners.

/// Handle returned when registering an observer, used to unregister it
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ObserverHandle(u64);

/// Listener told whenever committed song data changes.
///
/// No delta is passed; receivers re-fetch whichever view they show.
/// Observers only see the store through their own captured state, so they
/// cannot mutate it from inside the callback.
pub trait SongObserver {
    fn songs_changed(&self);
}

impl<F: Fn()> SongObserver for F {
    fn songs_changed(&self) {
        self()
    }
}

/// Registered observers, notified in registration order
#[derive(Default)]
pub struct ObserverList {
    entries: Vec<(ObserverHandle, Box<dyn SongObserver>)>,
    next_handle: u64,
}

impl ObserverList {
    /// Create an empty list
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an observer
    pub fn add(&mut self, observer: Box<dyn SongObserver>) -> ObserverHandle {
        let handle = ObserverHandle(self.next_handle);
        self.next_handle += 1;
        self.entries.push((handle, observer));
        handle
    }

    /// Unregister by handle, returns whether it was registered
    pub fn remove(&mut self, handle: ObserverHandle) -> bool {
        let before = self.entries.len();
        self.entries.retain(|(h, _)| *h != handle);
        self.entries.len() != before
    }

    /// Notify every observer
    pub fn notify(&self) {
        for (_, observer) in &self.entries {
            observer.songs_changed();
        }
    }

    /// Number of registered observers
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if no observers are registered
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl std::fmt::Debug for ObserverList {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ObserverList")
            .field("observers", &self.entries.len())
            .finish()
    }
}
