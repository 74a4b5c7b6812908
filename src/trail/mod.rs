// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Trail-based backtracking for the ring search.
//!
//! Every write to trailed search state records the slot and its old value.
//! Backtracking rewinds the trail to a checkpoint (a trail length), writing
//! the old values back in reverse order.

/// A single entry in the trail, recording one state change.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct TrailEntry {
    /// Index of the slot that was written
    slot: usize,
    /// The value before the change
    old_value: u64,
}

/// The trail system for O(1) backtracking.
///
/// # Memory Model
///
/// - The trail does not own the state it restores; `rewind_to` is handed the
///   slots. `SearchContext` pairs its own trail with its own state, so each
///   search has an independent trail.
#[derive(Debug)]
pub struct Trail {
    /// All trail entries recorded so far
    entries: Vec<TrailEntry>,
}

impl Trail {
    /// Maximum trail size.
    ///
    /// A complete ring writes two slots per position, so the deepest path of
    /// the search records at most `2 * MAX_NODES` entries.
    const MAX_SIZE: usize = 1024;

    /// Create a new empty trail.
    pub fn new() -> Self {
        Self {
            entries: Vec::with_capacity(Self::MAX_SIZE),
        }
    }

    /// Record a state change in the trail.
    ///
    /// # Panics
    ///
    /// Panics if the trail exceeds MAX_SIZE (indicates a bug in the search algorithm).
    pub fn record_change(&mut self, slot: usize, old_value: u64) {
        if self.entries.len() >= Self::MAX_SIZE {
            panic!("Trail overflow: exceeded {} entries", Self::MAX_SIZE);
        }
        self.entries.push(TrailEntry { slot, old_value });
    }

    /// Undo every change recorded after `checkpoint`, most recent first.
    pub fn rewind_to(&mut self, checkpoint: usize, slots: &mut [u64]) {
        while self.entries.len() > checkpoint {
            if let Some(entry) = self.entries.pop() {
                slots[entry.slot] = entry.old_value;
            }
        }
    }

    /// Get the current number of entries in the trail.
    ///
    /// This is the checkpoint to pass to `rewind_to` later.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the trail is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for Trail {
    fn default() -> Self {
        Self::new()
    }
}
