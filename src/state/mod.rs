// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Tier 2: DYNAMIC state (mutable, tracked on trail).
//!
//! - RingState: the label at each ring position and the set of labels used
//! - Statistics: search counters (not trailed)
//! - SolutionLog: accepted solutions (not trailed)

pub mod solutions;
pub mod statistics;

pub use solutions::{Solution, SolutionLog};
pub use statistics::{Counters, Statistics};

use crate::geometry::MAX_NODES;

/// Slot holding the bitmask of placed labels; bit `l` is set once label `l` is on the ring.
pub(crate) const PLACED_SLOT: usize = MAX_NODES;

/// Total number of trailed slots.
pub(crate) const SLOT_COUNT: usize = MAX_NODES + 1;

/// Trailed ring state.
///
/// Every field lives in one `u64` slot so the trail can restore it. Slots
/// `0..MAX_NODES` hold the label at each ring position (0 while empty) and
/// slot `PLACED_SLOT` holds the placed-label mask.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RingState {
    pub(crate) slots: [u64; SLOT_COUNT],
}

impl RingState {
    /// An empty ring.
    pub fn new() -> Self {
        Self {
            slots: [0; SLOT_COUNT],
        }
    }

    /// Label at a ring position, 0 if nothing has been placed there.
    pub fn label(&self, position: usize) -> u64 {
        self.slots[position]
    }

    /// All position slots, including those beyond the ring's node count.
    pub fn labels(&self) -> &[u64] {
        &self.slots[..MAX_NODES]
    }

    /// Whether the label is already on the ring.
    pub fn is_placed(&self, label: u64) -> bool {
        self.slots[PLACED_SLOT] & (1 << label) != 0
    }

    /// Bitmask of placed labels.
    pub fn placed_mask(&self) -> u64 {
        self.slots[PLACED_SLOT]
    }
}

impl Default for RingState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_ring() {
        let state = RingState::new();
        assert!(state.labels().iter().all(|&label| label == 0));
        assert_eq!(state.placed_mask(), 0);
        assert!(!state.is_placed(1));
    }
}
