// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Search context combining MEMO and DYNAMIC state.
//!
//! The SearchContext is the core data structure that combines:
//! - Tier 1 (MEMO): the ring size and its lines, fixed for the whole search
//! - Tier 2 (DYNAMIC): the partially labelled ring, with trail-based backtracking
//!
//! Statistics and accepted solutions are also kept here. They are not
//! trailed: backtracking past a solution does not forget it.

use tracing::debug;

use crate::geometry::{Line, RingSize};
use crate::state::{RingState, SolutionLog, Statistics, PLACED_SLOT};
use crate::trail::Trail;

/// Immutable per-search data (Tier 1: MEMO).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RingMemo {
    /// The validated ring size
    pub size: RingSize,
    /// The n lines, clockwise from external node 0
    pub lines: Vec<Line>,
}

impl RingMemo {
    pub fn new(size: RingSize) -> Self {
        Self {
            size,
            lines: size.lines(),
        }
    }
}

/// Search context combining MEMO and DYNAMIC state.
///
/// ```text
/// SearchContext {
///     memo: RingMemo,            // Tier 1: Immutable
///     trail: Trail,              // Tier 2: Mutable, owned
///     state: RingState,          // Tier 2: Mutable, owned
///     statistics: Statistics,
///     solutions: SolutionLog,
/// }
/// ```
///
/// # Example
///
/// ```
/// use magic_ring_search::context::SearchContext;
/// use magic_ring_search::geometry::RingSize;
///
/// let mut ctx = SearchContext::new(RingSize::try_from(3).unwrap());
/// let checkpoint = ctx.trail.len();
/// ctx.place(0, 4);
/// assert!(ctx.is_placed(4));
/// ctx.rewind_to(checkpoint);
/// assert!(!ctx.is_placed(4));
/// ```
#[derive(Debug)]
pub struct SearchContext {
    /// Immutable per-search data (Tier 1)
    pub memo: RingMemo,
    /// Trail for O(1) backtracking (Tier 2)
    pub trail: Trail,
    /// Mutable search state (Tier 2)
    pub state: RingState,
    /// Search counters
    pub statistics: Statistics,
    /// Solutions accepted so far
    pub solutions: SolutionLog,
}

impl SearchContext {
    /// Create a new search context for an empty ring of the given size.
    pub fn new(size: RingSize) -> Self {
        let memo = RingMemo::new(size);
        debug!(
            "context for {}: {} lines, {} candidates",
            size,
            memo.lines.len(),
            size.candidate_count()
        );
        Self {
            memo,
            trail: Trail::new(),
            state: RingState::new(),
            statistics: Statistics::new(),
            solutions: SolutionLog::new(),
        }
    }

    /// The ring size being searched.
    pub fn size(&self) -> RingSize {
        self.memo.size
    }

    // Safe trail wrapper methods
    // These ensure the trail only ever restores self.state

    /// Put a label at a ring position, with trail recording.
    ///
    /// # Panics
    ///
    /// Panics if the position is outside the ring, the label is not in
    /// 1..=2n, or the label is already placed.
    pub fn place(&mut self, position: usize, label: u64) {
        let nodes = self.size().node_count();
        assert!(position < nodes, "Ring position out of bounds: {}", position);
        assert!(
            (1..=nodes as u64).contains(&label),
            "Label out of range: {}",
            label
        );
        assert!(!self.is_placed(label), "Label already placed: {}", label);

        let slots = &mut self.state.slots;
        self.trail.record_change(position, slots[position]);
        slots[position] = label;
        self.trail.record_change(PLACED_SLOT, slots[PLACED_SLOT]);
        slots[PLACED_SLOT] |= 1 << label;
    }

    /// Whether the label is already on the ring.
    pub fn is_placed(&self, label: u64) -> bool {
        self.state.is_placed(label)
    }

    /// Undo every placement made after the checkpoint.
    pub fn rewind_to(&mut self, checkpoint: usize) {
        self.trail.rewind_to(checkpoint, &mut self.state.slots);
    }

    /// The 2n ring labels: external nodes, then internal nodes.
    pub fn ring(&self) -> &[u64] {
        &self.state.labels()[..self.size().node_count()]
    }

    /// The n external node labels, clockwise.
    pub fn external_nodes(&self) -> &[u64] {
        &self.state.labels()[..self.size().n()]
    }

    /// Labels of each line, in line order.
    pub fn line_values(&self) -> Vec<[u64; 3]> {
        let ring = self.ring();
        self.memo.lines.iter().map(|line| line.values(ring)).collect()
    }
}
