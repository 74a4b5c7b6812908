// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Constants bounding the supported ring sizes.
//!
//! A magic n-gon ring has n external nodes and n internal nodes, labelled
//! with 1..=2n. The search is brute force over all (2n)! labellings, so only
//! the small sizes 3, 4 and 5 are supported.

/// Smallest supported n.
pub const MIN_SIDES: usize = 3;

/// Largest supported n.
pub const MAX_SIDES: usize = 5;

/// Number of nodes (and labels) in the largest ring.
pub const MAX_NODES: usize = 2 * MAX_SIDES;

/// The label that must sit on an external node of a 5-gon ring.
///
/// With 10 outside, it appears in exactly one line and the concatenation
/// has 16 digits; with 10 inside it appears twice, giving 17 digits.
pub const TEN: u64 = 10;

/// Compute factorial at compile time.
pub const fn factorial(n: usize) -> usize {
    match n {
        0 | 1 => 1,
        _ => n * factorial(n - 1),
    }
}

/// Number of candidate rings examined for the largest size (10!).
pub const MAX_CANDIDATES: usize = factorial(MAX_NODES);

// Labels are tracked as bits of a u64 mask.
const _: () = assert!(MAX_NODES < 64, "label mask must fit in u64");
