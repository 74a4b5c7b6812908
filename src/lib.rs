// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Search for magic n-gon rings, for n = 3, 4 and 5.
//!
//! A magic n-gon ring places the labels 1..=2n on n external and n internal
//! nodes so that each of the n lines (an external node and the two internal
//! nodes beside it) has the same sum, the magic total. Working clockwise from
//! the line with the numerically lowest external node, each solution has a
//! unique description such as `4,3,2; 6,2,1; 5,1,3`. Concatenating those
//! digits gives a number; the search reports every description together with
//! the largest such number. For n = 5 only rings with 10 on an external node
//! are counted, so that the number has 16 digits rather than 17.
//!
//! # Architecture
//!
//! The implementation uses a two-tier memory model:
//!
//! ## Tier 1: MEMO Data (Immutable)
//!
//! - The validated ring size
//! - The n lines, as triples of ring positions
//!
//! ## Tier 2: DYNAMIC Data (Mutable)
//!
//! Search state that changes during search, tracked on the trail:
//! - Trail - records state changes for O(1) backtracking
//! - RingState - the label at each position and the set of labels used
//!
//! # Search Algorithm
//!
//! The search is brute force. `PlaceNodePredicate` labels the ring one
//! position at a time, producing every one of the (2n)! labellings in
//! lexicographic order without ever holding more than one. Each complete ring
//! then passes through the filters:
//!
//! 1. **TenOutsidePredicate**: for n = 5, 10 must be an external node
//! 2. **CanonicalRotationPredicate**: external node 0 must be the smallest
//! 3. **MagicSumPredicate**: every line must have the same sum
//!
//! Rings that pass all three are recorded, and a terminal `FailPredicate`
//! backtracks into the next labelling until the space is exhausted.
//!
//! # Example
//!
//! ```
//! let report = magic_ring_search::solve(3).unwrap();
//! let (descriptions, maximum) = report.into_parts();
//! assert_eq!(descriptions.len(), 8);
//! assert_eq!(descriptions[0], "4,3,2; 6,2,1; 5,1,3");
//! assert_eq!(maximum, 432621513);
//! ```

pub mod context;
pub mod engine;
pub mod error;
pub mod geometry;
pub mod predicates;
pub mod solver;
pub mod state;
pub mod trail;

// Re-export commonly used types
pub use context::SearchContext;
pub use engine::{EngineBuilder, Predicate, PredicateResult, SearchEngine};
pub use error::{RingError, RingResult};
pub use geometry::RingSize;
pub use solver::{solve, solve_size, RingReport};
pub use trail::Trail;
