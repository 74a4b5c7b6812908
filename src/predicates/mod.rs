// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Search predicates.
//!
//! This module contains the predicates used in the ring search.
//!
//! # Organization
//!
//! - `placement`: PlaceNodePredicate, which enumerates every labelling of the ring
//! - `filters`: the tests a complete ring must pass to be a solution
//! - `record`: RecordSolutionPredicate, which keeps accepted rings
//! - `test`: Simple test predicates for validating the engine
//! - Built-in predicate: `FailPredicate`
//!
//! # Program
//!
//! A ring search is the predicate sequence
//!
//! ```text
//! PlaceNode -> count Candidates -> TenOutside -> CanonicalRotation
//!           -> MagicSum -> RecordSolution -> Fail
//! ```
//!
//! The final `Fail` forces the engine to backtrack into every remaining
//! choice, so the whole permutation space is visited one ring at a time.

pub mod filters;
pub mod placement;
pub mod record;

// Re-export main predicates for convenience
pub use filters::{CanonicalRotationPredicate, MagicSumPredicate, TenOutsidePredicate};
pub use placement::PlaceNodePredicate;
pub use record::RecordSolutionPredicate;

use crate::context::SearchContext;
use crate::engine::{Predicate, PredicateResult, TerminalPredicate};

/// Built-in fail predicate (Prolog's `fail.`).
///
/// This predicate always fails, forcing backtracking. It's a terminal predicate
/// that ends a search path without success, similar to Prolog's `fail.` built-in.
///
/// # Example
///
/// ```
/// use magic_ring_search::context::SearchContext;
/// use magic_ring_search::engine::EngineBuilder;
/// use magic_ring_search::geometry::RingSize;
/// use magic_ring_search::predicates::FailPredicate;
/// use magic_ring_search::predicates::test::IntegerRangePredicate;
///
/// let mut ctx = SearchContext::new(RingSize::try_from(3).unwrap());
/// let engine = EngineBuilder::new()
///     .add(Box::new(IntegerRangePredicate::new(1, 3)))
///     .terminal(Box::new(FailPredicate))
///     .build();
///
/// // Engine will exhaust all integer choices then fail
/// let result = engine.search(&mut ctx);
/// assert!(result.is_none()); // Failed - engine consumed
/// ```
#[derive(Debug)]
pub struct FailPredicate;

impl Predicate for FailPredicate {
    fn try_pred(&mut self, _ctx: &mut SearchContext, _round: usize) -> PredicateResult {
        PredicateResult::Failure
    }

    fn retry_pred(
        &mut self,
        _ctx: &mut SearchContext,
        _round: usize,
        _choice: usize,
    ) -> PredicateResult {
        PredicateResult::Failure
    }

    fn name(&self) -> &str {
        "Fail"
    }
}

/// FailPredicate is a terminal predicate (like Prolog's fail.).
impl TerminalPredicate for FailPredicate {}
