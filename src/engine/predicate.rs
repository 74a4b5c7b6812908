// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Predicate trait for non-deterministic search.
//!
//! The search engine works by trying predicates in sequence. Each predicate
//! is either a choice point (placing a label) or a test on the current ring
//! (a filter). Predicates can succeed, fail, or offer choices.
//!
//! # Example
//!
//! ```
//! use magic_ring_search::engine::{Predicate, PredicateResult};
//! use magic_ring_search::context::SearchContext;
//!
//! #[derive(Debug)]
//! struct FirstLabelIsOne;
//!
//! impl Predicate for FirstLabelIsOne {
//!     fn try_pred(&mut self, ctx: &mut SearchContext, _round: usize) -> PredicateResult {
//!         if ctx.ring()[0] == 1 {
//!             PredicateResult::Success
//!         } else {
//!             PredicateResult::Failure
//!         }
//!     }
//!
//!     fn name(&self) -> &str {
//!         "FirstLabelIsOne"
//!     }
//! }
//! ```

use std::fmt::Debug;
use crate::context::SearchContext;

/// Result of attempting a predicate.
///
/// Predicates can return:
/// - `Success`: Move to next predicate in the sequence
/// - `SuccessSamePredicate`: Stay at same predicate, increment round (for iterative predicates)
/// - `Failure`: Backtrack to previous predicate
/// - `Choices(n)`: Predicate has n choices to explore via retry_pred
/// - `Suspend`: Pause execution for testing/inspection
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PredicateResult {
    /// Predicate succeeded. Move to next predicate in sequence.
    Success,

    /// Predicate succeeded but stay at same predicate with next round.
    /// Allows a single predicate to execute multiple times (e.g., once per ring position).
    SuccessSamePredicate,

    /// Predicate has no (more) valid choices. Backtrack to previous predicate.
    Failure,

    /// Predicate has multiple choices to explore.
    /// Engine will call retry_pred(round, choice) for each choice in 0..n.
    Choices(usize),

    /// Suspend execution. Engine returns control with state preserved.
    /// Useful for testing and inspection of intermediate states.
    Suspend,
}

/// A terminal predicate that ends a WAM program.
///
/// Terminal predicates are FAIL or SUSPEND - they never return Success.
/// `EngineBuilder::terminal` only accepts this trait, so every built
/// predicate sequence ends properly.
pub trait TerminalPredicate: Predicate {}

/// Trait for search predicates in the non-deterministic engine.
///
/// The engine calls `try_pred` to attempt the predicate for the first time,
/// and `retry_pred` for each alternative after `try_pred` returns `Choices`.
///
/// # Trail Integration
///
/// Predicates modify ring state through `SearchContext::place`, which
/// records every write. Before each `try_pred` or `retry_pred` the engine
/// rewinds the trail to the checkpoint of the current stack entry, so a
/// predicate always sees the ring as it was before its previous attempt.
pub trait Predicate: Debug {
    /// Try this predicate for a given round.
    ///
    /// The round starts at 0 and increments each time the predicate returns
    /// `SuccessSamePredicate`.
    fn try_pred(&mut self, ctx: &mut SearchContext, round: usize) -> PredicateResult;

    /// Retry this predicate with a specific choice.
    ///
    /// Called after try_pred returns Choices(n), for each choice in 0..n.
    ///
    /// Can return:
    /// - `Success`: This choice succeeded, move to next predicate
    /// - `SuccessSamePredicate`: This choice succeeded, stay at this predicate
    /// - `Failure`: This choice failed, try next choice (or backtrack if no more)
    ///
    /// Note: retry_pred cannot return Choices or Suspend (we're already in choice mode).
    #[allow(unused)]
    fn retry_pred(
        &mut self,
        ctx: &mut SearchContext,
        round: usize,
        choice: usize,
    ) -> PredicateResult {
        // By default, we do not allow retry. Predicates that return Choices
        // must implement this.
        panic!("{}::retry_pred should never be called", self.name());
    }

    /// Optional: Get a name for this predicate (for debugging).
    ///
    /// Default implementation returns the type name.
    fn name(&self) -> &str {
        std::any::type_name::<Self>()
    }
}
