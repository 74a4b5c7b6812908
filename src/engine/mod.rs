// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Non-deterministic search engine.
//!
//! This module implements a backtracking search engine that runs predicates
//! in sequence. The engine coordinates with the trail system to provide
//! automatic state restoration on backtracking.
//!
//! # Architecture
//!
//! The engine maintains a stack of predicate execution states. Each stack entry tracks:
//! - Which predicate is executing
//! - Current round number (for predicates that execute multiple times)
//! - Choice mode state (whether we're trying alternatives)
//! - Current choice index (when in choice mode)
//!
//! The engine follows a WAM-like execution model:
//! 1. Call try_pred(round) on each predicate
//! 2. If Success: advance to next predicate
//! 3. If SuccessSamePredicate: increment round, stay at same predicate
//! 4. If Choices(n): enter choice mode, call retry_pred(round, 0..n-1)
//! 5. If Failure: backtrack to previous stack entry
//! 6. If Suspend: pause and return control to caller
//! 7. On backtracking into an entry whose try_pred succeeded, pop it: a
//!    deterministic success has no alternatives
//!
//! # Example
//!
//! ```
//! use magic_ring_search::context::SearchContext;
//! use magic_ring_search::engine::EngineBuilder;
//! use magic_ring_search::geometry::RingSize;
//! use magic_ring_search::predicates::test::{IntegerRangePredicate, SuspendPredicate};
//!
//! let mut ctx = SearchContext::new(RingSize::try_from(3).unwrap());
//! // All WAM programs must end with FAIL or SUSPEND
//! let engine = EngineBuilder::new()
//!     .add(Box::new(IntegerRangePredicate::new(1, 4)))
//!     .terminal(Box::new(SuspendPredicate))
//!     .build();
//!
//! // Engine is consumed, returns Some(engine) if suspended
//! if let Some(_engine) = engine.search(&mut ctx) {
//!     // Can resume with _engine.search(&mut ctx)
//! }
//! ```

pub mod predicate;

pub use predicate::{Predicate, PredicateResult, TerminalPredicate};

use tracing::{debug, trace};

use crate::context::SearchContext;

/// Maximum depth of the predicate stack.
const MAX_STACK_SIZE: usize = 1000;

/// Stack entry tracking the state of one predicate execution.
#[derive(Debug)]
struct StackEntry {
    /// Index of the predicate in the predicates list.
    predicate_index: usize,

    /// Current round number (incremented by SuccessSamePredicate).
    round: usize,

    /// Whether we're in choice mode (exploring alternatives).
    in_choice_mode: bool,

    /// Current choice being tried (when in_choice_mode is true).
    current_choice: usize,

    /// Total number of choices (when in_choice_mode is true).
    num_choices: usize,

    /// Trail checkpoint for this stack entry.
    trail_checkpoint: usize,
}

/// Builds a predicate sequence that is guaranteed to end with a terminal predicate.
///
/// `terminal` only accepts [`TerminalPredicate`] implementors, and is the
/// only way to obtain a [`TerminatedBuilder`], so a program without a FAIL
/// or SUSPEND at the end does not type-check.
#[derive(Debug, Default)]
pub struct EngineBuilder {
    predicates: Vec<Box<dyn Predicate>>,
}

impl EngineBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a predicate to the sequence.
    pub fn add(mut self, predicate: Box<dyn Predicate>) -> Self {
        self.predicates.push(predicate);
        self
    }

    /// Append the terminal predicate that ends the sequence.
    pub fn terminal<T: TerminalPredicate + 'static>(mut self, predicate: Box<T>) -> TerminatedBuilder {
        self.predicates.push(predicate);
        TerminatedBuilder {
            predicates: self.predicates,
        }
    }
}

/// A predicate sequence ending in a terminal predicate, ready to build.
#[derive(Debug)]
pub struct TerminatedBuilder {
    predicates: Vec<Box<dyn Predicate>>,
}

impl TerminatedBuilder {
    pub fn build(self) -> SearchEngine {
        SearchEngine::new(self.predicates)
    }
}

/// Search engine that coordinates predicate execution and backtracking.
///
/// The engine runs predicates in sequence, managing rounds, choices, and
/// backtracking automatically via the trail system.
#[derive(Debug)]
pub struct SearchEngine {
    /// List of predicates to execute in sequence.
    predicates: Vec<Box<dyn Predicate>>,

    /// Stack of predicate execution states.
    stack: Vec<StackEntry>,

    /// Statistics: number of try_pred calls.
    try_count: u64,

    /// Statistics: number of retry_pred calls (backtracks).
    retry_count: u64,
}

impl SearchEngine {
    /// Create a new search engine with the given predicates.
    ///
    /// Prefer [`EngineBuilder`], which checks that the sequence ends with a
    /// terminal predicate.
    pub fn new(predicates: Vec<Box<dyn Predicate>>) -> Self {
        Self {
            predicates,
            stack: Vec::with_capacity(MAX_STACK_SIZE),
            try_count: 0,
            retry_count: 0,
        }
    }

    /// Run the search.
    ///
    /// Consumes the engine and returns:
    /// - `Some(engine)` if suspended - can resume by calling search() again
    /// - `None` if exhausted (backtracked past first predicate) - search is complete
    ///
    /// Results are produced via side effects on `ctx`, not by the return value.
    /// A ring search ends with `FailPredicate`, so it always runs to exhaustion
    /// and returns `None`.
    ///
    /// # Panics
    ///
    /// Panics if the predicate sequence reaches its end without FAIL or SUSPEND,
    /// or if the stack grows beyond its maximum depth.
    pub fn search(mut self, ctx: &mut SearchContext) -> Option<Self> {
        if self.stack.is_empty() {
            // Fresh start: first predicate, empty counters
            self.try_count = 0;
            self.retry_count = 0;

            if self.predicates.is_empty() {
                return None; // Empty is exhausted
            }

            self.stack.push(StackEntry {
                predicate_index: 0,
                round: 0,
                in_choice_mode: false,
                current_choice: 0,
                num_choices: 0,
                trail_checkpoint: ctx.trail.len(),
            });
        } else if let Some(entry) = self.stack.last() {
            // Resuming after Suspend: the suspending predicate fails on resume
            trace!("resuming after {}", self.predicates[entry.predicate_index].name());
            self.stack.pop();
        }

        // Main execution loop
        loop {
            // Check if we've backtracked past the first predicate
            let Some(entry) = self.stack.last_mut() else {
                // Search exhausted (all choices failed)
                debug!(tries = self.try_count, retries = self.retry_count, "search exhausted");
                return None;
            };

            // Rewind trail to this entry's checkpoint
            ctx.rewind_to(entry.trail_checkpoint);

            if !entry.in_choice_mode {
                // Call mode: try_pred
                let pred_idx = entry.predicate_index;
                let round = entry.round;
                self.try_count += 1;
                let result = self.predicates[pred_idx].try_pred(ctx, round);

                match result {
                    PredicateResult::Success => {
                        self.mark_deterministic();
                        self.push_next_predicate(ctx);
                    }
                    PredicateResult::SuccessSamePredicate => {
                        self.mark_deterministic();
                        self.push_same_predicate(ctx);
                    }
                    PredicateResult::Failure => {
                        self.stack.pop();
                    }
                    PredicateResult::Choices(n) => {
                        // Enter choice mode; entry still refers to the top of the stack
                        if let Some(entry) = self.stack.last_mut() {
                            entry.in_choice_mode = true;
                            entry.current_choice = 0;
                            entry.num_choices = n;
                            entry.trail_checkpoint = ctx.trail.len();
                        }
                    }
                    PredicateResult::Suspend => {
                        // Pause execution, return engine for resumption
                        return Some(self);
                    }
                }
            } else {
                // Choice mode: retry_pred
                if entry.current_choice >= entry.num_choices {
                    // Exhausted all choices
                    self.stack.pop();
                    continue;
                }

                let pred_idx = entry.predicate_index;
                let round = entry.round;
                let choice = entry.current_choice;
                entry.current_choice += 1;
                self.retry_count += 1;
                let result = self.predicates[pred_idx].retry_pred(ctx, round, choice);

                match result {
                    PredicateResult::Success => {
                        self.push_next_predicate(ctx);
                    }
                    PredicateResult::SuccessSamePredicate => {
                        self.push_same_predicate(ctx);
                    }
                    PredicateResult::Failure => {
                        // Try next choice (loop continues)
                    }
                    PredicateResult::Choices(_) | PredicateResult::Suspend => {
                        panic!("retry_pred returned invalid result: {:?}", result);
                    }
                }
            }
        }
    }

    /// Push a new stack entry for the next predicate in sequence.
    ///
    /// Panics if we've reached the end of the predicate sequence, as this indicates
    /// an invalid program (all valid programs must end with FAIL or SUSPEND).
    fn push_next_predicate(&mut self, ctx: &SearchContext) {
        let next_index = self.top().predicate_index + 1;

        if next_index >= self.predicates.len() {
            panic!(
                "Invalid predicate sequence: reached end without FAIL or SUSPEND. \
                 All WAM programs must terminate with a FAIL or SUSPEND predicate."
            );
        }

        self.push(next_index, 0, ctx);
    }

    /// Push a new stack entry for the same predicate with incremented round.
    fn push_same_predicate(&mut self, ctx: &SearchContext) {
        let current = self.top();
        let (pred_index, next_round) = (current.predicate_index, current.round + 1);
        self.push(pred_index, next_round, ctx);
    }

    /// A try_pred success leaves no alternatives: backtracking into the top
    /// entry must pop it rather than call try_pred again.
    fn mark_deterministic(&mut self) {
        if let Some(entry) = self.stack.last_mut() {
            entry.in_choice_mode = true;
            entry.current_choice = 0;
            entry.num_choices = 0;
        }
    }

    fn top(&self) -> &StackEntry {
        self.stack
            .last()
            .unwrap_or_else(|| panic!("Engine stack is empty"))
    }

    fn push(&mut self, predicate_index: usize, round: usize, ctx: &SearchContext) {
        if self.stack.len() >= MAX_STACK_SIZE {
            panic!("Engine stack overflow: exceeded {} entries", MAX_STACK_SIZE);
        }
        self.stack.push(StackEntry {
            predicate_index,
            round,
            in_choice_mode: false,
            current_choice: 0,
            num_choices: 0,
            trail_checkpoint: ctx.trail.len(),
        });
    }

    /// Get statistics about the search.
    ///
    /// Returns (try_count, retry_count) showing how many times predicates
    /// were tried and retried.
    pub fn statistics(&self) -> (u64, u64) {
        (self.try_count, self.retry_count)
    }
}
