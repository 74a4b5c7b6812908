// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! PlaceNodePredicate - enumerates ring labellings.

use crate::context::SearchContext;
use crate::engine::{Predicate, PredicateResult};

/// PlaceNodePredicate labels the ring one position per round.
///
/// Runs for rounds 0..=2n. In round r < 2n it offers 2n choices; choice c
/// places label c + 1 at position r, and fails if that label is already on
/// the ring. Round 2n finds the ring complete and succeeds.
///
/// Choices are tried in increasing label order, so complete rings are
/// produced in lexicographic order and only one exists at a time.
#[derive(Debug, Default)]
pub struct PlaceNodePredicate;

impl PlaceNodePredicate {
    pub fn new() -> Self {
        Self
    }
}

impl Predicate for PlaceNodePredicate {
    fn try_pred(&mut self, ctx: &mut SearchContext, round: usize) -> PredicateResult {
        let nodes = ctx.size().node_count();
        if round < nodes {
            PredicateResult::Choices(nodes)
        } else {
            PredicateResult::Success
        }
    }

    fn retry_pred(&mut self, ctx: &mut SearchContext, round: usize, choice: usize) -> PredicateResult {
        let label = choice as u64 + 1;
        if ctx.is_placed(label) {
            return PredicateResult::Failure;
        }
        ctx.place(round, label);
        PredicateResult::SuccessSamePredicate
    }

    fn name(&self) -> &str {
        "PlaceNode"
    }
}
