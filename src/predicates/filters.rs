// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Filters on complete rings.
//!
//! Each filter is a deterministic predicate: it succeeds when the ring
//! passes, and otherwise counts the rejection and fails. They run in the
//! order TenOutside, CanonicalRotation, MagicSum; a ring must pass all three
//! to be recorded.

use crate::context::SearchContext;
use crate::engine::{Predicate, PredicateResult};
use crate::geometry::TEN;
use crate::state::Counters;

fn reject(ctx: &mut SearchContext, counter: Counters) -> PredicateResult {
    ctx.statistics.increment_counter(counter);
    PredicateResult::Failure
}

/// Rejects 5-gon rings with 10 on an internal node.
///
/// An internal 10 appears in two lines and makes a 17-digit concatenation;
/// only 16-digit strings are wanted. Smaller rings always pass.
#[derive(Debug, Default)]
pub struct TenOutsidePredicate;

impl Predicate for TenOutsidePredicate {
    fn try_pred(&mut self, ctx: &mut SearchContext, _round: usize) -> PredicateResult {
        if !ctx.size().requires_ten_outside() || ctx.external_nodes().contains(&TEN) {
            PredicateResult::Success
        } else {
            reject(ctx, Counters::MissingTen)
        }
    }

    fn name(&self) -> &str {
        "TenOutside"
    }
}

/// Rejects rings whose first external node is not the smallest one.
///
/// Of the n rotations of a ring exactly one starts at its lowest external
/// node, so this keeps one description per solution. Reflections are
/// different clockwise readings and are kept.
#[derive(Debug, Default)]
pub struct CanonicalRotationPredicate;

impl Predicate for CanonicalRotationPredicate {
    fn try_pred(&mut self, ctx: &mut SearchContext, _round: usize) -> PredicateResult {
        let external = ctx.external_nodes();
        if external.iter().min() == external.first() {
            PredicateResult::Success
        } else {
            reject(ctx, Counters::NonCanonical)
        }
    }

    fn name(&self) -> &str {
        "CanonicalRotation"
    }
}

/// Rejects rings whose lines do not all have the same sum.
#[derive(Debug, Default)]
pub struct MagicSumPredicate;

impl Predicate for MagicSumPredicate {
    fn try_pred(&mut self, ctx: &mut SearchContext, _round: usize) -> PredicateResult {
        let ring = ctx.ring();
        let mut sums = ctx.memo.lines.iter().map(|line| line.sum(ring));
        let magic = match sums.next() {
            Some(first) => sums.all(|sum| sum == first),
            None => true,
        };
        if magic {
            PredicateResult::Success
        } else {
            reject(ctx, Counters::UnequalSums)
        }
    }

    fn name(&self) -> &str {
        "MagicSum"
    }
}
