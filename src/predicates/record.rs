// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! RecordSolutionPredicate - keeps rings that passed every filter.

use tracing::debug;

use crate::context::SearchContext;
use crate::engine::{Predicate, PredicateResult};
use crate::state::{Counters, Solution};

/// Appends the current ring to the context's solution log.
///
/// Place it after the filters: it records whatever ring reaches it.
#[derive(Debug, Default)]
pub struct RecordSolutionPredicate;

impl Predicate for RecordSolutionPredicate {
    fn try_pred(&mut self, ctx: &mut SearchContext, _round: usize) -> PredicateResult {
        let solution = Solution::from_ring(ctx.ring(), &ctx.memo.lines);
        debug!(
            total = ?solution.magic_total(),
            concatenation = solution.concatenation(),
            "solution {}",
            solution
        );
        ctx.solutions.record(solution);
        ctx.statistics.increment_counter(Counters::Solutions);
        PredicateResult::Success
    }

    fn name(&self) -> &str {
        "RecordSolution"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::RingSize;

    #[test]
    fn test_records_current_ring() {
        let mut ctx = SearchContext::new(RingSize::try_from(3).unwrap());
        for (position, label) in [2, 4, 6, 5, 1, 3].into_iter().enumerate() {
            ctx.place(position, label);
        }

        assert_eq!(RecordSolutionPredicate.try_pred(&mut ctx, 0), PredicateResult::Success);
        assert_eq!(ctx.solutions.len(), 1);
        assert_eq!(ctx.solutions.solutions()[0].description(), "2,5,1; 4,1,3; 6,3,5");
        assert_eq!(ctx.solutions.maximum(), 251_413_635);
        assert_eq!(ctx.statistics.get(Counters::Solutions), 1);
    }
}
