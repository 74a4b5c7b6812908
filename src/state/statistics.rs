// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Statistics
//!
//! Statistics are stored in the context, and can be incremented by special predicates,
//! or by the filter predicates when they reject a candidate.

use crate::context::SearchContext;
use crate::engine::{Predicate, PredicateResult};
use strum::{EnumCount, IntoEnumIterator};
use strum_macros::{EnumCount as EnumCountMacro, EnumIter, IntoStaticStr};

#[derive(EnumCountMacro, EnumIter, IntoStaticStr, Debug, Copy, Clone, PartialEq, Eq)]
#[strum(serialize_all = "snake_case")]
#[repr(u8)]
pub enum Counters {
    /// Complete rings handed to the filters.
    Candidates,
    /// 5-gon rings rejected because 10 is an internal node.
    MissingTen,
    /// Rings rejected because external node 0 is not the smallest.
    NonCanonical,
    /// Rings rejected because the line sums differ.
    UnequalSums,
    /// Rings accepted as solutions.
    Solutions,
}

const COUNT: usize = Counters::COUNT;

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Statistics {
    stats: [u64; COUNT],
}

impl Statistics {
    pub fn new() -> Self {
        Statistics::default()
    }
    /// A predicate that will increment the given counter, whenever a condition holds (or always).
    pub fn counting_predicate(
        counter: Counters,
        filter: Option<fn(&SearchContext) -> bool>,
    ) -> Box<dyn Predicate> {
        Box::new(CountingPredicate {
            filter: filter.unwrap_or(|_ctxt| true),
            counter,
        })
    }
    /// Increment the specified counter by 1.
    pub(crate) fn increment_counter(&mut self, counter: Counters) {
        self.stats[counter as usize] += 1;
    }

    /// Get the current value of the specified counter.
    pub fn get(&self, counter: Counters) -> u64 {
        self.stats[counter as usize]
    }

    /// Every counter with its snake_case name, in declaration order.
    pub fn entries(&self) -> impl Iterator<Item = (&'static str, u64)> + '_ {
        Counters::iter().map(|counter| (counter.into(), self.get(counter)))
    }
}

#[derive(Debug)]
struct CountingPredicate {
    filter: fn(&SearchContext) -> bool,
    counter: Counters,
}

impl Predicate for CountingPredicate {
    fn try_pred(&mut self, ctx: &mut SearchContext, _round: usize) -> PredicateResult {
        if (self.filter)(ctx) {
            let statistics = &mut ctx.statistics;
            statistics.increment_counter(self.counter);
        }
        PredicateResult::Success
    }

    fn name(&self) -> &str {
        "Counting"
    }
}
