// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Ring solver: validates n, runs the search, and reports the result.

use std::cmp::Reverse;
use std::fmt;

use tracing::{debug, info};

use crate::context::SearchContext;
use crate::engine::{EngineBuilder, SearchEngine};
use crate::error::RingResult;
use crate::geometry::RingSize;
use crate::predicates::{
    CanonicalRotationPredicate, FailPredicate, MagicSumPredicate, PlaceNodePredicate,
    RecordSolutionPredicate, TenOutsidePredicate,
};
use crate::state::{Counters, Solution, Statistics};

/// The outcome of a search: every solution, and the largest concatenation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RingReport {
    size: RingSize,
    /// Sorted by description, descending
    solutions: Vec<Solution>,
    maximum: u64,
}

impl RingReport {
    fn new(size: RingSize, mut solutions: Vec<Solution>, maximum: u64) -> Self {
        solutions.sort_by_cached_key(|solution| Reverse(solution.description()));
        Self {
            size,
            solutions,
            maximum,
        }
    }

    pub fn size(&self) -> RingSize {
        self.size
    }

    /// Solutions in descending order of description.
    pub fn solutions(&self) -> &[Solution] {
        &self.solutions
    }

    /// `a,b,c; d,e,f; ...` descriptions in descending string order.
    pub fn descriptions(&self) -> Vec<String> {
        self.solutions.iter().map(Solution::description).collect()
    }

    /// The largest concatenation, or 0 when there is no solution.
    pub fn maximum(&self) -> u64 {
        self.maximum
    }

    pub fn solution_count(&self) -> usize {
        self.solutions.len()
    }

    /// The distinct magic totals, ascending.
    pub fn magic_totals(&self) -> Vec<u64> {
        let mut totals: Vec<u64> = self
            .solutions
            .iter()
            .filter_map(Solution::magic_total)
            .collect();
        totals.sort_unstable();
        totals.dedup();
        totals
    }

    /// The (descriptions, maximum) pair.
    pub fn into_parts(self) -> (Vec<String>, u64) {
        (self.descriptions(), self.maximum)
    }
}

impl fmt::Display for RingReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Solutions for a magic {}-gon ring:", self.size.n())?;
        for solution in &self.solutions {
            writeln!(f, "  {}", solution)?;
        }
        writeln!(f)?;
        writeln!(f, "Maximum solution string:")?;
        writeln!(f, "  {}", self.maximum)
    }
}

/// The predicate program for a ring search.
///
/// Ends with `FailPredicate`, so a search runs until every labelling has
/// been tried.
pub fn build_engine() -> SearchEngine {
    EngineBuilder::new()
        .add(Box::new(PlaceNodePredicate::new()))
        .add(Statistics::counting_predicate(Counters::Candidates, None))
        .add(Box::new(TenOutsidePredicate))
        .add(Box::new(CanonicalRotationPredicate))
        .add(Box::new(MagicSumPredicate))
        .add(Box::new(RecordSolutionPredicate))
        .terminal(Box::new(FailPredicate))
        .build()
}

/// Search a ring of the given size, returning the report and the search counters.
pub fn search_with_statistics(size: RingSize) -> (RingReport, Statistics) {
    info!("searching {} ({} candidates)", size, size.candidate_count());

    let mut ctx = SearchContext::new(size);
    // FailPredicate is terminal, so the engine never suspends
    if let Some(engine) = build_engine().search(&mut ctx) {
        let (tries, retries) = engine.statistics();
        debug!(tries, retries, "search suspended");
    }

    let SearchContext {
        solutions,
        statistics,
        ..
    } = ctx;
    let maximum = solutions.maximum();
    let report = RingReport::new(size, solutions.into_solutions(), maximum);
    info!(
        solutions = report.solution_count(),
        maximum = report.maximum(),
        "search of {} complete",
        size
    );
    (report, statistics)
}

/// Search a ring of a size already known to be valid.
pub fn solve_size(size: RingSize) -> RingReport {
    search_with_statistics(size).0
}

/// Find every magic n-gon ring.
///
/// Returns the solutions and the maximum concatenation, or
/// `RingError::InvalidArgument` if n is not in [3, 5].
///
/// # Example
///
/// ```
/// let report = magic_ring_search::solve(3).unwrap();
/// assert_eq!(report.solution_count(), 8);
/// assert_eq!(report.maximum(), 432621513);
/// assert!(magic_ring_search::solve(6).is_err());
/// ```
pub fn solve(n: i64) -> RingResult<RingReport> {
    let size = RingSize::try_from(n)?;
    Ok(solve_size(size))
}
