// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Integration tests for the search engine.
//!
//! These tests validate that the engine correctly:
//! - Runs predicates in sequence
//! - Handles Choices and retry_pred correctly
//! - Backtracks on failure
//! - Restores state via trail
//! - Supports SuccessSamePredicate for multi-round predicates
//! - Suspends execution when requested, and resumes where it left off

use magic_ring_search::context::SearchContext;
use magic_ring_search::engine::EngineBuilder;
use magic_ring_search::predicates::test::{
    IntegerRangePredicate, MultiRoundPredicate, SuspendPredicate,
};
use magic_ring_search::predicates::{FailPredicate, PlaceNodePredicate};
use magic_ring_search::RingSize;

fn context(n: i64) -> SearchContext {
    SearchContext::new(RingSize::try_from(n).unwrap())
}

#[test]
fn test_simple_integer_search_with_suspend() {
    let mut ctx = context(3);
    let engine = EngineBuilder::new()
        .add(Box::new(IntegerRangePredicate::new(1, 11)))
        .terminal(Box::new(SuspendPredicate))
        .build();

    let engine = engine.search(&mut ctx).unwrap();
    let (tries, retries) = engine.statistics();
    assert_eq!(tries, 2); // IntegerRange.try_pred + Suspend.try_pred
    assert_eq!(retries, 1); // IntegerRange.retry_pred(choice=0)
}

#[test]
fn test_two_integer_ranges() {
    let mut ctx = context(3);
    let engine = EngineBuilder::new()
        .add(Box::new(IntegerRangePredicate::new(1, 3)))
        .add(Box::new(IntegerRangePredicate::new(10, 12)))
        .terminal(Box::new(SuspendPredicate))
        .build();

    let engine = engine.search(&mut ctx).unwrap();
    let (tries, retries) = engine.statistics();
    assert_eq!(tries, 3);
    assert_eq!(retries, 2);
}

#[test]
fn test_resume_visits_every_combination() {
    let mut ctx = context(3);
    let mut engine = Some(
        EngineBuilder::new()
            .add(Box::new(IntegerRangePredicate::new(1, 4)))
            .add(Box::new(IntegerRangePredicate::new(10, 12)))
            .terminal(Box::new(SuspendPredicate))
            .build(),
    );

    let mut suspensions = 0;
    while let Some(suspended) = engine.take().and_then(|e| e.search(&mut ctx)) {
        suspensions += 1;
        engine = Some(suspended);
    }
    assert_eq!(suspensions, 6);
}

#[test]
fn test_backtracking_exhausts_options() {
    let mut ctx = context(3);
    let engine = EngineBuilder::new()
        .add(Box::new(IntegerRangePredicate::new(1, 4)))
        .add(Box::new(IntegerRangePredicate::new(10, 13)))
        .terminal(Box::new(FailPredicate))
        .build();

    assert!(engine.search(&mut ctx).is_none());
}

#[test]
fn test_empty_search_space() {
    let mut ctx = context(3);
    let engine = EngineBuilder::new()
        .add(Box::new(IntegerRangePredicate::new(1, 1)))
        .terminal(Box::new(SuspendPredicate))
        .build();

    assert!(engine.search(&mut ctx).is_none());
}

#[test]
fn test_multi_round_predicate() {
    let mut ctx = context(3);
    let engine = EngineBuilder::new()
        .add(Box::new(MultiRoundPredicate::new(3)))
        .terminal(Box::new(SuspendPredicate))
        .build();

    let engine = engine.search(&mut ctx).unwrap();
    let (tries, retries) = engine.statistics();

    // MultiRound(0, 1, 2) + Suspend
    assert_eq!(tries, 4);
    assert_eq!(retries, 0);

    // Every round succeeded deterministically, so resuming exhausts
    assert!(engine.search(&mut ctx).is_none());
}

#[test]
fn test_empty_predicates() {
    let mut ctx = context(3);
    let engine = EngineBuilder::new()
        .terminal(Box::new(SuspendPredicate))
        .build();

    assert!(engine.search(&mut ctx).is_some());
}

#[test]
fn test_rings_in_lexicographic_order() {
    let mut ctx = context(3);
    let engine = EngineBuilder::new()
        .add(Box::new(PlaceNodePredicate::new()))
        .terminal(Box::new(SuspendPredicate))
        .build();

    let engine = engine.search(&mut ctx).unwrap();
    assert_eq!(ctx.ring(), &[1, 2, 3, 4, 5, 6]);

    let engine = engine.search(&mut ctx).unwrap();
    assert_eq!(ctx.ring(), &[1, 2, 3, 4, 6, 5]);

    let _ = engine.search(&mut ctx).unwrap();
    assert_eq!(ctx.ring(), &[1, 2, 3, 5, 4, 6]);
}

#[test]
fn test_every_ring_visited_once() {
    let mut ctx = context(3);
    let mut engine = Some(
        EngineBuilder::new()
            .add(Box::new(PlaceNodePredicate::new()))
            .terminal(Box::new(SuspendPredicate))
            .build(),
    );

    let mut rings: Vec<Vec<u64>> = Vec::new();
    while let Some(suspended) = engine.take().and_then(|e| e.search(&mut ctx)) {
        rings.push(ctx.ring().to_vec());
        engine = Some(suspended);
    }

    assert_eq!(rings.len(), 720);
    assert!(rings.windows(2).all(|pair| pair[0] < pair[1]));

    // The trail undid every placement
    assert!(ctx.trail.is_empty());
    assert!((1..=6).all(|label| !ctx.is_placed(label)));
}
