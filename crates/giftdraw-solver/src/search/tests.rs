//! Tests for the assignment search.

use std::collections::HashSet;

use giftdraw_core::{Restriction, RestrictionSet};
use giftdraw_test::{assert_valid_pairs, family_of_thirteen, lettered, participants};

use super::*;
use crate::termination::NodeCountTermination;

fn pairs(mapping: &AssignmentMap) -> Vec<(&str, &str)> {
    mapping
        .iter()
        .map(|(g, r)| (g.as_str(), r.as_str()))
        .collect()
}

fn run(
    participants: &[Participant],
    restrictions: &RestrictionSet,
    seed: u64,
) -> SearchOutcome {
    let mut scope = SearchScope::with_seed(seed);
    AssignmentSearch::unbounded().search(&mut scope, participants, restrictions)
}

#[test]
fn test_two_participants_swap() {
    let people = participants(&["A", "B"]);
    for seed in 0..10 {
        let mapping = run(&people, &RestrictionSet::new(), seed).found().unwrap();
        assert_eq!(mapping["A"].as_str(), "B");
        assert_eq!(mapping["B"].as_str(), "A");
    }
}

#[test]
fn test_three_participants_yield_only_the_two_cycles() {
    let people = participants(&["A", "B", "C"]);
    let mut seen = HashSet::new();

    for seed in 0..200 {
        let mapping = run(&people, &RestrictionSet::new(), seed).found().unwrap();
        assert_valid_pairs(pairs(&mapping), &people, &RestrictionSet::new());
        let cycle = (
            mapping["A"].to_string(),
            mapping["B"].to_string(),
            mapping["C"].to_string(),
        );
        seen.insert(cycle);
    }

    let expected: HashSet<(String, String, String)> = [
        ("B".to_string(), "C".to_string(), "A".to_string()),
        ("C".to_string(), "A".to_string(), "B".to_string()),
    ]
    .into_iter()
    .collect();
    assert_eq!(seen, expected);
}

#[test]
fn test_restricted_giver_routes_elsewhere() {
    let people = participants(&["A", "B", "C", "D"]);
    let restrictions: RestrictionSet = vec![Restriction::new("A", ["B"])].into();

    for seed in 0..100 {
        let mapping = run(&people, &restrictions, seed).found().unwrap();
        assert_ne!(mapping["A"].as_str(), "B");
        assert_valid_pairs(pairs(&mapping), &people, &restrictions);
    }
}

#[test]
fn test_giver_excluding_everyone_is_not_found() {
    let people = participants(&["A", "B", "C", "D"]);
    let restrictions: RestrictionSet = vec![Restriction::new("A", ["B", "C", "D"])].into();

    for seed in 0..20 {
        assert_eq!(
            run(&people, &restrictions, seed),
            SearchOutcome::NotFound(NotFoundReason::Exhausted)
        );
    }
}

#[test]
fn test_receiver_nobody_may_reach_is_not_found() {
    let people = participants(&["A", "B", "C"]);
    let restrictions: RestrictionSet = vec![
        Restriction::new("A", ["C"]),
        Restriction::new("B", ["C"]),
    ]
    .into();

    assert_eq!(
        run(&people, &restrictions, 3),
        SearchOutcome::NotFound(NotFoundReason::Exhausted)
    );
}

#[test]
fn test_family_roster_is_always_valid() {
    let roster = family_of_thirteen();
    for seed in 0..50 {
        let mapping = run(roster.participants(), roster.restrictions(), seed)
            .found()
            .unwrap();
        assert_valid_pairs(pairs(&mapping), roster.participants(), roster.restrictions());
    }
}

#[test]
fn test_larger_unrestricted_roster() {
    let people = lettered(40);
    let mapping = run(&people, &RestrictionSet::new(), 11).found().unwrap();
    assert_valid_pairs(pairs(&mapping), &people, &RestrictionSet::new());
}

#[test]
fn test_same_seed_same_mapping() {
    let roster = family_of_thirteen();
    let first = run(roster.participants(), roster.restrictions(), 99);
    let second = run(roster.participants(), roster.restrictions(), 99);
    assert_eq!(first, second);
}

#[test]
fn test_different_seeds_vary_the_draw() {
    let people = lettered(8);
    let distinct: HashSet<Vec<(String, String)>> = (0..30)
        .map(|seed| {
            run(&people, &RestrictionSet::new(), seed)
                .found()
                .unwrap()
                .into_iter()
                .map(|(g, r)| (g.to_string(), r.to_string()))
                .collect()
        })
        .collect();
    assert!(distinct.len() > 1);
}

#[test]
fn test_mapping_follows_shuffled_giver_order() {
    let people = lettered(6);
    let mut orders = HashSet::new();
    for seed in 0..30 {
        let mapping = run(&people, &RestrictionSet::new(), seed).found().unwrap();
        let givers: Vec<String> = mapping.keys().map(|g| g.to_string()).collect();
        orders.insert(givers);
    }
    assert!(orders.len() > 1);
}

#[test]
fn test_node_budget_reports_budget_exhausted() {
    let people = participants(&["A", "B", "C", "D"]);
    let restrictions: RestrictionSet = vec![Restriction::new("A", ["B", "C", "D"])].into();
    let search = AssignmentSearch::new(NodeCountTermination::new(1));
    let mut scope = SearchScope::with_seed(5);

    // A feasible search needs five nodes, an infeasible one at least two.
    let outcome = search.search(&mut scope, &people, &restrictions);
    if outcome != SearchOutcome::NotFound(NotFoundReason::Exhausted) {
        assert_eq!(outcome, SearchOutcome::NotFound(NotFoundReason::BudgetExhausted));
    }

    let outcome = search.search(&mut scope, &people, &RestrictionSet::new());
    assert_eq!(outcome, SearchOutcome::NotFound(NotFoundReason::BudgetExhausted));
    assert_eq!(scope.stats().nodes_visited, 2);
}

#[test]
fn test_stats_count_backtracks() {
    let people = participants(&["A", "B", "C"]);
    let restrictions: RestrictionSet = vec![
        Restriction::new("A", ["C"]),
        Restriction::new("B", ["C"]),
    ]
    .into();
    let mut scope = SearchScope::with_seed(0);
    AssignmentSearch::unbounded().search(&mut scope, &people, &restrictions);

    assert!(scope.stats().nodes_visited >= 2);
    assert!(scope.stats().candidates_pruned > 0);
}

#[test]
fn test_empty_roster_is_trivially_found() {
    let outcome = run(&[], &RestrictionSet::new(), 0);
    assert_eq!(outcome, SearchOutcome::Found(AssignmentMap::new()));
}
