//! Invariant checks for finished draws.

use std::collections::{HashMap, HashSet};

use giftdraw_core::{Assignment, DrawResult, Participant, RestrictionSet};

/// Asserts that giver/receiver id pairs form a valid draw.
///
/// Every participant gives exactly once and receives exactly once, nobody
/// gives to themselves, and no pair is forbidden by `restrictions`.
///
/// # Panics
///
/// Panics with a description of the first broken invariant.
pub fn assert_valid_pairs<'a>(
    pairs: impl IntoIterator<Item = (&'a str, &'a str)>,
    participants: &[Participant],
    restrictions: &RestrictionSet,
) {
    let ids: HashSet<&str> = participants.iter().map(|p| p.id.as_str()).collect();
    let mut givers = HashSet::new();
    let mut receivers = HashSet::new();
    let mut count = 0;

    for (giver, receiver) in pairs {
        count += 1;
        assert!(ids.contains(giver), "unknown giver {}", giver);
        assert!(ids.contains(receiver), "unknown receiver {}", receiver);
        assert_ne!(giver, receiver, "{} gives to themselves", giver);
        assert!(
            !restrictions.forbids(giver, receiver),
            "{} must not give to {}",
            giver,
            receiver
        );
        assert!(givers.insert(giver), "{} gives twice", giver);
        assert!(receivers.insert(receiver), "{} receives twice", receiver);
    }

    assert_eq!(count, participants.len(), "one pair per participant");
}

/// Asserts that materialized assignments form a valid draw.
///
/// Names are resolved back to ids through `participants`, so names must be
/// unique in the fixture. Also checks tokens are unique and unaccessed.
pub fn assert_valid_assignments(
    assignments: &[Assignment],
    participants: &[Participant],
    restrictions: &RestrictionSet,
) {
    let by_name: HashMap<&str, &str> = participants
        .iter()
        .map(|p| (p.name.as_str(), p.id.as_str()))
        .collect();
    let pairs: Vec<(&str, &str)> = assignments
        .iter()
        .map(|a| (id_of(&by_name, &a.giver), id_of(&by_name, &a.receiver)))
        .collect();
    assert_valid_pairs(pairs, participants, restrictions);

    let tokens: HashSet<&str> = assignments.iter().map(|a| a.token.as_str()).collect();
    assert_eq!(tokens.len(), assignments.len(), "tokens must be unique");
    assert!(assignments.iter().all(|a| !a.accessed));
}

/// Asserts that a stored draw is complete and valid for `participants`.
pub fn assert_valid_draw(draw: &DrawResult, participants: &[Participant], restrictions: &RestrictionSet) {
    assert!(draw.id.as_str().starts_with("draw-"), "draw id {}", draw.id);
    assert_valid_assignments(&draw.assignments, participants, restrictions);
}

fn id_of<'m>(by_name: &HashMap<&str, &'m str>, name: &str) -> &'m str {
    by_name
        .get(name)
        .copied()
        .unwrap_or_else(|| panic!("unknown participant name {}", name))
}
