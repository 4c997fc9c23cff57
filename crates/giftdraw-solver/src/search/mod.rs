//! Randomized backtracking assignment search.
//!
//! The givers are shuffled once per search. They are then processed in
//! that order, depth first: each giver claims the first legal receiver
//! still unclaimed and the search moves on to the next giver. When a giver
//! has no legal receiver left, the previous claim is undone and that giver
//! tries its next candidate.
//!
//! Candidates are tried in the iteration order of the unclaimed set. An
//! undone claim is re-inserted at the back of that set, so the order seen
//! by later decision points depends on the backtracking history. Only the
//! receiver choice backtracks, never the giver order. Every receiver is
//! still tried at every depth, so an unbudgeted search that reports
//! [`NotFoundReason::Exhausted`] has ruled out every assignment.

use std::fmt;

use indexmap::{IndexMap, IndexSet};
use rand::seq::SliceRandom;
use tracing::trace;

use giftdraw_core::{Participant, ParticipantId, RestrictionSet};

use crate::scope::SearchScope;
use crate::termination::{NoTermination, Termination};

/// Giver id to receiver id, in the order the givers were committed.
pub type AssignmentMap = IndexMap<ParticipantId, ParticipantId>;

/// Why a search returned no assignment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotFoundReason {
    /// Backtracking ran out of candidates for the first giver: no valid
    /// assignment exists.
    Exhausted,
    /// The termination budget fired before a complete assignment was found.
    BudgetExhausted,
}

impl fmt::Display for NotFoundReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NotFoundReason::Exhausted => write!(f, "exhausted"),
            NotFoundReason::BudgetExhausted => write!(f, "budget_exhausted"),
        }
    }
}

/// Result of one search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchOutcome {
    /// Complete, valid giver-to-receiver mapping.
    Found(AssignmentMap),
    /// No assignment for this shuffle. Not an error.
    NotFound(NotFoundReason),
}

impl SearchOutcome {
    pub fn is_found(&self) -> bool {
        matches!(self, SearchOutcome::Found(_))
    }

    pub fn found(self) -> Option<AssignmentMap> {
        match self {
            SearchOutcome::Found(mapping) => Some(mapping),
            SearchOutcome::NotFound(_) => None,
        }
    }
}

/// Outcome of exploring one subtree.
enum Step {
    Complete,
    DeadEnd,
    Terminated,
}

/// Working state of one search, borrowed from the participant list.
struct Frontier<'p> {
    givers: Vec<&'p ParticipantId>,
    unclaimed: IndexSet<&'p ParticipantId>,
    mapping: IndexMap<&'p ParticipantId, &'p ParticipantId>,
}

/// The assignment search engine.
///
/// Assumes its input already passed [`giftdraw_core::validate`]; it raises
/// no validation errors itself.
///
/// # Type Parameters
/// * `T` - The termination bounding each search
///
/// # Example
///
/// ```
/// use giftdraw_core::{Participant, RestrictionSet};
/// use giftdraw_solver::{AssignmentSearch, SearchOutcome, SearchScope};
///
/// let participants = vec![Participant::new("a", "Ana"), Participant::new("b", "Luis")];
/// let search = AssignmentSearch::unbounded();
/// let mut scope = SearchScope::with_seed(7);
///
/// let SearchOutcome::Found(mapping) =
///     search.search(&mut scope, &participants, &RestrictionSet::new())
/// else {
///     panic!("two people can always swap");
/// };
/// assert_eq!(mapping["a"].as_str(), "b");
/// assert_eq!(mapping["b"].as_str(), "a");
/// ```
#[derive(Debug, Clone)]
pub struct AssignmentSearch<T> {
    termination: T,
}

impl AssignmentSearch<NoTermination> {
    /// Creates a search without any budget.
    pub fn unbounded() -> Self {
        Self::new(NoTermination)
    }
}

impl<T: Termination> AssignmentSearch<T> {
    pub fn new(termination: T) -> Self {
        Self { termination }
    }

    pub fn termination(&self) -> &T {
        &self.termination
    }

    /// Runs one search: a single shuffle followed by backtracking.
    pub fn search(
        &self,
        scope: &mut SearchScope,
        participants: &[Participant],
        restrictions: &RestrictionSet,
    ) -> SearchOutcome {
        scope.start_search();

        let mut givers: Vec<&ParticipantId> = participants.iter().map(|p| &p.id).collect();
        givers.shuffle(scope.rng());

        let mut frontier = Frontier {
            givers,
            unclaimed: participants.iter().map(|p| &p.id).collect(),
            mapping: IndexMap::with_capacity(participants.len()),
        };

        match self.assign(scope, &mut frontier, 0, restrictions) {
            Step::Complete => SearchOutcome::Found(
                frontier
                    .mapping
                    .into_iter()
                    .map(|(giver, receiver)| (giver.clone(), receiver.clone()))
                    .collect(),
            ),
            Step::DeadEnd => SearchOutcome::NotFound(NotFoundReason::Exhausted),
            Step::Terminated => SearchOutcome::NotFound(NotFoundReason::BudgetExhausted),
        }
    }

    fn assign<'p>(
        &self,
        scope: &mut SearchScope,
        frontier: &mut Frontier<'p>,
        depth: usize,
        restrictions: &RestrictionSet,
    ) -> Step {
        scope.stats_mut().record_node();
        if self.termination.is_terminated(scope) {
            return Step::Terminated;
        }

        let Some(&giver) = frontier.givers.get(depth) else {
            return Step::Complete;
        };

        // Snapshot: claims made below this level must not disturb our iteration.
        let candidates: Vec<&'p ParticipantId> = frontier.unclaimed.iter().copied().collect();

        for receiver in candidates {
            if receiver == giver || restrictions.forbids(giver.as_str(), receiver.as_str()) {
                scope.stats_mut().record_pruned();
                continue;
            }

            frontier.unclaimed.shift_remove(receiver);
            frontier.mapping.insert(giver, receiver);

            match self.assign(scope, frontier, depth + 1, restrictions) {
                Step::DeadEnd => {
                    frontier.mapping.shift_remove(giver);
                    frontier.unclaimed.insert(receiver);
                    scope.stats_mut().record_backtrack();
                    trace!(event = "backtrack", depth = depth as u64);
                }
                finished => return finished,
            }
        }

        Step::DeadEnd
    }
}

#[cfg(test)]
mod tests;
