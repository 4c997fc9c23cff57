//! The draw pipeline: validate, search, materialize.

use std::collections::HashSet;

use tracing::{debug, info, warn};

use giftdraw_config::DrawConfig;
use giftdraw_core::{validate, DrawError, DrawResult, Participant, RestrictionSet, Roster};

use crate::materialize::{Materializer, TimestampTokenGenerator};
use crate::scope::SearchScope;
use crate::search::{AssignmentMap, AssignmentSearch, NotFoundReason, SearchOutcome};
use crate::termination::ConfiguredTermination;

/// Result of a draw that passed validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DrawOutcome {
    /// A complete draw, ready to be stored.
    Drawn(DrawResult),
    /// No assignment was found. Relax restrictions or try again.
    NotFound(NotFoundReason),
}

impl DrawOutcome {
    pub fn is_drawn(&self) -> bool {
        matches!(self, DrawOutcome::Drawn(_))
    }

    pub fn into_result(self) -> Option<DrawResult> {
        match self {
            DrawOutcome::Drawn(draw) => Some(draw),
            DrawOutcome::NotFound(_) => None,
        }
    }
}

/// Runs complete draws according to a [`DrawConfig`].
///
/// # Example
///
/// ```
/// use giftdraw_config::DrawConfig;
/// use giftdraw_core::{Participant, RestrictionSet};
/// use giftdraw_solver::{DrawEngine, DrawOutcome};
///
/// let participants = vec![
///     Participant::new("a", "Ana"),
///     Participant::new("b", "Luis"),
///     Participant::new("c", "Marta"),
/// ];
/// let engine = DrawEngine::new(DrawConfig::new().with_participant_count(3));
///
/// let outcome = engine
///     .perform_draw(&participants, &RestrictionSet::new(), Some("Office".into()))
///     .unwrap();
/// let DrawOutcome::Drawn(draw) = outcome else { panic!("three people always draw") };
/// assert_eq!(draw.assignments.len(), 3);
/// ```
#[derive(Debug, Clone)]
pub struct DrawEngine {
    config: DrawConfig,
    search: AssignmentSearch<ConfiguredTermination>,
}

impl DrawEngine {
    pub fn new(config: DrawConfig) -> Self {
        let search = AssignmentSearch::new(ConfiguredTermination::from_config(&config.search));
        Self { config, search }
    }

    pub fn config(&self) -> &DrawConfig {
        &self.config
    }

    /// Draws a roster, labelling the result with the roster's name.
    pub fn draw_roster(&self, roster: &Roster) -> Result<DrawOutcome, DrawError> {
        self.perform_draw(
            roster.participants(),
            roster.restrictions(),
            roster.name().map(str::to_string),
        )
    }

    /// Validates the input, searches and materializes the result.
    ///
    /// Validation failures are errors; not finding an assignment is the
    /// `Ok(DrawOutcome::NotFound)` outcome and never carries partial output.
    pub fn perform_draw(
        &self,
        participants: &[Participant],
        restrictions: &RestrictionSet,
        name: Option<String>,
    ) -> Result<DrawOutcome, DrawError> {
        validate(participants, restrictions, self.config.participant_count)?;

        info!(
            event = "draw_start",
            participant_count = participants.len() as u64,
            restriction_count = restrictions.len() as u64,
            attempts = self.config.attempts as u64
        );

        let mut scope = SearchScope::from_seed(self.config.effective_seed());
        let mut reason = NotFoundReason::Exhausted;
        let mut found = None;

        // At least one search always runs.
        for attempt in 1..=self.config.attempts.max(1) {
            let outcome = self.search.search(&mut scope, participants, restrictions);
            let stats = scope.stats();
            debug!(
                event = "search_end",
                attempt = attempt as u64,
                nodes = stats.nodes_visited,
                backtracks = stats.backtracks,
                duration_ms = stats.elapsed_ms(),
                found = outcome.is_found()
            );
            match outcome {
                SearchOutcome::Found(mapping) => {
                    found = Some(mapping);
                    break;
                }
                SearchOutcome::NotFound(why) => reason = why,
            }
        }

        let Some(mapping) = found else {
            info!(event = "draw_not_found", reason = %reason);
            return Ok(DrawOutcome::NotFound(reason));
        };

        if self.config.environment_mode.is_asserted() {
            verify_mapping(&mapping, participants, restrictions).inspect_err(|err| {
                warn!(event = "invariant_violated", error = %err);
            })?;
        }

        let mut materializer =
            Materializer::new(TimestampTokenGenerator::new(self.config.token.random_length));
        let assignments = materializer.materialize(&mapping, participants)?;
        let draw = DrawResult::new(assignments, name);

        info!(
            event = "draw_end",
            draw_id = %draw.id,
            assignments = draw.assignments.len() as u64
        );
        Ok(DrawOutcome::Drawn(draw))
    }
}

/// Re-checks a finished mapping against every draw invariant.
///
/// Each participant gives exactly once and receives exactly once, nobody
/// gives to themselves, and no pair is forbidden.
pub fn verify_mapping(
    mapping: &AssignmentMap,
    participants: &[Participant],
    restrictions: &RestrictionSet,
) -> Result<(), DrawError> {
    if mapping.len() != participants.len() {
        return Err(DrawError::InvariantViolated(format!(
            "{} assignments for {} participants",
            mapping.len(),
            participants.len()
        )));
    }

    let mut receivers = HashSet::with_capacity(mapping.len());
    for participant in participants {
        let giver = participant.id.as_str();
        let receiver = mapping.get(giver).ok_or_else(|| {
            DrawError::InvariantViolated(format!("`{}` gives to nobody", giver))
        })?;
        if receiver.as_str() == giver {
            return Err(DrawError::InvariantViolated(format!(
                "`{}` gives to themselves",
                giver
            )));
        }
        if restrictions.forbids(giver, receiver.as_str()) {
            return Err(DrawError::InvariantViolated(format!(
                "`{}` may not give to `{}`",
                giver, receiver
            )));
        }
        if !receivers.insert(receiver.as_str()) {
            return Err(DrawError::InvariantViolated(format!(
                "`{}` receives twice",
                receiver
            )));
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use giftdraw_config::EnvironmentMode;
    use giftdraw_core::{Restriction, ValidationError};
    use giftdraw_test::{assert_valid_assignments, family_of_thirteen, participants};

    #[test]
    fn test_family_draw_is_valid() {
        let roster = family_of_thirteen();
        let engine = DrawEngine::new(DrawConfig::new());

        for _ in 0..10 {
            let draw = engine.draw_roster(&roster).unwrap().into_result().unwrap();
            assert_eq!(draw.name.as_deref(), Some("Family Christmas"));
            assert_valid_assignments(
                &draw.assignments,
                roster.participants(),
                roster.restrictions(),
            );
        }
    }

    #[test]
    fn test_wrong_count_fails_before_search() {
        let engine = DrawEngine::new(DrawConfig::new());
        let err = engine
            .perform_draw(&participants(&["A", "B"]), &RestrictionSet::new(), None)
            .unwrap_err();
        assert_eq!(
            err,
            DrawError::Validation(ValidationError::WrongParticipantCount {
                expected: 13,
                actual: 2
            }),
        );
    }

    #[test]
    fn test_unknown_reference_fails_before_search() {
        let engine = DrawEngine::new(DrawConfig::new().with_participant_count(2));
        let restrictions: RestrictionSet = vec![Restriction::new("A", ["Q"])].into();
        let err = engine
            .perform_draw(&participants(&["A", "B"]), &restrictions, None)
            .unwrap_err();
        assert!(matches!(
            err,
            DrawError::Validation(ValidationError::UnknownParticipantReference(_))
        ));
    }

    #[test]
    fn test_zero_attempts_still_searches_once() {
        let engine = DrawEngine::new(
            DrawConfig::new()
                .with_participant_count(2)
                .with_attempts(0),
        );
        let outcome = engine
            .perform_draw(&participants(&["A", "B"]), &RestrictionSet::new(), None)
            .unwrap();
        assert!(outcome.is_drawn());
    }

    #[test]
    fn test_infeasible_draw_is_not_found() {
        let engine = DrawEngine::new(
            DrawConfig::new()
                .with_participant_count(3)
                .with_attempts(4),
        );
        let restrictions: RestrictionSet = vec![Restriction::new("A", ["B", "C"])].into();
        let outcome = engine
            .perform_draw(&participants(&["A", "B", "C"]), &restrictions, None)
            .unwrap();
        assert_eq!(outcome, DrawOutcome::NotFound(NotFoundReason::Exhausted));
        assert!(outcome.into_result().is_none());
    }

    #[test]
    fn test_budget_exhaustion_is_not_found() {
        let engine = DrawEngine::new(
            DrawConfig::new()
                .with_participant_count(4)
                .with_node_limit(1),
        );
        let outcome = engine
            .perform_draw(&participants(&["A", "B", "C", "D"]), &RestrictionSet::new(), None)
            .unwrap();
        assert_eq!(outcome, DrawOutcome::NotFound(NotFoundReason::BudgetExhausted));
    }

    #[test]
    fn test_reproducible_mode_repeats_pairs() {
        let roster = family_of_thirteen();
        let engine = DrawEngine::new(DrawConfig::new().with_random_seed(2024));
        let pairs = |draw: DrawResult| -> Vec<(String, String)> {
            draw.assignments
                .into_iter()
                .map(|a| (a.giver, a.receiver))
                .collect()
        };

        let first = engine.draw_roster(&roster).unwrap().into_result().unwrap();
        let second = engine.draw_roster(&roster).unwrap().into_result().unwrap();
        assert_ne!(first.id, second.id);
        assert_eq!(pairs(first), pairs(second));
    }

    #[test]
    fn test_full_assert_mode_accepts_valid_draws() {
        let roster = family_of_thirteen();
        let engine = DrawEngine::new(
            DrawConfig::new().with_environment_mode(EnvironmentMode::FullAssert),
        );
        assert!(engine.draw_roster(&roster).unwrap().is_drawn());
    }

    #[test]
    fn test_verify_mapping_catches_fixed_point() {
        let people = participants(&["A", "B"]);
        let mut mapping = AssignmentMap::new();
        mapping.insert("A".into(), "A".into());
        mapping.insert("B".into(), "B".into());
        assert!(matches!(
            verify_mapping(&mapping, &people, &RestrictionSet::new()),
            Err(DrawError::InvariantViolated(_))
        ));
    }

    #[test]
    fn test_verify_mapping_catches_forbidden_pair() {
        let people = participants(&["A", "B"]);
        let restrictions: RestrictionSet = vec![Restriction::new("B", ["A"])].into();
        let mut mapping = AssignmentMap::new();
        mapping.insert("A".into(), "B".into());
        mapping.insert("B".into(), "A".into());
        assert!(verify_mapping(&mapping, &people, &restrictions).is_err());
        assert!(verify_mapping(&mapping, &people, &RestrictionSet::new()).is_ok());
    }

    #[test]
    fn test_verify_mapping_catches_double_receiver() {
        let people = participants(&["A", "B", "C"]);
        let mut mapping = AssignmentMap::new();
        mapping.insert("A".into(), "B".into());
        mapping.insert("B".into(), "C".into());
        mapping.insert("C".into(), "B".into());
        assert!(verify_mapping(&mapping, &people, &RestrictionSet::new()).is_err());
    }
}
