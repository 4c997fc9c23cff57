//! Constraint validation run before any search work.

use std::collections::HashSet;

use crate::domain::{Participant, RestrictionSet};
use crate::error::ValidationError;

/// Roster size required by default.
pub const DEFAULT_PARTICIPANT_COUNT: usize = 13;

/// Checks that participants and restrictions are well-formed for a draw.
///
/// Checks run in order: exact participant count, unique ids, then every
/// restriction's giver and forbidden receivers must name a participant.
/// Partial lists are rejected, never padded. Pure: no side effects.
///
/// # Examples
///
/// ```
/// use giftdraw_core::{validate, Participant, Restriction, RestrictionSet, ValidationError};
///
/// let participants = vec![Participant::new("a", "Ana"), Participant::new("b", "Luis")];
/// let restrictions: RestrictionSet = vec![Restriction::new("a", ["z"])].into();
///
/// assert_eq!(
///     validate(&participants, &restrictions, 2),
///     Err(ValidationError::UnknownParticipantReference("z".into())),
/// );
/// ```
pub fn validate(
    participants: &[Participant],
    restrictions: &RestrictionSet,
    expected_count: usize,
) -> Result<(), ValidationError> {
    if participants.len() != expected_count {
        return Err(ValidationError::WrongParticipantCount {
            expected: expected_count,
            actual: participants.len(),
        });
    }

    let mut ids = HashSet::with_capacity(participants.len());
    for participant in participants {
        if !ids.insert(participant.id.as_str()) {
            return Err(ValidationError::DuplicateParticipantId(
                participant.id.clone(),
            ));
        }
    }

    for restriction in restrictions {
        let referenced = std::iter::once(&restriction.participant_id)
            .chain(restriction.cannot_give_to.iter());
        for id in referenced {
            if !ids.contains(id.as_str()) {
                return Err(ValidationError::UnknownParticipantReference(id.clone()));
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Restriction;

    fn people(n: usize) -> Vec<Participant> {
        (0..n)
            .map(|i| Participant::new(format!("p-{}", i), format!("Person {}", i)))
            .collect()
    }

    #[test]
    fn test_accepts_exact_count() {
        assert_eq!(validate(&people(13), &RestrictionSet::new(), 13), Ok(()));
    }

    #[test]
    fn test_rejects_partial_list() {
        let err = validate(&people(12), &RestrictionSet::new(), 13).unwrap_err();
        assert_eq!(
            err,
            ValidationError::WrongParticipantCount {
                expected: 13,
                actual: 12
            }
        );
        assert_eq!(err.to_string(), "must supply exactly 13 participants (got 12)");
    }

    #[test]
    fn test_rejects_oversized_list() {
        assert!(matches!(
            validate(&people(14), &RestrictionSet::new(), 13),
            Err(ValidationError::WrongParticipantCount { actual: 14, .. })
        ));
    }

    #[test]
    fn test_rejects_unknown_giver() {
        let restrictions: RestrictionSet = vec![Restriction::new("ghost", ["p-0"])].into();
        assert_eq!(
            validate(&people(3), &restrictions, 3),
            Err(ValidationError::UnknownParticipantReference("ghost".into()))
        );
    }

    #[test]
    fn test_rejects_unknown_receiver() {
        let restrictions: RestrictionSet =
            vec![Restriction::new("p-0", ["p-1", "ghost"])].into();
        let err = validate(&people(3), &restrictions, 3).unwrap_err();
        assert_eq!(
            err.to_string(),
            "restriction references unknown participant `ghost`"
        );
    }

    #[test]
    fn test_rejects_duplicate_ids() {
        let mut participants = people(3);
        participants[2].id = "p-0".into();
        assert_eq!(
            validate(&participants, &RestrictionSet::new(), 3),
            Err(ValidationError::DuplicateParticipantId("p-0".into()))
        );
    }

    #[test]
    fn test_count_checked_before_references() {
        let restrictions: RestrictionSet = vec![Restriction::new("ghost", ["p-0"])].into();
        assert!(matches!(
            validate(&people(2), &restrictions, 3),
            Err(ValidationError::WrongParticipantCount { .. })
        ));
    }

    #[test]
    fn test_validation_is_idempotent() {
        let participants = people(4);
        let restrictions: RestrictionSet = vec![Restriction::new("p-0", ["p-9"])].into();
        let first = validate(&participants, &restrictions, 4);
        let second = validate(&participants, &restrictions, 4);
        assert_eq!(first, second);
        assert_eq!(participants, people(4));
    }
}
