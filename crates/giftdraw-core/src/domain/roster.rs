//! Editable participant list with its restrictions.

use super::{Participant, ParticipantId, Restriction, RestrictionSet};
use crate::error::RosterError;
use crate::validate::{validate, DEFAULT_PARTICIPANT_COUNT};
use crate::ValidationError;

/// A named list of participants and the restrictions between them.
///
/// The roster enforces its capacity while it is being filled; the exact
/// count required for a draw is still checked by [`validate`].
///
/// # Examples
///
/// ```
/// use giftdraw_core::{Restriction, Roster};
///
/// let mut roster = Roster::with_capacity(3);
/// let ana = roster.add_participant("Ana").unwrap();
/// let luis = roster.add_participant(" Luis ").unwrap();
/// roster.add_participant("Marta").unwrap();
///
/// roster.add_restriction(Restriction::new(ana.clone(), [luis])).unwrap();
/// assert!(roster.is_complete());
/// assert!(roster.add_participant("Pablo").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Roster {
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    name: Option<String>,
    #[cfg_attr(feature = "serde", serde(skip, default = "default_capacity"))]
    capacity: usize,
    #[cfg_attr(feature = "serde", serde(default))]
    participants: Vec<Participant>,
    #[cfg_attr(feature = "serde", serde(default))]
    restrictions: RestrictionSet,
}

#[cfg(feature = "serde")]
fn default_capacity() -> usize {
    DEFAULT_PARTICIPANT_COUNT
}

impl Default for Roster {
    fn default() -> Self {
        Self::with_capacity(DEFAULT_PARTICIPANT_COUNT)
    }
}

impl Roster {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            name: None,
            capacity,
            participants: Vec::with_capacity(capacity),
            restrictions: RestrictionSet::new(),
        }
    }

    /// Builds a roster from existing participants and restrictions.
    ///
    /// Later restrictions for the same giver replace earlier ones.
    pub fn from_parts(
        participants: Vec<Participant>,
        restrictions: impl IntoIterator<Item = Restriction>,
    ) -> Self {
        Self {
            name: None,
            capacity: participants.len().max(DEFAULT_PARTICIPANT_COUNT),
            participants,
            restrictions: restrictions.into_iter().collect(),
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn set_capacity(&mut self, capacity: usize) {
        self.capacity = capacity;
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn participants(&self) -> &[Participant] {
        &self.participants
    }

    pub fn restrictions(&self) -> &RestrictionSet {
        &self.restrictions
    }

    pub fn participant(&self, id: &str) -> Option<&Participant> {
        self.participants.iter().find(|p| p.id.as_str() == id)
    }

    /// True once the roster holds exactly `capacity` participants.
    pub fn is_complete(&self) -> bool {
        self.participants.len() == self.capacity
    }

    /// Adds a participant under a freshly generated id.
    ///
    /// The name is trimmed; blank names and additions past capacity are rejected.
    pub fn add_participant(&mut self, name: &str) -> Result<ParticipantId, RosterError> {
        let id = ParticipantId::generate();
        self.push(Participant::new(id.clone(), name))?;
        Ok(id)
    }

    /// Adds a participant that already carries an id.
    pub fn push(&mut self, participant: Participant) -> Result<(), RosterError> {
        let name = participant.name.trim();
        if name.is_empty() {
            return Err(RosterError::EmptyName);
        }
        if self.participants.len() >= self.capacity {
            return Err(RosterError::RosterFull {
                capacity: self.capacity,
            });
        }
        let name = name.to_string();
        self.participants.push(Participant { name, ..participant });
        Ok(())
    }

    /// Removes a participant together with the restriction record it owns
    /// as a giver.
    ///
    /// Restrictions of other givers that list this participant are kept.
    pub fn remove_participant(&mut self, id: &str) -> Result<Participant, RosterError> {
        let index = self
            .participants
            .iter()
            .position(|p| p.id.as_str() == id)
            .ok_or_else(|| RosterError::UnknownParticipant(ParticipantId::new(id)))?;
        self.restrictions.remove(id);
        Ok(self.participants.remove(index))
    }

    /// Upserts a restriction, replacing any previous one for the same giver.
    ///
    /// The restriction must exclude at least one receiver; use
    /// [`remove_restriction`](Self::remove_restriction) to lift one.
    pub fn add_restriction(
        &mut self,
        restriction: Restriction,
    ) -> Result<Option<Restriction>, RosterError> {
        if restriction.cannot_give_to.is_empty() {
            return Err(RosterError::EmptyRestriction(restriction.participant_id));
        }
        let unknown = std::iter::once(&restriction.participant_id)
            .chain(restriction.cannot_give_to.iter())
            .find(|id| self.participant(id.as_str()).is_none());
        if let Some(id) = unknown {
            return Err(RosterError::UnknownParticipant(id.clone()));
        }
        Ok(self.restrictions.insert(restriction))
    }

    /// Lifts the restriction recorded for `giver`, returning it.
    pub fn remove_restriction(&mut self, giver: &str) -> Option<Restriction> {
        self.restrictions.remove(giver)
    }

    /// Participants `giver` could be restricted from: everyone but themselves.
    pub fn restrictable_receivers<'a>(
        &'a self,
        giver: &'a str,
    ) -> impl Iterator<Item = &'a Participant> + 'a {
        self.participants
            .iter()
            .filter(move |p| p.id.as_str() != giver)
    }

    /// Runs the constraint validator against this roster.
    pub fn validate(&self, expected_count: usize) -> Result<(), ValidationError> {
        validate(&self.participants, &self.restrictions, expected_count)
    }
}
