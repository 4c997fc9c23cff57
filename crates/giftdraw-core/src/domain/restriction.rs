//! Directed "cannot give to" restrictions.

use indexmap::IndexMap;

use super::ParticipantId;

/// Forbids one giver from being paired with any of the listed receivers.
///
/// Restrictions are directional: a restriction on A listing B says nothing
/// about B giving to A.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "camelCase")
)]
pub struct Restriction {
    #[cfg_attr(feature = "serde", serde(alias = "participant_id"))]
    pub participant_id: ParticipantId,
    #[cfg_attr(feature = "serde", serde(alias = "cannot_give_to", default))]
    pub cannot_give_to: Vec<ParticipantId>,
}

impl Restriction {
    pub fn new<I, T>(participant_id: impl Into<ParticipantId>, cannot_give_to: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<ParticipantId>,
    {
        Self {
            participant_id: participant_id.into(),
            cannot_give_to: cannot_give_to.into_iter().map(Into::into).collect(),
        }
    }

    /// Returns true if this restriction forbids giving to `receiver`.
    pub fn forbids(&self, receiver: &str) -> bool {
        self.cannot_give_to.iter().any(|id| id.as_str() == receiver)
    }
}

/// Restrictions keyed by giver.
///
/// Inserting a restriction for a giver that already has one replaces the
/// whole forbidden set; sets are never merged.
///
/// # Examples
///
/// ```
/// use giftdraw_core::{Restriction, RestrictionSet};
///
/// let mut set = RestrictionSet::new();
/// set.insert(Restriction::new("p", ["a"]));
/// set.insert(Restriction::new("p", ["b"]));
///
/// assert!(set.forbids("p", "b"));
/// assert!(!set.forbids("p", "a"));
/// assert_eq!(set.len(), 1);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(from = "Vec<Restriction>", into = "Vec<Restriction>")
)]
pub struct RestrictionSet {
    by_giver: IndexMap<ParticipantId, Restriction>,
}

impl RestrictionSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Upserts a restriction, returning the one it replaced.
    pub fn insert(&mut self, restriction: Restriction) -> Option<Restriction> {
        self.by_giver
            .insert(restriction.participant_id.clone(), restriction)
    }

    /// Removes the restriction record for `giver`, keeping the order of the rest.
    pub fn remove(&mut self, giver: &str) -> Option<Restriction> {
        self.by_giver.shift_remove(giver)
    }

    pub fn get(&self, giver: &str) -> Option<&Restriction> {
        self.by_giver.get(giver)
    }

    /// Returns true if `giver` may not give to `receiver`.
    ///
    /// A giver without a restriction record may give to anyone.
    pub fn forbids(&self, giver: &str, receiver: &str) -> bool {
        self.get(giver).is_some_and(|r| r.forbids(receiver))
    }

    pub fn iter(&self) -> impl Iterator<Item = &Restriction> {
        self.by_giver.values()
    }

    pub fn len(&self) -> usize {
        self.by_giver.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_giver.is_empty()
    }
}

impl FromIterator<Restriction> for RestrictionSet {
    fn from_iter<I: IntoIterator<Item = Restriction>>(iter: I) -> Self {
        let mut set = Self::new();
        for restriction in iter {
            set.insert(restriction);
        }
        set
    }
}

impl From<Vec<Restriction>> for RestrictionSet {
    fn from(restrictions: Vec<Restriction>) -> Self {
        restrictions.into_iter().collect()
    }
}

impl From<RestrictionSet> for Vec<Restriction> {
    fn from(set: RestrictionSet) -> Self {
        set.by_giver.into_values().collect()
    }
}

impl<'a> IntoIterator for &'a RestrictionSet {
    type Item = &'a Restriction;
    type IntoIter = indexmap::map::Values<'a, ParticipantId, Restriction>;

    fn into_iter(self) -> Self::IntoIter {
        self.by_giver.values()
    }
}
