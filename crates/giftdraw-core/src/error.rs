//! Error types for giftdraw

use thiserror::Error;

use crate::domain::ParticipantId;

/// Reasons a participant list and restriction set are rejected before search.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// The roster does not have exactly the required number of participants.
    #[error("must supply exactly {expected} participants (got {actual})")]
    WrongParticipantCount { expected: usize, actual: usize },

    /// A restriction names a giver or receiver that is not in the roster.
    #[error("restriction references unknown participant `{0}`")]
    UnknownParticipantReference(ParticipantId),

    /// Two participants share the same id.
    #[error("participant id `{0}` appears more than once")]
    DuplicateParticipantId(ParticipantId),
}

/// Main error type for draw operations.
///
/// `NotFound` is deliberately absent: failing to find an assignment is a
/// regular outcome, not an error.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DrawError {
    /// Input rejected by the validator
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// A search mapping refers to a participant missing from the roster
    /// (should not occur in a correct pipeline)
    #[error("assignment references participant `{0}` missing from the roster")]
    DanglingReference(ParticipantId),

    /// A full-assert re-check of a finished draw failed
    #[error("draw invariant violated: {0}")]
    InvariantViolated(String),
}

/// Errors raised while editing a roster.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RosterError {
    #[error("participant name must not be empty")]
    EmptyName,

    #[error("roster already holds {capacity} participants")]
    RosterFull { capacity: usize },

    #[error("no participant with id `{0}`")]
    UnknownParticipant(ParticipantId),

    #[error("restriction for `{0}` names nobody to exclude")]
    EmptyRestriction(ParticipantId),
}

/// Result type alias for draw operations
pub type Result<T> = std::result::Result<T, DrawError>;
