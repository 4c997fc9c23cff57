//! giftdraw core - types and validation for gift-exchange draws
//!
//! This crate provides the fundamental pieces every other giftdraw crate
//! builds on:
//! - Domain types: participants, restrictions, assignments and draw results
//! - The error taxonomy shared by the pipeline
//! - The constraint validator that runs before any search work
//! - Roster editing (add/remove participants and restrictions)

pub mod domain;
pub mod error;
pub mod validate;

pub use domain::{
    Assignment, DrawId, DrawResult, Participant, ParticipantId, Restriction, RestrictionSet,
    Roster, ShareLink, Token,
};
pub use error::{DrawError, RosterError, ValidationError};
pub use validate::{validate, DEFAULT_PARTICIPANT_COUNT};
