//! Domain model for gift-exchange draws
//!
//! - `Participant` / `ParticipantId`: the people taking part in a draw
//! - `Restriction` / `RestrictionSet`: directed "cannot give to" rules
//! - `Assignment` / `Token`: one giver-receiver pair with its reveal token
//! - `DrawResult` / `DrawId`: the complete outcome of one draw
//! - `Roster`: an editable participant list with its restrictions

mod assignment;
mod draw;
mod participant;
mod restriction;
mod roster;

pub use assignment::{Assignment, Token};
pub use draw::{DrawId, DrawResult, ShareLink};
pub use participant::{Participant, ParticipantId};
pub use restriction::{Restriction, RestrictionSet};
pub use roster::Roster;
