//! giftdraw solver engine
//!
//! This crate turns a validated roster into a draw:
//! - Assignment search: randomized backtracking over giver/receiver bijections
//! - Termination conditions bounding each search
//! - Search scope and statistics
//! - Materialization of the mapping into tokened assignments
//! - The draw pipeline tying validation, search and materialization together

pub mod draw;
pub mod materialize;
pub mod scope;
pub mod search;
pub mod stats;
pub mod termination;

pub use draw::{verify_mapping, DrawEngine, DrawOutcome};
pub use materialize::{Materializer, TimestampTokenGenerator, TokenGenerator};
pub use scope::SearchScope;
pub use search::{AssignmentMap, AssignmentSearch, NotFoundReason, SearchOutcome};
pub use stats::SearchStats;
pub use termination::{
    ConfiguredTermination, NoTermination, NodeCountTermination, OrTermination, Termination,
    TimeTermination,
};
