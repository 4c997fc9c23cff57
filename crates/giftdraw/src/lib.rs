//! giftdraw - constrained secret-santa draws in Rust
//!
//! Give the crate a roster and a list of "cannot give to" restrictions and
//! it finds a single gift cycle covering everybody, hands out one reveal
//! token per giver, and keeps the draw in an archive where each token can
//! be redeemed exactly once.
//!
//! # Example
//!
//! ```rust
//! use giftdraw::prelude::*;
//!
//! let mut roster = Roster::with_capacity(4);
//! let ana = roster.add_participant("Ana").unwrap();
//! let luis = roster.add_participant("Luis").unwrap();
//! roster.add_participant("Marta").unwrap();
//! roster.add_participant("Pablo").unwrap();
//! roster.add_restriction(Restriction::new(ana, [luis])).unwrap();
//!
//! let config = DrawConfig::new().with_participant_count(4);
//! let outcome = perform_draw_with_config(
//!     roster.participants(),
//!     roster.restrictions(),
//!     &config,
//! )
//! .unwrap();
//!
//! let draw = outcome.into_result().expect("four people with one restriction always draw");
//! let registry = DrawRegistry::new(InMemoryDrawStore::new());
//! registry.record(draw.clone()).unwrap();
//!
//! let token = draw.assignments[0].token.as_str();
//! assert!(matches!(registry.consume(token).unwrap(), TokenLookup::Revealed(_)));
//! assert_eq!(registry.consume(token).unwrap(), TokenLookup::AlreadyConsumed);
//! ```

// Domain types
pub use giftdraw_core::{
    Assignment, DrawId, DrawResult, Participant, ParticipantId, Restriction, RestrictionSet,
    Roster, ShareLink, Token,
};

// Errors
pub use giftdraw_core::{DrawError, RosterError, ValidationError};
pub use giftdraw_config::ConfigError;
pub use giftdraw_store::StoreError;

// Validation
pub use giftdraw_core::{validate, DEFAULT_PARTICIPANT_COUNT};

// Configuration
pub use giftdraw_config::{DrawConfig, EnvironmentMode, SearchConfig, StoreConfig, TokenConfig};

// Engine
pub use giftdraw_solver::{DrawEngine, DrawOutcome, NotFoundReason, SearchStats};

// Archive and tokens
pub use giftdraw_store::{DrawRegistry, DrawStore, InMemoryDrawStore, JsonFileDrawStore, TokenLookup};

#[cfg(feature = "console")]
pub mod console;

mod draw;
pub use draw::{perform_draw, perform_draw_with_config, DEFAULT_CONFIG_FILE};

/// Lower-level building blocks for custom pipelines.
pub mod solver {
    pub use giftdraw_solver::{
        verify_mapping, AssignmentMap, AssignmentSearch, ConfiguredTermination, Materializer,
        NoTermination, NodeCountTermination, OrTermination, SearchOutcome, SearchScope,
        Termination, TimeTermination, TimestampTokenGenerator, TokenGenerator,
    };
}

pub mod prelude {
    pub use super::{perform_draw, perform_draw_with_config};
    pub use super::{Assignment, DrawResult, Participant, Restriction, RestrictionSet, Roster};
    pub use super::{DrawConfig, DrawEngine, DrawOutcome, NotFoundReason};
    pub use super::{DrawRegistry, InMemoryDrawStore, JsonFileDrawStore, TokenLookup};
    pub use super::{DrawError, ValidationError};
}
