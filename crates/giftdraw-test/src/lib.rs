//! Shared test fixtures for giftdraw crates.
//!
//! This crate provides rosters and invariant checks for testing.
//! It depends only on `giftdraw-core` to avoid circular dependencies.
//!
//! - [`roster`] - participant lists, including the thirteen-person family
//! - [`assertions`] - checks every finished draw must pass
//!
//! # Usage
//!
//! Add as a dev-dependency in your crate's `Cargo.toml`:
//!
//! ```toml
//! [dev-dependencies]
//! giftdraw-test = { workspace = true }
//! ```

pub mod assertions;
pub mod roster;

pub use assertions::{assert_valid_assignments, assert_valid_draw, assert_valid_pairs};
pub use roster::{family_of_thirteen, lettered, participants};
