//! Draw archive and one-shot token ledger.
//!
//! The solver never persists anything itself. This crate supplies the two
//! capabilities surrounding layers need:
//! - [`DrawStore`]: list, append, activate and clear saved draws, with an
//!   in-memory and a JSON-file backend
//! - [`DrawRegistry`]: records draws and redeems reveal tokens exactly once

mod error;
mod registry;
pub mod store;

pub use error::StoreError;
pub use registry::{DrawRegistry, TokenLookup};
pub use store::{DrawStore, InMemoryDrawStore, JsonFileDrawStore};
