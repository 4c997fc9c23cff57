//! Colored console output for draw events.
//!
//! Installed automatically by the draw entry points when the `console`
//! feature is enabled.

pub use giftdraw_console::{init, DrawConsoleLayer};
