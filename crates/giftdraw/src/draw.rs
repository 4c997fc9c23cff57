//! Draw entry points that hide the engine wiring.

use tracing::debug;

use giftdraw_config::DrawConfig;
use giftdraw_core::{DrawError, Participant, RestrictionSet};
use giftdraw_solver::{DrawEngine, DrawOutcome};

/// Configuration file picked up by [`perform_draw`] from the working directory.
pub const DEFAULT_CONFIG_FILE: &str = "giftdraw.toml";

/// Runs a draw with `giftdraw.toml` from the working directory, or the
/// defaults when that file is missing or unreadable.
pub fn perform_draw(
    participants: &[Participant],
    restrictions: &RestrictionSet,
) -> Result<DrawOutcome, DrawError> {
    let config = DrawConfig::load(DEFAULT_CONFIG_FILE).unwrap_or_else(|err| {
        debug!(event = "config_default", error = %err);
        DrawConfig::default()
    });
    perform_draw_with_config(participants, restrictions, &config)
}

/// Runs a draw with an explicit configuration.
pub fn perform_draw_with_config(
    participants: &[Participant],
    restrictions: &RestrictionSet,
    config: &DrawConfig,
) -> Result<DrawOutcome, DrawError> {
    #[cfg(feature = "console")]
    giftdraw_console::init();

    DrawEngine::new(config.clone()).perform_draw(participants, restrictions, None)
}
