// `giftdraw draw`

use std::path::Path;

use anyhow::{bail, Context};
use owo_colors::OwoColorize;

use giftdraw::{DrawConfig, DrawEngine, DrawOutcome, NotFoundReason, Roster};

use super::open_registry;

pub fn run(
    roster_path: &Path,
    mut config: DrawConfig,
    store: &Path,
    name: Option<String>,
    attempts: Option<u32>,
) -> anyhow::Result<()> {
    if let Some(attempts) = attempts {
        config = config.with_attempts(attempts);
    }
    config.validate()?;

    let roster = load_roster(roster_path, config.participant_count)?;
    let name = name.or_else(|| roster.name().map(str::to_string));

    let engine = DrawEngine::new(config);
    let outcome = engine.perform_draw(roster.participants(), roster.restrictions(), name)?;
    let draw = match outcome {
        DrawOutcome::Drawn(draw) => draw,
        DrawOutcome::NotFound(NotFoundReason::Exhausted) => {
            bail!("no valid draw exists for these restrictions; relax some and try again")
        }
        DrawOutcome::NotFound(NotFoundReason::BudgetExhausted) => {
            bail!("search budget ran out before a draw was found; raise search.node_limit or try again")
        }
    };

    let registry = open_registry(store)?;
    let id = registry.record(draw)?;

    println!(
        "{} {} saved to {}",
        "✓".bright_green(),
        id.bright_white().bold(),
        store.display()
    );
    Ok(())
}

/// Reads a roster file and sizes it for the configured participant count.
pub fn load_roster(path: &Path, participant_count: usize) -> anyhow::Result<Roster> {
    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("reading roster {}", path.display()))?;
    let mut roster: Roster =
        toml::from_str(&contents).with_context(|| format!("parsing roster {}", path.display()))?;
    roster.set_capacity(participant_count);
    Ok(roster)
}

#[cfg(test)]
mod tests {
    use super::*;

    const ROSTER: &str = r#"
name = "Office"

[[participants]]
id = "ana"
name = "Ana"

[[participants]]
id = "luis"
name = "Luis"

[[participants]]
id = "marta"
name = "Marta"

[[restrictions]]
participantId = "ana"
cannotGiveTo = ["luis"]
"#;

    #[test]
    fn test_load_roster() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("roster.toml");
        std::fs::write(&path, ROSTER).unwrap();

        let roster = load_roster(&path, 3).unwrap();
        assert_eq!(roster.name(), Some("Office"));
        assert_eq!(roster.capacity(), 3);
        assert!(roster.is_complete());
        assert!(roster.restrictions().forbids("ana", "luis"));
        roster.validate(3).unwrap();
    }

    #[test]
    fn test_demo_family_roster_is_valid() {
        let demos = Path::new(env!("CARGO_MANIFEST_DIR")).join("../../demos");
        let roster = load_roster(&demos.join("family.toml"), 13).unwrap();
        roster.validate(13).unwrap();
        assert_eq!(roster.restrictions().len(), 13);

        let config = DrawConfig::load(demos.join("giftdraw.toml")).unwrap();
        assert_eq!(config.participant_count, 13);
    }

    #[test]
    fn test_draw_saves_active_draw() {
        let dir = tempfile::tempdir().unwrap();
        let roster_path = dir.path().join("roster.toml");
        let config_path = dir.path().join("giftdraw.toml");
        let store_path = dir.path().join("draws.json");
        std::fs::write(&roster_path, ROSTER).unwrap();
        std::fs::write(&config_path, "participant_count = 3\n").unwrap();

        let config = DrawConfig::load(&config_path).unwrap();
        run(&roster_path, config, &store_path, None, Some(2)).unwrap();

        let registry = open_registry(&store_path).unwrap();
        let draw = registry.active().unwrap().unwrap();
        assert_eq!(draw.name.as_deref(), Some("Office"));
        assert_eq!(draw.assignments.len(), 3);
    }

    #[test]
    fn test_draw_rejects_wrong_count() {
        let dir = tempfile::tempdir().unwrap();
        let roster_path = dir.path().join("roster.toml");
        std::fs::write(&roster_path, ROSTER).unwrap();

        let err = run(
            &roster_path,
            DrawConfig::default(),
            &dir.path().join("draws.json"),
            None,
            None,
        )
        .unwrap_err();
        assert!(err.to_string().contains("exactly 13"));
    }

    #[test]
    fn test_draw_rejects_zero_attempts() {
        let dir = tempfile::tempdir().unwrap();
        let roster_path = dir.path().join("roster.toml");
        let store_path = dir.path().join("draws.json");
        std::fs::write(&roster_path, ROSTER).unwrap();

        let config = DrawConfig::new().with_participant_count(3);
        let err = run(&roster_path, config, &store_path, None, Some(0)).unwrap_err();
        assert!(err.to_string().contains("attempts must be at least 1"));
        assert!(!store_path.exists());
    }
}
