// `giftdraw list`, `giftdraw activate`, `giftdraw clear`

use std::path::Path;

use owo_colors::OwoColorize;

use giftdraw::DrawId;

use super::open_registry;

pub fn list(store: &Path) -> anyhow::Result<()> {
    let registry = open_registry(store)?;
    let draws = registry.draws()?;
    if draws.is_empty() {
        println!("No saved draws in {}", store.display());
        return Ok(());
    }

    let active = registry.active_id()?;
    for draw in draws {
        let marker = if active.as_ref() == Some(&draw.id) {
            "●".bright_green().to_string()
        } else {
            " ".to_string()
        };
        println!(
            "{} {} │ {} │ {} │ {}/{} revealed",
            marker,
            draw.id.bright_white(),
            draw.created_at.format("%Y-%m-%d %H:%M"),
            draw.name.as_deref().unwrap_or("-"),
            draw.accessed_count(),
            draw.assignments.len()
        );
    }
    Ok(())
}

pub fn activate(store: &Path, id: &str) -> anyhow::Result<()> {
    let registry = open_registry(store)?;
    registry.activate(&DrawId::new(id))?;
    println!("{} {} is now active", "✓".bright_green(), id.bright_white());
    Ok(())
}

pub fn clear(store: &Path) -> anyhow::Result<()> {
    open_registry(store)?.clear()?;
    println!("{} All draws deleted", "✓".bright_green());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use giftdraw::{Assignment, DrawResult, StoreError, Token};

    #[test]
    fn test_activate_and_clear() {
        let dir = tempfile::tempdir().unwrap();
        let store = dir.path().join("draws.json");
        let registry = open_registry(&store).unwrap();
        let first = registry
            .record(DrawResult::new(
                vec![Assignment::new("Ana", "Luis", Token::new("t"))],
                None,
            ))
            .unwrap();
        registry
            .record(DrawResult::new(Vec::new(), Some("second".into())))
            .unwrap();
        drop(registry);

        activate(&store, first.as_str()).unwrap();
        assert_eq!(open_registry(&store).unwrap().active_id().unwrap(), Some(first));

        let err = activate(&store, "draw-missing").unwrap_err();
        assert!(matches!(
            err.downcast_ref::<StoreError>(),
            Some(StoreError::UnknownDraw(_))
        ));

        list(&store).unwrap();
        clear(&store).unwrap();
        assert!(open_registry(&store).unwrap().draws().unwrap().is_empty());
    }
}
