pub mod archive;
pub mod draw;
pub mod tokens;

use std::path::{Path, PathBuf};

use anyhow::Context;

use giftdraw::{DrawConfig, DrawRegistry, JsonFileDrawStore};

/// Archive used when neither `--store` nor the config names one.
pub const DEFAULT_STORE_PATH: &str = "giftdraw-draws.json";

/// Loads `--config` when given, the defaults otherwise.
pub fn load_config(path: Option<&Path>) -> anyhow::Result<DrawConfig> {
    match path {
        Some(path) => {
            DrawConfig::load(path).with_context(|| format!("loading config {}", path.display()))
        }
        None => Ok(DrawConfig::default()),
    }
}

/// Archive every command works on: `--store`, then `[store] path`, then the default.
pub fn store_path(store: Option<PathBuf>, config: &DrawConfig) -> PathBuf {
    store
        .or_else(|| config.store.path.clone())
        .unwrap_or_else(|| PathBuf::from(DEFAULT_STORE_PATH))
}

/// Opens the registry over the JSON archive at `path`.
pub fn open_registry(path: &Path) -> anyhow::Result<DrawRegistry<JsonFileDrawStore>> {
    Ok(DrawRegistry::new(JsonFileDrawStore::open(path)?))
}

#[cfg(test)]
mod tests {
    use super::*;
    use giftdraw::TokenLookup;

    const ROSTER: &str = r#"
[[participants]]
id = "ana"
name = "Ana"

[[participants]]
id = "luis"
name = "Luis"

[[participants]]
id = "marta"
name = "Marta"
"#;

    #[test]
    fn test_store_path_precedence() {
        let mut config = DrawConfig::default();
        assert_eq!(store_path(None, &config), PathBuf::from(DEFAULT_STORE_PATH));

        config.store.path = Some(PathBuf::from("from-config.json"));
        assert_eq!(store_path(None, &config), PathBuf::from("from-config.json"));
        assert_eq!(
            store_path(Some(PathBuf::from("flag.json")), &config),
            PathBuf::from("flag.json")
        );
    }

    #[test]
    fn test_config_store_is_shared_by_draw_and_reveal() {
        let dir = tempfile::tempdir().unwrap();
        let archive = dir.path().join("configured.json");
        let roster_path = dir.path().join("roster.toml");
        let config_path = dir.path().join("giftdraw.toml");
        std::fs::write(&roster_path, ROSTER).unwrap();
        std::fs::write(
            &config_path,
            format!(
                "participant_count = 3\n\n[store]\npath = {:?}\n",
                archive.to_str().unwrap()
            ),
        )
        .unwrap();

        let config = load_config(Some(&config_path)).unwrap();
        let store = store_path(None, &config);
        draw::run(&roster_path, config.clone(), &store, None, None).unwrap();

        // A later command resolves the same archive from the same config.
        let store = store_path(None, &config);
        assert_eq!(store, archive);
        let draw = open_registry(&store).unwrap().active().unwrap().unwrap();
        let token = draw.assignments[0].token.to_string();

        tokens::reveal(&store, &token).unwrap();
        assert_eq!(
            open_registry(&store).unwrap().consume(&token).unwrap(),
            TokenLookup::AlreadyConsumed
        );
    }

    #[test]
    fn test_missing_config_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        assert!(load_config(Some(&dir.path().join("none.toml"))).is_err());
        assert_eq!(load_config(None).unwrap().participant_count, 13);
    }
}
