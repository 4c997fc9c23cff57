// `giftdraw links`, `giftdraw reveal`

use std::path::Path;

use anyhow::bail;
use owo_colors::OwoColorize;

use giftdraw::TokenLookup;

use super::open_registry;

pub fn links(store: &Path, base_url: &str) -> anyhow::Result<()> {
    let registry = open_registry(store)?;
    let Some(draw) = registry.active()? else {
        bail!("no active draw in {}", store.display());
    };

    for link in draw.links(base_url) {
        let status = if link.accessed {
            "opened".bright_black().to_string()
        } else {
            "pending".bright_yellow().to_string()
        };
        println!("{:<20} {} {}", link.giver, link.url, status);
    }
    Ok(())
}

pub fn reveal(store: &Path, token: &str) -> anyhow::Result<()> {
    match open_registry(store)?.consume(token)? {
        TokenLookup::Revealed(assignment) => {
            println!(
                "{}, you are buying a gift for {}",
                assignment.giver.bright_white().bold(),
                assignment.receiver.bright_green().bold()
            );
            Ok(())
        }
        TokenLookup::AlreadyConsumed => bail!("this link was already opened"),
        TokenLookup::NotFound => bail!("unknown token for the active draw"),
    }
}
