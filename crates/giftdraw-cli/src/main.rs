// Command line front end: draw a roster, manage saved draws, redeem tokens.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

mod commands;

#[derive(Debug, Parser)]
#[command(name = "giftdraw")]
#[command(about = "giftdraw - secret santa draws with restrictions", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// JSON file holding saved draws (overrides `[store] path` of the config)
    #[arg(short, long, global = true)]
    store: Option<PathBuf>,

    /// TOML draw configuration
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Draw a roster and save the result as the active draw
    Draw {
        /// TOML roster with `participants` and `restrictions`
        #[arg(short, long)]
        roster: PathBuf,

        /// Label stored with the draw (defaults to the roster name)
        #[arg(short, long)]
        name: Option<String>,

        /// Independent shuffles to try before giving up
        #[arg(short, long)]
        attempts: Option<u32>,
    },

    /// List saved draws
    List,

    /// Make a saved draw the active one
    Activate {
        /// Draw id as printed by `list`
        id: String,
    },

    /// Print one reveal link per giver for the active draw
    Links {
        /// Prefix for the links
        #[arg(short, long, default_value = "http://localhost:3000")]
        base_url: String,
    },

    /// Redeem a token and show who its giver buys for
    Reveal {
        token: String,
    },

    /// Delete every saved draw
    Clear,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    giftdraw::console::init();

    let config = commands::load_config(cli.config.as_deref())?;
    let store = commands::store_path(cli.store, &config);
    match cli.command {
        Commands::Draw {
            roster,
            name,
            attempts,
        } => commands::draw::run(&roster, config, &store, name, attempts),
        Commands::List => commands::archive::list(&store),
        Commands::Activate { id } => commands::archive::activate(&store, &id),
        Commands::Links { base_url } => commands::tokens::links(&store, &base_url),
        Commands::Reveal { token } => commands::tokens::reveal(&store, &token),
        Commands::Clear => commands::archive::clear(&store),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_draw_with_global_options() {
        let cli = Cli::parse_from([
            "giftdraw", "draw", "--roster", "family.toml", "--attempts", "3", "--store", "x.json",
            "--config", "giftdraw.toml",
        ]);
        assert_eq!(cli.store, Some(PathBuf::from("x.json")));
        assert_eq!(cli.config, Some(PathBuf::from("giftdraw.toml")));
        let Commands::Draw { roster, attempts, .. } = cli.command else {
            panic!("expected draw");
        };
        assert_eq!(roster, PathBuf::from("family.toml"));
        assert_eq!(attempts, Some(3));
    }

    #[test]
    fn test_config_accepted_by_every_command() {
        let cli = Cli::parse_from(["giftdraw", "reveal", "abc", "--config", "giftdraw.toml"]);
        assert_eq!(cli.config, Some(PathBuf::from("giftdraw.toml")));
        assert!(matches!(cli.command, Commands::Reveal { .. }));
    }

    #[test]
    fn test_links_default_base_url() {
        let cli = Cli::parse_from(["giftdraw", "links"]);
        let Commands::Links { base_url } = cli.command else {
            panic!("expected links");
        };
        assert_eq!(base_url, "http://localhost:3000");
    }
}
