//! CLI argument definitions and parsing structures.

use super::types::{gameweeks::GameweekFilter, ids::PlayerId, time::CacheTtl};
use clap::{Args, Parser, Subcommand};

/// Arguments for the `player` subcommand.
#[derive(Debug, Args)]
pub struct PlayerArgs {
    /// FPL player ID to query.
    #[clap(long)]
    pub id: Option<PlayerId>,

    /// Player name to fuzzy match (web name, full name, or known-as).
    #[clap(long)]
    pub name: Option<String>,

    /// Filter to a gameweek or inclusive range (repeatable): `--gw 5 --gw 1-3 --gw 6|8`.
    #[clap(long = "gw", value_name = "GAMEWEEKS")]
    pub gameweeks: Vec<GameweekFilter>,
}

impl PlayerArgs {
    /// Fold every `--gw` occurrence into a single normalized filter.
    pub fn gameweek_filter(&self) -> GameweekFilter {
        self.gameweeks
            .iter()
            .fold(GameweekFilter::default(), |mut acc, gw| {
                acc.extend(gw);
                acc
            })
    }
}

#[derive(Debug, Parser)]
#[clap(
    name = "fpl",
    version,
    about = "Interact with the Fantasy Premier League API from the terminal",
    long_about = "fpl is a Fantasy Premier League helper that wraps the public FPL API.\n\n\
It can resolve players either by ID or name (with fuzzy matching) and print their\n\
gameweek-by-gameweek performance in human-friendly tables or machine-friendly JSON."
)]
pub struct Fpl {
    /// Print structured JSON output instead of a table.
    #[clap(long, global = true)]
    pub json: bool,

    /// Cache duration for bootstrap-static requests (set to 0 to disable caching).
    #[clap(long, global = true, default_value_t = CacheTtl::default())]
    pub cache_ttl: CacheTtl,

    /// Log request and matching details to stderr.
    #[clap(long, short, global = true)]
    pub verbose: bool,

    #[clap(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Show stats for an FPL player.
    ///
    /// Identify the target by ID (exact) or by name (fuzzy match). Gameweeks
    /// can be filtered using --gw flags with single values or inclusive ranges.
    #[clap(after_help = "Examples:\n  fpl player --id 123\n  fpl player --name \"Haaland\"\n  \
fpl player --name \"Haaland\" --gw 1-3\n  fpl player --name \"Salah\" --gw \"1|4|6-8\" --json")]
    Player(PlayerArgs),
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;
    use std::time::Duration;

    #[test]
    fn test_cli_definition_is_valid() {
        Fpl::command().debug_assert();
    }

    #[test]
    fn test_parse_player_by_name_with_gameweeks() {
        let app = Fpl::try_parse_from([
            "fpl", "player", "--name", "Salah", "--gw", "1|4", "--gw", "6-8", "--gw", "2",
        ])
        .unwrap();

        assert!(!app.json);
        assert_eq!(app.cache_ttl.as_duration(), Duration::from_secs(30));
        let Commands::Player(args) = app.command;
        assert_eq!(args.name.as_deref(), Some("Salah"));
        assert!(args.id.is_none());
        assert_eq!(args.gameweek_filter().to_string(), "1-2,4,6-8");
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let app = Fpl::try_parse_from([
            "fpl", "player", "--id", "355", "--json", "--cache-ttl", "0",
        ])
        .unwrap();

        assert!(app.json);
        assert!(app.cache_ttl.is_disabled());
        let Commands::Player(args) = app.command;
        assert_eq!(args.id, Some(PlayerId::new(355)));
        assert!(args.gameweek_filter().is_empty());
    }

    #[test]
    fn test_invalid_gameweek_rejected_at_parse_time() {
        let result = Fpl::try_parse_from(["fpl", "player", "--id", "1", "--gw", "3-1"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_invalid_cache_ttl_rejected() {
        let result = Fpl::try_parse_from(["fpl", "--cache-ttl", "later", "player", "--id", "1"]);
        assert!(result.is_err());
    }
}
