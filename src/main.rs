//! Entry point: parse CLI, set up logging and dispatch to command handlers.

use clap::Parser;
use fpl_cli::{
    cli::{Commands, Fpl},
    commands::player::{handle_player, PlayerParams},
    fpl::http::resolve_base_url,
    Result,
};
use tracing_subscriber::EnvFilter;

/// Run the CLI.
#[tokio::main]
async fn main() {
    let app = Fpl::parse();

    // RUST_LOG takes precedence; otherwise warnings only unless --verbose.
    let default_level = if app.verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = run(app).await {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

async fn run(app: Fpl) -> Result<()> {
    match app.command {
        Commands::Player(args) => {
            let gameweeks = args.gameweek_filter();
            handle_player(PlayerParams {
                id: args.id,
                name: args.name,
                gameweeks,
                as_json: app.json,
                cache_ttl: app.cache_ttl,
                base_url: resolve_base_url(),
            })
            .await?
        }
    }

    Ok(())
}
