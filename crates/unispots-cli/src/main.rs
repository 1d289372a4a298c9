mod catalog;
mod output;
mod saved;
mod search;
mod terminal;

use clap::{CommandFactory, Parser, Subcommand};
use tracing_subscriber::EnvFilter;
use unispots_core::AppConfig;

use crate::saved::SavedCommands;
use crate::search::SearchArgs;

#[derive(Debug, Parser)]
#[command(name = "unispots")]
#[command(about = "Find study spots, cafes and hangouts around campus")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Search for places matching a query and filters
    Search(SearchArgs),
    /// Manage saved places
    Saved {
        #[command(subcommand)]
        command: SavedCommands,
    },
    /// List suggested searches
    Suggestions,
    /// List the vibes accepted by `search --vibe`
    Vibes,
    /// List the categories accepted by `search --category`
    Categories,
}

/// Load configuration and install the tracing subscriber. `RUST_LOG` wins
/// over the configured log level.
fn init() -> anyhow::Result<AppConfig> {
    let config = unispots_core::load_app_config()?;
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.log_level.clone()))?;
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();
    tracing::debug!(config = ?config, "configuration loaded");
    Ok(config)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    match cli.command {
        Some(Commands::Search(args)) => {
            let config = init()?;
            search::run_search_command(&config, &args).await?;
        }
        Some(Commands::Saved { command }) => {
            let config = init()?;
            saved::run_saved_command(&config, &command)?;
        }
        Some(Commands::Suggestions) => catalog::print_suggestions(),
        Some(Commands::Vibes) => catalog::print_vibes(),
        Some(Commands::Categories) => catalog::print_categories(),
        None => Cli::command().print_help()?,
    }

    Ok(())
}
