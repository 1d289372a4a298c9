//! `unispots saved`: list, inspect, remove, and share saved places.

use clap::Subcommand;
use unispots_core::{AppConfig, Place};
use unispots_discovery::{share_data, share_place, ShareOutcome, ViewState};
use unispots_store::{FileStore, KeyValueStore};

use crate::output;
use crate::terminal::Osc52Clipboard;

/// Sub-commands available under `saved`.
#[derive(Debug, Subcommand)]
pub(crate) enum SavedCommands {
    /// List saved places
    List,
    /// Show the detail view of saved place N
    Show {
        #[arg(value_name = "N")]
        index: usize,
    },
    /// Remove saved place N
    Remove {
        #[arg(value_name = "N")]
        index: usize,
    },
    /// Copy a shareable blurb for saved place N
    Share {
        #[arg(value_name = "N")]
        index: usize,
    },
}

/// # Errors
///
/// Returns an error if `N` is out of range or the store cannot be written.
pub(crate) fn run_saved_command(
    config: &AppConfig,
    command: &SavedCommands,
) -> anyhow::Result<()> {
    let mut state = ViewState::new(FileStore::open(&config.store_path));

    match command {
        SavedCommands::List => list(&state),
        SavedCommands::Show { index } => {
            let place = saved_at(&state, *index)?.clone();
            state.select(place.clone());
            output::print_details(&state, &place);
        }
        SavedCommands::Remove { index } => {
            let removed = state.unsave_at(output::to_index(*index)?)?;
            match removed {
                Some(place) => println!("Removed {}", place.name),
                None => anyhow::bail!(out_of_range(*index, state.saved().len())),
            }
        }
        SavedCommands::Share { index } => {
            let place = saved_at(&state, *index)?;
            let data = share_data(place);
            match share_place(place, None, &Osc52Clipboard) {
                ShareOutcome::Copied => println!("Copied!"),
                ShareOutcome::Shared | ShareOutcome::Unavailable | ShareOutcome::Failed => {}
            }
            println!("{}", data.clipboard_text());
        }
    }

    Ok(())
}

fn list(state: &ViewState<FileStore>) {
    let path = state.store().path().display();
    if state.saved().is_empty() {
        println!("No saved places in {path}; use `search --save N` to add one.");
        return;
    }
    println!("Saved Places ({}) in {path}", state.saved().len());
    println!();
    output::print_cards(state, state.saved().as_slice());
}

fn saved_at<S: KeyValueStore>(state: &ViewState<S>, n: usize) -> anyhow::Result<&Place> {
    state
        .saved()
        .get(output::to_index(n)?)
        .ok_or_else(|| anyhow::anyhow!(out_of_range(n, state.saved().len())))
}

fn out_of_range(n: usize, len: usize) -> String {
    format!("no saved place #{n}; {len} saved")
}
