//! Result listing shared by `search` and `saved`.

use unispots_core::{GroundingChunk, Place};
use unispots_discovery::{Card, Details, ViewState};
use unispots_store::KeyValueStore;

/// Print numbered cards (1-based) for `places`.
pub(crate) fn print_cards<S: KeyValueStore>(state: &ViewState<S>, places: &[Place]) {
    for (i, place) in places.iter().enumerate() {
        let card = Card {
            place,
            saved: state.is_saved(place),
        };
        println!("[{}] {card}", i + 1);
        println!();
    }
}

pub(crate) fn print_details<S: KeyValueStore>(state: &ViewState<S>, place: &Place) {
    let details = Details {
        place,
        saved: state.is_saved(place),
    };
    println!("{details}");
}

pub(crate) fn print_citations(citations: &[GroundingChunk]) {
    let sources: Vec<(&str, &str)> = citations
        .iter()
        .filter_map(|chunk| {
            chunk
                .maps
                .as_ref()
                .map(|m| (m.title.as_str(), m.uri.as_str()))
                .or_else(|| chunk.web.as_ref().map(|w| (w.title.as_str(), w.uri.as_str())))
        })
        .filter(|(_, uri)| !uri.is_empty())
        .collect();
    if sources.is_empty() {
        return;
    }
    println!("Sources:");
    for (title, uri) in sources {
        println!("  {title} <{uri}>");
    }
}

/// Convert a 1-based user index into a 0-based one.
pub(crate) fn to_index(n: usize) -> anyhow::Result<usize> {
    n.checked_sub(1)
        .ok_or_else(|| anyhow::anyhow!("places are numbered from 1"))
}
