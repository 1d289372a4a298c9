//! One search, end to end: filters in, places out, state updated.

use tokio::sync::Mutex;
use unispots_core::{
    extract_places, leading_text, GroundingChunk, Place, SearchParams, SearchRequest,
    SearchResult,
};
use unispots_gemini::{GenerateBackend, SearchExecutor};
use unispots_store::KeyValueStore;

use crate::state::ViewState;

/// What a finished search contributes to the view.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SearchOutcome {
    pub places: Vec<Place>,
    /// Prose ahead of the place block, or the whole notice when the call
    /// failed or the reply had no block.
    pub summary: String,
    pub citations: Option<Vec<GroundingChunk>>,
}

impl From<SearchResult> for SearchOutcome {
    fn from(result: SearchResult) -> Self {
        let places = extract_places(&result.text);
        let summary = leading_text(&result.text).to_string();
        Self {
            places,
            summary,
            citations: result.grounding_chunks,
        }
    }
}

/// Run one search with `params`, biased to the state's user location, and
/// apply the outcome to `state`.
///
/// `state` is locked only to issue the ticket and to apply the outcome. While
/// the call is in flight other searches and location lookups may proceed.
///
/// Returns `true` when the outcome was applied; `false` when a newer search
/// superseded this one while it was in flight.
pub async fn run_search<B, S>(
    executor: &SearchExecutor<B>,
    state: &Mutex<ViewState<S>>,
    params: &SearchParams,
) -> bool
where
    B: GenerateBackend,
    S: KeyValueStore,
{
    let (ticket, request) = {
        let mut state = state.lock().await;
        let ticket = state.begin_search();
        (ticket, SearchRequest::new(params, state.user_location()))
    };
    tracing::info!(
        ticket = ticket.sequence(),
        filters = %params.summary_line(),
        located = request.location_hint.is_some(),
        "starting search"
    );

    let outcome = SearchOutcome::from(executor.search(&request).await);
    tracing::info!(
        ticket = ticket.sequence(),
        places = outcome.places.len(),
        "search finished"
    );

    state.lock().await.complete_search(ticket, outcome)
}
