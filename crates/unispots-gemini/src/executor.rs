//! Search executor: one model call per search, failures folded into text.
//!
//! State machine per invocation: `Idle -> Pending -> {Success, Failed}`, then
//! back to `Pending` on the next search.
//! The executor never retries and never surfaces an error type; a transport
//! or endpoint failure becomes [`FAILURE_TEXT`] with no citations, which the
//! extractor then reads as zero places.

use tokio::sync::watch;
use unispots_core::{SearchRequest, SearchResult};

use crate::client::GenerateBackend;

/// Text returned in place of the model's answer when the call fails.
pub const FAILURE_TEXT: &str = "Error searching places. Please try again.";

/// Text used when the model answers with no text at all.
pub const NO_RESULTS_TEXT: &str = "No results found.";

/// Where the executor is in its most recent search.
///
/// `Idle` is only the state before the first search. `Success` and `Failed`
/// are resting states too: no call is in flight, and the next search moves
/// straight to `Pending` without passing through `Idle` again. With
/// overlapping searches the value is whichever transition happened last.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExecutorState {
    Idle,
    Pending,
    Success,
    Failed,
}

/// Runs searches against a [`GenerateBackend`] and publishes its state on a
/// watch channel so a caller can drive a loading indicator.
pub struct SearchExecutor<B> {
    backend: B,
    state: watch::Sender<ExecutorState>,
}

impl<B: GenerateBackend> SearchExecutor<B> {
    #[must_use]
    pub fn new(backend: B) -> Self {
        let (state, _) = watch::channel(ExecutorState::Idle);
        Self { backend, state }
    }

    /// State after the most recent transition.
    #[must_use]
    pub fn state(&self) -> ExecutorState {
        *self.state.borrow()
    }

    /// Receiver that observes every state transition.
    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<ExecutorState> {
        self.state.subscribe()
    }

    #[must_use]
    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// Issue one search. Always returns a result; never retries or caches.
    pub async fn search(&self, request: &SearchRequest) -> SearchResult {
        self.state.send_replace(ExecutorState::Pending);

        match self.backend.generate(request).await {
            Ok(mut result) => {
                if result.text.is_empty() {
                    result.text = NO_RESULTS_TEXT.to_string();
                }
                tracing::info!(
                    chars = result.text.len(),
                    citations = result.grounding_chunks.as_ref().map_or(0, Vec::len),
                    "search completed"
                );
                self.state.send_replace(ExecutorState::Success);
                result
            }
            Err(e) => {
                tracing::error!(error = %e, "Gemini search failed");
                self.state.send_replace(ExecutorState::Failed);
                SearchResult {
                    text: FAILURE_TEXT.to_string(),
                    grounding_chunks: None,
                }
            }
        }
    }
}
