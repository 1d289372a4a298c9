//! Device location lookup.
//!
//! Location is optional everywhere. A failed or unavailable lookup is logged
//! and leaves the previous location in place.

use async_trait::async_trait;
use tokio::sync::Mutex;
use unispots_core::Coordinates;
use unispots_store::KeyValueStore;

use crate::state::ViewState;

#[derive(Debug, thiserror::Error)]
pub enum LocateError {
    #[error("location services are not available")]
    Unavailable,

    #[error("location permission denied")]
    Denied,

    #[error("location lookup failed: {0}")]
    Failed(String),
}

/// Source of the user's current position.
#[async_trait]
pub trait Locator: Send + Sync {
    /// Look up the current position once.
    ///
    /// # Errors
    ///
    /// Returns [`LocateError`] if there is no location capability, the user
    /// refused it, or the lookup failed.
    async fn current_position(&self) -> Result<Coordinates, LocateError>;
}

/// Locator that always answers with a fixed position, or is unavailable.
#[derive(Debug, Clone, Copy, Default)]
pub struct FixedLocator(pub Option<Coordinates>);

#[async_trait]
impl Locator for FixedLocator {
    async fn current_position(&self) -> Result<Coordinates, LocateError> {
        self.0.ok_or(LocateError::Unavailable)
    }
}

/// Ask `locator` for the position and record it on `state`.
///
/// The state lock is released while the lookup runs, so a search can start
/// or finish in the meantime. Returns the new location, or `None` when the
/// lookup failed.
pub async fn locate<L, S>(state: &Mutex<ViewState<S>>, locator: &L) -> Option<Coordinates>
where
    L: Locator,
    S: KeyValueStore,
{
    state.lock().await.begin_locate();
    let found = match locator.current_position().await {
        Ok(coords) => {
            tracing::debug!(lat = coords.lat, lng = coords.lng, "located user");
            Some(coords)
        }
        Err(LocateError::Unavailable) => {
            tracing::debug!("no location source; searching without a location bias");
            None
        }
        Err(e) => {
            tracing::error!(error = %e, "error getting location");
            None
        }
    };
    state.lock().await.finish_locate(found);
    found
}
