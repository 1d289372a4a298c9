//! Shared view state: current results, user location, selection, saved list.
//!
//! Every search takes a [`SearchTicket`]. Only the most recently issued ticket
//! may replace the results, so a slow response to an older search cannot
//! overwrite a newer one.

use unispots_core::{Coordinates, GroundingChunk, MapBounds, Place, DEFAULT_MAP_CENTER};
use unispots_store::{KeyValueStore, SavedPlaces, StoreError};

use crate::pipeline::SearchOutcome;

const DEFAULT_ZOOM: u8 = 13;
const LOCATED_ZOOM: u8 = 14;

/// Identifies one search. Monotonic per [`ViewState`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SearchTicket(u64);

impl SearchTicket {
    #[must_use]
    pub fn sequence(self) -> u64 {
        self.0
    }
}

/// Where the map should look and what it should fit.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MapView {
    pub center: Coordinates,
    pub zoom: u8,
    /// Box around the current markers, when there are any.
    pub bounds: Option<MapBounds>,
}

pub struct ViewState<S> {
    results: Vec<Place>,
    summary: Option<String>,
    citations: Vec<GroundingChunk>,
    user_location: Option<Coordinates>,
    selected: Option<Place>,
    loading: bool,
    locating: bool,
    latest_ticket: u64,
    saved: SavedPlaces,
    store: S,
}

impl<S: KeyValueStore> ViewState<S> {
    /// Fresh state; the saved list is read from `store` once, here.
    #[must_use]
    pub fn new(store: S) -> Self {
        let saved = SavedPlaces::load(&store);
        tracing::debug!(saved = saved.len(), "loaded saved places");
        Self {
            results: Vec::new(),
            summary: None,
            citations: Vec::new(),
            user_location: None,
            selected: None,
            loading: false,
            locating: false,
            latest_ticket: 0,
            saved,
            store,
        }
    }

    // -----------------------------------------------------------------------
    // search lifecycle
    // -----------------------------------------------------------------------

    /// Clear the current results, raise the loading flag, and issue a ticket.
    pub fn begin_search(&mut self) -> SearchTicket {
        self.latest_ticket += 1;
        self.results.clear();
        self.summary = None;
        self.citations.clear();
        self.loading = true;
        SearchTicket(self.latest_ticket)
    }

    /// Apply a finished search. Returns `false` (and changes nothing) when a
    /// newer search has been started since `ticket` was issued.
    pub fn complete_search(&mut self, ticket: SearchTicket, outcome: SearchOutcome) -> bool {
        if ticket.0 != self.latest_ticket {
            tracing::debug!(
                ticket = ticket.0,
                latest = self.latest_ticket,
                "discarding stale search response"
            );
            return false;
        }
        self.results = outcome.places;
        self.summary = Some(outcome.summary);
        self.citations = outcome.citations.unwrap_or_default();
        self.loading = false;
        true
    }

    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// Results in display order, which is also marker order.
    #[must_use]
    pub fn results(&self) -> &[Place] {
        &self.results
    }

    /// Short line shown above the results: the model's summary sentence or
    /// the failure notice.
    #[must_use]
    pub fn summary(&self) -> Option<&str> {
        self.summary.as_deref()
    }

    #[must_use]
    pub fn citations(&self) -> &[GroundingChunk] {
        &self.citations
    }

    // -----------------------------------------------------------------------
    // location
    // -----------------------------------------------------------------------

    pub fn begin_locate(&mut self) {
        self.locating = true;
    }

    /// Clear the locating flag; keep the previous location when `found` is
    /// `None`.
    pub fn finish_locate(&mut self, found: Option<Coordinates>) {
        if let Some(coords) = found {
            self.user_location = Some(coords);
        }
        self.locating = false;
    }

    pub fn set_user_location(&mut self, coords: Coordinates) {
        self.user_location = Some(coords);
    }

    #[must_use]
    pub fn user_location(&self) -> Option<Coordinates> {
        self.user_location
    }

    #[must_use]
    pub fn is_locating(&self) -> bool {
        self.locating
    }

    /// Map framing for the current location and results.
    #[must_use]
    pub fn map_view(&self) -> MapView {
        let (center, zoom) = match self.user_location {
            Some(loc) => (loc, LOCATED_ZOOM),
            None => (DEFAULT_MAP_CENTER, DEFAULT_ZOOM),
        };
        MapView {
            center,
            zoom,
            bounds: MapBounds::around(&self.results),
        }
    }

    // -----------------------------------------------------------------------
    // selection
    // -----------------------------------------------------------------------

    /// Open the detail view on a copy of `place` as it is now.
    pub fn select(&mut self, place: Place) {
        self.selected = Some(place);
    }

    /// Select the result at `index`, if it exists.
    pub fn select_result(&mut self, index: usize) -> Option<&Place> {
        let place = self.results.get(index)?.clone();
        self.selected = Some(place);
        self.selected.as_ref()
    }

    pub fn close_details(&mut self) {
        self.selected = None;
    }

    #[must_use]
    pub fn selected(&self) -> Option<&Place> {
        self.selected.as_ref()
    }

    // -----------------------------------------------------------------------
    // saved places
    // -----------------------------------------------------------------------

    /// Save or unsave `place` by `(name, address)` and persist the full list.
    /// Returns whether the place is saved afterwards.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] if the list could not be written. The in-memory
    /// toggle still stands.
    pub fn toggle_save(&mut self, place: &Place) -> Result<bool, StoreError> {
        let now_saved = self.saved.toggle(place);
        tracing::info!(name = %place.name, saved = now_saved, "toggled saved place");
        self.saved.persist(&mut self.store)?;
        Ok(now_saved)
    }

    /// Remove the saved place at `index` and persist.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] if the list could not be written.
    pub fn unsave_at(&mut self, index: usize) -> Result<Option<Place>, StoreError> {
        let removed = self.saved.remove_at(index);
        if removed.is_some() {
            self.saved.persist(&mut self.store)?;
        }
        Ok(removed)
    }

    #[must_use]
    pub fn is_saved(&self, place: &Place) -> bool {
        self.saved.contains(place)
    }

    #[must_use]
    pub fn saved(&self) -> &SavedPlaces {
        &self.saved
    }

    #[must_use]
    pub fn store(&self) -> &S {
        &self.store
    }
}

#[cfg(test)]
#[path = "state_test.rs"]
mod tests;
