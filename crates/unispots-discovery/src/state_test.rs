use unispots_core::{Coordinates, Place, DEFAULT_MAP_CENTER};
use unispots_store::{KeyValueStore, MemoryStore, SavedPlaces, StoreError, SAVED_PLACES_KEY};

use super::*;
use crate::pipeline::SearchOutcome;

fn place(name: &str, address: &str, lat: f64, lng: f64) -> Place {
    Place::new(name, lat, lng, "d", address)
}

fn outcome(places: Vec<Place>, summary: &str) -> SearchOutcome {
    SearchOutcome {
        places,
        summary: summary.to_string(),
        citations: None,
    }
}

/// Store whose writes always fail.
#[derive(Default)]
struct ReadOnlyStore {
    inner: MemoryStore,
}

impl KeyValueStore for ReadOnlyStore {
    fn get_item(&self, key: &str) -> Option<String> {
        self.inner.get_item(key)
    }

    fn set_item(&mut self, _key: &str, _value: String) -> Result<(), StoreError> {
        Err(StoreError::Io {
            path: "read-only".to_string(),
            source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "read-only"),
        })
    }

    fn remove_item(&mut self, _key: &str) -> Result<(), StoreError> {
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// search lifecycle
// ---------------------------------------------------------------------------

#[test]
fn begin_search_clears_results_and_sets_loading() {
    let mut state = ViewState::new(MemoryStore::new());
    let first = state.begin_search();
    assert!(state.complete_search(first, outcome(vec![place("A", "1", 1.0, 1.0)], "ok")));
    assert_eq!(state.results().len(), 1);

    state.begin_search();
    assert!(state.results().is_empty());
    assert!(state.summary().is_none());
    assert!(state.is_loading());
}

#[test]
fn completion_replaces_results_in_order() {
    let mut state = ViewState::new(MemoryStore::new());
    let ticket = state.begin_search();
    let places = vec![place("B", "2", 1.0, 1.0), place("A", "1", 2.0, 2.0)];

    assert!(state.complete_search(ticket, outcome(places.clone(), "Found these spots:")));
    assert_eq!(state.results(), places.as_slice());
    assert_eq!(state.summary(), Some("Found these spots:"));
    assert!(!state.is_loading());
}

#[test]
fn stale_completion_is_discarded() {
    let mut state = ViewState::new(MemoryStore::new());
    let older = state.begin_search();
    let newer = state.begin_search();

    assert!(!state.complete_search(older, outcome(vec![place("Old", "x", 0.0, 0.0)], "old")));
    assert!(state.results().is_empty());
    assert!(state.is_loading(), "newer search is still pending");

    assert!(state.complete_search(newer, outcome(vec![place("New", "y", 0.0, 0.0)], "new")));
    assert_eq!(state.results()[0].name, "New");

    assert!(!state.complete_search(older, outcome(vec![], "late")));
    assert_eq!(state.results()[0].name, "New");
}

#[test]
fn tickets_are_monotonic() {
    let mut state = ViewState::new(MemoryStore::new());
    let a = state.begin_search();
    let b = state.begin_search();
    assert!(b > a);
    assert_eq!(b.sequence(), a.sequence() + 1);
}

// ---------------------------------------------------------------------------
// map view
// ---------------------------------------------------------------------------

#[test]
fn map_defaults_to_toronto_without_results() {
    let state = ViewState::new(MemoryStore::new());
    let view = state.map_view();
    assert_eq!(view.center, DEFAULT_MAP_CENTER);
    assert_eq!(view.zoom, 13);
    assert!(view.bounds.is_none());
}

#[test]
fn map_centers_on_user_and_fits_results() {
    let mut state = ViewState::new(MemoryStore::new());
    let here = Coordinates::new(43.66, -79.39);
    state.set_user_location(here);

    let ticket = state.begin_search();
    state.complete_search(
        ticket,
        outcome(
            vec![place("A", "1", 43.60, -79.40), place("B", "2", 43.70, -79.30)],
            "",
        ),
    );

    let view = state.map_view();
    assert_eq!(view.center, here);
    assert_eq!(view.zoom, 14);
    let bounds = view.bounds.expect("bounds for two markers");
    assert!((bounds.south - 43.60).abs() < f64::EPSILON);
    assert!((bounds.east - -79.30).abs() < f64::EPSILON);
}

// ---------------------------------------------------------------------------
// selection
// ---------------------------------------------------------------------------

#[test]
fn selection_is_a_snapshot() {
    let mut state = ViewState::new(MemoryStore::new());
    let ticket = state.begin_search();
    state.complete_search(ticket, outcome(vec![place("A", "1", 1.0, 1.0)], ""));

    assert_eq!(state.select_result(0).map(|p| p.name.as_str()), Some("A"));
    state.begin_search();
    assert_eq!(state.selected().map(|p| p.name.as_str()), Some("A"));

    state.close_details();
    assert!(state.selected().is_none());
}

#[test]
fn select_out_of_range_keeps_previous_selection() {
    let mut state = ViewState::new(MemoryStore::new());
    state.select(place("A", "1", 1.0, 1.0));
    assert!(state.select_result(5).is_none());
    assert_eq!(state.selected().map(|p| p.name.as_str()), Some("A"));
}

// ---------------------------------------------------------------------------
// saved places
// ---------------------------------------------------------------------------

#[test]
fn save_then_unsave_persists_each_time() {
    let mut state = ViewState::new(MemoryStore::new());
    let a = place("A", "addr", 1.0, 1.0);

    assert!(state.toggle_save(&a).unwrap());
    assert!(state.is_saved(&a));
    let stored = SavedPlaces::load(state.store());
    assert_eq!(stored.as_slice(), &[a.clone()]);

    assert!(!state.toggle_save(&a).unwrap());
    assert!(!state.is_saved(&a));
    assert_eq!(state.store().get_item(SAVED_PLACES_KEY).as_deref(), Some("[]"));
}

#[test]
fn saved_list_is_loaded_at_startup() {
    let mut store = MemoryStore::new();
    SavedPlaces::from_places(vec![place("A", "1", 1.0, 1.0)])
        .persist(&mut store)
        .unwrap();

    let state = ViewState::new(store);
    assert_eq!(state.saved().len(), 1);
}

#[test]
fn failed_write_reports_error_but_keeps_toggle() {
    let mut state = ViewState::new(ReadOnlyStore::default());
    let a = place("A", "addr", 1.0, 1.0);

    let err = state.toggle_save(&a).unwrap_err();
    assert!(matches!(err, StoreError::Io { .. }));
    assert!(state.is_saved(&a));
}

#[test]
fn unsave_at_removes_and_persists() {
    let mut state = ViewState::new(MemoryStore::new());
    state.toggle_save(&place("A", "1", 1.0, 1.0)).unwrap();
    state.toggle_save(&place("B", "2", 1.0, 1.0)).unwrap();

    let removed = state.unsave_at(0).unwrap();
    assert_eq!(removed.map(|p| p.name), Some("A".to_string()));
    assert_eq!(SavedPlaces::load(state.store()).len(), 1);
    assert!(state.unsave_at(9).unwrap().is_none());
}
