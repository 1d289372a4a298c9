//! The user's saved places.
//!
//! Kept as a JSON array string under [`SAVED_PLACES_KEY`], read once at
//! startup and rewritten in full on every change. Entries are unique by
//! `(name, address)`.

use unispots_core::Place;

use crate::error::StoreError;
use crate::kv::KeyValueStore;

pub const SAVED_PLACES_KEY: &str = "unispots_saved";

#[derive(Debug, Clone, Default, PartialEq)]
pub struct SavedPlaces {
    places: Vec<Place>,
}

impl SavedPlaces {
    /// Read the saved list. Absent or undecodable entries give an empty list.
    #[must_use]
    pub fn load(store: &impl KeyValueStore) -> Self {
        let Some(raw) = store.get_item(SAVED_PLACES_KEY) else {
            return Self::default();
        };
        match serde_json::from_str::<Vec<Place>>(&raw) {
            Ok(places) => Self::from_places(places),
            Err(e) => {
                tracing::error!(error = %e, "failed to load saved places");
                Self::default()
            }
        }
    }

    /// Build from an arbitrary list, keeping the first of any duplicates.
    #[must_use]
    pub fn from_places(places: Vec<Place>) -> Self {
        let mut saved = Self::default();
        for place in places {
            if !saved.contains(&place) {
                saved.places.push(place);
            }
        }
        saved
    }

    /// Write the full list back under [`SAVED_PLACES_KEY`].
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] if serialization or the store write fails.
    pub fn persist(&self, store: &mut impl KeyValueStore) -> Result<(), StoreError> {
        let json = serde_json::to_string(&self.places)?;
        store.set_item(SAVED_PLACES_KEY, json)
    }

    #[must_use]
    pub fn contains(&self, place: &Place) -> bool {
        self.places.iter().any(|p| p.same_place(place))
    }

    /// Remove `place` if saved, otherwise append a copy. Returns whether it is
    /// saved afterwards.
    pub fn toggle(&mut self, place: &Place) -> bool {
        if self.contains(place) {
            self.places.retain(|p| !p.same_place(place));
            false
        } else {
            self.places.push(place.clone());
            true
        }
    }

    pub fn remove_at(&mut self, index: usize) -> Option<Place> {
        (index < self.places.len()).then(|| self.places.remove(index))
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Place> {
        self.places.get(index)
    }

    #[must_use]
    pub fn as_slice(&self) -> &[Place] {
        &self.places
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Place> {
        self.places.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.places.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.places.is_empty()
    }
}

impl<'a> IntoIterator for &'a SavedPlaces {
    type Item = &'a Place;
    type IntoIter = std::slice::Iter<'a, Place>;

    fn into_iter(self) -> Self::IntoIter {
        self.places.iter()
    }
}
