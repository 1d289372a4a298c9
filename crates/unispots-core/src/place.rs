//! The place record shared by search results, the map, and the saved list.

use serde::{Deserialize, Serialize};

/// Downtown Toronto. Used when no user location is known.
pub const DEFAULT_MAP_CENTER: Coordinates = Coordinates {
    lat: 43.6532,
    lng: -79.3832,
};

/// A latitude/longitude pair in degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub lat: f64,
    pub lng: f64,
}

impl Coordinates {
    #[must_use]
    pub fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }
}

/// A point of interest as described by the model.
///
/// Optional fields stay `None` when the model omits them; display defaults
/// are applied by the presentation layer, never stored here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Place {
    pub name: String,
    pub lat: f64,
    pub lng: f64,
    pub description: String,
    pub address: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rating: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reviews: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub review_snippets: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_keywords: Option<String>,
}

/// Borrowed `(name, address)` key. Two places with equal identities are the
/// same entry for save/unsave, whatever their other fields say.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PlaceIdentity<'a> {
    pub name: &'a str,
    pub address: &'a str,
}

impl Place {
    /// Minimal record with only the required fields set.
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        lat: f64,
        lng: f64,
        description: impl Into<String>,
        address: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            lat,
            lng,
            description: description.into(),
            address: address.into(),
            tags: None,
            rating: None,
            reviews: None,
            review_snippets: None,
            image_keywords: None,
        }
    }

    #[must_use]
    pub fn identity(&self) -> PlaceIdentity<'_> {
        PlaceIdentity {
            name: &self.name,
            address: &self.address,
        }
    }

    #[must_use]
    pub fn same_place(&self, other: &Place) -> bool {
        self.identity() == other.identity()
    }

    #[must_use]
    pub fn coordinates(&self) -> Coordinates {
        Coordinates::new(self.lat, self.lng)
    }
}

/// Axis-aligned box around a set of markers, for fit-to-bounds.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MapBounds {
    pub south: f64,
    pub west: f64,
    pub north: f64,
    pub east: f64,
}

impl MapBounds {
    /// Smallest box containing every place. `None` for an empty slice.
    #[must_use]
    pub fn around(places: &[Place]) -> Option<Self> {
        let first = places.first()?;
        let seed = Self {
            south: first.lat,
            west: first.lng,
            north: first.lat,
            east: first.lng,
        };
        Some(places[1..].iter().fold(seed, |b, p| Self {
            south: b.south.min(p.lat),
            west: b.west.min(p.lng),
            north: b.north.max(p.lat),
            east: b.east.max(p.lng),
        }))
    }

    #[must_use]
    pub fn center(&self) -> Coordinates {
        Coordinates::new(
            (self.south + self.north) / 2.0,
            (self.west + self.east) / 2.0,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identity_ignores_non_key_fields() {
        let mut a = Place::new("A", 1.0, 2.0, "d", "addr");
        a.rating = Some(4.8);
        let mut b = Place::new("A", 9.0, 9.0, "something else", "addr");
        b.rating = Some(3.9);

        assert!(a.same_place(&b));
        assert_eq!(a.identity(), b.identity());
    }

    #[test]
    fn identity_differs_on_address() {
        let a = Place::new("A", 1.0, 2.0, "d", "addr");
        let b = Place::new("A", 1.0, 2.0, "d", "other addr");
        assert!(!a.same_place(&b));
    }

    #[test]
    fn serializes_with_camel_case_and_skips_absent_optionals() {
        let mut place = Place::new("A", 1.0, 2.0, "d", "addr");
        place.image_keywords = Some("latte art".to_string());
        let value = serde_json::to_value(&place).unwrap();

        assert_eq!(value["imageKeywords"], "latte art");
        assert!(value.get("rating").is_none());
        assert!(value.get("reviewSnippets").is_none());
        assert!(value.get("image_keywords").is_none());
    }

    #[test]
    fn map_bounds_cover_all_places() {
        let places = vec![
            Place::new("A", 43.6, -79.4, "d", "a"),
            Place::new("B", 43.7, -79.3, "d", "b"),
            Place::new("C", 43.65, -79.5, "d", "c"),
        ];
        let bounds = MapBounds::around(&places).unwrap();
        assert!((bounds.south - 43.6).abs() < f64::EPSILON);
        assert!((bounds.north - 43.7).abs() < f64::EPSILON);
        assert!((bounds.west - -79.5).abs() < f64::EPSILON);
        assert!((bounds.east - -79.3).abs() < f64::EPSILON);
    }

    #[test]
    fn map_bounds_empty_is_none() {
        assert!(MapBounds::around(&[]).is_none());
    }
}
