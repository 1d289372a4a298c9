//! Text rendering of places: the compact result card and the detail view.
//!
//! Missing or zero ratings and review counts are shown with fixed fallbacks.
//! The fallbacks live here only; the place records are never modified.

use std::fmt;

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use unispots_core::Place;

const CARD_RATING: f64 = 4.5;
const CARD_REVIEWS: u64 = 88;
const DETAIL_RATING: f64 = 4.5;
const DETAIL_REVIEWS: u64 = 100;

const IMAGE_BASE: &str = "https://loremflickr.com/800/600";
const IMAGE_FALLBACK_KEYWORDS: &str = "city,architecture";

/// Characters left alone by JavaScript's `encodeURIComponent`.
const URI_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

fn shown_rating(place: &Place, fallback: f64) -> f64 {
    // Zero and NaN count as missing.
    place.rating.filter(|r| r.abs() > 0.0).unwrap_or(fallback)
}

fn shown_reviews(place: &Place, fallback: u64) -> u64 {
    place.reviews.filter(|n| *n != 0).unwrap_or(fallback)
}

/// Number of filled stars out of five for `rating`.
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn star_count(rating: f64) -> usize {
    if rating.is_nan() {
        return 0;
    }
    rating.round().clamp(0.0, 5.0) as usize
}

fn stars(rating: f64) -> String {
    let filled = star_count(rating);
    format!("{}{}", "★".repeat(filled), "☆".repeat(5 - filled))
}

/// Illustrative photo URL, keyed by the place's image keywords, its first
/// tag, or a generic fallback.
#[must_use]
pub fn image_url(place: &Place) -> String {
    let keywords = place
        .image_keywords
        .as_deref()
        .filter(|k| !k.is_empty())
        .or_else(|| {
            place
                .tags
                .as_ref()
                .and_then(|tags| tags.first())
                .map(String::as_str)
                .filter(|t| !t.is_empty())
        })
        .unwrap_or(IMAGE_FALLBACK_KEYWORDS);
    format!(
        "{IMAGE_BASE}/{}/all",
        utf8_percent_encode(keywords, URI_COMPONENT)
    )
}

fn heart(saved: bool) -> &'static str {
    if saved {
        "♥ saved"
    } else {
        "♡"
    }
}

/// One line of stars plus the name, address, and description.
pub struct Card<'a> {
    pub place: &'a Place,
    pub saved: bool,
}

impl fmt::Display for Card<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let place = self.place;
        let rating = shown_rating(place, CARD_RATING);
        writeln!(
            f,
            "{} {rating} ({})  {}",
            stars(rating),
            shown_reviews(place, CARD_REVIEWS),
            heart(self.saved)
        )?;
        writeln!(f, "{}", place.name)?;
        writeln!(f, "  {}", place.address)?;
        if let Some(tags) = place.tags.as_ref().filter(|t| !t.is_empty()) {
            writeln!(f, "  {}", tags.join(" · "))?;
        }
        write!(f, "  {}", place.description)
    }
}

/// Full view of one place, including review snippets and the photo link.
pub struct Details<'a> {
    pub place: &'a Place,
    pub saved: bool,
}

impl fmt::Display for Details<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let place = self.place;
        let rating = shown_rating(place, DETAIL_RATING);

        writeln!(f, "{}  {}", place.name, heart(self.saved))?;
        writeln!(f, "{}", place.description)?;
        writeln!(f)?;
        writeln!(f, "Location: {}", place.address)?;
        writeln!(f, "          ({}, {})", place.lat, place.lng)?;
        writeln!(
            f,
            "Rating:   {rating} {} {} reviews",
            stars(rating),
            shown_reviews(place, DETAIL_REVIEWS)
        )?;
        if let Some(tags) = place.tags.as_ref().filter(|t| !t.is_empty()) {
            writeln!(f, "Tags:     {}", tags.join(", "))?;
        }
        writeln!(f, "Photo:    {}", image_url(place))?;
        writeln!(f)?;
        writeln!(f, "Student Vibes (Reviews)")?;
        match &place.review_snippets {
            Some(snippets) => {
                for snippet in snippets {
                    writeln!(f, "  \"{snippet}\"")?;
                }
            }
            None => writeln!(f, "  No reviews available yet for this spot.")?,
        }
        Ok(())
    }
}
