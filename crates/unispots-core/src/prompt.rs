//! Turns user filters into the natural-language instruction sent to the model.
//!
//! Everything here is pure: the same [`SearchParams`] and location always
//! produce the same prompt, so tests assert on substrings directly.

use crate::place::Coordinates;
use crate::search::SearchParams;

/// Persona passed as the system instruction on every request.
pub const SYSTEM_INSTRUCTION: &str = "You are a trendy local guide for Gen Z students. You know the aesthetic spots, the hidden gems, and the practical study hubs. Be concise.";

/// Stand-in for an empty query.
pub const DEFAULT_QUERY: &str = "recommended spots";

const NO_MUST_HAVES: &str = "None";

/// Output contract appended to every prompt. The model is asked for a short
/// summary sentence followed by exactly one fenced JSON array.
const RESPONSE_FORMAT: &str = r#"Find exactly 5-6 specific, real locations.

For each location provide:
1. Name
2. Exact Address
3. A short, aesthetic description (max 2 sentences).
4. 2-3 short tags (e.g. "Aesthetic", "Wifi", "Late Night").
5. Accurate coordinates.
6. A realistic rating (number between 3.8 and 4.9).
7. A realistic review count (number).
8. 2 short, realistic review snippets (what students say about it).
9. A single keyword string for searching images (e.g. "coffee shop interior", "modern library").

CRITICAL: Return the response primarily as a JSON block at the end. The text before it should be a very brief (1 sentence) summary like "Found these spots for you:".

The JSON structure must be:
```json
[
  {
    "name": "Location Name",
    "lat": 43.123,
    "lng": -79.123,
    "description": "Short summary",
    "address": "Street Address",
    "tags": ["Tag1", "Tag2"],
    "rating": 4.5,
    "reviews": 120,
    "reviewSnippets": ["Best coffee ever.", "Great for studying."],
    "imageKeywords": "latte art cafe"
  }
]
```"#;

/// A fully prepared model request: prompt, persona, and grounding hint.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchRequest {
    pub prompt: String,
    pub system_instruction: &'static str,
    /// Coordinates for the maps tool's location bias, when known.
    pub location_hint: Option<Coordinates>,
}

impl SearchRequest {
    #[must_use]
    pub fn new(params: &SearchParams, user_location: Option<Coordinates>) -> Self {
        Self {
            prompt: build_prompt(params, user_location),
            system_instruction: SYSTEM_INSTRUCTION,
            location_hint: user_location,
        }
    }
}

/// The query as it will appear in the prompt: trimmed, or [`DEFAULT_QUERY`]
/// when blank.
#[must_use]
pub fn effective_query(query: &str) -> &str {
    let trimmed = query.trim();
    if trimmed.is_empty() {
        DEFAULT_QUERY
    } else {
        trimmed
    }
}

/// Where to look, phrased for the prompt.
#[must_use]
pub fn location_clause(params: &SearchParams, user_location: Option<Coordinates>) -> String {
    match user_location {
        Some(loc) => format!(
            "near my current location (lat: {}, lng: {}) within a {} radius",
            loc.lat, loc.lng, params.radius
        ),
        None => format!(
            "in the Greater Toronto Area (GTA) within a {} range of downtown",
            params.radius
        ),
    }
}

/// Comma-joined must-have phrases, or `None` when no feature is toggled on.
#[must_use]
pub fn must_haves_clause(params: &SearchParams) -> String {
    let phrases = params.features.must_haves();
    if phrases.is_empty() {
        NO_MUST_HAVES.to_string()
    } else {
        phrases.join(", ")
    }
}

/// Build the full instruction for one search.
#[must_use]
pub fn build_prompt(params: &SearchParams, user_location: Option<Coordinates>) -> String {
    format!(
        "I am a university student in the GTA.\n\
         Find me a compilation of places that match these criteria:\n\
         - What: {category}\n\
         - Vibe: {vibe}\n\
         - Radius/Location: {location}\n\
         - Specific preferences: {query}\n\
         - Must Haves: {must_haves}\n\
         \n\
         {format}\n",
        category = params.category,
        vibe = params.vibe,
        location = location_clause(params, user_location),
        query = effective_query(&params.query),
        must_haves = must_haves_clause(params),
        format = RESPONSE_FORMAT,
    )
}

#[cfg(test)]
#[path = "prompt_test.rs"]
mod tests;
