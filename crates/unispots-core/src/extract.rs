//! Pulls the structured place list out of a free-text model reply.
//!
//! The model is asked to end its answer with a single fenced block opened by
//! ```` ```json ````. Only the first such block is considered. Anything that
//! goes wrong (no block, bad JSON, wrong shape) yields zero places; callers
//! never see an error from [`extract_places`].

use crate::error::ExtractError;
use crate::place::Place;

const OPEN_FENCE: &str = "```json";
const CLOSE_FENCE: &str = "```";

/// Returns the raw contents of the first ```` ```json ```` block, without the
/// fences. `None` when no opening fence exists or it is never closed.
#[must_use]
pub fn find_json_block(text: &str) -> Option<&str> {
    let start = text.find(OPEN_FENCE)? + OPEN_FENCE.len();
    let rest = &text[start..];
    let end = rest.find(CLOSE_FENCE)?;
    Some(&rest[..end])
}

/// The prose in front of the first ```` ```json ```` fence, trimmed. The
/// whole text when there is no fence.
#[must_use]
pub fn leading_text(text: &str) -> &str {
    match text.find(OPEN_FENCE) {
        Some(idx) => text[..idx].trim(),
        None => text.trim(),
    }
}

/// Decode a block body into places. The whole array must decode; a single
/// bad element rejects the lot.
///
/// # Errors
///
/// - [`ExtractError::MissingBlock`] if the body is blank.
/// - [`ExtractError::Syntax`] if the body is not JSON.
/// - [`ExtractError::Shape`] if it is JSON but not an array of places.
pub fn parse_places(block: &str) -> Result<Vec<Place>, ExtractError> {
    let body = block.trim();
    if body.is_empty() {
        return Err(ExtractError::MissingBlock);
    }
    let value: serde_json::Value = serde_json::from_str(body).map_err(ExtractError::Syntax)?;
    serde_json::from_value(value).map_err(ExtractError::Shape)
}

/// Best-effort extraction of places from a full model reply.
///
/// Absent block → empty. Parse failure → empty, with a warning logged.
#[must_use]
pub fn extract_places(text: &str) -> Vec<Place> {
    let Some(block) = find_json_block(text) else {
        tracing::debug!("response contained no json block; treating as zero results");
        return Vec::new();
    };

    match parse_places(block) {
        Ok(places) => places,
        Err(ExtractError::MissingBlock) => {
            tracing::debug!("json block was empty; treating as zero results");
            Vec::new()
        }
        Err(e) => {
            tracing::warn!(error = %e, "failed to parse places JSON");
            Vec::new()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ONE_PLACE: &str = "Found these spots:\n```json\n[{\"name\":\"A\",\"lat\":1,\"lng\":2,\"description\":\"d\",\"address\":\"addr\"}]\n```";

    // -----------------------------------------------------------------------
    // find_json_block
    // -----------------------------------------------------------------------

    #[test]
    fn finds_block_between_fences() {
        let block = find_json_block("x ```json\n[1]\n``` y").unwrap();
        assert_eq!(block, "\n[1]\n");
    }

    #[test]
    fn only_first_block_is_used() {
        let text = "```json\n[]\n```\nand also\n```json\n[1]\n```";
        assert_eq!(find_json_block(text).unwrap().trim(), "[]");
    }

    #[test]
    fn unlabeled_fence_is_ignored() {
        assert!(find_json_block("```\n[]\n```").is_none());
    }

    #[test]
    fn unclosed_fence_is_none() {
        assert!(find_json_block("```json\n[{\"name\":").is_none());
    }

    #[test]
    fn leading_text_stops_at_fence() {
        assert_eq!(leading_text(ONE_PLACE), "Found these spots:");
        assert_eq!(leading_text("  no block here \n"), "no block here");
    }

    // -----------------------------------------------------------------------
    // extract_places
    // -----------------------------------------------------------------------

    #[test]
    fn single_place_scenario_keeps_optionals_absent() {
        let places = extract_places(ONE_PLACE);
        assert_eq!(places.len(), 1);
        let a = &places[0];
        assert_eq!(a.name, "A");
        assert!((a.lat - 1.0).abs() < f64::EPSILON);
        assert!((a.lng - 2.0).abs() < f64::EPSILON);
        assert_eq!(a.description, "d");
        assert_eq!(a.address, "addr");
        assert!(a.rating.is_none());
        assert!(a.reviews.is_none());
        assert!(a.tags.is_none());
        assert!(a.review_snippets.is_none());
        assert!(a.image_keywords.is_none());
    }

    #[test]
    fn n_places_come_back_in_order_with_fields_verbatim() {
        let text = r#"Here you go.
```json
[
  {"name": "Balzac's Coffee", "lat": 43.6677, "lng": -79.3948, "description": "Quiet upstairs.", "address": "789 Yonge St",
   "tags": ["Wifi", "Aesthetic"], "rating": 4.6, "reviews": 812,
   "reviewSnippets": ["So calm", "Great latte"], "imageKeywords": "cafe interior"},
  {"name": "Robarts Library", "lat": 43.6644, "lng": -79.3996, "description": "Brutalist study hub.", "address": "130 St George St"},
  {"name": "Kensington Market", "lat": 43.6547, "lng": -79.4005, "description": "Thrift heaven.", "address": "Kensington Ave", "rating": 4.5}
]
```"#;
        let places = extract_places(text);
        assert_eq!(places.len(), 3);
        assert_eq!(places[0].name, "Balzac's Coffee");
        assert_eq!(places[1].name, "Robarts Library");
        assert_eq!(places[2].name, "Kensington Market");

        let first = &places[0];
        assert_eq!(first.tags.as_deref(), Some(&["Wifi".to_string(), "Aesthetic".to_string()][..]));
        assert_eq!(first.rating, Some(4.6));
        assert_eq!(first.reviews, Some(812));
        assert_eq!(
            first.review_snippets.as_deref(),
            Some(&["So calm".to_string(), "Great latte".to_string()][..])
        );
        assert_eq!(first.image_keywords.as_deref(), Some("cafe interior"));
        assert_eq!(places[2].rating, Some(4.5));
        assert!(places[2].reviews.is_none());
    }

    #[test]
    fn absent_block_yields_empty() {
        assert!(extract_places("Sorry, I couldn't find anything.").is_empty());
    }

    #[test]
    fn malformed_json_yields_empty() {
        assert!(extract_places("```json\n[{\"name\": \"A\",]\n```").is_empty());
    }

    #[test]
    fn wrong_shape_yields_empty() {
        assert!(extract_places("```json\n{\"name\": \"A\"}\n```").is_empty());
    }

    #[test]
    fn partially_valid_array_yields_empty() {
        let text = "```json\n[{\"name\":\"A\",\"lat\":1,\"lng\":2,\"description\":\"d\",\"address\":\"a\"},{\"name\":\"B\"}]\n```";
        assert!(extract_places(text).is_empty());
    }

    #[test]
    fn empty_block_yields_empty() {
        assert!(extract_places("```json\n\n```").is_empty());
    }

    // -----------------------------------------------------------------------
    // parse_places error classification
    // -----------------------------------------------------------------------

    #[test]
    fn parse_places_classifies_syntax_errors() {
        assert!(matches!(parse_places("[{"), Err(ExtractError::Syntax(_))));
    }

    #[test]
    fn parse_places_classifies_shape_errors() {
        assert!(matches!(
            parse_places("[{\"name\": 5}]"),
            Err(ExtractError::Shape(_))
        ));
    }

    #[test]
    fn parse_places_rejects_blank_body() {
        assert!(matches!(parse_places("  \n"), Err(ExtractError::MissingBlock)));
    }
}
