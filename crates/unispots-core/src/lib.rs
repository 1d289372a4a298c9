//! Shared domain model for UniSpots.
//!
//! Holds the place record, the search filters and the prompt built from them,
//! the fenced-block extractor that turns a model reply back into places, and
//! the environment-driven application config.

pub mod app_config;
pub mod config;
pub mod error;
pub mod extract;
pub mod place;
pub mod prompt;
pub mod search;

pub use app_config::AppConfig;
pub use config::{load_app_config, load_app_config_from_env};
pub use error::{ConfigError, ExtractError};
pub use extract::{extract_places, find_json_block, leading_text, parse_places};
pub use place::{Coordinates, MapBounds, Place, PlaceIdentity, DEFAULT_MAP_CENTER};
pub use prompt::{
    build_prompt, effective_query, location_clause, must_haves_clause, SearchRequest,
    DEFAULT_QUERY, SYSTEM_INSTRUCTION,
};
pub use search::{
    Category, Features, GroundingChunk, MapsSource, PlaceAnswerSources, Radius, ReviewSnippet,
    SearchParams, SearchResult, Vibe, WebSource, SUGGESTED_SEARCHES,
};
