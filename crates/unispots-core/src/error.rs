use thiserror::Error;

/// Errors raised while loading [`crate::AppConfig`] from the environment.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing required env var: {0}")]
    MissingEnvVar(String),

    #[error("invalid value for env var {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },
}

/// Why a fenced JSON block could not be turned into places.
///
/// Only surfaced by [`crate::parse_places`]; [`crate::extract_places`] logs
/// these and degrades to an empty result set.
#[derive(Debug, Error)]
pub enum ExtractError {
    #[error("no ```json fenced block found in response text")]
    MissingBlock,

    #[error("JSON block is not valid JSON: {0}")]
    Syntax(#[source] serde_json::Error),

    #[error("JSON block does not match the place schema: {0}")]
    Shape(#[source] serde_json::Error),
}
