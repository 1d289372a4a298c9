use thiserror::Error;

/// Errors returned by the Gemini API client.
///
/// These never reach the interface: [`crate::SearchExecutor`] turns every
/// variant into the fixed failure notice.
#[derive(Debug, Error)]
pub enum GeminiError {
    /// Network or TLS failure from the underlying HTTP client.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The endpoint answered with a non-2xx status.
    #[error("Gemini API error (HTTP {status}): {message}")]
    Api { status: u16, message: String },

    /// The response body could not be deserialized into the expected type.
    #[error("JSON deserialization error for {context}: {source}")]
    Deserialize {
        context: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("invalid Gemini base URL '{url}': {reason}")]
    InvalidBaseUrl { url: String, reason: String },
}
