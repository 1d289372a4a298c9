//! HTTP client for the Gemini `generateContent` endpoint.
//!
//! Wraps `reqwest` with API key handling, the maps grounding tool, and typed
//! response decoding. Non-2xx replies surface as [`GeminiError::Api`] with the
//! message from Gemini's error envelope when one is present.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, Url};
use unispots_core::{SearchRequest, SearchResult};

use crate::error::GeminiError;
use crate::types::{ApiErrorEnvelope, GenerateContentRequest, GenerateContentResponse};

const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta/";
const API_KEY_HEADER: &str = "x-goog-api-key";

/// Anything that can answer a [`SearchRequest`] with raw model output.
///
/// [`GeminiClient`] is the real implementation; tests substitute canned
/// backends.
#[async_trait]
pub trait GenerateBackend: Send + Sync {
    async fn generate(&self, request: &SearchRequest) -> Result<SearchResult, GeminiError>;
}

/// Client for the Gemini REST API.
///
/// Use [`GeminiClient::new`] for production or [`GeminiClient::with_base_url`]
/// to point at a mock server in tests.
pub struct GeminiClient {
    client: Client,
    api_key: String,
    model: String,
    endpoint: Url,
}

impl GeminiClient {
    /// Creates a client pointed at the production Gemini API.
    ///
    /// # Errors
    ///
    /// Returns [`GeminiError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed.
    pub fn new(api_key: &str, model: &str, timeout_secs: Option<u64>) -> Result<Self, GeminiError> {
        Self::with_base_url(api_key, model, timeout_secs, DEFAULT_BASE_URL)
    }

    /// Creates a client with a custom base URL (for testing with wiremock).
    ///
    /// `timeout_secs` of `None` leaves requests without an overall deadline.
    ///
    /// # Errors
    ///
    /// Returns [`GeminiError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed, or [`GeminiError::InvalidBaseUrl`] if
    /// `base_url` (joined with the model path) is not a valid URL.
    pub fn with_base_url(
        api_key: &str,
        model: &str,
        timeout_secs: Option<u64>,
        base_url: &str,
    ) -> Result<Self, GeminiError> {
        let mut builder = Client::builder().user_agent("unispots/0.1 (place-discovery)");
        if let Some(secs) = timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }
        let client = builder.build()?;

        // Exactly one trailing slash so `join` appends rather than replacing
        // the last path segment (e.g. `v1beta`).
        let normalised = format!("{}/", base_url.trim_end_matches('/'));
        let model = model.strip_prefix("models/").unwrap_or(model).to_owned();
        let endpoint = Url::parse(&normalised)
            .and_then(|base| base.join(&format!("models/{model}:generateContent")))
            .map_err(|e| GeminiError::InvalidBaseUrl {
                url: base_url.to_owned(),
                reason: e.to_string(),
            })?;

        Ok(Self {
            client,
            api_key: api_key.to_owned(),
            model,
            endpoint,
        })
    }

    /// Model id without the `models/` prefix.
    #[must_use]
    pub fn model(&self) -> &str {
        &self.model
    }

    /// Full `generateContent` URL this client posts to.
    #[must_use]
    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    /// Sends one search prompt and returns the model's text and citations.
    ///
    /// # Errors
    ///
    /// - [`GeminiError::Http`] on network failure.
    /// - [`GeminiError::Api`] on a non-2xx status.
    /// - [`GeminiError::Deserialize`] if the body is not a
    ///   `generateContent` response.
    pub async fn generate_content(
        &self,
        request: &SearchRequest,
    ) -> Result<SearchResult, GeminiError> {
        let body = GenerateContentRequest::for_search(request);

        tracing::debug!(
            model = %self.model,
            located = request.location_hint.is_some(),
            prompt_len = request.prompt.len(),
            "sending generateContent request"
        );

        let response = self
            .client
            .post(self.endpoint.clone())
            .header(API_KEY_HEADER, &self.api_key)
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        let text = response.text().await?;

        if !status.is_success() {
            return Err(GeminiError::Api {
                status: status.as_u16(),
                message: Self::error_message(&text),
            });
        }

        let parsed: GenerateContentResponse =
            serde_json::from_str(&text).map_err(|e| GeminiError::Deserialize {
                context: format!("generateContent(model={})", self.model),
                source: e,
            })?;

        let text = parsed.text();
        Ok(SearchResult {
            text,
            grounding_chunks: parsed.into_grounding_chunks(),
        })
    }

    /// Pulls the human-readable message out of Gemini's error envelope,
    /// falling back to the raw body.
    fn error_message(body: &str) -> String {
        match serde_json::from_str::<ApiErrorEnvelope>(body) {
            Ok(envelope) => match envelope.error.status {
                Some(status) => format!("{status}: {}", envelope.error.message),
                None => envelope.error.message,
            },
            Err(_) if body.trim().is_empty() => "empty error body".to_string(),
            Err(_) => body.trim().to_string(),
        }
    }
}

#[async_trait]
impl GenerateBackend for GeminiClient {
    async fn generate(&self, request: &SearchRequest) -> Result<SearchResult, GeminiError> {
        self.generate_content(request).await
    }
}
