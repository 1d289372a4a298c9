//! Wire types for `models/{model}:generateContent`.
//!
//! Only the fields this client sends or reads are modelled. Unknown response
//! fields are ignored.

use serde::{Deserialize, Serialize};
use unispots_core::{Coordinates, GroundingChunk, SearchRequest};

// ---------------------------------------------------------------------------
// request
// ---------------------------------------------------------------------------

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateContentRequest<'a> {
    pub contents: Vec<Content<'a>>,
    pub system_instruction: SystemInstruction<'a>,
    pub tools: Vec<Tool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tool_config: Option<ToolConfig>,
}

impl<'a> GenerateContentRequest<'a> {
    /// One user turn, the persona, the maps tool, and the location bias when
    /// coordinates are known.
    #[must_use]
    pub fn for_search(request: &'a SearchRequest) -> Self {
        Self {
            contents: vec![Content {
                role: "user",
                parts: vec![Part {
                    text: &request.prompt,
                }],
            }],
            system_instruction: SystemInstruction {
                parts: vec![Part {
                    text: request.system_instruction,
                }],
            },
            tools: vec![Tool::google_maps()],
            tool_config: request.location_hint.map(ToolConfig::located_at),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct Content<'a> {
    pub role: &'a str,
    pub parts: Vec<Part<'a>>,
}

#[derive(Debug, Serialize)]
pub struct Part<'a> {
    pub text: &'a str,
}

#[derive(Debug, Serialize)]
pub struct SystemInstruction<'a> {
    pub parts: Vec<Part<'a>>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Tool {
    pub google_maps: GoogleMaps,
}

impl Tool {
    #[must_use]
    pub fn google_maps() -> Self {
        Self {
            google_maps: GoogleMaps {},
        }
    }
}

/// Serializes as `{}`.
#[derive(Debug, Serialize)]
pub struct GoogleMaps {}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ToolConfig {
    pub retrieval_config: RetrievalConfig,
}

impl ToolConfig {
    #[must_use]
    pub fn located_at(loc: Coordinates) -> Self {
        Self {
            retrieval_config: RetrievalConfig {
                lat_lng: LatLng {
                    latitude: loc.lat,
                    longitude: loc.lng,
                },
            },
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RetrievalConfig {
    pub lat_lng: LatLng,
}

#[derive(Debug, Serialize)]
pub struct LatLng {
    pub latitude: f64,
    pub longitude: f64,
}

// ---------------------------------------------------------------------------
// response
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateContentResponse {
    #[serde(default)]
    pub candidates: Vec<Candidate>,
}

impl GenerateContentResponse {
    /// Concatenated text of the first candidate, skipping thought parts.
    /// Empty when there is no candidate or no text.
    #[must_use]
    pub fn text(&self) -> String {
        self.candidates
            .first()
            .and_then(|c| c.content.as_ref())
            .map(|content| {
                content
                    .parts
                    .iter()
                    .filter(|p| !p.thought)
                    .filter_map(|p| p.text.as_deref())
                    .collect::<String>()
            })
            .unwrap_or_default()
    }

    /// Grounding citations of the first candidate, if the model returned any.
    #[must_use]
    pub fn into_grounding_chunks(self) -> Option<Vec<GroundingChunk>> {
        self.candidates
            .into_iter()
            .next()
            .and_then(|c| c.grounding_metadata)
            .and_then(|m| m.grounding_chunks)
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Candidate {
    #[serde(default)]
    pub content: Option<CandidateContent>,
    #[serde(default)]
    pub grounding_metadata: Option<GroundingMetadata>,
}

#[derive(Debug, Deserialize)]
pub struct CandidateContent {
    #[serde(default)]
    pub parts: Vec<ResponsePart>,
}

#[derive(Debug, Deserialize)]
pub struct ResponsePart {
    #[serde(default)]
    pub text: Option<String>,
    #[serde(default)]
    pub thought: bool,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GroundingMetadata {
    #[serde(default)]
    pub grounding_chunks: Option<Vec<GroundingChunk>>,
}

/// Body of a non-2xx reply: `{"error": {"code": 400, "message": "...", "status": "..."}}`.
#[derive(Debug, Deserialize)]
pub struct ApiErrorEnvelope {
    pub error: ApiErrorBody,
}

#[derive(Debug, Deserialize)]
pub struct ApiErrorBody {
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub status: Option<String>,
}
