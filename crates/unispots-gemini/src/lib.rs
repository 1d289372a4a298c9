//! Gemini `generateContent` client with Google Maps grounding, and the
//! search executor that wraps it.

pub mod client;
pub mod error;
pub mod executor;
pub mod types;

pub use client::{GeminiClient, GenerateBackend};
pub use error::GeminiError;
pub use executor::{ExecutorState, SearchExecutor, FAILURE_TEXT, NO_RESULTS_TEXT};
