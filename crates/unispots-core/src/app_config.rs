use std::path::PathBuf;

use crate::search::Radius;

#[derive(Clone)]
pub struct AppConfig {
    pub log_level: String,
    pub gemini_api_key: String,
    pub gemini_model: String,
    pub gemini_base_url: String,
    /// Whole-request timeout. `None` leaves requests unbounded.
    pub gemini_timeout_secs: Option<u64>,
    pub store_path: PathBuf,
    pub default_radius: Radius,
}

impl std::fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppConfig")
            .field("log_level", &self.log_level)
            .field("gemini_api_key", &"[redacted]")
            .field("gemini_model", &self.gemini_model)
            .field("gemini_base_url", &self.gemini_base_url)
            .field("gemini_timeout_secs", &self.gemini_timeout_secs)
            .field("store_path", &self.store_path)
            .field("default_radius", &self.default_radius)
            .finish()
    }
}
