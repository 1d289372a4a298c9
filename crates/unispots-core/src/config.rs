use std::path::PathBuf;

use crate::app_config::AppConfig;
use crate::search::Radius;
use crate::ConfigError;

pub const DEFAULT_GEMINI_MODEL: &str = "gemini-2.5-flash";
pub const DEFAULT_GEMINI_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta/";
pub const DEFAULT_STORE_PATH: &str = "./unispots_store.json";

/// Load application configuration from environment variables.
///
/// Calls `dotenvy::dotenv().ok()` to load `.env` files before reading env vars.
///
/// # Errors
///
/// Returns `ConfigError` if required env vars are missing or values are invalid.
pub fn load_app_config() -> Result<AppConfig, ConfigError> {
    dotenvy::dotenv().ok();
    load_app_config_from_env()
}

/// Load application configuration from environment variables already in the process.
///
/// Unlike [`load_app_config`], this does NOT load `.env` files.
///
/// # Errors
///
/// Returns `ConfigError` if required env vars are missing or values are invalid.
pub fn load_app_config_from_env() -> Result<AppConfig, ConfigError> {
    build_app_config(|key| std::env::var(key))
}

/// Build application configuration using the provided env-var lookup function.
///
/// Decoupled from the real environment so tests can drive it from a `HashMap`.
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
    };

    // The browser build read `API_KEY`; keep it as a fallback.
    let gemini_api_key = lookup("GEMINI_API_KEY")
        .or_else(|_| lookup("API_KEY"))
        .map_err(|_| ConfigError::MissingEnvVar("GEMINI_API_KEY".to_string()))?;
    if gemini_api_key.trim().is_empty() {
        return Err(ConfigError::InvalidEnvVar {
            var: "GEMINI_API_KEY".to_string(),
            reason: "must not be empty".to_string(),
        });
    }

    let log_level = or_default("UNISPOTS_LOG_LEVEL", "info");
    let gemini_model = or_default("UNISPOTS_GEMINI_MODEL", DEFAULT_GEMINI_MODEL);
    let gemini_base_url = or_default("UNISPOTS_GEMINI_BASE_URL", DEFAULT_GEMINI_BASE_URL);

    let gemini_timeout_secs = match lookup("UNISPOTS_GEMINI_TIMEOUT_SECS") {
        Ok(raw) => Some(raw.parse::<u64>().map_err(|e| ConfigError::InvalidEnvVar {
            var: "UNISPOTS_GEMINI_TIMEOUT_SECS".to_string(),
            reason: e.to_string(),
        })?),
        Err(_) => None,
    };

    let store_path = PathBuf::from(or_default("UNISPOTS_STORE_PATH", DEFAULT_STORE_PATH));

    let default_radius = or_default("UNISPOTS_DEFAULT_RADIUS", Radius::default().as_str())
        .parse::<Radius>()
        .map_err(|reason| ConfigError::InvalidEnvVar {
            var: "UNISPOTS_DEFAULT_RADIUS".to_string(),
            reason,
        })?;

    Ok(AppConfig {
        log_level,
        gemini_api_key,
        gemini_model,
        gemini_base_url,
        gemini_timeout_secs,
        store_path,
        default_radius,
    })
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
