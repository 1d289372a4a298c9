use std::collections::HashMap;
use std::env::VarError;

use super::*;

fn lookup_from_map<'a>(
    map: &'a HashMap<&'a str, &'a str>,
) -> impl Fn(&str) -> Result<String, VarError> + 'a {
    move |key| {
        map.get(key)
            .map(|v| (*v).to_string())
            .ok_or(VarError::NotPresent)
    }
}

/// Returns a map with all required env vars populated with valid defaults.
fn full_env<'a>() -> HashMap<&'a str, &'a str> {
    let mut m = HashMap::new();
    m.insert("GEMINI_API_KEY", "test-key");
    m
}

#[test]
fn build_app_config_fails_without_api_key() {
    let map: HashMap<&str, &str> = HashMap::new();
    let result = build_app_config(lookup_from_map(&map));
    assert!(
        matches!(result, Err(ConfigError::MissingEnvVar(ref v)) if v == "GEMINI_API_KEY"),
        "expected MissingEnvVar(GEMINI_API_KEY), got: {result:?}"
    );
}

#[test]
fn build_app_config_accepts_legacy_api_key_var() {
    let mut map: HashMap<&str, &str> = HashMap::new();
    map.insert("API_KEY", "legacy-key");
    let cfg = build_app_config(lookup_from_map(&map)).unwrap();
    assert_eq!(cfg.gemini_api_key, "legacy-key");
}

#[test]
fn build_app_config_prefers_gemini_api_key_over_legacy() {
    let mut map = full_env();
    map.insert("API_KEY", "legacy-key");
    let cfg = build_app_config(lookup_from_map(&map)).unwrap();
    assert_eq!(cfg.gemini_api_key, "test-key");
}

#[test]
fn build_app_config_rejects_blank_api_key() {
    let mut map: HashMap<&str, &str> = HashMap::new();
    map.insert("GEMINI_API_KEY", "   ");
    let result = build_app_config(lookup_from_map(&map));
    assert!(
        matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "GEMINI_API_KEY"),
        "expected InvalidEnvVar(GEMINI_API_KEY), got: {result:?}"
    );
}

#[test]
fn build_app_config_succeeds_with_all_required_vars() {
    let map = full_env();
    let result = build_app_config(lookup_from_map(&map));
    assert!(result.is_ok(), "expected Ok, got: {result:?}");
    let cfg = result.unwrap();
    assert_eq!(cfg.log_level, "info");
    assert_eq!(cfg.gemini_api_key, "test-key");
    assert_eq!(cfg.gemini_model, "gemini-2.5-flash");
    assert_eq!(
        cfg.gemini_base_url,
        "https://generativelanguage.googleapis.com/v1beta/"
    );
    assert!(cfg.gemini_timeout_secs.is_none());
    assert_eq!(cfg.store_path, PathBuf::from("./unispots_store.json"));
    assert_eq!(cfg.default_radius, Radius::Km5);
}

#[test]
fn gemini_timeout_secs_override() {
    let mut map = full_env();
    map.insert("UNISPOTS_GEMINI_TIMEOUT_SECS", "45");
    let cfg = build_app_config(lookup_from_map(&map)).unwrap();
    assert_eq!(cfg.gemini_timeout_secs, Some(45));
}

#[test]
fn gemini_timeout_secs_invalid() {
    let mut map = full_env();
    map.insert("UNISPOTS_GEMINI_TIMEOUT_SECS", "soon");
    let result = build_app_config(lookup_from_map(&map));
    assert!(
        matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "UNISPOTS_GEMINI_TIMEOUT_SECS"),
        "expected InvalidEnvVar(UNISPOTS_GEMINI_TIMEOUT_SECS), got: {result:?}"
    );
}

#[test]
fn gemini_model_override() {
    let mut map = full_env();
    map.insert("UNISPOTS_GEMINI_MODEL", "gemini-2.5-pro");
    let cfg = build_app_config(lookup_from_map(&map)).unwrap();
    assert_eq!(cfg.gemini_model, "gemini-2.5-pro");
}

#[test]
fn store_path_override() {
    let mut map = full_env();
    map.insert("UNISPOTS_STORE_PATH", "/tmp/spots.json");
    let cfg = build_app_config(lookup_from_map(&map)).unwrap();
    assert_eq!(cfg.store_path, PathBuf::from("/tmp/spots.json"));
}

#[test]
fn default_radius_override() {
    let mut map = full_env();
    map.insert("UNISPOTS_DEFAULT_RADIUS", "10km");
    let cfg = build_app_config(lookup_from_map(&map)).unwrap();
    assert_eq!(cfg.default_radius, Radius::Km10);
}

#[test]
fn default_radius_invalid() {
    let mut map = full_env();
    map.insert("UNISPOTS_DEFAULT_RADIUS", "3 miles");
    let result = build_app_config(lookup_from_map(&map));
    assert!(
        matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "UNISPOTS_DEFAULT_RADIUS"),
        "expected InvalidEnvVar(UNISPOTS_DEFAULT_RADIUS), got: {result:?}"
    );
}

#[test]
fn debug_output_redacts_api_key() {
    let map = full_env();
    let cfg = build_app_config(lookup_from_map(&map)).unwrap();
    let rendered = format!("{cfg:?}");
    assert!(!rendered.contains("test-key"), "key leaked: {rendered}");
    assert!(rendered.contains("[redacted]"));
}

#[test]
fn build_app_config_ignores_unrelated_vars() {
    let mut map = full_env();
    map.insert("UNISPOTS_ENV", "staging");
    map.insert("UNISPOTS_UNKNOWN", "x");
    let cfg = build_app_config(lookup_from_map(&map)).unwrap();
    assert_eq!(cfg.log_level, "info");
}
