//! Application Configuration
//!
//! Resolved at compile time from environment variables (see `.env.example`),
//! falling back to defaults when a key is missing or does not parse.

use std::str::FromStr;
use std::sync::OnceLock;

use crate::models::Coordinates;

#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Base URL of the Ecoleta backend (`/items`, `/points`)
    pub api_url: String,
    /// Base URL of the IBGE localities API
    pub geography_url: String,
    pub request_timeout_ms: u32,
    pub geolocation_timeout_ms: u32,
    pub map: MapConfig,
}

#[derive(Debug, Clone)]
pub struct MapConfig {
    /// Center used when the device position is unknown
    pub fallback_center: Coordinates,
    pub zoom: f64,
    pub tile_url: String,
    pub attribution: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_url: "http://localhost:3333".to_string(),
            geography_url: "https://servicodados.ibge.gov.br/api/v1/localidades".to_string(),
            request_timeout_ms: 15_000,
            geolocation_timeout_ms: 10_000,
            map: MapConfig::default(),
        }
    }
}

impl Default for MapConfig {
    fn default() -> Self {
        Self {
            // Brasília
            fallback_center: Coordinates::new(-15.7801, -47.9292),
            zoom: 15.0,
            tile_url: "https://{s}.tile.openstreetmap.org/{z}/{x}/{y}.png".to_string(),
            attribution: "&copy; <a href=\"http://osm.org/copyright\">OpenStreetMap</a> contributors".to_string(),
        }
    }
}

impl AppConfig {
    /// Load configuration from compile-time environment variables
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            api_url: text_or(option_env!("ECOLETA_API_URL"), &defaults.api_url),
            geography_url: text_or(option_env!("ECOLETA_GEOGRAPHY_URL"), &defaults.geography_url),
            request_timeout_ms: parse_or(option_env!("ECOLETA_REQUEST_TIMEOUT_MS"), defaults.request_timeout_ms),
            geolocation_timeout_ms: parse_or(
                option_env!("ECOLETA_GEOLOCATION_TIMEOUT_MS"),
                defaults.geolocation_timeout_ms,
            ),
            map: MapConfig {
                fallback_center: Coordinates::new(
                    parse_or(option_env!("ECOLETA_FALLBACK_LAT"), defaults.map.fallback_center.latitude),
                    parse_or(option_env!("ECOLETA_FALLBACK_LNG"), defaults.map.fallback_center.longitude),
                ),
                zoom: parse_or(option_env!("ECOLETA_MAP_ZOOM"), defaults.map.zoom),
                tile_url: text_or(option_env!("ECOLETA_TILE_URL"), &defaults.map.tile_url),
                attribution: defaults.map.attribution,
            },
        }
    }
}

fn text_or(value: Option<&str>, default: &str) -> String {
    match value.map(str::trim) {
        Some(v) if !v.is_empty() => v.trim_end_matches('/').to_string(),
        _ => default.to_string(),
    }
}

fn parse_or<T: FromStr>(value: Option<&str>, default: T) -> T {
    value.and_then(|v| v.trim().parse().ok()).unwrap_or(default)
}

static CONFIG: OnceLock<AppConfig> = OnceLock::new();

/// Global configuration, resolved on first access
pub fn config() -> &'static AppConfig {
    CONFIG.get_or_init(AppConfig::from_env)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_or_falls_back() {
        assert_eq!(parse_or(Some("2500"), 10u32), 2500);
        assert_eq!(parse_or(Some(" 7 "), 10u32), 7);
        assert_eq!(parse_or(Some("soon"), 10u32), 10);
        assert_eq!(parse_or::<f64>(None, 1.5), 1.5);
        assert_eq!(parse_or(Some("-23.55"), 0.0f64), -23.55);
    }

    #[test]
    fn test_text_or_trims_trailing_slash() {
        assert_eq!(text_or(Some("http://api.local/"), "x"), "http://api.local");
        assert_eq!(text_or(Some("   "), "x"), "x");
        assert_eq!(text_or(None, "x"), "x");
    }

    #[test]
    fn test_defaults() {
        let cfg = AppConfig::default();
        assert_eq!(cfg.map.zoom, 15.0);
        assert!(cfg.geography_url.starts_with("https://servicodados.ibge.gov.br"));
    }
}
