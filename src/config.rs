// ============================================================================
// APP CONFIG - Compile-time configuration (see build.rs and .env.example)
// ============================================================================

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    pub api_base_url: String,
    pub api_prefix: String,
    pub environment: String,
    pub enable_logging: bool,
    pub log_level: String,
    pub page_size: u32,
    pub toast_duration_ms: u32,
    pub default_language: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base_url: "http://localhost:8000".to_string(),
            api_prefix: "/api/v1".to_string(),
            environment: "development".to_string(),
            enable_logging: true,
            log_level: "info".to_string(),
            page_size: 10,
            toast_duration_ms: 2000,
            default_language: "ENG".to_string(),
        }
    }
}

impl AppConfig {
    /// Reads the configuration baked in at compile time, falling back to defaults
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            api_base_url: option_env!("API_URL")
                .map(|s| s.trim_end_matches('/').to_string())
                .unwrap_or(defaults.api_base_url),
            api_prefix: option_env!("API_PREFIX")
                .map(str::to_string)
                .unwrap_or(defaults.api_prefix),
            environment: option_env!("ENVIRONMENT")
                .map(str::to_string)
                .unwrap_or(defaults.environment),
            enable_logging: option_env!("ENABLE_LOGGING")
                .and_then(|s| s.parse().ok())
                .unwrap_or(defaults.enable_logging),
            log_level: option_env!("LOG_LEVEL")
                .map(str::to_string)
                .unwrap_or(defaults.log_level),
            page_size: option_env!("PAGE_SIZE")
                .and_then(|s| s.parse().ok())
                .filter(|size| *size > 0)
                .unwrap_or(defaults.page_size),
            toast_duration_ms: option_env!("TOAST_DURATION_MS")
                .and_then(|s| s.parse().ok())
                .unwrap_or(defaults.toast_duration_ms),
            default_language: option_env!("DEFAULT_LANGUAGE")
                .map(str::to_string)
                .unwrap_or(defaults.default_language),
        }
    }

    /// Root of the versioned REST API, e.g. `http://localhost:8000/api/v1`
    pub fn api_url(&self) -> String {
        format!("{}{}", self.api_base_url, self.api_prefix)
    }

    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }

    /// Level for wasm-logger; unknown values fall back to Info
    pub fn log_level(&self) -> log::Level {
        self.log_level.parse().unwrap_or(log::Level::Info)
    }
}

lazy_static::lazy_static! {
    pub static ref CONFIG: AppConfig = AppConfig::from_env();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn api_url_joins_base_and_prefix() {
        let config = AppConfig {
            api_base_url: "https://api.medmobile.test".to_string(),
            ..AppConfig::default()
        };
        assert_eq!(config.api_url(), "https://api.medmobile.test/api/v1");
    }

    #[test]
    fn unknown_log_level_falls_back_to_info() {
        let config = AppConfig {
            log_level: "chatty".to_string(),
            ..AppConfig::default()
        };
        assert_eq!(config.log_level(), log::Level::Info);

        let config = AppConfig {
            log_level: "debug".to_string(),
            ..AppConfig::default()
        };
        assert_eq!(config.log_level(), log::Level::Debug);
    }

    #[test]
    fn defaults_match_catalog_page_size() {
        let config = AppConfig::default();
        assert_eq!(config.page_size, 10);
        assert!(!config.is_production());
    }
}
