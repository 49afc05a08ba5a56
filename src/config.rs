//! Configuration System
//!
//! Handles loading configuration from files and environment variables.
//! Supports TOML config files and environment variable overrides.

use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::state::FetchFailurePolicy;

/// Main configuration structure
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub api: ApiConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Events API configuration
#[derive(Debug, Clone, Deserialize)]
pub struct ApiConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Cohort path segment appended to the base URL
    #[serde(default = "default_cohort")]
    pub cohort: String,

    #[serde(default = "default_request_timeout")]
    pub request_timeout_ms: u64,

    /// What to do with previously held state when a fetch fails:
    /// "keep-stale" leaves it in place, "clear" empties the affected slot
    #[serde(default)]
    pub on_fetch_error: FetchFailurePolicy,
}

fn default_base_url() -> String {
    "https://fsa-crud-2aa9294fe819.herokuapp.com/api".to_string()
}

fn default_cohort() -> String {
    "/2507".to_string()
}

fn default_request_timeout() -> u64 {
    5000
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            cohort: default_cohort(),
            request_timeout_ms: default_request_timeout(),
            on_fetch_error: FetchFailurePolicy::default(),
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,

    #[serde(default = "default_log_format")]
    pub format: String,
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "pretty".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

impl Config {
    /// Load configuration from a file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            error: e.to_string(),
        })?;

        let config: Config = toml::from_str(&content).map_err(|e| ConfigError::Parse {
            path: path.to_path_buf(),
            error: e.to_string(),
        })?;

        Ok(config)
    }

    /// Load configuration from environment variables only
    pub fn from_env() -> Self {
        let mut config = Config::default();
        config.apply_env_overrides();
        config
    }

    /// Load configuration with environment variable overrides
    pub fn load_with_env(path: &Path) -> Result<Self, ConfigError> {
        let mut config = Self::load(path)?;
        config.apply_env_overrides();
        Ok(config)
    }

    /// Load from default locations or environment
    pub fn load_default() -> Self {
        let config_paths = [
            dirs::config_dir().map(|p| p.join("lineup").join("config.toml")),
            Some(PathBuf::from("/etc/lineup/config.toml")),
            Some(PathBuf::from("./config.toml")),
        ];

        for path_opt in config_paths.iter().flatten() {
            if path_opt.exists() {
                match Self::load_with_env(path_opt) {
                    Ok(config) => {
                        tracing::info!("Loaded config from {:?}", path_opt);
                        return config;
                    }
                    Err(e) => {
                        tracing::warn!("Failed to load config from {:?}: {}", path_opt, e);
                    }
                }
            }
        }

        tracing::info!("Using default config with environment overrides");
        Self::from_env()
    }

    /// Apply environment variable overrides to an existing config
    fn apply_env_overrides(&mut self) {
        if let Ok(base_url) = std::env::var("LINEUP_API_BASE") {
            self.api.base_url = base_url;
        }
        if let Ok(cohort) = std::env::var("LINEUP_COHORT") {
            self.api.cohort = cohort;
        }
        if let Ok(policy) = std::env::var("LINEUP_ON_FETCH_ERROR") {
            match policy.as_str() {
                "keep-stale" => self.api.on_fetch_error = FetchFailurePolicy::KeepStale,
                "clear" => self.api.on_fetch_error = FetchFailurePolicy::Clear,
                other => tracing::warn!("Unknown fetch failure policy: {}", other),
            }
        }
        if let Ok(level) = std::env::var("LINEUP_LOG_LEVEL") {
            self.logging.level = level;
        }
        if let Ok(format) = std::env::var("LINEUP_LOG_FORMAT") {
            self.logging.format = format;
        }
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path:?}: {error}")]
    Io { path: PathBuf, error: String },

    #[error("Failed to parse config file {path:?}: {error}")]
    Parse { path: PathBuf, error: String },
}

/// Generate a default config file content
pub fn generate_default_config() -> String {
    r#"# Lineup Configuration
#
# Environment variables override these settings:
# - LINEUP_API_BASE
# - LINEUP_COHORT
# - LINEUP_ON_FETCH_ERROR
# - LINEUP_LOG_LEVEL
# - LINEUP_LOG_FORMAT

[api]
# Events API base URL
base_url = "https://fsa-crud-2aa9294fe819.herokuapp.com/api"

# Cohort path segment appended to the base URL
cohort = "/2507"

# Request timeout (ms)
request_timeout_ms = 5000

# What happens to previously held state when a fetch fails:
# "keep-stale" (show the last successfully loaded data) or "clear"
on_fetch_error = "keep-stale"

[logging]
# Log level: trace, debug, info, warn, error
level = "info"

# Log format: pretty (for development) or json (for production)
format = "pretty"
"#
    .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults_match_upstream_constants() {
        let config = Config::default();
        assert_eq!(
            config.api.base_url,
            "https://fsa-crud-2aa9294fe819.herokuapp.com/api"
        );
        assert_eq!(config.api.cohort, "/2507");
        assert_eq!(config.api.on_fetch_error, FetchFailurePolicy::KeepStale);
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            r#"
[api]
base_url = "http://localhost:9000/api"
cohort = "/2508"
on_fetch_error = "clear"

[logging]
level = "debug"
"#
        )
        .unwrap();

        let config = Config::load(file.path()).unwrap();
        assert_eq!(config.api.base_url, "http://localhost:9000/api");
        assert_eq!(config.api.cohort, "/2508");
        assert_eq!(config.api.on_fetch_error, FetchFailurePolicy::Clear);
        assert_eq!(config.logging.level, "debug");
        // Unset keys keep their defaults
        assert_eq!(config.api.request_timeout_ms, 5000);
        assert_eq!(config.logging.format, "pretty");
    }

    #[test]
    fn test_generated_config_parses() {
        let config: Config = toml::from_str(&generate_default_config()).unwrap();
        assert_eq!(config.api.cohort, "/2507");
    }
}
