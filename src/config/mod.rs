//! Configuration loading and validation.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::debug;

use crate::agents::backend::AiBackendConfig;
use crate::catalog::Locale;

/// Prefix for environment overrides, e.g. `PROSCOUT__AI__MODEL`.
pub const ENV_PREFIX: &str = "PROSCOUT";

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    ReadError(#[from] std::io::Error),

    #[error("Failed to parse config: {0}")]
    ParseError(#[from] toml::de::Error),

    #[error("Failed to load config: {0}")]
    LoadError(#[from] config::ConfigError),

    #[error("Invalid configuration: {0}")]
    ValidationError(String),
}

/// AI backend configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AiConfig {
    /// Backend type: "ollama" or "anthropic"
    #[serde(default = "default_backend")]
    pub backend: String,

    /// Base URL for the AI service
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Vision-capable model to use
    #[serde(default = "default_model")]
    pub model: String,

    /// Timeout in seconds
    #[serde(default = "default_timeout")]
    pub timeout_seconds: u64,

    /// Max retries
    #[serde(default = "default_max_retries")]
    pub max_retries: u32,

    /// Environment variable holding the API key for remote backends
    #[serde(default = "default_api_key_env")]
    pub api_key_env: String,
}

fn default_backend() -> String {
    "ollama".to_string()
}

fn default_base_url() -> String {
    "http://localhost:11434".to_string()
}

fn default_model() -> String {
    "llama3.2-vision".to_string()
}

fn default_timeout() -> u64 {
    120
}

fn default_max_retries() -> u32 {
    3
}

fn default_api_key_env() -> String {
    "ANTHROPIC_API_KEY".to_string()
}

impl Default for AiConfig {
    fn default() -> Self {
        Self {
            backend: default_backend(),
            base_url: default_base_url(),
            model: default_model(),
            timeout_seconds: default_timeout(),
            max_retries: default_max_retries(),
            api_key_env: default_api_key_env(),
        }
    }
}

impl AiConfig {
    /// Resolve the backend selection into a concrete backend config.
    pub fn backend_config(&self) -> Result<AiBackendConfig, ConfigError> {
        match self.backend.to_lowercase().as_str() {
            "ollama" => Ok(AiBackendConfig::Ollama {
                base_url: self.base_url.clone(),
                model: self.model.clone(),
                timeout_seconds: self.timeout_seconds,
            }),
            #[cfg(feature = "remote-ai")]
            "anthropic" => Ok(AiBackendConfig::Anthropic {
                api_key_env: self.api_key_env.clone(),
                model: self.model.clone(),
                timeout_seconds: self.timeout_seconds,
            }),
            #[cfg(not(feature = "remote-ai"))]
            "anthropic" => Err(ConfigError::ValidationError(
                "the anthropic backend requires the remote-ai feature".to_string(),
            )),
            other => Err(ConfigError::ValidationError(format!(
                "Unknown AI backend: {}",
                other
            ))),
        }
    }
}

/// Main application configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Language for attribute and position labels
    #[serde(default)]
    pub locale: Locale,

    /// Where `scan` writes profiles when no output path is given
    #[serde(default = "default_profiles_dir")]
    pub profiles_dir: PathBuf,

    #[serde(default)]
    pub ai: AiConfig,
}

fn default_profiles_dir() -> PathBuf {
    PathBuf::from("./profiles")
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            locale: Locale::default(),
            profiles_dir: default_profiles_dir(),
            ai: AiConfig::default(),
        }
    }
}

impl AppConfig {
    /// Load configuration from an optional TOML file, then apply
    /// `PROSCOUT__*` environment overrides.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let mut builder = config::Config::builder();

        if let Some(path) = path {
            debug!("Reading config from {}", path.display());
            builder = builder
                .add_source(config::File::from(path).format(config::FileFormat::Toml));
        }

        let config: AppConfig = builder
            .add_source(
                config::Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?
            .try_deserialize()?;

        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        let config: AppConfig = toml::from_str(&contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.ai.timeout_seconds == 0 {
            return Err(ConfigError::ValidationError(
                "AI timeout must be greater than 0".to_string(),
            ));
        }

        url::Url::parse(&self.ai.base_url).map_err(|e| {
            ConfigError::ValidationError(format!("Invalid AI base URL '{}': {}", self.ai.base_url, e))
        })?;

        Ok(())
    }
}
