//! Configuration module for LetterBox.

use serde::Deserialize;
use std::path::Path;

use crate::{LetterboxError, Result};

/// Web server configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    /// Host address to bind.
    #[serde(default = "default_host")]
    pub host: String,
    /// Port number to listen on.
    #[serde(default = "default_port")]
    pub port: u16,
    /// CORS allowed origins.
    #[serde(default)]
    pub cors_origins: Vec<String>,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    5000
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            cors_origins: vec![],
        }
    }
}

/// Database configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct DatabaseConfig {
    /// Path to the SQLite database file.
    #[serde(default = "default_db_path")]
    pub path: String,
}

fn default_db_path() -> String {
    "data/letterbox.db".to_string()
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            path: default_db_path(),
        }
    }
}

/// Authentication configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct AuthConfig {
    /// JWT secret key (must be set; see LETTERBOX_JWT_SECRET).
    #[serde(default)]
    pub jwt_secret: String,
    /// Token lifetime in seconds.
    #[serde(default = "default_token_lifetime")]
    pub token_lifetime_secs: u64,
}

fn default_token_lifetime() -> u64 {
    86400 // 24 hours
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            jwt_secret: String::new(),
            token_lifetime_secs: default_token_lifetime(),
        }
    }
}

/// AI collaborator configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct AiConfig {
    /// Whether the AI endpoints are enabled.
    #[serde(default = "default_ai_enabled")]
    pub enabled: bool,
    /// Base URL of the OpenAI-compatible completion API.
    #[serde(default = "default_ai_base_url")]
    pub base_url: String,
    /// API key (see LETTERBOX_AI_API_KEY).
    #[serde(default)]
    pub api_key: String,
    /// Model name to request.
    #[serde(default = "default_ai_model")]
    pub model: String,
    /// Connection timeout in seconds.
    #[serde(default = "default_ai_connect_timeout")]
    pub connect_timeout_secs: u64,
    /// Total request timeout in seconds.
    #[serde(default = "default_ai_total_timeout")]
    pub total_timeout_secs: u64,
}

fn default_ai_enabled() -> bool {
    true
}

fn default_ai_base_url() -> String {
    "https://api.openai.com/v1".to_string()
}

fn default_ai_model() -> String {
    "gpt-4o-mini".to_string()
}

fn default_ai_connect_timeout() -> u64 {
    10
}

fn default_ai_total_timeout() -> u64 {
    60
}

impl Default for AiConfig {
    fn default() -> Self {
        Self {
            enabled: default_ai_enabled(),
            base_url: default_ai_base_url(),
            api_key: String::new(),
            model: default_ai_model(),
            connect_timeout_secs: default_ai_connect_timeout(),
            total_timeout_secs: default_ai_total_timeout(),
        }
    }
}

/// Logging configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error).
    #[serde(default = "default_log_level")]
    pub level: String,
    /// Path to the log file (empty for console only).
    #[serde(default = "default_log_file")]
    pub file: String,
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_file() -> String {
    "logs/letterbox.log".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            file: default_log_file(),
        }
    }
}

/// Main configuration structure.
#[derive(Debug, Clone, Deserialize, Default)]
pub struct Config {
    /// Server configuration.
    #[serde(default)]
    pub server: ServerConfig,
    /// Database configuration.
    #[serde(default)]
    pub database: DatabaseConfig,
    /// Authentication configuration.
    #[serde(default)]
    pub auth: AuthConfig,
    /// AI collaborator configuration.
    #[serde(default)]
    pub ai: AiConfig,
    /// Logging configuration.
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref()).map_err(LetterboxError::Io)?;
        Self::parse(&content)
    }

    /// Load configuration from a TOML file and apply environment variable overrides.
    pub fn load_with_env<P: AsRef<Path>>(path: P) -> Result<Self> {
        let mut config = Self::load(path)?;
        config.apply_env_overrides();
        Ok(config)
    }

    /// Parse configuration from a TOML string.
    pub fn parse(s: &str) -> Result<Self> {
        toml::from_str(s).map_err(|e| LetterboxError::Config(format!("config parse error: {e}")))
    }

    /// Apply environment variable overrides to the configuration.
    ///
    /// Supported environment variables:
    /// - `LETTERBOX_JWT_SECRET`: Override the JWT secret key
    /// - `LETTERBOX_AI_API_KEY`: Override the AI collaborator API key
    pub fn apply_env_overrides(&mut self) {
        if let Ok(jwt_secret) = std::env::var("LETTERBOX_JWT_SECRET") {
            if !jwt_secret.is_empty() {
                self.auth.jwt_secret = jwt_secret;
            }
        }
        if let Ok(api_key) = std::env::var("LETTERBOX_AI_API_KEY") {
            if !api_key.is_empty() {
                self.ai.api_key = api_key;
            }
        }
    }

    /// Validate the configuration.
    ///
    /// Returns an error if the JWT secret is not set.
    pub fn validate(&self) -> Result<()> {
        if self.auth.jwt_secret.is_empty() {
            return Err(LetterboxError::Config(
                "jwt_secret is not set. \
                 Set it in config.toml or via LETTERBOX_JWT_SECRET environment variable."
                    .to_string(),
            ));
        }
        Ok(())
    }
}
