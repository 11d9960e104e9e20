//! Configuration management for the trip planner
//!
//! Handles loading configuration from files, environment variables,
//! and provides validation for all configuration settings.

use crate::TripPlannerError;
use anyhow::{Context, Result};
use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

const APP_DIR: &str = "smart-trip-planner";

/// Root configuration structure
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TripPlannerConfig {
    /// Model provider configuration
    pub model: ModelConfig,
    /// HTTP server configuration
    pub server: ServerConfig,
    /// Logging configuration
    pub logging: LoggingConfig,
    /// Planner behaviour settings
    pub planner: PlannerConfig,
}

/// Which hosted model API to talk to
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ModelProvider {
    Anthropic,
    Gemini,
}

impl ModelProvider {
    fn default_base_url(self) -> &'static str {
        match self {
            ModelProvider::Anthropic => "https://api.anthropic.com",
            ModelProvider::Gemini => "https://generativelanguage.googleapis.com",
        }
    }

    fn default_model(self) -> &'static str {
        match self {
            ModelProvider::Anthropic => "claude-haiku-4-5",
            ModelProvider::Gemini => "gemini-2.0-flash",
        }
    }

    fn api_key_env(self) -> &'static str {
        match self {
            ModelProvider::Anthropic => "ANTHROPIC_API_KEY",
            ModelProvider::Gemini => "GEMINI_API_KEY",
        }
    }
}

/// Model provider settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ModelConfig {
    pub provider: ModelProvider,
    /// API key; falls back to the provider's conventional env var
    pub api_key: Option<String>,
    /// Base URL of the provider API (empty = provider default)
    pub base_url: String,
    /// Model identifier (empty = provider default)
    pub model: String,
    /// Transport timeout for one completion call in seconds
    pub timeout_seconds: u32,
    /// Maximum tokens the model may produce
    pub max_tokens: u32,
}

/// HTTP server settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Upper bound for a single HTTP request, including the model call
    pub request_timeout_seconds: u32,
    /// Maximum accepted request body in KiB
    pub body_limit_kb: u32,
    /// PEM certificate for TLS serving
    pub tls_cert_path: Option<PathBuf>,
    /// PEM private key for TLS serving
    pub tls_key_path: Option<PathBuf>,
}

/// Logging configuration settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Log level (error, warn, info, debug, trace)
    pub level: String,
    /// Log format (pretty or json)
    pub format: String,
}

/// Planner behaviour settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PlannerConfig {
    /// Most destinations that can be combined into one multi-country trip
    pub multi_country_cap: usize,
    /// Most page sessions kept in memory before the oldest is evicted
    pub max_sessions: usize,
    /// Refresh interval of the loading page in seconds
    pub loading_refresh_seconds: u32,
}

// Default value functions
fn default_timeout() -> u32 {
    60
}

fn default_max_tokens() -> u32 {
    8192
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    9002
}

fn default_request_timeout() -> u32 {
    120
}

fn default_body_limit_kb() -> u32 {
    64
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "pretty".to_string()
}

fn default_multi_country_cap() -> usize {
    4
}

fn default_max_sessions() -> usize {
    1000
}

fn default_loading_refresh() -> u32 {
    2
}

impl Default for ModelConfig {
    fn default() -> Self {
        // base_url and model stay empty until apply_defaults knows the provider
        Self {
            provider: ModelProvider::Anthropic,
            api_key: None,
            base_url: String::new(),
            model: String::new(),
            timeout_seconds: default_timeout(),
            max_tokens: default_max_tokens(),
        }
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            request_timeout_seconds: default_request_timeout(),
            body_limit_kb: default_body_limit_kb(),
            tls_cert_path: None,
            tls_key_path: None,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self {
            multi_country_cap: default_multi_country_cap(),
            max_sessions: default_max_sessions(),
            loading_refresh_seconds: default_loading_refresh(),
        }
    }
}

impl Default for TripPlannerConfig {
    fn default() -> Self {
        let mut config = Self {
            model: ModelConfig::default(),
            server: ServerConfig::default(),
            logging: LoggingConfig::default(),
            planner: PlannerConfig::default(),
        };
        config.apply_defaults();
        config
    }
}

impl TripPlannerConfig {
    /// Load configuration from file and environment variables
    pub fn load() -> Result<Self> {
        Self::load_from_path(None)
    }

    /// Load configuration from specified path
    pub fn load_from_path(config_path: Option<PathBuf>) -> Result<Self> {
        let mut builder = Config::builder();

        let config_file = config_path.unwrap_or_else(|| {
            Self::get_config_path().unwrap_or_else(|| PathBuf::from("config.toml"))
        });

        if config_file.exists() {
            builder = builder.add_source(
                File::from(config_file.clone())
                    .required(false)
                    .format(config::FileFormat::Toml),
            );
        }

        // TRIPPLANNER_SERVER__PORT=8080 style overrides
        builder = builder.add_source(
            Environment::with_prefix("TRIPPLANNER")
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        );

        let settings = builder
            .build()
            .with_context(|| "Failed to build configuration")?;

        let mut config: TripPlannerConfig = settings
            .try_deserialize()
            .with_context(|| "Failed to deserialize configuration")?;

        config.apply_defaults();
        config.apply_env_api_key();
        config.validate()?;

        Ok(config)
    }

    /// Get the default configuration file path
    #[must_use]
    pub fn get_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join(APP_DIR).join("config.toml"))
    }

    /// Apply default values to missing configuration fields
    pub fn apply_defaults(&mut self) {
        if self.model.base_url.is_empty() {
            self.model.base_url = self.model.provider.default_base_url().to_string();
        }
        if self.model.model.is_empty() {
            self.model.model = self.model.provider.default_model().to_string();
        }
        if self.model.timeout_seconds == 0 {
            self.model.timeout_seconds = default_timeout();
        }
        if self.model.max_tokens == 0 {
            self.model.max_tokens = default_max_tokens();
        }
        if self.server.host.is_empty() {
            self.server.host = default_host();
        }
        if self.server.request_timeout_seconds == 0 {
            self.server.request_timeout_seconds = default_request_timeout();
        }
        if self.server.body_limit_kb == 0 {
            self.server.body_limit_kb = default_body_limit_kb();
        }
        if self.logging.level.is_empty() {
            self.logging.level = default_log_level();
        }
        if self.logging.format.is_empty() {
            self.logging.format = default_log_format();
        }
        if self.planner.multi_country_cap == 0 {
            self.planner.multi_country_cap = default_multi_country_cap();
        }
        if self.planner.max_sessions == 0 {
            self.planner.max_sessions = default_max_sessions();
        }
        if self.planner.loading_refresh_seconds == 0 {
            self.planner.loading_refresh_seconds = default_loading_refresh();
        }
    }

    /// Fill an absent API key from the provider's conventional env var
    fn apply_env_api_key(&mut self) {
        if self.model.api_key.is_none() {
            self.model.api_key = std::env::var(self.model.provider.api_key_env())
                .ok()
                .filter(|key| !key.is_empty());
        }
    }

    /// Validate all configuration settings
    pub fn validate(&self) -> Result<()> {
        self.validate_api_key()?;
        self.validate_numeric_ranges()?;
        self.validate_string_values()?;
        Ok(())
    }

    /// The configured API key, or a configuration error naming where to set it
    pub fn require_api_key(&self) -> crate::Result<&str> {
        self.model.api_key.as_deref().ok_or_else(|| {
            TripPlannerError::config(format!(
                "No model API key configured. Set model.api_key or {}.",
                self.model.provider.api_key_env()
            ))
        })
    }

    fn validate_api_key(&self) -> Result<()> {
        if let Some(api_key) = &self.model.api_key {
            if api_key.trim().is_empty() {
                return Err(TripPlannerError::config(
                    "Model API key cannot be empty if provided. Either remove it or provide a valid key.",
                )
                .into());
            }

            if api_key.len() > 256 {
                return Err(TripPlannerError::config(
                    "Model API key appears to be invalid (too long). Please check your API key.",
                )
                .into());
            }
        }

        Ok(())
    }

    fn validate_numeric_ranges(&self) -> Result<()> {
        if self.model.timeout_seconds > 300 {
            return Err(
                TripPlannerError::config("Model API timeout cannot exceed 300 seconds").into(),
            );
        }

        if !(256..=65_536).contains(&self.model.max_tokens) {
            return Err(TripPlannerError::config(
                "Model max tokens must be between 256 and 65536",
            )
            .into());
        }

        if self.server.port == 0 {
            return Err(TripPlannerError::config("Server port cannot be 0").into());
        }

        if self.server.request_timeout_seconds < self.model.timeout_seconds {
            return Err(TripPlannerError::config(
                "Server request timeout must be at least the model API timeout",
            )
            .into());
        }

        if !(2..=10).contains(&self.planner.multi_country_cap) {
            return Err(TripPlannerError::config(
                "Multi-country cap must be between 2 and 10",
            )
            .into());
        }

        Ok(())
    }

    fn validate_string_values(&self) -> Result<()> {
        let valid_log_levels = ["error", "warn", "info", "debug", "trace"];
        if !valid_log_levels.contains(&self.logging.level.as_str()) {
            return Err(TripPlannerError::config(format!(
                "Invalid log level '{}'. Must be one of: {}",
                self.logging.level,
                valid_log_levels.join(", ")
            ))
            .into());
        }

        let valid_log_formats = ["pretty", "json"];
        if !valid_log_formats.contains(&self.logging.format.as_str()) {
            return Err(TripPlannerError::config(format!(
                "Invalid log format '{}'. Must be one of: {}",
                self.logging.format,
                valid_log_formats.join(", ")
            ))
            .into());
        }

        if !self.model.base_url.starts_with("http://")
            && !self.model.base_url.starts_with("https://")
        {
            return Err(TripPlannerError::config(
                "Model API base URL must be a valid HTTP or HTTPS URL",
            )
            .into());
        }

        if self.server.tls_cert_path.is_some() != self.server.tls_key_path.is_some() {
            return Err(TripPlannerError::config(
                "TLS requires both server.tls_cert_path and server.tls_key_path",
            )
            .into());
        }

        Ok(())
    }
}
