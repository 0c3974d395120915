// ABOUTME: Environment configuration for the recipe agent server
// ABOUTME: Reads listen address, Spoonacular settings, timeouts and log level from the environment
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org

//! Environment-based configuration management

use std::env;

use anyhow::{Context, Result};
use recipe_core::constants::{defaults, env_vars};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::external::SpoonacularClientConfig;

/// Strongly typed log level configuration
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    /// Errors only
    Error,
    /// Warnings and errors
    Warn,
    /// Informational messages
    #[default]
    Info,
    /// Debug output
    Debug,
    /// Everything
    Trace,
}

impl LogLevel {
    /// Convert to `tracing::Level`
    #[must_use]
    pub const fn to_tracing_level(self) -> tracing::Level {
        match self {
            Self::Error => tracing::Level::ERROR,
            Self::Warn => tracing::Level::WARN,
            Self::Info => tracing::Level::INFO,
            Self::Debug => tracing::Level::DEBUG,
            Self::Trace => tracing::Level::TRACE,
        }
    }

    /// Parse from string with fallback
    #[must_use]
    pub fn from_str_or_default(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "error" => Self::Error,
            "warn" => Self::Warn,
            "debug" => Self::Debug,
            "trace" => Self::Trace,
            _ => Self::Info,
        }
    }
}

impl std::fmt::Display for LogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Error => write!(f, "error"),
            Self::Warn => write!(f, "warn"),
            Self::Info => write!(f, "info"),
            Self::Debug => write!(f, "debug"),
            Self::Trace => write!(f, "trace"),
        }
    }
}

/// Deployment environment
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    /// Local development
    #[default]
    Development,
    /// Production deployment
    Production,
    /// Test runs
    Testing,
}

impl Environment {
    /// Parse from string with fallback
    #[must_use]
    pub fn from_str_or_default(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "production" | "prod" => Self::Production,
            "testing" | "test" => Self::Testing,
            _ => Self::Development,
        }
    }

    /// Check if this is a production environment
    #[must_use]
    pub const fn is_production(self) -> bool {
        matches!(self, Self::Production)
    }
}

impl std::fmt::Display for Environment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Development => write!(f, "development"),
            Self::Production => write!(f, "production"),
            Self::Testing => write!(f, "testing"),
        }
    }
}

/// Spoonacular API settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SpoonacularConfig {
    /// API key (`SPOON_KEY`)
    #[serde(skip_serializing)]
    pub api_key: Option<String>,
    /// API base URL
    pub base_url: String,
    /// Per-request timeout in seconds
    pub timeout_secs: u64,
}

/// Server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// HTTP listen address
    pub host: String,
    /// HTTP listen port
    pub http_port: u16,
    /// Overall per-request timeout in seconds
    pub request_timeout_secs: u64,
    /// Log level
    pub log_level: LogLevel,
    /// Deployment environment
    pub environment: Environment,
    /// Comma-separated CORS origins, or `*`
    pub cors_allowed_origins: String,
    /// Remote nutrition API
    pub spoonacular: SpoonacularConfig,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: defaults::HOST.to_owned(),
            http_port: defaults::HTTP_PORT,
            request_timeout_secs: defaults::REQUEST_TIMEOUT_SECS,
            log_level: LogLevel::default(),
            environment: Environment::default(),
            cors_allowed_origins: defaults::CORS_ALLOWED_ORIGINS.to_owned(),
            spoonacular: SpoonacularConfig {
                api_key: None,
                base_url: defaults::SPOONACULAR_BASE_URL.to_owned(),
                timeout_secs: defaults::SPOONACULAR_TIMEOUT_SECS,
            },
        }
    }
}

impl ServerConfig {
    /// Load configuration from environment variables
    ///
    /// # Errors
    /// Returns an error if a numeric variable cannot be parsed or validation fails
    pub fn from_env() -> Result<Self> {
        info!("Loading configuration from environment variables");

        // Load .env file if it exists
        if let Err(e) = dotenvy::dotenv() {
            warn!("No .env file found or failed to load: {}", e);
        }

        let port = env::var(env_vars::HTTP_PORT)
            .or_else(|_| env::var(env_vars::PORT))
            .unwrap_or_else(|_| defaults::HTTP_PORT.to_string());

        let config = Self {
            host: env_var_or(env_vars::HOST, defaults::HOST),
            http_port: port
                .parse()
                .with_context(|| format!("Invalid {} value: {port}", env_vars::HTTP_PORT))?,
            request_timeout_secs: env_var_or(
                env_vars::REQUEST_TIMEOUT_SECS,
                &defaults::REQUEST_TIMEOUT_SECS.to_string(),
            )
            .parse()
            .context("Invalid REQUEST_TIMEOUT_SECS value")?,
            log_level: LogLevel::from_str_or_default(&env_var_or(env_vars::LOG_LEVEL, "info")),
            environment: Environment::from_str_or_default(&env_var_or(
                env_vars::ENVIRONMENT,
                "development",
            )),
            cors_allowed_origins: env_var_or(
                env_vars::CORS_ALLOWED_ORIGINS,
                defaults::CORS_ALLOWED_ORIGINS,
            ),
            spoonacular: SpoonacularConfig {
                api_key: env::var(env_vars::SPOON_KEY)
                    .ok()
                    .filter(|key| !key.trim().is_empty()),
                base_url: env_var_or(
                    env_vars::SPOONACULAR_BASE_URL,
                    defaults::SPOONACULAR_BASE_URL,
                ),
                timeout_secs: env_var_or(
                    env_vars::SPOONACULAR_TIMEOUT_SECS,
                    &defaults::SPOONACULAR_TIMEOUT_SECS.to_string(),
                )
                .parse()
                .context("Invalid SPOONACULAR_TIMEOUT_SECS value")?,
            },
        };

        config.validate()?;
        info!("Configuration loaded successfully");
        Ok(config)
    }

    /// Validate configuration values
    ///
    /// # Errors
    /// Returns an error for a zero port or a zero timeout
    pub fn validate(&self) -> Result<()> {
        if self.http_port == 0 {
            return Err(anyhow::anyhow!("HTTP_PORT must be greater than zero"));
        }
        if self.request_timeout_secs == 0 {
            return Err(anyhow::anyhow!("REQUEST_TIMEOUT_SECS must be greater than zero"));
        }
        if self.spoonacular.timeout_secs == 0 {
            return Err(anyhow::anyhow!(
                "SPOONACULAR_TIMEOUT_SECS must be greater than zero"
            ));
        }
        if self.spoonacular.api_key.is_none() {
            warn!("SPOON_KEY is not set; ingredient parsing and unit conversion will fail");
        }
        Ok(())
    }

    /// Base URL peers use to reach this server
    #[must_use]
    pub fn base_url(&self) -> String {
        let host = if self.host == "0.0.0.0" {
            "localhost"
        } else {
            self.host.as_str()
        };
        format!("http://{host}:{}", self.http_port)
    }

    /// Settings for the Spoonacular client
    #[must_use]
    pub fn spoonacular_client_config(&self) -> SpoonacularClientConfig {
        SpoonacularClientConfig {
            api_key: self.spoonacular.api_key.clone(),
            base_url: self.spoonacular.base_url.clone(),
            timeout_secs: self.spoonacular.timeout_secs,
        }
    }

    /// Get a summary of the configuration for logging (without secrets)
    #[must_use]
    pub fn summary(&self) -> String {
        format!(
            "Recipe Adjuster Agent Configuration:\n\
             - Listen: {}:{}\n\
             - Environment: {}\n\
             - Log Level: {}\n\
             - Request Timeout: {}s\n\
             - Spoonacular: {} ({})",
            self.host,
            self.http_port,
            self.environment,
            self.log_level,
            self.request_timeout_secs,
            self.spoonacular.base_url,
            if self.spoonacular.api_key.is_some() {
                "API key set"
            } else {
                "API key missing"
            },
        )
    }
}

/// Get environment variable or default value
fn env_var_or(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_owned())
}
