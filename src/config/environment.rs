// ABOUTME: Environment configuration management for deployment-specific settings
// ABOUTME: Handles environment variables, deployment modes, and runtime configuration parsing
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Solstice Life Stats

//! Environment-based configuration management for production deployment

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::env;
use std::time::Duration;
use tracing::warn;

/// Default HTTP port
const DEFAULT_HTTP_PORT: u16 = 8081;

/// Default bound on every enrichment producer call, in seconds
const DEFAULT_ENRICHMENT_TIMEOUT_SECS: u64 = 30;

/// Strongly typed log level configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    /// Errors only
    Error,
    /// Warnings and errors
    Warn,
    /// Default operational logging
    #[default]
    Info,
    /// Verbose debugging
    Debug,
    /// Everything
    Trace,
}

impl LogLevel {
    /// Convert to `tracing::Level`
    #[must_use]
    pub const fn to_tracing_level(&self) -> tracing::Level {
        match self {
            Self::Error => tracing::Level::ERROR,
            Self::Warn => tracing::Level::WARN,
            Self::Info => tracing::Level::INFO,
            Self::Debug => tracing::Level::DEBUG,
            Self::Trace => tracing::Level::TRACE,
        }
    }

    /// Parse from string with fallback to `Info`
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
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    /// Local development
    #[default]
    Development,
    /// Production deployment
    Production,
}

impl Environment {
    /// Parse from string with fallback to `Development`
    #[must_use]
    pub fn from_str_or_default(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "production" | "prod" => Self::Production,
            _ => Self::Development,
        }
    }
}

impl std::fmt::Display for Environment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Development => write!(f, "development"),
            Self::Production => write!(f, "production"),
        }
    }
}

/// Enrichment client settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EnrichmentConfig {
    /// Upper bound on each producer call before the fallback payload is used
    pub timeout_secs: u64,
    /// Model override passed to the LLM provider, if any
    pub model: Option<String>,
}

impl EnrichmentConfig {
    /// The producer timeout as a `Duration`
    #[must_use]
    pub const fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

/// Server configuration, read once at startup
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// HTTP listen port
    pub http_port: u16,
    /// Deployment environment
    pub environment: Environment,
    /// Log level
    pub log_level: LogLevel,
    /// Allowed CORS origins, `*` for any
    pub cors_origins: Vec<String>,
    /// Enrichment client settings
    pub enrichment: EnrichmentConfig,
}

impl ServerConfig {
    /// Load configuration from `SOLSTICE_*` environment variables
    ///
    /// Malformed values warn and fall back to defaults; only a structurally
    /// unusable port is a hard error.
    ///
    /// # Errors
    ///
    /// Returns an error if `SOLSTICE_HTTP_PORT` is set but not a valid port.
    pub fn from_env() -> Result<Self> {
        let http_port = match env::var("SOLSTICE_HTTP_PORT") {
            Ok(raw) => raw
                .parse::<u16>()
                .with_context(|| format!("SOLSTICE_HTTP_PORT '{raw}' is not a valid port"))?,
            Err(_) => DEFAULT_HTTP_PORT,
        };

        let environment = Environment::from_str_or_default(
            &env::var("SOLSTICE_ENV").unwrap_or_default(),
        );

        let log_level =
            LogLevel::from_str_or_default(&env::var("SOLSTICE_LOG_LEVEL").unwrap_or_default());

        let cors_origins = env::var("SOLSTICE_CORS_ORIGINS")
            .map(|raw| {
                raw.split(',')
                    .map(|s| s.trim().to_owned())
                    .filter(|s| !s.is_empty())
                    .collect()
            })
            .unwrap_or_else(|_| vec!["*".to_owned()]);

        let timeout_secs = env::var("SOLSTICE_ENRICHMENT_TIMEOUT_SECS")
            .ok()
            .and_then(|raw| match raw.parse::<u64>() {
                Ok(secs) if secs > 0 => Some(secs),
                _ => {
                    warn!(
                        value = %raw,
                        "invalid SOLSTICE_ENRICHMENT_TIMEOUT_SECS, using default"
                    );
                    None
                }
            })
            .unwrap_or(DEFAULT_ENRICHMENT_TIMEOUT_SECS);

        let model = env::var("SOLSTICE_LLM_MODEL").ok().filter(|m| !m.is_empty());

        Ok(Self {
            http_port,
            environment,
            log_level,
            cors_origins,
            enrichment: EnrichmentConfig {
                timeout_secs,
                model,
            },
        })
    }

    /// One-line startup summary for the logs
    #[must_use]
    pub fn summary(&self) -> String {
        format!(
            "env={} port={} log={} enrichment_timeout={}s cors={}",
            self.environment,
            self.http_port,
            self.log_level,
            self.enrichment.timeout_secs,
            self.cors_origins.join(",")
        )
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            http_port: DEFAULT_HTTP_PORT,
            environment: Environment::Development,
            log_level: LogLevel::Info,
            cors_origins: vec!["*".to_owned()],
            enrichment: EnrichmentConfig {
                timeout_secs: DEFAULT_ENRICHMENT_TIMEOUT_SECS,
                model: None,
            },
        }
    }
}
