// ABOUTME: Logging configuration and structured logging setup for observability
// ABOUTME: Configures log levels, formatters, and output destinations
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Solstice Life Stats

//! Production-ready logging configuration with structured output

use anyhow::Result;
use std::env;
use std::io;
use tracing::info;
use tracing_subscriber::{
    fmt::{self, format::FmtSpan},
    layer::SubscriberExt,
    util::SubscriberInitExt,
    EnvFilter,
};

use crate::config::LogLevel;

/// Logging configuration
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error)
    pub level: LogLevel,
    /// Output format (json, pretty, compact)
    pub format: LogFormat,
    /// Include source file and line numbers
    pub include_location: bool,
    /// Include span close events for request timing
    pub include_spans: bool,
    /// Service name for structured logging
    pub service_name: String,
}

/// Log output format options
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogFormat {
    /// `JSON` format for production logging
    Json,
    /// Pretty format for development
    Pretty,
    /// Compact format for space-constrained environments
    Compact,
}

impl LogFormat {
    /// Parse from string with fallback to `Pretty`
    #[must_use]
    pub fn from_str_or_default(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "json" => Self::Json,
            "compact" => Self::Compact,
            _ => Self::Pretty,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: LogLevel::Info,
            format: LogFormat::Pretty,
            include_location: false,
            include_spans: false,
            service_name: "solstice-life-server".to_owned(),
        }
    }
}

impl LoggingConfig {
    /// Build a logging configuration from environment variables
    ///
    /// - `SOLSTICE_LOG_LEVEL`: level filter default (overridden by `RUST_LOG`)
    /// - `SOLSTICE_LOG_FORMAT`: json / pretty / compact
    /// - `SOLSTICE_LOG_LOCATION`: include file/line when `true`
    #[must_use]
    pub fn from_env() -> Self {
        let level =
            LogLevel::from_str_or_default(&env::var("SOLSTICE_LOG_LEVEL").unwrap_or_default());
        let format =
            LogFormat::from_str_or_default(&env::var("SOLSTICE_LOG_FORMAT").unwrap_or_default());
        let include_location = env::var("SOLSTICE_LOG_LOCATION")
            .map(|v| v.eq_ignore_ascii_case("true"))
            .unwrap_or(false);

        Self {
            level,
            format,
            include_location,
            ..Self::default()
        }
    }

    /// Install the global tracing subscriber
    ///
    /// `RUST_LOG` takes precedence over the configured level so operators can
    /// raise verbosity per-module without redeploying.
    ///
    /// # Errors
    ///
    /// Returns an error if a global subscriber is already installed.
    pub fn init(self) -> Result<()> {
        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(self.level.to_tracing_level().as_str()));

        let span_events = if self.include_spans {
            FmtSpan::CLOSE
        } else {
            FmtSpan::NONE
        };

        match self.format {
            LogFormat::Json => {
                let layer = fmt::layer()
                    .json()
                    .with_writer(io::stdout)
                    .with_file(self.include_location)
                    .with_line_number(self.include_location)
                    .with_span_events(span_events)
                    .with_current_span(true);
                tracing_subscriber::registry()
                    .with(filter)
                    .with(layer)
                    .try_init()?;
            }
            LogFormat::Pretty => {
                let layer = fmt::layer()
                    .pretty()
                    .with_writer(io::stdout)
                    .with_file(self.include_location)
                    .with_line_number(self.include_location)
                    .with_span_events(span_events);
                tracing_subscriber::registry()
                    .with(filter)
                    .with(layer)
                    .try_init()?;
            }
            LogFormat::Compact => {
                let layer = fmt::layer()
                    .compact()
                    .with_writer(io::stdout)
                    .with_file(self.include_location)
                    .with_line_number(self.include_location)
                    .with_span_events(span_events);
                tracing_subscriber::registry()
                    .with(filter)
                    .with(layer)
                    .try_init()?;
            }
        }

        info!(service = %self.service_name, format = ?self.format, "logging initialized");
        Ok(())
    }
}

/// Initialize logging from environment variables
///
/// # Errors
///
/// Returns an error if a global subscriber is already installed.
pub fn init_from_env() -> Result<()> {
    LoggingConfig::from_env().init()
}
