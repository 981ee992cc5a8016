// ABOUTME: Configuration module root for the Solstice service
// ABOUTME: Environment-driven settings with typed parsing and startup summaries
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Solstice Life Stats

/// Environment-based configuration management
pub mod environment;

pub use environment::{Environment, LogLevel, ServerConfig};
