// ABOUTME: Solstice Life Stats API library root
// ABOUTME: Wires the metrics engine, enrichment client, session store, and HTTP surface
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Solstice Life Stats

#![deny(unsafe_code)]

//! # Solstice Life Stats API
//!
//! A personal life statistics service: clients submit a biometric and
//! lifestyle profile, the deterministic engine derives a set of numeric life
//! statistics and two chart datasets synchronously, and a set of AI narrative
//! producers enrich the result asynchronously as each one resolves.
//!
//! ## Architecture
//!
//! - `solstice_intelligence` (re-exported as [`intelligence`]): pure metrics
//!   engine and chart data generator.
//! - [`llm`]: LLM provider SPI and the Gemini implementation.
//! - [`enrichment`]: the five narrative producers with fallback-on-failure.
//! - [`session`]: result snapshots, the enrichment reducer, and the session
//!   store.
//! - [`routes`]: axum REST surface.

/// Environment-driven configuration
pub mod config;

/// Structured logging setup
pub mod logging;

/// LLM provider abstraction and Gemini implementation
pub mod llm;

/// Narrative enrichment producers with fallback-on-failure
pub mod enrichment;

/// Session store, result snapshots, and the enrichment reducer
pub mod session;

/// HTTP route handlers
pub mod routes;

/// Re-export of the foundation crate
pub use solstice_core as core;

/// Re-export of the deterministic computation crate
pub use solstice_intelligence as intelligence;

/// Unified error types, re-exported from the foundation crate
pub mod errors {
    pub use solstice_core::errors::{
        AppError, AppResult, ErrorCode, ErrorResponse, ErrorResponseDetails,
    };
}
