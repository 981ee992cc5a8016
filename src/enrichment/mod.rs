// ABOUTME: Narrative enrichment client over the LLM provider SPI
// ABOUTME: Five producers, each catching its own failures and substituting fallbacks
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Solstice Life Stats

//! # Narrative Enrichment Client
//!
//! Producers turning computed metrics into narrative content: a world-changes
//! summary with citations, an environmental-impact fact pair, a cosmic
//! perspective, a list of fun facts, and a nearby-sites lookup. Every producer
//! owns its failure handling: any provider error, parse failure, or timeout
//! collapses into a fixed user-facing fallback payload. None of them ever
//! propagates a hard failure to the orchestrator.

mod service;

pub use service::EnrichmentService;
