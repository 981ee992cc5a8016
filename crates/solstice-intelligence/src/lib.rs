// ABOUTME: Deterministic life metrics engine and chart data generator
// ABOUTME: Pure synchronous computation, safe to call repeatedly without coordination
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Solstice Life Stats

#![deny(unsafe_code)]

//! # Solstice Intelligence
//!
//! The deterministic subsystem of the Solstice platform: closed-form life
//! statistics and the two chart datasets derived from them. Everything in this
//! crate is a pure, total function over validated inputs: no I/O, no shared
//! mutable state, no randomness. Results depend only on the profile and the
//! wall-clock instant passed by the caller.

/// Closed-form estimation algorithms (basal metabolic rate)
pub mod algorithms;

/// The life metrics engine
pub mod engine;

/// Chart dataset generation (life distribution, carbon trend)
pub mod charts;

pub use charts::{generate_carbon_trend, generate_life_distribution};
pub use engine::compute_life_metrics;
