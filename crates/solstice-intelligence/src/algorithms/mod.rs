// ABOUTME: Estimation algorithm modules for the metrics engine
// ABOUTME: Each algorithm is a self-describing type with validation and formula text
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Solstice Life Stats

/// Basal metabolic rate estimation (Mifflin-St Jeor)
pub mod bmr;

pub use bmr::BmrEstimate;
