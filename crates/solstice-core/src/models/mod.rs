// ABOUTME: Core data models shared across the Solstice workspace
// ABOUTME: Profiles, derived metrics, chart datasets, and enrichment payloads
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Solstice Life Stats

//! Core data models.

/// User profile input types (`UserProfile`, `Gender`, `ActivityLevel`, `Diet`)
pub mod profile;

/// Derived life metrics record
pub mod metrics;

/// Chart dataset types
pub mod chart;

/// Narrative enrichment payload types
pub mod enrichment;

pub use chart::{ChartDataset, ChartPoint};
pub use enrichment::{
    CosmicPerspective, EarthChanges, EnrichmentField, EnvironmentalImpact, FunFact, FunFactIcon,
    GroundingLink, GroundingSource, NearbySite,
};
pub use metrics::LifeMetrics;
pub use profile::{ActivityLevel, Diet, Gender, UserProfile};
