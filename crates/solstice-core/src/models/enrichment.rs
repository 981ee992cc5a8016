// ABOUTME: Narrative enrichment payload types returned by the AI producers
// ABOUTME: Includes the pending/resolved field lifecycle used by result snapshots
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Solstice Life Stats

use serde::{Deserialize, Serialize};

/// A titled link extracted from provider grounding metadata
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroundingLink {
    /// Source URI
    pub uri: String,
    /// Source title
    pub title: String,
}

/// One grounding citation; either a web source or a maps place
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct GroundingSource {
    /// Web search citation, if present
    #[serde(skip_serializing_if = "Option::is_none")]
    pub web: Option<GroundingLink>,
    /// Maps place citation, if present
    #[serde(skip_serializing_if = "Option::is_none")]
    pub maps: Option<GroundingLink>,
}

/// Summary of world changes since the user's birth year, with citations
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EarthChanges {
    /// Narrative summary text
    pub summary: String,
    /// Grounding citations backing the summary
    pub sources: Vec<GroundingSource>,
}

/// Estimated lifetime environmental impact, as two self-contained facts
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EnvironmentalImpact {
    /// Cumulative carbon footprint statement
    pub carbon_footprint: String,
    /// Total water consumption statement
    pub water_consumption: String,
}

/// Reflective cosmic-perspective narrative
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CosmicPerspective {
    /// Narrative text, plain (no markdown)
    pub text: String,
}

/// Icon tag for a fun fact card
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FunFactIcon {
    /// Walking figure
    Walk,
    /// Clock face
    Clock,
    /// Water drop
    Water,
    /// Growth sprout
    Growth,
    /// Crescent moon
    Moon,
    /// Star
    Star,
}

/// A single quirky personalized statistic
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FunFact {
    /// Short title, a few words
    pub label: String,
    /// The statistic text
    pub value: String,
    /// Display icon tag
    pub icon: FunFactIcon,
}

/// A nearby environmental site suggestion
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NearbySite {
    /// Site name
    pub title: String,
    /// Short engaging description
    pub description: String,
    /// Link for the site ("#" when none is known)
    pub uri: String,
}

/// Lifecycle wrapper for an independently-resolving enrichment field
///
/// Initialized `Pending` at submission time; transitions to `Resolved` exactly
/// once and never reverts. Producer failures resolve with the producer's
/// fallback payload rather than staying pending. Serializes as `null` while
/// pending and as the bare payload once resolved.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(untagged)]
pub enum EnrichmentField<T> {
    /// Not yet resolved; serializes as `null`
    #[default]
    Pending,
    /// Resolved payload (success or fallback)
    Resolved(T),
}

impl<T> EnrichmentField<T> {
    /// Whether the field has resolved
    #[must_use]
    pub const fn is_resolved(&self) -> bool {
        matches!(self, Self::Resolved(_))
    }

    /// The resolved payload, if any
    #[must_use]
    pub const fn as_resolved(&self) -> Option<&T> {
        match self {
            Self::Pending => None,
            Self::Resolved(value) => Some(value),
        }
    }

    /// Transition to resolved. Later resolutions overwrite earlier ones only
    /// for the replaceable nearby-sites field; primary fields resolve once.
    pub fn resolve(&mut self, value: T) {
        *self = Self::Resolved(value);
    }
}
