// ABOUTME: LifeReport snapshot and the reducer events that fill it in
// ABOUTME: Deterministic fields are present from creation; narrative fields resolve independently
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Solstice Life Stats

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use solstice_core::models::{
    ChartDataset, CosmicPerspective, EarthChanges, EnrichmentField, EnvironmentalImpact, FunFact,
    LifeMetrics, NearbySite, UserProfile,
};
use solstice_intelligence::{
    compute_life_metrics, generate_carbon_trend, generate_life_distribution,
};

/// The progressively-filled result of one profile submission
///
/// Deterministic fields (metrics, charts) are computed synchronously and
/// present from creation. Narrative fields start pending and resolve
/// independently in any order. `nearby_sites` is replaceable: each
/// user-triggered lookup overwrites the previous list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LifeReport {
    /// Identity of the submission this report belongs to
    pub submission_id: Uuid,
    /// Submission instant used by the metrics engine
    pub submitted_at: DateTime<Utc>,
    /// The submitted profile
    pub profile: UserProfile,
    /// Derived life statistics
    pub metrics: LifeMetrics,
    /// Life-hours distribution buckets
    pub life_distribution: ChartDataset,
    /// Cumulative carbon trend by age
    pub carbon_trend: ChartDataset,
    /// World changes since the birth year
    pub earth_changes: EnrichmentField<EarthChanges>,
    /// Environmental-impact fact pair
    pub environmental_impact: EnrichmentField<EnvironmentalImpact>,
    /// Cosmic-perspective reflection
    pub cosmic_perspective: EnrichmentField<CosmicPerspective>,
    /// Quirky personalized statistics
    pub fun_facts: EnrichmentField<Vec<FunFact>>,
    /// Nearby environmental sites; empty until the first lookup
    pub nearby_sites: Vec<NearbySite>,
    /// Whether the four primary producers have all resolved
    pub enrichment_complete: bool,
}

impl LifeReport {
    /// Build the initial snapshot for a validated profile at `now`
    ///
    /// Runs the metrics engine and both chart generators synchronously; all
    /// narrative fields start pending.
    #[must_use]
    pub fn new(profile: UserProfile, now: DateTime<Utc>) -> Self {
        let metrics = compute_life_metrics(&profile, now);
        let life_distribution = generate_life_distribution(metrics.days_lived);
        let carbon_trend = generate_carbon_trend(metrics.days_lived, profile.diet);

        Self {
            submission_id: Uuid::new_v4(),
            submitted_at: now,
            profile,
            metrics,
            life_distribution,
            carbon_trend,
            earth_changes: EnrichmentField::Pending,
            environmental_impact: EnrichmentField::Pending,
            cosmic_perspective: EnrichmentField::Pending,
            fun_facts: EnrichmentField::Pending,
            nearby_sites: Vec::new(),
            enrichment_complete: false,
        }
    }

    /// Age in fractional years at submission time
    #[must_use]
    pub fn age_years(&self) -> f64 {
        self.metrics.days_lived as f64 / solstice_core::constants::cosmos::DAYS_PER_YEAR
    }

    /// Merge one producer resolution into the snapshot
    pub fn apply(&mut self, update: EnrichmentUpdate) {
        match update {
            EnrichmentUpdate::EarthChanges(payload) => self.earth_changes.resolve(payload),
            EnrichmentUpdate::EnvironmentalImpact(payload) => {
                self.environmental_impact.resolve(payload);
            }
            EnrichmentUpdate::CosmicPerspective(payload) => {
                self.cosmic_perspective.resolve(payload);
            }
            EnrichmentUpdate::FunFacts(payload) => self.fun_facts.resolve(payload),
            EnrichmentUpdate::NearbySites(payload) => self.nearby_sites = payload,
        }
    }

    /// Whether all four primary narrative fields have resolved
    #[must_use]
    pub const fn primary_fields_resolved(&self) -> bool {
        self.earth_changes.is_resolved()
            && self.environmental_impact.is_resolved()
            && self.cosmic_perspective.is_resolved()
            && self.fun_facts.is_resolved()
    }
}

/// One producer resolution, keyed by field
#[derive(Debug, Clone, PartialEq)]
pub enum EnrichmentUpdate {
    /// World-changes summary resolved
    EarthChanges(EarthChanges),
    /// Environmental-impact pair resolved
    EnvironmentalImpact(EnvironmentalImpact),
    /// Cosmic perspective resolved
    CosmicPerspective(CosmicPerspective),
    /// Fun facts resolved
    FunFacts(Vec<FunFact>),
    /// Nearby-sites lookup resolved (replaces the previous list)
    NearbySites(Vec<NearbySite>),
}

impl EnrichmentUpdate {
    /// Name of the field this update resolves, for logging
    #[must_use]
    pub const fn field_name(&self) -> &'static str {
        match self {
            Self::EarthChanges(_) => "earth_changes",
            Self::EnvironmentalImpact(_) => "environmental_impact",
            Self::CosmicPerspective(_) => "cosmic_perspective",
            Self::FunFacts(_) => "fun_facts",
            Self::NearbySites(_) => "nearby_sites",
        }
    }
}

/// An update tagged with the submission it belongs to
///
/// The reducer drops tagged updates whose submission id no longer matches the
/// live snapshot, which is how results for a superseded profile are ignored.
#[derive(Debug, Clone)]
pub struct TaggedUpdate {
    /// Submission the producing batch was started for
    pub submission_id: Uuid,
    /// The resolution payload
    pub update: EnrichmentUpdate,
}
