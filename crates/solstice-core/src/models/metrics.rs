// ABOUTME: Derived life metrics record produced by the metrics engine
// ABOUTME: Flat numeric snapshot, recomputed in full on every submission
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Solstice Life Stats

use serde::{Deserialize, Serialize};

/// Derived life statistics
///
/// Every field is a pure function of (`UserProfile`, now). The record is
/// recomputed from scratch on each submission; nothing here updates
/// incrementally or persists. All fields are non-negative for a valid
/// (non-future) birthdate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LifeMetrics {
    /// Whole days lived, `floor((now - birthdate) / 1 day)`
    pub days_lived: u64,
    /// Breaths taken at an average 16 breaths/minute
    pub breaths_taken: u64,
    /// Hours slept at an average 7.5 hours/day
    pub hours_slept: u64,
    /// Meals consumed at 3 meals/day
    pub meals_consumed: u64,
    /// Heartbeats at the activity-dependent resting rate
    pub heartbeats: u64,
    /// Kilometers walked at the activity-dependent daily distance
    pub distance_walked_km: u64,
    /// Calories burned, daily BMR-derived expenditure accumulated over life
    pub calories_burned: u64,
    /// Resting basal metabolic rate in kcal/day (defined even at zero days lived)
    pub basal_metabolic_rate: f64,
    /// Daily calorie expenditure, basal rate times the activity multiplier
    pub daily_calories: f64,
    /// Trees needed to supply a lifetime of oxygen, rounded to 2 decimals
    pub trees_for_oxygen: f64,
    /// Kilometers traveled around the galactic center
    pub galactic_distance_km: u64,
    /// Completed lunar sidereal orbits, unrounded
    pub moon_orbits: f64,
}
