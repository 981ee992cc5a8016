// ABOUTME: The life metrics engine, a pure function from profile and instant to statistics
// ABOUTME: Integer-exact count derivations with f64 only where the contract needs fractions
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Solstice Life Stats

//! # Life Metrics Engine
//!
//! `compute_life_metrics` maps a validated [`UserProfile`] and a wall-clock
//! instant to the full [`LifeMetrics`] record. The function is pure and total:
//! same profile and instant, same output, no I/O. Validation (rejecting future
//! birthdates, non-positive measurements) happens upstream; the engine guards
//! a negative day count to zero rather than propagating it.

use chrono::{DateTime, NaiveTime, Utc};
use tracing::trace;

use solstice_core::constants::{cosmos, physiology};
use solstice_core::models::{ActivityLevel, LifeMetrics, UserProfile};

use crate::algorithms::BmrEstimate;

/// Compute the derived life statistics for a profile at `now`
///
/// All count fields use the day count `floor((now - birthdate) / 1 day)` and
/// scale monotonically with it. The basal metabolic rate and daily calorie
/// expenditure stay defined even at zero days lived, since the Mifflin-St Jeor
/// term depends on age in years, not the day count.
#[must_use]
pub fn compute_life_metrics(profile: &UserProfile, now: DateTime<Utc>) -> LifeMetrics {
    let birth = profile.birthdate.and_time(NaiveTime::MIN).and_utc();
    let days_lived = (now - birth).num_days().max(0) as u64;
    let days = days_lived as f64;
    let age_years = days / cosmos::DAYS_PER_YEAR;

    let heart_rate = resting_heart_rate(profile.activity_level);
    let daily_walk_km = daily_walking_distance(profile.activity_level);

    let bmr = BmrEstimate::from_profile(profile, age_years);
    let basal_rate = bmr.basal_rate();
    let daily_calories = bmr.daily_expenditure(profile.activity_level);

    trace!(
        days_lived,
        age_years,
        basal_rate,
        activity = %profile.activity_level,
        "computed engine intermediates"
    );

    LifeMetrics {
        days_lived,
        breaths_taken: days_lived * physiology::BREATHS_PER_DAY,
        hours_slept: (days * physiology::SLEEP_HOURS_PER_DAY).floor() as u64,
        meals_consumed: days_lived * physiology::MEALS_PER_DAY,
        heartbeats: days_lived * physiology::MINUTES_PER_DAY * heart_rate,
        distance_walked_km: days_lived * daily_walk_km,
        calories_burned: (days * daily_calories).floor().max(0.0) as u64,
        basal_metabolic_rate: basal_rate,
        daily_calories,
        trees_for_oxygen: round_two_decimals(age_years * physiology::TREES_PER_YEAR),
        galactic_distance_km: days_lived * cosmos::SECONDS_PER_DAY * cosmos::GALACTIC_SPEED_KM_PER_SEC,
        moon_orbits: days / cosmos::MOON_ORBITAL_PERIOD_DAYS,
    }
}

/// Resting heart rate in bpm for an activity level
///
/// Trained people sit lower at rest; sedentary people higher.
#[must_use]
pub const fn resting_heart_rate(activity: ActivityLevel) -> u64 {
    match activity {
        ActivityLevel::Active => physiology::HEART_RATE_ACTIVE,
        ActivityLevel::Moderate => physiology::HEART_RATE_MODERATE,
        ActivityLevel::Sedentary => physiology::HEART_RATE_SEDENTARY,
    }
}

/// Estimated daily walking distance in km for an activity level
#[must_use]
pub const fn daily_walking_distance(activity: ActivityLevel) -> u64 {
    match activity {
        ActivityLevel::Active => physiology::WALK_KM_ACTIVE,
        ActivityLevel::Moderate => physiology::WALK_KM_MODERATE,
        ActivityLevel::Sedentary => physiology::WALK_KM_SEDENTARY,
    }
}

fn round_two_decimals(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
