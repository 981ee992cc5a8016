// ABOUTME: Domain constants for life metrics, cosmology, and chart generation
// ABOUTME: Single source of truth for the closed-form derivation coefficients
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Solstice Life Stats

//! Application-wide constants organized by domain.
//!
//! Every coefficient used by the metrics engine and the chart generator lives
//! here so that derivations stay consistent between computation and tests.

/// Average-day physiology coefficients
pub mod physiology {
    /// Breaths taken per day at an average 16 breaths/minute
    pub const BREATHS_PER_DAY: u64 = 23_040;

    /// Average hours slept per day
    pub const SLEEP_HOURS_PER_DAY: f64 = 7.5;

    /// Meals consumed per day
    pub const MEALS_PER_DAY: u64 = 3;

    /// Minutes per day, for heartbeat accumulation
    pub const MINUTES_PER_DAY: u64 = 1_440;

    /// Resting heart rate (bpm) for an active lifestyle
    pub const HEART_RATE_ACTIVE: u64 = 60;

    /// Resting heart rate (bpm) for a moderate lifestyle
    pub const HEART_RATE_MODERATE: u64 = 75;

    /// Resting heart rate (bpm) for a sedentary lifestyle
    pub const HEART_RATE_SEDENTARY: u64 = 80;

    /// Daily walking distance (km) for an active lifestyle
    pub const WALK_KM_ACTIVE: u64 = 10;

    /// Daily walking distance (km) for a moderate lifestyle
    pub const WALK_KM_MODERATE: u64 = 6;

    /// Daily walking distance (km) for a sedentary lifestyle
    pub const WALK_KM_SEDENTARY: u64 = 3;

    /// Trees required per year of breathing, for the oxygen-offset estimate
    pub const TREES_PER_YEAR: f64 = 0.4;
}

/// Astronomical coefficients
pub mod cosmos {
    /// Seconds per day
    pub const SECONDS_PER_DAY: u64 = 86_400;

    /// Orbital speed of the solar system around the galactic center (km/s)
    pub const GALACTIC_SPEED_KM_PER_SEC: u64 = 220;

    /// Lunar sidereal period in days
    pub const MOON_ORBITAL_PERIOD_DAYS: f64 = 27.32;

    /// Mean days per year, Julian calendar
    pub const DAYS_PER_YEAR: f64 = 365.25;
}

/// Chart generation coefficients
pub mod charts {
    /// Fraction of lifetime hours spent sleeping
    pub const SHARE_SLEEPING: f64 = 0.33;

    /// Fraction of lifetime hours spent at work or school
    pub const SHARE_WORK_SCHOOL: f64 = 0.25;

    /// Fraction of lifetime hours spent on screens
    pub const SHARE_SCREENS: f64 = 0.20;

    /// Fraction of lifetime hours spent eating
    pub const SHARE_EATING: f64 = 0.08;

    /// Baseline annual carbon emission (tonnes CO2e/year)
    pub const BASE_ANNUAL_CARBON_TONNES: f64 = 4.5;

    /// Carbon multiplier for a vegan diet
    pub const CARBON_MULTIPLIER_VEGAN: f64 = 0.5;

    /// Carbon multiplier for a vegetarian diet
    pub const CARBON_MULTIPLIER_VEGETARIAN: f64 = 0.7;

    /// Carbon multiplier for a meat-heavy omnivore diet
    pub const CARBON_MULTIPLIER_OMNIVORE: f64 = 1.2;

    /// Consumption multiplier applied to ages below the adulthood threshold
    pub const LIFE_STAGE_CHILD_MULTIPLIER: f64 = 0.6;

    /// Age at which the life-stage multiplier switches to adult consumption
    pub const ADULTHOOD_AGE: u32 = 18;

    /// Target number of samples on the carbon trend
    pub const CARBON_TREND_TARGET_POINTS: u32 = 5;
}

/// Basal metabolic rate coefficients (Mifflin-St Jeor)
pub mod bmr {
    /// Weight coefficient (kcal per kg)
    pub const WEIGHT_COEFFICIENT: f64 = 10.0;

    /// Height coefficient (kcal per cm)
    pub const HEIGHT_COEFFICIENT: f64 = 6.25;

    /// Age coefficient (kcal per year)
    pub const AGE_COEFFICIENT: f64 = 5.0;

    /// Additive offset for male profiles
    pub const MALE_OFFSET: f64 = 5.0;

    /// Additive offset for female profiles (also applied to `other`)
    pub const FEMALE_OFFSET: f64 = -161.0;

    /// Activity multiplier for a sedentary lifestyle
    pub const MULTIPLIER_SEDENTARY: f64 = 1.2;

    /// Activity multiplier for a moderate lifestyle
    pub const MULTIPLIER_MODERATE: f64 = 1.55;

    /// Activity multiplier for an active lifestyle
    pub const MULTIPLIER_ACTIVE: f64 = 1.9;
}
