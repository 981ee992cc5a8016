// ABOUTME: Chart dataset generation for the life-hours distribution and carbon trend
// ABOUTME: Bucket allocation with exact-sum remainder and stepped cumulative sampling
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Solstice Life Stats

//! # Chart Data Generator
//!
//! Two pure generators over the day count:
//!
//! - [`generate_life_distribution`]: five fixed-proportion buckets of lifetime
//!   hours. Four buckets floor-truncate their share; the `Other` bucket takes
//!   the remainder so the five values always sum exactly to the lifetime
//!   hours, including at zero.
//! - [`generate_carbon_trend`]: cumulative CO2e tonnes sampled over age in
//!   roughly five steps, with a reduced consumption multiplier below
//!   adulthood. If the stepped walk does not land on the current age, a final
//!   corrective point is appended from a flat-rate estimate computed
//!   independently of the running total. The two formulas can disagree at the
//!   seam; that discontinuity is part of the product's charted behavior and is
//!   kept.

use solstice_core::constants::{charts, cosmos};
use solstice_core::models::{ChartDataset, ChartPoint, Diet};

/// Display palette for the life-distribution buckets, in bucket order
mod palette {
    pub const SLEEPING: &str = "#587E76";
    pub const WORK_SCHOOL: &str = "#2D4F4A";
    pub const SCREENS: &str = "#84C69B";
    pub const EATING: &str = "#A9B4B2";
    pub const OTHER: &str = "#DCE5E3";
}

/// Allocate lifetime hours across the five life-distribution buckets
///
/// Bucket order is stable: Sleeping, Work/School, Digital/Screens, Eating,
/// Other. The first four floor their proportional share of
/// `days_lived * 24`; Other receives whatever remains, so the dataset sums
/// exactly to the lifetime hours for any `days_lived >= 0`.
#[must_use]
pub fn generate_life_distribution(days_lived: u64) -> ChartDataset {
    let hours_lived = days_lived * 24;
    let hours = hours_lived as f64;

    let sleeping = (hours * charts::SHARE_SLEEPING).floor() as u64;
    let work_school = (hours * charts::SHARE_WORK_SCHOOL).floor() as u64;
    let screens = (hours * charts::SHARE_SCREENS).floor() as u64;
    let eating = (hours * charts::SHARE_EATING).floor() as u64;
    let other = hours_lived - (sleeping + work_school + screens + eating);

    vec![
        ChartPoint::with_color("Sleeping", sleeping as f64, palette::SLEEPING),
        ChartPoint::with_color("Work/School", work_school as f64, palette::WORK_SCHOOL),
        ChartPoint::with_color("Digital/Screens", screens as f64, palette::SCREENS),
        ChartPoint::with_color("Eating", eating as f64, palette::EATING),
        ChartPoint::with_color("Other", other as f64, palette::OTHER),
    ]
}

/// Annual emission multiplier for a diet, applied once to the baseline
#[must_use]
pub const fn carbon_multiplier(diet: Diet) -> f64 {
    match diet {
        Diet::Vegan => charts::CARBON_MULTIPLIER_VEGAN,
        Diet::Vegetarian => charts::CARBON_MULTIPLIER_VEGETARIAN,
        Diet::Omnivore => charts::CARBON_MULTIPLIER_OMNIVORE,
    }
}

/// Sample the cumulative carbon emission trend by age
///
/// Walks ages `0..=age` in steps of `max(1, age / 5)`, accumulating
/// `annual x step x life_stage` per sample, where the life stage multiplier
/// is 0.6 below age 18 (taken at the start of each step) and 1.0 from
/// adulthood. Labels are strictly increasing ages; values are non-decreasing.
/// The step size floor of 1 keeps the walk well-defined at age zero.
#[must_use]
pub fn generate_carbon_trend(days_lived: u64, diet: Diet) -> ChartDataset {
    let annual_emission = charts::BASE_ANNUAL_CARBON_TONNES * carbon_multiplier(diet);

    let age_years = days_lived as f64 / cosmos::DAYS_PER_YEAR;
    let age = age_years.floor() as u32;
    let step_size = (age / charts::CARBON_TREND_TARGET_POINTS).max(1);

    let mut points: ChartDataset = Vec::new();
    let mut cumulative = 0.0_f64;

    let mut i = 0_u32;
    while i <= age {
        let life_stage = if i < charts::ADULTHOOD_AGE {
            charts::LIFE_STAGE_CHILD_MULTIPLIER
        } else {
            1.0
        };
        cumulative += annual_emission * f64::from(step_size) * life_stage;
        points.push(ChartPoint::new(format!("Age {i}"), cumulative.round()));
        i += step_size;
    }

    // The stepped walk can overshoot past the true age without sampling it;
    // the closing point is then a fresh flat-rate estimate, not the running
    // total.
    let final_label = format!("Age {age}");
    if points.last().is_some_and(|p| p.label != final_label) {
        points.push(ChartPoint::new(
            final_label,
            (age_years * annual_emission).round(),
        ));
    }

    points
}
