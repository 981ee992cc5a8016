// ABOUTME: Mifflin-St Jeor basal metabolic rate estimation with activity multipliers
// ABOUTME: Infallible over pre-validated profiles; the engine assumes positive measurements
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Solstice Life Stats

use serde::{Deserialize, Serialize};

use solstice_core::constants::bmr;
use solstice_core::models::{ActivityLevel, Gender, UserProfile};

/// Basal metabolic rate estimate (Mifflin-St Jeor)
///
/// Formula: `BMR = 10 x weight_kg + 6.25 x height_cm - 5 x age_years + offset`
///
/// where `offset` is +5 for male profiles and -161 otherwise. Female and
/// `other` genders deliberately share the same offset; the product formula
/// defines only two branches and this is preserved as-is.
///
/// # Scientific References
///
/// - Mifflin, M.D., St Jeor, S.T., et al. (1990). "A new predictive equation
///   for resting energy expenditure in healthy individuals." *The American
///   Journal of Clinical Nutrition*, 51(2), 241-247.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BmrEstimate {
    /// Body weight in kilograms
    pub weight_kg: f64,
    /// Height in centimeters
    pub height_cm: f64,
    /// Age in fractional years
    pub age_years: f64,
    /// Gender selection for the additive offset
    pub gender: Gender,
}

impl BmrEstimate {
    /// Build an estimate from a validated profile and a precomputed age
    ///
    /// The profile is assumed to have passed `UserProfile::validate`, so the
    /// measurements are positive and the age is non-negative.
    #[must_use]
    pub const fn from_profile(profile: &UserProfile, age_years: f64) -> Self {
        Self {
            weight_kg: profile.weight_kg,
            height_cm: profile.height_cm,
            age_years,
            gender: profile.gender,
        }
    }

    /// Resting basal metabolic rate in kcal/day
    #[must_use]
    pub fn basal_rate(&self) -> f64 {
        let offset = match self.gender {
            Gender::Male => bmr::MALE_OFFSET,
            Gender::Female | Gender::Other => bmr::FEMALE_OFFSET,
        };

        bmr::WEIGHT_COEFFICIENT.mul_add(
            self.weight_kg,
            bmr::HEIGHT_COEFFICIENT.mul_add(
                self.height_cm,
                (-bmr::AGE_COEFFICIENT).mul_add(self.age_years, offset),
            ),
        )
    }

    /// Daily energy expenditure in kcal/day for an activity level
    #[must_use]
    pub fn daily_expenditure(&self, activity: ActivityLevel) -> f64 {
        self.basal_rate() * Self::activity_multiplier(activity)
    }

    /// Activity multiplier applied to the basal rate
    #[must_use]
    pub const fn activity_multiplier(activity: ActivityLevel) -> f64 {
        match activity {
            ActivityLevel::Sedentary => bmr::MULTIPLIER_SEDENTARY,
            ActivityLevel::Moderate => bmr::MULTIPLIER_MODERATE,
            ActivityLevel::Active => bmr::MULTIPLIER_ACTIVE,
        }
    }

    /// Algorithm name
    #[must_use]
    pub const fn name() -> &'static str {
        "mifflin_st_jeor"
    }

    /// The formula as a string
    #[must_use]
    pub const fn formula() -> &'static str {
        "BMR = 10 x weight_kg + 6.25 x height_cm - 5 x age_years + gender_offset"
    }
}
