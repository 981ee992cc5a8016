// ABOUTME: User profile input model with gender, activity level, and diet enums
// ABOUTME: Owns submission-time validation so the metrics engine can assume valid input
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Solstice Life Stats

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::errors::{AppError, AppResult};

/// Gender selection for the BMR estimate
///
/// `Other` shares the female offset in the Mifflin-St Jeor formula. This is a
/// deliberate simplification carried over from the product definition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    /// Male profile
    Male,
    /// Female profile
    Female,
    /// Any other identification
    Other,
}

impl Gender {
    /// String representation for prompts and logs
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Male => "male",
            Self::Female => "female",
            Self::Other => "other",
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Gender {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "male" => Ok(Self::Male),
            "female" => Ok(Self::Female),
            "other" => Ok(Self::Other),
            other => Err(AppError::invalid_input(format!(
                "Unknown gender: '{other}'. Valid options: male, female, other"
            ))),
        }
    }
}

/// Self-reported activity level
///
/// Drives the resting heart rate, daily walking distance, and the BMR
/// activity multiplier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ActivityLevel {
    /// Little to no regular exercise
    Sedentary,
    /// Exercise a few times per week
    Moderate,
    /// Daily training or physically demanding lifestyle
    Active,
}

impl ActivityLevel {
    /// String representation for prompts and logs
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Sedentary => "sedentary",
            Self::Moderate => "moderate",
            Self::Active => "active",
        }
    }
}

impl fmt::Display for ActivityLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ActivityLevel {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "sedentary" => Ok(Self::Sedentary),
            "moderate" => Ok(Self::Moderate),
            "active" => Ok(Self::Active),
            other => Err(AppError::invalid_input(format!(
                "Unknown activity level: '{other}'. Valid options: sedentary, moderate, active"
            ))),
        }
    }
}

/// Self-reported diet, used for the carbon trend and enrichment prompts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Diet {
    /// Meat-inclusive diet
    Omnivore,
    /// Vegetarian diet
    Vegetarian,
    /// Vegan diet
    Vegan,
}

impl Diet {
    /// String representation for prompts and logs
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Omnivore => "omnivore",
            Self::Vegetarian => "vegetarian",
            Self::Vegan => "vegan",
        }
    }
}

impl fmt::Display for Diet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Diet {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "omnivore" => Ok(Self::Omnivore),
            "vegetarian" => Ok(Self::Vegetarian),
            "vegan" => Ok(Self::Vegan),
            other => Err(AppError::invalid_input(format!(
                "Unknown diet: '{other}'. Valid options: omnivore, vegetarian, vegan"
            ))),
        }
    }
}

/// Biometric and lifestyle input, immutable once submitted
///
/// One active profile per session; a resubmission replaces the profile
/// wholesale. The `country` label feeds enrichment prompts only and is not
/// validated beyond being non-empty.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    /// Calendar date of birth; must not be in the future
    pub birthdate: NaiveDate,
    /// Country label for enrichment prompts
    pub country: String,
    /// Height in centimeters
    pub height_cm: f64,
    /// Weight in kilograms
    pub weight_kg: f64,
    /// Gender selection
    pub gender: Gender,
    /// Activity level
    pub activity_level: ActivityLevel,
    /// Diet
    pub diet: Diet,
}

impl UserProfile {
    /// Validate the profile against `now`
    ///
    /// Runs before the metrics engine is invoked, so the engine can assume a
    /// non-negative age and positive body measurements.
    ///
    /// # Errors
    ///
    /// Returns `AppError::InvalidInput` for a future birthdate or an empty
    /// country, and `AppError::ValueOutOfRange` for non-positive height or
    /// weight.
    pub fn validate(&self, now: DateTime<Utc>) -> AppResult<()> {
        if self.birthdate > now.date_naive() {
            return Err(AppError::invalid_input(format!(
                "Birthdate {} is in the future",
                self.birthdate
            )));
        }

        if self.country.trim().is_empty() {
            return Err(AppError::missing_field("country"));
        }

        if self.height_cm <= 0.0 || !self.height_cm.is_finite() {
            return Err(AppError::value_out_of_range(format!(
                "Height {} cm must be a positive number",
                self.height_cm
            )));
        }

        if self.weight_kg <= 0.0 || !self.weight_kg.is_finite() {
            return Err(AppError::value_out_of_range(format!(
                "Weight {} kg must be a positive number",
                self.weight_kg
            )));
        }

        Ok(())
    }

    /// Four-digit birth year, used by the world-changes enrichment prompt
    #[must_use]
    pub fn birth_year(&self) -> i32 {
        use chrono::Datelike;
        self.birthdate.year()
    }
}
