// ABOUTME: Prompt builders and response schemas for the narrative producers
// ABOUTME: Centralizes every string sent to the LLM so wording changes stay in one place
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Solstice Life Stats

//! Prompt builders for the enrichment producers and the chat assistant.

use chrono::NaiveDate;
use serde_json::json;

use solstice_core::models::{Diet, LifeMetrics, UserProfile};

/// Prompt for the world-changes summary, grounded against web search
#[must_use]
pub fn world_changes(birth_year: i32) -> String {
    format!(
        "Provide a concise summary of the most significant global environmental, \
         technological, and cultural changes that have occurred since the year \
         {birth_year}. Focus on events that have reshaped the world."
    )
}

/// Prompt for the environmental-impact fact pair
#[must_use]
pub fn environmental_impact(country: &str, age_years: f64, diet: Diet) -> String {
    let age = age_years.floor() as i64;
    format!(
        "Based on an average person living in {country} who identifies as {diet}, \
         provide some thought-provoking estimated statistics for someone who is \
         {age} years old. Return a JSON object with two keys: \"carbonFootprint\" \
         and \"waterConsumption\". For \"carbonFootprint\", provide a string \
         estimating their cumulative carbon footprint in tonnes of CO2 equivalent, \
         factoring in their {diet} diet compared to the average. For \
         \"waterConsumption\", provide a string estimating their total water \
         consumption in liters. Present these as interesting, self-contained facts. \
         For example: \"Over your lifetime, your estimated water consumption is X \
         liters, equivalent to filling Y Olympic swimming pools.\""
    )
}

/// Response schema for the environmental-impact producer
#[must_use]
pub fn environmental_impact_schema() -> serde_json::Value {
    json!({
        "type": "OBJECT",
        "properties": {
            "carbonFootprint": { "type": "STRING" },
            "waterConsumption": { "type": "STRING" },
        },
        "required": ["carbonFootprint", "waterConsumption"],
    })
}

/// Prompt for the fun-facts list
#[must_use]
pub fn fun_facts(age_years: f64, country: &str) -> String {
    let age = age_years.floor() as i64;
    format!(
        "Generate 3 fun, quirky, and surprising personalized statistics for a \
         {age} year old living in {country}. Think about things like: skin shed, \
         hair grown, time spent blinking, time spent waiting in line, or gallons \
         of sweat produced. Return ONLY a JSON array of objects with keys: \
         \"label\" (short title, max 4 words), \"value\" (the statistic text), \
         \"icon\" (strictly one of these strings: 'walk', 'clock', 'water', \
         'growth', 'moon', 'star')."
    )
}

/// Response schema for the fun-facts producer
#[must_use]
pub fn fun_facts_schema() -> serde_json::Value {
    json!({
        "type": "ARRAY",
        "items": {
            "type": "OBJECT",
            "properties": {
                "label": { "type": "STRING" },
                "value": { "type": "STRING" },
                "icon": {
                    "type": "STRING",
                    "enum": ["walk", "clock", "water", "growth", "moon", "star"],
                },
            },
            "required": ["label", "value", "icon"],
        },
    })
}

/// Prompt for the cosmic-perspective reflection
#[must_use]
pub fn cosmic_perspective(birthdate: NaiveDate) -> String {
    let formatted = birthdate.format("%B %-d, %Y");
    format!(
        "Write a short, inspiring, and cosmic perspective for someone born on \
         {formatted}. Mention the distance they have traveled through space on \
         Earth orbiting the sun (assume Earth's orbital speed is about 67,000 mph \
         or 107,000 km/h), and offer a reflection on their unique journey in the \
         universe. The tone should be awe-inspiring and reflective. Do not format \
         with markdown. Just return the text."
    )
}

/// Prompt for the nearby environmental sites lookup, grounded against maps
#[must_use]
pub fn nearby_sites() -> String {
    "Show me some significant environmental conservation projects, national parks, \
     or renewable energy installations near my current location that a person \
     could potentially visit or see. Provide a brief, engaging description for each."
        .to_owned()
}

/// System prompt priming the chat assistant with the user's computed report
#[must_use]
pub fn chat_system(profile: &UserProfile, metrics: &LifeMetrics) -> String {
    let stats = serde_json::to_string(metrics).unwrap_or_default();
    format!(
        "This user was born on {} in {}. They have lived for {} days. Here are \
         some of their stats: {stats}. Your name is Astro. Be a helpful and \
         insightful assistant.",
        profile.birthdate, profile.country, metrics.days_lived
    )
}
