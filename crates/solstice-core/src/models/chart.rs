// ABOUTME: Chart dataset types shared by the chart generator and the API surface
// ABOUTME: Ordered labeled points with an optional stable color tag
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Solstice Life Stats

use serde::{Deserialize, Serialize};

/// A single labeled point in a chart dataset
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartPoint {
    /// Display label ("Sleeping", "Age 20", ...)
    pub label: String,
    /// Non-negative value
    pub value: f64,
    /// Optional display color tag; stable identity, not semantics
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
}

impl ChartPoint {
    /// Create a point without a color tag
    #[must_use]
    pub fn new(label: impl Into<String>, value: f64) -> Self {
        Self {
            label: label.into(),
            value,
            color: None,
        }
    }

    /// Create a point with a color tag
    #[must_use]
    pub fn with_color(label: impl Into<String>, value: f64, color: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            value,
            color: Some(color.into()),
        }
    }
}

/// An ordered sequence of chart points
pub type ChartDataset = Vec<ChartPoint>;
