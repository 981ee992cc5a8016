// ABOUTME: Geolocation position type and the client-side failure taxonomy
// ABOUTME: Maps each failure case to its canonical user-facing message
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Solstice Life Stats

use serde::{Deserialize, Serialize};
use std::fmt;

/// A resolved geographic position
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPosition {
    /// Latitude in degrees
    pub latitude: f64,
    /// Longitude in degrees
    pub longitude: f64,
}

impl GeoPosition {
    /// Whether the coordinates are within valid WGS84 bounds
    #[must_use]
    pub fn is_valid(&self) -> bool {
        (-90.0..=90.0).contains(&self.latitude) && (-180.0..=180.0).contains(&self.longitude)
    }
}

/// Why the runtime environment failed to yield a position
///
/// The environment acquiring the position (a browser, a mobile shell) reports
/// one of these instead of coordinates; the service answers with the matching
/// session-level error message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GeoError {
    /// The environment has no geolocation capability
    NotSupported,
    /// The user declined the location permission
    PermissionDenied,
    /// The position could not be determined
    PositionUnavailable,
}

impl GeoError {
    /// Canonical user-facing message for this failure
    #[must_use]
    pub const fn user_message(&self) -> &'static str {
        match self {
            Self::NotSupported => "Geolocation is not supported in this environment.",
            Self::PermissionDenied => {
                "Unable to retrieve your location. Please grant permission to access your location."
            }
            Self::PositionUnavailable => {
                "Could not determine your position. Please try again in a moment."
            }
        }
    }
}

impl fmt::Display for GeoError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.user_message())
    }
}
