// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Weather snapshot model.

use serde::{Deserialize, Serialize};
#[cfg(feature = "binding-generation")]
use ts_rs::TS;

/// Current weather at a location.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "mobile/src/generated/")
)]
pub struct WeatherCondition {
    /// Short condition label (e.g., "Rain", "Clear")
    pub condition: String,
    /// Degrees Fahrenheit
    pub temperature: f64,
    /// Miles per hour
    pub wind_speed: f64,
    pub description: String,
}

impl WeatherCondition {
    /// Lower-cased condition and description joined by a space.
    pub(crate) fn search_text(&self) -> String {
        format!("{} {}", self.condition, self.description).to_lowercase()
    }
}
