// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Severity scales and the derived risk records.

use crate::models::{CommunityTip, Coordinate, WeatherCondition};
use serde::{Deserialize, Serialize};
#[cfg(feature = "binding-generation")]
use ts_rs::TS;

/// Severity of trail conditions derived from community reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "mobile/src/generated/")
)]
pub enum TrailSeverity {
    Low,
    Moderate,
    High,
    Severe,
}

impl TrailSeverity {
    pub fn ordinal(self) -> u8 {
        match self {
            TrailSeverity::Low => 0,
            TrailSeverity::Moderate => 1,
            TrailSeverity::High => 2,
            TrailSeverity::Severe => 3,
        }
    }
}

/// Overall severity of a trip, and the scale weather is rated on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "mobile/src/generated/")
)]
pub enum ImpactSeverity {
    Low,
    Moderate,
    High,
    Critical,
}

impl ImpactSeverity {
    pub fn ordinal(self) -> u8 {
        match self {
            ImpactSeverity::Low => 0,
            ImpactSeverity::Moderate => 1,
            ImpactSeverity::High => 2,
            ImpactSeverity::Critical => 3,
        }
    }

    /// Map an ordinal back onto the scale. Values above 3 saturate at `Critical`.
    pub fn from_ordinal(ordinal: u8) -> Self {
        match ordinal {
            0 => ImpactSeverity::Low,
            1 => ImpactSeverity::Moderate,
            2 => ImpactSeverity::High,
            _ => ImpactSeverity::Critical,
        }
    }

    /// Banner color shown for this severity.
    pub fn color(self) -> &'static str {
        match self {
            ImpactSeverity::Low => "#2E7D32",
            ImpactSeverity::Moderate => "#FBC02D",
            ImpactSeverity::High => "#FF6B35",
            ImpactSeverity::Critical => "#D32F2F",
        }
    }

    pub fn recommendations(self) -> [&'static str; 2] {
        match self {
            ImpactSeverity::Low => ["Stay alert", "Basic recovery gear recommended"],
            ImpactSeverity::Moderate => ["Carry recovery gear", "Check tire pressure"],
            ImpactSeverity::High => ["Travel in groups", "Advanced recovery equipment required"],
            ImpactSeverity::Critical => ["Consider delaying trip", "Expert recovery skills needed"],
        }
    }
}

/// Recent trail-condition reports around a point.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "mobile/src/generated/")
)]
pub struct TrailConditionSummary {
    /// Qualifying reports, closest first
    #[serde(default)]
    pub recent_tips: Vec<CommunityTip>,
    pub severity: TrailSeverity,
    /// Concern keywords in first-seen order, no duplicates
    #[serde(default)]
    pub primary_concerns: Vec<String>,
    /// Distinct ~111m cells with reports
    #[serde(default)]
    pub affected_areas: u32,
}

/// Fused weather and trail risk rating.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "mobile/src/generated/")
)]
pub struct ImpactAssessment {
    pub overall_severity: ImpactSeverity,
    pub risk_factors: Vec<String>,
    pub recommendations: Vec<String>,
    /// Hex color for the severity banner
    pub color: String,
}

/// A tip together with its great-circle distance from the query origin.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "mobile/src/generated/")
)]
pub struct NearbyTip {
    pub tip: CommunityTip,
    pub distance_miles: f64,
}

/// Where the weather in a report came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "mobile/src/generated/")
)]
pub enum WeatherStatus {
    Fresh,
    Stale,
    Unavailable,
}

/// Everything the trail screen renders for one location.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "mobile/src/generated/")
)]
pub struct RiskReport {
    pub origin: Coordinate,
    pub radius_miles: f64,
    pub conditions: TrailConditionSummary,
    pub assessment: ImpactAssessment,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weather: Option<WeatherCondition>,
    pub weather_status: WeatherStatus,
    /// RFC3339 time the report was built
    pub generated_at: String,
}
