// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Risk report assembly.
//!
//! Runs the full pipeline for one location:
//! 1. Radius filter the tips
//! 2. Classify recent trail-condition reports
//! 3. Fuse with the weather into an impact assessment

use crate::models::{CommunityTip, Coordinate, RiskReport, WeatherStatus};
use crate::services::conditions::{ConditionClassifier, RiskThresholds};
use crate::services::impact::calculate_impact_assessment;
use crate::services::weather::{WeatherError, WeatherLookup};
use crate::time_utils::format_utc_rfc3339;
use chrono::{DateTime, Utc};

/// Builds risk reports from already-fetched inputs.
#[derive(Debug, Clone, Copy, Default)]
pub struct RiskService {
    classifier: ConditionClassifier,
}

impl RiskService {
    pub fn new(thresholds: RiskThresholds) -> Self {
        Self {
            classifier: ConditionClassifier::new(thresholds),
        }
    }

    pub fn classifier(&self) -> &ConditionClassifier {
        &self.classifier
    }

    /// Build the report for `origin`.
    ///
    /// A failed weather lookup is not an error here: the report is driven
    /// by trail reports alone and marked `unavailable`.
    pub fn build_report(
        &self,
        tips: &[CommunityTip],
        origin: Coordinate,
        radius_miles: f64,
        weather: Result<WeatherLookup, WeatherError>,
        now: DateTime<Utc>,
    ) -> RiskReport {
        let (weather, weather_status) = match weather {
            Ok(WeatherLookup::Fresh(w)) => (Some(w), WeatherStatus::Fresh),
            Ok(WeatherLookup::Stale(w)) => (Some(w), WeatherStatus::Stale),
            Err(e) => {
                tracing::warn!(error = %e, "Weather unavailable, assessing trail reports only");
                (None, WeatherStatus::Unavailable)
            }
        };

        let conditions =
            self.classifier
                .analyze(tips, origin, radius_miles, now.timestamp_millis());
        let assessment = calculate_impact_assessment(weather.as_ref(), &conditions);

        tracing::info!(
            latitude = origin.latitude,
            longitude = origin.longitude,
            radius_miles,
            overall = ?assessment.overall_severity,
            weather_status = ?weather_status,
            "Built risk report"
        );

        RiskReport {
            origin,
            radius_miles,
            conditions,
            assessment,
            weather,
            weather_status,
            generated_at: format_utc_rfc3339(now),
        }
    }
}
