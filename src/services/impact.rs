// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Weather and trail impact assessment.
//!
//! The overall rating is the worse of the two signals: a severe trail
//! report is never softened by clear skies, and a storm is never softened
//! by a quiet trail.

use crate::models::{ImpactAssessment, ImpactSeverity, TrailConditionSummary, WeatherCondition};

/// Sustained wind (mph) treated as high wind.
const HIGH_WIND_MPH: f64 = 25.0;
/// Sustained wind (mph) that raises weather severity to moderate.
const BREEZY_WIND_MPH: f64 = 15.0;
/// Fahrenheit freezing point.
const FREEZING_F: f64 = 32.0;

/// Rate a weather snapshot on its own. Missing weather rates `Low`.
pub fn classify_weather(weather: Option<&WeatherCondition>) -> ImpactSeverity {
    let Some(weather) = weather else {
        return ImpactSeverity::Low;
    };

    let text = weather.search_text();
    let condition = weather.condition.to_lowercase();

    if text.contains("severe") || text.contains("storm") {
        ImpactSeverity::Critical
    } else if condition.contains("rain")
        || condition.contains("snow")
        || weather.wind_speed > HIGH_WIND_MPH
    {
        ImpactSeverity::High
    } else if weather.temperature < FREEZING_F || weather.wind_speed > BREEZY_WIND_MPH {
        ImpactSeverity::Moderate
    } else {
        ImpactSeverity::Low
    }
}

/// Risk factors contributed by the weather, in fixed check order.
fn weather_risk_factors(weather: &WeatherCondition) -> Vec<String> {
    let text = weather.search_text();
    let mut factors = Vec::new();

    if text.contains("rain") {
        factors.push("Rain creates mud and slippery trail conditions".to_string());
    }
    if text.contains("snow") {
        factors.push("Snow creates ice and visibility hazards".to_string());
    }
    if text.contains("storm") {
        factors.push("Storms bring flash flood and lightning risk".to_string());
    }
    if weather.wind_speed > HIGH_WIND_MPH {
        factors.push("High winds can bring down branches and debris".to_string());
    }
    if weather.temperature < FREEZING_F {
        factors.push("Freezing temperatures create ice hazards".to_string());
    }

    factors
}

/// Risk factors contributed by community reports.
fn trail_risk_factors(conditions: &TrailConditionSummary) -> Vec<String> {
    let mut factors: Vec<String> = conditions
        .primary_concerns
        .iter()
        .map(|concern| format!("Trail reports indicate {} conditions", concern))
        .collect();

    match conditions.affected_areas {
        0 => {}
        1 => factors.push("1 area with reported issues".to_string()),
        n => factors.push(format!("{} areas with reported issues", n)),
    }

    factors
}

/// Fuse weather and trail conditions into a single assessment.
pub fn calculate_impact_assessment(
    weather: Option<&WeatherCondition>,
    conditions: &TrailConditionSummary,
) -> ImpactAssessment {
    let weather_severity = classify_weather(weather);
    let overall_severity = ImpactSeverity::from_ordinal(
        conditions
            .severity
            .ordinal()
            .max(weather_severity.ordinal()),
    );

    let mut risk_factors = weather.map(weather_risk_factors).unwrap_or_default();
    risk_factors.extend(trail_risk_factors(conditions));

    tracing::debug!(
        trail = ?conditions.severity,
        weather = ?weather_severity,
        overall = ?overall_severity,
        factors = risk_factors.len(),
        "Computed impact assessment"
    );

    ImpactAssessment {
        overall_severity,
        risk_factors,
        recommendations: overall_severity
            .recommendations()
            .iter()
            .map(|r| r.to_string())
            .collect(),
        color: overall_severity.color().to_string(),
    }
}
