// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Data models for the application.

pub mod assessment;
pub mod coordinate;
pub mod tip;
pub mod weather;

pub use assessment::{
    ImpactAssessment, ImpactSeverity, NearbyTip, RiskReport, TrailConditionSummary,
    TrailSeverity, WeatherStatus,
};
pub use coordinate::Coordinate;
pub use tip::{CommunityTip, NewTip, TipAuthor, TipCategory};
pub use weather::WeatherCondition;
