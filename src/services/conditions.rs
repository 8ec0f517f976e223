// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Trail-condition classification from community reports.
//!
//! Severity is bucketed by how many recent `trail_condition` tips fall
//! inside the search radius, not by what the tips say. The text is only
//! scanned for concern keywords.

use crate::models::{CommunityTip, Coordinate, TipCategory, TrailConditionSummary, TrailSeverity};
use crate::services::geo_filter::filter_nearby;
use std::collections::HashSet;

const MS_PER_DAY: i64 = 24 * 60 * 60 * 1000;

/// Keywords searched for in tip text, in reporting order.
pub const CONCERN_KEYWORDS: [&str; 12] = [
    "mud",
    "snow",
    "washout",
    "flooded",
    "stuck",
    "ice",
    "slippery",
    "blocked",
    "impassable",
    "damage",
    "hazard",
    "dangerous",
];

/// Recency window and report-count cutoffs for trail severity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RiskThresholds {
    /// Reports older than this many days are ignored
    pub recent_window_days: u32,
    /// Minimum report count for `moderate`
    pub moderate_min: u32,
    /// Minimum report count for `high`
    pub high_min: u32,
    /// Minimum report count for `severe`
    pub severe_min: u32,
}

impl Default for RiskThresholds {
    fn default() -> Self {
        Self {
            recent_window_days: 7,
            moderate_min: 1,
            high_min: 3,
            severe_min: 5,
        }
    }
}

impl RiskThresholds {
    /// Cutoffs must be strictly increasing and start above zero.
    pub fn is_consistent(&self) -> bool {
        self.moderate_min > 0
            && self.moderate_min < self.high_min
            && self.high_min < self.severe_min
    }

    pub fn window_ms(&self) -> i64 {
        i64::from(self.recent_window_days) * MS_PER_DAY
    }

    /// Severity for a number of recent reports.
    pub fn severity_for_count(&self, count: usize) -> TrailSeverity {
        let count = u32::try_from(count).unwrap_or(u32::MAX);
        if count >= self.severe_min {
            TrailSeverity::Severe
        } else if count >= self.high_min {
            TrailSeverity::High
        } else if count >= self.moderate_min {
            TrailSeverity::Moderate
        } else {
            TrailSeverity::Low
        }
    }
}

/// Classifies trail conditions around a point.
#[derive(Debug, Clone, Copy, Default)]
pub struct ConditionClassifier {
    thresholds: RiskThresholds,
}

impl ConditionClassifier {
    pub fn new(thresholds: RiskThresholds) -> Self {
        Self { thresholds }
    }

    /// Summarize recent trail-condition reports within `radius_miles`.
    ///
    /// `now_ms` is the reference time for the recency window, in epoch
    /// milliseconds.
    pub fn analyze(
        &self,
        tips: &[CommunityTip],
        origin: Coordinate,
        radius_miles: f64,
        now_ms: i64,
    ) -> TrailConditionSummary {
        let cutoff = now_ms.saturating_sub(self.thresholds.window_ms());

        let recent_tips: Vec<CommunityTip> = filter_nearby(tips, origin, radius_miles)
            .into_iter()
            .filter(|tip| tip.category == TipCategory::TrailCondition)
            .filter(|tip| tip.timestamp > cutoff)
            .collect();

        let severity = self.thresholds.severity_for_count(recent_tips.len());
        let primary_concerns = extract_concerns(&recent_tips);

        let areas: HashSet<(i64, i64)> = recent_tips
            .iter()
            .filter_map(|tip| tip.location.map(|loc| loc.area_key()))
            .collect();
        let affected_areas = u32::try_from(areas.len()).unwrap_or(u32::MAX);

        tracing::debug!(
            nearby_recent = recent_tips.len(),
            severity = ?severity,
            concerns = ?primary_concerns,
            affected_areas,
            "Classified trail conditions"
        );

        TrailConditionSummary {
            recent_tips,
            severity,
            primary_concerns,
            affected_areas,
        }
    }
}

/// Classify with the default window and cutoffs.
pub fn analyze_trail_conditions(
    tips: &[CommunityTip],
    origin: Coordinate,
    radius_miles: f64,
    now_ms: i64,
) -> TrailConditionSummary {
    ConditionClassifier::default().analyze(tips, origin, radius_miles, now_ms)
}

/// Concern keywords found in the tips, first occurrence only.
fn extract_concerns(tips: &[CommunityTip]) -> Vec<String> {
    let mut concerns: Vec<String> = Vec::new();

    for tip in tips {
        let text = tip.search_text();
        for keyword in CONCERN_KEYWORDS {
            if text.contains(keyword) && !concerns.iter().any(|c| c == keyword) {
                concerns.push(keyword.to_string());
            }
        }
    }

    concerns
}
