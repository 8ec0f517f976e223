// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Community tip model.

use crate::models::Coordinate;
use serde::{Deserialize, Serialize};
#[cfg(feature = "binding-generation")]
use ts_rs::TS;
use validator::Validate;

/// What a tip is about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "mobile/src/generated/")
)]
pub enum TipCategory {
    Recovery,
    Navigation,
    TrailCondition,
    Maintenance,
    Safety,
}

/// Who submitted a tip.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "mobile/src/generated/")
)]
pub struct TipAuthor {
    #[validate(length(min = 1, max = 60))]
    pub name: String,
    #[validate(length(max = 60))]
    pub vehicle_type: String,
}

/// A user-submitted report.
///
/// Only `helpful` changes after creation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "mobile/src/generated/")
)]
pub struct CommunityTip {
    pub id: String,
    pub title: String,
    pub description: String,
    pub category: TipCategory,
    /// Creation time, milliseconds since the Unix epoch
    #[cfg_attr(feature = "binding-generation", ts(type = "number"))]
    pub timestamp: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<Coordinate>,
    pub author: TipAuthor,
    #[serde(default)]
    pub helpful: u32,
    /// Recommended speed through the section (mph)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub suggested_speed: Option<f64>,
}

impl CommunityTip {
    /// Build a stored tip from a validated submission.
    pub fn from_submission(id: String, timestamp: i64, new_tip: NewTip) -> Self {
        Self {
            id,
            title: new_tip.title,
            description: new_tip.description,
            category: new_tip.category,
            timestamp,
            location: new_tip.location,
            author: new_tip.author,
            helpful: 0,
            suggested_speed: new_tip.suggested_speed,
        }
    }

    /// Lower-cased title and description, as searched for concern keywords.
    pub fn search_text(&self) -> String {
        format!("{} {}", self.title, self.description).to_lowercase()
    }
}

/// Tip submission body. The server assigns id, timestamp and helpful count.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct NewTip {
    #[validate(length(min = 1, max = 120))]
    pub title: String,
    #[serde(default)]
    #[validate(length(max = 2000))]
    pub description: String,
    pub category: TipCategory,
    #[validate(nested)]
    pub location: Option<Coordinate>,
    #[validate(nested)]
    pub author: TipAuthor,
    #[validate(range(min = 0.0, max = 200.0))]
    pub suggested_speed: Option<f64>,
}
