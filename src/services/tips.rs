// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Community tip storage.

use crate::models::CommunityTip;
use dashmap::DashMap;
use std::fs;
use std::path::Path;
use std::sync::Arc;

/// Backing store for community tips.
pub trait TipStore: Send + Sync {
    /// Every stored tip, in no particular order.
    fn all(&self) -> Result<Vec<CommunityTip>, StoreError>;

    fn get(&self, id: &str) -> Result<Option<CommunityTip>, StoreError>;

    /// Add a new tip. Fails if the id is taken.
    fn insert(&self, tip: CommunityTip) -> Result<(), StoreError>;

    /// Increment a tip's helpful count and return the updated tip.
    fn mark_helpful(&self, id: &str) -> Result<CommunityTip, StoreError>;
}

/// Shared handle used in application state.
pub type SharedTipStore = Arc<dyn TipStore>;

/// Process-local tip store.
#[derive(Default, Clone)]
pub struct InMemoryTipStore {
    tips: Arc<DashMap<String, CommunityTip>>,
}

impl InMemoryTipStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a store from a JSON snapshot file.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self, TipLoadError> {
        let json_data =
            fs::read_to_string(path.as_ref()).map_err(|e| TipLoadError::IoError(e.to_string()))?;
        Self::load_from_json(&json_data)
    }

    /// Seed a store from a JSON array of tips.
    ///
    /// Records that do not decode as tips are skipped.
    pub fn load_from_json(json_data: &str) -> Result<Self, TipLoadError> {
        let records: Vec<serde_json::Value> =
            serde_json::from_str(json_data).map_err(|e| TipLoadError::ParseError(e.to_string()))?;

        let store = Self::new();
        let mut skipped = 0usize;

        for (index, record) in records.into_iter().enumerate() {
            match serde_json::from_value::<CommunityTip>(record) {
                Ok(tip) => {
                    store.tips.insert(tip.id.clone(), tip);
                }
                Err(e) => {
                    skipped += 1;
                    tracing::warn!(index, error = %e, "Skipping malformed tip record");
                }
            }
        }

        tracing::info!(count = store.tips.len(), skipped, "Loaded tips");
        Ok(store)
    }

    pub fn len(&self) -> usize {
        self.tips.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tips.is_empty()
    }
}

impl TipStore for InMemoryTipStore {
    fn all(&self) -> Result<Vec<CommunityTip>, StoreError> {
        Ok(self.tips.iter().map(|entry| entry.value().clone()).collect())
    }

    fn get(&self, id: &str) -> Result<Option<CommunityTip>, StoreError> {
        Ok(self.tips.get(id).map(|entry| entry.value().clone()))
    }

    fn insert(&self, tip: CommunityTip) -> Result<(), StoreError> {
        use dashmap::mapref::entry::Entry;

        match self.tips.entry(tip.id.clone()) {
            Entry::Occupied(_) => Err(StoreError::Conflict(tip.id)),
            Entry::Vacant(slot) => {
                slot.insert(tip);
                Ok(())
            }
        }
    }

    fn mark_helpful(&self, id: &str) -> Result<CommunityTip, StoreError> {
        let mut entry = self
            .tips
            .get_mut(id)
            .ok_or_else(|| StoreError::NotFound(id.to_string()))?;
        entry.helpful = entry.helpful.saturating_add(1);
        Ok(entry.value().clone())
    }
}

/// Errors from tip storage operations.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("Tip not found: {0}")]
    NotFound(String),

    #[error("Tip already exists: {0}")]
    Conflict(String),
}

/// Errors from seeding a store.
#[derive(Debug, thiserror::Error)]
pub enum TipLoadError {
    #[error("Failed to read file: {0}")]
    IoError(String),

    #[error("Failed to parse tip snapshot: {0}")]
    ParseError(String),
}
