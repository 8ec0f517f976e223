// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Weather provider client and freshness cache.
//!
//! Handles:
//! - Current-conditions lookups against an OpenWeatherMap-style API
//! - Caching per ~1km cell for a fixed freshness window
//! - Falling back to the last known reading when a refresh fails
//! - One in-flight provider request per cell

use crate::models::{Coordinate, WeatherCondition};
use chrono::{DateTime, Duration, Utc};
use dashmap::DashMap;
use serde::Deserialize;
use std::sync::Arc;
use tokio::sync::Mutex;

/// Weather provider HTTP client.
#[derive(Clone)]
pub struct WeatherClient {
    http: reqwest::Client,
    base_url: String,
    api_key: String,
}

impl WeatherClient {
    pub fn new(base_url: String, api_key: String) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key,
        }
    }

    /// Fetch current conditions at a coordinate (imperial units).
    pub async fn current_conditions(
        &self,
        at: Coordinate,
    ) -> Result<WeatherCondition, WeatherError> {
        let url = format!("{}/weather", self.base_url);

        let response = self
            .http
            .get(&url)
            .query(&[
                ("lat", at.latitude.to_string()),
                ("lon", at.longitude.to_string()),
                ("appid", self.api_key.clone()),
                ("units", "imperial".to_string()),
            ])
            .send()
            .await
            .map_err(|e| WeatherError::Request(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();

            if status.as_u16() == 429 {
                tracing::warn!("Weather provider rate limit hit (429)");
                return Err(WeatherError::RateLimited);
            }

            return Err(WeatherError::Http {
                status: status.as_u16(),
                body,
            });
        }

        let payload: ProviderResponse = response
            .json()
            .await
            .map_err(|e| WeatherError::Decode(e.to_string()))?;

        payload.into_condition()
    }
}

/// Subset of the provider's current-weather payload that we use.
#[derive(Debug, Deserialize)]
struct ProviderResponse {
    #[serde(default)]
    weather: Vec<ProviderWeather>,
    main: ProviderMain,
    #[serde(default)]
    wind: ProviderWind,
}

#[derive(Debug, Deserialize)]
struct ProviderWeather {
    main: String,
    #[serde(default)]
    description: String,
}

#[derive(Debug, Deserialize)]
struct ProviderMain {
    temp: f64,
}

#[derive(Debug, Default, Deserialize)]
struct ProviderWind {
    #[serde(default)]
    speed: f64,
}

impl ProviderResponse {
    fn into_condition(self) -> Result<WeatherCondition, WeatherError> {
        let first = self
            .weather
            .into_iter()
            .next()
            .ok_or_else(|| WeatherError::Decode("missing weather entry".to_string()))?;

        Ok(WeatherCondition {
            condition: first.main,
            temperature: self.main.temp,
            wind_speed: self.wind.speed,
            description: first.description,
        })
    }
}

/// Cached reading with the time it was fetched.
#[derive(Clone)]
struct CachedWeather {
    weather: WeatherCondition,
    fetched_at: DateTime<Utc>,
}

/// Result of a cached weather lookup.
#[derive(Debug, Clone, PartialEq)]
pub enum WeatherLookup {
    /// Within the freshness window (from cache or just fetched)
    Fresh(WeatherCondition),
    /// Older than the freshness window; the refresh failed
    Stale(WeatherCondition),
}

impl WeatherLookup {
    pub fn weather(&self) -> &WeatherCondition {
        match self {
            WeatherLookup::Fresh(w) | WeatherLookup::Stale(w) => w,
        }
    }
}

/// Expired readings are kept for stale fallback for this many freshness
/// windows, then dropped on the next insert.
pub const STALE_RETENTION_WINDOWS: i32 = 8;

type CellKey = (String, String);

/// Weather lookups with a per-cell freshness cache.
#[derive(Clone)]
pub struct WeatherService {
    /// `None` when no provider is configured (offline mode).
    client: Option<WeatherClient>,
    cache: Arc<DashMap<CellKey, CachedWeather>>,
    fetch_locks: Arc<DashMap<CellKey, Arc<Mutex<()>>>>,
    ttl: Duration,
}

impl WeatherService {
    pub fn new(client: WeatherClient, ttl: Duration) -> Self {
        Self::with_client(Some(client), ttl)
    }

    /// A service that only serves what has been primed into its cache.
    pub fn offline(ttl: Duration) -> Self {
        Self::with_client(None, ttl)
    }

    fn with_client(client: Option<WeatherClient>, ttl: Duration) -> Self {
        Self {
            client,
            cache: Arc::new(DashMap::new()),
            fetch_locks: Arc::new(DashMap::new()),
            ttl,
        }
    }

    pub fn is_offline(&self) -> bool {
        self.client.is_none()
    }

    /// Number of cells currently holding a reading, fresh or stale.
    pub fn cached_cells(&self) -> usize {
        self.cache.len()
    }

    /// Cache key: coordinate rounded to two decimal places (~1km).
    fn cache_key(at: Coordinate) -> CellKey {
        (
            format!("{:.2}", at.latitude),
            format!("{:.2}", at.longitude),
        )
    }

    /// Store a reading as if it had been fetched at `fetched_at`.
    pub fn prime(&self, at: Coordinate, weather: WeatherCondition, fetched_at: DateTime<Utc>) {
        self.store(
            Self::cache_key(at),
            CachedWeather {
                weather,
                fetched_at,
            },
        );
    }

    /// Insert a reading, first dropping cells too old to serve even as stale.
    fn store(&self, key: CellKey, reading: CachedWeather) {
        let cutoff = reading.fetched_at - self.ttl * STALE_RETENTION_WINDOWS;
        let before = self.cache.len();
        self.cache.retain(|_, cached| cached.fetched_at > cutoff);
        // Locks nobody is waiting on can go; a new one is made on demand.
        self.fetch_locks.retain(|_, lock| Arc::strong_count(lock) > 1);

        let evicted = before.saturating_sub(self.cache.len());
        if evicted > 0 {
            tracing::debug!(evicted, "Evicted expired weather cells");
        }

        self.cache.insert(key, reading);
    }

    /// Cached reading for `key` if it is younger than the freshness window.
    fn fresh(&self, key: &CellKey, now: DateTime<Utc>) -> Option<WeatherCondition> {
        self.cache
            .get(key)
            .filter(|cached| now.signed_duration_since(cached.fetched_at) < self.ttl)
            .map(|cached| cached.weather.clone())
    }

    /// Current weather near `at`.
    ///
    /// Serves a cached reading younger than the freshness window without
    /// I/O. Otherwise fetches; if that fails, falls back to the last cached
    /// reading for the cell, and errors only when there is none.
    ///
    /// Concurrent lookups of the same expired cell share one provider
    /// request: later callers wait for the first and then read its result
    /// from the cache.
    pub async fn current(
        &self,
        at: Coordinate,
        now: DateTime<Utc>,
    ) -> Result<WeatherLookup, WeatherError> {
        let key = Self::cache_key(at);

        if let Some(weather) = self.fresh(&key, now) {
            return Ok(WeatherLookup::Fresh(weather));
        }

        let lock = self
            .fetch_locks
            .entry(key.clone())
            .or_insert_with(|| Arc::new(Mutex::new(())))
            .clone();
        let _guard = lock.lock().await;

        // Another task may have refreshed the cell while we waited.
        if let Some(weather) = self.fresh(&key, now) {
            return Ok(WeatherLookup::Fresh(weather));
        }
        let cached = self.cache.get(&key).map(|entry| entry.value().clone());

        let fetched = match &self.client {
            Some(client) => client.current_conditions(at).await,
            None => Err(WeatherError::NotConfigured),
        };

        match fetched {
            Ok(weather) => {
                self.store(
                    key,
                    CachedWeather {
                        weather: weather.clone(),
                        fetched_at: now,
                    },
                );
                tracing::debug!(condition = %weather.condition, "Fetched current weather");
                Ok(WeatherLookup::Fresh(weather))
            }
            Err(e) => match cached {
                Some(stale) => {
                    tracing::warn!(
                        error = %e,
                        fetched_at = %stale.fetched_at,
                        "Weather refresh failed, serving stale reading"
                    );
                    Ok(WeatherLookup::Stale(stale.weather))
                }
                None => Err(e),
            },
        }
    }
}

/// Errors from weather lookups.
#[derive(Debug, thiserror::Error)]
pub enum WeatherError {
    #[error("Weather provider not configured")]
    NotConfigured,

    #[error("Weather request failed: {0}")]
    Request(String),

    #[error("Weather provider rate limit exceeded")]
    RateLimited,

    #[error("Weather provider returned HTTP {status}: {body}")]
    Http { status: u16, body: String },

    #[error("Failed to decode weather response: {0}")]
    Decode(String),
}
