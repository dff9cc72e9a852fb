//! Short-lived caching of planned journeys.
//!
//! Planning is deterministic for a given origin, destination, budget
//! and reference time, but the reference time is a wall clock, so keys
//! quantise it into coarse buckets. Two requests a minute apart hit
//! the same entry; departure annotations can be up to one bucket
//! stale, which the short TTL bounds.

use std::sync::Arc;
use std::time::Duration;

use chrono::{NaiveTime, Timelike};
use moka::future::Cache;

use crate::domain::{Itinerary, StationCode};

/// Tuning for the journey cache.
#[derive(Debug, Clone)]
pub struct PlanCacheConfig {
    pub max_capacity: u64,
    pub ttl: Duration,
    /// Width of the reference-time quantisation bucket, in minutes.
    pub bucket_mins: u32,
}

impl Default for PlanCacheConfig {
    fn default() -> Self {
        Self {
            max_capacity: 1000,
            ttl: Duration::from_secs(60),
            bucket_mins: 5,
        }
    }
}

/// Cache key for one planning request.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PlanKey {
    origin: StationCode,
    destination: StationCode,
    max_transfers: usize,
    time_bucket: u32,
}

/// Cache of planned journeys keyed by request parameters.
pub struct PlanCache {
    cache: Cache<PlanKey, Arc<Vec<Itinerary>>>,
    bucket_mins: u32,
}

impl PlanCache {
    pub fn new(config: PlanCacheConfig) -> Self {
        Self {
            cache: Cache::builder()
                .max_capacity(config.max_capacity)
                .time_to_live(config.ttl)
                .build(),
            bucket_mins: config.bucket_mins.max(1),
        }
    }

    /// Build the key for a request, quantising the reference time.
    pub fn key(
        &self,
        origin: StationCode,
        destination: StationCode,
        max_transfers: usize,
        reference: NaiveTime,
    ) -> PlanKey {
        let minute_of_day = reference.hour() * 60 + reference.minute();
        PlanKey {
            origin,
            destination,
            max_transfers,
            time_bucket: minute_of_day / self.bucket_mins,
        }
    }

    pub async fn get(&self, key: &PlanKey) -> Option<Arc<Vec<Itinerary>>> {
        self.cache.get(key).await
    }

    pub async fn insert(&self, key: PlanKey, routes: Arc<Vec<Itinerary>>) {
        self.cache.insert(key, routes).await;
    }
}
