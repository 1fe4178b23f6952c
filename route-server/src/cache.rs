//! Caching layer for plan results.
//!
//! The network is immutable after startup and planning is
//! deterministic, so a plan computed once for a given (start, goal,
//! depth) triple stays valid; the TTL only bounds memory held by
//! rarely-repeated queries.

use std::sync::Arc;
use std::time::Duration;

use moka::future::Cache as MokaCache;

use crate::domain::StopId;
use crate::planner::PlanResult;

/// Cache key for plan results: (start, goal, depth cutoff).
type PlanKey = (StopId, StopId, usize);

/// Cached plan entry.
type PlanEntry = Arc<PlanResult>;

/// Configuration for the plan cache.
#[derive(Debug, Clone)]
pub struct CacheConfig {
    /// TTL for cached entries.
    pub ttl: Duration,

    /// Maximum number of cached entries.
    pub max_capacity: u64,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            ttl: Duration::from_secs(300),
            max_capacity: 1000,
        }
    }
}

/// Cache of ranked plan results.
pub struct PlanCache {
    plans: MokaCache<PlanKey, PlanEntry>,
}

impl PlanCache {
    /// Create a new cache with the given configuration.
    pub fn new(config: &CacheConfig) -> Self {
        let plans = MokaCache::builder()
            .time_to_live(config.ttl)
            .max_capacity(config.max_capacity)
            .build();

        Self { plans }
    }

    /// Get a cached plan.
    pub async fn get(&self, key: &PlanKey) -> Option<PlanEntry> {
        self.plans.get(key).await
    }

    /// Insert a plan into the cache.
    pub async fn insert(&self, key: PlanKey, entry: PlanEntry) {
        self.plans.insert(key, entry).await;
    }

    /// Number of cached entries (for monitoring).
    pub fn entry_count(&self) -> u64 {
        self.plans.entry_count()
    }

    /// Invalidate all cached entries.
    pub fn invalidate_all(&self) {
        self.plans.invalidate_all();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stop(s: &str) -> StopId {
        StopId::parse(s).unwrap()
    }

    fn key(from: &str, to: &str, depth: usize) -> PlanKey {
        (stop(from), stop(to), depth)
    }

    fn entry() -> PlanEntry {
        Arc::new(PlanResult {
            routes: Vec::new(),
            routes_explored: 7,
        })
    }

    #[tokio::test]
    async fn insert_and_get() {
        let cache = PlanCache::new(&CacheConfig::default());

        assert!(cache.get(&key("A", "F", 10)).await.is_none());

        cache.insert(key("A", "F", 10), entry()).await;

        let cached = cache.get(&key("A", "F", 10)).await.unwrap();
        assert_eq!(cached.routes_explored, 7);
    }

    #[tokio::test]
    async fn depth_is_part_of_the_key() {
        let cache = PlanCache::new(&CacheConfig::default());
        cache.insert(key("A", "F", 10), entry()).await;

        assert!(cache.get(&key("A", "F", 5)).await.is_none());
    }

    #[tokio::test]
    async fn invalidate_all_clears() {
        let cache = PlanCache::new(&CacheConfig::default());
        cache.insert(key("A", "F", 10), entry()).await;

        cache.invalidate_all();

        assert!(cache.get(&key("A", "F", 10)).await.is_none());
    }
}
