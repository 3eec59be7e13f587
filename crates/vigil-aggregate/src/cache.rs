//! Memoization of aggregated chart tables.

use crate::aggregator::{aggregate, ChartTable};
use crate::bucket::BucketUnit;
use crate::series::TimeSeries;
use moka::sync::Cache;
use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};
use std::sync::Arc;
use tracing::debug;

/// Cache key: a content hash of the input series plus the bucket unit.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq)]
struct ChartKey {
    series_hash: u64,
    unit: BucketUnit,
}

fn series_hash(series: &[TimeSeries]) -> u64 {
    let mut hasher = DefaultHasher::new();
    for s in series {
        s.name.hash(&mut hasher);
        for point in &s.data {
            point.date.hash(&mut hasher);
            point.value.to_bits().hash(&mut hasher);
        }
    }
    hasher.finish()
}

/// Memoized aggregation results.
///
/// Aggregation is idempotent, so this is purely an efficiency layer for
/// embedders that re-run on every state change; [`aggregate`] can always be
/// called directly instead.
pub struct ChartCache {
    cache: Cache<ChartKey, Arc<ChartTable>>,
}

impl ChartCache {
    /// Creates a cache holding up to `max_capacity` tables.
    pub fn new(max_capacity: u64) -> Self {
        Self {
            cache: Cache::builder().max_capacity(max_capacity).build(),
        }
    }

    /// Returns the memoized table for these inputs, aggregating on a miss.
    pub fn get_or_aggregate(&self, series: &[TimeSeries], unit: BucketUnit) -> Arc<ChartTable> {
        let key = ChartKey {
            series_hash: series_hash(series),
            unit,
        };
        if let Some(hit) = self.cache.get(&key) {
            debug!(?unit, "chart cache hit");
            return hit;
        }
        let table = Arc::new(aggregate(series, unit));
        self.cache.insert(key, Arc::clone(&table));
        table
    }

    /// Drops every memoized table.
    pub fn invalidate_all(&self) {
        self.cache.invalidate_all();
    }
}

impl Default for ChartCache {
    fn default() -> Self {
        Self::new(64)
    }
}
