//! The combined filter + sort query and its memoized front.

use crate::filter::{filter_records, FilterState};
use crate::sort::{sort_records, SortSpec};
use moka::sync::Cache;
use serde::Serialize;
use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};
use std::sync::Arc;
use tracing::{debug, instrument};
use vigil_common::ProgramRecord;

/// Filters then sorts a record list. Pure: re-running on the same inputs
/// yields the same output, and running on its own output is a no-op.
#[instrument(skip(records, filters, sort), fields(total = records.len()))]
pub fn run_query<R: ProgramRecord + Clone>(
    records: &[R],
    filters: &FilterState,
    sort: &[SortSpec],
) -> Vec<R> {
    let mut result = filter_records(records, filters);
    sort_records(&mut result, sort);
    result
}

/// Cache key over the query inputs.
///
/// Filter and sort state are content-hashed through their serialized form,
/// the way the chart cache keys parameter sets. The dataset itself is
/// identified by a caller-supplied revision so a re-fetch with identical ids
/// but changed fields still misses.
#[derive(Debug, Clone, Hash, PartialEq, Eq)]
struct QueryKey {
    revision: u64,
    filter_hash: u64,
    sort_hash: u64,
}

fn content_hash<T: Serialize>(value: &T) -> u64 {
    // Serialization cannot fail for these plain data types.
    let serialized = serde_json::to_string(value).unwrap_or_default();
    let mut hasher = DefaultHasher::new();
    serialized.hash(&mut hasher);
    hasher.finish()
}

/// Memoized query results keyed by (dataset revision, filter state, sort
/// state).
///
/// Purely an efficiency layer: correctness never depends on a hit, and the
/// embedding layer is free to call [`run_query`] directly instead.
pub struct QueryCache<R> {
    cache: Cache<QueryKey, Arc<Vec<R>>>,
}

impl<R> QueryCache<R>
where
    R: ProgramRecord + Clone + Send + Sync + 'static,
{
    /// Creates a cache holding up to `max_capacity` query results.
    pub fn new(max_capacity: u64) -> Self {
        Self {
            cache: Cache::builder().max_capacity(max_capacity).build(),
        }
    }

    /// Returns the memoized result for these inputs, computing it on a miss.
    pub fn get_or_compute(
        &self,
        revision: u64,
        records: &[R],
        filters: &FilterState,
        sort: &[SortSpec],
    ) -> Arc<Vec<R>> {
        let key = QueryKey {
            revision,
            filter_hash: content_hash(filters),
            sort_hash: content_hash(&sort),
        };
        if let Some(hit) = self.cache.get(&key) {
            debug!(revision, "query cache hit");
            return hit;
        }
        let result = Arc::new(run_query(records, filters, sort));
        self.cache.insert(key, Arc::clone(&result));
        result
    }

    /// Drops every memoized result, e.g. after a mutation round-trip.
    pub fn invalidate_all(&self) {
        self.cache.invalidate_all();
    }
}
