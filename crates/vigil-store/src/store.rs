//! Versioned filter-state persistence keyed per view.

use crate::backend::KeyValueStore;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};
use vigil_common::Result;
use vigil_pipeline::FilterState;

/// Schema version of the persisted envelope. Bump on any incompatible
/// change to [`FilterState`]'s serialized form.
pub const STORED_FILTERS_VERSION: u32 = 1;

/// A logical view with independently persisted filter state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ViewKey {
    /// The audits Gantt timeline.
    AuditsTimeline,
    /// The audits table.
    AuditsTable,
    /// The bug bounties table.
    BountiesTable,
}

impl ViewKey {
    /// The stable storage key for this view.
    pub fn storage_key(self) -> &'static str {
        match self {
            ViewKey::AuditsTimeline => "audits-timeline-filters",
            ViewKey::AuditsTable => "audits-table-filters",
            ViewKey::BountiesTable => "bug-bounty-filters",
        }
    }
}

/// The persisted envelope: filter values plus a schema version tag.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct StoredFilters {
    version: u32,
    filters: FilterState,
}

/// Loads and saves filter state through a storage backend.
pub struct FilterStore<S> {
    backend: S,
}

impl<S: KeyValueStore> FilterStore<S> {
    /// Wraps a storage backend.
    pub fn new(backend: S) -> Self {
        Self { backend }
    }

    /// Restores the saved state for a view.
    ///
    /// Returns `None` when nothing was saved, when the blob does not parse,
    /// or when its version does not match the current schema. A stale blob
    /// is logged and treated as absent, never surfaced as an error; the
    /// view falls back to its default state.
    pub async fn load(&self, view: ViewKey) -> Result<Option<FilterState>> {
        let key = view.storage_key();
        let Some(blob) = self.backend.read(key).await? else {
            return Ok(None);
        };

        match serde_json::from_str::<StoredFilters>(&blob) {
            Ok(stored) if stored.version == STORED_FILTERS_VERSION => {
                debug!(key, "restored saved filters");
                Ok(Some(stored.filters))
            }
            Ok(stored) => {
                warn!(
                    key,
                    found = stored.version,
                    expected = STORED_FILTERS_VERSION,
                    "ignoring saved filters with mismatched version"
                );
                Ok(None)
            }
            Err(e) => {
                warn!(key, error = %e, "ignoring unreadable saved filters");
                Ok(None)
            }
        }
    }

    /// Persists the state for a view, stamping the current schema version.
    pub async fn save(&self, view: ViewKey, filters: &FilterState) -> Result<()> {
        let stored = StoredFilters {
            version: STORED_FILTERS_VERSION,
            filters: filters.clone(),
        };
        let blob = serde_json::to_string(&stored)?;
        self.backend.write(view.storage_key(), &blob).await
    }
}
