//! # Vigil Store
//!
//! Per-view persistence of filter state.
//!
//! Each logical view (audits timeline, audits table, bounties table) keeps
//! its own [`vigil_pipeline::FilterState`] blob behind a string-keyed
//! storage seam, restored on mount and written on every change. Blobs carry
//! an explicit schema
//! version; anything stale or unreadable degrades to "no saved state"
//! instead of an error, so a format change never wedges a view.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub mod backend;
pub mod store;

pub use backend::{FileStore, KeyValueStore, MemoryStore};
pub use store::{FilterStore, ViewKey, STORED_FILTERS_VERSION};
