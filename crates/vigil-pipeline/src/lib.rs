//! # Vigil Pipeline
//!
//! Deterministic, composable filtering and multi-key stable sorting of
//! in-memory program records, with pagination and facet extraction.
//!
//! Everything here is a pure function over plain data: the embedding layer
//! calls [`query::run_query`] (or the memoized [`query::QueryCache`]) on
//! every input change and slices the result with a [`page::Pager`].

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub mod facets;
pub mod filter;
pub mod page;
pub mod query;
pub mod sort;

pub use facets::{format_language_name, unique_languages, unique_platforms};
pub use filter::{filter_records, FilterState};
pub use page::{Pager, PAGE_SIZE};
pub use query::{run_query, QueryCache};
pub use sort::{default_sort, sort_records, SortKey, SortSpec};
