//! # Vigil Client
//!
//! Typed REST client for the backend API: record queries for the table
//! views, pre-aggregated series for the chart views, and the vote and admin
//! mutation endpoints.
//!
//! The client owns no credential storage: calls that need authentication
//! take a [`session::UserSession`] or [`session::AdminSession`] value, so
//! every function stays testable and side-effect-free up to the actual
//! network exchange.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub mod api;
pub mod query;
pub mod session;

pub use api::{ApiClient, CategoryTotal, GroupBy, StatsMetric, StatsResponse};
pub use query::{BountyQuery, ContestQuery};
pub use session::{AdminSession, UserSession, VoteKind};
