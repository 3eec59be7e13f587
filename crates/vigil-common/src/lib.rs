//! # Vigil Common
//!
//! Shared types, error handling, and utilities for the Vigil data core.
//!
//! This crate provides the record model for audit and bounty programs,
//! the workspace-wide error type, and small helpers used by the other
//! crates in the workspace.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub mod error;
pub mod logging;
pub mod record;
pub mod types;
pub mod utils;

pub use error::{Result, VigilError};
pub use record::{BountyRecord, ContestRecord, ProgramRecord};
pub use types::{Platform, ProgramStatus};
