//! Program records and the accessor trait shared by the pipeline.

use crate::types::{Platform, ProgramStatus};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A crowdsourced audit contest fetched from the backend.
///
/// Records are read-only snapshots: edits (languages, paid amounts, votes)
/// go through the backend and are reflected by re-fetching, never by
/// patching a record in place.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContestRecord {
    /// Stable backend-issued identifier.
    pub id: String,
    /// Display name of the audited project.
    pub project: String,
    /// URL-safe identifier used in deep links.
    pub slug: String,
    /// Hosting platform.
    pub platform: Platform,
    /// Project logo URL.
    pub image_url: String,
    /// Link to the contest page on the hosting platform.
    pub original_url: String,
    /// Languages the audited code is written in.
    pub languages: Vec<String>,
    /// Largest single payout on offer, when the platform publishes one.
    #[serde(default)]
    pub max_reward: Option<f64>,
    /// Total reward pool.
    #[serde(default)]
    pub rewards_pool: Option<f64>,
    /// Token the rewards are denominated in.
    #[serde(default)]
    pub rewards_token: Option<String>,
    /// Amount actually paid out after judging.
    #[serde(default)]
    pub paid: Option<f64>,
    /// Contest start.
    pub start_date: DateTime<Utc>,
    /// Submission deadline.
    pub end_date: DateTime<Utc>,
    /// End of the judging period, when announced.
    #[serde(default)]
    pub evaluation_end_date: Option<DateTime<Utc>>,
    /// Lifecycle status.
    pub status: ProgramStatus,
    /// User identifiers that liked this contest.
    #[serde(default)]
    pub likes: Vec<String>,
    /// User identifiers that disliked this contest.
    #[serde(default)]
    pub dislikes: Vec<String>,
}

/// A bug bounty program fetched from the backend.
///
/// Bounties are open-ended: they carry a start date but no end date and no
/// lifecycle status.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BountyRecord {
    /// Stable backend-issued identifier.
    pub id: String,
    /// Display name of the project.
    pub project: String,
    /// URL-safe identifier used in deep links.
    pub slug: String,
    /// Hosting platform.
    pub platform: Platform,
    /// Project logo URL.
    pub image_url: String,
    /// Link to the program page on the hosting platform.
    pub original_url: String,
    /// Languages the covered code is written in.
    pub languages: Vec<String>,
    /// Largest single payout on offer.
    #[serde(default)]
    pub max_reward: Option<f64>,
    /// Total reward pool.
    #[serde(default)]
    pub rewards_pool: Option<f64>,
    /// Token the rewards are denominated in.
    #[serde(default)]
    pub rewards_token: Option<String>,
    /// Program launch date.
    pub start_date: DateTime<Utc>,
    /// User identifiers that liked this program.
    #[serde(default)]
    pub likes: Vec<String>,
    /// User identifiers that disliked this program.
    #[serde(default)]
    pub dislikes: Vec<String>,
}

/// Uniform accessors over both record kinds.
///
/// The filter and sort pipeline is generic over this trait so the same
/// predicates and comparators serve the audit views and the bounty views.
/// Accessors return `Option` where a field only exists for one record kind.
pub trait ProgramRecord {
    /// Stable identifier.
    fn id(&self) -> &str;
    /// Display name of the project.
    fn project(&self) -> &str;
    /// Hosting platform.
    fn platform(&self) -> Platform;
    /// Languages, in display order.
    fn languages(&self) -> &[String];
    /// Start of the program.
    fn start_date(&self) -> DateTime<Utc>;
    /// End of the program, for records that have one.
    fn end_date(&self) -> Option<DateTime<Utc>>;
    /// Lifecycle status, for records that have one.
    fn status(&self) -> Option<ProgramStatus>;
    /// Largest single payout on offer.
    fn max_reward(&self) -> Option<f64>;
    /// Total reward pool.
    fn rewards_pool(&self) -> Option<f64>;
    /// Token the rewards are denominated in.
    fn rewards_token(&self) -> Option<&str>;
    /// Amount actually paid out, for records that track it.
    fn paid(&self) -> Option<f64>;
    /// User identifiers that liked this record.
    fn likes(&self) -> &[String];
    /// User identifiers that disliked this record.
    fn dislikes(&self) -> &[String];

    /// Community rating, computed on demand and never stored.
    fn rating(&self) -> i64 {
        self.likes().len() as i64 - self.dislikes().len() as i64
    }
}

impl ProgramRecord for ContestRecord {
    fn id(&self) -> &str {
        &self.id
    }

    fn project(&self) -> &str {
        &self.project
    }

    fn platform(&self) -> Platform {
        self.platform
    }

    fn languages(&self) -> &[String] {
        &self.languages
    }

    fn start_date(&self) -> DateTime<Utc> {
        self.start_date
    }

    fn end_date(&self) -> Option<DateTime<Utc>> {
        Some(self.end_date)
    }

    fn status(&self) -> Option<ProgramStatus> {
        Some(self.status)
    }

    fn max_reward(&self) -> Option<f64> {
        self.max_reward
    }

    fn rewards_pool(&self) -> Option<f64> {
        self.rewards_pool
    }

    fn rewards_token(&self) -> Option<&str> {
        self.rewards_token.as_deref()
    }

    fn paid(&self) -> Option<f64> {
        self.paid
    }

    fn likes(&self) -> &[String] {
        &self.likes
    }

    fn dislikes(&self) -> &[String] {
        &self.dislikes
    }
}

impl ProgramRecord for BountyRecord {
    fn id(&self) -> &str {
        &self.id
    }

    fn project(&self) -> &str {
        &self.project
    }

    fn platform(&self) -> Platform {
        self.platform
    }

    fn languages(&self) -> &[String] {
        &self.languages
    }

    fn start_date(&self) -> DateTime<Utc> {
        self.start_date
    }

    fn end_date(&self) -> Option<DateTime<Utc>> {
        None
    }

    fn status(&self) -> Option<ProgramStatus> {
        None
    }

    fn max_reward(&self) -> Option<f64> {
        self.max_reward
    }

    fn rewards_pool(&self) -> Option<f64> {
        self.rewards_pool
    }

    fn rewards_token(&self) -> Option<&str> {
        self.rewards_token.as_deref()
    }

    fn paid(&self) -> Option<f64> {
        None
    }

    fn likes(&self) -> &[String] {
        &self.likes
    }

    fn dislikes(&self) -> &[String] {
        &self.dislikes
    }
}
