//! Query parameter construction for the list endpoints.

use chrono::{DateTime, Utc};
use url::Url;
use vigil_common::{Platform, ProgramStatus};

/// Timestamp format the backend expects in query strings.
const DATE_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.3fZ";

/// Server-side query for the contests endpoint.
///
/// Mirrors the filter predicates the backend applies before the client-side
/// pipeline runs; an empty query fetches everything, newest first.
#[derive(Debug, Clone, Default)]
pub struct ContestQuery {
    /// Substring match on the project name.
    pub search: Option<String>,
    /// Languages to match (or to exclude, see `exclude_languages`).
    pub languages: Vec<String>,
    /// Inverts the language match.
    pub exclude_languages: bool,
    /// Platforms to match.
    pub platforms: Vec<Platform>,
    /// Statuses to match.
    pub statuses: Vec<ProgramStatus>,
    /// Inclusive lower bound on the contest dates.
    pub start_date: Option<DateTime<Utc>>,
    /// Inclusive upper bound on the contest dates.
    pub end_date: Option<DateTime<Utc>>,
    /// Reward ceiling.
    pub max_reward: Option<f64>,
}

impl ContestQuery {
    /// Appends this query's parameters to an endpoint URL.
    pub(crate) fn apply(&self, url: &mut Url) {
        let mut pairs = url.query_pairs_mut();
        if let Some(search) = &self.search {
            if !search.is_empty() {
                pairs.append_pair("search", search);
            }
        }
        for platform in &self.platforms {
            pairs.append_pair("platforms", platform.as_str());
        }
        for language in &self.languages {
            pairs.append_pair("languages", language);
        }
        if self.exclude_languages {
            pairs.append_pair("excludeLanguages", "true");
        }
        if let Some(start) = self.start_date {
            pairs.append_pair("startDate", &start.format(DATE_FORMAT).to_string());
        }
        if let Some(end) = self.end_date {
            pairs.append_pair("endDate", &end.format(DATE_FORMAT).to_string());
        }
        for status in &self.statuses {
            pairs.append_pair("status", &status.as_str().to_uppercase());
        }
        if let Some(ceiling) = self.max_reward {
            pairs.append_pair("maxReward", &ceiling.to_string());
        }
        pairs.append_pair("order", "DESC");
    }
}

/// Server-side query for the bounties endpoint.
#[derive(Debug, Clone, Default)]
pub struct BountyQuery {
    /// Substring match on the project name.
    pub search: Option<String>,
    /// Languages to match.
    pub languages: Vec<String>,
    /// Platforms to match.
    pub platforms: Vec<Platform>,
    /// Inclusive lower bound on the launch date.
    pub start_date: Option<DateTime<Utc>>,
    /// Reward ceiling.
    pub max_reward: Option<f64>,
}

impl BountyQuery {
    /// Appends this query's parameters to an endpoint URL.
    pub(crate) fn apply(&self, url: &mut Url) {
        let mut pairs = url.query_pairs_mut();
        pairs.append_pair("order", "DESC");
        pairs.append_pair("sort", "startDate");
        if let Some(search) = &self.search {
            if !search.is_empty() {
                pairs.append_pair("search", search);
            }
        }
        for platform in &self.platforms {
            pairs.append_pair("platforms", platform.as_str());
        }
        if let Some(ceiling) = self.max_reward {
            pairs.append_pair("maxReward", &ceiling.to_string());
        }
        if let Some(start) = self.start_date {
            pairs.append_pair("startDate", &start.format(DATE_FORMAT).to_string());
        }
        for language in &self.languages {
            pairs.append_pair("languages", language);
        }
    }
}
