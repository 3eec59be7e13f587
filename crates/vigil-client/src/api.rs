//! The backend API client.

use crate::query::{BountyQuery, ContestQuery};
use crate::session::{AdminSession, UserSession, VoteKind};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};
use url::Url;
use vigil_aggregate::{CategoryFilter, RawSeries};
use vigil_common::{BountyRecord, ContestRecord, Result, VigilError};

/// Which value the chart endpoints report per event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatsMetric {
    /// Number of active programs.
    Amount,
    /// Reward volume.
    Reward,
}

impl StatsMetric {
    fn as_path(self) -> &'static str {
        match self {
            StatsMetric::Amount => "amount",
            StatsMetric::Reward => "reward",
        }
    }
}

/// Which category the chart endpoints group by.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GroupBy {
    /// One series per language.
    Language,
    /// One series per platform.
    Platform,
}

impl GroupBy {
    fn as_path(self) -> &'static str {
        match self {
            GroupBy::Language => "language",
            GroupBy::Platform => "platform",
        }
    }
}

/// Grand total for one category, reported alongside the series.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryTotal {
    /// Category name.
    pub name: String,
    /// Total value; missing when the category has no events.
    #[serde(default)]
    pub number: Option<f64>,
}

/// Payload of the chart endpoints: raw series for the aggregation engine
/// plus per-category grand totals for the footer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatsResponse {
    /// One raw series per category.
    pub data: Vec<RawSeries>,
    /// Grand totals per category.
    #[serde(default)]
    pub total: Vec<CategoryTotal>,
}

impl StatsResponse {
    /// Sums the grand totals of the selected categories.
    pub fn total_for(&self, filter: &CategoryFilter) -> f64 {
        self.total
            .iter()
            .filter(|t| filter.passes(&t.name))
            .map(|t| t.number.unwrap_or(0.0))
            .sum()
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct VoteBody<'a> {
    #[serde(rename = "userID")]
    user_id: &'a str,
    like_status: VoteKind,
}

#[derive(Debug, Serialize)]
struct LanguagesBody<'a> {
    languages: &'a [String],
}

#[derive(Debug, Serialize)]
struct PaidBody {
    paid: f64,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    message: Option<String>,
}

/// Pooled HTTP client for the Vigil backend.
pub struct ApiClient {
    http: reqwest::Client,
    base_url: Url,
}

impl ApiClient {
    /// Creates a client for the given backend base URL.
    pub fn new(base_url: &str) -> Result<Self> {
        let base_url = Url::parse(base_url)
            .map_err(|e| VigilError::config(format!("invalid backend url {base_url:?}: {e}")))?;
        if base_url.cannot_be_a_base() {
            return Err(VigilError::config(format!(
                "backend url {base_url} cannot carry paths"
            )));
        }
        Ok(Self {
            http: reqwest::Client::new(),
            base_url,
        })
    }

    fn endpoint(&self, segments: &[&str]) -> Url {
        let mut url = self.base_url.clone();
        {
            // new() rejects cannot-be-a-base URLs, so segments always apply.
            let mut path = url.path_segments_mut().expect("base url verified");
            path.pop_if_empty();
            path.extend(segments);
        }
        url
    }

    /// Fetches audit contests matching the query.
    #[instrument(skip(self, query))]
    pub async fn fetch_contests(&self, query: &ContestQuery) -> Result<Vec<ContestRecord>> {
        let mut url = self.endpoint(&["w3-security-contests"]);
        query.apply(&mut url);
        let records: Vec<ContestRecord> = self.get_json(url).await?;
        debug!(count = records.len(), "fetched contests");
        Ok(records)
    }

    /// Fetches bug bounty programs matching the query.
    #[instrument(skip(self, query))]
    pub async fn fetch_bounties(&self, query: &BountyQuery) -> Result<Vec<BountyRecord>> {
        let mut url = self.endpoint(&["w3-bug-bounties"]);
        query.apply(&mut url);
        let records: Vec<BountyRecord> = self.get_json(url).await?;
        debug!(count = records.len(), "fetched bounties");
        Ok(records)
    }

    /// Fetches pre-aggregated contest series for a chart.
    pub async fn contest_stats(&self, metric: StatsMetric, group: GroupBy) -> Result<StatsResponse> {
        let path = format!("{}-by-{}", metric.as_path(), group.as_path());
        let url = self.endpoint(&["charts", "w3-security-contests", &path]);
        self.get_json(url).await
    }

    /// Fetches pre-aggregated bounty series for a chart.
    pub async fn bounty_stats(&self, metric: StatsMetric, group: GroupBy) -> Result<StatsResponse> {
        let path = format!("{}-by-{}", metric.as_path(), group.as_path());
        let url = self.endpoint(&["charts", "w3-bug-bounties", &path]);
        self.get_json(url).await
    }

    /// Toggles the caller's vote on an audit contest.
    ///
    /// The updated record is not returned; callers re-fetch to observe the
    /// new like/dislike sets.
    #[instrument(skip(self, session))]
    pub async fn submit_contest_vote(
        &self,
        contest_id: &str,
        kind: VoteKind,
        session: &UserSession,
    ) -> Result<()> {
        let url = self.endpoint(&["w3-security-contests", contest_id, "likes"]);
        self.put_voted(url, kind, session).await
    }

    /// Toggles the caller's vote on a bounty program.
    #[instrument(skip(self, session))]
    pub async fn submit_bounty_vote(
        &self,
        bounty_id: &str,
        kind: VoteKind,
        session: &UserSession,
    ) -> Result<()> {
        let url = self.endpoint(&["w3-bug-bounties", bounty_id, "likes"]);
        self.put_voted(url, kind, session).await
    }

    /// Replaces the language list of a contest. Admin only.
    #[instrument(skip(self, session, languages))]
    pub async fn update_contest_languages(
        &self,
        contest_id: &str,
        languages: &[String],
        session: &AdminSession,
    ) -> Result<()> {
        let url = self.endpoint(&["w3-security-contests", contest_id, "languages"]);
        self.put_languages(url, languages, session).await
    }

    /// Replaces the language list of a bounty program. Admin only.
    #[instrument(skip(self, session, languages))]
    pub async fn update_bounty_languages(
        &self,
        bounty_id: &str,
        languages: &[String],
        session: &AdminSession,
    ) -> Result<()> {
        let url = self.endpoint(&["w3-bug-bounties", bounty_id, "languages"]);
        self.put_languages(url, languages, session).await
    }

    /// Sets the paid-out amount of a finished contest. Admin only.
    #[instrument(skip(self, session))]
    pub async fn update_paid(
        &self,
        contest_id: &str,
        paid: f64,
        session: &AdminSession,
    ) -> Result<()> {
        let url = self.endpoint(&["w3-security-contests", contest_id, "paid"]);
        let response = self
            .http
            .put(url)
            .header("X-Auth-Password", &session.password)
            .json(&PaidBody { paid })
            .send()
            .await?;
        Self::check_status(response).await?;
        Ok(())
    }

    async fn put_languages(
        &self,
        url: Url,
        languages: &[String],
        session: &AdminSession,
    ) -> Result<()> {
        let response = self
            .http
            .put(url)
            .header("X-Auth-Password", &session.password)
            .json(&LanguagesBody { languages })
            .send()
            .await?;
        Self::check_status(response).await?;
        Ok(())
    }

    async fn put_voted(&self, url: Url, kind: VoteKind, session: &UserSession) -> Result<()> {
        let response = self
            .http
            .put(url)
            .bearer_auth(&session.token)
            .json(&VoteBody {
                user_id: &session.user_id,
                like_status: kind,
            })
            .send()
            .await?;
        Self::check_status(response).await?;
        Ok(())
    }

    async fn get_json<T: serde::de::DeserializeOwned>(&self, url: Url) -> Result<T> {
        let response = self.http.get(url).send().await?;
        let response = Self::check_status(response).await?;
        Ok(response.json::<T>().await?)
    }

    /// Surfaces the backend's `{"message": …}` body on non-success codes.
    async fn check_status(response: reqwest::Response) -> Result<reqwest::Response> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        let message = response
            .json::<ErrorBody>()
            .await
            .ok()
            .and_then(|body| body.message)
            .unwrap_or_else(|| "unknown error while fetching data".to_string());
        Err(VigilError::api_with_status(message, status.as_u16()))
    }
}
