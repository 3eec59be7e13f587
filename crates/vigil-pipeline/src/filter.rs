//! Filter predicates over program records.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::debug;
use vigil_common::{Platform, ProgramRecord, ProgramStatus};

/// The full set of filter predicate values for one view.
///
/// Predicates are independent and combined with logical AND. An empty or
/// absent predicate value passes every record, so the default state is the
/// identity filter.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FilterState {
    /// Case-insensitive substring match against the project name.
    pub search: String,
    /// Active language set.
    pub languages: Vec<String>,
    /// Inverts the language predicate: pass records whose languages do NOT
    /// intersect the active set.
    pub exclude_languages: bool,
    /// Active platform set.
    pub platforms: Vec<Platform>,
    /// Active status set.
    pub statuses: Vec<ProgramStatus>,
    /// Inclusive lower bound of the date range.
    pub start_date: Option<DateTime<Utc>>,
    /// Inclusive upper bound of the date range.
    pub end_date: Option<DateTime<Utc>>,
    /// Reward ceiling: pass records whose max reward is at most this value.
    pub max_reward: Option<f64>,
}

impl FilterState {
    /// Default state for the audit views: upcoming and ongoing contests
    /// pre-selected, everything else open.
    pub fn audits_default() -> Self {
        Self {
            statuses: vec![ProgramStatus::Upcoming, ProgramStatus::Ongoing],
            ..Self::default()
        }
    }

    /// Returns true when the record passes every active predicate.
    pub fn matches<R: ProgramRecord>(&self, record: &R) -> bool {
        self.matches_search(record)
            && self.matches_languages(record)
            && self.matches_platforms(record)
            && self.matches_statuses(record)
            && self.matches_dates(record)
            && self.matches_reward(record)
    }

    fn matches_search<R: ProgramRecord>(&self, record: &R) -> bool {
        if self.search.is_empty() {
            return true;
        }
        record
            .project()
            .to_lowercase()
            .contains(&self.search.to_lowercase())
    }

    fn matches_languages<R: ProgramRecord>(&self, record: &R) -> bool {
        if self.languages.is_empty() {
            return true;
        }
        let intersects = record
            .languages()
            .iter()
            .any(|lang| self.languages.iter().any(|active| active == lang));
        if self.exclude_languages {
            !intersects
        } else {
            intersects
        }
    }

    fn matches_platforms<R: ProgramRecord>(&self, record: &R) -> bool {
        self.platforms.is_empty() || self.platforms.contains(&record.platform())
    }

    fn matches_statuses<R: ProgramRecord>(&self, record: &R) -> bool {
        if self.statuses.is_empty() {
            return true;
        }
        match record.status() {
            Some(status) => self.statuses.contains(&status),
            // A record without a status cannot be a member of the set.
            None => false,
        }
    }

    fn matches_dates<R: ProgramRecord>(&self, record: &R) -> bool {
        if self.start_date.is_none() && self.end_date.is_none() {
            return true;
        }
        match record.end_date() {
            // Ranged records match when their span overlaps the bounds.
            Some(record_end) => {
                let starts_in_time = self
                    .end_date
                    .map_or(true, |bound| record.start_date() <= bound);
                let ends_in_time = self.start_date.map_or(true, |bound| record_end >= bound);
                starts_in_time && ends_in_time
            }
            // Open-ended records match by start date containment.
            None => {
                let after_start = self
                    .start_date
                    .map_or(true, |bound| record.start_date() >= bound);
                let before_end = self
                    .end_date
                    .map_or(true, |bound| record.start_date() <= bound);
                after_start && before_end
            }
        }
    }

    fn matches_reward<R: ProgramRecord>(&self, record: &R) -> bool {
        match self.max_reward {
            None => true,
            // A record with no published reward cannot be shown to be under
            // the ceiling, so it never matches a ceiling that is set.
            Some(ceiling) => record.max_reward().map_or(false, |r| r <= ceiling),
        }
    }
}

/// Applies the filter state to a record list, preserving input order.
pub fn filter_records<R: ProgramRecord + Clone>(records: &[R], state: &FilterState) -> Vec<R> {
    let filtered: Vec<R> = records
        .iter()
        .filter(|record| state.matches(*record))
        .cloned()
        .collect();
    debug!(
        total = records.len(),
        kept = filtered.len(),
        "applied record filters"
    );
    filtered
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use vigil_common::ContestRecord;

    fn contest(project: &str, languages: &[&str], max_reward: Option<f64>) -> ContestRecord {
        ContestRecord {
            id: format!("id-{project}"),
            project: project.to_string(),
            slug: project.to_lowercase(),
            platform: Platform::Sherlock,
            image_url: String::new(),
            original_url: String::new(),
            languages: languages.iter().map(|s| s.to_string()).collect(),
            max_reward,
            rewards_pool: None,
            rewards_token: None,
            paid: None,
            start_date: Utc.with_ymd_and_hms(2024, 3, 1, 0, 0, 0).unwrap(),
            end_date: Utc.with_ymd_and_hms(2024, 3, 15, 0, 0, 0).unwrap(),
            evaluation_end_date: None,
            status: ProgramStatus::Ongoing,
            likes: vec![],
            dislikes: vec![],
        }
    }

    #[test]
    fn test_default_state_passes_everything() {
        let records = vec![
            contest("Acme", &["Rust"], Some(1000.0)),
            contest("Beta", &["Go"], None),
        ];
        let state = FilterState::default();
        assert_eq!(filter_records(&records, &state).len(), 2);
    }

    #[test]
    fn test_search_is_case_insensitive() {
        let records = vec![contest("Acme Vault", &[], None)];
        let state = FilterState {
            search: "acme".to_string(),
            ..FilterState::default()
        };
        assert_eq!(filter_records(&records, &state).len(), 1);

        let miss = FilterState {
            search: "beta".to_string(),
            ..FilterState::default()
        };
        assert!(filter_records(&records, &miss).is_empty());
    }

    #[test]
    fn test_language_intersection_and_exclusion() {
        let records = vec![
            contest("Acme", &["Rust", "Solidity"], None),
            contest("Beta", &["Go"], None),
        ];
        let include = FilterState {
            languages: vec!["Rust".to_string()],
            ..FilterState::default()
        };
        let kept = filter_records(&records, &include);
        assert_eq!(kept.len(), 1);
        assert_eq!(kept[0].project, "Acme");

        let exclude = FilterState {
            languages: vec!["Rust".to_string()],
            exclude_languages: true,
            ..FilterState::default()
        };
        let kept = filter_records(&records, &exclude);
        assert_eq!(kept.len(), 1);
        assert_eq!(kept[0].project, "Beta");
    }

    #[test]
    fn test_reward_ceiling_scenario() {
        let records = vec![
            contest("Acme", &["Rust"], Some(1000.0)),
            contest("Beta", &["Go"], Some(5000.0)),
        ];
        let state = FilterState {
            max_reward: Some(2000.0),
            ..FilterState::default()
        };
        let kept = filter_records(&records, &state);
        assert_eq!(kept.len(), 1);
        assert_eq!(kept[0].project, "Acme");
    }

    #[test]
    fn test_null_reward_never_matches_a_set_ceiling() {
        let records = vec![contest("NoReward", &[], None)];
        let ceiling = FilterState {
            max_reward: Some(1_000_000.0),
            ..FilterState::default()
        };
        assert!(filter_records(&records, &ceiling).is_empty());

        // Without a ceiling the same record passes.
        assert_eq!(filter_records(&records, &FilterState::default()).len(), 1);
    }

    #[test]
    fn test_date_range_overlap_for_ranged_records() {
        let records = vec![contest("Acme", &[], None)];

        // Window entirely before the contest.
        let before = FilterState {
            end_date: Some(Utc.with_ymd_and_hms(2024, 2, 1, 0, 0, 0).unwrap()),
            ..FilterState::default()
        };
        assert!(filter_records(&records, &before).is_empty());

        // Window overlapping the middle of the contest.
        let overlap = FilterState {
            start_date: Some(Utc.with_ymd_and_hms(2024, 3, 10, 0, 0, 0).unwrap()),
            end_date: Some(Utc.with_ymd_and_hms(2024, 4, 1, 0, 0, 0).unwrap()),
            ..FilterState::default()
        };
        assert_eq!(filter_records(&records, &overlap).len(), 1);

        // Open lower bound.
        let open_start = FilterState {
            end_date: Some(Utc.with_ymd_and_hms(2024, 3, 1, 0, 0, 0).unwrap()),
            ..FilterState::default()
        };
        assert_eq!(filter_records(&records, &open_start).len(), 1);
    }

    #[test]
    fn test_status_set_membership() {
        let records = vec![contest("Acme", &[], None)];
        let state = FilterState {
            statuses: vec![ProgramStatus::Finished],
            ..FilterState::default()
        };
        assert!(filter_records(&records, &state).is_empty());

        let state = FilterState::audits_default();
        assert_eq!(filter_records(&records, &state).len(), 1);
    }

    #[test]
    fn test_partial_persisted_state_deserializes() {
        // Older persisted blobs may omit fields added later.
        let state: FilterState = serde_json::from_str(r#"{"search":"acme"}"#).unwrap();
        assert_eq!(state.search, "acme");
        assert!(state.languages.is_empty());
        assert_eq!(state.max_reward, None);
    }
}
