//! Multi-key stable sorting with type-aware comparators.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use vigil_common::ProgramRecord;

/// A sortable record field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SortKey {
    /// Project name, case-insensitive.
    Project,
    /// Platform name, case-insensitive.
    Platform,
    /// Languages joined to a comma-separated string.
    ///
    /// Order follows the first differing character of the joined form, not
    /// the element count. Surprising but deliberate: it matches how the
    /// column renders.
    Languages,
    /// Start date, compared as a timestamp.
    StartDate,
    /// End date, compared as a timestamp; records without one order first.
    EndDate,
    /// Maximum reward; a missing value compares as zero.
    MaxReward,
    /// Reward pool; a missing value compares as zero.
    RewardsPool,
    /// Reward token symbol, case-insensitive.
    RewardsToken,
    /// Paid-out amount; a missing value compares as zero.
    Paid,
    /// Lifecycle status name, case-insensitive.
    Status,
    /// Community rating, computed from likes and dislikes at sort time.
    Rating,
}

/// One sort criterion: a key and a direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SortSpec {
    /// Field to sort by.
    pub key: SortKey,
    /// Sort descending instead of ascending.
    #[serde(default)]
    pub descending: bool,
}

impl SortSpec {
    /// Ascending sort on the given key.
    pub fn asc(key: SortKey) -> Self {
        Self {
            key,
            descending: false,
        }
    }

    /// Descending sort on the given key.
    pub fn desc(key: SortKey) -> Self {
        Self {
            key,
            descending: true,
        }
    }
}

/// Default sort for the audit and bounty views: newest first.
pub fn default_sort() -> Vec<SortSpec> {
    vec![SortSpec::desc(SortKey::StartDate)]
}

fn compare_by<R: ProgramRecord>(a: &R, b: &R, key: SortKey) -> Ordering {
    match key {
        SortKey::Project => a.project().to_lowercase().cmp(&b.project().to_lowercase()),
        SortKey::Platform => a
            .platform()
            .as_str()
            .to_lowercase()
            .cmp(&b.platform().as_str().to_lowercase()),
        SortKey::Languages => a.languages().join(", ").cmp(&b.languages().join(", ")),
        SortKey::StartDate => a.start_date().cmp(&b.start_date()),
        SortKey::EndDate => a.end_date().cmp(&b.end_date()),
        SortKey::MaxReward => a
            .max_reward()
            .unwrap_or(0.0)
            .total_cmp(&b.max_reward().unwrap_or(0.0)),
        SortKey::RewardsPool => a
            .rewards_pool()
            .unwrap_or(0.0)
            .total_cmp(&b.rewards_pool().unwrap_or(0.0)),
        SortKey::RewardsToken => a
            .rewards_token()
            .unwrap_or("")
            .to_lowercase()
            .cmp(&b.rewards_token().unwrap_or("").to_lowercase()),
        SortKey::Paid => a.paid().unwrap_or(0.0).total_cmp(&b.paid().unwrap_or(0.0)),
        SortKey::Status => {
            let a_status = a.status().map(|s| s.as_str().to_lowercase());
            let b_status = b.status().map(|s| s.as_str().to_lowercase());
            a_status.cmp(&b_status)
        }
        SortKey::Rating => a.rating().cmp(&b.rating()),
    }
}

/// Sorts records in place by the given criteria.
///
/// Criteria apply in priority order; the first non-equal comparator decides.
/// The underlying sort is stable, so records equal under every key keep
/// their relative input order.
pub fn sort_records<R: ProgramRecord>(records: &mut [R], specs: &[SortSpec]) {
    if specs.is_empty() {
        return;
    }
    records.sort_by(|a, b| {
        for spec in specs {
            let ordering = compare_by(a, b, spec.key);
            let ordering = if spec.descending {
                ordering.reverse()
            } else {
                ordering
            };
            if ordering != Ordering::Equal {
                return ordering;
            }
        }
        Ordering::Equal
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use vigil_common::{BountyRecord, Platform};

    fn bounty(project: &str, max_reward: Option<f64>, start_day: u32) -> BountyRecord {
        BountyRecord {
            id: format!("id-{project}"),
            project: project.to_string(),
            slug: project.to_lowercase(),
            platform: Platform::Immunefi,
            image_url: String::new(),
            original_url: String::new(),
            languages: vec![],
            max_reward,
            rewards_pool: None,
            rewards_token: None,
            start_date: Utc.with_ymd_and_hms(2024, 1, start_day, 0, 0, 0).unwrap(),
            likes: vec![],
            dislikes: vec![],
        }
    }

    #[test]
    fn test_default_sort_is_newest_first() {
        let mut records = vec![
            bounty("Old", None, 1),
            bounty("New", None, 20),
            bounty("Mid", None, 10),
        ];
        sort_records(&mut records, &default_sort());
        let order: Vec<&str> = records.iter().map(|r| r.project.as_str()).collect();
        assert_eq!(order, vec!["New", "Mid", "Old"]);
    }

    #[test]
    fn test_null_reward_sorts_as_zero() {
        let mut records = vec![bounty("NoReward", None, 1), bounty("Small", Some(500.0), 1)];
        sort_records(&mut records, &[SortSpec::desc(SortKey::MaxReward)]);
        assert_eq!(records[0].project, "Small");
        assert_eq!(records[1].project, "NoReward");
    }

    #[test]
    fn test_multi_key_tiebreak() {
        let mut records = vec![
            bounty("beta", Some(100.0), 5),
            bounty("Alpha", Some(100.0), 5),
            bounty("gamma", Some(200.0), 5),
        ];
        sort_records(
            &mut records,
            &[
                SortSpec::desc(SortKey::MaxReward),
                SortSpec::asc(SortKey::Project),
            ],
        );
        let order: Vec<&str> = records.iter().map(|r| r.project.as_str()).collect();
        assert_eq!(order, vec!["gamma", "Alpha", "beta"]);
    }

    #[test]
    fn test_languages_compare_by_joined_string() {
        let mut a = bounty("A", None, 1);
        a.languages = vec!["Go".to_string(), "Rust".to_string()];
        let mut b = bounty("B", None, 1);
        b.languages = vec!["Rust".to_string()];

        let mut records = vec![b, a];
        sort_records(&mut records, &[SortSpec::asc(SortKey::Languages)]);
        // "Go, Rust" < "Rust" despite having more elements.
        assert_eq!(records[0].project, "A");
    }

    #[test]
    fn test_rating_sort_is_derived() {
        let mut liked = bounty("Liked", None, 1);
        liked.likes = vec!["u1".to_string(), "u2".to_string()];
        let mut disliked = bounty("Disliked", None, 1);
        disliked.dislikes = vec!["u3".to_string()];

        let mut records = vec![disliked, liked];
        sort_records(&mut records, &[SortSpec::desc(SortKey::Rating)]);
        assert_eq!(records[0].project, "Liked");
    }

    #[test]
    fn test_empty_spec_preserves_order() {
        let mut records = vec![bounty("B", None, 2), bounty("A", None, 1)];
        sort_records(&mut records, &[]);
        assert_eq!(records[0].project, "B");
    }

    #[test]
    fn test_sort_key_wire_names() {
        let json = serde_json::to_string(&SortKey::StartDate).unwrap();
        assert_eq!(json, "\"startDate\"");
        let parsed: SortKey = serde_json::from_str("\"maxReward\"").unwrap();
        assert_eq!(parsed, SortKey::MaxReward);
    }
}
