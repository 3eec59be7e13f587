//! Integration tests for the filter → sort → paginate pipeline, exercising
//! it the way a table view does.

use chrono::{TimeZone, Utc};
use vigil_common::{ContestRecord, Platform, ProgramStatus};
use vigil_pipeline::{
    default_sort, run_query, FilterState, Pager, SortKey, SortSpec,
};

fn contest(
    project: &str,
    platform: Platform,
    status: ProgramStatus,
    languages: &[&str],
    max_reward: Option<f64>,
    start_day: u32,
) -> ContestRecord {
    ContestRecord {
        id: format!("id-{project}"),
        project: project.to_string(),
        slug: project.to_lowercase(),
        platform,
        image_url: String::new(),
        original_url: String::new(),
        languages: languages.iter().map(|s| s.to_string()).collect(),
        max_reward,
        rewards_pool: None,
        rewards_token: None,
        paid: None,
        start_date: Utc.with_ymd_and_hms(2024, 1, start_day, 0, 0, 0).unwrap(),
        end_date: Utc.with_ymd_and_hms(2024, 2, start_day, 0, 0, 0).unwrap(),
        evaluation_end_date: None,
        status,
        likes: vec![],
        dislikes: vec![],
    }
}

#[test]
fn test_table_view_flow() {
    let records: Vec<ContestRecord> = (1..=28)
        .map(|day| {
            let status = if day % 2 == 0 {
                ProgramStatus::Ongoing
            } else {
                ProgramStatus::Finished
            };
            contest(
                &format!("Project {day:02}"),
                Platform::Sherlock,
                status,
                &["Solidity"],
                Some(f64::from(day) * 1000.0),
                day,
            )
        })
        .collect();

    // Audits default bias: only upcoming/ongoing remain.
    let filters = FilterState::audits_default();
    let result = run_query(&records, &filters, &default_sort());
    assert_eq!(result.len(), 14);
    assert!(result
        .iter()
        .all(|r| r.status == ProgramStatus::Ongoing));

    // Newest first.
    assert_eq!(result[0].project, "Project 28");

    // First page is clamped to what survived filtering.
    let pager = Pager::new();
    assert_eq!(pager.visible(&result).len(), 14);
}

#[test]
fn test_pagination_over_filtered_sorted_set() {
    let records: Vec<ContestRecord> = (1u32..=45)
        .map(|i| {
            contest(
                &format!("P{i}"),
                Platform::CodeHawks,
                ProgramStatus::Ongoing,
                &[],
                None,
                (i % 28) + 1,
            )
        })
        .collect();

    let result = run_query(&records, &FilterState::default(), &default_sort());
    assert_eq!(result.len(), 45);

    let mut pager = Pager::new();
    assert_eq!(pager.visible(&result).len(), 20);
    pager.load_more();
    assert_eq!(pager.visible(&result).len(), 40);
    pager.load_more();
    assert_eq!(pager.visible(&result).len(), 45);
    assert!(pager.is_exhausted(result.len()));
}

#[test]
fn test_reward_ceiling_with_sort() {
    let records = vec![
        contest("Acme", Platform::Cantina, ProgramStatus::Ongoing, &["Rust"], Some(1000.0), 1),
        contest("Beta", Platform::Cantina, ProgramStatus::Ongoing, &["Go"], Some(5000.0), 2),
        contest("NoCap", Platform::Cantina, ProgramStatus::Ongoing, &["Go"], None, 3),
    ];

    let filters = FilterState {
        max_reward: Some(2000.0),
        ..FilterState::default()
    };
    let result = run_query(&records, &filters, &[SortSpec::desc(SortKey::MaxReward)]);

    // Beta exceeds the ceiling; NoCap has no provable reward.
    assert_eq!(result.len(), 1);
    assert_eq!(result[0].project, "Acme");
}

#[test]
fn test_combined_predicates_are_anded() {
    let records = vec![
        contest("Acme Vault", Platform::Sherlock, ProgramStatus::Ongoing, &["Rust"], Some(900.0), 1),
        contest("Acme Bridge", Platform::Cantina, ProgramStatus::Ongoing, &["Rust"], Some(900.0), 2),
        contest("Beta Vault", Platform::Sherlock, ProgramStatus::Ongoing, &["Rust"], Some(900.0), 3),
    ];

    let filters = FilterState {
        search: "acme".to_string(),
        platforms: vec![Platform::Sherlock],
        languages: vec!["Rust".to_string()],
        max_reward: Some(1000.0),
        ..FilterState::default()
    };
    let result = run_query(&records, &filters, &default_sort());
    assert_eq!(result.len(), 1);
    assert_eq!(result[0].project, "Acme Vault");
}

#[test]
fn test_zero_match_filter_is_valid_result() {
    let records = vec![contest(
        "Acme",
        Platform::Cantina,
        ProgramStatus::Ongoing,
        &[],
        None,
        1,
    )];
    let filters = FilterState {
        search: "no such project".to_string(),
        ..FilterState::default()
    };
    let result = run_query(&records, &filters, &default_sort());
    assert!(result.is_empty());
}
