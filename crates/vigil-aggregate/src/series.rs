//! Time series ingestion and category selection.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::debug;
use vigil_common::{utils::parse_iso_date, Result};

/// One point of a series as received from the backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawPoint {
    /// ISO-8601 date string, validated at ingestion.
    pub date: String,
    /// Event value (a count or a reward amount).
    pub value: f64,
}

/// A named series as received from the backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawSeries {
    /// Category name (a language or a platform).
    pub name: String,
    /// Per-event points, irregularly timestamped.
    pub data: Vec<RawPoint>,
}

/// One validated point.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SeriesPoint {
    /// Event date.
    pub date: NaiveDate,
    /// Event value.
    pub value: f64,
}

/// A validated series ready for aggregation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimeSeries {
    /// Category name (a language or a platform).
    pub name: String,
    /// Validated points.
    pub data: Vec<SeriesPoint>,
}

/// Validates raw series into aggregation-ready form.
///
/// Series with no points are skipped entirely: they contribute neither a
/// category column nor a timeline bound. An unparseable date anywhere fails
/// the whole ingestion, naming the series and the offending string.
pub fn ingest(raw: Vec<RawSeries>) -> Result<Vec<TimeSeries>> {
    let mut out = Vec::with_capacity(raw.len());
    for series in raw {
        if series.data.is_empty() {
            debug!(name = %series.name, "skipping series with no data");
            continue;
        }
        let mut data = Vec::with_capacity(series.data.len());
        for point in &series.data {
            let date = parse_iso_date(&point.date).map_err(|e| {
                vigil_common::VigilError::data(format!(
                    "series {:?}: {e}",
                    series.name
                ))
            })?;
            data.push(SeriesPoint {
                date,
                value: point.value,
            });
        }
        out.push(TimeSeries {
            name: series.name,
            data,
        });
    }
    Ok(out)
}

/// Which categories a chart currently shows.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum CategoryFilter {
    /// Every category.
    All,
    /// Only the named categories.
    Only(Vec<String>),
}

impl CategoryFilter {
    /// Returns true when the named category is selected.
    pub fn passes(&self, name: &str) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(names) => names.iter().any(|n| n == name),
        }
    }
}

/// Keeps only the series whose category is selected.
pub fn select_series(series: &[TimeSeries], filter: &CategoryFilter) -> Vec<TimeSeries> {
    series
        .iter()
        .filter(|s| filter.passes(&s.name))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw(name: &str, points: &[(&str, f64)]) -> RawSeries {
        RawSeries {
            name: name.to_string(),
            data: points
                .iter()
                .map(|(date, value)| RawPoint {
                    date: (*date).to_string(),
                    value: *value,
                })
                .collect(),
        }
    }

    #[test]
    fn test_ingest_parses_dates() {
        let series = ingest(vec![raw(
            "Rust",
            &[("2024-01-15T00:00:00.000Z", 100.0), ("2024-01-20", 50.0)],
        )])
        .unwrap();

        assert_eq!(series.len(), 1);
        assert_eq!(series[0].data[0].date.to_string(), "2024-01-15");
        assert_eq!(series[0].data[1].date.to_string(), "2024-01-20");
    }

    #[test]
    fn test_ingest_skips_empty_series() {
        let series = ingest(vec![
            raw("Empty", &[]),
            raw("Rust", &[("2024-01-15", 1.0)]),
        ])
        .unwrap();

        assert_eq!(series.len(), 1);
        assert_eq!(series[0].name, "Rust");
    }

    #[test]
    fn test_ingest_fails_loudly_on_bad_date() {
        let err = ingest(vec![raw("Rust", &[("soon", 1.0)])]).unwrap_err();
        let message = err.to_string();
        assert!(message.contains("Rust"));
        assert!(message.contains("soon"));
    }

    #[test]
    fn test_category_selection() {
        let series = ingest(vec![
            raw("Rust", &[("2024-01-01", 1.0)]),
            raw("Go", &[("2024-01-01", 2.0)]),
        ])
        .unwrap();

        let all = select_series(&series, &CategoryFilter::All);
        assert_eq!(all.len(), 2);

        let only = select_series(&series, &CategoryFilter::Only(vec!["Go".to_string()]));
        assert_eq!(only.len(), 1);
        assert_eq!(only[0].name, "Go");
    }
}
