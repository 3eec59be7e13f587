//! Quarter-over-quarter trend computation.

use crate::bucket::quarter_of;
use crate::series::TimeSeries;
use chrono::{Datelike, NaiveDate};
use serde::Serialize;
use std::fmt;
use tracing::instrument;

/// A calendar quarter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct QuarterRef {
    /// Calendar year.
    pub year: i32,
    /// Quarter within the year, 1 through 4.
    pub quarter: u32,
}

impl QuarterRef {
    /// The quarter containing a date.
    pub fn containing(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            quarter: quarter_of(date),
        }
    }

    /// The immediately preceding quarter.
    pub fn previous(self) -> Self {
        if self.quarter == 1 {
            Self {
                year: self.year - 1,
                quarter: 4,
            }
        } else {
            Self {
                year: self.year,
                quarter: self.quarter - 1,
            }
        }
    }

    /// True when the date falls in this quarter.
    pub fn contains(self, date: NaiveDate) -> bool {
        date.year() == self.year && quarter_of(date) == self.quarter
    }
}

impl fmt::Display for QuarterRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Q{} {}", self.quarter, self.year)
    }
}

/// Result of a trend computation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub enum TrendOutcome {
    /// Percentage change from the baseline quarter to the previous quarter.
    Change(f64),
    /// The baseline quarter had no activity, so no percentage exists.
    /// Consumers render "not enough data", never infinity or NaN.
    InsufficientData,
}

/// A computed quarter-over-quarter trend with the quarters it compares.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct QuarterlyTrend {
    /// The more recent of the two compared quarters (last full quarter).
    pub previous: QuarterRef,
    /// The quarter before that, serving as the baseline.
    pub baseline: QuarterRef,
    /// The computed change.
    pub outcome: TrendOutcome,
}

/// Compares the two most recent completed quarters.
///
/// The window is a fixed two-quarter lag behind the quarter containing
/// `today`: the current, still-running quarter never participates. The
/// reference date is a parameter so the computation stays pure.
#[instrument(skip(series))]
pub fn quarter_over_quarter(series: &[TimeSeries], today: NaiveDate) -> QuarterlyTrend {
    let previous = QuarterRef::containing(today).previous();
    let baseline = previous.previous();

    let mut previous_total = 0.0;
    let mut baseline_total = 0.0;
    for s in series {
        for point in &s.data {
            if previous.contains(point.date) {
                previous_total += point.value;
            } else if baseline.contains(point.date) {
                baseline_total += point.value;
            }
        }
    }

    let outcome = if baseline_total == 0.0 {
        TrendOutcome::InsufficientData
    } else {
        TrendOutcome::Change((previous_total - baseline_total) / baseline_total * 100.0)
    };

    QuarterlyTrend {
        previous,
        baseline,
        outcome,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::series::SeriesPoint;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn series(name: &str, points: &[(i32, u32, u32, f64)]) -> TimeSeries {
        TimeSeries {
            name: name.to_string(),
            data: points
                .iter()
                .map(|&(y, m, d, value)| SeriesPoint {
                    date: date(y, m, d),
                    value,
                })
                .collect(),
        }
    }

    #[test]
    fn test_quarter_window_selection() {
        // Mid Q3 2024: compares Q2 2024 against Q1 2024.
        let trend = quarter_over_quarter(&[], date(2024, 8, 15));
        assert_eq!(trend.previous, QuarterRef { year: 2024, quarter: 2 });
        assert_eq!(trend.baseline, QuarterRef { year: 2024, quarter: 1 });
    }

    #[test]
    fn test_quarter_window_wraps_year_boundary() {
        // Q1 2025: compares Q4 2024 against Q3 2024.
        let trend = quarter_over_quarter(&[], date(2025, 2, 1));
        assert_eq!(trend.previous, QuarterRef { year: 2024, quarter: 4 });
        assert_eq!(trend.baseline, QuarterRef { year: 2024, quarter: 3 });
    }

    #[test]
    fn test_positive_trend() {
        let input = [
            series("Rust", &[(2024, 1, 10, 100.0), (2024, 5, 1, 130.0)]),
            series("Go", &[(2024, 2, 1, 100.0), (2024, 6, 1, 170.0)]),
        ];
        let trend = quarter_over_quarter(&input, date(2024, 8, 15));
        // Q1 total 200, Q2 total 300.
        assert_eq!(trend.outcome, TrendOutcome::Change(50.0));
    }

    #[test]
    fn test_negative_trend() {
        let input = [series("Rust", &[(2024, 1, 10, 200.0), (2024, 5, 1, 150.0)])];
        let trend = quarter_over_quarter(&input, date(2024, 8, 15));
        assert_eq!(trend.outcome, TrendOutcome::Change(-25.0));
    }

    #[test]
    fn test_zero_baseline_is_insufficient_data() {
        // Activity only in the previous quarter; baseline empty.
        let input = [series("Rust", &[(2024, 5, 1, 150.0)])];
        let trend = quarter_over_quarter(&input, date(2024, 8, 15));
        assert_eq!(trend.outcome, TrendOutcome::InsufficientData);
    }

    #[test]
    fn test_current_quarter_is_ignored() {
        // Only activity in the running quarter: nothing to compare.
        let input = [series("Rust", &[(2024, 8, 1, 999.0)])];
        let trend = quarter_over_quarter(&input, date(2024, 8, 15));
        assert_eq!(trend.outcome, TrendOutcome::InsufficientData);
    }

    #[test]
    fn test_quarter_labels() {
        assert_eq!(
            QuarterRef { year: 2024, quarter: 3 }.to_string(),
            "Q3 2024"
        );
    }
}
