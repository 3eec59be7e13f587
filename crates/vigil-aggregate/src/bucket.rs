//! Bucket label derivation and calendar stepping.

use chrono::{Datelike, Months, NaiveDate};
use serde::{Deserialize, Serialize};

/// Granularity of a chart bucket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BucketUnit {
    /// One calendar month per bucket.
    Month,
    /// One calendar quarter per bucket.
    Quarter,
    /// One calendar year per bucket.
    Year,
}

impl BucketUnit {
    /// Deterministic, locale-independent period label for a date.
    ///
    /// Month → `YYYY.MM`, quarter → `YYYY.Q{1-4}`, year → `YYYY`. Labels of
    /// one unit sort lexicographically in chronological order.
    pub fn label(self, date: NaiveDate) -> String {
        match self {
            BucketUnit::Month => format!("{:04}.{:02}", date.year(), date.month()),
            BucketUnit::Quarter => format!("{:04}.Q{}", date.year(), quarter_of(date)),
            BucketUnit::Year => format!("{:04}", date.year()),
        }
    }

    /// First day of the bucket containing `date`.
    pub fn period_start(self, date: NaiveDate) -> NaiveDate {
        let (year, month) = match self {
            BucketUnit::Month => (date.year(), date.month()),
            BucketUnit::Quarter => (date.year(), (quarter_of(date) - 1) * 3 + 1),
            BucketUnit::Year => (date.year(), 1),
        };
        // Day 1 of a valid month always exists.
        NaiveDate::from_ymd_opt(year, month, 1).expect("first day of month")
    }

    /// First day of the next bucket.
    ///
    /// Uses calendar increments (one month, three months, one year) rather
    /// than fixed-day arithmetic, so stepping never drifts across months of
    /// unequal length.
    pub fn advance(self, period_start: NaiveDate) -> NaiveDate {
        match self {
            BucketUnit::Month => period_start + Months::new(1),
            BucketUnit::Quarter => period_start + Months::new(3),
            BucketUnit::Year => period_start + Months::new(12),
        }
    }
}

/// Calendar quarter of a date, 1 through 4.
pub fn quarter_of(date: NaiveDate) -> u32 {
    date.month0() / 3 + 1
}
