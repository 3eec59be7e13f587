//! Bucketed aggregation of time series into chart-ready tables.

use crate::bucket::BucketUnit;
use crate::series::TimeSeries;
use serde::Serialize;
use std::collections::{BTreeMap, BTreeSet, HashMap};
use tracing::{debug, instrument};

/// One chart row: a period label and every category's summed value for it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartRow {
    /// Period label (`2024.03`, `2024.Q1`, or `2024`).
    pub period: String,
    /// Value per category; zero where the category had no events.
    pub values: BTreeMap<String, f64>,
}

impl ChartRow {
    /// The value for one category; zero when the category is unknown.
    pub fn value(&self, category: &str) -> f64 {
        self.values.get(category).copied().unwrap_or(0.0)
    }
}

/// A regular, gap-filled table: one row per period, one column per
/// category, ascending by period.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartTable {
    /// Category names, in input series order.
    pub categories: Vec<String>,
    /// Rows in ascending period order.
    pub rows: Vec<ChartRow>,
}

impl ChartTable {
    /// An empty table, the output for empty input.
    pub fn empty() -> Self {
        Self {
            categories: vec![],
            rows: vec![],
        }
    }

    /// True when there is nothing to chart; consumers render an explicit
    /// "no data" state for this rather than an empty plot.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Sum of every value in the table.
    pub fn total(&self) -> f64 {
        self.rows
            .iter()
            .flat_map(|row| row.values.values())
            .sum()
    }

    /// The largest single category value in any bucket.
    pub fn max_category_value(&self) -> f64 {
        self.rows
            .iter()
            .flat_map(|row| row.values.values())
            .fold(0.0_f64, |acc, v| acc.max(*v))
    }
}

/// Aggregates per-event series into a bucketed, zero-filled table.
///
/// Points sharing a bucket are summed; the engine never expands date
/// ranges, so events spanning several periods must arrive pre-expanded as
/// one point per active period. The timeline runs from the earliest to the
/// latest event date across all series, stepped by calendar increments, so
/// periods without events still appear as all-zero rows.
#[instrument(skip(series), fields(series_count = series.len()))]
pub fn aggregate(series: &[TimeSeries], unit: BucketUnit) -> ChartTable {
    let active: Vec<&TimeSeries> = series.iter().filter(|s| !s.data.is_empty()).collect();
    if active.is_empty() {
        return ChartTable::empty();
    }

    let mut labels: BTreeSet<String> = BTreeSet::new();
    let mut sums: Vec<(String, HashMap<String, f64>)> = Vec::with_capacity(active.len());
    for s in &active {
        let mut grouped: HashMap<String, f64> = HashMap::new();
        for point in &s.data {
            *grouped.entry(unit.label(point.date)).or_insert(0.0) += point.value;
        }
        labels.extend(grouped.keys().cloned());
        sums.push((s.name.clone(), grouped));
    }

    // Generate the full timeline, then union with the labels that carry
    // data in case anything falls outside the generated span.
    let earliest = active
        .iter()
        .flat_map(|s| s.data.iter().map(|p| p.date))
        .min()
        .expect("non-empty series");
    let latest = active
        .iter()
        .flat_map(|s| s.data.iter().map(|p| p.date))
        .max()
        .expect("non-empty series");

    let mut cursor = unit.period_start(earliest);
    while cursor <= latest {
        labels.insert(unit.label(cursor));
        cursor = unit.advance(cursor);
    }

    let categories: Vec<String> = active.iter().map(|s| s.name.clone()).collect();
    let rows: Vec<ChartRow> = labels
        .into_iter()
        .map(|period| {
            let values: BTreeMap<String, f64> = sums
                .iter()
                .map(|(name, grouped)| {
                    (name.clone(), grouped.get(&period).copied().unwrap_or(0.0))
                })
                .collect();
            ChartRow { period, values }
        })
        .collect();

    debug!(
        rows = rows.len(),
        categories = categories.len(),
        "aggregated chart table"
    );
    ChartTable { categories, rows }
}
