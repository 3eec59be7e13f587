//! Axis scaling for chart tables.

use crate::aggregator::ChartTable;
use serde::Serialize;

/// Number of tick marks on the value axis.
const TICK_COUNT: usize = 5;

/// Visual headroom above the tallest value.
const HEADROOM: f64 = 1.1;

/// The value-axis domain for a chart table.
///
/// The domain is linear and non-negative: `min` is always zero and `max`
/// leaves 10% headroom above the largest single category value.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ValueRange {
    /// Lower bound, always zero.
    pub min: f64,
    /// Upper bound with headroom.
    pub max: f64,
}

impl ValueRange {
    /// Computes the axis domain for a table. An empty table yields a
    /// degenerate zero range.
    pub fn from_table(table: &ChartTable) -> Self {
        Self {
            min: 0.0,
            max: table.max_category_value() * HEADROOM,
        }
    }

    /// Exactly five evenly spaced ticks from zero to `max` inclusive,
    /// rounded to the nearest integer.
    pub fn ticks(&self) -> Vec<i64> {
        (0..TICK_COUNT)
            .map(|i| {
                let fraction = i as f64 / (TICK_COUNT - 1) as f64;
                (self.max * fraction).round() as i64
            })
            .collect()
    }
}
