//! Shared parsing and formatting helpers.

use crate::error::{Result, VigilError};
use chrono::{DateTime, NaiveDate};

/// Parses an ISO-8601 date string into a calendar date.
///
/// Accepts full RFC 3339 timestamps (`2024-01-15T00:00:00.000Z`) and bare
/// dates (`2024-01-15`). Anything else is rejected, never silently
/// defaulted.
pub fn parse_iso_date(input: &str) -> Result<NaiveDate> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(input) {
        return Ok(dt.date_naive());
    }
    NaiveDate::parse_from_str(input, "%Y-%m-%d")
        .map_err(|e| VigilError::data_with_source(format!("unparseable date: {input:?}"), e))
}

/// Formats a monetary value for compact display.
///
/// Values from 1000 upward are abbreviated with two decimals (`12.50k`,
/// `1.20m`); smaller values render as whole numbers.
pub fn format_value(value: f64) -> String {
    const STEPS: [(f64, &str); 3] = [(1e9, "b"), (1e6, "m"), (1e3, "k")];
    for (scale, suffix) in STEPS {
        if value >= scale {
            return format!("{:.2}{}", value / scale, suffix);
        }
    }
    format!("{}", value.round() as i64)
}

/// Truncates a string to a maximum length with ellipsis.
pub fn truncate_string(input: &str, max_length: usize) -> String {
    if input.chars().count() <= max_length {
        input.to_string()
    } else {
        let kept: String = input.chars().take(max_length.saturating_sub(3)).collect();
        format!("{kept}...")
    }
}

/// Joins the first `max` languages for display, summarizing the rest.
///
/// Language order is preserved: the backend lists the dominant language
/// first and tables show it first.
pub fn display_languages(languages: &[String], max: usize) -> String {
    if languages.len() <= max {
        languages.join(", ")
    } else {
        let shown = languages[..max].join(", ");
        format!("{} +{}", shown, languages.len() - max)
    }
}
