// SPDX-License-Identifier: MPL-2.0
//! Calendar date parsing and display for artwork records.
//!
//! Dates are plain calendar days. They are never converted through a time
//! zone, so `2025-08-04` always displays as August 4 regardless of where the
//! gallery runs.

use chrono::NaiveDate;

/// Wire format used by catalog files.
pub const CATALOG_DATE_FORMAT: &str = "%Y-%m-%d";

/// Parses a `YYYY-MM-DD` date as a local calendar day.
#[must_use]
pub fn parse_date(value: &str) -> Option<NaiveDate> {
    let trimmed = value.trim();
    if trimmed.len() != 10 {
        return None;
    }
    NaiveDate::parse_from_str(trimmed, CATALOG_DATE_FORMAT).ok()
}

/// Formats a date in long en-US form, e.g. `August 4, 2025`.
#[must_use]
pub fn format_long_date(date: NaiveDate) -> String {
    date.format("%B %-d, %Y").to_string()
}
