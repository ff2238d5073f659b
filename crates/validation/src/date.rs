//! Calendar-date parsing for extracted date strings.
//!
//! Parsing never consults the process locale or timezone. A string that
//! matches none of the accepted forms is simply `None`; rules that need a
//! date skip their comparison in that case.

use std::sync::LazyLock;

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use regex::Regex;

/// `YYYY-MM-DD` with ASCII digits, nothing before or after.
static CANONICAL_DATE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]{4}-[0-9]{2}-[0-9]{2}$").expect("static regex"));

/// Date-only forms, tried in order.
const DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%m/%d/%Y", "%B %d, %Y"];

/// Whether `s` has the exact canonical `YYYY-MM-DD` shape.
///
/// Shape only: `2024-02-30` passes here and fails [`parse_calendar_date`].
pub fn is_canonical_date(s: &str) -> bool {
    CANONICAL_DATE.is_match(s)
}

/// Parse an extracted date string into a calendar date.
///
/// Accepted forms: `YYYY-MM-DD`, RFC 3339 date-times (the date in the
/// string's own offset), `YYYY-MM-DDTHH:MM:SS`, `MM/DD/YYYY`,
/// `Month D, YYYY` (English month names).
pub fn parse_calendar_date(s: &str) -> Option<NaiveDate> {
    let s = s.trim();
    if s.is_empty() {
        return None;
    }

    if let Some(date) = DATE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(s, fmt).ok())
    {
        return Some(date);
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.date_naive());
    }

    NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S")
        .ok()
        .map(|dt| dt.date())
}
