//! Heuristic date normalization over parsed rows.
//!
//! Runs after any of the row parsers and rewrites every string field that
//! looks like a date into canonical `YYYY-MM-DD` form. There is no
//! column-name targeting; everything else passes through untouched.

use std::sync::LazyLock;

use chrono::{Datelike, NaiveDate};
use regex::Regex;
use serde_json::Value;

/// Canonical output format for every normalized date.
const CANONICAL_FORMAT: &str = "%Y-%m-%d";

/// Date templates tried in fixed priority order; the first template that
/// yields a valid calendar date wins.
///
/// The order is deliberately ambiguity-prone: "03/04/2024" reads as
/// day/month/year here, never month/day/year. Do not reorder. The trailing
/// year-first entry catches ISO-style values written with slashes, like
/// "99/01/01", after every day-first and month-first reading has failed.
const DATE_TEMPLATES: &[&str] = &[
    "%Y-%m-%d",
    "%d/%m/%Y",
    "%m-%d-%Y",
    "%m/%d/%Y",
    "%d-%m-%Y",
    "%Y/%m/%d",
];

/// Structural shape of a date-like value: 1-4 digits, slash-or-hyphen,
/// 1-2 digits, slash-or-hyphen, 1-4 digits. Purely structural; "99/99/9999"
/// still matches and proceeds to the parse attempt.
static DATE_SHAPE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[0-9]{1,4}[/-][0-9]{1,2}[/-][0-9]{1,4}").expect("Invalid date shape pattern")
});

/// Rewrite every date-shaped string field of every row into `YYYY-MM-DD`.
///
/// Applied uniformly to all rows and columns. Non-string values and rows
/// that are not objects pass through untouched, and the output sequence has
/// the same shape and order as the input. Idempotent, and infallible by
/// construction: a value that looks like a date but parses under no template
/// is left unchanged rather than erroring.
pub fn normalize_rows(rows: Vec<Value>) -> Vec<Value> {
    rows.into_iter().map(normalize_row).collect()
}

fn normalize_row(row: Value) -> Value {
    match row {
        Value::Object(mut object) => {
            for (_, value) in object.iter_mut() {
                if let Value::String(s) = value {
                    if let Some(normalized) = normalize_date(s) {
                        *value = Value::String(normalized);
                    }
                }
            }
            Value::Object(object)
        }
        other => other,
    }
}

/// Normalize a single date-shaped value, or return `None` when it should
/// stay as-is (not date-shaped, or no template parses it).
pub fn normalize_date(value: &str) -> Option<String> {
    if !looks_like_date(value) {
        return None;
    }

    DATE_TEMPLATES
        .iter()
        .find_map(|template| NaiveDate::parse_from_str(value, template).ok())
        .and_then(fix_two_digit_year)
        .map(|date| date.format(CANONICAL_FORMAT).to_string())
}

fn looks_like_date(value: &str) -> bool {
    DATE_SHAPE.is_match(value)
}

/// Years below 100 get 2000 added, so "99" becomes 2099, not 1999.
/// Intentional policy carried over unchanged from the original heuristic.
fn fix_two_digit_year(date: NaiveDate) -> Option<NaiveDate> {
    if date.year() < 100 {
        date.with_year(date.year() + 2000)
    } else {
        Some(date)
    }
}
