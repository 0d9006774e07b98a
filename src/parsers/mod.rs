//! Per-format row parsers.
//!
//! Each parser is an independent strategy sharing one contract:
//! `bytes -> rows | ParseError`. Dispatch lives in
//! [`FileFormat::parser`](crate::FileFormat); no parser depends on another.

pub(crate) mod csv;
pub(crate) mod excel;
pub(crate) mod json;
pub(crate) mod text;

use serde_json::Value;

use crate::result::Row;

/// Pair header names with value fields positionally.
///
/// Short rows are padded with empty strings and fields beyond the header
/// count are dropped, never an error. Duplicate header names collapse to the
/// last occurrence (map semantics).
pub(crate) fn zip_row(headers: &[String], fields: &[String]) -> Value {
    let mut row = Row::new();
    for (i, header) in headers.iter().enumerate() {
        let value = fields.get(i).cloned().unwrap_or_default();
        row.insert(header.clone(), Value::String(value));
    }
    Value::Object(row)
}
