//! Freeform delimited-text parser.
//!
//! Hand-parsed on purpose, with no delimiter inference library: the
//! delimiter is decided exactly once from the first line (tab wins over
//! comma) and applies to the whole file. This is a lenient, best-effort
//! parser; only an undecodable input is an error.

use serde_json::Value;

use super::zip_row;
use crate::encoding::decode_utf8;
use crate::error::{ParseError, Result};
use crate::format::FileFormat;

/// Parse delimited text bytes into rows keyed by the first line's fields.
pub(crate) fn parse_rows(data: &[u8]) -> Result<Vec<Value>> {
    let text = decode_utf8(data).map_err(|e| ParseError::failure(FileFormat::Text, e))?;

    let cleaned = text.replace('\r', "");
    let lines: Vec<&str> = cleaned
        .split('\n')
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect();

    let Some((first, data_lines)) = lines.split_first() else {
        return Ok(Vec::new());
    };

    // One global decision for the whole file, from the first line only
    let delimiter = if first.contains('\t') { '\t' } else { ',' };

    let headers = split_fields(first, delimiter);

    Ok(data_lines
        .iter()
        .map(|line| zip_row(&headers, &split_fields(line, delimiter)))
        .collect())
}

/// Split one line on the delimiter, trimming whitespace around every field.
fn split_fields(line: &str, delimiter: char) -> Vec<String> {
    line.split(delimiter)
        .map(|field| field.trim().to_string())
        .collect()
}
