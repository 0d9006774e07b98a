//! CSV row parser backed by the `csv` crate.

use serde_json::Value;

use super::zip_row;
use crate::encoding::skip_bom;
use crate::error::{ParseError, Result};
use crate::format::FileFormat;

/// Parse CSV bytes into rows keyed by the header row's column names.
///
/// Every cell stays a raw string; no type inference happens here, so a value
/// like `"007"` survives untouched until the date normalizer runs. Any csv
/// error aborts the whole parse; there is no partial result.
pub(crate) fn parse_rows(data: &[u8]) -> Result<Vec<Value>> {
    let mut reader = csv::ReaderBuilder::new().from_reader(skip_bom(data));

    let headers: Vec<String> = reader
        .headers()
        .map_err(|e| ParseError::failure(FileFormat::Csv, e))?
        .iter()
        .map(str::to_string)
        .collect();

    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record.map_err(|e| ParseError::failure(FileFormat::Csv, e))?;
        let fields: Vec<String> = record.iter().map(str::to_string).collect();
        rows.push(zip_row(&headers, &fields));
    }

    Ok(rows)
}
