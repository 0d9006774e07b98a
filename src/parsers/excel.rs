//! Spreadsheet row parser backed by `calamine`.

use std::io::Cursor;

use calamine::{open_workbook_auto_from_rs, Data, DataType, Reader};
use serde_json::Value;

use super::zip_row;
use crate::error::{ParseError, Result};
use crate::format::FileFormat;

/// Parse workbook bytes into rows from the first sheet only.
///
/// The first grid row is the header. Every cell is coerced to its string
/// form; numeric and date cells are not auto-converted beyond that.
pub(crate) fn parse_rows(data: &[u8]) -> Result<Vec<Value>> {
    let mut workbook = open_workbook_auto_from_rs(Cursor::new(data))
        .map_err(|e| ParseError::failure(FileFormat::Excel, e))?;

    let range = workbook
        .worksheet_range_at(0)
        .ok_or_else(|| ParseError::failure(FileFormat::Excel, "workbook has no sheets"))?
        .map_err(|e| ParseError::failure(FileFormat::Excel, e))?;

    let grid: Vec<Vec<String>> = range
        .rows()
        .map(|cells| cells.iter().map(cell_to_string).collect())
        .collect();

    Ok(rows_from_grid(grid))
}

/// Key data rows by the first grid row, positionally.
fn rows_from_grid(grid: Vec<Vec<String>>) -> Vec<Value> {
    let mut rows = grid.into_iter();
    let Some(headers) = rows.next() else {
        return Vec::new();
    };

    rows.map(|fields| zip_row(&headers, &fields)).collect()
}

/// Coerce any cell to its string form; empty cells become `""`.
fn cell_to_string(cell: &Data) -> String {
    match cell {
        Data::Empty => String::new(),
        Data::String(s) => s.clone(),
        other => other.as_string().unwrap_or_else(|| other.to_string()),
    }
}
