use serde::Serialize;
use serde_json::Value;

use crate::format::FileFormat;

/// One record as a mapping of column name to cell value.
///
/// The CSV, Excel, and text parsers always produce string cells. JSON input
/// may contribute rows with heterogeneous keys and non-string values, and a
/// JSON array element that is not an object at all is carried through
/// literally, which is why [`ParseResult::rows`] holds bare [`Value`]s.
pub type Row = serde_json::Map<String, Value>;

/// The outcome of parsing one uploaded file.
///
/// Created once per parse, immutable after construction, and serialized to
/// the wire as `{"filename", "fileType", "rows"}`.
#[derive(Debug, Clone, Serialize)]
pub struct ParseResult {
    /// The filename the caller supplied (or the `"unknown"` placeholder).
    pub filename: String,
    /// Format selected by extension detection.
    #[serde(rename = "fileType")]
    pub file_type: FileFormat,
    /// Parsed rows, in input order.
    pub rows: Vec<Value>,
}

impl ParseResult {
    /// Create a new `ParseResult`.
    pub const fn new(filename: String, file_type: FileFormat, rows: Vec<Value>) -> Self {
        Self {
            filename,
            file_type,
            rows,
        }
    }
}
