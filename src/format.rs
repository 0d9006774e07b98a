use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{ParseError, Result};
use crate::parsers;

/// Placeholder used when the caller provides no filename.
///
/// It carries no extension, so detection on it always fails with
/// [`ParseError::UnsupportedFormat`].
pub const UNKNOWN_FILENAME: &str = "unknown";

/// Supported input formats, detected from the filename extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FileFormat {
    /// Comma-separated values.
    Csv,
    /// Excel workbook (`.xlsx` or `.xls`), first sheet only.
    Excel,
    /// JSON document.
    Json,
    /// Freeform delimited text (tab or comma).
    Text,
}

impl FileFormat {
    /// Detect the format from a filename by case-insensitive suffix match.
    ///
    /// Detection is extension-only; no content sniffing is performed.
    pub fn from_filename(filename: &str) -> Result<Self> {
        let lower = filename.to_lowercase();
        if lower.ends_with(".csv") {
            Ok(FileFormat::Csv)
        } else if lower.ends_with(".xlsx") || lower.ends_with(".xls") {
            Ok(FileFormat::Excel)
        } else if lower.ends_with(".json") {
            Ok(FileFormat::Json)
        } else if lower.ends_with(".txt") {
            Ok(FileFormat::Text)
        } else {
            Err(ParseError::UnsupportedFormat(filename.to_string()))
        }
    }

    /// The row parser for this format.
    ///
    /// All four parsers share the contract `bytes -> rows | ParseError`.
    pub(crate) fn parser(self) -> fn(&[u8]) -> Result<Vec<Value>> {
        match self {
            FileFormat::Csv => parsers::csv::parse_rows,
            FileFormat::Excel => parsers::excel::parse_rows,
            FileFormat::Json => parsers::json::parse_rows,
            FileFormat::Text => parsers::text::parse_rows,
        }
    }
}

impl fmt::Display for FileFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FileFormat::Csv => write!(f, "CSV"),
            FileFormat::Excel => write!(f, "Excel"),
            FileFormat::Json => write!(f, "JSON"),
            FileFormat::Text => write!(f, "text"),
        }
    }
}
