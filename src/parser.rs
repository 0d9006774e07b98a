//! Main `FileParser` builder and parse methods.

use std::fs;
use std::path::Path;

use crate::error::Result;
use crate::format::{FileFormat, UNKNOWN_FILENAME};
use crate::normalize::normalize_rows;
use crate::result::ParseResult;

/// Tabular file parser with heuristic date normalization.
///
/// Each parse is a pure function of `(filename, bytes)`: detection picks a
/// parser variant from the extension, the parser produces rows, and the date
/// normalizer rewrites date-shaped string fields. No state is shared between
/// invocations.
///
/// # Example
///
/// ```
/// use datanorm::FileParser;
///
/// let parser = FileParser::new();
/// let result = parser
///     .parse_bytes(Some("ledger.csv"), b"date,amount\n05/03/2024,12.50\n")
///     .unwrap();
///
/// assert_eq!(result.rows[0]["date"], "2024-03-05");
/// assert_eq!(result.rows[0]["amount"], "12.50");
/// ```
#[derive(Debug, Clone)]
pub struct FileParser {
    /// Whether date-shaped string fields are rewritten to `YYYY-MM-DD`.
    normalize_dates: bool,
}

impl Default for FileParser {
    fn default() -> Self {
        Self::new()
    }
}

impl FileParser {
    /// Create a new `FileParser` with date normalization enabled.
    pub fn new() -> Self {
        Self {
            normalize_dates: true,
        }
    }

    /// Enable or disable the date normalization pass.
    pub fn normalize_dates(&mut self, normalize: bool) -> &mut Self {
        self.normalize_dates = normalize;
        self
    }

    /// Parse a file on disk; the format is detected from the path's filename.
    pub fn parse_path<P: AsRef<Path>>(&self, path: P) -> Result<ParseResult> {
        let path = path.as_ref();
        let filename = path.file_name().and_then(|name| name.to_str());
        let data = fs::read(path)?;
        self.parse_bytes(filename, &data)
    }

    /// Parse in-memory file content.
    ///
    /// A missing filename is treated as the placeholder `"unknown"`, which
    /// fails detection with [`ParseError::UnsupportedFormat`]. Every failure
    /// aborts the whole parse; there is no partial result.
    ///
    /// [`ParseError::UnsupportedFormat`]: crate::ParseError::UnsupportedFormat
    pub fn parse_bytes(&self, filename: Option<&str>, data: &[u8]) -> Result<ParseResult> {
        let filename = filename.unwrap_or(UNKNOWN_FILENAME);
        let format = FileFormat::from_filename(filename)?;

        let rows = format.parser()(data)?;
        let rows = if self.normalize_dates {
            normalize_rows(rows)
        } else {
            rows
        };

        Ok(ParseResult::new(filename.to_string(), format, rows))
    }
}
