//! datanorm: tabular file parsing with heuristic date normalization
//!
//! Accepts the raw bytes of an uploaded CSV, Excel, JSON, or delimited text
//! file, parses it into a uniform row-oriented representation, and rewrites
//! string fields that look like dates into canonical `YYYY-MM-DD` form.
//!
//! # Quick Start
//!
//! ```
//! use datanorm::FileParser;
//!
//! let parser = FileParser::new();
//!
//! let result = parser
//!     .parse_bytes(Some("ledger.csv"), b"date,amount\n05/03/2024,12.50\n")
//!     .unwrap();
//!
//! assert_eq!(result.file_type, datanorm::FileFormat::Csv);
//! assert_eq!(result.rows[0]["date"], "2024-03-05");
//! ```
//!
//! # The pipeline
//!
//! Two stages, leaves first:
//!
//! 1. Format detection is extension-only (`.csv`, `.xlsx`/`.xls`, `.json`,
//!    `.txt`), selecting one of four independent row parsers that share the
//!    contract `bytes -> rows | ParseError`. Every cell from the tabular
//!    parsers stays a raw string; nothing is type-inferred.
//! 2. The date normalizer post-processes the rows from any parser, rewriting
//!    values that match a structural date shape and parse under a fixed,
//!    ordered template list. Values that match no template pass through
//!    silently; the normalizer never fails.
//!
//! Each parse is synchronous and self-contained: a pure function of
//! `(filename, bytes)` with no shared mutable state, no streaming, and no
//! partial results on failure.

mod encoding;
mod error;
mod format;
mod normalize;
mod parser;
mod parsers;
mod result;

pub use error::{ParseError, Result};
pub use format::{FileFormat, UNKNOWN_FILENAME};
pub use normalize::{normalize_date, normalize_rows};
pub use parser::FileParser;
pub use result::{ParseResult, Row};

// Re-export for advanced usage
pub use encoding::{decode_utf8, is_utf8};
