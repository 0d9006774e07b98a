use std::io;
use thiserror::Error;

use crate::format::FileFormat;

/// Error type for file parsing operations.
#[derive(Error, Debug)]
pub enum ParseError {
    /// Filename extension matches none of the supported formats.
    #[error("Unsupported file type: {0}")]
    UnsupportedFormat(String),

    /// The selected parser could not interpret the byte content.
    #[error("Failed to parse {format}: {message}")]
    ParseFailure {
        /// Format the failing parser was selected for.
        format: FileFormat,
        /// Diagnostic message from the underlying parser.
        message: String,
    },

    /// JSON decoded successfully but the top level is a bare scalar.
    #[error("Unexpected JSON structure")]
    UnexpectedStructure,

    /// IO error while reading input files.
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// Any other unanticipated fault during pipeline execution.
    #[error("Internal error: {0}")]
    Internal(String),
}

impl ParseError {
    /// Build a [`ParseError::ParseFailure`] for the given format from any
    /// displayable cause.
    pub fn failure(format: FileFormat, cause: impl std::fmt::Display) -> Self {
        ParseError::ParseFailure {
            format,
            message: cause.to_string(),
        }
    }
}

/// Result type alias for parsing operations.
pub type Result<T> = std::result::Result<T, ParseError>;
