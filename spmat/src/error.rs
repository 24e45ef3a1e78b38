//! Error type for file I/O and the command line driver

use std::io;
use std::path::PathBuf;

use spmat_core::{ErrorCategory, SpmatError};
use thiserror::Error;

/// Result type alias using spmat's Error
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised while loading, combining or saving matrices
#[derive(Error, Debug)]
pub enum Error {
    /// Malformed header or entry line
    #[error("line {line}: {source}: `{content}`")]
    Format {
        /// 1-based line number
        line: usize,
        /// The offending line, trimmed
        content: String,
        #[source]
        source: SpmatError,
    },

    /// Input ended before the header was complete
    #[error("{source} (input ended after {lines} lines)")]
    Truncated {
        lines: usize,
        #[source]
        source: SpmatError,
    },

    /// Entry coordinate outside the declared dimensions
    #[error("line {line}: {source}")]
    OutOfBounds {
        line: usize,
        #[source]
        source: SpmatError,
    },

    /// Dimension mismatch, overflow or direct element access failure
    #[error(transparent)]
    Matrix(#[from] SpmatError),

    /// File could not be opened, read or written
    #[error("Could not {action} {}: {source}", path.display())]
    Io {
        action: &'static str,
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Stream failure with no file path attached
    #[error("IO error: {0}")]
    Stream(#[from] io::Error),

    /// Operation selector other than 1/2/3 or add/subtract/multiply
    #[error("Invalid operation selected: `{input}`")]
    InvalidOperation { input: String },
}

impl Error {
    /// Classify this error
    pub fn category(&self) -> ErrorCategory {
        match self {
            Error::Format { .. } | Error::Truncated { .. } | Error::InvalidOperation { .. } => {
                ErrorCategory::Format
            }
            Error::OutOfBounds { .. } => ErrorCategory::OutOfBounds,
            Error::Matrix(err) => err.category(),
            Error::Io { .. } | Error::Stream(_) => ErrorCategory::Io,
        }
    }

    /// Attach a line number to an error raised while decoding that line
    pub(crate) fn at_line(source: SpmatError, line: usize, content: &str) -> Self {
        match source.category() {
            ErrorCategory::Format => Error::Format {
                line,
                content: content.trim().to_string(),
                source,
            },
            ErrorCategory::OutOfBounds => Error::OutOfBounds { line, source },
            _ => Error::Matrix(source),
        }
    }

    /// Attach a path to a bare stream failure
    pub(crate) fn with_path(self, action: &'static str, path: PathBuf) -> Self {
        match self {
            Error::Stream(source) => Error::Io {
                action,
                path,
                source,
            },
            other => other,
        }
    }
}
