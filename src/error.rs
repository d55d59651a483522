//! Error types for homr

use thiserror::Error;

/// Result type alias using homr's Error
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in homr operations
#[derive(Error, Debug)]
pub enum Error {
    /// Coordinate index outside the matrix index space
    ///
    /// Row and column indices share the index space `[0, n)`.
    #[error("Index {index} out of bounds for matrix with {size} columns")]
    IndexOutOfBounds {
        /// The invalid index as read from the input
        index: i64,
        /// Number of columns (and rows) in the matrix
        size: usize,
    },

    /// Coordinate arrays disagree in length
    #[error("Length mismatch: expected {expected} coordinates, got {got}")]
    LengthMismatch {
        /// Expected number of entries
        expected: usize,
        /// Actual number of entries
        got: usize,
    },

    /// A working buffer for the matrix size cannot be allocated
    #[error("Resource exhausted: failed to allocate {bytes} bytes")]
    ResourceExhausted {
        /// Requested size in bytes
        bytes: usize,
    },

    /// I/O failure while reading or writing a matrix file
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Malformed input file
    #[error("Parse error at line {line}: {reason}")]
    ParseInput {
        /// 1-based line number in the input file
        line: usize,
        /// Description of what was expected
        reason: String,
    },
}

impl Error {
    /// Create an out-of-bounds error from any integer index type
    pub fn index_out_of_bounds(index: impl Into<i64>, size: usize) -> Self {
        Self::IndexOutOfBounds {
            index: index.into(),
            size,
        }
    }

    /// Create a length mismatch error
    pub fn length_mismatch(expected: usize, got: usize) -> Self {
        Self::LengthMismatch { expected, got }
    }

    /// Create a parse error
    pub fn parse_input(line: usize, reason: impl Into<String>) -> Self {
        Self::ParseInput {
            line,
            reason: reason.into(),
        }
    }
}
