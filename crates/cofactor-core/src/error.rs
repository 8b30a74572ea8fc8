//! # Error Types
//!
//! Shared error hierarchy for the Cofactor workspace. All errors use
//! `thiserror` for derive-based `Display` and `Error` implementations.
//!
//! - Shape errors carry the offending row and the expected vs. found length.
//! - Tracer errors carry the rejected dimension and the configured limit.

use thiserror::Error;

/// Top-level error type for Cofactor.
#[derive(Error, Debug)]
pub enum CofactorError {
    /// The input could not be turned into a square matrix.
    #[error("matrix error: {0}")]
    Matrix(#[from] MatrixError),

    /// The tracer refused to evaluate the matrix.
    #[error("trace error: {0}")]
    Trace(#[from] TraceError),
}

/// Error raised while constructing or slicing a [`Matrix`](crate::Matrix).
#[derive(Error, Debug, Clone, PartialEq)]
pub enum MatrixError {
    /// A matrix must have at least one row.
    #[error("matrix has no rows")]
    Empty,

    /// A row does not have as many entries as the matrix has rows.
    #[error("matrix is not square: row {row} has {found} entries, expected {expected}")]
    NotSquare {
        /// Zero-based index of the offending row.
        row: usize,
        /// Required row length (the number of rows).
        expected: usize,
        /// Actual row length.
        found: usize,
    },

    /// An entry is NaN or infinite.
    #[error("entry at ({row}, {column}) is not a finite number")]
    NonFinite {
        /// Zero-based row index.
        row: usize,
        /// Zero-based column index.
        column: usize,
    },

    /// A row or column index lies outside the matrix.
    #[error("index ({row}, {column}) is out of bounds for a {dimension}x{dimension} matrix")]
    OutOfBounds {
        /// Requested row.
        row: usize,
        /// Requested column.
        column: usize,
        /// Matrix dimension.
        dimension: usize,
    },

    /// A 1x1 matrix has no minor.
    #[error("a 1x1 matrix has no minor")]
    NoMinor,
}

/// Error raised by the determinant tracer.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TraceError {
    /// The matrix exceeds the configured dimension limit.
    #[error("matrix dimension {dimension} exceeds the configured limit of {limit}")]
    DimensionLimit {
        /// Dimension of the rejected matrix.
        dimension: usize,
        /// Configured maximum dimension.
        limit: usize,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_square_message_names_row_and_lengths() {
        let err = MatrixError::NotSquare {
            row: 2,
            expected: 3,
            found: 4,
        };
        assert_eq!(
            err.to_string(),
            "matrix is not square: row 2 has 4 entries, expected 3"
        );
    }

    #[test]
    fn cofactor_error_wraps_matrix_error() {
        let err: CofactorError = MatrixError::Empty.into();
        assert_eq!(err.to_string(), "matrix error: matrix has no rows");
    }

    #[test]
    fn cofactor_error_wraps_trace_error() {
        let err: CofactorError = TraceError::DimensionLimit {
            dimension: 12,
            limit: 8,
        }
        .into();
        assert!(err.to_string().contains("dimension 12 exceeds"));
    }
}
