//! Errors reported by the checked operations at trust boundaries.
//!
//! The per-entry hot paths never produce these: they rely on `debug_assert!`
//! and trust their caller. Callers that ingest externally derived data use
//! [`SparseMatrix::validate`](crate::SparseMatrix::validate) or one of the
//! `try_*` operations instead, which check the same contracts and report a
//! [`MatrixError`] rather than corrupting the matrix.

use thiserror::Error;

use crate::scalar::{ColIndex, RowIndex, Scalar};

/// A violated matrix contract.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum MatrixError {
    /// A stored column index is not below the column count.
    #[error("row {row}: column {col} is out of range for a matrix with {col_count} columns")]
    ColumnOutOfRange {
        /// Row holding the entry
        row: RowIndex,
        /// Offending column
        col: ColIndex,
        /// Column count of the matrix
        col_count: ColIndex,
    },

    /// Two consecutive entries of a row are not in strictly increasing column order.
    #[error("row {row}: column {col} follows column {previous}")]
    ColumnsNotIncreasing {
        /// Row holding the entries
        row: RowIndex,
        /// Column of the earlier entry
        previous: ColIndex,
        /// Column of the later entry
        col: ColIndex,
    },

    /// A row stores an explicit zero.
    #[error("row {row}: column {col} stores a zero scalar")]
    ZeroScalar {
        /// Row holding the entry
        row: RowIndex,
        /// Column of the zero entry
        col: ColIndex,
    },

    /// A stored scalar is not reduced modulo the field characteristic.
    #[error("row {row}: scalar {scalar} at column {col} is not reduced modulo {modulus}")]
    ScalarNotReduced {
        /// Row holding the entry
        row: RowIndex,
        /// Column of the entry
        col: ColIndex,
        /// Stored scalar
        scalar: Scalar,
        /// Expected modulus
        modulus: Scalar,
    },

    /// A dense row does not have exactly one value per column.
    #[error("dense row has {actual} values but the matrix has {expected} columns")]
    DenseRowLength {
        /// Column count of the matrix
        expected: usize,
        /// Length of the dense row
        actual: usize,
    },

    /// The modulus is not an odd prime.
    #[error("modulus {0} is not an odd prime")]
    InvalidModulus(Scalar),

    /// Trimming would discard a stored entry.
    #[error("cannot trim {trim} leading columns: row {row} stores column {col}")]
    TrimNonZeroColumn {
        /// Number of columns requested to be trimmed
        trim: ColIndex,
        /// Row holding the entry
        row: RowIndex,
        /// Column of the entry
        col: ColIndex,
    },

    /// Trimming more columns than the matrix has.
    #[error("cannot trim {trim} columns from a matrix with {col_count} columns")]
    TrimTooManyColumns {
        /// Number of columns requested to be trimmed
        trim: ColIndex,
        /// Column count of the matrix
        col_count: ColIndex,
    },

    /// A column map does not cover every column.
    #[error("column map has {actual} entries but the matrix has {expected} columns")]
    ColumnMapTooShort {
        /// Column count of the matrix
        expected: usize,
        /// Length of the map
        actual: usize,
    },
}
