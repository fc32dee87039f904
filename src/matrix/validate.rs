//! Checked invariants for trust boundaries.

use super::SparseMatrix;
use crate::error::MatrixError;
use crate::scalar::{ColIndex, Scalar};

impl SparseMatrix {
    /// Check every structural invariant of the closed rows.
    ///
    /// Every stored column must be below the column count, columns must be
    /// strictly increasing within each row and no stored scalar may be zero.
    /// Reports the first violation found, scanning rows in order.
    pub fn validate(&self) -> Result<(), MatrixError> {
        let col_count = self.col_count();
        for (index, row) in self.rows().enumerate() {
            let mut previous: Option<ColIndex> = None;
            for (col, scalar) in row {
                if col >= col_count {
                    return Err(MatrixError::ColumnOutOfRange { row: index, col, col_count });
                }
                if let Some(previous) = previous.filter(|&previous| previous >= col) {
                    return Err(MatrixError::ColumnsNotIncreasing { row: index, previous, col });
                }
                if scalar == 0 {
                    return Err(MatrixError::ZeroScalar { row: index, col });
                }
                previous = Some(col);
            }
        }
        Ok(())
    }

    /// Like [`SparseMatrix::validate`], and additionally check that every
    /// scalar is reduced modulo the odd prime `modulus`.
    pub fn validate_reduced(&self, modulus: Scalar) -> Result<(), MatrixError> {
        crate::scalar::check_modulus(modulus)?;
        self.validate()?;
        for (index, row) in self.rows().enumerate() {
            if let Some((col, scalar)) = row.iter().find(|&(_, scalar)| scalar >= modulus) {
                return Err(MatrixError::ScalarNotReduced {
                    row: index,
                    col,
                    scalar,
                    modulus,
                });
            }
        }
        Ok(())
    }

    /// Check that `dense` has exactly one value per column.
    pub fn check_dense_row<T>(&self, dense: &[T]) -> Result<(), MatrixError> {
        let expected = self.col_count() as usize;
        if dense.len() == expected {
            Ok(())
        } else {
            Err(MatrixError::DenseRowLength {
                expected,
                actual: dense.len(),
            })
        }
    }
}
