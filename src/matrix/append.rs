//! Row transfer and arithmetic.
//!
//! Every operation here appends exactly one row to the receiving matrix
//! through the construction protocol and leaves its source untouched.
//! Dense rows carry one value per column and are sparsified on the way in:
//! only non-zero values (after reduction) become entries.

use num_bigint::BigUint;

use super::SparseMatrix;
use crate::error::MatrixError;
use crate::scalar::{check_modulus, modular_inverse, modular_product, reduce};
use crate::scalar::{ColIndex, RowIndex, Scalar};

impl SparseMatrix {
    /// Append a verbatim copy of `row` of `matrix`.
    pub fn append_row(&mut self, matrix: &SparseMatrix, row: RowIndex) {
        debug_assert!(row < matrix.row_count());
        for (col, scalar) in matrix.row(row) {
            self.append_entry(col, scalar);
        }
        self.row_done();
    }

    /// Append a copy of `row` of `matrix` scaled so that its lead scalar is 1.
    ///
    /// The scalars of the source row must already be reduced modulo the
    /// prime `modulus`. An empty source row yields an empty row.
    pub fn append_row_and_normalize(&mut self, matrix: &SparseMatrix, row: RowIndex, modulus: Scalar) {
        debug_assert!(row < matrix.row_count());
        let mut entries = matrix.row(row).iter();
        if let Some((lead_col, lead)) = entries.next() {
            debug_assert!(lead < modulus);
            self.append_entry(lead_col, 1);
            if entries.len() > 0 {
                let inverse = modular_inverse(lead, modulus);
                for (col, scalar) in entries {
                    debug_assert!(scalar < modulus);
                    self.append_entry(col, modular_product(inverse, scalar, modulus));
                }
            }
        }
        self.row_done();
    }

    /// Append a dense row reduced modulo `modulus`.
    ///
    /// `dense` holds one value per column; values reducing to zero are
    /// skipped.
    pub fn append_row_with_modulus(&mut self, dense: &[u64], modulus: Scalar) {
        debug_assert_eq!(dense.len(), self.col_count() as usize);
        for (col, &value) in dense.iter().enumerate() {
            let scalar = reduce(value, modulus);
            if scalar != 0 {
                self.append_entry(col as ColIndex, scalar);
            }
        }
        self.row_done();
    }

    /// Append a dense row reduced modulo `modulus` and scaled so that its
    /// first non-zero value becomes 1.
    ///
    /// Single pass: the lead entry is stored as 1 directly, and its inverse
    /// scales every later entry.
    pub fn append_row_with_modulus_normalized(&mut self, dense: &[u64], modulus: Scalar) {
        debug_assert_eq!(dense.len(), self.col_count() as usize);
        let mut multiply: Option<Scalar> = None;
        for (col, &value) in dense.iter().enumerate() {
            let scalar = reduce(value, modulus);
            if scalar == 0 {
                continue;
            }
            let scalar = match multiply {
                Some(inverse) => modular_product(inverse, scalar, modulus),
                None => {
                    multiply = Some(modular_inverse(scalar, modulus));
                    1
                }
            };
            self.append_entry(col as ColIndex, scalar);
        }
        self.row_done();
    }

    /// Append a dense row reduced modulo `modulus`, unless it reduces to zero.
    ///
    /// Returns `true` if the row was kept. A discarded row leaves the row
    /// count unchanged; any capacity grown meanwhile is retained.
    pub fn append_row_with_modulus_if_nonzero(&mut self, dense: &[u64], modulus: Scalar) -> bool {
        self.append_row_with_modulus(dense, modulus);
        debug_assert!(self.row_count() > 0);
        if self.is_row_empty(self.row_count() - 1) {
            self.pop_row();
            false
        } else {
            true
        }
    }

    /// Append a dense row without reduction, scanning from `lead_col`.
    ///
    /// Values before `lead_col` must be zero and every value must fit in a
    /// [`Scalar`]; both are only checked in debug builds.
    pub fn append_dense_row(&mut self, dense: &[u64], lead_col: ColIndex) {
        debug_assert_eq!(dense.len(), self.col_count() as usize);
        debug_assert!(dense[..lead_col as usize].iter().all(|&value| value == 0));
        for (col, &value) in dense.iter().enumerate().skip(lead_col as usize) {
            debug_assert!(Scalar::try_from(value).is_ok());
            if value != 0 {
                self.append_entry(col as ColIndex, value as Scalar);
            }
        }
        self.row_done();
    }

    /// Append a dense row of arbitrary-precision values reduced modulo `modulus`.
    pub fn append_big_row_with_modulus(&mut self, dense: &[BigUint], modulus: Scalar) {
        debug_assert_eq!(dense.len(), self.col_count() as usize);
        for (col, value) in dense.iter().enumerate() {
            let scalar = reduce_big(value, modulus);
            if scalar != 0 {
                self.append_entry(col as ColIndex, scalar);
            }
        }
        self.row_done();
    }

    /// Checked [`SparseMatrix::append_row_with_modulus`].
    ///
    /// Rejects a dense row of the wrong length or a modulus that is not an
    /// odd prime without touching the matrix.
    pub fn try_append_row_with_modulus(&mut self, dense: &[u64], modulus: Scalar) -> Result<(), MatrixError> {
        self.check_dense_row(dense)?;
        check_modulus(modulus)?;
        self.append_row_with_modulus(dense, modulus);
        Ok(())
    }

    /// Checked [`SparseMatrix::append_row_with_modulus_normalized`].
    pub fn try_append_row_with_modulus_normalized(
        &mut self,
        dense: &[u64],
        modulus: Scalar,
    ) -> Result<(), MatrixError> {
        self.check_dense_row(dense)?;
        check_modulus(modulus)?;
        self.append_row_with_modulus_normalized(dense, modulus);
        Ok(())
    }
}

fn reduce_big(value: &BigUint, modulus: Scalar) -> Scalar {
    let remainder = value % u32::from(modulus);
    // below the modulus, so at most one digit
    remainder
        .iter_u32_digits()
        .next()
        .map_or(0, |digit| digit as Scalar)
}
