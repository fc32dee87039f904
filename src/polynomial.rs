//! Expansion of matrix rows back into polynomials.
//!
//! Each column of a matrix stands for a monomial owned by the caller. A row
//! becomes a polynomial by pairing every stored scalar with the monomial of
//! its column. The polynomial type is abstracted by [`PolynomialSink`], so any
//! term-append interface can receive the terms.

use crate::matrix::SparseMatrix;
use crate::scalar::{RowIndex, Scalar};

/// A polynomial that can be reset and extended term by term.
pub trait PolynomialSink {
    /// Monomial labels attached to matrix columns
    type Monomial;

    /// Reset to the zero polynomial
    fn set_to_zero(&mut self);

    /// Hint that this many more terms are about to be appended
    fn reserve_terms(&mut self, _additional: usize) {}

    /// Append the term `coefficient * monomial` after all existing terms
    fn append_term(&mut self, coefficient: Scalar, monomial: &Self::Monomial);
}

/// A plain list of `(coefficient, monomial)` terms.
impl<M: Clone> PolynomialSink for Vec<(Scalar, M)> {
    type Monomial = M;

    fn set_to_zero(&mut self) {
        self.clear();
    }

    fn reserve_terms(&mut self, additional: usize) {
        self.reserve(additional);
    }

    fn append_term(&mut self, coefficient: Scalar, monomial: &M) {
        self.push((coefficient, monomial.clone()));
    }
}

impl SparseMatrix {
    /// Overwrite `poly` with the polynomial of `row`.
    ///
    /// `column_monomials` labels every column. Terms are appended in the
    /// row's increasing column order with their scalars unchanged.
    pub fn row_to_polynomial<P>(&self, row: RowIndex, column_monomials: &[P::Monomial], poly: &mut P)
    where
        P: PolynomialSink,
    {
        debug_assert_eq!(column_monomials.len(), self.col_count() as usize);
        poly.set_to_zero();
        let row = self.row(row);
        poly.reserve_terms(row.len());
        for (col, scalar) in row {
            if scalar != 0 {
                poly.append_term(scalar, &column_monomials[col as usize]);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_row_to_polynomial() {
        let labels: Vec<&str> = vec!["x^2", "xy", "y^2", "1"];
        let matrix = SparseMatrix::from_rows(4, &[&[(0, 3), (2, 5), (3, 1)], &[]]);

        let mut poly: Vec<(Scalar, &str)> = vec![(9, "stale")];
        matrix.row_to_polynomial(0, &labels[..], &mut poly);
        assert_eq!(poly, vec![(3, "x^2"), (5, "y^2"), (1, "1")]);

        matrix.row_to_polynomial(1, &labels[..], &mut poly);
        assert!(poly.is_empty());
    }

    #[derive(Default)]
    struct CountingSink {
        reserved: usize,
        terms: Vec<(Scalar, u32)>,
    }

    impl PolynomialSink for CountingSink {
        type Monomial = u32;

        fn set_to_zero(&mut self) {
            self.terms.clear();
        }

        fn reserve_terms(&mut self, additional: usize) {
            self.reserved += additional;
        }

        fn append_term(&mut self, coefficient: Scalar, monomial: &u32) {
            self.terms.push((coefficient, *monomial));
        }
    }

    #[test]
    fn test_custom_sink_sees_reservation() {
        let matrix = SparseMatrix::from_rows(3, &[&[(1, 2), (2, 4)]]);
        let labels: [u32; 3] = [100, 200, 300];
        let mut sink = CountingSink::default();
        matrix.row_to_polynomial(0, &labels[..], &mut sink);
        assert_eq!(sink.reserved, 2);
        assert_eq!(sink.terms, vec![(2, 200), (4, 300)]);
    }

    /// Sink relying on the default reservation hint
    struct SumSink(u64);

    impl PolynomialSink for SumSink {
        type Monomial = u64;

        fn set_to_zero(&mut self) {
            self.0 = 0;
        }

        fn append_term(&mut self, coefficient: Scalar, monomial: &u64) {
            self.0 += u64::from(coefficient) * monomial;
        }
    }

    #[test]
    fn test_default_reservation_is_ignored() {
        let matrix = SparseMatrix::from_rows(3, &[&[(0, 3), (2, 5)]]);
        let weights: [u64; 3] = [1, 10, 100];
        let mut sink = SumSink(7);
        sink.reserve_terms(1000);
        matrix.row_to_polynomial(0, &weights[..], &mut sink);
        assert_eq!(sink.0, 503);
    }
}
