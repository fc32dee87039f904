//! Conversions from matrix rows to feanor-math polynomials.
//!
//! A column of the matrix corresponds to a monomial of a multivariate
//! polynomial ring; the caller supplies the monomial of every column. Scalars
//! enter the ring's base ring through its integer homomorphism, so the base
//! ring should have the same characteristic as the matrix's field.
//!
//! # Example
//! ```
//! use feanor_math::ring::*;
//! use feanor_math::rings::multivariate::*;
//! use feanor_math::rings::multivariate::multivariate_impl::MultivariatePolyRingImpl;
//! use feanor_math::rings::zn::zn_static;
//! use modp_sparse::{row_to_ring_element, SparseMatrix};
//!
//! let ring = MultivariatePolyRingImpl::new(zn_static::F17, 2);
//! let columns = vec![ring.create_monomial([1, 0]), ring.create_monomial([0, 1])];
//! let matrix = SparseMatrix::from_rows(2, &[&[(0, 1), (1, 16)]]);
//!
//! let poly = row_to_ring_element(&ring, &matrix, 0, &columns);
//! assert_eq!(ring.terms(&poly).count(), 2);
//! ```

use feanor_math::homomorphism::Homomorphism;
use feanor_math::ring::*;
use feanor_math::rings::multivariate::*;

use crate::matrix::SparseMatrix;
use crate::scalar::RowIndex;

/// Convert `row` of `matrix` into an element of the polynomial ring `ring`.
///
/// `column_monomials[c]` is the monomial of column `c`.
pub fn row_to_ring_element<P>(
    ring: P,
    matrix: &SparseMatrix,
    row: RowIndex,
    column_monomials: &[PolyMonomial<P>],
) -> El<P>
where
    P: RingStore + Copy,
    P::Type: MultivariatePolyRing,
{
    debug_assert_eq!(column_monomials.len(), matrix.col_count() as usize);
    let hom = ring.base_ring().int_hom();

    let terms: Vec<_> = matrix
        .row(row)
        .iter()
        .filter(|&(_, scalar)| scalar != 0)
        .map(|(col, scalar)| {
            (
                hom.map(i32::from(scalar)),
                ring.clone_monomial(&column_monomials[col as usize]),
            )
        })
        .collect();

    ring.from_terms(terms.into_iter())
}

/// Convert every closed row of `matrix` into a polynomial, in row order.
pub fn rows_to_ring_elements<P>(
    ring: P,
    matrix: &SparseMatrix,
    column_monomials: &[PolyMonomial<P>],
) -> Vec<El<P>>
where
    P: RingStore + Copy,
    P::Type: MultivariatePolyRing,
{
    (0..matrix.row_count())
        .map(|row| row_to_ring_element(ring, matrix, row, column_monomials))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use feanor_math::rings::multivariate::multivariate_impl::MultivariatePolyRingImpl;
    use feanor_math::rings::zn::zn_static;

    #[test]
    fn test_row_to_ring_element() {
        let base = zn_static::F17;
        let ring = MultivariatePolyRingImpl::new(base, 3);

        let columns = vec![
            ring.create_monomial([2, 0, 0]),
            ring.create_monomial([1, 1, 0]),
            ring.create_monomial([0, 2, 0]),
            ring.create_monomial([0, 0, 0]),
        ];

        // 2x² + 5y² + 16
        let matrix = SparseMatrix::from_rows(4, &[&[(0, 2), (2, 5), (3, 16)]]);
        let poly = row_to_ring_element(&ring, &matrix, 0, &columns);

        let expected = ring.from_terms([
            (base.int_hom().map(2), ring.create_monomial([2, 0, 0])),
            (base.int_hom().map(5), ring.create_monomial([0, 2, 0])),
            (base.int_hom().map(-1), ring.create_monomial([0, 0, 0])),
        ].into_iter());

        assert!(ring.eq_el(&poly, &expected));
    }

    #[test]
    fn test_empty_row_is_zero() {
        let ring = MultivariatePolyRingImpl::new(zn_static::F17, 1);
        let columns = vec![ring.create_monomial([1]), ring.create_monomial([0])];
        let matrix = SparseMatrix::from_rows(2, &[&[], &[(1, 3)]]);

        let polys = rows_to_ring_elements(&ring, &matrix, &columns);
        assert_eq!(polys.len(), 2);
        assert!(ring.is_zero(&polys[0]));
        assert!(!ring.is_zero(&polys[1]));
    }
}
