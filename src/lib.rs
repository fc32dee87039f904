//! # modp-sparse
//!
//! Row-compressed sparse matrices over small prime fields, the linear-algebra
//! substrate of F4-style Gröbner basis reduction.
//!
//! A [`SparseMatrix`] stores every row in two shared, index-parallel buffers
//! (column indices and scalars). Rows are appended one at a time and never
//! mutated in place; whole-matrix transforms rebuild or relabel uniformly.
//!
//! ## Features
//!
//! - **Packed storage**: one column buffer and one scalar buffer per matrix,
//!   grown by a [`GrowthPolicy`] (65536 entries, then doubling)
//! - **Row construction**: [`SparseMatrix::append_entry`] and
//!   [`SparseMatrix::row_done`]
//! - **Row arithmetic**: verbatim copy, normalization, and sparsification of
//!   dense rows modulo a prime
//! - **Structural transforms**: pivot sort, column relabeling, column trimming
//! - **Polynomials**: rows expand into any [`PolynomialSink`] or into a
//!   feanor-math multivariate polynomial ring
//!
//! ## Quick Start
//!
//! ```
//! use modp_sparse::*;
//!
//! let modulus = 7;
//! let mut matrix = SparseMatrix::new(4);
//! matrix.append_row_with_modulus(&[0, 3, 0, 5], modulus);
//! matrix.append_row_with_modulus_normalized(&[0, 3, 0, 5], modulus);
//! matrix.append_row_with_modulus(&[4, 0, 0, 0], modulus);
//!
//! assert_eq!(matrix.to_string(), "0: 1#3 3#5\n1: 1#1 3#4\n2: 0#4\n");
//!
//! matrix.sort_rows_by_increasing_pivots();
//! assert_eq!(matrix.lead_col(0), Some(0));
//! ```
//!
//! ## Contracts
//!
//! Append operations trust their caller: column ranges, column order, zero
//! elision and dense row lengths are checked with `debug_assert!` only. At
//! trust boundaries use [`SparseMatrix::validate`], or the `try_*` variants,
//! which report a [`MatrixError`] instead.

#![doc(html_root_url = "https://docs.rs/modp-sparse/0.1.0")]
#![warn(missing_docs)]
#![warn(rust_2018_idioms)]

// Core modules
pub mod scalar;
pub mod error;
pub mod matrix;
pub mod polynomial;
pub mod conversions;

// Re-export main types
pub use error::MatrixError;
pub use matrix::{GrowthPolicy, Row, RowEntries, SparseMatrix};
pub use polynomial::PolynomialSink;
pub use scalar::{
    check_modulus,
    is_odd_prime,
    modular_inverse,
    ColIndex,
    RowIndex,
    Scalar,
};
pub use conversions::{row_to_ring_element, rows_to_ring_elements};

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");
