//! Row-compressed sparse matrix over a small prime field.
//!
//! All rows of a [`SparseMatrix`] live in two index-parallel buffers: one of
//! column indices and one of scalars. A row is a span `[start, end)` into both
//! buffers. Spans are offsets rather than pointers, so growing the buffers
//! never invalidates a row.
//!
//! Rows are built append-only. The tail of the buffers past the last closed
//! row is the open row: [`SparseMatrix::append_entry`] extends it and
//! [`SparseMatrix::row_done`] closes it.
//!
//! ## Example
//!
//! ```
//! use modp_sparse::SparseMatrix;
//!
//! let mut matrix = SparseMatrix::new(4);
//! matrix.append_entry(1, 3);
//! matrix.append_entry(3, 5);
//! matrix.row_done();
//! matrix.row_done();
//!
//! assert_eq!(matrix.row_count(), 2);
//! assert_eq!(matrix.to_string(), "0: 1#3 3#5\n1:\n");
//! ```

pub mod append;
pub mod transform;
pub mod validate;

use std::fmt;
use std::iter::{Copied, Zip};
use std::mem;
use std::slice;

use tracing::debug;

use crate::scalar::{ColIndex, RowIndex, Scalar};

/// Capacity the entry buffers jump to on their first growth.
pub const DEFAULT_INITIAL_CAPACITY: usize = 1 << 16;

/// Factor the entry buffers grow by once non-empty.
pub const DEFAULT_GROWTH_FACTOR: usize = 2;

/// Growth policy for the shared entry buffers.
///
/// An empty matrix jumps straight to `initial_capacity`; after that the
/// capacity is multiplied by `growth_factor`, which amortizes reallocation to
/// O(1) per appended entry.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GrowthPolicy {
    /// Capacity reserved on the first growth of an empty matrix
    pub initial_capacity: usize,

    /// Multiplier applied to the capacity of a non-empty matrix
    pub growth_factor: usize,
}

impl GrowthPolicy {
    /// Create the default policy: 65536 entries, then doubling.
    pub fn new() -> Self {
        GrowthPolicy {
            initial_capacity: DEFAULT_INITIAL_CAPACITY,
            growth_factor: DEFAULT_GROWTH_FACTOR,
        }
    }

    /// Set the initial capacity (at least one entry)
    pub fn with_initial_capacity(mut self, capacity: usize) -> Self {
        self.initial_capacity = capacity.max(1);
        self
    }

    /// Set the growth factor (values below 2 are raised to 2)
    pub fn with_growth_factor(mut self, factor: usize) -> Self {
        self.growth_factor = factor.max(2);
        self
    }

    fn next_capacity(&self, is_empty: bool, current: usize) -> usize {
        if is_empty {
            self.initial_capacity.max(1)
        } else {
            current.saturating_mul(self.growth_factor.max(2))
        }
    }
}

impl Default for GrowthPolicy {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct RowSpan {
    start: usize,
    end: usize,
}

/// Iterator over the `(column, scalar)` entries of a row.
pub type RowEntries<'a> = Zip<Copied<slice::Iter<'a, ColIndex>>, Copied<slice::Iter<'a, Scalar>>>;

/// Borrowed view of one row of a [`SparseMatrix`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Row<'a> {
    indices: &'a [ColIndex],
    scalars: &'a [Scalar],
}

impl<'a> Row<'a> {
    /// Column indices of the stored entries, strictly increasing
    pub fn indices(&self) -> &'a [ColIndex] {
        self.indices
    }

    /// Scalars of the stored entries, parallel to [`Row::indices`]
    pub fn scalars(&self) -> &'a [Scalar] {
        self.scalars
    }

    /// Number of stored entries
    pub fn len(&self) -> usize {
        self.indices.len()
    }

    /// Check if the row stores no entries
    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    /// Column of the first stored entry
    pub fn lead_col(&self) -> Option<ColIndex> {
        self.indices.first().copied()
    }

    /// Iterate over `(column, scalar)` pairs in increasing column order
    pub fn iter(&self) -> RowEntries<'a> {
        self.indices.iter().copied().zip(self.scalars.iter().copied())
    }
}

impl<'a> IntoIterator for Row<'a> {
    type Item = (ColIndex, Scalar);
    type IntoIter = RowEntries<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Sparse matrix with rows packed into two shared buffers.
///
/// The column count is fixed until [`SparseMatrix::clear`] or
/// [`SparseMatrix::trim_leading_zero_columns`] changes it. Every stored column
/// is below it, every row is strictly increasing in column, and no stored
/// scalar is zero. The append operations check these contracts only in debug
/// builds; use [`SparseMatrix::validate`] at trust boundaries.
#[derive(Debug)]
pub struct SparseMatrix {
    col_indices: Vec<ColIndex>,
    scalars: Vec<Scalar>,
    rows: Vec<RowSpan>,
    col_count: ColIndex,
    capacity: usize,
    policy: GrowthPolicy,
}

impl SparseMatrix {
    /// Create an empty matrix with `col_count` columns and the default growth policy
    pub fn new(col_count: ColIndex) -> Self {
        Self::with_policy(col_count, GrowthPolicy::default())
    }

    /// Create an empty matrix with a custom growth policy
    pub fn with_policy(col_count: ColIndex, policy: GrowthPolicy) -> Self {
        SparseMatrix {
            col_indices: Vec::new(),
            scalars: Vec::new(),
            rows: Vec::new(),
            col_count,
            capacity: 0,
            policy,
        }
    }

    /// Build a matrix from rows given as `(column, scalar)` pairs.
    ///
    /// Each row goes through the construction protocol, so the same contracts
    /// as [`SparseMatrix::append_entry`] apply.
    pub fn from_rows(col_count: ColIndex, rows: &[&[(ColIndex, Scalar)]]) -> Self {
        let mut matrix = Self::new(col_count);
        for row in rows {
            for &(col, scalar) in row.iter() {
                matrix.append_entry(col, scalar);
            }
            matrix.row_done();
        }
        matrix
    }

    /// Number of closed rows
    #[inline]
    pub fn row_count(&self) -> RowIndex {
        self.rows.len()
    }

    /// Number of logical columns
    #[inline]
    pub fn col_count(&self) -> ColIndex {
        self.col_count
    }

    /// Number of entries in the buffers, including those of the open row
    #[inline]
    pub fn entry_count(&self) -> usize {
        self.scalars.len()
    }

    /// Number of entries the buffers hold without reallocating
    #[inline]
    pub fn entry_capacity(&self) -> usize {
        self.capacity
    }

    /// The growth policy of this matrix
    pub fn growth_policy(&self) -> GrowthPolicy {
        self.policy
    }

    /// Number of entries stored in `row`
    #[inline]
    pub fn entry_count_in_row(&self, row: RowIndex) -> usize {
        let span = self.rows[row];
        span.end - span.start
    }

    /// Check if `row` stores no entries
    #[inline]
    pub fn is_row_empty(&self, row: RowIndex) -> bool {
        self.entry_count_in_row(row) == 0
    }

    /// Column of the first entry of `row`, if any
    #[inline]
    pub fn lead_col(&self, row: RowIndex) -> Option<ColIndex> {
        self.row(row).lead_col()
    }

    /// Pivot column of `row`: its lead column, or the column count if empty
    #[inline]
    pub fn pivot_col(&self, row: RowIndex) -> ColIndex {
        self.lead_col(row).unwrap_or(self.col_count)
    }

    /// Borrow `row`
    #[inline]
    pub fn row(&self, row: RowIndex) -> Row<'_> {
        let span = self.rows[row];
        Row {
            indices: &self.col_indices[span.start..span.end],
            scalars: &self.scalars[span.start..span.end],
        }
    }

    /// Column indices of `row`
    #[inline]
    pub fn row_indices(&self, row: RowIndex) -> &[ColIndex] {
        self.row(row).indices
    }

    /// Scalars of `row`
    #[inline]
    pub fn row_scalars(&self, row: RowIndex) -> &[Scalar] {
        self.row(row).scalars
    }

    /// Iterate over all closed rows in order
    pub fn rows(&self) -> impl ExactSizeIterator<Item = Row<'_>> + '_ {
        (0..self.row_count()).map(move |row| self.row(row))
    }

    /// Entries appended since the last [`SparseMatrix::row_done`].
    pub fn open_row(&self) -> Row<'_> {
        let start = self.open_row_start();
        Row {
            indices: &self.col_indices[start..],
            scalars: &self.scalars[start..],
        }
    }

    /// Approximate number of bytes held by this matrix
    pub fn memory_use(&self) -> usize {
        self.capacity * (mem::size_of::<ColIndex>() + mem::size_of::<Scalar>())
            + self.rows.capacity() * mem::size_of::<RowSpan>()
    }

    /// Ensure the entry buffers can hold `count` entries.
    ///
    /// Does nothing if the capacity already suffices. Otherwise both buffers
    /// are reallocated to `count` entries; existing rows stay valid since
    /// they are stored as offsets.
    pub fn reserve_entries(&mut self, count: usize) {
        if count <= self.capacity {
            return;
        }
        debug!(
            old_capacity = self.capacity,
            new_capacity = count,
            rows = self.rows.len(),
            "reallocating sparse matrix entry buffers"
        );

        let additional = count - self.scalars.len();
        self.col_indices.reserve_exact(additional);
        self.scalars.reserve_exact(additional);
        self.capacity = count;

        debug_assert_eq!(self.col_indices.len(), self.scalars.len());
        debug_assert!(self.col_indices.capacity() >= self.capacity);
        debug_assert!(self.scalars.capacity() >= self.capacity);
    }

    /// Grow the entry buffers according to the growth policy.
    pub fn grow_entry_capacity(&mut self) {
        let new_capacity = self
            .policy
            .next_capacity(self.scalars.is_empty(), self.capacity);
        self.reserve_entries(new_capacity);
    }

    /// Append an entry to the open row.
    ///
    /// `col` must be below the column count and above the column of the
    /// previous entry in the open row, and `scalar` must be non-zero. These
    /// are only checked in debug builds.
    #[inline]
    pub fn append_entry(&mut self, col: ColIndex, scalar: Scalar) {
        debug_assert!(col < self.col_count);
        debug_assert!(scalar != 0);
        debug_assert!(
            self.scalars.len() == self.open_row_start()
                || self.col_indices.last().map_or(true, |&last| last < col)
        );

        if self.scalars.len() == self.capacity {
            self.grow_entry_capacity();
        }
        self.col_indices.push(col);
        self.scalars.push(scalar);
    }

    /// Close the open row and open a new empty one.
    #[inline]
    pub fn row_done(&mut self) {
        let span = RowSpan {
            start: self.open_row_start(),
            end: self.scalars.len(),
        };
        self.rows.push(span);
    }

    /// Drop every row and set a new column count. Capacity is retained.
    pub fn clear(&mut self, new_col_count: ColIndex) {
        self.col_indices.clear();
        self.scalars.clear();
        self.rows.clear();
        self.col_count = new_col_count;
    }

    /// Exchange the contents of two matrices.
    pub fn swap(&mut self, other: &mut SparseMatrix) {
        mem::swap(self, other);
    }

    #[inline]
    fn open_row_start(&self) -> usize {
        self.rows.last().map_or(0, |span| span.end)
    }

    /// Remove the last closed row. Its entries, if any, are left in the
    /// buffers as part of the open row.
    pub(crate) fn pop_row(&mut self) -> bool {
        self.rows.pop().is_some()
    }

    pub(crate) fn col_indices_mut(&mut self) -> &mut [ColIndex] {
        &mut self.col_indices
    }

    pub(crate) fn set_col_count(&mut self, col_count: ColIndex) {
        self.col_count = col_count;
    }
}

impl Default for SparseMatrix {
    fn default() -> Self {
        Self::new(0)
    }
}

impl Clone for SparseMatrix {
    fn clone(&self) -> Self {
        let mut matrix = Self::with_policy(self.col_count, self.policy);
        matrix.reserve_entries(self.capacity);
        matrix.col_indices.extend_from_slice(&self.col_indices);
        matrix.scalars.extend_from_slice(&self.scalars);
        matrix.rows.clone_from(&self.rows);
        matrix
    }
}

/// Matrices are equal when they have the same column count and the same
/// rows. Capacity and growth policy are ignored.
impl PartialEq for SparseMatrix {
    fn eq(&self, other: &Self) -> bool {
        self.col_count == other.col_count
            && self.row_count() == other.row_count()
            && self.rows().zip(other.rows()).all(|(a, b)| a == b)
    }
}

impl Eq for SparseMatrix {}

impl fmt::Display for SparseMatrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.row_count() == 0 {
            return writeln!(f, "matrix with no rows");
        }
        for (index, row) in self.rows().enumerate() {
            write!(f, "{}:", index)?;
            for (col, scalar) in row {
                debug_assert!(col < self.col_count);
                write!(f, " {}#{}", col, scalar)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
