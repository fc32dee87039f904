//! Whole-matrix structural transforms: pivot sort, column relabeling and
//! column trimming.

use std::iter;

use tracing::{debug, trace};

use super::SparseMatrix;
use crate::error::MatrixError;
use crate::scalar::{ColIndex, RowIndex};

impl SparseMatrix {
    /// Reorder rows by increasing pivot column.
    ///
    /// The pivot of an empty row is the column count, so empty rows sort
    /// last. The sort is stable: rows with equal pivots keep their relative
    /// order. The rows are copied into a fresh matrix which then replaces
    /// this one; entry capacity does not shrink. Entries of an unclosed
    /// open row are discarded.
    pub fn sort_rows_by_increasing_pivots(&mut self) {
        let mut order: Vec<(ColIndex, RowIndex)> = (0..self.row_count())
            .map(|row| (self.pivot_col(row), row))
            .collect();
        // the row index breaks ties, so this matches a stable sort
        order.sort_unstable();
        trace!(rows = order.len(), "sorting rows by pivot column");

        let mut ordered = SparseMatrix::with_policy(self.col_count(), self.growth_policy());
        ordered.reserve_entries(self.entry_capacity());
        for &(_, row) in &order {
            ordered.append_row(self, row);
        }
        *self = ordered;
    }

    /// Relabel every stored column `c` as `map[c]`, in place.
    ///
    /// `map` must cover every column. Entries are not re-sorted, so the map
    /// must keep every row strictly increasing.
    pub fn apply_column_map(&mut self, map: &[ColIndex]) {
        debug_assert!(map.len() >= self.col_count() as usize);
        trace!(entries = self.entry_count(), "applying column map");
        let col_count = self.col_count();
        for col in self.col_indices_mut() {
            debug_assert!(*col < col_count);
            *col = map[*col as usize];
        }
    }

    /// Checked [`SparseMatrix::apply_column_map`].
    ///
    /// Fails without modifying the matrix if `map` is too short, maps a
    /// stored column out of range, or would break the column order of a row.
    /// Entries of the open row are checked like those of a closed row.
    pub fn try_apply_column_map(&mut self, map: &[ColIndex]) -> Result<(), MatrixError> {
        let col_count = self.col_count();
        if map.len() < col_count as usize {
            return Err(MatrixError::ColumnMapTooShort {
                expected: col_count as usize,
                actual: map.len(),
            });
        }
        // the open row's entries are relabeled too, reported as row `row_count`
        let rows = self.rows().chain(iter::once(self.open_row()));
        for (index, row) in rows.enumerate() {
            let mut previous: Option<ColIndex> = None;
            for &col in row.indices() {
                let mapped = map.get(col as usize).copied().unwrap_or(col);
                if mapped >= col_count {
                    return Err(MatrixError::ColumnOutOfRange {
                        row: index,
                        col: mapped,
                        col_count,
                    });
                }
                if let Some(previous) = previous.filter(|&previous| previous >= mapped) {
                    return Err(MatrixError::ColumnsNotIncreasing {
                        row: index,
                        previous,
                        col: mapped,
                    });
                }
                previous = Some(mapped);
            }
        }
        self.apply_column_map(map);
        Ok(())
    }

    /// Remove the first `count` columns, which must hold no entries.
    ///
    /// Every stored column is shifted down by `count` and the column count
    /// shrinks by `count`.
    pub fn trim_leading_zero_columns(&mut self, count: ColIndex) {
        debug_assert!(count <= self.col_count());
        debug!(count, col_count = self.col_count(), "trimming leading zero columns");
        for col in self.col_indices_mut() {
            debug_assert!(*col >= count);
            *col -= count;
        }
        let col_count = self.col_count() - count;
        self.set_col_count(col_count);
    }

    /// Checked [`SparseMatrix::trim_leading_zero_columns`].
    ///
    /// An entry of the open row in a trimmed column is an error too.
    pub fn try_trim_leading_zero_columns(&mut self, count: ColIndex) -> Result<(), MatrixError> {
        if count > self.col_count() {
            return Err(MatrixError::TrimTooManyColumns {
                trim: count,
                col_count: self.col_count(),
            });
        }
        // rows are increasing, so the lead column is the smallest
        let rows = self.rows().chain(iter::once(self.open_row()));
        for (row, entries) in rows.enumerate() {
            if let Some(col) = entries.lead_col().filter(|&col| col < count) {
                return Err(MatrixError::TrimNonZeroColumn { trim: count, row, col });
            }
        }
        self.trim_leading_zero_columns(count);
        Ok(())
    }
}
