mod config;
mod lines;
mod shape;
mod traits;

pub use config::*;
pub use lines::*;
pub use shape::*;
pub use traits::*;

use crate::FormatError;
use smallvec::SmallVec;
use std::fmt;

/// A rectangular binary grid stored as one row-major buffer.
///
/// A grid is built once and never changes afterwards, so it can be shared
/// freely between searches and threads.
///
/// # Example
/// ```
/// use figsearch::Grid;
///
/// let grid = Grid::new(2, 3, vec![true, false, true, false, true, false]).unwrap();
/// assert_eq!(grid.rows(), 2);
/// assert_eq!(grid.columns(), 3);
/// assert!(grid.value_at(0, 2));
/// assert_eq!(grid.get(2, 0), None);
/// ```
#[derive(Debug, PartialEq, Eq, Clone, Default)]
pub struct Grid {
    rows: usize,
    columns: usize,
    cells: Vec<bool>,
}

impl Grid {
    /// Creates a grid from a row-major cell buffer.
    ///
    /// Fails when the buffer does not hold exactly `rows * columns` cells.
    pub fn new(rows: usize, columns: usize, cells: Vec<bool>) -> Result<Self, FormatError> {
        let expected = rows
            .checked_mul(columns)
            .ok_or(FormatError::DimensionsOverflow { rows, columns })?;
        if cells.len() < expected {
            return Err(FormatError::MissingCells {
                expected,
                found: cells.len(),
            });
        }
        if cells.len() > expected {
            return Err(FormatError::TrailingData {
                expected,
                extra: cells.len() - expected,
            });
        }
        Ok(Self {
            rows,
            columns,
            cells,
        })
    }

    /// Creates a grid from a list of equally long rows.
    ///
    /// This is what the [`bitmap!`](crate::bitmap) macro expands to.
    pub fn from_rows(rows: Vec<Vec<bool>>) -> Result<Self, FormatError> {
        let columns = rows.first().map_or(0, Vec::len);
        let row_count = rows.len();
        let mut cells = Vec::with_capacity(row_count * columns);
        for (row, values) in rows.into_iter().enumerate() {
            if values.len() != columns {
                return Err(FormatError::RaggedRow {
                    row,
                    expected: columns,
                    found: values.len(),
                });
            }
            cells.extend(values);
        }
        // Rows without cells still describe an empty grid.
        let row_count = if columns == 0 { 0 } else { row_count };
        Self::new(row_count, columns, cells)
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn columns(&self) -> usize {
        self.columns
    }

    /// `true` when the grid has no cells at all.
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Returns the cell at `(row, col)`.
    ///
    /// # Panics
    /// Panics when the coordinate lies outside the grid.
    pub fn value_at(&self, row: usize, col: usize) -> bool {
        assert!(
            row < self.rows && col < self.columns,
            "cell ({row}, {col}) is outside a {}x{} grid",
            self.rows,
            self.columns
        );
        self.cells[row * self.columns + col]
    }

    /// Returns the cell at `(row, col)`, or `None` outside the grid.
    pub fn get(&self, row: usize, col: usize) -> Option<bool> {
        (row < self.rows && col < self.columns).then(|| self.cells[row * self.columns + col])
    }

    /// Returns one row as a slice of the underlying buffer.
    pub fn row(&self, row: usize) -> Option<&[bool]> {
        (row < self.rows).then(|| &self.cells[row * self.columns..(row + 1) * self.columns])
    }

    /// Returns an iterator over all rows.
    pub fn row_slices(&self) -> impl Iterator<Item = &[bool]> {
        // `chunks_exact` rejects a zero chunk size.
        self.cells.chunks_exact(self.columns.max(1))
    }

    /// Counts the set cells.
    pub fn count_set(&self) -> usize {
        self.cells.iter().filter(|&&cell| cell).count()
    }

    /// Collects the runs of one row or column, see [`collect_runs`].
    ///
    /// # Example
    /// ```
    /// use figsearch::{bitmap, LineInfo, LineKind, Row};
    ///
    /// let grid = bitmap![[1, 0, 1, 1, 1]].unwrap();
    /// let runs = grid.runs::<Row>(0);
    /// assert_eq!(
    ///     runs.as_slice(),
    ///     &[
    ///         LineInfo::new(0, 1, LineKind::Full),
    ///         LineInfo::new(1, 1, LineKind::Empty),
    ///         LineInfo::new(2, 3, LineKind::Full),
    ///     ]
    /// );
    /// ```
    pub fn runs<T: LineTrait>(&self, index: usize) -> SmallVecLine<LineInfo> {
        if index >= T::count(self) {
            return SmallVec::new();
        }
        collect_runs(T::length(self), |i| T::value(self, index, i))
    }
}

/// Formats the grid the way the loader reads it back, without the header.
impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.columns == 0 {
            return Ok(());
        }
        for row in self.row_slices() {
            for (col, &cell) in row.iter().enumerate() {
                if col > 0 {
                    f.write_str(" ")?;
                }
                f.write_str(if cell { "1" } else { "0" })?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
