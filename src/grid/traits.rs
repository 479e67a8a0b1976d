use super::*;

/// One scanning direction over a [`Grid`].
///
/// This trait is implemented by [`Row`] and [`Column`], allowing the line
/// search to be written once and instantiated per direction, the same way
/// `find_longest_line` picks `Row` for horizontal and `Column` for vertical
/// scans.
///
/// A line is addressed by its `index` (which row or which column) and a cell
/// within it by its `offset` along the line.
///
/// # Examples
///
/// ```
/// use figsearch::{bitmap, Column, LineTrait, Position, Row};
///
/// let grid = bitmap![[1, 0, 0], [0, 0, 1]].unwrap();
///
/// assert_eq!(Row::count(&grid), 2);
/// assert_eq!(Row::length(&grid), 3);
/// assert!(Row::value(&grid, 1, 2));
///
/// assert_eq!(Column::count(&grid), 3);
/// assert_eq!(Column::position(2, 1), Position::new(1, 2));
/// ```
pub trait LineTrait {
    /// Human readable name used in logs.
    const NAME: &'static str;

    /// Number of lines in this direction.
    fn count(grid: &Grid) -> usize;

    /// Number of cells in each line.
    fn length(grid: &Grid) -> usize;

    /// Maps a line index and offset back to a grid position.
    fn position(index: usize, offset: usize) -> Position;

    /// Value of the cell at `offset` on line `index`.
    fn value(grid: &Grid, index: usize, offset: usize) -> bool {
        let Position { row, col } = Self::position(index, offset);
        grid.value_at(row, col)
    }
}

/// Horizontal scanning: lines are rows, offsets are columns.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Row;

/// Vertical scanning: lines are columns, offsets are rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Column;

impl LineTrait for Row {
    const NAME: &'static str = "row";

    fn count(grid: &Grid) -> usize {
        grid.rows()
    }

    fn length(grid: &Grid) -> usize {
        grid.columns()
    }

    fn position(index: usize, offset: usize) -> Position {
        Position::new(index, offset)
    }
}

impl LineTrait for Column {
    const NAME: &'static str = "column";

    fn count(grid: &Grid) -> usize {
        grid.columns()
    }

    fn length(grid: &Grid) -> usize {
        grid.rows()
    }

    fn position(index: usize, offset: usize) -> Position {
        Position::new(offset, index)
    }
}
