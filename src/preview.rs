//! Terminal preview of a grid with a found shape highlighted.

use crate::{FoundShape, Grid};
use crossterm::{
    queue,
    style::{Color, Print, ResetColor, SetForegroundColor},
};
use std::io::{self, Write};

/// Color of cells that belong to the found shape.
pub const SHAPE_COLOR: Color = Color::Green;
/// Color of the remaining set cells.
pub const SET_COLOR: Color = Color::Red;

/// Writes the grid row by row, cells separated by one space.
///
/// With `colored`, cells on `shape` (the line, or the border of the square) are
/// green and other set cells red. Without it the output is the same as the
/// grid's `Display`.
///
/// # Example
/// ```
/// use figsearch::{bitmap, preview::render_preview, search, Mode};
///
/// let grid = bitmap![[1, 1], [0, 1]].unwrap();
/// let shape = search(&grid, Mode::HLine);
///
/// let mut out = Vec::new();
/// render_preview(&mut out, &grid, &shape, false).unwrap();
/// assert_eq!(String::from_utf8(out).unwrap(), "1 1\n0 1\n");
/// ```
pub fn render_preview(
    out: &mut impl Write,
    grid: &Grid,
    shape: &FoundShape,
    colored: bool,
) -> io::Result<()> {
    if grid.columns() == 0 {
        return out.flush();
    }
    for (row, cells) in grid.row_slices().enumerate() {
        for (col, &cell) in cells.iter().enumerate() {
            if col > 0 {
                queue!(out, Print(" "))?;
            }
            let digit = if cell { "1" } else { "0" };
            let color = if !colored || !cell {
                None
            } else if shape.covers(row, col) {
                Some(SHAPE_COLOR)
            } else {
                Some(SET_COLOR)
            };
            match color {
                Some(color) => queue!(out, SetForegroundColor(color), Print(digit), ResetColor)?,
                None => queue!(out, Print(digit))?,
            }
        }
        queue!(out, Print("\n"))?;
    }
    out.flush()
}
