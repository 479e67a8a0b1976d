//! This crate searches binary (0/1) grids for simple shapes: the longest horizontal
//! or vertical run of `1`s and the largest square whose border is made only of `1`s.
//! Grids are loaded from a whitespace-delimited text format, see [`loader`].
//!
//! # Example
//! ```
//! use figsearch::{search, Grid, Mode, Position};
//!
//! let grid: Grid = "3 3\n1 1 0\n1 1 0\n0 0 0".parse().unwrap();
//!
//! let line = search(&grid, Mode::HLine);
//! assert_eq!(line.start, Position::new(0, 0));
//! assert_eq!(line.end, Position::new(0, 1));
//!
//! let square = search(&grid, Mode::Square);
//! assert_eq!(square.length, 2);
//! ```

/// Debug helpers that save a rendered grid to disk.
///
/// # Example
/// ```no_run
/// use figsearch::{debug, drawing::DrawingConfig, search, Grid, Mode};
///
/// let grid = Grid::from_path("tests/data/square.txt").unwrap();
/// let shape = search(&grid, Mode::Square);
/// debug::save_image_with_shape(&grid, &shape, "square.png", &DrawingConfig::default()).unwrap();
/// ```
#[cfg(feature = "drawing")]
pub mod debug;
/// This module draws grids and found shapes onto images.
/// It is feature-gated under the `drawing` feature and requires the `image` and `imageproc` crates.
///
/// The main components of this module are:
/// - [`DrawingConfig`](drawing::DrawingConfig): cell size and colors.
/// - [`Drawable`](drawing::Drawable): implemented by [`Grid`] and [`FoundShape`].
#[cfg(feature = "drawing")]
pub mod drawing;
pub mod grid;
pub mod loader;
pub mod preview;
pub mod search;

use std::path::PathBuf;
use thiserror::Error;

pub use grid::*;
pub use search::{
    line::find_longest_line, search, search_with_config, square::find_largest_square, Mode,
};

/// Reasons a textual grid is rejected by the loader.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum FormatError {
    #[error("missing grid dimensions")]
    MissingDimensions,

    #[error("invalid grid dimension {token:?}")]
    InvalidDimension { token: String },

    #[error("grid dimensions {rows}x{columns} are too large")]
    DimensionsOverflow { rows: usize, columns: usize },

    #[error("expected {expected} cells, found {found}")]
    MissingCells { expected: usize, found: usize },

    #[error("expected {expected} cells, found {extra} more")]
    TrailingData { expected: usize, extra: usize },

    #[error("invalid cell {token:?} at ({row}, {col}), expected 0 or 1")]
    InvalidCell { row: usize, col: usize, token: String },

    #[error("row {row} has {found} cells, expected {expected}")]
    RaggedRow {
        row: usize,
        expected: usize,
        found: usize,
    },
}

#[derive(Error, Debug)]
pub enum GridError {
    #[error("failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error(transparent)]
    Format(#[from] FormatError),

    #[error("image error: {0}")]
    ImageError(String),
}

/// Creates a [`Grid`] from rows of `0`/`1` literals.
///
/// Any non-zero value counts as a set cell. Rows of different lengths are
/// rejected with [`FormatError::RaggedRow`], so the macro yields a `Result`.
///
/// # Examples
///
/// ```rust
/// use figsearch::{bitmap, Position};
///
/// let grid = bitmap![
///     [1, 1, 0],
///     [1, 1, 0],
///     [0, 0, 0],
/// ]
/// .unwrap();
///
/// assert_eq!(grid.rows(), 3);
/// assert_eq!(grid.columns(), 3);
/// assert!(grid.value_at(1, 1));
/// assert!(!grid.value_at(2, 0));
/// ```
///
/// An empty invocation gives an empty grid:
///
/// ```rust
/// use figsearch::bitmap;
///
/// let grid = bitmap![].unwrap();
/// assert!(grid.is_empty());
/// ```
#[macro_export]
macro_rules! bitmap {
    ($([$($cell:expr),* $(,)?]),* $(,)?) => {
        $crate::Grid::from_rows(vec![
            $(vec![$(($cell) != 0),*]),*
        ])
    };
}
