//! Reading grids from their textual form.
//!
//! The format is a header with the number of rows and columns, followed by
//! exactly `rows * columns` cells, each `0` or `1`. Tokens are separated by any
//! whitespace, so line breaks are only a convention:
//!
//! ```text
//! 3 3
//! 1 1 0
//! 1 1 0
//! 0 0 0
//! ```
//!
//! A zero dimension is allowed and yields an empty grid.

use crate::{FormatError, Grid, GridError};
use std::{fs, path::Path, str::FromStr};
use tracing::*;

impl FromStr for Grid {
    type Err = FormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_grid(s)
    }
}

impl Grid {
    /// Loads and validates a grid file.
    ///
    /// # Example
    /// ```no_run
    /// use figsearch::Grid;
    ///
    /// let grid = Grid::from_path("grid.txt").unwrap();
    /// println!("{grid}");
    /// ```
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, GridError> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| GridError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let grid = parse_grid(&text).inspect_err(|e| debug!("Rejected {}: {}", path.display(), e))?;
        debug!(
            "Loaded {}x{} grid from {}",
            grid.rows(),
            grid.columns(),
            path.display()
        );
        Ok(grid)
    }

    /// Formats the grid with its header, in the form [`parse_grid`] reads.
    ///
    /// # Example
    /// ```
    /// use figsearch::bitmap;
    ///
    /// let grid = bitmap![[1, 0], [0, 1]].unwrap();
    /// assert_eq!(grid.to_text(), "2 2\n1 0\n0 1\n");
    /// ```
    pub fn to_text(&self) -> String {
        format!("{} {}\n{}", self.rows(), self.columns(), self)
    }
}

/// Parses and validates a grid.
///
/// Nothing is built unless the whole input is valid: a header of two
/// non-negative integers, then exactly `rows * columns` cells that are `0` or `1`.
///
/// # Example
/// ```
/// use figsearch::{loader::parse_grid, FormatError};
///
/// let grid = parse_grid("2 3\n1 0 1\n0 1 0").unwrap();
/// assert_eq!((grid.rows(), grid.columns()), (2, 3));
///
/// assert_eq!(
///     parse_grid("2 2\n1 0 2 1"),
///     Err(FormatError::InvalidCell { row: 1, col: 0, token: "2".into() })
/// );
/// ```
pub fn parse_grid(input: &str) -> Result<Grid, FormatError> {
    let mut tokens = input.split_ascii_whitespace();
    let rows = parse_dimension(tokens.next())?;
    let columns = parse_dimension(tokens.next())?;
    let expected = rows
        .checked_mul(columns)
        .ok_or(FormatError::DimensionsOverflow { rows, columns })?;
    trace!("Parsing {}x{} grid", rows, columns);

    // The header alone must not decide how much we allocate.
    let mut cells = Vec::with_capacity(expected.min(input.len()));
    for (index, token) in tokens.by_ref().take(expected).enumerate() {
        cells.push(parse_cell(token, index / columns, index % columns)?);
    }
    if cells.len() < expected {
        return Err(FormatError::MissingCells {
            expected,
            found: cells.len(),
        });
    }
    let extra = tokens.count();
    if extra > 0 {
        return Err(FormatError::TrailingData { expected, extra });
    }

    Grid::new(rows, columns, cells)
}

fn parse_dimension(token: Option<&str>) -> Result<usize, FormatError> {
    let token = token.ok_or(FormatError::MissingDimensions)?;
    token.parse().map_err(|_| FormatError::InvalidDimension {
        token: token.to_string(),
    })
}

fn parse_cell(token: &str, row: usize, col: usize) -> Result<bool, FormatError> {
    match token {
        "0" => Ok(false),
        "1" => Ok(true),
        _ => Err(FormatError::InvalidCell {
            row,
            col,
            token: token.to_string(),
        }),
    }
}
