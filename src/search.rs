//! Shape searches over a [`Grid`].
//!
//! Every search is a pure function of the grid. When several shapes share the
//! largest size, the first one met in scan order is returned:
//! row-major for horizontal lines and squares, column-major for vertical lines.

pub mod line;
pub mod square;

use crate::grid::{Column, FoundShape, Grid, Row, SearchConfig};
use std::fmt;
use tracing::*;

/// The shape to look for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mode {
    /// Longest run of set cells within a row.
    HLine,
    /// Longest run of set cells within a column.
    VLine,
    /// Largest square whose border cells are all set.
    Square,
}

impl Mode {
    pub fn name(&self) -> &'static str {
        match self {
            Mode::HLine => "horizontal line",
            Mode::VLine => "vertical line",
            Mode::Square => "square",
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Searches the grid for the given shape with the default configuration.
///
/// # Example
/// ```
/// use figsearch::{search, Grid, Mode, Position};
///
/// let grid: Grid = "1 5\n1 0 1 1 1".parse().unwrap();
/// let line = search(&grid, Mode::HLine);
/// assert_eq!(line.start, Position::new(0, 2));
/// assert_eq!(line.end, Position::new(0, 4));
/// assert_eq!(line.length, 3);
/// ```
pub fn search(grid: &Grid, mode: Mode) -> FoundShape {
    search_with_config(grid, mode, &SearchConfig::default())
}

/// Searches the grid for the given shape.
///
/// # Example
/// ```
/// use figsearch::{bitmap, search, search_with_config, Mode, SearchConfig};
///
/// let grid = bitmap![[1, 1, 1], [1, 0, 1], [1, 1, 1]].unwrap();
/// let config = SearchConfig::new(true);
/// assert_eq!(
///     search_with_config(&grid, Mode::Square, &config),
///     search(&grid, Mode::Square)
/// );
/// ```
pub fn search_with_config(grid: &Grid, mode: Mode, config: &SearchConfig) -> FoundShape {
    trace!("Searching for {} with config: {:?}", mode, config);
    let found = match mode {
        Mode::HLine => line::longest_line::<Row>(grid, config),
        Mode::VLine => line::longest_line::<Column>(grid, config),
        Mode::Square => square::largest_square(grid, config),
    };
    debug!(
        "Search for {} in {}x{} grid: {:?}",
        mode,
        grid.rows(),
        grid.columns(),
        found.endpoints()
    );
    found
}
