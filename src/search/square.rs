use crate::grid::{FoundShape, Grid, Position, SearchConfig};
use rayon::prelude::*;
use tracing::*;

/// Finds the largest square whose four border edges consist of set cells.
///
/// Interior cells are not checked, so a hollow ring counts as a square. A single
/// set cell is a square of side 1. Among squares of equal side, the one whose
/// top-left corner comes first in row-major order wins.
///
/// # Example
/// ```
/// use figsearch::{bitmap, find_largest_square, Position};
///
/// let grid = bitmap![
///     [0, 1, 1, 1],
///     [0, 1, 0, 1],
///     [0, 1, 1, 1],
/// ]
/// .unwrap();
///
/// let square = find_largest_square(&grid);
/// assert_eq!(square.start, Position::new(0, 1));
/// assert_eq!(square.end, Position::new(2, 3));
/// assert_eq!(square.length, 3);
/// ```
pub fn find_largest_square(grid: &Grid) -> FoundShape {
    largest_square(grid, &SearchConfig::default())
}

/// Square search with an explicit configuration.
pub fn largest_square(grid: &Grid, config: &SearchConfig) -> FoundShape {
    debug!(
        "Searching squares in {}x{} grid, parallel={}",
        grid.rows(),
        grid.columns(),
        config.enable_parallel
    );
    if grid.is_empty() {
        return FoundShape::NOT_FOUND;
    }

    let best = if config.enable_parallel {
        let per_row: Vec<_> = (0..grid.rows())
            .into_par_iter()
            .map(|row| largest_in_row(grid, row, 0))
            .collect();
        per_row
            .into_iter()
            .flatten()
            .fold(None, |best: Option<(Position, usize)>, candidate| match best {
                Some(best) if best.1 >= candidate.1 => Some(best),
                _ => Some(candidate),
            })
    } else {
        let mut best: Option<(Position, usize)> = None;
        for row in 0..grid.rows() {
            let floor = best.map_or(0, |(_, side)| side);
            // Corners further down cannot fit anything larger.
            if grid.rows() - row <= floor {
                break;
            }
            if let Some(candidate) = largest_in_row(grid, row, floor) {
                best = Some(candidate);
            }
        }
        best
    };

    best.map_or(FoundShape::NOT_FOUND, |(corner, side)| {
        FoundShape::square(corner, side)
    })
}

/// First largest square anchored in `row` with a side strictly above `floor`.
fn largest_in_row(grid: &Grid, row: usize, mut floor: usize) -> Option<(Position, usize)> {
    trace!("Scanning corners in row {} above side {}", row, floor);
    let mut best = None;
    for col in 0..grid.columns() {
        // The reach only shrinks as the corner moves right.
        if max_side(grid, row, col) <= floor {
            break;
        }
        let side = largest_square_at(grid, row, col);
        if side > floor {
            best = Some((Position::new(row, col), side));
            floor = side;
        }
    }
    best
}

/// Largest side that fits inside the grid with its top-left corner at `(row, col)`.
fn max_side(grid: &Grid, row: usize, col: usize) -> usize {
    (grid.rows() - row).min(grid.columns() - col)
}

/// Side of the largest border square with its top-left corner at `(row, col)`,
/// or 0 when the corner cell is unset or outside the grid.
///
/// The side grows one cell at a time along the top and left edges and stops at
/// the first unset cell on either, since no larger square can pass it.
pub fn largest_square_at(grid: &Grid, row: usize, col: usize) -> usize {
    if grid.get(row, col) != Some(true) {
        return 0;
    }
    let mut largest = 0;
    for side in 1..=max_side(grid, row, col) {
        let last = side - 1;
        if !grid.value_at(row, col + last) || !grid.value_at(row + last, col) {
            break;
        }
        let closed = (0..side).all(|k| grid.value_at(row + last, col + k))
            && (0..side).all(|k| grid.value_at(row + k, col + last));
        if closed {
            largest = side;
        }
    }
    largest
}

/// Checks that all four edges of the square at `top_left` with the given side are set.
///
/// Squares that do not fit inside the grid are never valid.
///
/// # Example
/// ```
/// use figsearch::{bitmap, search::square::is_border_square, Position};
///
/// let grid = bitmap![[1, 1, 1], [1, 0, 1], [1, 1, 1]].unwrap();
/// assert!(is_border_square(&grid, Position::new(0, 0), 3));
/// assert!(!is_border_square(&grid, Position::new(1, 1), 1));
/// assert!(!is_border_square(&grid, Position::new(1, 1), 3));
/// ```
pub fn is_border_square(grid: &Grid, top_left: Position, side: usize) -> bool {
    let Position { row, col } = top_left;
    if side == 0 || row >= grid.rows() || col >= grid.columns() || side > max_side(grid, row, col)
    {
        return false;
    }
    let last = side - 1;
    (0..side).all(|k| {
        grid.value_at(row, col + k)
            && grid.value_at(row + last, col + k)
            && grid.value_at(row + k, col)
            && grid.value_at(row + k, col + last)
    })
}
