use crate::grid::{
    longest_full_run, Column, FoundShape, Grid, LineInfo, LineTrait, Row, SearchConfig,
};
use rayon::prelude::*;
use tracing::*;

/// Finds the longest run of set cells in a row (`horizontal`) or a column.
///
/// The first longest run in scan order wins: rows top to bottom, each left to
/// right, or columns left to right, each top to bottom.
///
/// # Example
/// ```
/// use figsearch::{bitmap, find_longest_line, Position};
///
/// let grid = bitmap![
///     [1, 0, 1],
///     [0, 0, 1],
///     [1, 1, 1],
/// ]
/// .unwrap();
///
/// let vertical = find_longest_line(&grid, false);
/// assert_eq!(vertical.start, Position::new(0, 2));
/// assert_eq!(vertical.end, Position::new(2, 2));
/// assert_eq!(vertical.length, 3);
/// ```
pub fn find_longest_line(grid: &Grid, horizontal: bool) -> FoundShape {
    let config = SearchConfig::default();
    if horizontal {
        longest_line::<Row>(grid, &config)
    } else {
        longest_line::<Column>(grid, &config)
    }
}

/// Generic line search in the direction given by `T`.
pub fn longest_line<T: LineTrait>(grid: &Grid, config: &SearchConfig) -> FoundShape {
    let (count, length) = (T::count(grid), T::length(grid));
    debug!(
        "Searching {} {}s of {} cells, parallel={}",
        count,
        T::NAME,
        length,
        config.enable_parallel
    );
    if count == 0 || length == 0 {
        return FoundShape::NOT_FOUND;
    }

    let best_in_line = |index: usize| {
        trace!("Scanning {} {}", T::NAME, index);
        longest_full_run(length, |offset| T::value(grid, index, offset)).map(|run| (index, run))
    };

    let best = if config.enable_parallel {
        let per_line: Vec<_> = (0..count).into_par_iter().map(best_in_line).collect();
        first_longest(per_line.into_iter().flatten())
    } else {
        first_longest((0..count).filter_map(best_in_line))
    };

    match best {
        Some((index, run)) => FoundShape::new(
            T::position(index, run.start),
            T::position(index, run.end()),
            run.length,
        ),
        None => FoundShape::NOT_FOUND,
    }
}

/// Keeps the first candidate of maximal length.
fn first_longest(
    candidates: impl Iterator<Item = (usize, LineInfo)>,
) -> Option<(usize, LineInfo)> {
    candidates.fold(None, |best, candidate| match best {
        Some(best) if best.1.length >= candidate.1.length => Some(best),
        _ => Some(candidate),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::tests::arb_grid;
    use crate::{bitmap, Position};
    use pretty_assertions::assert_eq;
    use proptest::prelude::*;
    use test_case::test_case;

    fn line(start: (usize, usize), end: (usize, usize), length: usize) -> FoundShape {
        FoundShape::new(
            Position::new(start.0, start.1),
            Position::new(end.0, end.1),
            length,
        )
    }

    #[test]
    fn test_first_row_wins_tie() {
        let grid = bitmap![[1, 1, 0], [1, 1, 0], [0, 0, 0]].unwrap();
        assert_eq!(find_longest_line(&grid, true), line((0, 0), (0, 1), 2));
    }

    #[test]
    fn test_run_at_end_of_row() {
        let grid = bitmap![[1, 0, 1, 1, 1]].unwrap();
        assert_eq!(find_longest_line(&grid, true), line((0, 2), (0, 4), 3));
    }

    #[test]
    fn test_first_column_wins_tie() {
        let grid = bitmap![[0, 1, 1], [0, 1, 1], [1, 0, 0]].unwrap();
        assert_eq!(find_longest_line(&grid, false), line((0, 1), (1, 1), 2));
    }

    #[test]
    fn test_later_longer_run_replaces() {
        let grid = bitmap![[1, 1, 0, 0], [0, 1, 1, 1]].unwrap();
        assert_eq!(find_longest_line(&grid, true), line((1, 1), (1, 3), 3));
    }

    #[test]
    fn test_single_cell() {
        let grid = bitmap![[0, 0], [0, 1]].unwrap();
        assert_eq!(find_longest_line(&grid, true), line((1, 1), (1, 1), 1));
        assert_eq!(find_longest_line(&grid, false), line((1, 1), (1, 1), 1));
    }

    #[test_case(0, 0 ; "no rows or columns")]
    #[test_case(0, 4 ; "no rows")]
    #[test_case(4, 0 ; "no columns")]
    fn test_empty_grid(rows: usize, columns: usize) {
        let grid = Grid::new(rows, columns, Vec::new()).unwrap();
        assert_eq!(find_longest_line(&grid, true), FoundShape::NOT_FOUND);
        assert_eq!(find_longest_line(&grid, false), FoundShape::NOT_FOUND);
    }

    #[test]
    fn test_all_zero() {
        let grid = Grid::new(3, 7, vec![false; 21]).unwrap();
        assert_eq!(find_longest_line(&grid, true), FoundShape::NOT_FOUND);
        assert_eq!(find_longest_line(&grid, false), FoundShape::NOT_FOUND);
    }

    /// Longest run length by direct counting.
    fn brute_force_length(grid: &Grid, horizontal: bool) -> usize {
        let (outer, inner) = if horizontal {
            (grid.rows(), grid.columns())
        } else {
            (grid.columns(), grid.rows())
        };
        let mut longest = 0;
        for i in 0..outer {
            let mut current = 0;
            for j in 0..inner {
                let set = if horizontal {
                    grid.value_at(i, j)
                } else {
                    grid.value_at(j, i)
                };
                current = if set { current + 1 } else { 0 };
                longest = longest.max(current);
            }
        }
        longest
    }

    proptest! {
        #[test]
        fn test_horizontal_run_is_maximal(grid in arb_grid(12)) {
            let found = find_longest_line(&grid, true);
            prop_assert_eq!(found.length, brute_force_length(&grid, true));
            if let Some((start, end)) = found.endpoints() {
                prop_assert_eq!(start.row, end.row);
                prop_assert_eq!(end.col - start.col + 1, found.length);
                for col in start.col..=end.col {
                    prop_assert!(grid.value_at(start.row, col));
                }
                if start.col > 0 {
                    prop_assert!(!grid.value_at(start.row, start.col - 1));
                }
                prop_assert_ne!(grid.get(end.row, end.col + 1), Some(true));
            }
        }

        #[test]
        fn test_vertical_run_is_maximal(grid in arb_grid(12)) {
            let found = find_longest_line(&grid, false);
            prop_assert_eq!(found.length, brute_force_length(&grid, false));
            if let Some((start, end)) = found.endpoints() {
                prop_assert_eq!(start.col, end.col);
                prop_assert_eq!(end.row - start.row + 1, found.length);
                for row in start.row..=end.row {
                    prop_assert!(grid.value_at(row, start.col));
                }
                if start.row > 0 {
                    prop_assert!(!grid.value_at(start.row - 1, start.col));
                }
                prop_assert_ne!(grid.get(end.row + 1, end.col), Some(true));
            }
        }

        #[test]
        fn test_no_earlier_run_of_same_length(grid in arb_grid(10)) {
            let found = find_longest_line(&grid, true);
            if let Some((start, _)) = found.endpoints() {
                for row in 0..grid.rows() {
                    for col in 0..grid.columns() {
                        if (row, col) >= (start.row, start.col) {
                            break;
                        }
                        let fits = col + found.length <= grid.columns()
                            && (col..col + found.length).all(|c| grid.value_at(row, c));
                        prop_assert!(!fits, "earlier run at ({}, {})", row, col);
                    }
                }
            }
        }

        #[test]
        fn test_no_earlier_column_run_of_same_length(grid in arb_grid(10)) {
            let found = find_longest_line(&grid, false);
            if let Some((start, _)) = found.endpoints() {
                for col in 0..grid.columns() {
                    for row in 0..grid.rows() {
                        if (col, row) >= (start.col, start.row) {
                            break;
                        }
                        let fits = row + found.length <= grid.rows()
                            && (row..row + found.length).all(|r| grid.value_at(r, col));
                        prop_assert!(!fits, "earlier run at ({}, {})", row, col);
                    }
                }
            }
        }
    }
}
