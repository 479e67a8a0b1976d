use std::fmt;

/// A cell coordinate, or the [`Position::NONE`] sentinel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    /// Marks "no shape found". No grid can hold a cell at this coordinate.
    pub const NONE: Position = Position {
        row: usize::MAX,
        col: usize::MAX,
    };

    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    pub fn is_none(&self) -> bool {
        *self == Self::NONE
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.row, self.col)
    }
}

/// The result of a search: a line between two cells or a square between two corners.
///
/// For lines `length` counts the cells of the run. For squares `start` is the
/// top-left corner, `end` the bottom-right one and `length` the side.
///
/// "Nothing found" is a value, not an error: callers check [`FoundShape::is_found`].
///
/// # Example
/// ```
/// use figsearch::{FoundShape, Position};
///
/// let shape = FoundShape::new(Position::new(0, 2), Position::new(0, 4), 3);
/// assert!(shape.is_found());
/// assert_eq!(shape.to_string(), "0 2 0 4");
///
/// assert!(!FoundShape::NOT_FOUND.is_found());
/// assert!(FoundShape::NOT_FOUND.start.is_none());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct FoundShape {
    pub start: Position,
    pub end: Position,
    pub length: usize,
}

impl FoundShape {
    pub const NOT_FOUND: FoundShape = FoundShape {
        start: Position::NONE,
        end: Position::NONE,
        length: 0,
    };

    pub const fn new(start: Position, end: Position, length: usize) -> Self {
        Self { start, end, length }
    }

    /// Builds a square result from its top-left corner and side.
    pub fn square(top_left: Position, side: usize) -> Self {
        if side == 0 {
            return Self::NOT_FOUND;
        }
        let end = Position::new(top_left.row + side - 1, top_left.col + side - 1);
        Self::new(top_left, end, side)
    }

    pub fn is_found(&self) -> bool {
        self.length > 0
    }

    /// The endpoints, or `None` when nothing was found.
    pub fn endpoints(&self) -> Option<(Position, Position)> {
        self.is_found().then_some((self.start, self.end))
    }

    /// `true` when `(row, col)` is a cell of this line, or of this square's border.
    pub fn covers(&self, row: usize, col: usize) -> bool {
        let Some((start, end)) = self.endpoints() else {
            return false;
        };
        let inside = (start.row..=end.row).contains(&row) && (start.col..=end.col).contains(&col);
        inside && (row == start.row || row == end.row || col == start.col || col == end.col)
    }
}

impl Default for FoundShape {
    fn default() -> Self {
        Self::NOT_FOUND
    }
}

/// Prints `<start.row> <start.col> <end.row> <end.col>`.
impl fmt::Display for FoundShape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.start, self.end)
    }
}
