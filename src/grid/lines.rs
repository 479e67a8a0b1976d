use smallvec::SmallVec;
use tracing::*;

// Most rows in the grids we see hold only a handful of runs
const DEFAULT_SMALLVEC_SIZE: usize = 32;

/// A type alias for SmallVec with an optimized stack-allocated buffer size.
pub type SmallVecLine<T> = SmallVec<[T; DEFAULT_SMALLVEC_SIZE]>;

/// Represents the kind of a run: `Full` runs are made of `1`s, `Empty` runs of `0`s.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum LineKind {
    Empty,
    Full,
}

impl From<bool> for LineKind {
    fn from(value: bool) -> Self {
        if value {
            LineKind::Full
        } else {
            LineKind::Empty
        }
    }
}

/// A maximal run of equal cells along one row or column.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct LineInfo {
    pub start: usize,
    pub length: usize,
    pub kind: LineKind,
}

impl LineInfo {
    /// Creates a new `LineInfo` with the given start position, length, and kind.
    ///
    /// # Example
    /// ```
    /// use figsearch::{LineInfo, LineKind};
    ///
    /// let line = LineInfo::new(0, 10, LineKind::Full);
    /// assert_eq!(line.start, 0);
    /// assert_eq!(line.length, 10);
    /// assert_eq!(line.kind, LineKind::Full);
    /// assert_eq!(line.end(), 9);
    /// ```
    pub fn new(start: usize, length: usize, kind: LineKind) -> Self {
        Self {
            start,
            length,
            kind,
        }
    }

    /// Index of the last cell of the run.
    pub fn end(&self) -> usize {
        self.start + self.length - 1
    }
}

/// Splits a line of `length` cells into maximal runs of equal cells.
///
/// Runs are returned in order and always cover the whole line.
///
/// # Example
/// ```
/// use figsearch::{collect_runs, LineInfo, LineKind};
///
/// let cells = [true, true, false, true];
/// let runs = collect_runs(cells.len(), |i| cells[i]);
/// assert_eq!(
///     runs.as_slice(),
///     &[
///         LineInfo::new(0, 2, LineKind::Full),
///         LineInfo::new(2, 1, LineKind::Empty),
///         LineInfo::new(3, 1, LineKind::Full),
///     ]
/// );
/// ```
pub fn collect_runs(length: usize, is_set: impl Fn(usize) -> bool) -> SmallVecLine<LineInfo> {
    trace!("Collecting runs over {} cells", length);
    let mut runs = SmallVecLine::new();
    if length == 0 {
        return runs;
    }
    let mut current_start = 0;
    let mut current_kind = LineKind::from(is_set(0));
    let mut current_length = 1;

    for i in 1..length {
        let new_kind = LineKind::from(is_set(i));
        if new_kind == current_kind {
            current_length += 1;
        } else {
            runs.push(LineInfo::new(current_start, current_length, current_kind));
            current_start = i;
            current_kind = new_kind;
            current_length = 1;
        }
    }

    // Add the final run
    runs.push(LineInfo::new(current_start, current_length, current_kind));
    runs
}

/// Returns the first longest `Full` run of a line, if the line has any set cell.
///
/// Later runs only win when they are strictly longer.
pub fn longest_full_run(length: usize, is_set: impl Fn(usize) -> bool) -> Option<LineInfo> {
    let mut best: Option<LineInfo> = None;
    let mut current_start = 0;
    let mut current_length = 0;

    // One step past the end closes a run that touches the last cell.
    for i in 0..=length {
        if i < length && is_set(i) {
            if current_length == 0 {
                current_start = i;
            }
            current_length += 1;
            continue;
        }
        if current_length > best.as_ref().map_or(0, |run| run.length) {
            best = Some(LineInfo::new(current_start, current_length, LineKind::Full));
        }
        current_length = 0;
    }
    best
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use test_case::test_case;

    #[test]
    fn test_collect_runs_empty_line() {
        assert!(collect_runs(0, |_| true).is_empty());
    }

    #[test]
    fn test_collect_runs_alternating() {
        let runs = collect_runs(4, |i| i % 2 == 1);
        assert_eq!(
            runs,
            SmallVecLine::from_vec(vec![
                LineInfo::new(0, 1, LineKind::Empty),
                LineInfo::new(1, 1, LineKind::Full),
                LineInfo::new(2, 1, LineKind::Empty),
                LineInfo::new(3, 1, LineKind::Full),
            ])
        );
    }

    #[test_case(&[] => None ; "empty line")]
    #[test_case(&[0, 0, 0] => None ; "no set cell")]
    #[test_case(&[1] => Some((0, 1)) ; "single cell")]
    #[test_case(&[1, 0, 1, 1, 1] => Some((2, 3)) ; "run at the end")]
    #[test_case(&[1, 1, 0, 1, 1] => Some((0, 2)) ; "first of equal runs wins")]
    #[test_case(&[0, 1, 1, 1, 0, 1, 1, 1, 1] => Some((5, 4)) ; "strictly longer run replaces")]
    fn test_longest_full_run(cells: &[u8]) -> Option<(usize, usize)> {
        longest_full_run(cells.len(), |i| cells[i] == 1).map(|run| (run.start, run.length))
    }

    proptest! {
        #[test]
        fn test_collect_runs_proptest(pattern in prop::collection::vec(any::<bool>(), 0..100)) {
            let runs = collect_runs(pattern.len(), |i| pattern[i]);

            // Runs tile the line and alternate in kind
            let total: usize = runs.iter().map(|run| run.length).sum();
            prop_assert_eq!(total, pattern.len());
            let mut next_start = 0;
            for (i, run) in runs.iter().enumerate() {
                prop_assert_eq!(run.start, next_start);
                if i > 0 {
                    prop_assert_ne!(run.kind, runs[i - 1].kind);
                }
                for cell in &pattern[run.start..run.start + run.length] {
                    prop_assert_eq!(LineKind::from(*cell), run.kind);
                }
                next_start += run.length;
            }
        }

        #[test]
        fn test_longest_full_run_matches_runs(pattern in prop::collection::vec(any::<bool>(), 0..100)) {
            let expected = collect_runs(pattern.len(), |i| pattern[i])
                .into_iter()
                .filter(|run| run.kind == LineKind::Full)
                .fold(None::<LineInfo>, |best, run| match best {
                    Some(best) if best.length >= run.length => Some(best),
                    _ => Some(run),
                });
            prop_assert_eq!(longest_full_run(pattern.len(), |i| pattern[i]), expected);
        }
    }
}
