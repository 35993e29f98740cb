use serde::{Deserialize, Serialize};

/// A line/column coordinate inside a document (both 0-based, column in bytes).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Point {
    pub line: usize,
    pub col: usize,
}

impl Point {
    pub fn new(line: usize, col: usize) -> Self {
        Self { line, col }
    }
}

/// A selection between two points.
///
/// Callers do not always pass `start <= end`. The raw endpoints are kept as
/// given and every containment test goes through [`PosRange::min_line`] and
/// [`PosRange::max_line`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PosRange {
    pub start: Point,
    pub end: Point,
}

impl PosRange {
    pub fn new(start: Point, end: Point) -> Self {
        Self { start, end }
    }

    /// Convenience constructor from raw line/column pairs.
    pub fn from_coords(
        start_line: usize,
        start_col: usize,
        end_line: usize,
        end_col: usize,
    ) -> Self {
        Self::new(
            Point::new(start_line, start_col),
            Point::new(end_line, end_col),
        )
    }

    /// A zero-width range at the start of `line`.
    pub fn line(line: usize) -> Self {
        Self::from_coords(line, 0, line, 0)
    }

    pub fn min_line(&self) -> usize {
        self.start.line.min(self.end.line)
    }

    pub fn max_line(&self) -> usize {
        self.start.line.max(self.end.line)
    }
}

/// A fully resolved position: line, column and absolute byte offset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Pos {
    pub line: usize,
    pub col: usize,
    pub offset: usize,
}

/// Where a heading or block anchor sits in the document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Loc {
    pub start: Pos,
    pub end: Pos,
}

impl Loc {
    /// Whether every line of `range` falls within this location's lines.
    pub fn contains_lines(&self, range: &PosRange) -> bool {
        range.min_line() >= self.start.line && range.max_line() <= self.end.line
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn min_and_max_line_ignore_endpoint_order() {
        let range = PosRange::from_coords(10, 0, 3, 5);
        assert_eq!(range.min_line(), 3);
        assert_eq!(range.max_line(), 10);
    }

    #[test]
    fn contains_lines_requires_whole_range_inside() {
        let loc = Loc {
            start: Pos {
                line: 6,
                col: 0,
                offset: 60,
            },
            end: Pos {
                line: 6,
                col: 15,
                offset: 75,
            },
        };
        assert!(loc.contains_lines(&PosRange::from_coords(6, 0, 6, 4)));
        assert!(!loc.contains_lines(&PosRange::from_coords(5, 0, 6, 4)));
        assert!(!loc.contains_lines(&PosRange::from_coords(6, 0, 1, 8)));
    }
}
