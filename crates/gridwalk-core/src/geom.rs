//! Geometry primitives: [`Pos`] and [`Range`].
//!
//! Positions are `(row, col)` pairs. Rows grow downward, columns grow to the
//! right, and ordering is row-major.

use std::fmt;
use std::ops::Sub;

use crate::direction::Direction;

// ---------------------------------------------------------------------------
// Pos
// ---------------------------------------------------------------------------

/// A cell position on a grid. Signed so that off-grid neighbours can be
/// formed and then rejected by a bounds check.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Pos {
    pub row: i32,
    pub col: i32,
}

impl Pos {
    /// Origin (0, 0).
    pub const ZERO: Self = Self { row: 0, col: 0 };

    /// Create a new position.
    #[inline]
    pub const fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }

    /// Return a position shifted by (dr, dc).
    #[inline]
    pub const fn shift(self, dr: i32, dc: i32) -> Self {
        Self {
            row: self.row + dr,
            col: self.col + dc,
        }
    }

    /// The adjacent position one step in `dir`.
    #[inline]
    pub const fn step(self, dir: Direction) -> Self {
        let d = dir.delta();
        self.shift(d.row, d.col)
    }

    /// The four cardinal neighbours (up, right, down, left).
    #[inline]
    pub fn neighbors_4(self) -> [Pos; 4] {
        [
            self.shift(-1, 0),
            self.shift(0, 1),
            self.shift(1, 0),
            self.shift(0, -1),
        ]
    }
}

impl fmt::Display for Pos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

impl Sub for Pos {
    type Output = Self;
    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Self::new(self.row - rhs.row, self.col - rhs.col)
    }
}

// ---------------------------------------------------------------------------
// Range
// ---------------------------------------------------------------------------

/// A half-open rectangle \[min, max). `min` is inclusive, `max` is exclusive.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Range {
    pub min: Pos,
    pub max: Pos,
}

impl Range {
    /// Create a new range from two corners and canonicalize so that
    /// `min` ≤ `max` on each axis.
    #[inline]
    pub fn new(row0: i32, col0: i32, row1: i32, col1: i32) -> Self {
        Self {
            min: Pos::new(row0.min(row1), col0.min(col1)),
            max: Pos::new(row0.max(row1), col0.max(col1)),
        }
    }

    /// A range anchored at the origin with the given dimensions.
    #[inline]
    pub fn with_size(rows: i32, cols: i32) -> Self {
        Self::new(0, 0, rows.max(0), cols.max(0))
    }

    /// Number of rows.
    #[inline]
    pub fn rows(self) -> i32 {
        self.max.row - self.min.row
    }

    /// Number of columns.
    #[inline]
    pub fn cols(self) -> i32 {
        self.max.col - self.min.col
    }

    /// Total number of cells in the range.
    #[inline]
    pub fn len(self) -> usize {
        if self.is_empty() {
            return 0;
        }
        (self.rows() as usize) * (self.cols() as usize)
    }

    /// Whether the range has zero or negative area.
    #[inline]
    pub fn is_empty(self) -> bool {
        self.min.row >= self.max.row || self.min.col >= self.max.col
    }

    /// Whether `p` is inside the half-open range.
    #[inline]
    pub fn contains(self, p: Pos) -> bool {
        p.row >= self.min.row && p.row < self.max.row && p.col >= self.min.col && p.col < self.max.col
    }

    /// Smallest range that contains both ranges.
    #[inline]
    pub fn union(self, other: Range) -> Self {
        if self.is_empty() {
            return other;
        }
        if other.is_empty() {
            return self;
        }
        Self {
            min: Pos::new(self.min.row.min(other.min.row), self.min.col.min(other.min.col)),
            max: Pos::new(self.max.row.max(other.max.row), self.max.col.max(other.max.col)),
        }
    }

    /// Smallest range containing every position in `points`.
    pub fn bounding<I: IntoIterator<Item = Pos>>(points: I) -> Self {
        points.into_iter().fold(Range::default(), |acc, p| {
            acc.union(Range {
                min: p,
                max: p.shift(1, 1),
            })
        })
    }

    /// Row-major iterator over every position in the range.
    #[inline]
    pub fn iter(self) -> RangeIter {
        RangeIter {
            range: self,
            cur: self.min,
        }
    }

    /// Every border cell paired with the direction pointing into the range.
    ///
    /// Corner cells appear twice, once per inward direction.
    pub fn edges(self) -> Vec<(Pos, Direction)> {
        if self.is_empty() {
            return Vec::new();
        }
        let last_row = self.max.row - 1;
        let last_col = self.max.col - 1;
        let mut out = Vec::with_capacity(2 * (self.rows() + self.cols()) as usize);
        for col in self.min.col..self.max.col {
            out.push((Pos::new(self.min.row, col), Direction::Down));
            out.push((Pos::new(last_row, col), Direction::Up));
        }
        for row in self.min.row..self.max.row {
            out.push((Pos::new(row, self.min.col), Direction::Right));
            out.push((Pos::new(row, last_col), Direction::Left));
        }
        out
    }
}

impl IntoIterator for Range {
    type Item = Pos;
    type IntoIter = RangeIter;
    #[inline]
    fn into_iter(self) -> RangeIter {
        self.iter()
    }
}

impl fmt::Display for Range {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}-{})", self.min, self.max)
    }
}

// ---------------------------------------------------------------------------
// RangeIter
// ---------------------------------------------------------------------------

/// Row-major iterator over the positions in a [`Range`].
#[derive(Clone, Debug)]
pub struct RangeIter {
    range: Range,
    cur: Pos,
}

impl Iterator for RangeIter {
    type Item = Pos;

    #[inline]
    fn next(&mut self) -> Option<Pos> {
        if self.cur.row >= self.range.max.row || self.range.is_empty() {
            return None;
        }
        let p = self.cur;
        self.cur.col += 1;
        if self.cur.col >= self.range.max.col {
            self.cur.col = self.range.min.col;
            self.cur.row += 1;
        }
        Some(p)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.range.is_empty() || self.cur.row >= self.range.max.row {
            return (0, Some(0));
        }
        let w = self.range.cols() as usize;
        let remaining_in_row = (self.range.max.col - self.cur.col) as usize;
        let remaining_rows = (self.range.max.row - self.cur.row - 1) as usize;
        let total = remaining_in_row + remaining_rows * w;
        (total, Some(total))
    }
}

impl ExactSizeIterator for RangeIter {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pos_arithmetic() {
        let a = Pos::new(1, 2);
        let b = Pos::new(3, 4);
        assert_eq!(b - a, Pos::new(2, 2));
        assert_eq!(a.shift(2, 2), b);
        assert_eq!(a.step(Direction::Left), Pos::new(1, 1));
    }

    #[test]
    fn pos_orders_by_row_then_col() {
        let mut v = vec![Pos::new(1, 0), Pos::new(0, 5), Pos::new(0, 1)];
        v.sort();
        assert_eq!(v, vec![Pos::new(0, 1), Pos::new(0, 5), Pos::new(1, 0)]);
    }

    #[test]
    fn pos_step() {
        let p = Pos::new(2, 2);
        assert_eq!(p.step(Direction::Up), Pos::new(1, 2));
        assert_eq!(p.step(Direction::Right), Pos::new(2, 3));
    }

    #[test]
    fn range_basics() {
        let r = Range::with_size(2, 3);
        assert_eq!(r.rows(), 2);
        assert_eq!(r.cols(), 3);
        assert_eq!(r.len(), 6);
        assert!(r.contains(Pos::new(1, 2)));
        assert!(!r.contains(Pos::new(2, 0)));
        assert!(!r.contains(Pos::new(0, -1)));
    }

    #[test]
    fn range_auto_canonicalize() {
        let r = Range::new(3, 2, 0, 0);
        assert_eq!(r.min, Pos::new(0, 0));
        assert_eq!(r.max, Pos::new(3, 2));
    }

    #[test]
    fn range_iter_is_row_major() {
        let pts: Vec<_> = Range::with_size(2, 3).iter().collect();
        assert_eq!(pts.len(), 6);
        assert_eq!(pts[0], Pos::new(0, 0));
        assert_eq!(pts[2], Pos::new(0, 2));
        assert_eq!(pts[5], Pos::new(1, 2));
    }

    #[test]
    fn empty_range_iter() {
        let r = Range::new(0, 0, 0, 4);
        assert!(r.is_empty());
        assert_eq!(r.iter().count(), 0);
        assert!(r.edges().is_empty());
    }

    #[test]
    fn bounding_covers_negative_points() {
        let r = Range::bounding([Pos::new(-2, 3), Pos::new(4, -1)]);
        assert_eq!(r.min, Pos::new(-2, -1));
        assert_eq!(r.max, Pos::new(5, 4));
    }

    #[test]
    fn edges_point_inward() {
        let r = Range::with_size(2, 3);
        let edges = r.edges();
        assert_eq!(edges.len(), 2 * (2 + 3));
        for (p, d) in edges {
            assert!(r.contains(p));
            assert!(r.contains(p.step(d)));
        }
    }
}
