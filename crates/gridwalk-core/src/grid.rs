//! The [`Grid`] type, a rectangular 2D array of cells.
//!
//! Storage is a single row-major `Vec<T>`. Every row has the same length by
//! construction, so a jagged grid cannot be represented. Reads through
//! [`get`](Grid::get) are bounds-checked; indexing with `grid[pos]` panics
//! out of bounds, like a slice.

use std::fmt;
use std::ops::{Index, IndexMut};

use crate::geom::{Pos, Range};
use crate::loader::LoadError;

/// A rectangular grid of cells addressed by [`Pos`].
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "RawGrid<T>"))]
pub struct Grid<T> {
    cells: Vec<T>,
    rows: usize,
    cols: usize,
}

/// Wire form of a [`Grid`], checked by [`Grid::from_vec`] on the way in.
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct RawGrid<T> {
    cells: Vec<T>,
    rows: usize,
    cols: usize,
}

#[cfg(feature = "serde")]
impl<T> TryFrom<RawGrid<T>> for Grid<T> {
    type Error = LoadError;

    fn try_from(raw: RawGrid<T>) -> Result<Self, LoadError> {
        Grid::from_vec(raw.rows, raw.cols, raw.cells)
    }
}

impl<T: Clone> Grid<T> {
    /// Create a `rows × cols` grid filled with `fill`.
    pub fn new(rows: usize, cols: usize, fill: T) -> Self {
        Self {
            cells: vec![fill; rows * cols],
            rows,
            cols,
        }
    }
}

impl<T> Grid<T> {
    /// Build a grid from row-major cells.
    ///
    /// Fails with [`LoadError::Shape`] if `cells.len()` is not
    /// `rows * cols`.
    pub fn from_vec(rows: usize, cols: usize, cells: Vec<T>) -> Result<Self, LoadError> {
        if cells.len() != rows * cols {
            return Err(LoadError::Shape {
                rows,
                cols,
                len: cells.len(),
            });
        }
        Ok(Self { cells, rows, cols })
    }

    /// Build a grid from a list of rows, all of which must be the same length.
    pub fn from_rows(rows: Vec<Vec<T>>) -> Result<Self, LoadError> {
        let Some(first) = rows.first() else {
            return Err(LoadError::Empty);
        };
        let cols = first.len();
        let n_rows = rows.len();
        let mut cells = Vec::with_capacity(n_rows * cols);
        for (r, row) in rows.into_iter().enumerate() {
            if row.len() != cols {
                return Err(LoadError::Jagged {
                    row: r,
                    expected: cols,
                    found: row.len(),
                });
            }
            cells.extend(row);
        }
        Ok(Self {
            cells,
            rows: n_rows,
            cols,
        })
    }

    /// Number of rows.
    #[inline]
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns.
    #[inline]
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// The bounding range of the grid, anchored at the origin.
    #[inline]
    pub fn bounds(&self) -> Range {
        Range::with_size(self.rows as i32, self.cols as i32)
    }

    /// Whether `p` addresses a cell of this grid.
    #[inline]
    pub fn contains(&self, p: Pos) -> bool {
        self.index_of(p).is_some()
    }

    #[inline]
    fn index_of(&self, p: Pos) -> Option<usize> {
        if p.row < 0 || p.col < 0 {
            return None;
        }
        let (r, c) = (p.row as usize, p.col as usize);
        if r < self.rows && c < self.cols {
            Some(r * self.cols + c)
        } else {
            None
        }
    }

    /// The cell at `p`, or `None` if `p` is outside the grid.
    #[inline]
    pub fn get(&self, p: Pos) -> Option<&T> {
        self.index_of(p).map(|i| &self.cells[i])
    }

    /// Mutable access to the cell at `p`, or `None` if out of bounds.
    #[inline]
    pub fn get_mut(&mut self, p: Pos) -> Option<&mut T> {
        self.index_of(p).map(|i| &mut self.cells[i])
    }

    /// Replace the cell at `p`, returning the previous value. Returns `None`
    /// (and drops `value`) if `p` is out of bounds.
    pub fn set(&mut self, p: Pos, value: T) -> Option<T> {
        let slot = self.get_mut(p)?;
        Some(std::mem::replace(slot, value))
    }

    /// Swap two cells. Returns `false` if either position is out of bounds.
    pub fn swap(&mut self, a: Pos, b: Pos) -> bool {
        match (self.index_of(a), self.index_of(b)) {
            (Some(i), Some(j)) => {
                self.cells.swap(i, j);
                true
            }
            _ => false,
        }
    }

    /// Row `r` as a slice.
    pub fn row(&self, r: usize) -> Option<&[T]> {
        if r >= self.rows {
            return None;
        }
        Some(&self.cells[r * self.cols..(r + 1) * self.cols])
    }

    /// Iterator over the rows as slices.
    pub fn iter_rows(&self) -> impl Iterator<Item = &[T]> {
        self.cells.chunks(self.cols.max(1)).take(self.rows)
    }

    /// Iterator over the cells of column `c`, top to bottom.
    pub fn column(&self, c: usize) -> impl Iterator<Item = &T> {
        let cols = self.cols;
        let len = if c < cols { self.rows } else { 0 };
        (0..len).map(move |r| &self.cells[r * cols + c])
    }

    /// Row-major iterator over `(Pos, &T)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (Pos, &T)> {
        let cols = self.cols.max(1);
        self.cells
            .iter()
            .enumerate()
            .map(move |(i, v)| (Pos::new((i / cols) as i32, (i % cols) as i32), v))
    }

    /// Positions of every cell matching `pred`, in row-major order.
    pub fn positions(&self, mut pred: impl FnMut(&T) -> bool) -> Vec<Pos> {
        self.iter().filter(|&(_, v)| pred(v)).map(|(p, _)| p).collect()
    }

    /// Build a new grid of the same shape by mapping every cell.
    pub fn map<U>(&self, mut f: impl FnMut(Pos, &T) -> U) -> Grid<U> {
        Grid {
            cells: self.iter().map(|(p, v)| f(p, v)).collect(),
            rows: self.rows,
            cols: self.cols,
        }
    }
}

impl<T> Index<Pos> for Grid<T> {
    type Output = T;

    fn index(&self, p: Pos) -> &T {
        match self.index_of(p) {
            Some(i) => &self.cells[i],
            None => panic!("position {p} outside grid of {}x{}", self.rows, self.cols),
        }
    }
}

impl<T> IndexMut<Pos> for Grid<T> {
    fn index_mut(&mut self, p: Pos) -> &mut T {
        match self.index_of(p) {
            Some(i) => &mut self.cells[i],
            None => panic!("position {p} outside grid of {}x{}", self.rows, self.cols),
        }
    }
}

impl<T: fmt::Display> fmt::Display for Grid<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (r, row) in self.iter_rows().enumerate() {
            if r > 0 {
                writeln!(f)?;
            }
            for cell in row {
                write!(f, "{cell}")?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn grid_new_and_get() {
        let g = Grid::new(3, 4, '.');
        assert_eq!(g.rows(), 3);
        assert_eq!(g.cols(), 4);
        assert_eq!(g.bounds(), Range::with_size(3, 4));
        assert_eq!(g.get(Pos::new(0, 0)), Some(&'.'));
        assert_eq!(g.get(Pos::new(3, 0)), None);
        assert_eq!(g.get(Pos::new(0, -1)), None);
    }

    #[test]
    fn grid_set_and_swap() {
        let mut g = Grid::new(2, 2, 0u8);
        assert_eq!(g.set(Pos::new(1, 0), 7), Some(0));
        assert_eq!(g.set(Pos::new(5, 5), 7), None);
        assert!(g.swap(Pos::new(1, 0), Pos::new(0, 1)));
        assert_eq!(g[Pos::new(0, 1)], 7);
        assert_eq!(g[Pos::new(1, 0)], 0);
        assert!(!g.swap(Pos::new(0, 0), Pos::new(9, 9)));
    }

    #[test]
    fn from_rows_rejects_jagged() {
        let err = Grid::from_rows(vec![vec![1, 2, 3], vec![4, 5]]).unwrap_err();
        assert!(matches!(
            err,
            LoadError::Jagged {
                row: 1,
                expected: 3,
                found: 2
            }
        ));
        assert!(matches!(
            Grid::<u8>::from_rows(Vec::new()),
            Err(LoadError::Empty)
        ));
    }

    #[test]
    fn from_vec_checks_len() {
        assert!(Grid::from_vec(2, 3, vec![0; 6]).is_ok());
        assert!(Grid::from_vec(2, 3, vec![0; 5]).is_err());
    }

    #[test]
    fn rows_and_columns() {
        let g = Grid::from_rows(vec![vec![1, 2], vec![3, 4], vec![5, 6]]).unwrap();
        assert_eq!(g.row(1), Some(&[3, 4][..]));
        assert_eq!(g.row(3), None);
        assert_eq!(g.column(1).copied().collect::<Vec<_>>(), vec![2, 4, 6]);
        assert_eq!(g.column(2).count(), 0);
        assert_eq!(g.iter_rows().count(), 3);
    }

    #[test]
    fn iter_positions_and_map() {
        let g = Grid::from_rows(vec![vec!['#', '.'], vec!['.', '#']]).unwrap();
        assert_eq!(g.positions(|&c| c == '#'), vec![Pos::new(0, 0), Pos::new(1, 1)]);
        let walls = g.map(|_, &c| c == '#');
        assert!(walls[Pos::new(1, 1)]);
        assert!(!walls[Pos::new(0, 1)]);
    }

    #[test]
    fn display_renders_rows() {
        let g = Grid::from_rows(vec![vec!['a', 'b'], vec!['c', 'd']]).unwrap();
        assert_eq!(g.to_string(), "ab\ncd");
    }

    #[test]
    #[should_panic(expected = "outside grid")]
    fn index_out_of_bounds_panics() {
        let g = Grid::new(1, 1, 0);
        let _ = g[Pos::new(1, 0)];
    }
}

#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn grid_round_trip() {
        let g = Grid::from_rows(vec![vec![1u8, 2], vec![3, 4]]).unwrap();
        let json = serde_json::to_string(&g).unwrap();
        let back: Grid<u8> = serde_json::from_str(&json).unwrap();
        assert_eq!(g, back);
    }

    #[test]
    fn rejects_cells_that_do_not_fill_the_shape() {
        let short = serde_json::from_str::<Grid<u8>>(r#"{"cells":[1,2,3],"rows":2,"cols":2}"#);
        let err = short.unwrap_err().to_string();
        assert!(err.contains("3 cells cannot fill a 2x2 grid"), "{err}");
        assert!(serde_json::from_str::<Grid<u8>>(r#"{"cells":[1,2,3,4,5],"rows":2,"cols":2}"#).is_err());
        let ok: Grid<u8> = serde_json::from_str(r#"{"cells":[1,2,3,4],"rows":2,"cols":2}"#).unwrap();
        assert_eq!(ok.get(Pos::new(1, 1)), Some(&4));
    }
}
