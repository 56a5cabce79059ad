//! Areas of rectilinear loops.
//!
//! Two approaches are provided. [`enclosed_by_loop`] scans a grid row by row
//! and works for any closed walk of cells. [`DigPlan`] keeps only the corner
//! points and measures with the shoelace formula, so its cost does not depend
//! on how long the edges are.

use gridwalk_core::{Direction, Error, Grid, Pos, Range};

use crate::PathRange;
use crate::traits::Pather;

const ON_LOOP: u8 = 1;
const GOES_UP: u8 = 2;

/// Count cells of `bounds` strictly inside the closed walk `cells`.
///
/// Consecutive cells (and the last and first) must be cardinal neighbours.
/// Scanning each row from the left, a loop cell that continues upward flips
/// inside/outside; horizontal runs and downward bends do not.
pub fn enclosed_by_loop(cells: &[Pos], bounds: Range) -> usize {
    let rows = bounds.rows().max(0) as usize;
    let cols = bounds.cols().max(0) as usize;
    let mut marks = Grid::new(rows, cols, 0u8);
    let n = cells.len();
    for (i, &p) in cells.iter().enumerate() {
        let prev = cells[(i + n - 1) % n];
        let next = cells[(i + 1) % n];
        let up = p.step(Direction::Up);
        let Some(m) = marks.get_mut(p - bounds.min) else {
            continue;
        };
        *m |= ON_LOOP;
        if prev == up || next == up {
            *m |= GOES_UP;
        }
    }

    let mut count = 0;
    for row in marks.iter_rows() {
        let mut inside = false;
        for &m in row {
            if m & GOES_UP != 0 {
                inside = !inside;
            } else if m & ON_LOOP == 0 && inside {
                count += 1;
            }
        }
    }
    count
}

/// A trench dug as a sequence of straight runs.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DigPlan {
    steps: Vec<(Direction, i64)>,
}

impl FromIterator<(Direction, i64)> for DigPlan {
    fn from_iter<I: IntoIterator<Item = (Direction, i64)>>(iter: I) -> Self {
        Self {
            steps: iter.into_iter().collect(),
        }
    }
}

impl DigPlan {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, dir: Direction, len: i64) {
        self.steps.push((dir, len));
    }

    pub fn steps(&self) -> &[(Direction, i64)] {
        &self.steps
    }

    /// Corner points as `(row, col)`, starting and ending at the origin for
    /// a closed plan.
    pub fn vertices(&self) -> Vec<(i64, i64)> {
        let mut at = (0i64, 0i64);
        let mut out = Vec::with_capacity(self.steps.len() + 1);
        out.push(at);
        for &(dir, len) in &self.steps {
            let d = dir.delta();
            at = (at.0 + i64::from(d.row) * len, at.1 + i64::from(d.col) * len);
            out.push(at);
        }
        out
    }

    /// Whether the plan ends where it started.
    pub fn is_closed(&self) -> bool {
        self.vertices().last() == Some(&(0, 0))
    }

    /// Number of trench cells.
    pub fn perimeter(&self) -> i64 {
        self.steps.iter().map(|&(_, len)| len).sum()
    }

    /// Area of the polygon through the centres of the corner cells.
    pub fn shoelace_area(&self) -> i64 {
        let twice: i64 = self
            .vertices()
            .windows(2)
            .map(|w| w[0].0 * w[1].1 - w[1].0 * w[0].1)
            .sum();
        twice.abs() / 2
    }

    /// Trench cells plus the cells they enclose.
    ///
    /// Pick's theorem gives the interior count from the area and perimeter.
    pub fn lagoon_volume(&self) -> i64 {
        let area = self.shoelace_area();
        let boundary = self.perimeter();
        let interior = area - boundary / 2 + 1;
        log::debug!("lagoon_volume: area {area} boundary {boundary} interior {interior}");
        interior + boundary
    }
}

/// Largest grid [`trench_grid`] will allocate.
pub const MAX_TRENCH_CELLS: usize = 1 << 24;

/// Rasterise the trench. `true` marks dug cells. The grid has a one-cell
/// margin of undug ground on every side.
pub fn trench_grid(plan: &DigPlan) -> Result<Grid<bool>, Error> {
    let verts = plan.vertices();
    let min_r = verts.iter().map(|v| v.0).min().unwrap_or(0);
    let max_r = verts.iter().map(|v| v.0).max().unwrap_or(0);
    let min_c = verts.iter().map(|v| v.1).min().unwrap_or(0);
    let max_c = verts.iter().map(|v| v.1).max().unwrap_or(0);
    let rows = max_r - min_r + 3;
    let cols = max_c - min_c + 3;
    if rows.saturating_mul(cols) > MAX_TRENCH_CELLS as i64 {
        return Err(Error::invariant(format!(
            "trench of {rows}x{cols} cells is too large to rasterise"
        )));
    }

    let mut grid = Grid::new(rows as usize, cols as usize, false);
    let mut at = Pos::new((1 - min_r) as i32, (1 - min_c) as i32);
    grid[at] = true;
    for &(dir, len) in plan.steps() {
        for _ in 0..len {
            at = at.step(dir);
            grid[at] = true;
        }
    }
    Ok(grid)
}

/// Undug cells, connected to their undug cardinal neighbours.
struct Ground<'a>(&'a Grid<bool>);

impl Pather for Ground<'_> {
    fn neighbors(&self, p: Pos, buf: &mut Vec<Pos>) {
        buf.extend(
            p.neighbors_4()
                .into_iter()
                .filter(|&n| self.0.get(n).is_some_and(|&dug| !dug)),
        );
    }
}

/// Lagoon volume by flooding the ground outside the trench.
pub fn flood_volume(plan: &DigPlan) -> Result<usize, Error> {
    let grid = trench_grid(plan)?;
    let mut pr = PathRange::new(grid.bounds());
    let outside = pr.cc_map(&Ground(&grid), Pos::ZERO).len();
    Ok(grid.bounds().len() - outside)
}

#[cfg(test)]
mod tests {
    use super::*;
    use Direction::*;

    fn sample() -> DigPlan {
        [
            (Right, 6),
            (Down, 5),
            (Left, 2),
            (Down, 2),
            (Right, 2),
            (Down, 2),
            (Left, 5),
            (Up, 2),
            (Left, 1),
            (Up, 2),
            (Right, 2),
            (Up, 3),
            (Left, 2),
            (Up, 2),
        ]
        .into_iter()
        .collect()
    }

    #[test]
    fn sample_lagoon() {
        let plan = sample();
        assert!(plan.is_closed());
        assert_eq!(plan.perimeter(), 38);
        assert_eq!(plan.lagoon_volume(), 62);
        assert_eq!(flood_volume(&plan).unwrap(), 62);
    }

    #[test]
    fn square() {
        let plan: DigPlan = [(Right, 2), (Down, 2), (Left, 2), (Up, 2)].into_iter().collect();
        assert_eq!(plan.vertices().len(), 5);
        assert_eq!(plan.shoelace_area(), 4);
        assert_eq!(plan.lagoon_volume(), 9);
        let grid = trench_grid(&plan).unwrap();
        assert_eq!(grid.rows(), 5);
        assert_eq!(grid.iter().filter(|&(_, &d)| d).count(), 8);
    }

    #[test]
    fn counter_clockwise_matches_clockwise() {
        let cw = sample();
        let ccw: DigPlan = cw
            .steps()
            .iter()
            .rev()
            .map(|&(d, n)| (d.opposite(), n))
            .collect();
        assert_eq!(ccw.lagoon_volume(), cw.lagoon_volume());
    }

    #[test]
    fn huge_plan_refuses_raster() {
        let plan: DigPlan = [(Right, 1 << 20), (Down, 1 << 20), (Left, 1 << 20), (Up, 1 << 20)]
            .into_iter()
            .collect();
        assert!(trench_grid(&plan).is_err());
        assert_eq!(plan.lagoon_volume(), ((1i64 << 20) + 1).pow(2));
    }

    #[test]
    fn loop_scan_matches_pick() {
        let plan = sample();
        let mut at = Pos::ZERO;
        let mut cells = vec![];
        for &(dir, len) in plan.steps() {
            for _ in 0..len {
                cells.push(at);
                at = at.step(dir);
            }
        }
        assert_eq!(at, Pos::ZERO);
        assert_eq!(cells.len(), 38);
        let bounds = Range::bounding(cells.iter().copied());
        assert_eq!(enclosed_by_loop(&cells, bounds) + cells.len(), 62);
    }

    #[test]
    fn offset_bounds() {
        let cells = [
            Pos::new(10, 10),
            Pos::new(10, 11),
            Pos::new(10, 12),
            Pos::new(11, 12),
            Pos::new(12, 12),
            Pos::new(12, 11),
            Pos::new(12, 10),
            Pos::new(11, 10),
        ];
        assert_eq!(enclosed_by_loop(&cells, Range::new(10, 10, 13, 13)), 1);
    }
}
