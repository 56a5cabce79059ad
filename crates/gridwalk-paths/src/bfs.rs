//! Unweighted breadth-first searches.

use std::collections::VecDeque;

use gridwalk_core::Pos;

use crate::PathRange;
use crate::path::{Path, PathError};
use crate::pathrange::{NO_PARENT, PathNode};
use crate::traits::Pather;

impl PathRange {
    /// Compute a multi-source breadth-first search distance map.
    ///
    /// Each step has cost 1. Expansion stops when the distance exceeds
    /// `max_dist`. Returns a slice of all reached nodes in order of
    /// distance.
    pub fn bfs_map<P: Pather>(&mut self, pather: &P, sources: &[Pos], max_dist: i32) -> &[PathNode] {
        self.run_bfs(pather, sources, max_dist, None);
        &self.bfs.reached
    }

    /// Query the BFS distance at `p` from the last [`bfs_map`](Self::bfs_map)
    /// or [`bfs_path`](Self::bfs_path) call. `None` if `p` is outside the
    /// range or was not reached.
    pub fn bfs_at(&self, p: Pos) -> Option<i32> {
        self.bfs.get(self.idx(p)?)
    }

    /// Shortest unweighted path from `from` to `to`, including both
    /// endpoints. The path cost equals its number of steps.
    pub fn bfs_path<P: Pather>(&mut self, pather: &P, from: Pos, to: Pos) -> Result<Path, PathError> {
        self.checked_idx(from)?;
        let goal = self.checked_idx(to)?;
        if !self.run_bfs(pather, &[from], i32::MAX, Some(goal)) {
            return Err(PathError::Unreachable { from, to });
        }
        self.rebuild(&self.bfs, goal)
            .ok_or(PathError::Unreachable { from, to })
    }

    /// Level-order expansion from `sources`. Returns `true` as soon as `goal`
    /// is labelled.
    fn run_bfs<P: Pather>(&mut self, pather: &P, sources: &[Pos], max_dist: i32, goal: Option<usize>) -> bool {
        self.bfs.reset();
        let mut queue = VecDeque::new();
        for &src in sources {
            let Some(si) = self.idx(src) else {
                continue;
            };
            if self.bfs.get(si).is_none() {
                self.bfs.set(si, 0, NO_PARENT);
                self.bfs.reached.push(PathNode { pos: src, cost: 0 });
                queue.push_back(si);
            }
        }

        let mut nbuf = std::mem::take(&mut self.nbuf);
        let mut found = goal.is_some_and(|g| self.bfs.get(g).is_some());

        while !found {
            let Some(ci) = queue.pop_front() else {
                break;
            };
            let nd = self.bfs.get(ci).map_or(i32::MAX, |d| d.saturating_add(1));
            if nd > max_dist {
                continue;
            }
            let cp = self.point(ci);
            nbuf.clear();
            pather.neighbors(cp, &mut nbuf);

            for &np in nbuf.iter() {
                let Some(ni) = self.idx(np) else {
                    continue;
                };
                if self.bfs.get(ni).is_some() {
                    continue;
                }
                self.bfs.set(ni, nd, ci);
                self.bfs.reached.push(PathNode { pos: np, cost: nd });
                queue.push_back(ni);
                if goal == Some(ni) {
                    found = true;
                    break;
                }
            }
        }

        self.nbuf = nbuf;
        log::trace!("bfs: reached {} cells", self.bfs.reached.len());
        found
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testutil::WeightGrid;
    use gridwalk_core::{Grid, Range, parse_digit_grid};

    #[test]
    fn open_grid_distance_is_manhattan() {
        let g = WeightGrid(Grid::new(4, 5, 1u8));
        let mut pr = PathRange::new(g.0.bounds());
        let reached = pr.bfs_map(&g, &[Pos::new(0, 0)], i32::MAX).len();
        assert_eq!(reached, 20);
        for p in Range::with_size(4, 5) {
            assert_eq!(pr.bfs_at(p), Some(crate::manhattan(Pos::ZERO, p)));
        }
    }

    #[test]
    fn path_cost_equals_steps() {
        let g = WeightGrid(parse_digit_grid("1111\n0001\n1111\n1000\n1111").unwrap());
        let mut pr = PathRange::new(g.0.bounds());
        let path = pr.bfs_path(&g, Pos::new(0, 0), Pos::new(4, 3)).unwrap();
        assert_eq!(path.steps() as i32, path.cost);
        assert_eq!(path.cost, 3 + 2 + 3 + 2 + 3);
    }

    #[test]
    fn sample_3x3() {
        let g = WeightGrid(Grid::new(3, 3, 1u8));
        let mut pr = PathRange::new(g.0.bounds());
        let path = pr.bfs_path(&g, Pos::new(0, 0), Pos::new(2, 2)).unwrap();
        assert_eq!(path.cost, 4);
        assert_eq!(path.cells.len(), 5);
    }

    #[test]
    fn trivial_path() {
        let g = WeightGrid(Grid::new(2, 2, 1u8));
        let mut pr = PathRange::new(g.0.bounds());
        let path = pr.bfs_path(&g, Pos::new(1, 1), Pos::new(1, 1)).unwrap();
        assert_eq!(path.cells, vec![Pos::new(1, 1)]);
        assert_eq!(path.cost, 0);
    }

    #[test]
    fn isolated_target() {
        let g = WeightGrid(parse_digit_grid("101\n101\n101").unwrap());
        let mut pr = PathRange::new(g.0.bounds());
        assert!(matches!(
            pr.bfs_path(&g, Pos::new(0, 0), Pos::new(0, 2)),
            Err(PathError::Unreachable { .. })
        ));
        assert_eq!(pr.bfs_at(Pos::new(2, 0)), Some(2));
        assert_eq!(pr.bfs_at(Pos::new(0, 2)), None);
    }

    #[test]
    fn max_dist_limits_expansion() {
        let g = WeightGrid(Grid::new(1, 10, 1u8));
        let mut pr = PathRange::new(g.0.bounds());
        assert_eq!(pr.bfs_map(&g, &[Pos::new(0, 5)], 2).len(), 5);
        assert_eq!(pr.bfs_map(&g, &[Pos::new(0, 5)], 0).len(), 1);
    }

    #[test]
    fn bfs_and_weighted_maps_are_kept_apart() {
        let g = WeightGrid(Grid::new(1, 4, 3u8));
        let mut pr = PathRange::new(g.0.bounds());
        pr.bfs_map(&g, &[Pos::ZERO], i32::MAX);
        pr.dijkstra_map(&g, &[Pos::ZERO], i32::MAX);
        assert_eq!(pr.bfs_at(Pos::new(0, 3)), Some(3));
        assert_eq!(pr.dijkstra_at(Pos::new(0, 3)), Some(9));
    }
}
