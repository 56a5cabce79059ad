//! Weighted searches: Dijkstra maps and paths, and the best-first
//! relaxation that A* shares with them.

use std::cmp::Reverse;
use std::collections::BinaryHeap;

use gridwalk_core::Pos;

use crate::PathRange;
use crate::path::{Path, PathError};
use crate::pathrange::{NO_PARENT, PathNode};
use crate::traits::WeightedPather;

impl PathRange {
    /// Compute a multi-source Dijkstra distance map.
    ///
    /// Every source starts at cost 0. Expansion stops when the cumulative
    /// cost exceeds `max_cost`. Returns a slice of all reached nodes in the
    /// order they were settled.
    pub fn dijkstra_map<P: WeightedPather>(
        &mut self,
        pather: &P,
        sources: &[Pos],
        max_cost: i32,
    ) -> &[PathNode] {
        self.best_first(pather, sources, max_cost, None, |_| 0);
        log::debug!(
            "dijkstra_map: {} sources settled {} cells",
            sources.len(),
            self.weighted.reached.len()
        );
        &self.weighted.reached
    }

    /// Query the cost at `p` from the last weighted search
    /// ([`dijkstra_map`](Self::dijkstra_map), [`dijkstra_path`](Self::dijkstra_path)
    /// or [`astar_path`](Self::astar_path)). `None` if `p` is outside the
    /// range or was not reached.
    pub fn dijkstra_at(&self, p: Pos) -> Option<i32> {
        self.weighted.get(self.idx(p)?)
    }

    /// Minimum-cost path from `from` to `to`.
    ///
    /// Stops as soon as the target is settled and rebuilds the path from
    /// back-pointers. The returned path includes both endpoints.
    pub fn dijkstra_path<P: WeightedPather>(
        &mut self,
        pather: &P,
        from: Pos,
        to: Pos,
    ) -> Result<Path, PathError> {
        let path = self.weighted_path(pather, from, to, |_| 0)?;
        log::debug!("dijkstra_path: {from} -> {to} cost {}, {} steps", path.cost, path.steps());
        Ok(path)
    }

    /// Single-target best-first search ordered by cost plus `estimate`.
    pub(crate) fn weighted_path<P: WeightedPather>(
        &mut self,
        pather: &P,
        from: Pos,
        to: Pos,
        estimate: impl Fn(Pos) -> i32,
    ) -> Result<Path, PathError> {
        self.checked_idx(from)?;
        let goal = self.checked_idx(to)?;
        if !self.best_first(pather, &[from], i32::MAX, Some(goal), estimate) {
            return Err(PathError::Unreachable { from, to });
        }
        self.rebuild(&self.weighted, goal)
            .ok_or(PathError::Unreachable { from, to })
    }

    /// Relax from `sources` in order of cost plus `estimate`, recording
    /// settled cells in the weighted map. Entries are relaxed only on strict
    /// improvement and stale heap entries are skipped. Returns `true` once
    /// `goal` is settled.
    pub(crate) fn best_first<P: WeightedPather>(
        &mut self,
        pather: &P,
        sources: &[Pos],
        max_cost: i32,
        goal: Option<usize>,
        estimate: impl Fn(Pos) -> i32,
    ) -> bool {
        self.weighted.reset();
        let mut open = BinaryHeap::new();
        for &src in sources {
            if let Some(si) = self.idx(src) {
                if self.weighted.get(si).is_some() {
                    continue;
                }
                self.weighted.set(si, 0, NO_PARENT);
                open.push(Reverse((estimate(src), 0, si)));
            }
        }

        let mut nbuf = std::mem::take(&mut self.nbuf);
        let mut found = false;

        while let Some(Reverse((_, cost, ci))) = open.pop() {
            if self.weighted.get(ci) != Some(cost) {
                continue;
            }
            let cp = self.point(ci);
            self.weighted.reached.push(PathNode { pos: cp, cost });
            if goal == Some(ci) {
                found = true;
                break;
            }

            nbuf.clear();
            pather.neighbors(cp, &mut nbuf);
            log::trace!("best_first: settle {cp} at {cost}, {} neighbours", nbuf.len());

            for &np in nbuf.iter() {
                let Some(ni) = self.idx(np) else {
                    continue;
                };
                let tentative = cost.saturating_add(pather.cost(cp, np));
                if tentative > max_cost || self.weighted.get(ni).is_some_and(|c| tentative >= c) {
                    continue;
                }
                self.weighted.set(ni, tentative, ci);
                open.push(Reverse((tentative.saturating_add(estimate(np)), tentative, ni)));
            }
        }

        self.nbuf = nbuf;
        found
    }
}
