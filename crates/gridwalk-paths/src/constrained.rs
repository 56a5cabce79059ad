//! Shortest paths under a run-length constraint.
//!
//! A mover may travel at most `max_run` cells in one direction before it has
//! to turn, and at least `min_run` cells before it may turn or stop. It never
//! reverses. Because the legal moves out of a cell depend on how the mover
//! arrived, the search runs over `(position, heading, run)` states rather
//! than over positions alone.

use std::cmp::Reverse;
use std::collections::{BinaryHeap, HashMap};

use gridwalk_core::{Direction, Pos};

use crate::PathRange;
use crate::path::{Path, PathError};
use crate::traits::WeightedPather;

/// Run-length limits for [`PathRange::constrained_path`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MoveRules {
    /// Cells that must be travelled in a straight line before turning or
    /// stopping.
    pub min_run: u8,
    /// Maximum cells in a straight line.
    pub max_run: u8,
}

impl Default for MoveRules {
    fn default() -> Self {
        Self {
            min_run: 0,
            max_run: 3,
        }
    }
}

impl MoveRules {
    pub const fn new(min_run: u8, max_run: u8) -> Self {
        Self { min_run, max_run }
    }

    /// Long-haul rules: at least 4 and at most 10 cells per straight run.
    pub const fn ultra() -> Self {
        Self::new(4, 10)
    }

    /// Whether any move at all is possible: a run of at least one cell that
    /// is long enough to stop on.
    pub const fn is_valid(self) -> bool {
        self.max_run >= 1 && self.min_run <= self.max_run
    }

    /// Run length after stepping `next` from a state heading `dir` with
    /// `run` cells behind it, or `None` if the move is illegal.
    fn advance(self, dir: Option<Direction>, run: u8, next: Direction) -> Option<u8> {
        let Some(d) = dir else {
            return (self.max_run >= 1).then_some(1);
        };
        if next == d.opposite() {
            None
        } else if next == d {
            (run < self.max_run).then(|| run + 1)
        } else {
            (run >= self.min_run).then_some(1)
        }
    }

    fn may_stop(self, dir: Option<Direction>, run: u8) -> bool {
        dir.is_none() || run >= self.min_run
    }
}

/// Search state: where the mover is, which way it last moved and how many
/// cells it has moved that way.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
struct State {
    pos: Pos,
    dir: Option<Direction>,
    run: u8,
}

impl PathRange {
    /// Minimum-cost path from `from` to `to` obeying `rules`.
    ///
    /// Neighbours come from `pather`; only unit cardinal steps are
    /// considered. The path's cost excludes the start cell. Rules that fail
    /// [`MoveRules::is_valid`] reach nothing but the start itself.
    pub fn constrained_path<P: WeightedPather>(
        &mut self,
        pather: &P,
        from: Pos,
        to: Pos,
        rules: MoveRules,
    ) -> Result<Path, PathError> {
        self.checked_idx(from)?;
        self.checked_idx(to)?;
        if !rules.is_valid() && from != to {
            log::warn!("constrained_path: {rules:?} allow no complete run");
            return Err(PathError::Unreachable { from, to });
        }

        let start = State {
            pos: from,
            dir: None,
            run: 0,
        };
        let mut best: HashMap<State, i32> = HashMap::new();
        let mut parent: HashMap<State, State> = HashMap::new();
        let mut open = BinaryHeap::new();
        best.insert(start, 0);
        open.push(Reverse((0, start)));

        let mut nbuf = std::mem::take(&mut self.nbuf);
        let mut settled = 0usize;
        let mut goal = None;

        while let Some(Reverse((cost, state))) = open.pop() {
            if best.get(&state).is_some_and(|&b| cost > b) {
                continue;
            }
            settled += 1;
            if state.pos == to && rules.may_stop(state.dir, state.run) {
                goal = Some((state, cost));
                break;
            }

            nbuf.clear();
            pather.neighbors(state.pos, &mut nbuf);
            for &np in nbuf.iter() {
                if !self.rng.contains(np) {
                    continue;
                }
                let Some(dir) = Direction::between(state.pos, np) else {
                    continue;
                };
                let Some(run) = rules.advance(state.dir, state.run, dir) else {
                    continue;
                };
                let next = State {
                    pos: np,
                    dir: Some(dir),
                    run,
                };
                let tentative = cost.saturating_add(pather.cost(state.pos, np));
                if best.get(&next).is_some_and(|&b| tentative >= b) {
                    continue;
                }
                best.insert(next, tentative);
                parent.insert(next, state);
                open.push(Reverse((tentative, next)));
            }
        }

        self.nbuf = nbuf;

        let Some((end, cost)) = goal else {
            log::debug!("constrained_path: {from} -> {to} unreachable, {settled} states settled");
            return Err(PathError::Unreachable { from, to });
        };

        let mut cells = vec![end.pos];
        let mut cur = end;
        while let Some(&prev) = parent.get(&cur) {
            cells.push(prev.pos);
            cur = prev;
        }
        cells.reverse();
        log::debug!(
            "constrained_path: {from} -> {to} cost {cost} ({} steps, {settled} states settled)",
            cells.len() - 1
        );
        Ok(Path { cells, cost })
    }
}
