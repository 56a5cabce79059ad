//! Shared fixtures for the search tests.

use std::ops::RangeInclusive;

use gridwalk_core::{Grid, Pos};
use rand::Rng;

use crate::{AstarPather, Pather, WeightedPather, manhattan};

/// Digit-weight grid where a `0` cell is a wall and any other value is the
/// cost of entering it.
pub(crate) struct WeightGrid(pub(crate) Grid<u8>);

impl Pather for WeightGrid {
    fn neighbors(&self, p: Pos, buf: &mut Vec<Pos>) {
        for n in p.neighbors_4() {
            if self.0.get(n).is_some_and(|&w| w > 0) {
                buf.push(n);
            }
        }
    }
}

impl WeightedPather for WeightGrid {
    fn cost(&self, _from: Pos, to: Pos) -> i32 {
        i32::from(self.0[to])
    }
}

impl AstarPather for WeightGrid {
    fn estimate(&self, from: Pos, to: Pos) -> i32 {
        manhattan(from, to)
    }
}

pub(crate) fn random_weights<R: Rng>(
    rng: &mut R,
    rows: usize,
    cols: usize,
    weights: RangeInclusive<u8>,
) -> Grid<u8> {
    let mut g = Grid::new(rows, cols, 1u8);
    for p in g.bounds() {
        g[p] = rng.random_range(weights.clone());
    }
    g
}

/// Exhaustive minimum over simple paths, for cross-checking searches.
pub(crate) fn brute_force_min(g: &Grid<u8>, from: Pos, to: Pos) -> Option<i32> {
    fn walk(g: &Grid<u8>, at: Pos, to: Pos, cost: i32, seen: &mut Vec<Pos>, best: &mut Option<i32>) {
        if best.is_some_and(|b| cost >= b) {
            return;
        }
        if at == to {
            *best = Some(cost);
            return;
        }
        for n in at.neighbors_4() {
            let Some(&w) = g.get(n) else {
                continue;
            };
            if w == 0 || seen.contains(&n) {
                continue;
            }
            seen.push(n);
            walk(g, n, to, cost + i32::from(w), seen, best);
            seen.pop();
        }
    }

    let mut best = None;
    let mut seen = vec![from];
    walk(g, from, to, 0, &mut seen, &mut best);
    best
}
