use gridwalk_core::Pos;

/// Minimal search interface: neighbour enumeration.
pub trait Pather {
    /// Append neighbours of `p` into `buf`. The caller clears `buf` before calling.
    fn neighbors(&self, p: Pos, buf: &mut Vec<Pos>);
}

/// Pather with weighted (positive-cost) edges.
pub trait WeightedPather: Pather {
    /// Cost of moving from `from` to adjacent `to`. Must be > 0.
    fn cost(&self, from: Pos, to: Pos) -> i32;
}

/// Weighted pather with an admissible heuristic, for A*.
pub trait AstarPather: WeightedPather {
    /// Heuristic estimate of the cost from `from` to `to`.
    /// Must never overestimate the true cost.
    fn estimate(&self, from: Pos, to: Pos) -> i32;
}
