use gridwalk_core::Pos;

use crate::PathRange;
use crate::path::{Path, PathError};
use crate::traits::AstarPather;

impl PathRange {
    /// Compute the minimum-cost path from `from` to `to` using A*.
    ///
    /// This is the Dijkstra relaxation with the heap ordered by cost plus
    /// `pather.estimate(p, to)`. The estimate must never exceed the true
    /// remaining cost, otherwise the returned path may not be optimal.
    pub fn astar_path<P: AstarPather>(
        &mut self,
        pather: &P,
        from: Pos,
        to: Pos,
    ) -> Result<Path, PathError> {
        let result = self.weighted_path(pather, from, to, |p| pather.estimate(p, to));
        let settled = self.weighted.reached.len();
        match &result {
            Ok(path) => log::debug!("astar_path: {from} -> {to} cost {} after {settled} settled", path.cost),
            Err(e) => log::debug!("astar_path: {e} after {settled} settled"),
        }
        result
    }
}
