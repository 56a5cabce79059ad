use gridwalk_core::{Pos, Range};

use crate::path::{Path, PathError};

/// A position with an associated cost, returned from Dijkstra / BFS map queries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PathNode {
    pub pos: Pos,
    pub cost: i32,
}

/// Marker for "no predecessor" in back-pointer arrays.
pub(crate) const NO_PARENT: usize = usize::MAX;

const UNREACHED: i32 = i32::MAX;

/// Flat per-cell costs and back-pointers for one kind of search, plus the
/// cells in the order they were reached.
#[derive(Debug, Clone)]
pub(crate) struct CostMap {
    cost: Vec<i32>,
    parent: Vec<usize>,
    pub(crate) reached: Vec<PathNode>,
}

impl CostMap {
    fn new(len: usize) -> Self {
        Self {
            cost: vec![UNREACHED; len],
            parent: vec![NO_PARENT; len],
            reached: Vec::new(),
        }
    }

    /// Forget the previous search.
    pub(crate) fn reset(&mut self) {
        self.cost.fill(UNREACHED);
        self.parent.fill(NO_PARENT);
        self.reached.clear();
    }

    #[inline]
    pub(crate) fn get(&self, i: usize) -> Option<i32> {
        let c = self.cost[i];
        (c != UNREACHED).then_some(c)
    }

    #[inline]
    pub(crate) fn set(&mut self, i: usize, cost: i32, parent: usize) {
        self.cost[i] = cost;
        self.parent[i] = parent;
    }

    #[inline]
    pub(crate) fn parent(&self, i: usize) -> usize {
        self.parent[i]
    }
}

/// Owner of all search state for one grid rectangle.
///
/// `PathRange` holds the cost maps, back-pointers and connected-component
/// labels, so repeated queries on the same grid reuse their allocations.
/// BFS queries keep their own map; Dijkstra and A* share the weighted one.
/// Build one per grid; nothing is shared between instances.
pub struct PathRange {
    pub(crate) rng: Range,
    pub(crate) width: usize,
    pub(crate) bfs: CostMap,
    pub(crate) weighted: CostMap,
    pub(crate) cc_labels: Vec<i32>,
    // shared scratch buffer for neighbour queries
    pub(crate) nbuf: Vec<Pos>,
}

impl PathRange {
    /// Create a new `PathRange` for the given grid rectangle.
    pub fn new(rng: Range) -> Self {
        let len = rng.len();
        Self {
            rng,
            width: rng.cols().max(0) as usize,
            bfs: CostMap::new(len),
            weighted: CostMap::new(len),
            cc_labels: vec![-1; len],
            nbuf: Vec::with_capacity(4),
        }
    }

    /// The grid rectangle being searched.
    #[inline]
    pub fn range(&self) -> Range {
        self.rng
    }

    /// Convert a `Pos` to a flat index. Returns `None` if out of range.
    #[inline]
    pub(crate) fn idx(&self, p: Pos) -> Option<usize> {
        if !self.rng.contains(p) {
            return None;
        }
        let c = (p.col - self.rng.min.col) as usize;
        let r = (p.row - self.rng.min.row) as usize;
        Some(r * self.width + c)
    }

    /// Flat index of `p`, or [`PathError::OutOfRange`].
    #[inline]
    pub(crate) fn checked_idx(&self, p: Pos) -> Result<usize, PathError> {
        self.idx(p).ok_or(PathError::OutOfRange(p))
    }

    /// Convert a flat index back to a `Pos`.
    #[inline]
    pub(crate) fn point(&self, idx: usize) -> Pos {
        let col = (idx % self.width) as i32 + self.rng.min.col;
        let row = (idx / self.width) as i32 + self.rng.min.row;
        Pos::new(row, col)
    }

    /// Follow the back-pointers of `map` from `goal` and return the forward
    /// path.
    pub(crate) fn rebuild(&self, map: &CostMap, goal: usize) -> Option<Path> {
        let cost = map.get(goal)?;
        let mut cells = Vec::new();
        let mut ci = goal;
        while ci != NO_PARENT {
            cells.push(self.point(ci));
            ci = map.parent(ci);
        }
        cells.reverse();
        Some(Path { cells, cost })
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for PathRange {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.rng.serialize(serializer)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for PathRange {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let range = Range::deserialize(deserializer)?;
        Ok(PathRange::new(range))
    }
}


#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn pathnode_round_trip() {
        let node = PathNode {
            pos: Pos::new(3, 7),
            cost: 42,
        };
        let json = serde_json::to_string(&node).unwrap();
        let back: PathNode = serde_json::from_str(&json).unwrap();
        assert_eq!(node, back);
    }

    #[test]
    fn pathrange_round_trip_rebuilds_caches() {
        let rng = Range::new(1, 2, 10, 20);
        let pr = PathRange::new(rng);
        let json = serde_json::to_string(&pr).unwrap();
        let back: PathRange = serde_json::from_str(&json).unwrap();
        assert_eq!(back.range(), rng);
        assert_eq!(back.cc_labels.len(), rng.len());
        assert!(back.weighted.reached.is_empty());
    }
}
