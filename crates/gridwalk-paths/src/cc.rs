//! Flood fill and connected-component labelling.

use gridwalk_core::Pos;

use crate::PathRange;
use crate::traits::Pather;

const UNLABELLED: i32 = -1;

impl PathRange {
    /// Label every cell in the range with a connected-component ID.
    ///
    /// Two cells belong to the same component if there is a path of
    /// neighbours (as defined by `pather`) between them. Labels count up
    /// from 0 in row-major order of each component's first cell. Returns
    /// the number of components.
    pub fn cc_map_all<P: Pather>(&mut self, pather: &P) -> usize {
        self.cc_labels.fill(UNLABELLED);
        let mut components = 0;
        let mut cells = Vec::new();
        for start in 0..self.cc_labels.len() {
            if self.cc_labels[start] == UNLABELLED {
                cells.clear();
                self.flood(pather, start, components as i32, &mut cells);
                components += 1;
            }
        }
        log::debug!("cc_map_all: {components} components over {} cells", self.cc_labels.len());
        components
    }

    /// Flood-fill from a single point and return the cells reached,
    /// `p` first. Empty if `p` lies outside the range.
    ///
    /// Only the reached cells are labelled afterwards, all with label 0.
    pub fn cc_map<P: Pather>(&mut self, pather: &P, p: Pos) -> Vec<Pos> {
        self.cc_labels.fill(UNLABELLED);
        let mut cells = Vec::new();
        if let Some(si) = self.idx(p) {
            self.flood(pather, si, 0, &mut cells);
        }
        log::trace!("cc_map: {} cells connected to {p}", cells.len());
        cells
    }

    /// Component label of `p` from the last labelling call.
    pub fn cc_at(&self, p: Pos) -> Option<usize> {
        let label = self.cc_labels[self.idx(p)?];
        (label != UNLABELLED).then_some(label as usize)
    }

    /// Give `label` to every unlabelled cell reachable from `start`,
    /// appending each one to `cells` in discovery order.
    fn flood<P: Pather>(&mut self, pather: &P, start: usize, label: i32, cells: &mut Vec<Pos>) {
        let first = cells.len();
        let mut nbuf = std::mem::take(&mut self.nbuf);
        self.cc_labels[start] = label;
        cells.push(self.point(start));

        let mut next = first;
        while let Some(&cp) = cells.get(next) {
            next += 1;
            nbuf.clear();
            pather.neighbors(cp, &mut nbuf);
            for &np in nbuf.iter() {
                let Some(ni) = self.idx(np) else {
                    continue;
                };
                if self.cc_labels[ni] == UNLABELLED {
                    self.cc_labels[ni] = label;
                    cells.push(np);
                }
            }
        }

        self.nbuf = nbuf;
    }
}
