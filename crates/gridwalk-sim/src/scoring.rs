//! Reductions from a final grid or set of positions to a single number.

use gridwalk_core::{Grid, Pos, Range};
use gridwalk_paths::{PathError, PathRange, Pather, manhattan};

/// Sum of `rows - r` over every cell in row `r` matching `pred`.
///
/// The top row weighs the most and the bottom row weighs 1.
pub fn row_weighted_count<T>(grid: &Grid<T>, pred: impl Fn(&T) -> bool) -> usize {
    let rows = grid.rows();
    grid.iter_rows()
        .enumerate()
        .map(|(r, row)| row.iter().filter(|&c| pred(c)).count() * (rows - r))
        .sum()
}

/// Number of cells matching `pred`.
pub fn count_cells<T>(grid: &Grid<T>, pred: impl Fn(&T) -> bool) -> usize {
    grid.iter().filter(|&(_, c)| pred(c)).count()
}

/// Sum of Manhattan distances over every unordered pair of `points`.
pub fn pairwise_manhattan_sum(points: &[Pos]) -> i64 {
    let mut total = 0i64;
    for (i, &a) in points.iter().enumerate() {
        for &b in &points[i + 1..] {
            total += i64::from(manhattan(a, b));
        }
    }
    total
}

/// Stretch every empty row and column of `bounds` to `factor` rows or
/// columns, moving `points` accordingly.
///
/// A factor of 1 leaves the points unchanged.
pub fn expand_positions(
    points: &[Pos],
    bounds: Range,
    is_empty_row: impl Fn(i32) -> bool,
    is_empty_col: impl Fn(i32) -> bool,
    factor: i32,
) -> Vec<Pos> {
    let extra = factor - 1;
    let shift_rows = prefix_counts(bounds.min.row, bounds.max.row, is_empty_row);
    let shift_cols = prefix_counts(bounds.min.col, bounds.max.col, is_empty_col);
    points
        .iter()
        .map(|p| {
            let dr = shift_rows.get((p.row - bounds.min.row) as usize).copied().unwrap_or(0);
            let dc = shift_cols.get((p.col - bounds.min.col) as usize).copied().unwrap_or(0);
            p.shift(dr * extra, dc * extra)
        })
        .collect()
}

/// `out[i]` is the number of empty lines strictly before `lo + i`.
fn prefix_counts(lo: i32, hi: i32, empty: impl Fn(i32) -> bool) -> Vec<i32> {
    let mut seen = 0;
    (lo..hi)
        .map(|i| {
            let before = seen;
            if empty(i) {
                seen += 1;
            }
            before
        })
        .collect()
}

/// Sum of shortest-path distances over every unordered pair of `points`,
/// walking the grid with `pather`.
///
/// Fails with [`PathError::OutOfRange`] for the first point outside `range`,
/// before any search runs.
pub fn pairwise_path_sum<P: Pather>(range: Range, pather: &P, points: &[Pos]) -> Result<i64, PathError> {
    if let Some(&p) = points.iter().find(|&&p| !range.contains(p)) {
        return Err(PathError::OutOfRange(p));
    }
    let mut pr = PathRange::new(range);
    let mut total = 0i64;
    for (i, &from) in points.iter().enumerate() {
        if i + 1 == points.len() {
            break;
        }
        pr.bfs_map(pather, &[from], i32::MAX);
        for &to in &points[i + 1..] {
            let d = pr.bfs_at(to).ok_or(PathError::Unreachable { from, to })?;
            total += i64::from(d);
        }
    }
    log::debug!("pairwise_path_sum: {} points, total {total}", points.len());
    Ok(total)
}
