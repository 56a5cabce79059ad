//! Light beams bouncing through mirrors and splitters.

use gridwalk_core::{Direction, Grid, LoadError, Pos, parse_grid};

/// A cell a beam can pass through.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Optic {
    /// `.`
    #[default]
    Empty,
    /// `/`
    MirrorSlash,
    /// `\`
    MirrorBackslash,
    /// `|`
    SplitVertical,
    /// `-`
    SplitHorizontal,
}

impl Optic {
    pub fn from_char(ch: char) -> Option<Self> {
        match ch {
            '.' => Some(Optic::Empty),
            '/' => Some(Optic::MirrorSlash),
            '\\' => Some(Optic::MirrorBackslash),
            '|' => Some(Optic::SplitVertical),
            '-' => Some(Optic::SplitHorizontal),
            _ => None,
        }
    }

    /// Headings leaving this cell for a beam entering it heading `dir`.
    /// The second slot is only used by splitters hit broadside.
    fn deflect(self, dir: Direction) -> [Option<Direction>; 2] {
        use Direction::*;
        match (self, dir) {
            (Optic::MirrorSlash, Right) => [Some(Up), None],
            (Optic::MirrorSlash, Up) => [Some(Right), None],
            (Optic::MirrorSlash, Left) => [Some(Down), None],
            (Optic::MirrorSlash, Down) => [Some(Left), None],
            (Optic::MirrorBackslash, Right) => [Some(Down), None],
            (Optic::MirrorBackslash, Down) => [Some(Right), None],
            (Optic::MirrorBackslash, Left) => [Some(Up), None],
            (Optic::MirrorBackslash, Up) => [Some(Left), None],
            (Optic::SplitVertical, d) if d.is_horizontal() => [Some(Up), Some(Down)],
            (Optic::SplitHorizontal, d) if !d.is_horizontal() => [Some(Left), Some(Right)],
            (_, d) => [Some(d), None],
        }
    }
}

/// Parse a grid of `. / \ | -` characters.
pub fn parse_optics(input: &str) -> Result<Grid<Optic>, LoadError> {
    parse_grid(input, |pos, ch| {
        Optic::from_char(ch).ok_or(LoadError::InvalidCell { ch, pos })
    })
}

fn dir_bit(d: Direction) -> u8 {
    match d {
        Direction::Up => 1,
        Direction::Down => 2,
        Direction::Left => 4,
        Direction::Right => 8,
    }
}

/// Result of [`trace_beam`]: every heading seen in every cell.
#[derive(Debug, Clone)]
pub struct BeamTrace {
    headings: Grid<u8>,
}

impl BeamTrace {
    /// Number of distinct cells at least one beam passed through.
    pub fn energized(&self) -> usize {
        self.headings.iter().filter(|&(_, &bits)| bits != 0).count()
    }

    /// Whether a beam passed through `p` heading `dir`.
    pub fn visited(&self, p: Pos, dir: Direction) -> bool {
        self.headings.get(p).is_some_and(|&bits| bits & dir_bit(dir) != 0)
    }

    /// `#` for energized cells and `.` otherwise.
    pub fn to_grid(&self) -> Grid<char> {
        self.headings.map(|_, &bits| if bits != 0 { '#' } else { '.' })
    }
}

/// Follow a beam entering `grid` at `start` heading `dir`.
///
/// Splitters spawn a second beam head. A head stops when it leaves the grid
/// or reaches a cell it has already crossed in the same heading.
pub fn trace_beam(grid: &Grid<Optic>, start: Pos, dir: Direction) -> BeamTrace {
    let mut headings = Grid::new(grid.rows(), grid.cols(), 0u8);
    let mut heads = vec![(start, dir)];

    while let Some((p, d)) = heads.pop() {
        let Some(bits) = headings.get_mut(p) else {
            continue;
        };
        if *bits & dir_bit(d) != 0 {
            continue;
        }
        *bits |= dir_bit(d);
        for nd in grid[p].deflect(d).into_iter().flatten() {
            heads.push((p.step(nd), nd));
        }
    }

    let trace = BeamTrace { headings };
    log::trace!("trace_beam: from {start} heading {dir}, {} energized", trace.energized());
    trace
}

/// Best energized count over every beam entering from the border.
pub fn max_energized(grid: &Grid<Optic>) -> usize {
    let best = grid
        .bounds()
        .edges()
        .into_iter()
        .map(|(p, d)| trace_beam(grid, p, d).energized())
        .max()
        .unwrap_or(0);
    log::debug!("max_energized: {best}");
    best
}
