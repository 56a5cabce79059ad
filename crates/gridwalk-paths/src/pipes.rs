//! Tracing a closed loop of pipe tiles.

use gridwalk_core::{Direction, Error, ErrorKind, Grid, LoadError, Pos, Range, parse_grid};

use crate::polygon::enclosed_by_loop;

/// A pipe tile. Each pipe joins exactly two sides of its cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Pipe {
    /// `|`
    Vertical,
    /// `-`
    Horizontal,
    /// `L`
    UpRight,
    /// `J`
    UpLeft,
    /// `7`
    DownLeft,
    /// `F`
    DownRight,
    /// `.`
    Ground,
    /// `S`, a pipe of unknown shape.
    Start,
}

impl Pipe {
    pub fn from_char(ch: char) -> Option<Self> {
        Some(match ch {
            '|' => Pipe::Vertical,
            '-' => Pipe::Horizontal,
            'L' => Pipe::UpRight,
            'J' => Pipe::UpLeft,
            '7' => Pipe::DownLeft,
            'F' => Pipe::DownRight,
            '.' => Pipe::Ground,
            'S' => Pipe::Start,
            _ => return None,
        })
    }

    /// The two sides this pipe joins. `None` for ground and the start tile.
    pub fn connections(self) -> Option<[Direction; 2]> {
        use Direction::*;
        match self {
            Pipe::Vertical => Some([Up, Down]),
            Pipe::Horizontal => Some([Left, Right]),
            Pipe::UpRight => Some([Up, Right]),
            Pipe::UpLeft => Some([Up, Left]),
            Pipe::DownLeft => Some([Down, Left]),
            Pipe::DownRight => Some([Down, Right]),
            Pipe::Ground | Pipe::Start => None,
        }
    }

    /// The pipe joining sides `a` and `b`, if they differ.
    pub fn joining(a: Direction, b: Direction) -> Option<Self> {
        [
            Pipe::Vertical,
            Pipe::Horizontal,
            Pipe::UpRight,
            Pipe::UpLeft,
            Pipe::DownLeft,
            Pipe::DownRight,
        ]
        .into_iter()
        .find(|p| p.connects(a) && p.connects(b) && a != b)
    }

    pub fn connects(self, dir: Direction) -> bool {
        self.connections().is_some_and(|c| c.contains(&dir))
    }

    /// The side a flow entering through `from` leaves by.
    fn exit(self, from: Direction) -> Option<Direction> {
        let [a, b] = self.connections()?;
        if a == from {
            Some(b)
        } else if b == from {
            Some(a)
        } else {
            None
        }
    }
}

/// Parse a grid of `| - L J 7 F . S` characters.
pub fn parse_pipes(input: &str) -> Result<Grid<Pipe>, LoadError> {
    parse_grid(input, |pos, ch| Pipe::from_char(ch).ok_or(LoadError::InvalidCell { ch, pos }))
}

/// Why no loop could be traced.
#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopError {
    #[error("grid has no start tile")]
    MissingStart,
    #[error("grid has {0} start tiles")]
    MultipleStarts(usize),
    /// No walk from the start returned to it.
    #[error("start tile at {0} is not on a closed loop")]
    Open(Pos),
}

impl From<LoopError> for Error {
    fn from(e: LoopError) -> Self {
        let kind = match e {
            LoopError::MissingStart | LoopError::MultipleStarts(_) => ErrorKind::Parse,
            LoopError::Open(_) => ErrorKind::InvariantViolation,
        };
        Error::new(kind, e.to_string())
    }
}

/// A closed loop through the start tile.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PipeLoop {
    /// Loop cells in walking order, starting at the start tile.
    pub cells: Vec<Pos>,
    /// Shape inferred for the start tile.
    pub start_pipe: Pipe,
    bounds: Range,
}

impl PipeLoop {
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Steps from the start to the point of the loop farthest from it.
    pub fn farthest(&self) -> usize {
        self.cells.len() / 2
    }

    /// Number of cells strictly inside the loop.
    pub fn enclosed(&self) -> usize {
        enclosed_by_loop(&self.cells, self.bounds)
    }
}

/// Find the start tile and trace the loop through it.
///
/// The start tile's shape is inferred: the first neighbour that connects
/// back to it and leads around to another such neighbour wins.
pub fn find_loop(grid: &Grid<Pipe>) -> Result<PipeLoop, LoopError> {
    let starts = grid.positions(|&p| p == Pipe::Start);
    let start = match starts.as_slice() {
        [] => return Err(LoopError::MissingStart),
        [s] => *s,
        many => return Err(LoopError::MultipleStarts(many.len())),
    };

    for first in Direction::ALL {
        let next = start.step(first);
        if !grid.get(next).is_some_and(|p| p.connects(first.opposite())) {
            continue;
        }
        if let Some((cells, last)) = walk(grid, start, first) {
            let start_pipe = Pipe::joining(first, last.opposite()).ok_or(LoopError::Open(start))?;
            log::debug!(
                "find_loop: start {start} is {start_pipe:?}, loop of {} cells",
                cells.len()
            );
            return Ok(PipeLoop {
                cells,
                start_pipe,
                bounds: grid.bounds(),
            });
        }
        log::trace!("find_loop: heading {first} from {start} does not close");
    }
    Err(LoopError::Open(start))
}

/// Walk from `start` leaving by `first`. Returns the cells and the heading
/// of the final step back into `start`.
fn walk(grid: &Grid<Pipe>, start: Pos, first: Direction) -> Option<(Vec<Pos>, Direction)> {
    let mut cells = vec![start];
    let mut cur = start.step(first);
    let mut heading = first;
    while cur != start {
        if cells.len() > grid.bounds().len() {
            return None;
        }
        cells.push(cur);
        heading = grid.get(cur)?.exit(heading.opposite())?;
        cur = cur.step(heading);
    }
    Some((cells, heading))
}
