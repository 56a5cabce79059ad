//! Cardinal [`Direction`]s.
//!
//! A traversal that has not started moving yet carries
//! `Option<Direction>::None`; every actual `Direction` has an opposite.

use std::fmt;

use crate::geom::Pos;

/// One of the four cardinal directions on a grid.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// All four directions, in up/down/left/right order.
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    /// Unit offset for one step in this direction.
    #[inline]
    pub const fn delta(self) -> Pos {
        match self {
            Self::Up => Pos::new(-1, 0),
            Self::Down => Pos::new(1, 0),
            Self::Left => Pos::new(0, -1),
            Self::Right => Pos::new(0, 1),
        }
    }

    /// The reverse direction.
    #[inline]
    pub const fn opposite(self) -> Self {
        match self {
            Self::Up => Self::Down,
            Self::Down => Self::Up,
            Self::Left => Self::Right,
            Self::Right => Self::Left,
        }
    }

    /// Whether the direction moves along a row (left/right).
    #[inline]
    pub const fn is_horizontal(self) -> bool {
        matches!(self, Self::Left | Self::Right)
    }

    /// The direction of a single cardinal step from `from` to `to`, if the
    /// two positions are orthogonally adjacent.
    pub fn between(from: Pos, to: Pos) -> Option<Self> {
        let d = to - from;
        Self::ALL.into_iter().find(|dir| dir.delta() == d)
    }

    /// Parse `U`/`D`/`L`/`R` (or `^`/`v`/`<`/`>`).
    pub fn from_char(ch: char) -> Option<Self> {
        match ch {
            'U' | '^' => Some(Self::Up),
            'D' | 'v' => Some(Self::Down),
            'L' | '<' => Some(Self::Left),
            'R' | '>' => Some(Self::Right),
            _ => None,
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let ch = match self {
            Self::Up => '^',
            Self::Down => 'v',
            Self::Left => '<',
            Self::Right => '>',
        };
        write!(f, "{ch}")
    }
}
