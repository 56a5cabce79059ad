//! A platform of rocks that roll when it is tilted.

use std::fmt;

use gridwalk_core::{Direction, Grid, LoadError, Pos, parse_grid};

use crate::cycle::state_after;
use crate::scoring::row_weighted_count;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Rock {
    /// `O`, rolls.
    Round,
    /// `#`, fixed.
    Cube,
    /// `.`
    Empty,
}

impl Rock {
    pub fn from_char(ch: char) -> Option<Self> {
        match ch {
            'O' => Some(Rock::Round),
            '#' => Some(Rock::Cube),
            '.' => Some(Rock::Empty),
            _ => None,
        }
    }

    pub fn to_char(self) -> char {
        match self {
            Rock::Round => 'O',
            Rock::Cube => '#',
            Rock::Empty => '.',
        }
    }
}

impl fmt::Display for Rock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_char())
    }
}

/// Rocks on a rectangular platform.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Platform(pub Grid<Rock>);

impl Platform {
    pub fn parse(input: &str) -> Result<Self, LoadError> {
        parse_grid(input, |pos, ch| Rock::from_char(ch).ok_or(LoadError::InvalidCell { ch, pos })).map(Platform)
    }

    /// Roll every round rock as far as it goes towards `dir`.
    pub fn tilt(&mut self, dir: Direction) {
        let rows = self.0.rows() as i32;
        let cols = self.0.cols() as i32;
        let (lanes, len) = if dir.is_horizontal() { (rows, cols) } else { (cols, rows) };

        // `k` counts cells away from the wall the rocks roll towards.
        let at = |lane: i32, k: i32| match dir {
            Direction::Up => Pos::new(k, lane),
            Direction::Down => Pos::new(rows - 1 - k, lane),
            Direction::Left => Pos::new(lane, k),
            Direction::Right => Pos::new(lane, cols - 1 - k),
        };

        for lane in 0..lanes {
            let mut free = 0;
            for k in 0..len {
                match self.0[at(lane, k)] {
                    Rock::Cube => free = k + 1,
                    Rock::Round => {
                        if free != k {
                            self.0.swap(at(lane, free), at(lane, k));
                        }
                        free += 1;
                    }
                    Rock::Empty => {}
                }
            }
        }
    }

    /// Tilt north, west, south, then east.
    pub fn spin(&mut self) {
        for dir in [Direction::Up, Direction::Left, Direction::Down, Direction::Right] {
            self.tilt(dir);
        }
    }

    /// Sum over round rocks of their distance from the south edge, counting
    /// the bottom row as 1.
    pub fn load(&self) -> usize {
        row_weighted_count(&self.0, |&r| r == Rock::Round)
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

/// Load after `spins` full spin cycles.
pub fn spun_load(platform: &Platform, spins: usize) -> usize {
    state_after(platform.clone(), spins, |p| {
        let mut next = p.clone();
        next.spin();
        next
    })
    .load()
}

#[cfg(test)]
mod tests {
    use super::*;

    const DISH: &str = "\
O....#....
O.OO#....#
.....##...
OO.#O....O
.O.....O#.
O.#..O.#.#
..O..#O..O
.......O..
#....###..
#OO..#....
";

    #[test]
    fn north_load_sample() {
        let mut p = Platform::parse(DISH).unwrap();
        p.tilt(Direction::Up);
        assert_eq!(p.load(), 136);
    }

    #[test]
    fn one_spin_sample() {
        let mut p = Platform::parse(DISH).unwrap();
        p.spin();
        let expected = Platform::parse(
            "\
.....#....
....#...O#
...OO##...
.OO#......
.....OOO#.
.O#...O#.#
....O#....
......OOOO
#...O###..
#..OO#....
",
        )
        .unwrap();
        assert_eq!(p, expected);
    }

    #[test]
    fn billion_spins_sample() {
        let p = Platform::parse(DISH).unwrap();
        assert_eq!(spun_load(&p, 1_000_000_000), 64);
    }

    #[test]
    fn tilt_each_way() {
        let row = |s: &str, dir| {
            let mut p = Platform::parse(s).unwrap();
            p.tilt(dir);
            p.to_string()
        };
        assert_eq!(row(".O.#O.O", Direction::Left), "O..#OO.");
        assert_eq!(row(".O.#O.O", Direction::Right), "..O#.OO");
        assert_eq!(row("O\n.\n#\n.\nO", Direction::Down), ".\nO\n#\n.\nO");
    }

    #[test]
    fn tilting_preserves_rocks() {
        let mut p = Platform::parse(DISH).unwrap();
        let count = |p: &Platform| p.0.iter().filter(|&(_, &r)| r == Rock::Round).count();
        let before = count(&p);
        for _ in 0..3 {
            p.spin();
        }
        assert_eq!(count(&p), before);
    }

    #[test]
    fn rejects_unknown_rock() {
        assert!(matches!(
            Platform::parse("O.x"),
            Err(LoadError::InvalidCell { ch: 'x', .. })
        ));
    }
}
