//! Puzzle samples solved with the gridwalk engines.
//!
//! Each [`Run`] pairs one example input with the function that answers one
//! part of its puzzle. [`RUNS`] lists them in the order the demo binary
//! prints them.

use gridwalk_core::text::{non_empty_lines, split_pair};
use gridwalk_core::{Direction, Error, Grid, Pos, Result, parse_char_grid, parse_digit_grid};
use gridwalk_paths::beam::{max_energized, parse_optics, trace_beam};
use gridwalk_paths::pipes::{find_loop, parse_pipes};
use gridwalk_paths::polygon::{DigPlan, flood_volume};
use gridwalk_paths::{MoveRules, PathRange, Pather, WeightedPather};
use gridwalk_sim::scoring::{expand_positions, pairwise_manhattan_sum};
use gridwalk_sim::{Platform, spun_load};

pub mod samples;

/// One part of one puzzle, run on one sample.
pub struct Run {
    pub day: u8,
    pub part: u8,
    pub sample: &'static str,
    pub input: &'static str,
    pub solve: fn(&str) -> Result<i64>,
}

impl Run {
    pub fn answer(&self) -> Result<i64> {
        (self.solve)(self.input)
    }
}

pub const RUNS: &[Run] = &[
    Run {
        day: 10,
        part: 1,
        sample: "pipes-simple",
        input: samples::PIPES_SIMPLE,
        solve: loop_farthest,
    },
    Run {
        day: 10,
        part: 1,
        sample: "pipes-complex",
        input: samples::PIPES_COMPLEX,
        solve: loop_farthest,
    },
    Run {
        day: 10,
        part: 2,
        sample: "pipes-enclosing",
        input: samples::PIPES_ENCLOSING,
        solve: loop_enclosed,
    },
    Run {
        day: 11,
        part: 1,
        sample: "galaxies",
        input: samples::GALAXIES,
        solve: galaxies_doubled,
    },
    Run {
        day: 11,
        part: 2,
        sample: "galaxies-x100",
        input: samples::GALAXIES,
        solve: galaxies_hundredfold,
    },
    Run {
        day: 14,
        part: 1,
        sample: "platform",
        input: samples::PLATFORM,
        solve: north_load,
    },
    Run {
        day: 14,
        part: 2,
        sample: "platform",
        input: samples::PLATFORM,
        solve: spin_load,
    },
    Run {
        day: 16,
        part: 1,
        sample: "contraption",
        input: samples::CONTRAPTION,
        solve: energized_from_corner,
    },
    Run {
        day: 16,
        part: 2,
        sample: "contraption",
        input: samples::CONTRAPTION,
        solve: energized_best,
    },
    Run {
        day: 17,
        part: 1,
        sample: "city",
        input: samples::CITY,
        solve: crucible_heat_loss,
    },
    Run {
        day: 17,
        part: 2,
        sample: "city",
        input: samples::CITY,
        solve: ultra_crucible_heat_loss,
    },
    Run {
        day: 17,
        part: 2,
        sample: "city-unfair",
        input: samples::CITY_UNFAIR,
        solve: ultra_crucible_heat_loss,
    },
    Run {
        day: 18,
        part: 1,
        sample: "dig-plan",
        input: samples::DIG_PLAN,
        solve: lagoon,
    },
    Run {
        day: 18,
        part: 2,
        sample: "dig-plan",
        input: samples::DIG_PLAN,
        solve: hex_lagoon,
    },
];

fn count(n: usize) -> i64 {
    n as i64
}

// Day 10: pipe maze.

pub fn loop_farthest(input: &str) -> Result<i64> {
    let lp = find_loop(&parse_pipes(input)?)?;
    Ok(count(lp.farthest()))
}

pub fn loop_enclosed(input: &str) -> Result<i64> {
    let lp = find_loop(&parse_pipes(input)?)?;
    Ok(count(lp.enclosed()))
}

// Day 11: cosmic expansion.

pub fn galaxy_distances(input: &str, factor: i32) -> Result<i64> {
    let image = parse_char_grid(input)?;
    let galaxies = image.positions(|&c| c == '#');
    let expanded = expand_positions(
        &galaxies,
        image.bounds(),
        |r| galaxies.iter().all(|g| g.row != r),
        |c| galaxies.iter().all(|g| g.col != c),
        factor,
    );
    Ok(pairwise_manhattan_sum(&expanded))
}

fn galaxies_doubled(input: &str) -> Result<i64> {
    galaxy_distances(input, 2)
}

fn galaxies_hundredfold(input: &str) -> Result<i64> {
    galaxy_distances(input, 100)
}

// Day 14: parabolic reflector dish.

pub fn north_load(input: &str) -> Result<i64> {
    let mut platform = Platform::parse(input)?;
    platform.tilt(Direction::Up);
    Ok(count(platform.load()))
}

pub fn spin_load(input: &str) -> Result<i64> {
    let platform = Platform::parse(input)?;
    Ok(count(spun_load(&platform, 1_000_000_000)))
}

// Day 16: the floor will be lava.

pub fn energized_from_corner(input: &str) -> Result<i64> {
    let grid = parse_optics(input)?;
    Ok(count(trace_beam(&grid, Pos::ZERO, Direction::Right).energized()))
}

pub fn energized_best(input: &str) -> Result<i64> {
    Ok(count(max_energized(&parse_optics(input)?)))
}

// Day 17: clumsy crucible.

/// City blocks; entering one costs its heat loss.
struct City(Grid<u8>);

impl Pather for City {
    fn neighbors(&self, p: Pos, buf: &mut Vec<Pos>) {
        buf.extend(p.neighbors_4().into_iter().filter(|&n| self.0.contains(n)));
    }
}

impl WeightedPather for City {
    fn cost(&self, _from: Pos, to: Pos) -> i32 {
        self.0.get(to).map_or(i32::MAX, |&w| i32::from(w))
    }
}

pub fn heat_loss(input: &str, rules: MoveRules) -> Result<i64> {
    let city = City(parse_digit_grid(input)?);
    let mut pr = PathRange::new(city.0.bounds());
    let factory = Pos::new(city.0.rows() as i32 - 1, city.0.cols() as i32 - 1);
    let path = pr.constrained_path(&city, Pos::ZERO, factory, rules)?;
    Ok(i64::from(path.cost))
}

fn crucible_heat_loss(input: &str) -> Result<i64> {
    heat_loss(input, MoveRules::default())
}

fn ultra_crucible_heat_loss(input: &str) -> Result<i64> {
    heat_loss(input, MoveRules::ultra())
}

// Day 18: lavaduct lagoon.

/// The plan as written, and the plan hidden in the colour codes.
pub fn parse_dig_plans(input: &str) -> Result<(DigPlan, DigPlan)> {
    let mut plain = DigPlan::new();
    let mut hex = DigPlan::new();
    for line in non_empty_lines(input) {
        let (dir, rest) = split_pair(line, " ")?;
        let (len, color) = split_pair(rest, " ")?;

        let mut chars = dir.chars();
        let dir = match (chars.next().and_then(Direction::from_char), chars.next()) {
            (Some(d), None) => d,
            _ => return Err(Error::parse(format!("bad direction {dir:?} in {line:?}"))),
        };
        let len: i64 = len
            .parse()
            .map_err(|e| Error::parse(format!("bad length {len:?} in {line:?}: {e}")))?;
        plain.push(dir, len);

        let code = color
            .strip_prefix("(#")
            .and_then(|c| c.strip_suffix(')'))
            .filter(|c| c.len() == 6)
            .ok_or_else(|| Error::parse(format!("bad colour code {color:?}")))?;
        let (dist, turn) = code.split_at(5);
        let dist = i64::from_str_radix(dist, 16)
            .map_err(|e| Error::parse(format!("bad colour code {color:?}: {e}")))?;
        let turn = match turn {
            "0" => Direction::Right,
            "1" => Direction::Down,
            "2" => Direction::Left,
            "3" => Direction::Up,
            _ => return Err(Error::parse(format!("bad colour direction {turn:?}"))),
        };
        hex.push(turn, dist);
    }
    for plan in [&plain, &hex] {
        if !plan.is_closed() {
            return Err(Error::invariant("dig plan does not return to its start"));
        }
    }
    log::debug!("parse_dig_plans: {} instructions", plain.steps().len());
    Ok((plain, hex))
}

pub fn lagoon(input: &str) -> Result<i64> {
    let (plain, _) = parse_dig_plans(input)?;
    Ok(count(flood_volume(&plain)?))
}

pub fn hex_lagoon(input: &str) -> Result<i64> {
    let (_, hex) = parse_dig_plans(input)?;
    Ok(hex.lagoon_volume())
}

#[cfg(test)]
mod tests {
    use super::*;
    use gridwalk_core::ErrorKind;

    #[test]
    fn published_answers() {
        let expected = [4, 8, 4, 374, 8410, 136, 64, 46, 51, 102, 94, 71, 62, 952_408_144_115];
        assert_eq!(RUNS.len(), expected.len());
        for (run, want) in RUNS.iter().zip(expected) {
            assert_eq!(
                run.answer().unwrap(),
                want,
                "day {} part {} ({})",
                run.day,
                run.part,
                run.sample
            );
        }
    }

    #[test]
    fn galaxies_tenfold() {
        assert_eq!(galaxy_distances(samples::GALAXIES, 10).unwrap(), 1030);
    }

    #[test]
    fn flood_and_pick_agree_on_plain_plan() {
        let (plain, hex) = parse_dig_plans(samples::DIG_PLAN).unwrap();
        assert_eq!(plain.lagoon_volume(), lagoon(samples::DIG_PLAN).unwrap());
        assert_eq!(hex.steps()[0], (Direction::Right, 461_937));
    }

    #[test]
    fn bad_inputs_carry_error_kinds() {
        assert_eq!(loop_farthest("...\n...").unwrap_err().kind, ErrorKind::Parse);
        assert_eq!(loop_farthest("..\n...").unwrap_err().kind, ErrorKind::Parse);
        assert_eq!(lagoon("R 6").unwrap_err().kind, ErrorKind::Parse);
        assert_eq!(
            lagoon("R 2 (#000020)\nD 2 (#000021)").unwrap_err().kind,
            ErrorKind::InvariantViolation
        );
        assert_eq!(heat_loss("1\n", MoveRules::ultra()).unwrap(), 0);
        assert_eq!(
            heat_loss("111", MoveRules::ultra()).unwrap_err().kind,
            ErrorKind::Unreachable
        );
    }
}
