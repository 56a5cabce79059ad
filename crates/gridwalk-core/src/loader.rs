//! Line-oriented text → [`Grid`] loading.
//!
//! Each character is mapped to a cell through a caller-supplied lookup.
//! Both `\n` and `\r\n` line endings are accepted and trailing blank lines
//! are ignored.

use thiserror::Error;

use crate::geom::Pos;
use crate::grid::Grid;

/// Errors that can occur when loading a grid.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LoadError {
    /// The input has no rows.
    #[error("grid input is empty")]
    Empty,
    /// A row's width differs from the first row's.
    #[error("grid row {row} has width {found}, expected {expected}")]
    Jagged {
        row: usize,
        expected: usize,
        found: usize,
    },
    /// The cell count does not match the requested dimensions.
    #[error("{len} cells cannot fill a {rows}x{cols} grid")]
    Shape { rows: usize, cols: usize, len: usize },
    /// The lookup rejected a character.
    #[error("invalid cell \u{201c}{ch}\u{201d} at {pos}")]
    InvalidCell { ch: char, pos: Pos },
}

/// Parse `input` into a grid, mapping every character through `cell`.
///
/// `cell` receives the position and character and returns the cell value or
/// an error (usually [`LoadError::InvalidCell`]).
pub fn parse_grid<T, F>(input: &str, mut cell: F) -> Result<Grid<T>, LoadError>
where
    F: FnMut(Pos, char) -> Result<T, LoadError>,
{
    let lines: Vec<&str> = input
        .lines()
        .map(|l| l.strip_suffix('\r').unwrap_or(l))
        .collect();
    let end = lines
        .iter()
        .rposition(|l| !l.trim().is_empty())
        .map_or(0, |i| i + 1);
    let lines = &lines[..end];

    let Some(first) = lines.first() else {
        return Err(LoadError::Empty);
    };
    let cols = first.chars().count();
    let mut cells = Vec::with_capacity(lines.len() * cols);
    for (r, line) in lines.iter().enumerate() {
        let before = cells.len();
        for (c, ch) in line.chars().enumerate() {
            cells.push(cell(Pos::new(r as i32, c as i32), ch)?);
        }
        let found = cells.len() - before;
        if found != cols {
            return Err(LoadError::Jagged {
                row: r,
                expected: cols,
                found,
            });
        }
    }
    log::trace!("loaded {}x{} grid", lines.len(), cols);
    Grid::from_vec(lines.len(), cols, cells)
}

/// Load a grid of raw characters.
pub fn parse_char_grid(input: &str) -> Result<Grid<char>, LoadError> {
    parse_grid(input, |_, ch| Ok(ch))
}

/// Load a grid of single decimal digits (`0`–`9`).
pub fn parse_digit_grid(input: &str) -> Result<Grid<u8>, LoadError> {
    parse_grid(input, |pos, ch| {
        ch.to_digit(10)
            .map(|d| d as u8)
            .ok_or(LoadError::InvalidCell { ch, pos })
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_chars() {
        let g = parse_char_grid("#.\n.#\n").unwrap();
        assert_eq!(g.rows(), 2);
        assert_eq!(g.cols(), 2);
        assert_eq!(g[Pos::new(0, 0)], '#');
        assert_eq!(g[Pos::new(1, 0)], '.');
    }

    #[test]
    fn crlf_and_trailing_blank_lines() {
        let g = parse_char_grid("ab\r\ncd\r\n\r\n").unwrap();
        assert_eq!(g.rows(), 2);
        assert_eq!(g.to_string(), "ab\ncd");
    }

    #[test]
    fn jagged_rows_are_rejected() {
        let err = parse_char_grid("abc\nab\nabc").unwrap_err();
        assert_eq!(
            err,
            LoadError::Jagged {
                row: 1,
                expected: 3,
                found: 2
            }
        );
    }

    #[test]
    fn empty_input() {
        assert_eq!(parse_char_grid("").unwrap_err(), LoadError::Empty);
        assert_eq!(parse_char_grid("\n\n").unwrap_err(), LoadError::Empty);
    }

    #[test]
    fn digits() {
        let g = parse_digit_grid("12\n34").unwrap();
        assert_eq!(g[Pos::new(1, 1)], 4);
        let err = parse_digit_grid("12\n3x").unwrap_err();
        assert_eq!(
            err,
            LoadError::InvalidCell {
                ch: 'x',
                pos: Pos::new(1, 1)
            }
        );
    }

    #[test]
    fn custom_lookup() {
        let walls = parse_grid("#.#", |pos, ch| match ch {
            '#' => Ok(true),
            '.' => Ok(false),
            _ => Err(LoadError::InvalidCell { ch, pos }),
        })
        .unwrap();
        assert_eq!(walls.positions(|&w| w).len(), 2);
    }
}
