//! **gridwalk-core**: grid model for puzzle-style grid solvers.
//!
//! This crate provides the foundational types used across the *gridwalk*
//! workspace: geometry primitives, cardinal directions, a rectangular
//! [`Grid`], a text loader that rejects jagged input, and the shared error
//! taxonomy.

pub mod direction;
pub mod error;
pub mod geom;
pub mod grid;
pub mod loader;
pub mod text;

pub use direction::Direction;
pub use error::{Error, ErrorKind, Result};
pub use geom::{Pos, Range};
pub use grid::Grid;
pub use loader::{LoadError, parse_char_grid, parse_digit_grid, parse_grid};
