//! Traversal engine for puzzle grids.
//!
//! This crate provides the searches that grid puzzles keep reaching for:
//!
//! - **BFS** unweighted distance maps and paths ([`PathRange::bfs_map`], [`PathRange::bfs_path`])
//! - **Dijkstra** multi-source distance maps and paths ([`PathRange::dijkstra_map`], [`PathRange::dijkstra_path`])
//! - **A\*** shortest-path search ([`PathRange::astar_path`])
//! - **Run-length constrained** shortest paths ([`PathRange::constrained_path`])
//! - **Flood fill** and connected components ([`PathRange::cc_map`], [`PathRange::cc_map_all`])
//! - **Beam propagation** through mirrors and splitters ([`beam`])
//! - **Pipe loop tracing** ([`pipes`]) and **loop areas** ([`polygon`])
//!
//! The position-indexed searches operate through [`PathRange`], which owns
//! and reuses internal caches so repeated queries on one grid do not
//! reallocate.
//!
//! # Trait hierarchy
//!
//! | Trait | Required for |
//! |---|---|
//! | [`Pather`] | BFS, connected components |
//! | [`WeightedPather`] : [`Pather`] | Dijkstra, constrained search |
//! | [`AstarPather`] : [`WeightedPather`] | A* |

mod astar;
mod bfs;
mod cc;
mod constrained;
mod dijkstra;
mod distance;
mod path;
mod pathrange;
mod traits;

pub mod beam;
pub mod pipes;
pub mod polygon;

#[cfg(test)]
mod testutil;

pub use constrained::MoveRules;
pub use distance::manhattan;
pub use path::{Path, PathError};
pub use pathrange::{PathNode, PathRange};
pub use traits::{AstarPather, Pather, WeightedPather};
