//! Repeated-transform simulation and scoring for puzzle grids.
//!
//! - [`cycle`] finds where an iterated transform starts repeating and
//!   collapses huge iteration counts.
//! - [`tilt`] rolls rocks across a platform.
//! - [`scoring`] folds a final grid or set of positions into a number.

pub mod cycle;
pub mod scoring;
pub mod tilt;

pub use cycle::{Cycle, CycleDetector, detect_cycle, state_after};
pub use tilt::{Platform, Rock, spun_load};
