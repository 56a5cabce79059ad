use gridwalk_core::{Error, ErrorKind, Pos};

/// A reconstructed path and its accumulated cost.
///
/// `cells` runs from start to target and includes both endpoints.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Path {
    pub cells: Vec<Pos>,
    pub cost: i32,
}

impl Path {
    /// Number of edges walked.
    #[inline]
    pub fn steps(&self) -> usize {
        self.cells.len().saturating_sub(1)
    }

    /// First cell of the path.
    pub fn start(&self) -> Option<Pos> {
        self.cells.first().copied()
    }

    /// Last cell of the path.
    pub fn end(&self) -> Option<Pos> {
        self.cells.last().copied()
    }
}

/// Why a path query produced no path.
#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum PathError {
    /// A start or target position lies outside the search range.
    #[error("position {0} is outside the search range")]
    OutOfRange(Pos),
    /// The frontier was exhausted without reaching the target.
    #[error("no path from {from} to {to}")]
    Unreachable { from: Pos, to: Pos },
}

impl From<PathError> for Error {
    fn from(e: PathError) -> Self {
        let kind = match e {
            PathError::OutOfRange(_) => ErrorKind::InvariantViolation,
            PathError::Unreachable { .. } => ErrorKind::Unreachable,
        };
        Error::new(kind, e.to_string())
    }
}
