//! Error taxonomy shared by every solver stage.
//!
//! Module-level errors ([`LoadError`], path and loop errors in
//! `gridwalk-paths`) convert into [`Error`], which carries a discriminated
//! [`ErrorKind`] plus a human-readable message.

use std::fmt;

use thiserror::Error;

use crate::loader::LoadError;

/// What went wrong, coarsely.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Reading input failed.
    Io,
    /// Input text did not have the expected shape.
    Parse,
    /// A structural assumption about the input or state did not hold.
    InvariantViolation,
    /// A search exhausted its frontier without reaching the target.
    Unreachable,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Io => "io",
            Self::Parse => "parse",
            Self::InvariantViolation => "invariant violation",
            Self::Unreachable => "unreachable",
        };
        f.write_str(s)
    }
}

/// A tagged error with a kind and a message.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{kind} error: {message}")]
pub struct Error {
    pub kind: ErrorKind,
    pub message: String,
}

/// Convenience alias.
pub type Result<T, E = Error> = std::result::Result<T, E>;

impl Error {
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    pub fn parse(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Parse, message)
    }

    pub fn invariant(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::InvariantViolation, message)
    }

    pub fn unreachable(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Unreachable, message)
    }
}

impl From<std::io::Error> for Error {
    fn from(e: std::io::Error) -> Self {
        Self::new(ErrorKind::Io, e.to_string())
    }
}

impl From<LoadError> for Error {
    fn from(e: LoadError) -> Self {
        Self::parse(e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geom::Pos;

    #[test]
    fn display_includes_kind() {
        let e = Error::unreachable("no path from (0, 0) to (2, 2)");
        assert_eq!(e.to_string(), "unreachable error: no path from (0, 0) to (2, 2)");
    }

    #[test]
    fn load_errors_become_parse_errors() {
        let e: Error = LoadError::InvalidCell {
            ch: '?',
            pos: Pos::new(1, 2),
        }
        .into();
        assert_eq!(e.kind, ErrorKind::Parse);
        assert!(e.message.contains("(1, 2)"));
    }

    #[test]
    fn io_errors_keep_message() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "res/input.txt");
        let e: Error = io.into();
        assert_eq!(e.kind, ErrorKind::Io);
        assert!(e.message.contains("res/input.txt"));
    }
}
