use thiserror::Error;

use crate::scene::Role;

/// Errors produced while reading or validating polygon data.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    #[error("line {line}: unexpected end of input, expected {expected}")]
    UnexpectedEnd { line: usize, expected: &'static str },

    #[error("line {line}: expected {expected}, found {found:?}")]
    Malformed {
        line: usize,
        expected: &'static str,
        found: String,
    },

    #[error("line {line}: unexpected trailing content {found:?}")]
    TrailingContent { line: usize, found: String },

    #[error("canvas dimensions must not be negative, got {width}x{height}")]
    NegativeDimension { width: i64, height: i64 },

    #[error("line {line}: unsupported amount of {role} contours: {count}")]
    ContourCount { line: usize, role: Role, count: i64 },

    #[error("line {line}: point count must not be negative, got {count}")]
    NegativePointCount { line: usize, count: i64 },

    #[error("{role} polygon has {count} points, at least 3 are required")]
    TooFewPoints { role: Role, count: usize },

    #[error("{0} polygon is not simple")]
    NotSimple(Role),

    #[error("hole is not nested inside the subject polygon")]
    HoleNotNested,

    #[error("thickness must be in the range 1..={max}, got {thickness}")]
    Thickness { thickness: u32, max: u32 },
}

/// Convenience type alias for results using [`Error`].
pub type Result<T> = std::result::Result<T, Error>;
