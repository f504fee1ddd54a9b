//! Error types for maze parsing, validation and path reconstruction.

use crate::tile::Position;
use thiserror::Error;

/// Structural problems with a maze. Fatal to the maze instance: the caller
/// has to supply a corrected layout.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StructuralError {
    #[error("valid mazes must have a start")]
    MissingStart,

    #[error("valid mazes can only have one start (found another at {0})")]
    DuplicateStart(Position),

    #[error("valid mazes must have an end")]
    MissingEnd,

    #[error("valid mazes can only have one end (found another at {0})")]
    DuplicateEnd(Position),

    #[error("valid mazes have 0 or 2 teleporters, found {0}")]
    InvalidTeleporterCount(usize),
}

#[derive(Error, Debug)]
pub enum MazeError {
    #[error(transparent)]
    Structural(#[from] StructuralError),

    #[error("maze has no rows")]
    Empty,

    #[error("row {row} has width {found}, expected {expected}")]
    RaggedRow {
        row: usize,
        expected: usize,
        found: usize,
    },

    #[error("invalid character {ch:?} at row {row}, column {column}")]
    InvalidCharacter { row: usize, column: usize, ch: char },

    /// Raised by unchecked neighbour lookups. Reaching it means a caller
    /// skipped the bounds check.
    #[error("no tile {direction:?} of {from}")]
    OutOfBounds {
        from: Position,
        direction: crate::grid::Direction,
    },

    #[error("end tile has no predecessor chain back to the start")]
    NoPredecessorChain,

    #[error("failed to read maze: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, MazeError>;
