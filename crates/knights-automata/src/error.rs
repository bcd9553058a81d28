//! Error types for knights-automata.

use thiserror::Error;

use crate::cell::Coord;

/// Errors that can occur while building a board.
///
/// All of these indicate a defect in how the topology was requested; none
/// occur while stepping an already-built board.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BoardError {
    /// The two cells are already joined by a link.
    #[error("link already exists between {a:?} and {b:?}")]
    DuplicateLink {
        /// First endpoint.
        a: Coord,
        /// Second endpoint.
        b: Coord,
    },

    /// A coordinate lies outside the board.
    #[error("cell {coord:?} is outside a {size}x{size} board")]
    CellOutOfBounds {
        /// The offending coordinate.
        coord: Coord,
        /// Board size.
        size: usize,
    },

    /// A move would link a cell to itself.
    #[error("move ({dx}, {dy}) does not leave the cell")]
    InvalidMove {
        /// Horizontal offset.
        dx: i32,
        /// Vertical offset.
        dy: i32,
    },

    /// Boards must have at least one cell.
    #[error("board size must be at least 1, got {0}")]
    InvalidSize(usize),
}
