//! Error types for board construction and lookup.

use derive_more::Display;

/// Errors raised by [`Board`](crate::board::Board) operations.
#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum BoardError {
    /// A tile lookup asked for a value that no board can hold.
    #[display("tile value {value} is out of range 0..=8")]
    OutOfRange {
        /// The requested value.
        value: i32,
    },

    /// The cells are not a permutation of 0..=8.
    #[display("cells {cells:?} are not a permutation of 0..=8")]
    InvalidTiles {
        /// The rejected cells, row-major.
        cells: Vec<u8>,
    },

    /// Text could not be read as a board.
    #[display("cannot parse board from {input:?}: {reason}")]
    Parse {
        /// The offending input.
        input: String,
        /// What went wrong.
        reason: String,
    },
}

impl std::error::Error for BoardError {}
