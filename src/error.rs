//! Errors raised by the board, the search engine and the game driver

use crate::mark::Mark;

/// Errors that can occur while setting up or playing a game
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    #[error("invalid board size {width}x{height}, dimensions must be between 1 and {max}")]
    InvalidDimensions {
        width: usize,
        height: usize,
        max: usize,
    },

    #[error("a run of {cells_to_win} tiles can never be completed on a {width}x{height} board")]
    InvalidCellsToWin {
        width: usize,
        height: usize,
        cells_to_win: usize,
    },

    #[error("invalid move in column {column}: {reason}")]
    IllegalMove { column: usize, reason: &'static str },

    #[error("the empty mark cannot play or search")]
    EmptyMark,

    #[error("both players use the mark {0:?}")]
    DuplicateMark(Mark),

    #[error("no legal move exists on this board")]
    NoLegalMove,

    #[error("player {0:?} is not computer controlled")]
    NotAutomatic(Mark),

    #[error("could not parse '{0}' as a valid move")]
    InvalidMoveString(char),
}

pub type Result<T> = std::result::Result<T, Error>;
