//! A game engine for playing 'ConnectX', Connect 4 on boards of any size
//! up to 9x9 with any winning run length
//!
//! The engine has two parts: a [`Board`](board::Board) that owns the game state
//! and detects wins, and a [`SearchEngine`](search::SearchEngine) that picks
//! moves with a depth-limited minimax search with alpha-beta pruning.
//!
//! # Basic Usage
//!
//! ```
//! use connectx::{board::Board, mark::Mark, search::SearchEngine};
//!
//!# use std::error::Error;
//!# fn main() -> Result<(), Box<dyn Error>> {
//! // player one can complete the bottom row, player two threatens column 7
//! let mut board = Board::from_moves(7, 6, 4, "172737")?;
//! let engine = SearchEngine::new(Mark::PlayerOne)?.with_search_limit(4);
//! let decision = engine.choose_move(&mut board)?;
//!
//! assert_eq!(decision.column, 3);
//! assert_eq!(board.check_winner(), Mark::PlayerOne);
//!# Ok(())
//!# }
//! ```

use static_assertions::*;
pub use anyhow;

pub mod error;

pub mod mark;

pub mod board;

pub mod heuristic;

pub mod search;

pub mod game;


pub use error::{Error, Result};

/// The largest supported width or height of the game board in tiles
pub const MAX_DIMENSION: usize = 9;

/// The default width of the game board in tiles
pub const DEFAULT_WIDTH: usize = 7;

/// The default height of the game board in tiles
pub const DEFAULT_HEIGHT: usize = 6;

/// The default number of tiles in a row needed to win
pub const DEFAULT_CELLS_TO_WIN: usize = 4;

// the defaults must describe a board that can be constructed
const_assert!(DEFAULT_WIDTH <= MAX_DIMENSION && DEFAULT_HEIGHT <= MAX_DIMENSION);
const_assert!(DEFAULT_CELLS_TO_WIN <= DEFAULT_WIDTH || DEFAULT_CELLS_TO_WIN <= DEFAULT_HEIGHT);
// move strings use a single digit per column
const_assert!(MAX_DIMENSION <= 9);
