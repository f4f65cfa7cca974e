//! Move selection by depth limited minimax search with alpha-beta pruning

use rayon::prelude::*;
use tracing::{debug, info};

use crate::board::Board;
use crate::error::{Error, Result};
use crate::heuristic;
use crate::mark::Mark;

/// The score of a position won by the searching player
pub const WIN_SCORE: i64 = i64::MAX;
/// The score of a position won by the opponent
pub const LOSS_SCORE: i64 = i64::MIN;
/// The score of a drawn position
pub const DRAW_SCORE: i64 = 0;

/// The easiest difficulty offered to players, as a search limit in plies
pub const MIN_DIFFICULTY: usize = 3;
/// The hardest difficulty offered to players, as a search limit in plies
pub const MAX_DIFFICULTY: usize = 8;

/// The result of a search
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub struct Decision {
    /// The chosen column, zero-indexed
    pub column: usize,
    /// The minimax value of playing `column`
    pub score: i64,
    /// The number of positions visited (for diagnostics only)
    pub nodes: usize,
}

/// An agent choosing moves for one player
///
/// # Notes
/// Every candidate move is searched on copies of the board, the board passed
/// in is only written to once, by [`choose_move`](SearchEngine::choose_move),
/// after the search has finished.
///
/// # Position Scoring
/// Positions are scored from the point of view of the engine's own mark,
/// whichever player is to move: [`WIN_SCORE`] if the engine has won,
/// [`LOSS_SCORE`] if the opponent has, [`DRAW_SCORE`] for a full board and the
/// [heuristic](crate::heuristic::evaluate) once the search limit is reached.
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub struct SearchEngine {
    mark: Mark,
    search_limit: usize,
}

impl SearchEngine {
    /// Creates an engine playing as `mark` with no search limit
    pub fn new(mark: Mark) -> Result<Self> {
        if mark.is_empty() {
            return Err(Error::EmptyMark);
        }
        Ok(Self {
            mark,
            search_limit: usize::MAX,
        })
    }

    /// Limits the search to `search_limit` plies below each candidate move
    pub fn with_search_limit(mut self, search_limit: usize) -> Self {
        self.search_limit = search_limit;
        self
    }

    pub fn mark(&self) -> Mark {
        self.mark
    }

    pub fn search_limit(&self) -> usize {
        self.search_limit
    }

    /// The static score of `board` for this engine's mark
    pub fn evaluate(&self, board: &Board) -> i64 {
        heuristic::evaluate(board, self.mark)
    }

    /// Finds the best column for this engine's mark without changing `board`
    ///
    /// Ties go to the lowest column. Candidates are searched in parallel, each
    /// with a full window, so every returned score is exact.
    pub fn best_move(&self, board: &Board) -> Result<Decision> {
        let candidates: Vec<usize> = board.legal_moves().collect();

        let scored = candidates
            .par_iter()
            .map(|&column| -> Result<(usize, i64, usize)> {
                let mut next = *board;
                next.make_move(self.mark, column)?;

                let mut search = Search::new(self);
                let score = search.min_value(&next, LOSS_SCORE, WIN_SCORE, 0)?;
                Ok((column, score, search.nodes))
            })
            .collect::<Result<Vec<_>>>()?;

        let mut best: Option<Decision> = None;
        let mut nodes = 0;
        for (column, score, searched) in scored {
            debug!(column, score, nodes = searched, "scored candidate move");
            nodes += searched;
            if best.map_or(true, |best| score > best.score) {
                best = Some(Decision {
                    column,
                    score,
                    nodes: 0,
                });
            }
        }

        let mut best = best.ok_or(Error::NoLegalMove)?;
        best.nodes = nodes;
        info!(
            mark = ?self.mark,
            column = best.column,
            score = best.score,
            nodes,
            "chose move"
        );
        Ok(best)
    }

    /// Finds the best column and plays it on `board`
    pub fn choose_move(&self, board: &mut Board) -> Result<Decision> {
        let decision = self.best_move(board)?;
        board.make_move(self.mark, decision.column)?;
        Ok(decision)
    }
}

/// The state of a single depth-first search
struct Search<'a> {
    engine: &'a SearchEngine,
    nodes: usize,
}

impl<'a> Search<'a> {
    fn new(engine: &'a SearchEngine) -> Self {
        Self { engine, nodes: 0 }
    }

    // scores finished games and positions at the search limit
    fn terminal_value(&mut self, board: &Board, depth: usize) -> Option<i64> {
        self.nodes += 1;

        let winner = board.check_winner();
        if !winner.is_empty() {
            return Some(if winner == self.engine.mark {
                WIN_SCORE
            } else {
                LOSS_SCORE
            });
        }
        if board.is_full() {
            return Some(DRAW_SCORE);
        }
        if depth == self.engine.search_limit {
            return Some(self.engine.evaluate(board));
        }
        None
    }

    /// The engine is to move
    fn max_value(&mut self, board: &Board, mut alpha: i64, beta: i64, depth: usize) -> Result<i64> {
        if let Some(value) = self.terminal_value(board, depth) {
            return Ok(value);
        }

        let mut value = LOSS_SCORE;
        for column in board.legal_moves() {
            if alpha >= beta {
                break;
            }
            let mut next = *board;
            next.make_move(self.engine.mark, column)?;
            value = value.max(self.min_value(&next, alpha, beta, depth + 1)?);
            alpha = alpha.max(value);
        }
        Ok(value)
    }

    /// The opponent is to move
    fn min_value(&mut self, board: &Board, alpha: i64, mut beta: i64, depth: usize) -> Result<i64> {
        if let Some(value) = self.terminal_value(board, depth) {
            return Ok(value);
        }

        let opponent = self.engine.mark.opponent();
        let mut value = WIN_SCORE;
        for column in board.legal_moves() {
            if alpha >= beta {
                break;
            }
            let mut next = *board;
            next.make_move(opponent, column)?;
            value = value.min(self.max_value(&next, alpha, beta, depth + 1)?);
            beta = beta.min(value);
        }
        Ok(value)
    }
}
