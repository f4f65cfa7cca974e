//! Turn taking between two players sharing one board

use crate::board::{Board, Outcome};
use crate::error::{Error, Result};
use crate::mark::Mark;
use crate::search::{Decision, SearchEngine};

/// Who picks the moves for a player
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum Controller {
    Human,
    Computer(SearchEngine),
}

impl Controller {
    pub fn is_automatic(&self) -> bool {
        match self {
            Controller::Computer(_) => true,
            Controller::Human => false,
        }
    }
}

#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub struct Player {
    mark: Mark,
    controller: Controller,
}

impl Player {
    pub fn human(mark: Mark) -> Self {
        Self {
            mark,
            controller: Controller::Human,
        }
    }

    /// A computer player, playing the engine's mark
    pub fn computer(engine: SearchEngine) -> Self {
        Self {
            mark: engine.mark(),
            controller: Controller::Computer(engine),
        }
    }

    pub fn mark(&self) -> Mark {
        self.mark
    }

    pub fn controller(&self) -> Controller {
        self.controller
    }
}

/// A game between two players, `first` moving first
#[derive(Clone, Debug)]
pub struct Game {
    board: Board,
    players: [Player; 2],
    // index into `players`
    turn: usize,
}

impl Game {
    pub fn new(board: Board, first: Player, second: Player) -> Result<Self> {
        if first.mark.is_empty() || second.mark.is_empty() {
            return Err(Error::EmptyMark);
        }
        if first.mark == second.mark {
            return Err(Error::DuplicateMark(first.mark));
        }
        Ok(Self {
            board,
            players: [first, second],
            turn: 0,
        })
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn players(&self) -> &[Player; 2] {
        &self.players
    }

    pub fn current_player(&self) -> &Player {
        &self.players[self.turn]
    }

    pub fn to_move(&self) -> Mark {
        self.current_player().mark
    }

    pub fn outcome(&self) -> Outcome {
        self.board.outcome()
    }

    /// Plays `column` for the player to move, returning the row the tile landed on
    pub fn play(&mut self, column: usize) -> Result<usize> {
        let row = self.board.make_move(self.to_move(), column)?;
        self.turn = 1 - self.turn;
        Ok(row)
    }

    /// Lets the computer player to move choose and play a column
    pub fn play_computer(&mut self) -> Result<Decision> {
        match self.current_player().controller {
            Controller::Computer(engine) => {
                let decision = engine.choose_move(&mut self.board)?;
                self.turn = 1 - self.turn;
                Ok(decision)
            }
            Controller::Human => Err(Error::NotAutomatic(self.to_move())),
        }
    }

    /// Starts again on an empty board of the same size, with the first player to move
    pub fn new_round(&mut self) -> Result<()> {
        self.board = Board::new(
            self.board.width(),
            self.board.height(),
            self.board.cells_to_win(),
        )?;
        self.turn = 0;
        Ok(())
    }
}
