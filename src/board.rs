use crate::error::{Error, Result};
use crate::mark::Mark;
use crate::MAX_DIMENSION;

/// The state of a game as seen from the board
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum Outcome {
    InProgress,
    Won(Mark),
    Draw,
}

/// The authoritative game board
///
/// Cells are addressed `[row][column]` with row 0 at the top. Storage is sized
/// for the largest supported board so a `Board` is `Copy` and can be duplicated
/// at every node of a search without touching the heap.
#[derive(Copy, Clone, Debug)]
pub struct Board {
    cells: [[Mark; MAX_DIMENSION]; MAX_DIMENSION],
    // number of tiles in each column
    heights: [usize; MAX_DIMENSION],
    width: usize,
    height: usize,
    cells_to_win: usize,
    empty_cells: usize,
    winner: Mark,
}

impl Board {
    /// Creates an empty board
    ///
    /// Fails if either dimension is outside `1..=MAX_DIMENSION`, or if a run of
    /// `cells_to_win` tiles fits in neither dimension.
    pub fn new(width: usize, height: usize, cells_to_win: usize) -> Result<Self> {
        if width == 0 || height == 0 || width > MAX_DIMENSION || height > MAX_DIMENSION {
            return Err(Error::InvalidDimensions {
                width,
                height,
                max: MAX_DIMENSION,
            });
        }
        if cells_to_win == 0 || cells_to_win > width.max(height) {
            return Err(Error::InvalidCellsToWin {
                width,
                height,
                cells_to_win,
            });
        }

        Ok(Self {
            cells: [[Mark::Empty; MAX_DIMENSION]; MAX_DIMENSION],
            heights: [0; MAX_DIMENSION],
            width,
            height,
            cells_to_win,
            empty_cells: width * height,
            winner: Mark::Empty,
        })
    }

    /// Builds a position from a string of one-indexed column digits,
    /// player one moving first
    pub fn from_moves<S: AsRef<str>>(
        width: usize,
        height: usize,
        cells_to_win: usize,
        moves: S,
    ) -> Result<Self> {
        let mut board = Self::new(width, height, cells_to_win)?;
        let mut mark = Mark::PlayerOne;

        for column_char in moves.as_ref().chars() {
            match column_char.to_digit(10).map(|c| c as usize) {
                Some(column @ 1..=MAX_DIMENSION) => {
                    board.make_move(mark, column - 1)?;
                    mark = mark.opponent();
                }
                _ => return Err(Error::InvalidMoveString(column_char)),
            }
        }
        Ok(board)
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn cells_to_win(&self) -> usize {
        self.cells_to_win
    }

    pub fn empty_cells(&self) -> usize {
        self.empty_cells
    }

    /// Panics if the cell lies outside the board
    pub fn cell(&self, row: usize, column: usize) -> Mark {
        assert!(row < self.height && column < self.width);
        self.cells[row][column]
    }

    /// The rows of the board from top to bottom
    pub fn rows(&self) -> impl Iterator<Item = &[Mark]> + '_ {
        let width = self.width;
        self.cells[..self.height].iter().map(move |row| &row[..width])
    }

    /// The row the next tile dropped in `column` lands on, `None` once the column is full
    pub fn next_free_row(&self, column: usize) -> Option<usize> {
        if column < self.width && self.heights[column] < self.height {
            Some(self.height - 1 - self.heights[column])
        } else {
            None
        }
    }

    pub fn is_valid_move(&self, column: usize) -> bool {
        self.winner.is_empty() && self.next_free_row(column).is_some()
    }

    /// Columns that can currently be played, in ascending order
    pub fn legal_moves(&self) -> impl Iterator<Item = usize> + '_ {
        (0..self.width).filter(move |&column| self.is_valid_move(column))
    }

    pub fn is_full(&self) -> bool {
        self.empty_cells == 0
    }

    /// The mark that completed a line, or `Mark::Empty` if nobody has yet
    pub fn check_winner(&self) -> Mark {
        self.winner
    }

    pub fn outcome(&self) -> Outcome {
        if !self.winner.is_empty() {
            Outcome::Won(self.winner)
        } else if self.is_full() {
            Outcome::Draw
        } else {
            Outcome::InProgress
        }
    }

    /// Drops a tile of `mark` into `column`, returning the row it landed on
    ///
    /// This is the only way to change a board.
    pub fn make_move(&mut self, mark: Mark, column: usize) -> Result<usize> {
        if mark.is_empty() {
            return Err(Error::EmptyMark);
        }
        if !self.is_valid_move(column) {
            let reason = if column >= self.width {
                "column out of range"
            } else if !self.winner.is_empty() {
                "game is over"
            } else {
                "column full"
            };
            return Err(Error::IllegalMove { column, reason });
        }

        let row = self.height - 1 - self.heights[column];
        self.cells[row][column] = mark;
        self.heights[column] += 1;
        self.empty_cells -= 1;

        if self.completes_line(row, column, mark) {
            self.winner = mark;
        }
        Ok(row)
    }

    // checks only the lines through the tile just placed at (row, column)
    fn completes_line(&self, row: usize, column: usize, mark: Mark) -> bool {
        // vertical, nothing can sit above the new tile yet
        if self.run_length(row, column, (1, 0), mark) + 1 >= self.cells_to_win {
            return true;
        }

        // horizontal and both diagonals, extending in both directions
        for &(dy, dx) in [(0isize, 1isize), (1, 1), (1, -1)].iter() {
            let run = self.run_length(row, column, (dy, dx), mark)
                + self.run_length(row, column, (-dy, -dx), mark);
            if run + 1 >= self.cells_to_win {
                return true;
            }
        }

        false
    }

    // consecutive tiles of `mark` stepping away from (row, column), excluding the start
    fn run_length(&self, row: usize, column: usize, (dy, dx): (isize, isize), mark: Mark) -> usize {
        let mut run = 0;
        let mut y = row as isize + dy;
        let mut x = column as isize + dx;
        while run + 1 < self.cells_to_win
            && y >= 0
            && x >= 0
            && y < self.height as isize
            && x < self.width as isize
            && self.cells[y as usize][x as usize] == mark
        {
            run += 1;
            y += dy;
            x += dx;
        }
        run
    }
}

impl PartialEq for Board {
    fn eq(&self, other: &Self) -> bool {
        self.width == other.width && self.height == other.height && self.rows().eq(other.rows())
    }
}

impl Eq for Board {}

impl Default for Board {
    fn default() -> Self {
        Self {
            cells: [[Mark::Empty; MAX_DIMENSION]; MAX_DIMENSION],
            heights: [0; MAX_DIMENSION],
            width: crate::DEFAULT_WIDTH,
            height: crate::DEFAULT_HEIGHT,
            cells_to_win: crate::DEFAULT_CELLS_TO_WIN,
            empty_cells: crate::DEFAULT_WIDTH * crate::DEFAULT_HEIGHT,
            winner: Mark::Empty,
        }
    }
}
