//! Static evaluation of a position, used where the search stops short of the end of the game

use std::collections::VecDeque;

use crate::board::Board;
use crate::mark::Mark;

/// The score of a window that can no longer be stopped from becoming a run
pub const WINNABLE_BONUS: i64 = 1_000_000;

/// Scores `board` from the point of view of `me`
///
/// Every line on the board is scanned with a window of `cells_to_win` tiles.
/// A window holding tiles of a single player scores `count^count`, or
/// [`WINNABLE_BONUS`] when it is complete or is an open ended run one tile
/// short (`_XXX_` for runs of four). Windows favouring `me` count positively,
/// those favouring the opponent negatively, mixed windows not at all.
pub fn evaluate(board: &Board, me: Mark) -> i64 {
    debug_assert!(!me.is_empty());

    let width = board.width() as isize;
    let height = board.height() as isize;
    let mut window = Window::new(board.cells_to_win());
    let mut score = 0;

    // vertical, only columns that can still grow
    for column in 0..width {
        if board.next_free_row(column as usize).is_some() {
            score += window.scan(board, (0, column), (1, 0), me);
        }
    }

    // horizontal
    for row in 0..height {
        score += window.scan(board, (row, 0), (0, 1), me);
    }

    // diagonal \, starting from the left and top edges
    for row in 0..height {
        score += window.scan(board, (row, 0), (1, 1), me);
    }
    for column in 1..width {
        score += window.scan(board, (0, column), (1, 1), me);
    }

    // diagonal /, starting from the left and bottom edges
    for row in 0..height {
        score += window.scan(board, (row, 0), (-1, 1), me);
    }
    for column in 1..width {
        score += window.scan(board, (height - 1, column), (-1, 1), me);
    }

    score
}

// the tiles along a line, from `start` until it leaves the board
fn line(
    board: &Board,
    (row, column): (isize, isize),
    (dy, dx): (isize, isize),
) -> impl Iterator<Item = Mark> + '_ {
    let width = board.width() as isize;
    let height = board.height() as isize;
    (0..)
        .map(move |i| (row + dy * i, column + dx * i))
        .take_while(move |&(y, x)| y >= 0 && x >= 0 && y < height && x < width)
        .map(move |(y, x)| board.cell(y as usize, x as usize))
}

/// A sliding window over a line, keeping running counts of each mark
struct Window {
    size: usize,
    tiles: VecDeque<Mark>,
    counts: [usize; 3],
}

impl Window {
    fn new(size: usize) -> Self {
        Self {
            size,
            tiles: VecDeque::with_capacity(size + 1),
            counts: [0; 3],
        }
    }

    fn push(&mut self, mark: Mark) {
        if self.tiles.len() == self.size {
            if let Some(oldest) = self.tiles.pop_front() {
                self.counts[oldest.index()] -= 1;
            }
        }
        self.tiles.push_back(mark);
        self.counts[mark.index()] += 1;
    }

    fn scan(
        &mut self,
        board: &Board,
        start: (isize, isize),
        step: (isize, isize),
        me: Mark,
    ) -> i64 {
        self.tiles.clear();
        self.counts = [0; 3];

        let mut score = 0;
        let mut tiles = line(board, start, step).peekable();
        while let Some(mark) = tiles.next() {
            self.push(mark);
            if self.tiles.len() == self.size {
                // empty on both sides: the window starts with a gap and the next tile is free
                let open = self.tiles.front() == Some(&Mark::Empty)
                    && tiles.peek() == Some(&Mark::Empty);
                score += self.score(me, open);
            }
        }
        score
    }

    fn score(&self, me: Mark, open: bool) -> i64 {
        let own = self.counts[me.index()];
        let opponent = self.counts[me.opponent().index()];

        let (count, sign) = match (own, opponent) {
            (0, 0) => return 0,
            (count, 0) => (count, 1),
            (0, count) => (count, -1),
            _ => return 0,
        };

        // a full window only exists on a finished board, evaluated outside the search
        if count >= self.size || (count + 1 == self.size && open) {
            sign * WINNABLE_BONUS
        } else {
            sign * (count as i64).pow(count as u32)
        }
    }
}
