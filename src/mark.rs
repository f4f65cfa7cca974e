/// The occupant of a board cell, or the identity of a player
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum Mark {
    Empty,
    PlayerOne,
    PlayerTwo,
}

impl Mark {
    pub fn is_empty(self) -> bool {
        match self {
            Mark::Empty => true,
            _ => false,
        }
    }

    /// Returns the mark that moves after `self`
    ///
    /// `Mark::Empty` has no opponent and maps to itself.
    pub fn opponent(self) -> Mark {
        match self {
            Mark::PlayerOne => Mark::PlayerTwo,
            Mark::PlayerTwo => Mark::PlayerOne,
            Mark::Empty => Mark::Empty,
        }
    }

    pub(crate) fn index(self) -> usize {
        match self {
            Mark::Empty => 0,
            Mark::PlayerOne => 1,
            Mark::PlayerTwo => 2,
        }
    }
}

impl Default for Mark {
    fn default() -> Self {
        Mark::Empty
    }
}
