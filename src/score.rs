//! Scoring. Only pure black (0,0) and pure purple (1,1) stones count;
//! red and blue stones stay on the board but belong to neither side.

use std::fmt;

use crate::board::Board;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Winner {
    Black,
    Purple,
    Tie,
}

impl fmt::Display for Winner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Winner::Black => write!(f, "Black"),
            Winner::Purple => write!(f, "Purple"),
            Winner::Tie => write!(f, "Tie"),
        }
    }
}

/// Stone counts and the resulting winner.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Score {
    pub black: usize,
    pub purple: usize,
    pub winner: Winner,
}

impl fmt::Display for Score {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Black {} Purple {} winner {}", self.black, self.purple, self.winner)
    }
}

/// Count `(black, purple)` stones.
pub fn tally(board: &Board) -> (usize, usize) {
    board
        .iter()
        .filter(|(_, cell)| cell.active)
        .fold((0, 0), |(black, purple), (_, cell)| match (cell.a, cell.b) {
            (false, false) => (black + 1, purple),
            (true, true) => (black, purple + 1),
            _ => (black, purple),
        })
}

pub fn final_score(board: &Board) -> Score {
    let (black, purple) = tally(board);
    let winner = match black.cmp(&purple) {
        std::cmp::Ordering::Greater => Winner::Black,
        std::cmp::Ordering::Less => Winner::Purple,
        std::cmp::Ordering::Equal => Winner::Tie,
    };
    Score {
        black,
        purple,
        winner,
    }
}
