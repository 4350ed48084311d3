use serde::{Deserialize, Serialize};

/// Multiplier configuration of a board square. A square is one of five
/// kinds; at most one of its two factors exceeds 1, and the center star
/// square is an ordinary double-word square.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SquareKind {
    Plain,
    DoubleLetter,
    TripleLetter,
    DoubleWord,
    TripleWord,
}

impl SquareKind {
    pub fn letter_multiplier(self) -> i32 {
        match self {
            SquareKind::DoubleLetter => 2,
            SquareKind::TripleLetter => 3,
            _ => 1,
        }
    }

    pub fn word_multiplier(self) -> i32 {
        match self {
            SquareKind::DoubleWord => 2,
            SquareKind::TripleWord => 3,
            _ => 1,
        }
    }
}

/// One cell of the board. Occupancy covers committed tiles and squares
/// reserved by an uncommitted placement in the current turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Square {
    kind: SquareKind,
    occupied: bool,
}

impl Square {
    pub fn new(kind: SquareKind) -> Self {
        Square {
            kind,
            occupied: false,
        }
    }

    pub fn kind(&self) -> SquareKind {
        self.kind
    }

    pub fn letter_multiplier(&self) -> i32 {
        self.kind.letter_multiplier()
    }

    pub fn word_multiplier(&self) -> i32 {
        self.kind.word_multiplier()
    }

    pub fn is_occupied(&self) -> bool {
        self.occupied
    }

    pub(crate) fn set_occupied(&mut self, occupied: bool) {
        self.occupied = occupied;
    }
}
