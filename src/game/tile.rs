use serde::{Deserialize, Serialize};
use std::hash::{Hash, Hasher};

/// A letter tile. Identity is the unique `id`: two tiles showing the same
/// letter and value are still distinct pieces, and equality and hashing
/// both follow the id.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Tile {
    id: i32,
    letter: Option<char>,
    value: i32,
    blank: bool,
    position: Option<(i32, i32)>,
    committed: bool,
}

impl Tile {
    pub fn new(id: i32, letter: char, value: i32) -> Self {
        Tile {
            id,
            letter: Some(letter.to_ascii_uppercase()),
            value,
            blank: false,
            position: None,
            committed: false,
        }
    }

    /// A blank tile: worth zero points, no letter until one is assigned.
    pub fn blank(id: i32) -> Self {
        Tile {
            id,
            letter: None,
            value: 0,
            blank: true,
            position: None,
            committed: false,
        }
    }

    pub fn id(&self) -> i32 {
        self.id
    }

    pub fn letter(&self) -> Option<char> {
        self.letter
    }

    pub fn value(&self) -> i32 {
        self.value
    }

    pub fn is_blank(&self) -> bool {
        self.blank
    }

    /// Grid coordinate while the tile sits on the board, `None` on a rack.
    pub fn position(&self) -> Option<(i32, i32)> {
        self.position
    }

    /// Whether the tile was committed to the board by an earlier move.
    pub fn is_committed(&self) -> bool {
        self.committed
    }

    /// Gives a blank tile its letter. Allowed exactly once; the letter is
    /// fixed afterwards. Returns false, without mutating, for a tile that
    /// is not blank or already has its letter.
    pub fn assign_letter(&mut self, letter: char) -> bool {
        if !self.blank || self.letter.is_some() {
            return false;
        }
        self.letter = Some(letter.to_ascii_uppercase());
        true
    }

    pub(crate) fn set_position(&mut self, row: i32, col: i32) {
        self.position = Some((row, col));
    }

    pub(crate) fn clear_position(&mut self) {
        self.position = None;
    }

    pub(crate) fn mark_committed(&mut self) {
        self.committed = true;
    }
}

impl PartialEq for Tile {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Tile {}

impl Hash for Tile {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

/// Standard point value of a letter. Characters outside A-Z score zero,
/// which also covers the blank.
pub fn letter_value(letter: char) -> i32 {
    match letter.to_ascii_uppercase() {
        'A' | 'E' | 'I' | 'O' | 'U' | 'L' | 'N' | 'S' | 'T' | 'R' => 1,
        'D' | 'G' => 2,
        'B' | 'C' | 'M' | 'P' => 3,
        'F' | 'H' | 'V' | 'W' | 'Y' => 4,
        'K' => 5,
        'J' | 'X' => 8,
        'Q' | 'Z' => 10,
        _ => 0,
    }
}
