use crate::game::board::BOARD_SIZE;
use crate::game::square::{Square, SquareKind};

// Premium squares of the classic 15x15 board, zero-based (row, col).
// The center (7, 7) doubles the word like any other double-word square.

const TRIPLE_WORD: [(i32, i32); 8] = [
    (0, 0),
    (0, 7),
    (0, 14),
    (7, 0),
    (7, 14),
    (14, 0),
    (14, 7),
    (14, 14),
];

const DOUBLE_WORD: [(i32, i32); 17] = [
    (1, 1),
    (1, 13),
    (2, 2),
    (2, 12),
    (3, 3),
    (3, 11),
    (4, 4),
    (4, 10),
    (7, 7),
    (10, 4),
    (10, 10),
    (11, 3),
    (11, 11),
    (12, 2),
    (12, 12),
    (13, 1),
    (13, 13),
];

const TRIPLE_LETTER: [(i32, i32); 12] = [
    (1, 5),
    (1, 9),
    (5, 1),
    (5, 5),
    (5, 9),
    (5, 13),
    (9, 1),
    (9, 5),
    (9, 9),
    (9, 13),
    (13, 5),
    (13, 9),
];

const DOUBLE_LETTER: [(i32, i32); 24] = [
    (0, 3),
    (0, 11),
    (2, 6),
    (2, 8),
    (3, 0),
    (3, 7),
    (3, 14),
    (6, 2),
    (6, 6),
    (6, 8),
    (6, 12),
    (7, 3),
    (7, 11),
    (8, 2),
    (8, 6),
    (8, 8),
    (8, 12),
    (11, 0),
    (11, 7),
    (11, 14),
    (12, 6),
    (12, 8),
    (14, 3),
    (14, 11),
];

/// The kind of square sitting at (row, col).
pub fn square_kind_at(row: i32, col: i32) -> SquareKind {
    let coord = (row, col);

    if TRIPLE_WORD.contains(&coord) {
        SquareKind::TripleWord
    } else if DOUBLE_WORD.contains(&coord) {
        SquareKind::DoubleWord
    } else if TRIPLE_LETTER.contains(&coord) {
        SquareKind::TripleLetter
    } else if DOUBLE_LETTER.contains(&coord) {
        SquareKind::DoubleLetter
    } else {
        SquareKind::Plain
    }
}

/// Builds the full grid of squares with the premium layout applied.
pub fn build_squares() -> Vec<Vec<Square>> {
    (0..BOARD_SIZE)
        .map(|row| {
            (0..BOARD_SIZE)
                .map(|col| Square::new(square_kind_at(row, col)))
                .collect()
        })
        .collect()
}
