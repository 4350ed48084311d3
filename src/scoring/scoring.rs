use crate::game::board::Board;
use crate::game::word::Word;

/// Tiles a full rack holds.
pub const RACK_SIZE: usize = 7;

/// Bonus for playing an entire rack in one move.
pub const BINGO_BONUS: i32 = 50;

/// Scores one validated move over its discovered words. Letter and word
/// multipliers count only under tiles placed this turn; tiles committed in
/// earlier moves contribute their face value with a factor of 1. Playing a
/// full rack adds the bingo bonus once on top of the word total.
pub fn score_move(board: &Board, words: &[Word], placed_count: usize) -> i32 {
    let mut move_score = 0;

    for word in words {
        let mut word_score = 0;
        let mut word_factor = 1;

        for tile in word.tiles() {
            if tile.is_committed() {
                word_score += tile.value();
                continue;
            }

            let (letter_factor, square_word_factor) = multipliers_at(board, tile.position());
            word_score += tile.value() * letter_factor;
            word_factor *= square_word_factor;
        }

        move_score += word_score * word_factor;
    }

    if placed_count == RACK_SIZE {
        move_score += BINGO_BONUS;
    }

    move_score
}

fn multipliers_at(board: &Board, position: Option<(i32, i32)>) -> (i32, i32) {
    position
        .and_then(|(row, col)| board.square_at(row, col).ok())
        .map(|square| (square.letter_multiplier(), square.word_multiplier()))
        .unwrap_or((1, 1))
}
