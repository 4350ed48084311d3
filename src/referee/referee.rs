use serde::{Deserialize, Serialize};

use crate::dictionary::dictionary::Dictionary;
use crate::game::board::{Board, CENTER};
use crate::game::tile::Tile;
use crate::game::word::Word;
use crate::scoring::scoring::score_move;

/// Direction a word is read in. Vertical words run top to bottom,
/// horizontal words left to right.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Direction {
    Vertical,
    Horizontal,
}

impl Direction {
    fn step(self) -> (i32, i32) {
        match self {
            Direction::Vertical => (1, 0),
            Direction::Horizontal => (0, 1),
        }
    }
}

/// What the referee reports back to the caller for one move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveOutcome {
    pub valid: bool,
    pub score: i32,
}

impl MoveOutcome {
    pub fn rejected() -> Self {
        MoveOutcome {
            valid: false,
            score: 0,
        }
    }

    pub fn accepted(score: i32) -> Self {
        MoveOutcome {
            valid: true,
            score,
        }
    }
}

/// Checks one move against the rules and scores it. The referee borrows
/// the board and the dictionary for a single `validate` call and owns
/// neither; a rejected move leaves the board and every tile exactly as
/// they were, so the caller only has to revert its own visuals.
pub struct Referee<'a> {
    board: &'a mut Board,
    dictionary: &'a Dictionary,
}

impl<'a> Referee<'a> {
    pub fn new(board: &'a mut Board, dictionary: &'a Dictionary) -> Self {
        Referee { board, dictionary }
    }

    /// Validates the tiles placed this turn and, when the move is legal,
    /// commits them to the board and reports the score. The checks run in
    /// order and stop at the first failure: the opening move must cover the
    /// center square, the tiles must lie in one line, every word they form
    /// must be in the dictionary, the whole placement must belong to one
    /// word, and a non-opening move must touch a committed tile.
    pub fn validate(&mut self, placed: &mut [Tile]) -> MoveOutcome {
        if placed.is_empty() {
            log::debug!("move rejected: no tiles were placed");
            return MoveOutcome::rejected();
        }

        // A blank with no assigned letter or a tile that never landed on a
        // square cannot take part in word construction.
        if placed
            .iter()
            .any(|tile| tile.letter().is_none() || tile.position().is_none())
        {
            log::debug!("move rejected: unassigned blank or off-board tile");
            return MoveOutcome::rejected();
        }

        let first_move = self.board.is_empty();
        if first_move && !covers_center(placed) {
            log::debug!("move rejected: opening move misses the center square");
            return MoveOutcome::rejected();
        }

        if !arrange(placed) {
            log::debug!("move rejected: tiles do not lie in one line");
            return MoveOutcome::rejected();
        }

        let mut touches_existing = false;
        let mut words: Vec<Word> = Vec::new();

        for tile in placed.iter() {
            for direction in [Direction::Vertical, Direction::Horizontal] {
                let word = self.scan_word(tile, direction, placed, &mut touches_existing);
                if word.len() < 2 {
                    continue;
                }

                let text = word.text();
                if !self.dictionary.contains(&text) {
                    log::debug!("move rejected: {:?} is not in the dictionary", text);
                    return MoveOutcome::rejected();
                }
                if !words.iter().any(|known| known.same_tiles(&word)) {
                    words.push(word);
                }
            }
        }

        if !words.iter().any(|word| word.contains_all(placed)) {
            log::debug!("move rejected: placed tiles do not form a single word");
            return MoveOutcome::rejected();
        }

        if !touches_existing && !first_move {
            log::debug!("move rejected: no connection to a committed tile");
            return MoveOutcome::rejected();
        }

        let score = score_move(self.board, &words, placed.len());
        self.board.commit(placed);
        log::info!("move accepted: {} word(s) for {} points", words.len(), score);
        MoveOutcome::accepted(score)
    }

    /// The maximal contiguous run through `tile` in one direction. Both
    /// committed tiles and tiles placed this turn extend the run; finding a
    /// committed one flips `touches_existing` for the connectivity check.
    fn scan_word(
        &self,
        tile: &Tile,
        direction: Direction,
        placed: &[Tile],
        touches_existing: &mut bool,
    ) -> Word {
        let Some((row, col)) = tile.position() else {
            // admissibility already rejected off-board tiles
            return Word::new(vec![tile.clone()]);
        };
        let (row_step, col_step) = direction.step();
        let mut run: Vec<Tile> = Vec::new();

        // walk backwards collecting the prefix, nearest tile first
        let (mut r, mut c) = (row - row_step, col - col_step);
        while let Some(found) = self.lookup(r, c, placed, touches_existing) {
            run.push(found);
            r -= row_step;
            c -= col_step;
        }
        run.reverse();

        run.push(tile.clone());

        // then forwards for the suffix
        let (mut r, mut c) = (row + row_step, col + col_step);
        while let Some(found) = self.lookup(r, c, placed, touches_existing) {
            run.push(found);
            r += row_step;
            c += col_step;
        }

        Word::new(run)
    }

    /// The tile taking part in word construction at (row, col), if any: a
    /// committed tile on the board first, then a tile placed this turn.
    /// Past the board edge there is never a tile.
    fn lookup(
        &self,
        row: i32,
        col: i32,
        placed: &[Tile],
        touches_existing: &mut bool,
    ) -> Option<Tile> {
        if let Some(committed) = self.board.tile_at(row, col) {
            *touches_existing = true;
            return Some(committed.clone());
        }
        placed
            .iter()
            .find(|tile| tile.position() == Some((row, col)))
            .cloned()
    }
}

fn covers_center(placed: &[Tile]) -> bool {
    placed.iter().any(|tile| tile.position() == Some(CENTER))
}

/// Sorts the placed tiles into board order when they all share a row or all
/// share a column. Answers false when they lie in neither, which makes the
/// move illegal before any word is read.
fn arrange(placed: &mut [Tile]) -> bool {
    let positions: Vec<(i32, i32)> = placed.iter().filter_map(|tile| tile.position()).collect();

    if positions.iter().all(|&(row, _)| row == positions[0].0) {
        placed.sort_by_key(|tile| tile.position().map(|(_, col)| col));
        true
    } else if positions.iter().all(|&(_, col)| col == positions[0].1) {
        placed.sort_by_key(|tile| tile.position().map(|(row, _)| row));
        true
    } else {
        false
    }
}
