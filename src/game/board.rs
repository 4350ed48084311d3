use serde::{Deserialize, Serialize};

use crate::game::layout::build_squares;
use crate::game::square::Square;
use crate::game::tile::Tile;
use crate::ScrabbleError;

pub const BOARD_SIZE: i32 = 15;

/// The star square every opening move must cover.
pub const CENTER: (i32, i32) = (7, 7);

/// The 15x15 board: a grid of squares with the premium layout, and a
/// parallel grid of tiles committed by earlier validated moves. Tiles
/// placed during the current turn reserve their square but stay out of the
/// committed grid until the referee accepts the move.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Board {
    squares: Vec<Vec<Square>>,
    tiles: Vec<Vec<Option<Tile>>>,
}

impl Board {
    pub fn new() -> Self {
        Board {
            squares: build_squares(),
            tiles: vec![vec![None; BOARD_SIZE as usize]; BOARD_SIZE as usize],
        }
    }

    fn in_bounds(row: i32, col: i32) -> bool {
        (0..BOARD_SIZE).contains(&row) && (0..BOARD_SIZE).contains(&col)
    }

    /// The square at (row, col). Asking for a square outside the board is
    /// a caller error, unlike `tile_at` which scans past the edges.
    pub fn square_at(&self, row: i32, col: i32) -> crate::Result<&Square> {
        if !Self::in_bounds(row, col) {
            return Err(ScrabbleError::Board(format!(
                "square coordinates ({}, {}) fall outside the {}x{} board",
                row, col, BOARD_SIZE, BOARD_SIZE
            )));
        }
        Ok(&self.squares[row as usize][col as usize])
    }

    /// The committed tile at (row, col), or `None` when the square is free.
    /// Out-of-range coordinates also answer `None`: word scans walk one
    /// step past the board edges and treat them like empty squares.
    pub fn tile_at(&self, row: i32, col: i32) -> Option<&Tile> {
        if !Self::in_bounds(row, col) {
            return None;
        }
        self.tiles[row as usize][col as usize].as_ref()
    }

    /// Drops a tile onto (row, col) for the current turn. Refused when the
    /// coordinate is off the board, holds a committed tile, or is reserved
    /// by another uncommitted placement; nothing changes in that case.
    pub fn try_place(&mut self, tile: &mut Tile, row: i32, col: i32) -> bool {
        if !Self::in_bounds(row, col) {
            return false;
        }
        if self.tiles[row as usize][col as usize].is_some()
            || self.squares[row as usize][col as usize].is_occupied()
        {
            return false;
        }

        self.squares[row as usize][col as usize].set_occupied(true);
        tile.set_position(row, col);
        true
    }

    /// Lifts an uncommitted tile off the board again, freeing its square.
    /// The caller uses this to revert the placements of a rejected move.
    /// Committed tiles stay where they are.
    pub fn take_back(&mut self, tile: &mut Tile) -> bool {
        if tile.is_committed() {
            return false;
        }
        let Some((row, col)) = tile.position() else {
            return false;
        };

        self.squares[row as usize][col as usize].set_occupied(false);
        tile.clear_position();
        true
    }

    /// Writes validated tiles into the committed grid at their current
    /// positions and marks them committed. The referee has already checked
    /// legality; a tile with no position is skipped with a warning rather
    /// than committed blind.
    pub fn commit(&mut self, tiles: &mut [Tile]) {
        for tile in tiles.iter_mut() {
            let Some((row, col)) = tile.position() else {
                log::warn!("commit skipped tile {} with no position", tile.id());
                continue;
            };

            tile.mark_committed();
            self.squares[row as usize][col as usize].set_occupied(true);
            self.tiles[row as usize][col as usize] = Some(tile.clone());
        }
    }

    /// True until the first move is committed.
    pub fn is_empty(&self) -> bool {
        self.tiles.iter().flatten().all(|slot| slot.is_none())
    }
}

impl Default for Board {
    fn default() -> Self {
        Board::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    #[test]
    fn test_new_board_is_empty() {
        let board = Board::new();
        assert!(board.is_empty(), "A fresh board should hold no tiles.");
        assert!(board.tile_at(CENTER.0, CENTER.1).is_none());
    }

    #[test]
    fn test_square_at_rejects_out_of_bounds() {
        let board = Board::new();
        assert_matches!(board.square_at(-1, 0), Err(ScrabbleError::Board(_)));
        assert_matches!(board.square_at(0, BOARD_SIZE), Err(ScrabbleError::Board(_)));
        assert!(board.square_at(14, 14).is_ok());
    }

    #[test]
    fn test_tile_at_treats_edges_as_empty() {
        let board = Board::new();
        assert!(board.tile_at(-1, 7).is_none());
        assert!(board.tile_at(7, BOARD_SIZE).is_none());
    }

    #[test]
    fn test_try_place_reserves_the_square() {
        let mut board = Board::new();
        let mut first = Tile::new(1, 'A', 1);
        let mut second = Tile::new(2, 'B', 3);

        assert!(board.try_place(&mut first, 7, 7));
        assert_eq!(first.position(), Some((7, 7)));
        assert!(
            !board.try_place(&mut second, 7, 7),
            "A square reserved this turn should refuse a second tile."
        );
        assert_eq!(second.position(), None);
    }

    #[test]
    fn test_try_place_rejects_out_of_bounds() {
        let mut board = Board::new();
        let mut tile = Tile::new(1, 'A', 1);
        assert!(!board.try_place(&mut tile, 15, 0));
        assert_eq!(tile.position(), None);
    }

    #[test]
    fn test_take_back_frees_the_square() {
        let mut board = Board::new();
        let mut tile = Tile::new(1, 'A', 1);
        let mut replacement = Tile::new(2, 'B', 3);

        assert!(board.try_place(&mut tile, 3, 3));
        assert!(board.take_back(&mut tile));
        assert_eq!(tile.position(), None);
        assert!(
            board.try_place(&mut replacement, 3, 3),
            "A taken-back square should accept a new tile."
        );
    }

    #[test]
    fn test_commit_round_trip() {
        let mut board = Board::new();
        let mut tiles = vec![Tile::new(1, 'C', 3), Tile::new(2, 'A', 1)];
        assert!(board.try_place(&mut tiles[0], 7, 7));
        assert!(board.try_place(&mut tiles[1], 7, 8));

        board.commit(&mut tiles);

        assert!(!board.is_empty());
        for tile in &tiles {
            assert!(tile.is_committed());
            let (row, col) = tile.position().expect("committed tile has a position");
            let on_board = board.tile_at(row, col).expect("tile should be on the board");
            assert_eq!(on_board.id(), tile.id());
            assert!(on_board.is_committed());
        }
    }

    #[test]
    fn test_committed_tile_cannot_be_taken_back() {
        let mut board = Board::new();
        let mut tiles = vec![Tile::new(1, 'C', 3)];
        assert!(board.try_place(&mut tiles[0], 7, 7));
        board.commit(&mut tiles);

        assert!(!board.take_back(&mut tiles[0]));
        assert!(board.tile_at(7, 7).is_some());
    }

    #[test]
    fn test_try_place_rejects_committed_square() {
        let mut board = Board::new();
        let mut tiles = vec![Tile::new(1, 'C', 3)];
        assert!(board.try_place(&mut tiles[0], 7, 7));
        board.commit(&mut tiles);

        let mut intruder = Tile::new(2, 'X', 8);
        assert!(!board.try_place(&mut intruder, 7, 7));
    }
}
