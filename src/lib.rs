//! # Scrabble Engine Library
//!
//! Rule validation and scoring for a two-player Scrabble-style word placement game.
//!
//! ## Features
//!
//! - **Board Model**: 15x15 grid of premium squares with committed-tile tracking
//! - **Tile Model**: letter tiles with unique identity and blank-tile support
//! - **Dictionary**: valid-word set loaded once per session from a word file
//! - **Referee**: full move validation (center rule, collinearity, word discovery,
//!   connectivity) with multiplier scoring and the full-rack bonus
//!
//! ## Usage
//!
//! ```rust,no_run
//! use scrabble_engine::{Board, Dictionary, Referee, Tile};
//!
//! let dictionary = Dictionary::from_file("words.txt").expect("dictionary");
//! let mut board = Board::new();
//! let mut tiles = vec![Tile::new(0, 'C', 3), Tile::new(1, 'A', 1), Tile::new(2, 'T', 1)];
//! for (offset, tile) in tiles.iter_mut().enumerate() {
//!     board.try_place(tile, 7, 6 + offset as i32);
//! }
//! let outcome = Referee::new(&mut board, &dictionary).validate(&mut tiles);
//! println!("valid: {}, score: {}", outcome.valid, outcome.score);
//! ```

// ============================================================================
// PUBLIC API MODULES
// ============================================================================

/// Board, squares, tiles, and discovered words
pub mod game;

/// Valid-word collection
pub mod dictionary;

/// Move validation
pub mod referee;

/// Score computation
pub mod scoring;

/// Log setup for hosting applications
pub mod logging;

// ============================================================================
// PUBLIC API RE-EXPORTS
// ============================================================================

pub use dictionary::dictionary::Dictionary;
pub use game::board::{Board, BOARD_SIZE, CENTER};
pub use game::square::{Square, SquareKind};
pub use game::tile::{letter_value, Tile};
pub use game::word::Word;
pub use referee::referee::{MoveOutcome, Referee};
pub use scoring::scoring::{score_move, BINGO_BONUS, RACK_SIZE};

// ============================================================================
// ERROR TYPES
// ============================================================================

/// Main error type for the engine. Rejected moves are not errors; they are
/// ordinary `MoveOutcome` values.
#[derive(Debug, thiserror::Error)]
pub enum ScrabbleError {
    #[error("Board error: {0}")]
    Board(String),

    #[error("Dictionary error: {0}")]
    Dictionary(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for convenience
pub type Result<T> = std::result::Result<T, ScrabbleError>;

// ============================================================================
// LIBRARY VERSION INFO
// ============================================================================

/// Library version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");

/// Library description
pub const DESCRIPTION: &str = env!("CARGO_PKG_DESCRIPTION");
