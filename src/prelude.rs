//! Commonly used types and utilities for ease of import.

pub use crate::{
    Board, BoardError, Cell, Difficulty, GameConfig, GameEngine, GameStatus, Grid,
    GuessResult, Opponent, Orientation, SearchState,
};

#[cfg(feature = "std")]
pub use crate::{init_logging, print_player_view, BoardView};
