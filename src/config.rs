use alloc::vec::Vec;

use crate::common::BoardError;
use crate::opponent::Difficulty;

/// Smallest board preset.
pub const SMALL_BOARD_SIZE: usize = 5;
/// Mid-sized board preset.
pub const STANDARD_BOARD_SIZE: usize = 7;
/// Classic 10x10 board.
pub const CLASSIC_BOARD_SIZE: usize = 10;

pub const SMALL_FLEET: [usize; 2] = [3, 2];
pub const STANDARD_FLEET: [usize; 3] = [4, 3, 2];
pub const CLASSIC_FLEET: [usize; 5] = [5, 4, 3, 3, 2];

/// Board dimensions, fleet and opponent strength for one game.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct GameConfig {
    pub board_size: usize,
    pub ship_lengths: Vec<usize>,
    pub difficulty: Difficulty,
}

impl GameConfig {
    pub fn new(board_size: usize, ship_lengths: Vec<usize>, difficulty: Difficulty) -> Self {
        Self {
            board_size,
            ship_lengths,
            difficulty,
        }
    }

    /// 5x5 board with ships of length 3 and 2.
    pub fn small() -> Self {
        Self::new(SMALL_BOARD_SIZE, SMALL_FLEET.to_vec(), Difficulty::Hard)
    }

    /// 7x7 board with ships of length 4, 3 and 2.
    pub fn standard() -> Self {
        Self::new(STANDARD_BOARD_SIZE, STANDARD_FLEET.to_vec(), Difficulty::Hard)
    }

    /// 10x10 board with the classic five-ship fleet.
    pub fn classic() -> Self {
        Self::new(CLASSIC_BOARD_SIZE, CLASSIC_FLEET.to_vec(), Difficulty::Hard)
    }

    /// Same board and fleet with a different opponent.
    pub fn with_difficulty(mut self, difficulty: Difficulty) -> Self {
        self.difficulty = difficulty;
        self
    }

    /// Total number of ship cells in the fleet.
    pub fn total_ship_cells(&self) -> usize {
        self.ship_lengths.iter().sum()
    }

    /// Check that the fleet can in principle be laid out on the board.
    pub fn validate(&self) -> Result<(), BoardError> {
        let size = self.board_size;
        if size == 0 {
            return Err(BoardError::InvalidBoardSize(size));
        }
        if let Some(&length) = self
            .ship_lengths
            .iter()
            .find(|&&len| len == 0 || len > size)
        {
            return Err(BoardError::InvalidShipLength { length, size });
        }
        let cells = self.total_ship_cells();
        let capacity = size * size;
        if cells > capacity {
            return Err(BoardError::FleetTooLarge { cells, capacity });
        }
        Ok(())
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::small()
    }
}

