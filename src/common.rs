//! Common types for the game core: coordinates, attack results and board errors.

/// Board coordinate as `(row, col)`.
pub type Coord = (usize, usize);

/// Outcome of striking a single cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum AttackResult {
    /// A ship cell was struck.
    Hit,
    /// Open water was struck.
    Miss,
}

impl AttackResult {
    /// Returns `true` for [`AttackResult::Hit`].
    pub fn is_hit(self) -> bool {
        matches!(self, AttackResult::Hit)
    }
}

/// Result of a guess against a fleet-aware board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum GuessResult {
    /// Guess hit a ship that is still afloat.
    Hit,
    /// Guess missed all ships.
    Miss,
    /// Guess sank a ship, carrying its index in the fleet.
    Sink(usize),
}

impl GuessResult {
    /// Returns `true` for hits and sinks.
    pub fn is_hit(self) -> bool {
        !matches!(self, GuessResult::Miss)
    }
}

/// Errors returned by board, placement and game operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BoardError {
    /// Coordinate lies outside the board.
    OutOfBounds { row: usize, col: usize },
    /// Cell was already struck.
    AlreadyTried { row: usize, col: usize },
    /// Board size must be at least 1.
    InvalidBoardSize(usize),
    /// Ship length must be between 1 and the board size.
    InvalidShipLength { length: usize, size: usize },
    /// Ship would extend past the board edge.
    ShipOutOfBounds,
    /// Ship placement overlaps another ship.
    ShipOverlaps,
    /// No free run of cells could hold the ship.
    UnableToPlaceShip { length: usize },
    /// Fleet needs more cells than the board has.
    FleetTooLarge { cells: usize, capacity: usize },
    /// Action taken while it is the other side's turn.
    OutOfTurn,
    /// Action taken after the game has finished.
    GameOver,
}

impl core::fmt::Display for BoardError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            BoardError::OutOfBounds { row, col } => {
                write!(f, "Coordinate ({}, {}) is out of bounds", row, col)
            }
            BoardError::AlreadyTried { row, col } => {
                write!(f, "Cell ({}, {}) was already attacked", row, col)
            }
            BoardError::InvalidBoardSize(size) => write!(f, "Invalid board size {}", size),
            BoardError::InvalidShipLength { length, size } => {
                write!(f, "Ship length {} does not fit a {}x{} board", length, size, size)
            }
            BoardError::ShipOutOfBounds => write!(f, "Ship placement is out of bounds"),
            BoardError::ShipOverlaps => write!(f, "Ship placement overlaps with another ship"),
            BoardError::UnableToPlaceShip { length } => {
                write!(f, "Unable to place ship of length {}", length)
            }
            BoardError::FleetTooLarge { cells, capacity } => {
                write!(f, "Fleet needs {} cells but the board has {}", cells, capacity)
            }
            BoardError::OutOfTurn => write!(f, "It is not this side's turn"),
            BoardError::GameOver => write!(f, "The game is already over"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for BoardError {}
