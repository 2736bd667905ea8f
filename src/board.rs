//! Fleet-aware board: a [`Grid`] plus the ships placed on it.

use alloc::vec::Vec;
use rand::Rng;

use crate::attack::attack;
use crate::common::{AttackResult, BoardError, Coord, GuessResult};
use crate::grid::Grid;
use crate::ship::{self, Orientation, Ship};

/// Public per-ship status for display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct ShipState {
    pub length: usize,
    pub sunk: bool,
}

/// Main board state: cell grid, ship placements and cached sink flags.
#[derive(Debug, Clone)]
pub struct Board {
    grid: Grid,
    ships: Vec<Ship>,
    sunk: Vec<bool>,
}

impl Board {
    /// Create an empty board (no ships placed).
    pub fn new(size: usize) -> Self {
        Board {
            grid: Grid::new(size),
            ships: Vec::new(),
            sunk: Vec::new(),
        }
    }

    /// Create a board with every ship in `lengths` placed at random.
    pub fn random<R: Rng + ?Sized>(
        size: usize,
        lengths: &[usize],
        rng: &mut R,
    ) -> Result<Self, BoardError> {
        let mut board = Board::new(size);
        board.place_random(lengths, rng)?;
        Ok(board)
    }

    /// Randomly place additional ships.
    pub fn place_random<R: Rng + ?Sized>(
        &mut self,
        lengths: &[usize],
        rng: &mut R,
    ) -> Result<(), BoardError> {
        let ships = ship::place_all(&mut self.grid, lengths, rng)?;
        self.sunk.extend(ships.iter().map(|_| false));
        self.ships.extend(ships);
        Ok(())
    }

    /// Place a single ship at (row, col) with `orientation`.
    pub fn place_at(
        &mut self,
        row: usize,
        col: usize,
        length: usize,
        orientation: Orientation,
    ) -> Result<(), BoardError> {
        let ship = ship::place_at(&mut self.grid, row, col, length, orientation)?;
        self.ships.push(ship);
        self.sunk.push(false);
        Ok(())
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Mutable grid access for the opponent, which strikes cells directly.
    /// Follow up with [`Board::record_strike`] to keep sink flags current.
    pub fn grid_mut(&mut self) -> &mut Grid {
        &mut self.grid
    }

    pub fn ships(&self) -> &[Ship] {
        &self.ships
    }

    pub fn ship_states(&self) -> Vec<ShipState> {
        self.ships
            .iter()
            .zip(&self.sunk)
            .map(|(ship, &sunk)| ShipState {
                length: ship.length(),
                sunk,
            })
            .collect()
    }

    /// Returns `true` when all ships are sunk.
    pub fn all_sunk(&self) -> bool {
        self.grid.all_sunk()
    }

    /// Process a guess at (row, col), marking the grid and reporting sinks.
    pub fn fire(&mut self, row: usize, col: usize) -> Result<GuessResult, BoardError> {
        let result = attack(&mut self.grid, row, col)?;
        Ok(self.classify((row, col), result))
    }

    /// Derive the guess result for a cell that was already struck on the grid.
    pub fn record_strike(&mut self, coord: Coord, result: AttackResult) -> GuessResult {
        self.classify(coord, result)
    }

    fn classify(&mut self, coord: Coord, result: AttackResult) -> GuessResult {
        if !result.is_hit() {
            return GuessResult::Miss;
        }
        let Some(idx) = self.ships.iter().position(|s| s.contains(coord)) else {
            return GuessResult::Hit;
        };
        if !self.sunk[idx] && self.ships[idx].is_sunk(&self.grid) {
            self.sunk[idx] = true;
            return GuessResult::Sink(idx);
        }
        GuessResult::Hit
    }
}
