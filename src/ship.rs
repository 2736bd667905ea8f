//! Ship definitions and placement logic.

use alloc::vec::Vec;
use rand::Rng;

use crate::common::{BoardError, Coord};
use crate::grid::{Cell, Grid};

/// Random anchors tried before falling back to a deterministic scan.
pub const MAX_PLACEMENT_ATTEMPTS: usize = 1_000;

/// Orientation of a ship on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum Orientation {
    Horizontal,
    Vertical,
}

impl Orientation {
    /// Row/column step taken along the ship.
    fn step(self) -> (usize, usize) {
        match self {
            Orientation::Horizontal => (0, 1),
            Orientation::Vertical => (1, 0),
        }
    }
}

/// A placed ship: an ordered, contiguous run of cells.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ship {
    orientation: Orientation,
    cells: Vec<Coord>,
}

impl Ship {
    fn new(row: usize, col: usize, length: usize, orientation: Orientation) -> Self {
        let (dr, dc) = orientation.step();
        let cells = (0..length).map(|i| (row + i * dr, col + i * dc)).collect();
        Ship { orientation, cells }
    }

    pub fn length(&self) -> usize {
        self.cells.len()
    }

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    /// First cell of the ship.
    pub fn origin(&self) -> Coord {
        self.cells[0]
    }

    /// Occupied cells, starting at the origin.
    pub fn cells(&self) -> &[Coord] {
        &self.cells
    }

    pub fn contains(&self, coord: Coord) -> bool {
        self.cells.contains(&coord)
    }

    /// Check if every segment has been hit on `grid`.
    pub fn is_sunk(&self, grid: &Grid) -> bool {
        self.cells.iter().all(|&(r, c)| grid.cell(r, c) == Cell::Hit)
    }
}

fn fits(size: usize, row: usize, col: usize, length: usize, orientation: Orientation) -> bool {
    match orientation {
        Orientation::Horizontal => {
            row < size && col.checked_add(length).is_some_and(|end| end <= size)
        }
        Orientation::Vertical => {
            col < size && row.checked_add(length).is_some_and(|end| end <= size)
        }
    }
}

/// Returns `true` if a ship of `length` fits at (row, col) on open water.
pub fn can_place(
    grid: &Grid,
    row: usize,
    col: usize,
    length: usize,
    orientation: Orientation,
) -> bool {
    if !fits(grid.size(), row, col, length, orientation) {
        return false;
    }
    let (dr, dc) = orientation.step();
    (0..length).all(|i| grid.cell(row + i * dr, col + i * dc) == Cell::Water)
}

fn mark(grid: &mut Grid, ship: &Ship) {
    for &(r, c) in ship.cells() {
        grid.set(r, c, Cell::Ship);
    }
}

/// Place a ship at an explicit position.
pub fn place_at(
    grid: &mut Grid,
    row: usize,
    col: usize,
    length: usize,
    orientation: Orientation,
) -> Result<Ship, BoardError> {
    check_length(grid, length)?;
    if !can_place(grid, row, col, length, orientation) {
        return Err(if fits(grid.size(), row, col, length, orientation) {
            BoardError::ShipOverlaps
        } else {
            BoardError::ShipOutOfBounds
        });
    }
    let ship = Ship::new(row, col, length, orientation);
    mark(grid, &ship);
    Ok(ship)
}

fn check_length(grid: &Grid, length: usize) -> Result<(), BoardError> {
    if length == 0 || length > grid.size() {
        return Err(BoardError::InvalidShipLength {
            length,
            size: grid.size(),
        });
    }
    Ok(())
}

/// Place a ship of `length` at a random free position.
///
/// Orientation and anchor are sampled uniformly until the ship fits. After
/// [`MAX_PLACEMENT_ATTEMPTS`] rejections the grid is scanned row-major so a
/// crowded board still terminates; `UnableToPlaceShip` means no free run of
/// that length exists at all.
pub fn place_ship<R: Rng + ?Sized>(
    grid: &mut Grid,
    length: usize,
    rng: &mut R,
) -> Result<Ship, BoardError> {
    check_length(grid, length)?;
    let size = grid.size();
    for _ in 0..MAX_PLACEMENT_ATTEMPTS {
        let orientation = if rng.random() {
            Orientation::Horizontal
        } else {
            Orientation::Vertical
        };
        let row = rng.random_range(0..size);
        let col = rng.random_range(0..size);
        if can_place(grid, row, col, length, orientation) {
            let ship = Ship::new(row, col, length, orientation);
            mark(grid, &ship);
            return Ok(ship);
        }
    }

    log::warn!(
        "random placement of length {} failed {} times, scanning",
        length,
        MAX_PLACEMENT_ATTEMPTS
    );
    for row in 0..size {
        for col in 0..size {
            for orientation in [Orientation::Horizontal, Orientation::Vertical] {
                if can_place(grid, row, col, length, orientation) {
                    let ship = Ship::new(row, col, length, orientation);
                    mark(grid, &ship);
                    return Ok(ship);
                }
            }
        }
    }
    Err(BoardError::UnableToPlaceShip { length })
}

/// Place every ship in `lengths`, in order.
pub fn place_all<R: Rng + ?Sized>(
    grid: &mut Grid,
    lengths: &[usize],
    rng: &mut R,
) -> Result<Vec<Ship>, BoardError> {
    lengths
        .iter()
        .map(|&len| place_ship(grid, len, rng))
        .collect()
}
