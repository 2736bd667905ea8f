//! Square grid of cell states.
//!
//! Cells only ever move `Water -> Miss` or `Ship -> Hit`. The unchecked
//! accessors treat an out-of-range coordinate as a caller bug and panic; use
//! [`Grid::get`] when the coordinate comes from outside the core.

use alloc::vec;
use alloc::vec::Vec;
use core::fmt;

use crate::common::{BoardError, Coord};

/// State of a single cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum Cell {
    /// Untried open water.
    Water,
    /// Untried ship segment.
    Ship,
    /// Struck ship segment.
    Hit,
    /// Struck open water.
    Miss,
}

impl Cell {
    /// `Water` and `Ship` cells can still be attacked.
    pub fn is_untried(self) -> bool {
        matches!(self, Cell::Water | Cell::Ship)
    }
}

/// N×N board of [`Cell`]s stored row-major.
#[derive(Clone, PartialEq, Eq)]
pub struct Grid {
    size: usize,
    cells: Vec<Cell>,
}

impl Grid {
    /// Create a `size × size` grid of open water.
    pub fn new(size: usize) -> Self {
        debug_assert!(size >= 1, "grid size must be at least 1");
        Grid {
            size,
            cells: vec![Cell::Water; size * size],
        }
    }

    /// Side length of the grid.
    pub fn size(&self) -> usize {
        self.size
    }

    pub fn in_bounds(&self, row: usize, col: usize) -> bool {
        row < self.size && col < self.size
    }

    #[inline]
    fn index(&self, row: usize, col: usize) -> usize {
        assert!(
            self.in_bounds(row, col),
            "cell ({}, {}) outside {}x{} grid",
            row,
            col,
            self.size,
            self.size
        );
        row * self.size + col
    }

    /// Cell at (row, col). Panics when out of bounds.
    pub fn cell(&self, row: usize, col: usize) -> Cell {
        self.cells[self.index(row, col)]
    }

    /// Bounds-checked cell lookup.
    pub fn get(&self, row: usize, col: usize) -> Result<Cell, BoardError> {
        if self.in_bounds(row, col) {
            Ok(self.cell(row, col))
        } else {
            Err(BoardError::OutOfBounds { row, col })
        }
    }

    pub(crate) fn set(&mut self, row: usize, col: usize, cell: Cell) {
        let idx = self.index(row, col);
        self.cells[idx] = cell;
    }

    /// Returns `true` if the cell has not been struck yet.
    pub fn is_attackable(&self, row: usize, col: usize) -> bool {
        self.cell(row, col).is_untried()
    }

    /// Returns `true` when no untouched ship segment remains.
    pub fn all_sunk(&self) -> bool {
        !self.cells.contains(&Cell::Ship)
    }

    /// Number of cells currently in `state`.
    pub fn count(&self, state: Cell) -> usize {
        self.cells.iter().filter(|&&c| c == state).count()
    }

    /// Every coordinate in row-major order.
    pub fn coords(&self) -> impl Iterator<Item = Coord> {
        let size = self.size;
        (0..size).flat_map(move |r| (0..size).map(move |c| (r, c)))
    }

    /// Coordinates that can still be attacked, row-major.
    pub fn attackable_cells(&self) -> impl Iterator<Item = Coord> + '_ {
        self.coords().filter(move |&(r, c)| self.is_attackable(r, c))
    }
}

impl fmt::Debug for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Grid<{}x{}>:", self.size, self.size)?;
        for r in 0..self.size {
            for c in 0..self.size {
                let ch = match self.cell(r, c) {
                    Cell::Water => '~',
                    Cell::Ship => 'S',
                    Cell::Hit => 'X',
                    Cell::Miss => 'O',
                };
                write!(f, "{} ", ch)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
