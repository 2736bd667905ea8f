//! Scripted opponent: picks one cell per turn on the target grid.
//!
//! Three strengths share the same turn entry point:
//!
//! - `Easy` fires at a uniformly random untried cell.
//! - `Medium` hunts blindly over a shuffled checkerboard of cells. Every ship
//!   of length two or more covers at least one cell with `(row + col)` even,
//!   so the checkerboard is a complete search basis at half the cost.
//! - `Hard` hunts like `Medium`, then after a hit switches to target mode and
//!   works outward from the hit through a FIFO queue of orthogonal
//!   neighbours until the queue runs dry.

use alloc::collections::VecDeque;
use alloc::vec::Vec;
use core::{fmt, mem, str::FromStr};
use rand::seq::{IndexedRandom, SliceRandom};
use rand::Rng;

use crate::attack::attack;
use crate::common::{AttackResult, BoardError, Coord};
use crate::grid::Grid;

/// Opponent strength, chosen once per game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "std", serde(rename_all = "lowercase"))]
pub enum Difficulty {
    Easy,
    Medium,
    #[default]
    Hard,
}

impl Difficulty {
    pub const ALL: [Difficulty; 3] = [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard];

    pub fn name(self) -> &'static str {
        match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error returned when a difficulty name is not recognised.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseDifficultyError;

impl fmt::Display for ParseDifficultyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("difficulty must be one of: easy, medium, hard")
    }
}

#[cfg(feature = "std")]
impl std::error::Error for ParseDifficultyError {}

impl FromStr for Difficulty {
    type Err = ParseDifficultyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Difficulty::ALL
            .into_iter()
            .find(|d| d.name().eq_ignore_ascii_case(s.trim()))
            .ok_or(ParseDifficultyError)
    }
}

/// Persistent search state of the opponent.
///
/// The hunt pool is consumed from the back. While targeting, the pool is kept
/// aside inside the `Target` variant and resumed unchanged on return to hunt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchState {
    Hunt {
        pool: Vec<Coord>,
    },
    Target {
        queue: VecDeque<Coord>,
        pool: Vec<Coord>,
    },
}

impl SearchState {
    /// Fresh hunt over a shuffled checkerboard for a `size × size` grid.
    pub fn hunt<R: Rng + ?Sized>(size: usize, rng: &mut R) -> Self {
        SearchState::Hunt {
            pool: hunt_pool(size, rng),
        }
    }

    pub fn is_hunting(&self) -> bool {
        matches!(self, SearchState::Hunt { .. })
    }

    pub fn is_targeting(&self) -> bool {
        matches!(self, SearchState::Target { .. })
    }

    /// Remaining hunt candidates; the next pick is the last element.
    pub fn pool(&self) -> &[Coord] {
        match self {
            SearchState::Hunt { pool } | SearchState::Target { pool, .. } => pool,
        }
    }

    /// Pending target candidates, front first. `None` while hunting.
    pub fn queue(&self) -> Option<&VecDeque<Coord>> {
        match self {
            SearchState::Hunt { .. } => None,
            SearchState::Target { queue, .. } => Some(queue),
        }
    }

    fn pool_mut(&mut self) -> &mut Vec<Coord> {
        match self {
            SearchState::Hunt { pool } | SearchState::Target { pool, .. } => pool,
        }
    }

    fn begin_target(&mut self, queue: VecDeque<Coord>) {
        let pool = mem::take(self.pool_mut());
        *self = SearchState::Target { queue, pool };
    }

    fn end_target(&mut self) {
        let pool = mem::take(self.pool_mut());
        *self = SearchState::Hunt { pool };
    }
}

/// The cell an opponent fired at and what it struck.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct TurnReport {
    pub coord: Coord,
    pub result: AttackResult,
}

/// Scripted opponent driving one side of the game.
#[derive(Debug, Clone)]
pub struct Opponent {
    difficulty: Difficulty,
    search: SearchState,
}

impl Opponent {
    /// Create an opponent for a `size × size` target grid.
    pub fn new<R: Rng + ?Sized>(difficulty: Difficulty, size: usize, rng: &mut R) -> Self {
        let search = match difficulty {
            Difficulty::Easy => SearchState::Hunt { pool: Vec::new() },
            Difficulty::Medium | Difficulty::Hard => SearchState::hunt(size, rng),
        };
        Opponent { difficulty, search }
    }

    /// Create an opponent with a prepared search state.
    pub fn with_state(difficulty: Difficulty, search: SearchState) -> Self {
        Opponent { difficulty, search }
    }

    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    pub fn search(&self) -> &SearchState {
        &self.search
    }

    /// Discard the search state and start over on a `size × size` grid.
    pub fn reset<R: Rng + ?Sized>(&mut self, size: usize, rng: &mut R) {
        *self = Opponent::new(self.difficulty, size, rng);
    }

    /// Play one turn against `grid`.
    ///
    /// Fires exactly once, or not at all when every cell has been struck.
    pub fn take_turn<R: Rng + ?Sized>(
        &mut self,
        grid: &mut Grid,
        rng: &mut R,
    ) -> Result<Option<TurnReport>, BoardError> {
        let report = match self.difficulty {
            Difficulty::Easy => match random_attackable(grid, rng) {
                Some(coord) => Some(fire(grid, coord)?),
                None => None,
            },
            Difficulty::Medium => match next_hunt_cell(self.search.pool_mut(), grid, rng) {
                Some(coord) => Some(fire(grid, coord)?),
                None => None,
            },
            Difficulty::Hard => self.hard_turn(grid, rng)?,
        };
        match &report {
            Some(r) => log::debug!(
                "{} opponent fired at {:?}: {:?}",
                self.difficulty,
                r.coord,
                r.result
            ),
            None => log::debug!("{} opponent has no cell left to fire at", self.difficulty),
        }
        Ok(report)
    }

    fn hard_turn<R: Rng + ?Sized>(
        &mut self,
        grid: &mut Grid,
        rng: &mut R,
    ) -> Result<Option<TurnReport>, BoardError> {
        if let SearchState::Target { queue, .. } = &mut self.search {
            while let Some(coord) = queue.pop_front() {
                if !grid.is_attackable(coord.0, coord.1) {
                    continue;
                }
                let report = fire(grid, coord)?;
                if report.result.is_hit() {
                    for next in neighbors(coord, grid.size()) {
                        if grid.is_attackable(next.0, next.1) && !queue.contains(&next) {
                            queue.push_back(next);
                        }
                    }
                }
                if queue.is_empty() {
                    log::debug!("target queue drained, back to hunting");
                    self.search.end_target();
                }
                return Ok(Some(report));
            }
            log::debug!("target queue exhausted, hunting this turn");
            self.search.end_target();
        }

        let Some(coord) = next_hunt_cell(self.search.pool_mut(), grid, rng) else {
            return Ok(None);
        };
        let report = fire(grid, coord)?;
        if report.result.is_hit() {
            let queue: VecDeque<Coord> = neighbors(coord, grid.size()).collect();
            log::debug!("hunt hit at {:?}, targeting {:?}", coord, queue);
            self.search.begin_target(queue);
        }
        Ok(Some(report))
    }
}

fn fire(grid: &mut Grid, coord: Coord) -> Result<TurnReport, BoardError> {
    let result = attack(grid, coord.0, coord.1)?;
    Ok(TurnReport { coord, result })
}

/// Every `(row, col)` with `row + col` even, row-major.
pub fn parity_cells(size: usize) -> Vec<Coord> {
    (0..size)
        .flat_map(|r| (0..size).map(move |c| (r, c)))
        .filter(|&(r, c)| (r + c) % 2 == 0)
        .collect()
}

/// Shuffled checkerboard pool for a `size × size` grid.
pub fn hunt_pool<R: Rng + ?Sized>(size: usize, rng: &mut R) -> Vec<Coord> {
    let mut pool = parity_cells(size);
    pool.shuffle(rng);
    pool
}

/// In-bounds orthogonal neighbours in the order up, down, left, right.
pub fn neighbors(coord: Coord, size: usize) -> impl Iterator<Item = Coord> {
    let (r, c) = coord;
    [
        r.checked_sub(1).map(|up| (up, c)),
        (r + 1 < size).then(|| (r + 1, c)),
        c.checked_sub(1).map(|left| (r, left)),
        (c + 1 < size).then(|| (r, c + 1)),
    ]
    .into_iter()
    .flatten()
}

/// Uniformly random untried cell.
pub fn random_attackable<R: Rng + ?Sized>(grid: &Grid, rng: &mut R) -> Option<Coord> {
    let cells: Vec<Coord> = grid.attackable_cells().collect();
    cells.choose(rng).copied()
}

fn pop_attackable(pool: &mut Vec<Coord>, grid: &Grid) -> Option<Coord> {
    while let Some((r, c)) = pool.pop() {
        if grid.is_attackable(r, c) {
            return Some((r, c));
        }
        log::trace!("skipping struck pool cell {:?}", (r, c));
    }
    None
}

/// Next hunt cell, refilling the pool once it runs dry.
///
/// When no checkerboard cell is left untried, ships may still have untouched
/// off-parity segments, so the pick falls back to any untried cell.
fn next_hunt_cell<R: Rng + ?Sized>(
    pool: &mut Vec<Coord>,
    grid: &Grid,
    rng: &mut R,
) -> Option<Coord> {
    if let Some(coord) = pop_attackable(pool, grid) {
        return Some(coord);
    }
    *pool = hunt_pool(grid.size(), rng);
    pool.retain(|&(r, c)| grid.is_attackable(r, c));
    log::debug!("hunt pool refilled with {} cells", pool.len());
    pop_attackable(pool, grid).or_else(|| random_attackable(grid, rng))
}
