#![cfg(feature = "std")]

use std::fmt;

use crate::game::GameEngine;
use crate::grid::{Cell, Grid};
use crate::opponent::{Difficulty, Opponent, SearchState};

/// Text rendering of a grid. Ship cells are hidden unless `reveal` is set.
pub struct BoardView<'a> {
    grid: &'a Grid,
    reveal: bool,
}

impl<'a> BoardView<'a> {
    /// Owner's view with ships shown.
    pub fn revealed(grid: &'a Grid) -> Self {
        Self { grid, reveal: true }
    }

    /// Attacker's view with untouched ships shown as water.
    pub fn hidden(grid: &'a Grid) -> Self {
        Self {
            grid,
            reveal: false,
        }
    }
}

impl fmt::Display for BoardView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let size = self.grid.size();
        write!(f, "   ")?;
        for c in 0..size {
            write!(f, " {}", c)?;
        }
        writeln!(f)?;
        for r in 0..size {
            write!(f, "{:2} ", r)?;
            for c in 0..size {
                let ch = match self.grid.cell(r, c) {
                    Cell::Hit => 'X',
                    Cell::Miss => 'o',
                    Cell::Ship if self.reveal => 'S',
                    Cell::Ship | Cell::Water => '.',
                };
                write!(f, " {}", ch)?;
            }
            writeln!(f)?;
        }
        if self.reveal {
            write!(f, "    Legend: S=Ship  X=Hit  o=Miss  .=Water")
        } else {
            write!(f, "    Legend: X=Hit  o=Miss  .=Unknown")
        }
    }
}

/// Hit/remaining counters for one grid, e.g. `Hits: 3 | Remaining: 2`.
pub fn status_line(grid: &Grid) -> String {
    format!(
        "Hits: {} | Remaining: {}",
        grid.count(Cell::Hit),
        grid.count(Cell::Ship)
    )
}

/// One-line summary of what the opponent is doing.
///
/// Easy keeps no search state, so only the tiers that hunt report a pool.
pub fn describe_search(opponent: &Opponent) -> String {
    if opponent.difficulty() == Difficulty::Easy {
        return "firing at random".to_string();
    }
    match opponent.search() {
        SearchState::Hunt { pool } => format!("hunting ({} pool cells left)", pool.len()),
        SearchState::Target { queue, .. } => format!("targeting {:?}", queue),
    }
}

/// The computer board (top, hidden) above the player's board (bottom).
pub fn render_player_view(engine: &GameEngine) -> String {
    let computer = engine.computer_board().grid();
    let player = engine.player_board().grid();
    format!(
        "Computer board ({}):\n{}\n\nYour board ({}):\n{}",
        status_line(computer),
        BoardView::hidden(computer),
        status_line(player),
        BoardView::revealed(player)
    )
}

pub fn print_player_view(engine: &GameEngine) {
    println!("{}", render_player_view(engine));
}
