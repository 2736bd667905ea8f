#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;
#[cfg(feature = "std")]
extern crate std;

mod attack;
mod board;
mod common;
mod config;
mod game;
mod grid;
#[cfg(feature = "std")]
mod logging;
pub mod opponent;
pub mod prelude;
mod ship;
#[cfg(feature = "std")]
pub mod ui;

pub use attack::attack;
pub use board::*;
pub use common::*;
pub use config::*;
pub use game::*;
pub use grid::*;
#[cfg(feature = "std")]
pub use logging::{init_logging, parse_level, LOG_ENV};
pub use opponent::{Difficulty, Opponent, ParseDifficultyError, SearchState, TurnReport};
pub use ship::*;
#[cfg(feature = "std")]
pub use ui::*;
