use rand::Rng;

use crate::board::Board;
use crate::common::{BoardError, Coord, GuessResult};
use crate::config::GameConfig;
use crate::opponent::Opponent;

/// Current status of a game, seen from the human side.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum GameStatus {
    InProgress,
    Won,
    Lost,
}

/// Side whose move it is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Turn {
    Player,
    Opponent,
}

/// A shot fired by the opponent at the player's board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OpponentMove {
    pub coord: Coord,
    pub result: GuessResult,
}

/// One game of human against scripted opponent.
///
/// The human always moves first; turns then alternate until one fleet is
/// sunk.
#[derive(Debug, Clone)]
pub struct GameEngine {
    config: GameConfig,
    player: Board,
    computer: Board,
    opponent: Opponent,
    turn: Turn,
    status: GameStatus,
    shots_fired: usize,
    shots_taken: usize,
}

impl GameEngine {
    /// Validate `config` and randomly deploy both fleets.
    pub fn new<R: Rng + ?Sized>(config: GameConfig, rng: &mut R) -> Result<Self, BoardError> {
        config.validate()?;
        let size = config.board_size;
        let player = Board::random(size, &config.ship_lengths, rng)?;
        let computer = Board::random(size, &config.ship_lengths, rng)?;
        let opponent = Opponent::new(config.difficulty, size, rng);
        log::debug!(
            "new {}x{} game against {} opponent, fleet {:?}",
            size,
            size,
            config.difficulty,
            config.ship_lengths
        );
        Ok(Self::from_parts(config, player, computer, opponent))
    }

    /// Assemble a game from prepared boards and opponent.
    pub fn from_parts(
        config: GameConfig,
        player: Board,
        computer: Board,
        opponent: Opponent,
    ) -> Self {
        Self {
            config,
            player,
            computer,
            opponent,
            turn: Turn::Player,
            status: GameStatus::InProgress,
            shots_fired: 0,
            shots_taken: 0,
        }
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// The human's own board, which the opponent attacks.
    pub fn player_board(&self) -> &Board {
        &self.player
    }

    /// The opponent's board, which the human attacks.
    pub fn computer_board(&self) -> &Board {
        &self.computer
    }

    pub fn opponent(&self) -> &Opponent {
        &self.opponent
    }

    pub fn turn(&self) -> Turn {
        self.turn
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Shots the human has fired so far.
    pub fn shots_fired(&self) -> usize {
        self.shots_fired
    }

    /// Shots the opponent has fired so far.
    pub fn shots_taken(&self) -> usize {
        self.shots_taken
    }

    fn ensure_turn(&self, side: Turn) -> Result<(), BoardError> {
        if self.status != GameStatus::InProgress {
            return Err(BoardError::GameOver);
        }
        if self.turn != side {
            return Err(BoardError::OutOfTurn);
        }
        Ok(())
    }

    /// Fire the human's shot at the opponent's board.
    ///
    /// A rejected shot (out of bounds or already tried) keeps the turn.
    pub fn player_fire(&mut self, row: usize, col: usize) -> Result<GuessResult, BoardError> {
        self.ensure_turn(Turn::Player)?;
        let result = self.computer.fire(row, col)?;
        self.shots_fired += 1;
        if self.computer.all_sunk() {
            log::info!("player sank the fleet after {} shots", self.shots_fired);
            self.status = GameStatus::Won;
        } else {
            self.turn = Turn::Opponent;
        }
        Ok(result)
    }

    /// Let the opponent play its turn against the human's board.
    ///
    /// Returns `None` if the opponent had no legal cell left.
    pub fn opponent_turn<R: Rng + ?Sized>(
        &mut self,
        rng: &mut R,
    ) -> Result<Option<OpponentMove>, BoardError> {
        self.ensure_turn(Turn::Opponent)?;
        let report = self.opponent.take_turn(self.player.grid_mut(), rng)?;
        let mv = report.map(|r| {
            self.shots_taken += 1;
            OpponentMove {
                coord: r.coord,
                result: self.player.record_strike(r.coord, r.result),
            }
        });
        if self.player.all_sunk() {
            log::info!("opponent sank the fleet after {} shots", self.shots_taken);
            self.status = GameStatus::Lost;
        } else {
            self.turn = Turn::Player;
        }
        Ok(mv)
    }

    /// Throw away both boards and the search state and deal a fresh game.
    pub fn restart<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Result<(), BoardError> {
        *self = GameEngine::new(self.config.clone(), rng)?;
        Ok(())
    }
}
