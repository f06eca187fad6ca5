//! Turn coordination between two boards and their players.

use alloc::boxed::Box;
use core::fmt;

use rand::Rng;

use crate::{
    board::Board,
    common::ShotOutcome,
    config::GameConfig,
    fleet,
    player::Player,
    position::Position,
};

/// One of the two sides of a game. Side `A` is the human in the default setup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum Side {
    A,
    B,
}

impl Side {
    /// Get the opponent of this side.
    pub fn opponent(self) -> Self {
        match self {
            Side::A => Side::B,
            Side::B => Side::A,
        }
    }

    fn index(self) -> usize {
        match self {
            Side::A => 0,
            Side::B => 1,
        }
    }
}

/// Current state of the turn machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum TurnState {
    TurnOf(Side),
    Won(Side),
}

impl TurnState {
    pub fn is_over(self) -> bool {
        matches!(self, TurnState::Won(_))
    }

    pub fn winner(self) -> Option<Side> {
        match self {
            TurnState::Won(side) => Some(side),
            TurnState::TurnOf(_) => None,
        }
    }
}

/// Reasons a game cannot start with the given boards.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameError {
    /// The board of `side` holds `found` ships instead of the configured fleet.
    FleetMismatch {
        side: Side,
        expected: usize,
        found: usize,
    },
    /// The board of `side` is still in its setup phase.
    SetupNotFinished(Side),
}

impl fmt::Display for GameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameError::FleetMismatch {
                side,
                expected,
                found,
            } => write!(
                f,
                "Board of {:?} has {} ships, expected {}",
                side, found, expected
            ),
            GameError::SetupNotFinished(side) => {
                write!(f, "Board of {:?} is not ready for play", side)
            }
        }
    }
}

impl core::error::Error for GameError {}

/// A shot that landed on a board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct Shot {
    pub side: Side,
    pub target: Position,
    pub outcome: ShotOutcome,
}

/// Drives alternating shots until one fleet is destroyed.
///
/// Each side owns a board and a player; a side's player picks targets on the
/// opponent's board. A hit keeps the turn, a miss or a sink passes it.
pub struct Game<'a> {
    boards: [Board; 2],
    players: [Box<dyn Player + 'a>; 2],
    fleet_size: usize,
    state: TurnState,
    shots: [usize; 2],
    last_shot: Option<Shot>,
}

impl<'a> Game<'a> {
    /// Start a game with boards that are already set up.
    ///
    /// Each board must have finished setup and hold exactly the configured
    /// number of ships, otherwise the win condition could never be reached.
    pub fn new(
        board_a: Board,
        player_a: Box<dyn Player + 'a>,
        board_b: Board,
        player_b: Box<dyn Player + 'a>,
        config: &GameConfig,
    ) -> Result<Self, GameError> {
        let expected = config.fleet_size();
        for (side, board) in [(Side::A, &board_a), (Side::B, &board_b)] {
            if !board.is_setup_finished() {
                return Err(GameError::SetupNotFinished(side));
            }
            if board.ships().len() != expected {
                return Err(GameError::FleetMismatch {
                    side,
                    expected,
                    found: board.ships().len(),
                });
            }
        }
        Ok(Self {
            boards: [board_a, board_b],
            players: [player_a, player_b],
            fleet_size: config.fleet_size(),
            state: TurnState::TurnOf(config.first),
            shots: [0; 2],
            last_shot: None,
        })
    }

    /// Start a game with a freshly generated fleet on each side.
    pub fn with_random_boards<R: Rng>(
        rng: &mut R,
        player_a: Box<dyn Player + 'a>,
        player_b: Box<dyn Player + 'a>,
        config: &GameConfig,
    ) -> Result<Self, GameError> {
        let board_a = fleet::random_board(rng, config);
        let board_b = fleet::random_board(rng, config);
        Self::new(board_a, player_a, board_b, player_b, config)
    }

    pub fn state(&self) -> TurnState {
        self.state
    }

    /// The board owned by `side`, i.e. the one its opponent fires at.
    pub fn board(&self, side: Side) -> &Board {
        &self.boards[side.index()]
    }

    /// Shots fired by `side` that landed (rejected targets are not counted).
    pub fn shots_fired(&self, side: Side) -> usize {
        self.shots[side.index()]
    }

    pub fn last_shot(&self) -> Option<Shot> {
        self.last_shot
    }

    /// Resolve one landed shot for the side to move and advance the state.
    ///
    /// Rejected targets are reported back to the same player, which is asked
    /// again without losing the turn. Errors come only from the player itself.
    pub fn play_turn(&mut self) -> anyhow::Result<TurnState> {
        let side = match self.state {
            TurnState::Won(_) => return Ok(self.state),
            TurnState::TurnOf(side) => side,
        };
        let shooter = side.index();
        let target_board = side.opponent().index();

        let (target, outcome) = loop {
            let target = self.players[shooter].select_target()?;
            match self.boards[target_board].shoot(target) {
                Ok(outcome) => break (target, outcome),
                Err(e) => {
                    log::debug!("{:?} rejected at {:?}: {}", side, target, e);
                    self.players[shooter].handle_shot_error(target, e);
                }
            }
        };

        self.shots[shooter] += 1;
        self.players[shooter].handle_guess_result(target, outcome);
        self.last_shot = Some(Shot {
            side,
            target,
            outcome,
        });

        let fleet_destroyed = self.boards[target_board].destroyed_count() >= self.fleet_size;
        self.state = match outcome {
            ShotOutcome::Hit | ShotOutcome::Sunk if fleet_destroyed => TurnState::Won(side),
            ShotOutcome::Hit => TurnState::TurnOf(side),
            ShotOutcome::Sunk | ShotOutcome::Miss => TurnState::TurnOf(side.opponent()),
        };
        match self.state {
            TurnState::Won(winner) => log::info!(
                "{:?} wins after {} shots",
                winner,
                self.shots[winner.index()]
            ),
            TurnState::TurnOf(next) => log::debug!("{:?} -> {:?}, turn of {:?}", target, outcome, next),
        }
        Ok(self.state)
    }

    /// Play until one side wins and return the winner.
    pub fn run(&mut self) -> anyhow::Result<Side> {
        loop {
            if let TurnState::Won(winner) = self.play_turn()? {
                return Ok(winner);
            }
        }
    }
}
