use alloc::collections::VecDeque;
use alloc::vec::Vec;

use rand::Rng;

use crate::{
    common::{BoardError, ShotOutcome},
    player::Player,
    position::Position,
};

/// Computer player that fires at uniformly random cells.
///
/// Cells already fired upon are not tracked here; the board rejects them and
/// the game asks again.
pub struct AiPlayer<R> {
    rng: R,
    board_size: usize,
}

impl<R: Rng> AiPlayer<R> {
    pub fn new(rng: R, board_size: usize) -> Self {
        Self { rng, board_size }
    }
}

impl<R: Rng> Player for AiPlayer<R> {
    fn select_target(&mut self) -> anyhow::Result<Position> {
        if self.board_size == 0 {
            anyhow::bail!("no cells to target on an empty board");
        }
        let max = self.board_size as i32;
        let target = Position::new(
            self.rng.random_range(0..max),
            self.rng.random_range(0..max),
        );
        log::debug!("ai selected {:?}", target);
        Ok(target)
    }
}

/// Player that replays a fixed list of targets and records the feedback it
/// receives. Fails once the script is exhausted.
#[derive(Debug, Default, Clone)]
pub struct ScriptedPlayer {
    targets: VecDeque<Position>,
    errors: Vec<(Position, BoardError)>,
    outcomes: Vec<(Position, ShotOutcome)>,
}

impl ScriptedPlayer {
    pub fn new<I>(targets: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<Position>,
    {
        Self {
            targets: targets.into_iter().map(Into::into).collect(),
            ..Self::default()
        }
    }

    /// Targets not yet handed out.
    pub fn remaining(&self) -> usize {
        self.targets.len()
    }

    /// Rejected targets, in order.
    pub fn errors(&self) -> &[(Position, BoardError)] {
        &self.errors
    }

    /// Landed shots, in order.
    pub fn outcomes(&self) -> &[(Position, ShotOutcome)] {
        &self.outcomes
    }
}

impl Player for ScriptedPlayer {
    fn select_target(&mut self) -> anyhow::Result<Position> {
        self.targets
            .pop_front()
            .ok_or_else(|| anyhow::anyhow!("scripted player ran out of targets"))
    }

    fn handle_shot_error(&mut self, target: Position, error: BoardError) {
        self.errors.push((target, error));
    }

    fn handle_guess_result(&mut self, target: Position, outcome: ShotOutcome) {
        self.outcomes.push((target, outcome));
    }
}
