use crate::{
    common::{BoardError, ShotOutcome},
    position::Position,
};

/// Interface implemented by different player types: a source of targets for
/// one side of the game.
pub trait Player {
    /// Choose the next target on the opponent's board. Called again after a
    /// rejected shot, so implementations must not assume the last target landed.
    fn select_target(&mut self) -> anyhow::Result<Position>;

    /// Inform the player that its last target was rejected.
    fn handle_shot_error(&mut self, _target: Position, _error: BoardError) {}

    /// Inform the player of the result of its last shot.
    fn handle_guess_result(&mut self, _target: Position, _outcome: ShotOutcome) {}
}

impl<P: Player + ?Sized> Player for &mut P {
    fn select_target(&mut self) -> anyhow::Result<Position> {
        (**self).select_target()
    }

    fn handle_shot_error(&mut self, target: Position, error: BoardError) {
        (**self).handle_shot_error(target, error)
    }

    fn handle_guess_result(&mut self, target: Position, outcome: ShotOutcome) {
        (**self).handle_guess_result(target, outcome)
    }
}
