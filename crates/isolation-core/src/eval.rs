use crate::board::BoardDims;
use crate::game::GameState;
use crate::types::Player;

/// Static estimate of how good a non-terminal state is for `player`. Larger is better.
pub trait Evaluator<S: GameState> {
    fn evaluate(&self, state: &S, player: Player, board: &BoardDims) -> f64;
}
