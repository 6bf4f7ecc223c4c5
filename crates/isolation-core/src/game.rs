use std::fmt::Debug;

use crate::position::Isolation;
use crate::types::{Cell, CellSet, Player};

/// Read-only view of a two-player position that search runs over.
///
/// Implementations are immutable snapshots: [`GameState::apply`] returns a new state and
/// never mutates the receiver.
pub trait GameState: Sized {
    type Action: Clone + PartialEq + Debug;

    fn active_player(&self) -> Player;

    /// Cell occupied by `player`, or `None` before the player has been placed.
    fn location_of(&self, player: Player) -> Option<Cell>;

    fn ply_count(&self) -> u32;

    /// Legal actions for the active player, in generator order. Empty only when terminal.
    fn legal_actions(&self) -> Vec<Self::Action>;

    /// Successor state. `action` must come from [`GameState::legal_actions`] on `self`.
    fn apply(&self, action: &Self::Action) -> Self;

    fn is_terminal(&self) -> bool;

    /// `1` for a win, `-1` for a loss, `0` while the game is undecided.
    fn utility(&self, player: Player) -> i32;

    /// One-hop legal destinations from `cell`, regardless of whose turn it is.
    fn reachable_cells(&self, cell: Cell) -> CellSet;
}

impl GameState for Isolation {
    type Action = Cell;

    fn active_player(&self) -> Player {
        self.player()
    }

    fn location_of(&self, player: Player) -> Option<Cell> {
        self.location(player)
    }

    fn ply_count(&self) -> u32 {
        Isolation::ply_count(self)
    }

    fn legal_actions(&self) -> Vec<Cell> {
        self.actions()
    }

    fn apply(&self, action: &Cell) -> Self {
        self.result(*action)
    }

    fn is_terminal(&self) -> bool {
        self.is_game_over()
    }

    fn utility(&self, player: Player) -> i32 {
        match self.winner() {
            Some(winner) if winner == player => 1,
            Some(_) => -1,
            None => 0,
        }
    }

    fn reachable_cells(&self, cell: Cell) -> CellSet {
        self.liberties(Some(cell))
    }
}
