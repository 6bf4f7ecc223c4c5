use thiserror::Error;

use crate::board::BoardDims;
use crate::movegen::{reachable, reachable_ordered};
use crate::types::{Cell, CellSet, Player};

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PositionError {
    #[error("cell {0:?} is not on the board")]
    OffBoard(Cell),
    #[error("cell {0:?} is not a legal destination for the player to move")]
    IllegalMove(Cell),
    #[error("game is already over")]
    GameOver,
}

/// Immutable knight's-isolation position. Transitions return a new value.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Isolation {
    dims: BoardDims,
    blocked: CellSet,
    locs: [Option<Cell>; 2],
    ply_count: u32,
}

impl Isolation {
    /// Empty board, nobody placed, player One to move.
    pub fn new(dims: BoardDims) -> Self {
        Self {
            dims,
            blocked: CellSet::EMPTY,
            locs: [None, None],
            ply_count: 0,
        }
    }

    /// Builds a position from raw parts. `blocked` must include the occupied cells.
    pub(crate) fn from_parts(
        dims: BoardDims,
        blocked: CellSet,
        locs: [Option<Cell>; 2],
        ply_count: u32,
    ) -> Self {
        Self {
            dims,
            blocked,
            locs,
            ply_count,
        }
    }

    pub const fn dims(&self) -> &BoardDims {
        &self.dims
    }

    pub const fn blocked(&self) -> CellSet {
        self.blocked
    }

    pub fn open_cells(&self) -> CellSet {
        self.dims.all_cells().difference(self.blocked)
    }

    pub const fn ply_count(&self) -> u32 {
        self.ply_count
    }

    pub const fn player(&self) -> Player {
        if self.ply_count % 2 == 0 {
            Player::One
        } else {
            Player::Two
        }
    }

    pub const fn location(&self, player: Player) -> Option<Cell> {
        self.locs[player.index()]
    }

    /// Cells a piece standing on `loc` could move to; every open cell for an unplaced piece.
    pub fn liberties(&self, loc: Option<Cell>) -> CellSet {
        match loc {
            Some(cell) => reachable(&self.dims, self.blocked, cell),
            None => self.open_cells(),
        }
    }

    /// Legal destinations for the player to move, in knight-jump order
    /// (or ascending cell order before the player is placed).
    pub fn actions(&self) -> Vec<Cell> {
        match self.location(self.player()) {
            Some(cell) => reachable_ordered(&self.dims, self.blocked, cell).to_vec(),
            None => self.open_cells().iter().collect(),
        }
    }

    pub fn has_liberties(&self, player: Player) -> bool {
        !self.liberties(self.location(player)).is_empty()
    }

    pub fn is_game_over(&self) -> bool {
        !self.has_liberties(self.player())
    }

    /// The player who is not stuck, once the game is over.
    pub fn winner(&self) -> Option<Player> {
        self.is_game_over().then(|| self.player().opponent())
    }

    /// Moves the active player to `cell` without validation.
    pub fn result(&self, cell: Cell) -> Self {
        let mut locs = self.locs;
        locs[self.player().index()] = Some(cell);
        Self {
            dims: self.dims,
            blocked: self.blocked.with(cell),
            locs,
            ply_count: self.ply_count + 1,
        }
    }

    pub fn try_result(&self, cell: Cell) -> Result<Self, PositionError> {
        if cell.index() >= self.dims.cell_count() {
            return Err(PositionError::OffBoard(cell));
        }
        if self.is_game_over() {
            return Err(PositionError::GameOver);
        }
        if !self.liberties(self.location(self.player())).contains(cell) {
            return Err(PositionError::IllegalMove(cell));
        }
        Ok(self.result(cell))
    }
}

impl Default for Isolation {
    fn default() -> Self {
        Self::new(BoardDims::default())
    }
}
