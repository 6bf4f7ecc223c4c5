use arrayvec::ArrayVec;

use crate::board::BoardDims;
use crate::constants::KNIGHT_OFFSETS;
use crate::types::{Cell, CellSet};

pub type JumpList = ArrayVec<Cell, 8>;

/// On-board knight destinations from `cell`, in [`KNIGHT_OFFSETS`] order.
pub fn knight_destinations(dims: &BoardDims, cell: Cell) -> JumpList {
    KNIGHT_OFFSETS
        .iter()
        .filter_map(|&(dx, dy)| dims.offset(cell, dx, dy))
        .collect()
}

/// Knight destinations from `cell` that are not blocked.
pub fn reachable(dims: &BoardDims, blocked: CellSet, cell: Cell) -> CellSet {
    knight_destinations(dims, cell)
        .into_iter()
        .filter(|dest| !blocked.contains(*dest))
        .collect()
}

/// Like [`reachable`], but keeps the jump order instead of index order.
pub fn reachable_ordered(dims: &BoardDims, blocked: CellSet, cell: Cell) -> JumpList {
    let mut jumps = knight_destinations(dims, cell);
    jumps.retain(|dest| !blocked.contains(*dest));
    jumps
}
