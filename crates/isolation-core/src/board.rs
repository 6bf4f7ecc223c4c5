use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::constants::{DEFAULT_HEIGHT, DEFAULT_WIDTH};
use crate::types::{Cell, CellSet, MAX_CELLS};

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum BoardError {
    #[error("board dimensions must be non-zero")]
    Empty,
    #[error("board has {0} cells, at most 128 are supported")]
    TooLarge(usize),
}

/// Board geometry. Passed explicitly wherever coordinates matter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawDims", into = "RawDims")]
pub struct BoardDims {
    width: u8,
    height: u8,
}

#[derive(Serialize, Deserialize)]
struct RawDims {
    width: u8,
    height: u8,
}

impl TryFrom<RawDims> for BoardDims {
    type Error = BoardError;

    fn try_from(raw: RawDims) -> Result<Self, Self::Error> {
        Self::new(raw.width, raw.height)
    }
}

impl From<BoardDims> for RawDims {
    fn from(dims: BoardDims) -> Self {
        Self {
            width: dims.width,
            height: dims.height,
        }
    }
}

impl BoardDims {
    pub fn new(width: u8, height: u8) -> Result<Self, BoardError> {
        if width == 0 || height == 0 {
            return Err(BoardError::Empty);
        }
        let cells = usize::from(width) * usize::from(height);
        if cells > MAX_CELLS {
            return Err(BoardError::TooLarge(cells));
        }
        Ok(Self { width, height })
    }

    pub const fn width(&self) -> u8 {
        self.width
    }

    pub const fn height(&self) -> u8 {
        self.height
    }

    pub const fn cell_count(&self) -> usize {
        self.width as usize * self.height as usize
    }

    /// `(x, y)` of a cell: `x` is the column, `y` the row counted from the top.
    pub const fn coords(&self, cell: Cell) -> (u8, u8) {
        (cell.0 % self.width, cell.0 / self.width)
    }

    pub fn cell(&self, x: u8, y: u8) -> Option<Cell> {
        (x < self.width && y < self.height).then(|| Cell(y * self.width + x))
    }

    pub fn offset(&self, cell: Cell, dx: i8, dy: i8) -> Option<Cell> {
        let (x, y) = self.coords(cell);
        let nx = i16::from(x) + i16::from(dx);
        let ny = i16::from(y) + i16::from(dy);
        if nx < 0 || ny < 0 || nx >= i16::from(self.width) || ny >= i16::from(self.height) {
            return None;
        }
        self.cell(nx as u8, ny as u8)
    }

    pub fn all_cells(&self) -> CellSet {
        let count = self.cell_count();
        if count == MAX_CELLS {
            CellSet::from_bits(u128::MAX)
        } else {
            CellSet::from_bits((1u128 << count) - 1)
        }
    }
}

impl Default for BoardDims {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
        }
    }
}
