use serde::{Deserialize, Serialize};

/// Maximum number of cells a board may have; bounded by the width of [`CellSet`].
pub const MAX_CELLS: usize = 128;

#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Player {
    One = 0,
    Two = 1,
}

impl Player {
    pub const ALL: [Self; 2] = [Self::One, Self::Two];

    pub const fn index(self) -> usize {
        self as usize
    }

    pub const fn from_index(index: usize) -> Option<Self> {
        match index {
            0 => Some(Self::One),
            1 => Some(Self::Two),
            _ => None,
        }
    }

    pub const fn opponent(self) -> Self {
        match self {
            Self::One => Self::Two,
            Self::Two => Self::One,
        }
    }

    pub const fn to_code(self) -> char {
        match self {
            Self::One => '1',
            Self::Two => '2',
        }
    }

    pub const fn from_code(code: char) -> Option<Self> {
        match code {
            '1' => Some(Self::One),
            '2' => Some(Self::Two),
            _ => None,
        }
    }
}

/// A board cell, identified by its row-major index `y * width + x`.
#[repr(transparent)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Cell(pub u8);

impl Cell {
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

/// Set of cells stored as a bit mask over cell indices.
#[repr(transparent)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct CellSet(u128);

impl CellSet {
    pub const EMPTY: Self = Self(0);

    pub const fn from_bits(bits: u128) -> Self {
        Self(bits)
    }

    pub const fn bits(self) -> u128 {
        self.0
    }

    pub const fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    pub const fn contains(self, cell: Cell) -> bool {
        cell.index() < MAX_CELLS && self.0 & (1u128 << cell.0) != 0
    }

    #[must_use]
    pub const fn with(self, cell: Cell) -> Self {
        Self(self.0 | (1u128 << cell.0))
    }

    #[must_use]
    pub const fn intersection(self, other: Self) -> Self {
        Self(self.0 & other.0)
    }

    #[must_use]
    pub const fn difference(self, other: Self) -> Self {
        Self(self.0 & !other.0)
    }

    /// Cells in ascending index order.
    pub fn iter(self) -> CellSetIter {
        CellSetIter(self.0)
    }
}

impl FromIterator<Cell> for CellSet {
    fn from_iter<I: IntoIterator<Item = Cell>>(iter: I) -> Self {
        iter.into_iter().fold(Self::EMPTY, Self::with)
    }
}

impl IntoIterator for CellSet {
    type Item = Cell;
    type IntoIter = CellSetIter;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[derive(Debug, Clone)]
pub struct CellSetIter(u128);

impl Iterator for CellSetIter {
    type Item = Cell;

    fn next(&mut self) -> Option<Cell> {
        if self.0 == 0 {
            return None;
        }
        let idx = self.0.trailing_zeros();
        self.0 &= self.0 - 1;
        Some(Cell(idx as u8))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.0.count_ones() as usize;
        (len, Some(len))
    }
}

impl ExactSizeIterator for CellSetIter {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn player_opponent_and_codes() {
        for player in Player::ALL {
            assert_eq!(player.opponent().opponent(), player);
            assert_eq!(Player::from_code(player.to_code()), Some(player));
            assert_eq!(Player::from_index(player.index()), Some(player));
        }
        assert_eq!(Player::from_index(2), None);
        assert_eq!(Player::from_code('3'), None);
    }

    #[test]
    fn cell_set_iterates_in_index_order() {
        let set: CellSet = [Cell(97), Cell(3), Cell(0), Cell(127)].into_iter().collect();
        let cells: Vec<Cell> = set.iter().collect();
        assert_eq!(cells, vec![Cell(0), Cell(3), Cell(97), Cell(127)]);
        assert_eq!(set.len(), 4);
        assert!(set.contains(Cell(127)));
        assert!(!set.contains(Cell(1)));
    }

    #[test]
    fn cell_set_algebra() {
        let a: CellSet = [Cell(1), Cell(2), Cell(3)].into_iter().collect();
        let b: CellSet = [Cell(3), Cell(4)].into_iter().collect();
        assert_eq!(a.intersection(b).len(), 1);
        assert_eq!(a.difference(b).len(), 2);
        assert!(a.difference(a).is_empty());
    }
}
