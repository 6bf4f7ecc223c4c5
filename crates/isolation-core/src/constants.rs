/// Width of the standard knight's-isolation board.
pub const DEFAULT_WIDTH: u8 = 11;
/// Height of the standard knight's-isolation board.
pub const DEFAULT_HEIGHT: u8 = 9;

/// Plies played with a random move before search takes over.
pub const OPENING_PLIES: u32 = 2;

/// Knight jumps as `(dx, dy)`, clockwise from north-north-east (`y` grows downwards).
pub const KNIGHT_OFFSETS: [(i8, i8); 8] = [
    (1, -2),
    (2, -1),
    (2, 1),
    (1, 2),
    (-1, 2),
    (-2, 1),
    (-2, -1),
    (-1, -2),
];

pub const OPEN_CODE: char = '.';
pub const BLOCKED_CODE: char = '#';
