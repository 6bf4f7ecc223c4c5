pub mod board;
pub mod constants;
pub mod eval;
pub mod game;
pub mod layout;
pub mod movegen;
pub mod position;
pub mod search;
pub mod types;

pub use board::{BoardDims, BoardError};
pub use constants::{DEFAULT_HEIGHT, DEFAULT_WIDTH, KNIGHT_OFFSETS, OPENING_PLIES};
pub use eval::Evaluator;
pub use game::GameState;
pub use layout::{encode_layout, parse_layout, LayoutError, STANDARD_LAYOUT};
pub use movegen::{knight_destinations, reachable};
pub use position::{Isolation, PositionError};
pub use search::{SearchResult, StopFlag};
pub use types::{Cell, CellSet, Player, MAX_CELLS};
