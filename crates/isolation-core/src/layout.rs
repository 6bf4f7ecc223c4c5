use std::fmt;

use thiserror::Error;

use crate::board::{BoardDims, BoardError};
use crate::constants::{BLOCKED_CODE, OPEN_CODE};
use crate::position::Isolation;
use crate::types::{CellSet, Player};

/// Empty standard board, player One to move.
pub const STANDARD_LAYOUT: &str = "...........\
/...........\
/...........\
/...........\
/...........\
/...........\
/...........\
/...........\
/........... 0";

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum LayoutError {
    #[error("expected 2 fields, received {0}")]
    FieldCount(usize),
    #[error("row {row} has {found} cells, expected {expected}")]
    RaggedRow {
        row: usize,
        found: usize,
        expected: usize,
    },
    #[error("invalid cell code {code:?} in row {row}")]
    InvalidCode { row: usize, code: char },
    #[error("player {0:?} appears more than once")]
    DuplicatePlayer(Player),
    #[error("ply count {0:?} is not a number")]
    InvalidPly(String),
    #[error("ply {ply} requires {expected} placed players, found {found}")]
    PlacementMismatch {
        ply: u32,
        expected: usize,
        found: usize,
    },
    #[error("board error")]
    Board(#[from] BoardError),
}

/// Parses `<row>/<row>/... <ply>` where rows use `.` open, `#` blocked, `1`/`2` players.
pub fn parse_layout(layout: &str) -> Result<Isolation, LayoutError> {
    let parts: Vec<&str> = layout.split_whitespace().collect();
    if parts.len() != 2 {
        return Err(LayoutError::FieldCount(parts.len()));
    }

    let rows: Vec<&str> = parts[0].split('/').collect();
    let width = rows[0].chars().count();
    for (row, text) in rows.iter().enumerate() {
        let found = text.chars().count();
        if found != width {
            return Err(LayoutError::RaggedRow {
                row,
                found,
                expected: width,
            });
        }
    }
    let dims = BoardDims::new(
        u8::try_from(width).map_err(|_| BoardError::TooLarge(width * rows.len()))?,
        u8::try_from(rows.len()).map_err(|_| BoardError::TooLarge(width * rows.len()))?,
    )?;

    let ply = parts[1]
        .parse::<u32>()
        .map_err(|_| LayoutError::InvalidPly(parts[1].to_string()))?;

    let mut blocked = CellSet::EMPTY;
    let mut locs = [None, None];
    for (y, text) in rows.iter().enumerate() {
        for (x, code) in text.chars().enumerate() {
            // Dimensions were validated above, so the coordinates fit.
            let Some(cell) = dims.cell(x as u8, y as u8) else {
                continue;
            };
            match code {
                OPEN_CODE => {}
                BLOCKED_CODE => blocked = blocked.with(cell),
                _ => {
                    let player =
                        Player::from_code(code).ok_or(LayoutError::InvalidCode { row: y, code })?;
                    if locs[player.index()].replace(cell).is_some() {
                        return Err(LayoutError::DuplicatePlayer(player));
                    }
                    blocked = blocked.with(cell);
                }
            }
        }
    }

    let placed = locs.iter().filter(|loc| loc.is_some()).count();
    let expected = ply.min(2) as usize;
    let order_ok = expected != 1 || locs[Player::One.index()].is_some();
    if placed != expected || !order_ok {
        return Err(LayoutError::PlacementMismatch {
            ply,
            expected,
            found: placed,
        });
    }

    Ok(Isolation::from_parts(dims, blocked, locs, ply))
}

pub fn encode_layout(position: &Isolation) -> String {
    let dims = position.dims();
    let mut out = String::with_capacity(dims.cell_count() + usize::from(dims.height()) + 8);
    for y in 0..dims.height() {
        if y > 0 {
            out.push('/');
        }
        for x in 0..dims.width() {
            let Some(cell) = dims.cell(x, y) else {
                continue;
            };
            let occupant = Player::ALL
                .into_iter()
                .find(|player| position.location(*player) == Some(cell));
            out.push(match occupant {
                Some(player) => player.to_code(),
                None if position.blocked().contains(cell) => BLOCKED_CODE,
                None => OPEN_CODE,
            });
        }
    }
    out.push(' ');
    out.push_str(&position.ply_count().to_string());
    out
}

impl fmt::Display for Isolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&encode_layout(self))
    }
}
