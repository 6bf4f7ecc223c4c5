//! Liberty-based static evaluation.
//!
//! Every heuristic starts from the two players' liberty sets (one knight hop, open cells
//! only) and combines their sizes and overlap, optionally weighted by how close the player
//! to move is to the board edge.

use std::fmt;
use std::str::FromStr;

use isolation_core::{BoardDims, CellSet, Evaluator, GameState, Player};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Distance from the wall at which own mobility is weighted double.
const SAFE_WALL_DISTANCE: i32 = 2;

/// Columns within this many cells of the left edge count as near the wall.
const LEFT_MARGIN: u8 = 3;
/// Rows within this many cells of the top edge count as near the wall.
const TOP_MARGIN: u8 = 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Heuristic {
    #[default]
    BaseScore,
    IntersectScore,
    AvoidWallScore,
    CombinedScore,
    WallDiscountScore,
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("unknown heuristic {0:?}")]
pub struct UnknownHeuristic(pub String);

impl Heuristic {
    pub const ALL: [Self; 5] = [
        Self::BaseScore,
        Self::IntersectScore,
        Self::AvoidWallScore,
        Self::CombinedScore,
        Self::WallDiscountScore,
    ];

    pub const fn name(self) -> &'static str {
        match self {
            Self::BaseScore => "base_score",
            Self::IntersectScore => "intersect_score",
            Self::AvoidWallScore => "avoid_wall_score",
            Self::CombinedScore => "combined_score",
            Self::WallDiscountScore => "wall_discount_score",
        }
    }

    /// Applies this heuristic's formula to pre-computed features.
    pub fn score(self, f: &Features) -> f64 {
        let own = f.own as f64;
        let opp = f.opp as f64;
        let shared = f.shared as f64;
        let away_from_wall = f.wall_distance >= SAFE_WALL_DISTANCE;

        match self {
            Self::BaseScore => own - opp,
            Self::IntersectScore => own - 2.0 * opp + shared,
            Self::AvoidWallScore if away_from_wall => 2.0 * own - opp + shared,
            Self::AvoidWallScore => own - opp + shared,
            Self::CombinedScore if away_from_wall => 2.0 * own - 2.0 * opp + shared,
            Self::CombinedScore => own - 2.0 * opp + shared,
            Self::WallDiscountScore => own / f64::from(f.wall_proximity + 1) - opp,
        }
    }
}

impl fmt::Display for Heuristic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Heuristic {
    type Err = UnknownHeuristic;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase().replace('-', "_");
        Self::ALL
            .into_iter()
            .find(|heuristic| heuristic.name() == normalized)
            .ok_or_else(|| UnknownHeuristic(s.to_string()))
    }
}

impl<S: GameState> Evaluator<S> for Heuristic {
    fn evaluate(&self, state: &S, player: Player, board: &BoardDims) -> f64 {
        self.score(&Features::extract(state, player, board))
    }
}

/// Inputs shared by every heuristic.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Features {
    pub own: usize,
    pub opp: usize,
    pub shared: usize,
    pub wall_distance: i32,
    pub wall_proximity: u32,
}

impl Features {
    pub fn extract<S: GameState>(state: &S, player: Player, board: &BoardDims) -> Self {
        let (own, opp) = liberty_sets(state, player);
        Self::from_sets(own, opp, wall_distance(state, board), wall_proximity(state, board))
    }

    pub fn from_sets(own: CellSet, opp: CellSet, wall_distance: i32, wall_proximity: u32) -> Self {
        Self {
            own: own.len(),
            opp: opp.len(),
            shared: intersection(own, opp),
            wall_distance,
            wall_proximity,
        }
    }
}

/// `(own, opp)` liberty sets from `player`'s point of view. An unplaced player has none.
pub fn liberty_sets<S: GameState>(state: &S, player: Player) -> (CellSet, CellSet) {
    let liberties = |p: Player| {
        state
            .location_of(p)
            .map_or(CellSet::EMPTY, |cell| state.reachable_cells(cell))
    };
    (liberties(player), liberties(player.opponent()))
}

pub fn intersection(own: CellSet, opp: CellSet) -> usize {
    own.intersection(opp).len()
}

/// `min(x, W+1-x, y, H-1-y)` for the cell of the player to move.
pub fn wall_distance<S: GameState>(state: &S, board: &BoardDims) -> i32 {
    let Some(cell) = state.location_of(state.active_player()) else {
        return 0;
    };
    let (x, y) = board.coords(cell);
    let (x, y) = (i32::from(x), i32::from(y));
    let (w, h) = (i32::from(board.width()), i32::from(board.height()));
    x.min(w + 1 - x).min(y).min(h - 1 - y)
}

/// Number of axes (0..=2) on which the player to move sits within the wall margins.
pub fn wall_proximity<S: GameState>(state: &S, board: &BoardDims) -> u32 {
    let Some(cell) = state.location_of(state.active_player()) else {
        return 0;
    };
    let (x, y) = board.coords(cell);
    let (x, y) = (i32::from(x), i32::from(y));
    let (w, h) = (i32::from(board.width()), i32::from(board.height()));

    let near_side = x <= i32::from(LEFT_MARGIN) || x >= w - 2;
    let near_end = y <= i32::from(TOP_MARGIN) || y >= h - 3;
    u32::from(near_side) + u32::from(near_end)
}

pub fn base_score<S: GameState>(state: &S, player: Player, board: &BoardDims) -> f64 {
    Heuristic::BaseScore.evaluate(state, player, board)
}

pub fn intersect_score<S: GameState>(state: &S, player: Player, board: &BoardDims) -> f64 {
    Heuristic::IntersectScore.evaluate(state, player, board)
}

pub fn avoid_wall_score<S: GameState>(state: &S, player: Player, board: &BoardDims) -> f64 {
    Heuristic::AvoidWallScore.evaluate(state, player, board)
}

pub fn combined_score<S: GameState>(state: &S, player: Player, board: &BoardDims) -> f64 {
    Heuristic::CombinedScore.evaluate(state, player, board)
}

pub fn wall_discount_score<S: GameState>(state: &S, player: Player, board: &BoardDims) -> f64 {
    Heuristic::WallDiscountScore.evaluate(state, player, board)
}
