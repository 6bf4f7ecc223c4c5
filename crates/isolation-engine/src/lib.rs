pub mod agent;
pub mod alphabeta;
pub mod config;
pub mod harness;
pub mod heuristics;
pub mod iterative_deepening;

pub use agent::{LatestMove, MoveSink, SearchAgent};
pub use alphabeta::{
    max_value, min_value, search, AbortSearch, AlphaBetaConfig, SearchContext, SearchOutcome,
    TieBreak, DEFAULT_MAX_DEPTH,
};
pub use config::{AgentConfig, ConfigError};
pub use harness::{play_match, take_turn, Forfeit, HarnessError, MatchRecord};
pub use heuristics::{
    avoid_wall_score, base_score, combined_score, intersect_score, intersection, liberty_sets,
    wall_discount_score, wall_distance, wall_proximity, Features, Heuristic, UnknownHeuristic,
};
pub use iterative_deepening::IterativeDeepening;
