use std::fs;
use std::path::Path;

use isolation_core::BoardDims;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::alphabeta::{AlphaBetaConfig, TieBreak, DEFAULT_MAX_DEPTH};
use crate::heuristics::Heuristic;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config")]
    Io(#[from] std::io::Error),
    #[error("failed to parse config")]
    Json(#[from] serde_json::Error),
    #[error("{0}")]
    Invalid(String),
}

/// Everything that distinguishes one agent from another.
///
/// Missing fields fall back to the defaults, which reproduce the stock agent: depth 3,
/// `base_score`, non-strict tie-break on the 11x9 board.
///
/// ```
/// use isolation_engine::{AgentConfig, Heuristic, TieBreak};
///
/// let config = AgentConfig::from_json_str(
///     r#"{ "depth_limit": 4, "heuristic": "combined_score", "tie_break": "strict" }"#,
/// )
/// .unwrap();
/// assert_eq!(config.heuristic, Heuristic::CombinedScore);
/// assert_eq!(config.tie_break, TieBreak::Strict);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AgentConfig {
    /// Deepest iteration the driver attempts.
    pub depth_limit: u32,
    pub heuristic: Heuristic,
    pub tie_break: TieBreak,
    pub board: BoardDims,
    /// Seed for the opening-move generator; entropy when absent.
    pub seed: Option<u64>,
}

impl AgentConfig {
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        Self::from_json_str(&fs::read_to_string(path)?)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.depth_limit == 0 {
            return Err(ConfigError::Invalid(
                "depth_limit must be at least 1".to_string(),
            ));
        }
        Ok(())
    }

    pub fn with_heuristic(mut self, heuristic: Heuristic) -> Self {
        self.heuristic = heuristic;
        self
    }

    pub fn with_depth_limit(mut self, depth_limit: u32) -> Self {
        self.depth_limit = depth_limit;
        self
    }

    pub fn with_tie_break(mut self, tie_break: TieBreak) -> Self {
        self.tie_break = tie_break;
        self
    }

    pub fn with_board(mut self, board: BoardDims) -> Self {
        self.board = board;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn search(&self) -> AlphaBetaConfig {
        AlphaBetaConfig {
            max_depth: self.depth_limit,
            tie_break: self.tie_break,
        }
    }
}

impl Default for AgentConfig {
    fn default() -> Self {
        Self {
            depth_limit: DEFAULT_MAX_DEPTH,
            heuristic: Heuristic::BaseScore,
            tie_break: TieBreak::NonStrict,
            board: BoardDims::default(),
            seed: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_object_is_the_default() {
        assert_eq!(AgentConfig::from_json_str("{}").unwrap(), AgentConfig::default());
    }

    #[test]
    fn zero_depth_is_rejected() {
        assert!(matches!(
            AgentConfig::from_json_str(r#"{ "depth_limit": 0 }"#),
            Err(ConfigError::Invalid(_))
        ));
    }

    #[test]
    fn unknown_heuristic_is_a_parse_error() {
        assert!(matches!(
            AgentConfig::from_json_str(r#"{ "heuristic": "deep_blue" }"#),
            Err(ConfigError::Json(_))
        ));
    }

    #[test]
    fn board_dimensions_are_validated() {
        let config = AgentConfig::from_json_str(r#"{ "board": { "width": 5, "height": 7 } }"#)
            .unwrap();
        assert_eq!(config.board, BoardDims::new(5, 7).unwrap());
        assert!(AgentConfig::from_json_str(r#"{ "board": { "width": 20, "height": 20 } }"#).is_err());
    }
}
