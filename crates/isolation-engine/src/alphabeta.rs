use isolation_core::{BoardDims, Evaluator, GameState, Player, StopFlag};
use serde::{Deserialize, Serialize};

pub const DEFAULT_MAX_DEPTH: u32 = 3;
const CHECK_INTERVAL_NODES: u64 = 256;

/// Which of several equally scored root moves wins.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TieBreak {
    /// Replace the best move only on strict improvement: the first of equals is kept.
    Strict,
    /// Replace on equal scores too: the last of equals is kept.
    NonStrict,
}

impl TieBreak {
    fn prefers(self, candidate: f64, best: f64) -> bool {
        match self {
            Self::Strict => candidate > best,
            Self::NonStrict => candidate >= best,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AlphaBetaConfig {
    pub max_depth: u32,
    pub tie_break: TieBreak,
}

impl Default for AlphaBetaConfig {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
            tie_break: TieBreak::NonStrict,
        }
    }
}

/// The stop flag was raised; the in-flight search produced no value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AbortSearch;

/// Per-search invariants and bookkeeping. Alpha, beta and depth are always passed explicitly.
pub struct SearchContext<'a, E> {
    evaluator: &'a E,
    board: &'a BoardDims,
    perspective: Player,
    stop: Option<&'a StopFlag>,
    nodes: u64,
}

impl<'a, E> SearchContext<'a, E> {
    pub fn new(evaluator: &'a E, board: &'a BoardDims, perspective: Player) -> Self {
        Self {
            evaluator,
            board,
            perspective,
            stop: None,
            nodes: 0,
        }
    }

    pub fn with_stop(mut self, stop: &'a StopFlag) -> Self {
        self.stop = Some(stop);
        self
    }

    pub fn nodes(&self) -> u64 {
        self.nodes
    }

    fn bump_nodes(&mut self) -> Result<(), AbortSearch> {
        self.nodes = self.nodes.saturating_add(1);
        if self.nodes % CHECK_INTERVAL_NODES == 0 && self.stop.is_some_and(StopFlag::is_stopped) {
            return Err(AbortSearch);
        }
        Ok(())
    }

    /// Exact value at terminal nodes, heuristic value at the horizon.
    fn leaf_value<S>(&self, state: &S, depth: u32) -> Option<f64>
    where
        S: GameState,
        E: Evaluator<S>,
    {
        if state.is_terminal() {
            Some(f64::from(state.utility(self.perspective)))
        } else if depth == 0 {
            Some(self.evaluator.evaluate(state, self.perspective, self.board))
        } else {
            None
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SearchOutcome<A> {
    /// `None` only when the root had no legal action.
    pub best_action: Option<A>,
    pub score: f64,
    pub nodes: u64,
}

/// Value of `state` when the perspective player is to move.
pub fn max_value<S, E>(
    ctx: &mut SearchContext<'_, E>,
    state: &S,
    mut alpha: f64,
    beta: f64,
    depth: u32,
) -> Result<f64, AbortSearch>
where
    S: GameState,
    E: Evaluator<S>,
{
    ctx.bump_nodes()?;
    if let Some(value) = ctx.leaf_value(state, depth) {
        return Ok(value);
    }

    let mut value = f64::NEG_INFINITY;
    for action in state.legal_actions() {
        value = value.max(min_value(ctx, &state.apply(&action), alpha, beta, depth - 1)?);
        if value >= beta {
            return Ok(value);
        }
        alpha = alpha.max(value);
    }
    Ok(value)
}

/// Value of `state` when the opponent of the perspective player is to move.
pub fn min_value<S, E>(
    ctx: &mut SearchContext<'_, E>,
    state: &S,
    alpha: f64,
    mut beta: f64,
    depth: u32,
) -> Result<f64, AbortSearch>
where
    S: GameState,
    E: Evaluator<S>,
{
    ctx.bump_nodes()?;
    if let Some(value) = ctx.leaf_value(state, depth) {
        return Ok(value);
    }

    let mut value = f64::INFINITY;
    for action in state.legal_actions() {
        value = value.min(max_value(ctx, &state.apply(&action), alpha, beta, depth - 1)?);
        if value <= alpha {
            return Ok(value);
        }
        beta = beta.min(value);
    }
    Ok(value)
}

/// Fixed-depth alpha-beta from the root. `depth` counts the root move as the first ply.
pub fn search<S, E>(
    ctx: &mut SearchContext<'_, E>,
    state: &S,
    depth: u32,
    tie_break: TieBreak,
) -> Result<SearchOutcome<S::Action>, AbortSearch>
where
    S: GameState,
    E: Evaluator<S>,
{
    let mut alpha = f64::NEG_INFINITY;
    let beta = f64::INFINITY;
    let mut best_score = f64::NEG_INFINITY;
    let mut best_action = None;

    let child_depth = depth.saturating_sub(1);
    for action in state.legal_actions() {
        let child = state.apply(&action);
        let mut value = min_value(ctx, &child, alpha, beta, child_depth)?;
        if tie_break == TieBreak::NonStrict && best_action.is_some() && value == best_score {
            // Equal to alpha may be a fail-low bound; only an exact tie replaces the best move.
            value = min_value(ctx, &child, f64::NEG_INFINITY, beta, child_depth)?;
        }
        alpha = alpha.max(value);
        if best_action.is_none() || tie_break.prefers(value, best_score) {
            best_score = value;
            best_action = Some(action);
        }
    }

    Ok(SearchOutcome {
        best_action,
        score: best_score,
        nodes: ctx.nodes(),
    })
}
