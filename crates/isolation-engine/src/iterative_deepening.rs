use isolation_core::{BoardDims, Evaluator, GameState, Player, SearchResult, StopFlag};
use tracing::debug;

use crate::alphabeta::{search, AbortSearch, AlphaBetaConfig, SearchContext};

/// Re-runs fixed-depth search at depths `1..=max_depth`, keeping the last completed answer.
///
/// There is no clock in here. Whoever owns the [`StopFlag`] decides when to give up; an
/// interrupted depth is discarded and never overwrites the previous result.
pub struct IterativeDeepening<'a, E> {
    evaluator: &'a E,
    board: &'a BoardDims,
    config: AlphaBetaConfig,
    stop: Option<&'a StopFlag>,
}

impl<'a, E> IterativeDeepening<'a, E> {
    pub fn new(evaluator: &'a E, board: &'a BoardDims, config: AlphaBetaConfig) -> Self {
        Self {
            evaluator,
            board,
            config,
            stop: None,
        }
    }

    pub fn with_stop(mut self, stop: &'a StopFlag) -> Self {
        self.stop = Some(stop);
        self
    }

    /// Searches `state` for `player`, calling `on_depth` after every completed depth.
    pub fn run<S, F>(&self, state: &S, player: Player, mut on_depth: F) -> SearchResult<S::Action>
    where
        S: GameState,
        E: Evaluator<S>,
        F: FnMut(&SearchResult<S::Action>),
    {
        let mut best = SearchResult::empty();
        let mut nodes = 0u64;

        for depth in 1..=self.config.max_depth {
            if self.stop.is_some_and(StopFlag::is_stopped) {
                debug!(depth, "stop requested before depth started");
                break;
            }

            let mut ctx = SearchContext::new(self.evaluator, self.board, player);
            if let Some(stop) = self.stop {
                ctx = ctx.with_stop(stop);
            }

            match search(&mut ctx, state, depth, self.config.tie_break) {
                Ok(outcome) => {
                    nodes = nodes.saturating_add(outcome.nodes);
                    best = SearchResult {
                        best_action: outcome.best_action,
                        score: outcome.score,
                        depth,
                        nodes,
                    };
                    debug!(depth, score = best.score, nodes, "depth complete");
                    on_depth(&best);
                }
                Err(AbortSearch) => {
                    nodes = nodes.saturating_add(ctx.nodes());
                    debug!(depth, nodes, "depth aborted");
                    break;
                }
            }
        }

        best.nodes = nodes;
        best
    }
}

#[cfg(test)]
mod tests {
    use isolation_core::{Cell, Isolation};

    use super::*;
    use crate::alphabeta::TieBreak;
    use crate::heuristics::Heuristic;

    fn opened() -> Isolation {
        Isolation::default().result(Cell(48)).result(Cell(60))
    }

    #[test]
    fn reports_every_depth_in_order() {
        let position = opened();
        let board = *position.dims();
        let config = AlphaBetaConfig {
            max_depth: 3,
            tie_break: TieBreak::Strict,
        };
        let driver = IterativeDeepening::new(&Heuristic::IntersectScore, &board, config);

        let mut depths = Vec::new();
        let result = driver.run(&position, Player::One, |completed| depths.push(completed.depth));

        assert_eq!(depths, vec![1, 2, 3]);
        assert_eq!(result.depth, 3);
        assert!(position.actions().contains(&result.best_action.unwrap()));
    }

    #[test]
    fn stopped_before_start_completes_nothing() {
        let position = opened();
        let board = *position.dims();
        let stop = StopFlag::new();
        stop.stop();
        let driver = IterativeDeepening::new(&Heuristic::BaseScore, &board, AlphaBetaConfig::default())
            .with_stop(&stop);

        let mut calls = 0;
        let result = driver.run(&position, Player::One, |_| calls += 1);

        assert_eq!(calls, 0);
        assert_eq!(result.depth, 0);
        assert_eq!(result.best_action, None);
    }
}
