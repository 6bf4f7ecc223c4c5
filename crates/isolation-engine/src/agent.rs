use crossbeam::channel::Sender;
use isolation_core::{GameState, StopFlag, OPENING_PLIES};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use tracing::{debug, trace};

use crate::config::AgentConfig;
use crate::iterative_deepening::IterativeDeepening;

/// Receives provisional answers. The last one submitted before the deadline is the move played.
pub trait MoveSink<A> {
    fn submit(&mut self, action: A);
}

impl<A> MoveSink<A> for Sender<A> {
    fn submit(&mut self, action: A) {
        // The receiver is gone once the turn is over; late answers are simply dropped.
        let _ = self.send(action);
    }
}

/// Keeps only the most recent submission.
#[derive(Debug, Clone)]
pub struct LatestMove<A> {
    pub latest: Option<A>,
    pub submissions: usize,
}

impl<A> Default for LatestMove<A> {
    fn default() -> Self {
        Self {
            latest: None,
            submissions: 0,
        }
    }
}

impl<A> MoveSink<A> for LatestMove<A> {
    fn submit(&mut self, action: A) {
        self.latest = Some(action);
        self.submissions += 1;
    }
}

/// Plays random cells for the opening placements, then iterative-deepening alpha-beta.
pub struct SearchAgent {
    config: AgentConfig,
    rng: StdRng,
}

impl SearchAgent {
    pub fn new(config: AgentConfig) -> Self {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self { config, rng }
    }

    pub fn config(&self) -> &AgentConfig {
        &self.config
    }

    /// Chooses a move for the player to move in `state`.
    ///
    /// Every improvement is pushed to `sink` as soon as it exists, so a caller that stops
    /// waiting early still has an answer. The return value is the final submission.
    pub fn get_action<S, K>(&mut self, state: &S, stop: &StopFlag, sink: &mut K) -> Option<S::Action>
    where
        S: GameState,
        K: MoveSink<S::Action>,
    {
        if state.ply_count() < OPENING_PLIES {
            let choice = state.legal_actions().choose(&mut self.rng).cloned();
            if let Some(action) = &choice {
                trace!(ply = state.ply_count(), ?action, "random opening placement");
                sink.submit(action.clone());
            }
            return choice;
        }

        let player = state.active_player();
        let driver = IterativeDeepening::new(
            &self.config.heuristic,
            &self.config.board,
            self.config.search(),
        )
        .with_stop(stop);

        let result = driver.run(state, player, |completed| {
            if let Some(action) = &completed.best_action {
                sink.submit(action.clone());
            }
        });
        debug!(
            heuristic = %self.config.heuristic,
            depth = result.depth,
            nodes = result.nodes,
            score = result.score,
            "search finished"
        );
        result.best_action
    }
}
