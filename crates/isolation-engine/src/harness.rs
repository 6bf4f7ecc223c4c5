use std::thread;
use std::time::{Duration, Instant};

use crossbeam::channel::{self, RecvTimeoutError};
use isolation_core::{
    encode_layout, BoardDims, Cell, Isolation, Player, PositionError, StopFlag,
};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{info, warn};

use crate::agent::SearchAgent;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum HarnessError {
    #[error("no action submitted within {0:?}")]
    NoActionSubmitted(Duration),
    #[error("agent panicked while searching")]
    AgentPanicked,
    #[error("agent is configured for a {agent:?} board but the position is {state:?}")]
    BoardMismatch { agent: BoardDims, state: BoardDims },
}

fn check_board(agent: &SearchAgent, state: &Isolation) -> Result<(), HarnessError> {
    let (agent, state) = (agent.config().board, *state.dims());
    if agent != state {
        return Err(HarnessError::BoardMismatch { agent, state });
    }
    Ok(())
}

/// Runs one turn of `agent` on a worker thread and returns the last move it submitted in time.
///
/// The stop flag is raised once the budget expires or the agent returns, whichever comes
/// first. Submissions arriving after the deadline are ignored. An agent configured for a
/// different board than `state` is rejected before it runs.
pub fn take_turn(
    agent: &mut SearchAgent,
    state: &Isolation,
    budget: Duration,
) -> Result<Cell, HarnessError> {
    check_board(agent, state)?;
    let stop = StopFlag::new();
    let (tx, rx) = channel::unbounded::<Cell>();
    let deadline = Instant::now() + budget;

    thread::scope(|scope| {
        let worker_stop = stop.clone();
        let worker = scope.spawn(move || {
            let mut tx = tx;
            agent.get_action(state, &worker_stop, &mut tx);
        });

        let mut latest = None;
        loop {
            match rx.recv_deadline(deadline) {
                Ok(action) => latest = Some(action),
                Err(RecvTimeoutError::Timeout | RecvTimeoutError::Disconnected) => break,
            }
        }
        stop.stop();

        if worker.join().is_err() {
            return Err(HarnessError::AgentPanicked);
        }
        latest.ok_or(HarnessError::NoActionSubmitted(budget))
    })
}

/// Why a game ended before a player ran out of moves.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "reason", rename_all = "snake_case")]
pub enum Forfeit {
    Timeout { player: Player },
    IllegalMove { player: Player, cell: Cell },
    Crashed { player: Player },
}

impl Forfeit {
    pub fn player(&self) -> Player {
        match self {
            Self::Timeout { player }
            | Self::IllegalMove { player, .. }
            | Self::Crashed { player } => *player,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchRecord {
    pub winner: Player,
    pub plies: u32,
    pub moves: Vec<Cell>,
    pub forfeit: Option<Forfeit>,
    pub final_layout: String,
}

/// Plays `initial` to completion. `agents[0]` plays One and `agents[1]` plays Two.
///
/// Fails up front when either agent is configured for a different board than `initial`.
pub fn play_match(
    mut agents: [&mut SearchAgent; 2],
    initial: Isolation,
    budget: Duration,
) -> Result<MatchRecord, HarnessError> {
    for agent in &agents {
        check_board(agent, &initial)?;
    }

    let mut state = initial;
    let mut moves = Vec::new();
    let mut forfeit = None;

    while !state.is_game_over() {
        let player = state.player();
        let agent = &mut *agents[player.index()];

        let cell = match take_turn(agent, &state, budget) {
            Ok(cell) => cell,
            Err(HarnessError::NoActionSubmitted(_)) => {
                warn!(?player, ply = state.ply_count(), "no move before deadline");
                forfeit = Some(Forfeit::Timeout { player });
                break;
            }
            Err(HarnessError::AgentPanicked) => {
                warn!(?player, ply = state.ply_count(), "agent crashed");
                forfeit = Some(Forfeit::Crashed { player });
                break;
            }
            Err(err @ HarnessError::BoardMismatch { .. }) => return Err(err),
        };

        match state.try_result(cell) {
            Ok(next) => {
                moves.push(cell);
                state = next;
            }
            Err(PositionError::OffBoard(cell) | PositionError::IllegalMove(cell)) => {
                warn!(?player, ?cell, ply = state.ply_count(), "illegal move");
                forfeit = Some(Forfeit::IllegalMove { player, cell });
                break;
            }
            Err(PositionError::GameOver) => break,
        }
    }

    let winner = match &forfeit {
        Some(reason) => reason.player().opponent(),
        None => state.player().opponent(),
    };
    info!(?winner, plies = state.ply_count(), forfeit = forfeit.is_some(), "game over");

    Ok(MatchRecord {
        winner,
        plies: state.ply_count(),
        moves,
        forfeit,
        final_layout: encode_layout(&state),
    })
}
