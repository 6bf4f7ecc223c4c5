#![allow(dead_code)]

use std::sync::Arc;

use isolation_core::{BoardDims, Cell, CellSet, Evaluator, GameState, Player};
use isolation_engine::TieBreak;

/// Plain minimax with no pruning, from `player`'s point of view.
pub fn minimax<S, E>(
    evaluator: &E,
    board: &BoardDims,
    player: Player,
    state: &S,
    depth: u32,
    maximizing: bool,
) -> f64
where
    S: GameState,
    E: Evaluator<S>,
{
    if state.is_terminal() {
        return f64::from(state.utility(player));
    }
    if depth == 0 {
        return evaluator.evaluate(state, player, board);
    }

    let values = state.legal_actions().into_iter().map(|action| {
        minimax(evaluator, board, player, &state.apply(&action), depth - 1, !maximizing)
    });
    if maximizing {
        values.fold(f64::NEG_INFINITY, f64::max)
    } else {
        values.fold(f64::INFINITY, f64::min)
    }
}

/// Unpruned root search using the same depth convention and tie-break as the engine.
pub fn minimax_root<S, E>(
    evaluator: &E,
    board: &BoardDims,
    player: Player,
    state: &S,
    depth: u32,
    tie_break: TieBreak,
) -> (Option<S::Action>, f64)
where
    S: GameState,
    E: Evaluator<S>,
{
    let mut best = (None, f64::NEG_INFINITY);
    for action in state.legal_actions() {
        let value = minimax(
            evaluator,
            board,
            player,
            &state.apply(&action),
            depth.saturating_sub(1),
            false,
        );
        let replace = match tie_break {
            TieBreak::Strict => value > best.1,
            TieBreak::NonStrict => value >= best.1,
        };
        if best.0.is_none() || replace {
            best = (Some(action), value);
        }
    }
    best
}

/// Explicit game tree. Every node carries a static value; childless nodes are terminal and
/// report that value as their utility.
#[derive(Debug, Clone, PartialEq)]
pub struct Node {
    pub value: i32,
    pub children: Vec<Arc<Node>>,
}

impl Node {
    pub fn leaf(value: i32) -> Arc<Self> {
        Arc::new(Self {
            value,
            children: Vec::new(),
        })
    }

    pub fn branch(value: i32, children: Vec<Arc<Node>>) -> Arc<Self> {
        Arc::new(Self { value, children })
    }
}

/// Walks a [`Node`] tree as if it were a game. Values are from player One's point of view.
#[derive(Debug, Clone)]
pub struct TreeState {
    pub node: Arc<Node>,
    pub ply: u32,
}

impl TreeState {
    pub fn new(root: Arc<Node>) -> Self {
        Self { node: root, ply: 0 }
    }
}

fn signed(value: i32, player: Player) -> i32 {
    match player {
        Player::One => value,
        Player::Two => -value,
    }
}

impl GameState for TreeState {
    type Action = usize;

    fn active_player(&self) -> Player {
        if self.ply % 2 == 0 {
            Player::One
        } else {
            Player::Two
        }
    }

    fn location_of(&self, _player: Player) -> Option<Cell> {
        None
    }

    fn ply_count(&self) -> u32 {
        self.ply
    }

    fn legal_actions(&self) -> Vec<usize> {
        (0..self.node.children.len()).collect()
    }

    fn apply(&self, action: &usize) -> Self {
        Self {
            node: Arc::clone(&self.node.children[*action]),
            ply: self.ply + 1,
        }
    }

    fn is_terminal(&self) -> bool {
        self.node.children.is_empty()
    }

    fn utility(&self, player: Player) -> i32 {
        signed(self.node.value, player)
    }

    fn reachable_cells(&self, _cell: Cell) -> CellSet {
        CellSet::EMPTY
    }
}

/// Reads the static value stored on each tree node.
pub struct NodeValue;

impl Evaluator<TreeState> for NodeValue {
    fn evaluate(&self, state: &TreeState, player: Player, _board: &BoardDims) -> f64 {
        f64::from(signed(state.node.value, player))
    }
}
