use isolation_core::{
    encode_layout, parse_layout, BoardDims, Cell, GameState, Isolation, Player, PositionError,
};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

#[test]
fn stuck_player_to_move_is_terminal_and_loses() {
    let position = parse_layout("2../.1./... 2").unwrap();

    assert_eq!(position.active_player(), Player::One);
    assert!(position.legal_actions().is_empty());
    assert!(position.is_terminal());
    assert_eq!(position.utility(Player::One), -1);
    assert_eq!(position.utility(Player::Two), 1);
    assert_eq!(position.winner(), Some(Player::Two));
}

#[test]
fn stuck_opponent_is_not_terminal_while_mover_can_move() {
    // Every jump from Two's cell is blocked, but it is One's turn.
    let position = parse_layout("1..#./.2.../...#./#.#.. 2").unwrap();

    assert!(position.reachable_cells(position.location_of(Player::Two).unwrap()).is_empty());
    assert!(!position.is_terminal());
    assert_eq!(position.utility(Player::One), 0);
    assert_eq!(position.utility(Player::Two), 0);
}

#[test]
fn liberties_ignore_whose_turn_it_is() {
    let position = parse_layout(".../.1./..2 2").unwrap();
    let dims = *position.dims();
    let two = position.location_of(Player::Two).unwrap();
    let expected = [dims.cell(1, 0).unwrap(), dims.cell(0, 1).unwrap()];

    let reachable: Vec<Cell> = position.reachable_cells(two).iter().collect();
    assert_eq!(reachable, expected);
}

#[test]
fn apply_produces_new_state_and_keeps_trail_blocked() {
    let position = parse_layout("1..../...../...../....2 2").unwrap();
    let dims = *position.dims();
    let first = position.legal_actions()[0];
    let next = position.apply(&first);

    assert_eq!(position.ply_count(), 2);
    assert_eq!(next.ply_count(), 3);
    assert_eq!(next.location_of(Player::One), Some(first));
    assert!(next.blocked().contains(dims.cell(0, 0).unwrap()));
    assert!(next.blocked().contains(first));
    assert_eq!(next.active_player(), Player::Two);
}

#[test]
fn try_result_after_game_over_is_an_error() {
    let position = parse_layout("2../.1./... 2").unwrap();
    assert_eq!(position.try_result(Cell(1)), Err(PositionError::GameOver));
}

#[test]
fn layout_round_trips_through_play() {
    let mut rng = StdRng::seed_from_u64(7);
    let mut position = Isolation::new(BoardDims::new(6, 5).unwrap());

    while !position.is_terminal() {
        let encoded = encode_layout(&position);
        assert_eq!(parse_layout(&encoded).unwrap(), position, "layout {encoded}");

        let actions = position.legal_actions();
        let action = *actions.choose(&mut rng).expect("non-terminal state has actions");
        position = position.try_result(action).unwrap();
    }

    let winner = position.winner().unwrap();
    assert_eq!(position.utility(winner), 1);
    assert_eq!(position.utility(winner.opponent()), -1);
}

#[test]
fn random_games_always_end_with_exactly_one_winner() {
    let mut rng = StdRng::seed_from_u64(11);
    for _ in 0..50 {
        let mut position = Isolation::default();
        let mut plies = 0u32;
        while !position.is_terminal() {
            let actions = position.legal_actions();
            position = position.apply(actions.choose(&mut rng).unwrap());
            plies += 1;
        }
        assert!(plies <= 99);
        let total: i32 = Player::ALL.iter().map(|p| position.utility(*p)).sum();
        assert_eq!(total, 0);
    }
}
