use battleship_hunt::{
    AttackResult, Board, BoardError, Cell, GuessResult, Orientation, ShipState, CLASSIC_FLEET,
};
use rand::rngs::SmallRng;
use rand::SeedableRng;

#[test]
fn manual_place_and_fire_until_sink() {
    let mut board = Board::new(5);
    board.place_at(0, 0, 3, Orientation::Horizontal).unwrap();
    board.place_at(2, 4, 2, Orientation::Vertical).unwrap();

    assert_eq!(board.fire(0, 0).unwrap(), GuessResult::Hit);
    assert_eq!(board.fire(0, 1).unwrap(), GuessResult::Hit);
    assert_eq!(board.fire(1, 1).unwrap(), GuessResult::Miss);
    assert_eq!(board.fire(0, 2).unwrap(), GuessResult::Sink(0));
    assert_eq!(
        board.ship_states(),
        vec![
            ShipState { length: 3, sunk: true },
            ShipState { length: 2, sunk: false },
        ]
    );
    assert!(!board.all_sunk());

    assert_eq!(
        board.fire(0, 2).unwrap_err(),
        BoardError::AlreadyTried { row: 0, col: 2 }
    );

    assert_eq!(board.fire(2, 4).unwrap(), GuessResult::Hit);
    assert_eq!(board.fire(3, 4).unwrap(), GuessResult::Sink(1));
    assert!(board.all_sunk());
}

#[test]
fn record_strike_reports_sink_for_direct_grid_attacks() {
    let mut board = Board::new(5);
    board.place_at(1, 1, 2, Orientation::Vertical).unwrap();

    let first = battleship_hunt::attack(board.grid_mut(), 1, 1).unwrap();
    assert_eq!(board.record_strike((1, 1), first), GuessResult::Hit);
    let second = battleship_hunt::attack(board.grid_mut(), 2, 1).unwrap();
    assert_eq!(board.record_strike((2, 1), second), GuessResult::Sink(0));
    assert_eq!(board.record_strike((4, 4), AttackResult::Miss), GuessResult::Miss);
}

#[test]
fn random_board_places_the_whole_fleet() {
    let mut rng = SmallRng::seed_from_u64(42);
    let board = Board::random(10, &CLASSIC_FLEET, &mut rng).unwrap();
    assert_eq!(board.ships().len(), CLASSIC_FLEET.len());
    assert_eq!(board.grid().count(Cell::Ship), 17);
    assert!(board.ship_states().iter().all(|s| !s.sunk));
}

#[test]
fn random_board_rejects_impossible_fleet() {
    let mut rng = SmallRng::seed_from_u64(3);
    let err = Board::random(3, &[3, 3, 3, 3], &mut rng).unwrap_err();
    assert_eq!(err, BoardError::UnableToPlaceShip { length: 3 });
}
