use battleship_hunt::{
    BoardError, Cell, Difficulty, GameConfig, GameEngine, GameStatus, GuessResult, Turn,
};
use rand::rngs::SmallRng;
use rand::SeedableRng;

#[test]
fn new_game_deals_both_fleets() {
    let mut rng = SmallRng::seed_from_u64(1);
    let engine = GameEngine::new(GameConfig::classic(), &mut rng).unwrap();
    assert_eq!(engine.player_board().grid().count(Cell::Ship), 17);
    assert_eq!(engine.computer_board().grid().count(Cell::Ship), 17);
    assert_eq!(engine.status(), GameStatus::InProgress);
    assert_eq!(engine.turn(), Turn::Player);
}

#[test]
fn invalid_config_is_rejected() {
    let mut rng = SmallRng::seed_from_u64(2);
    let too_long = GameConfig::new(5, vec![6], Difficulty::Easy);
    assert_eq!(
        GameEngine::new(too_long, &mut rng).unwrap_err(),
        BoardError::InvalidShipLength { length: 6, size: 5 }
    );
    let crowded = GameConfig::new(2, vec![2, 2, 2], Difficulty::Easy);
    assert_eq!(
        GameEngine::new(crowded, &mut rng).unwrap_err(),
        BoardError::FleetTooLarge { cells: 6, capacity: 4 }
    );
    let empty = GameConfig::new(0, vec![], Difficulty::Easy);
    assert_eq!(
        GameEngine::new(empty, &mut rng).unwrap_err(),
        BoardError::InvalidBoardSize(0)
    );
}

#[test]
fn turns_alternate_strictly() {
    let mut rng = SmallRng::seed_from_u64(3);
    let mut engine = GameEngine::new(GameConfig::small(), &mut rng).unwrap();

    assert_eq!(engine.opponent_turn(&mut rng).unwrap_err(), BoardError::OutOfTurn);
    assert_eq!(
        engine.player_fire(5, 0).unwrap_err(),
        BoardError::OutOfBounds { row: 5, col: 0 }
    );
    assert_eq!(engine.turn(), Turn::Player, "rejected shot keeps the turn");

    engine.player_fire(0, 0).unwrap();
    assert_eq!(engine.player_fire(0, 1).unwrap_err(), BoardError::OutOfTurn);
    let mv = engine.opponent_turn(&mut rng).unwrap().unwrap();
    assert!(!engine.player_board().grid().is_attackable(mv.coord.0, mv.coord.1));
    assert_eq!(engine.turn(), Turn::Player);
    assert_eq!(engine.shots_fired(), 1);
    assert_eq!(engine.shots_taken(), 1);
}

#[test]
fn sinking_the_computer_fleet_wins() {
    let mut rng = SmallRng::seed_from_u64(4);
    let config = GameConfig::classic().with_difficulty(Difficulty::Easy);
    let mut engine = GameEngine::new(config, &mut rng).unwrap();
    let targets: Vec<_> = engine
        .computer_board()
        .ships()
        .iter()
        .flat_map(|s| s.cells().to_vec())
        .collect();

    let mut sinks = 0;
    for (i, &(r, c)) in targets.iter().enumerate() {
        let result = engine.player_fire(r, c).unwrap();
        assert!(result.is_hit());
        if matches!(result, GuessResult::Sink(_)) {
            sinks += 1;
        }
        if i + 1 < targets.len() {
            // 17 ship cells cannot fall in 16 opponent shots
            engine.opponent_turn(&mut rng).unwrap();
        }
    }
    assert_eq!(sinks, 5);
    assert_eq!(engine.status(), GameStatus::Won);
    assert_eq!(engine.player_fire(0, 0).unwrap_err(), BoardError::GameOver);
}

#[test]
fn hard_opponent_wins_when_player_only_hits_water() {
    let mut rng = SmallRng::seed_from_u64(5);
    let config = GameConfig::new(5, vec![2], Difficulty::Hard);
    let mut engine = GameEngine::new(config, &mut rng).unwrap();
    let water: Vec<_> = engine
        .computer_board()
        .grid()
        .coords()
        .filter(|&(r, c)| engine.computer_board().grid().cell(r, c) == Cell::Water)
        .collect();

    for (r, c) in water {
        assert_eq!(engine.player_fire(r, c).unwrap(), GuessResult::Miss);
        engine.opponent_turn(&mut rng).unwrap().unwrap();
        if engine.status() != GameStatus::InProgress {
            break;
        }
    }
    assert_eq!(engine.status(), GameStatus::Lost);
    assert!(engine.player_board().all_sunk());
    assert!(engine.shots_taken() <= 17);
}

#[test]
fn restart_deals_a_fresh_game() {
    let mut rng = SmallRng::seed_from_u64(6);
    let mut engine = GameEngine::new(GameConfig::standard(), &mut rng).unwrap();
    engine.player_fire(3, 3).unwrap();
    engine.opponent_turn(&mut rng).unwrap();

    engine.restart(&mut rng).unwrap();
    assert_eq!(engine.status(), GameStatus::InProgress);
    assert_eq!(engine.turn(), Turn::Player);
    assert_eq!(engine.shots_fired(), 0);
    for board in [engine.player_board(), engine.computer_board()] {
        assert_eq!(board.grid().count(Cell::Hit) + board.grid().count(Cell::Miss), 0);
        assert_eq!(board.grid().count(Cell::Ship), 9);
    }
    assert!(engine.opponent().search().is_hunting());
    assert_eq!(engine.opponent().search().pool().len(), 25);
}
