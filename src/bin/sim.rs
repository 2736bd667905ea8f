use battleship_hunt::{init_logging, Board, Difficulty, GameConfig, Opponent};
use rand::{rngs::SmallRng, SeedableRng};
use serde_json::json;

/// Plays two scripted opponents against each other on the classic setup and
/// prints the outcome as one JSON object.
fn main() -> anyhow::Result<()> {
    init_logging();
    let args: Vec<String> = std::env::args().collect();
    if !(3..=5).contains(&args.len()) {
        eprintln!(
            "Usage: {} <seed1> <seed2> [difficulty1] [difficulty2]",
            args[0]
        );
        std::process::exit(1);
    }
    let seed1: u64 = args[1].parse()?;
    let seed2: u64 = args[2].parse()?;
    let d1: Difficulty = match args.get(3) {
        Some(s) => s.parse()?,
        None => Difficulty::Hard,
    };
    let d2: Difficulty = match args.get(4) {
        Some(s) => s.parse()?,
        None => Difficulty::Hard,
    };

    let config = GameConfig::classic();
    let size = config.board_size;
    let mut rng1 = SmallRng::seed_from_u64(seed1);
    let mut rng2 = SmallRng::seed_from_u64(seed2);

    // each player's own fleet, attacked by the other side's opponent
    let mut board1 = Board::random(size, &config.ship_lengths, &mut rng1)?;
    let mut board2 = Board::random(size, &config.ship_lengths, &mut rng2)?;
    let mut p1 = Opponent::new(d1, size, &mut rng1);
    let mut p2 = Opponent::new(d2, size, &mut rng2);

    let mut shots1 = 0usize;
    let mut shots2 = 0usize;
    let winner = loop {
        if p1.take_turn(board2.grid_mut(), &mut rng1)?.is_some() {
            shots1 += 1;
        }
        if board2.all_sunk() {
            break Some("player1");
        }
        if p2.take_turn(board1.grid_mut(), &mut rng2)?.is_some() {
            shots2 += 1;
        }
        if board1.all_sunk() {
            break Some("player2");
        }
        if shots1 + shots2 > 2 * size * size {
            break None;
        }
    };

    let result = json!({
        "player1": {"difficulty": d1, "shots": shots1},
        "player2": {"difficulty": d2, "shots": shots2},
        "winner": winner,
    });

    println!("{}", serde_json::to_string(&result)?);
    Ok(())
}
