use std::io::{self, BufRead, Write};

use battleship_hunt::{
    describe_search, init_logging, print_player_view, Board, BoardView, Difficulty, GameConfig,
    GameEngine, GameStatus, Opponent, CLASSIC_BOARD_SIZE,
};
use clap::{Parser, Subcommand, ValueEnum};
use rand::rngs::SmallRng;
use rand::SeedableRng;
use serde::Serialize;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum Level {
    Easy,
    Medium,
    Hard,
}

impl From<Level> for Difficulty {
    fn from(level: Level) -> Self {
        match level {
            Level::Easy => Difficulty::Easy,
            Level::Medium => Difficulty::Medium,
            Level::Hard => Difficulty::Hard,
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Play against the opponent, entering shots as `row col` on stdin.
    Play {
        #[arg(long, default_value_t = CLASSIC_BOARD_SIZE)]
        size: usize,
        #[arg(long, value_delimiter = ',', default_value = "5,4,3,3,2")]
        ships: Vec<usize>,
        #[arg(long, value_enum, default_value_t = Level::Hard)]
        difficulty: Level,
        #[arg(long, help = "Fix RNG seed for reproducible games (e.g., --seed 12345)")]
        seed: Option<u64>,
    },
    /// Watch the opponent sink a randomly placed fleet, one turn at a time.
    Watch {
        #[arg(long, default_value_t = CLASSIC_BOARD_SIZE)]
        size: usize,
        #[arg(long, value_delimiter = ',', default_value = "5,4,3,3,2")]
        ships: Vec<usize>,
        #[arg(long, value_enum, default_value_t = Level::Hard)]
        difficulty: Level,
        #[arg(long, help = "Fix RNG seed for reproducible games (e.g., --seed 12345)")]
        seed: Option<u64>,
    },
    /// Measure how many shots each difficulty needs to sink a fleet.
    Bench {
        #[arg(long, default_value_t = CLASSIC_BOARD_SIZE)]
        size: usize,
        #[arg(long, value_delimiter = ',', default_value = "5,4,3,3,2")]
        ships: Vec<usize>,
        #[arg(long, default_value_t = 100)]
        games: usize,
        #[arg(long, help = "Fix RNG seed for reproducible games (e.g., --seed 12345)")]
        seed: Option<u64>,
    },
}

#[derive(Serialize)]
struct BenchSummary {
    difficulty: Difficulty,
    games: usize,
    mean_shots: f64,
    min_shots: usize,
    max_shots: usize,
}

fn make_rng(seed: Option<u64>) -> SmallRng {
    match seed {
        Some(s) => SmallRng::seed_from_u64(s),
        None => {
            let mut seed_rng = rand::rng();
            SmallRng::from_rng(&mut seed_rng)
        }
    }
}

/// Parse `row col` or `row,col`.
fn parse_target(line: &str) -> Option<(usize, usize)> {
    let mut parts = line
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter(|p| !p.is_empty());
    let row = parts.next()?.parse().ok()?;
    let col = parts.next()?.parse().ok()?;
    if parts.next().is_some() {
        return None;
    }
    Some((row, col))
}

fn play(config: GameConfig, rng: &mut SmallRng) -> anyhow::Result<()> {
    let mut engine = GameEngine::new(config, rng)?;
    let mut lines = io::stdin().lock().lines();
    while engine.status() == GameStatus::InProgress {
        print_player_view(&engine);
        print!("\nYour shot (row col): ");
        io::stdout().flush()?;
        let Some(line) = lines.next() else {
            println!("\nGame abandoned.");
            return Ok(());
        };
        let Some((row, col)) = parse_target(&line?) else {
            println!("Enter two numbers, e.g. `3 4`.");
            continue;
        };
        match engine.player_fire(row, col) {
            Ok(result) => println!("You fired at ({}, {}): {:?}", row, col, result),
            Err(e) => {
                println!("{}", e);
                continue;
            }
        }
        if engine.status() != GameStatus::InProgress {
            break;
        }
        if let Some(mv) = engine.opponent_turn(rng)? {
            println!(
                "Opponent fired at {:?}: {:?}, {}",
                mv.coord,
                mv.result,
                describe_search(engine.opponent())
            );
        }
    }

    print_player_view(&engine);
    match engine.status() {
        GameStatus::Won => println!(
            "\nYou sank the whole fleet in {} shots.",
            engine.shots_fired()
        ),
        GameStatus::Lost => println!(
            "\nThe opponent sank your fleet in {} shots.",
            engine.shots_taken()
        ),
        GameStatus::InProgress => {}
    }
    Ok(())
}

/// Shots the opponent needs to sink `board`'s whole fleet.
fn shots_to_sink(
    opponent: &mut Opponent,
    board: &mut Board,
    rng: &mut SmallRng,
) -> anyhow::Result<usize> {
    let mut shots = 0;
    while !board.all_sunk() {
        if opponent.take_turn(board.grid_mut(), rng)?.is_none() {
            anyhow::bail!("opponent ran out of cells before sinking the fleet");
        }
        shots += 1;
    }
    Ok(shots)
}

fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();

    match cli.command {
        Commands::Play {
            size,
            ships,
            difficulty,
            seed,
        } => {
            let mut rng = make_rng(seed);
            play(GameConfig::new(size, ships, difficulty.into()), &mut rng)?;
        }
        Commands::Watch {
            size,
            ships,
            difficulty,
            seed,
        } => {
            let config = GameConfig::new(size, ships, difficulty.into());
            config.validate()?;
            if let Some(s) = seed {
                println!("Using fixed seed: {} (game will be reproducible)", s);
            }
            let mut rng = make_rng(seed);
            let mut board = Board::random(size, &config.ship_lengths, &mut rng)?;
            let mut opponent = Opponent::new(config.difficulty, size, &mut rng);

            println!("{} opponent vs fleet {:?}", config.difficulty, config.ship_lengths);
            println!("{}", BoardView::revealed(board.grid()));
            let mut shots = 0;
            while !board.all_sunk() {
                let Some(report) = opponent.take_turn(board.grid_mut(), &mut rng)? else {
                    break;
                };
                shots += 1;
                let result = board.record_strike(report.coord, report.result);
                println!(
                    "\nShot {}: {:?} -> {:?}, {}",
                    shots,
                    report.coord,
                    result,
                    describe_search(&opponent)
                );
                println!("{}", BoardView::revealed(board.grid()));
            }
            println!("\nFleet sunk after {} shots.", shots);
        }
        Commands::Bench {
            size,
            ships,
            games,
            seed,
        } => {
            let config = GameConfig::new(size, ships, Difficulty::Hard);
            config.validate()?;
            anyhow::ensure!(games > 0, "--games must be at least 1");
            let mut rng = make_rng(seed);

            let mut summaries = Vec::new();
            for difficulty in Difficulty::ALL {
                let mut results = Vec::with_capacity(games);
                for _ in 0..games {
                    let mut board = Board::random(size, &config.ship_lengths, &mut rng)?;
                    let mut opponent = Opponent::new(difficulty, size, &mut rng);
                    results.push(shots_to_sink(&mut opponent, &mut board, &mut rng)?);
                }
                let total: usize = results.iter().sum();
                summaries.push(BenchSummary {
                    difficulty,
                    games,
                    mean_shots: total as f64 / games as f64,
                    min_shots: results.iter().copied().min().unwrap_or(0),
                    max_shots: results.iter().copied().max().unwrap_or(0),
                });
            }
            println!("{}", serde_json::to_string_pretty(&summaries)?);
        }
    }
    Ok(())
}
