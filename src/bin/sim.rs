#[cfg(not(feature = "std"))]
fn main() {}

#[cfg(feature = "std")]
use rand::{rngs::SmallRng, SeedableRng};
#[cfg(feature = "std")]
use serde_json::json;
#[cfg(feature = "std")]
use tictactoe::{init_logging, GameEngine, GamePhase, Mark, RandomPlayer};

/// Play one game of the heuristic computer against a random opponent.
#[cfg(feature = "std")]
fn play_one(engine: &mut GameEngine, rng: &mut SmallRng) -> anyhow::Result<GamePhase> {
    let mut opponent = RandomPlayer::new();
    engine.reset();
    while !engine.phase().is_terminal() {
        let turn = match engine.to_move() {
            Mark::Player => engine.play_turn(&mut opponent, rng),
            Mark::Computer => engine.play_computer(rng),
        };
        turn.map_err(|e| anyhow::anyhow!(e))?;
    }
    Ok(engine.phase())
}

#[cfg(feature = "std")]
fn main() -> anyhow::Result<()> {
    init_logging();
    let args: Vec<String> = std::env::args().collect();
    if args.len() != 3 {
        eprintln!("Usage: {} <games> <seed>", args[0]);
        std::process::exit(1);
    }
    let games: usize = args[1].parse()?;
    let seed: u64 = args[2].parse()?;

    let mut rng = SmallRng::seed_from_u64(seed);
    let mut engine = GameEngine::new();
    let (mut player_wins, mut computer_wins, mut draws) = (0usize, 0usize, 0usize);

    for _ in 0..games {
        match play_one(&mut engine, &mut rng)? {
            GamePhase::PlayerWon => player_wins += 1,
            GamePhase::ComputerWon => computer_wins += 1,
            GamePhase::Draw => draws += 1,
            other => anyhow::bail!("game stopped in non-terminal phase {:?}", other),
        }
    }

    let result = json!({
        "games": games,
        "player_wins": player_wins,
        "computer_wins": computer_wins,
        "draws": draws,
    });

    println!("{}", serde_json::to_string(&result)?);
    Ok(())
}
