#[cfg(not(feature = "std"))]
fn main() {}

#[cfg(feature = "std")]
use tictactoe::{
    init_logging,
    player_cli::{print_board, prompt_command, Command},
    GameEngine, Mark, RandomPlayer, DEFAULT_COMPUTER_DELAY_MS,
};

#[cfg(feature = "std")]
use clap::{Parser, Subcommand};
#[cfg(feature = "std")]
use rand::rngs::SmallRng;
#[cfg(feature = "std")]
use rand::SeedableRng;
#[cfg(feature = "std")]
use tokio::time::Duration;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[cfg(feature = "std")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
#[cfg(feature = "std")]
enum Commands {
    /// Play against the computer in the terminal.
    Play {
        #[arg(long, help = "Fix RNG seed for reproducible games (e.g., --seed 12345)")]
        seed: Option<u64>,
        #[arg(long, default_value_t = DEFAULT_COMPUTER_DELAY_MS, help = "Pause before the computer replies")]
        delay_ms: u64,
    },
    /// Watch the computer play one game against a random opponent.
    Watch {
        #[arg(long, help = "Fix RNG seed for reproducible games (e.g., --seed 12345)")]
        seed: Option<u64>,
        #[arg(long, default_value_t = DEFAULT_COMPUTER_DELAY_MS, help = "Pause between moves")]
        delay_ms: u64,
    },
}

#[cfg(feature = "std")]
fn make_rng(seed: Option<u64>) -> SmallRng {
    if let Some(s) = seed {
        println!("Using fixed seed: {} (game will be reproducible)", s);
        SmallRng::seed_from_u64(s)
    } else {
        let mut seed_rng = rand::rng();
        SmallRng::from_rng(&mut seed_rng)
    }
}

#[cfg(feature = "std")]
#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();

    match cli.command.unwrap_or(Commands::Play {
        seed: None,
        delay_ms: DEFAULT_COMPUTER_DELAY_MS,
    }) {
        Commands::Play { seed, delay_ms } => {
            let rng = make_rng(seed);
            run_play(rng, Duration::from_millis(delay_ms)).await?;
        }
        Commands::Watch { seed, delay_ms } => {
            let rng = make_rng(seed);
            run_watch(rng, Duration::from_millis(delay_ms)).await?;
        }
    }
    Ok(())
}

#[cfg(feature = "std")]
fn show(engine: &GameEngine) {
    println!();
    print_board(engine.board(), engine.winning_line());
    println!("{}", engine.status());
}

#[cfg(feature = "std")]
async fn run_play(mut rng: SmallRng, delay: Duration) -> anyhow::Result<()> {
    let mut engine = GameEngine::new();
    let stdin = std::io::stdin();
    let mut input = stdin.lock();

    loop {
        show(&engine);
        if engine.phase().is_terminal() {
            println!("Game over. Type 'new' for another game or 'quit' to exit.");
        }

        let mv = match prompt_command(&mut input)? {
            Command::Quit => break,
            Command::NewGame => {
                engine.reset();
                continue;
            }
            Command::Place(mv) => mv,
        };

        match engine.play_player(mv.row, mv.col) {
            Ok(outcome) if outcome.result.is_over() => continue,
            Ok(_) => {}
            Err(e) if e.is_invalid_move() => {
                log::debug!("ignoring move {}: {}", mv, e);
                println!("{}: {}", mv, e);
                continue;
            }
            Err(e) => return Err(anyhow::anyhow!(e)),
        }

        show(&engine);
        tokio::time::sleep(delay).await;
        let reply = engine
            .play_computer(&mut rng)
            .map_err(|e| anyhow::anyhow!(e))?;
        println!("Computer plays {}", reply.mv);
    }
    Ok(())
}

#[cfg(feature = "std")]
async fn run_watch(mut rng: SmallRng, delay: Duration) -> anyhow::Result<()> {
    let mut engine = GameEngine::new();
    let mut opponent = RandomPlayer::new();

    while !engine.phase().is_terminal() {
        let outcome = match engine.to_move() {
            Mark::Player => engine.play_turn(&mut opponent, &mut rng),
            Mark::Computer => engine.play_computer(&mut rng),
        }
        .map_err(|e| anyhow::anyhow!(e))?;
        println!("\n{} plays {}", outcome.mark.symbol(), outcome.mv);
        print_board(engine.board(), engine.winning_line());
        tokio::time::sleep(delay).await;
    }
    println!("{}", engine.status());
    Ok(())
}
