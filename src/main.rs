#[cfg(not(feature = "std"))]
fn main() {}

#[cfg(feature = "std")]
use seabattle::{prelude::*, BoardView};

#[cfg(feature = "std")]
use clap::{Parser, Subcommand, ValueEnum};
#[cfg(feature = "std")]
use rand::rngs::SmallRng;
#[cfg(feature = "std")]
use rand::SeedableRng;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[cfg(feature = "std")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(ValueEnum, Clone, Copy, Debug)]
#[cfg(feature = "std")]
enum PlayerType {
    Human,
    Computer,
}

#[derive(Subcommand)]
#[cfg(feature = "std")]
enum Commands {
    /// Play against the computer.
    Play {
        #[arg(long, help = "Fix RNG seed for reproducible games (e.g., --seed 12345)")]
        seed: Option<u64>,
        #[arg(long, default_value_t = seabattle::BOARD_SIZE)]
        size: usize,
        #[arg(long, value_enum, default_value_t = PlayerType::Human)]
        first: PlayerType,
    },
    /// Watch the computer play against itself.
    Auto {
        #[arg(long, help = "Fix RNG seed for reproducible games (e.g., --seed 12345)")]
        seed: Option<u64>,
        #[arg(long, default_value_t = seabattle::BOARD_SIZE)]
        size: usize,
    },
}

#[cfg(feature = "std")]
fn make_rng(seed: Option<u64>) -> SmallRng {
    match seed {
        Some(s) => {
            println!("Using fixed seed: {} (game will be reproducible)", s);
            SmallRng::seed_from_u64(s)
        }
        None => {
            let mut seed_rng = rand::rng();
            SmallRng::from_rng(&mut seed_rng)
        }
    }
}

#[cfg(feature = "std")]
fn greeting() {
    println!("-------------------");
    println!("    NAVAL BATTLE   ");
    println!("-------------------");
    println!(" input format: x y ");
    println!(" x - row number    ");
    println!(" y - column number ");
}

#[cfg(feature = "std")]
fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();

    match cli.command {
        Commands::Play { seed, size, first } => {
            let mut config = GameConfig::with_board_size(size);
            config.first = match first {
                PlayerType::Human => Side::A,
                PlayerType::Computer => Side::B,
            };
            config.validate()?;
            let mut rng = make_rng(seed);
            let human_board = random_board(&mut rng, &config);
            let computer_board = random_board(&mut rng, &config);
            let ai_rng = SmallRng::seed_from_u64(rand::Rng::random(&mut rng));

            greeting();
            let mut game = Game::new(
                human_board,
                Box::new(CliPlayer::stdio()),
                computer_board,
                Box::new(AiPlayer::new(ai_rng, size)),
                &config,
            )?;
            loop {
                print_boards(&game);
                match game.state() {
                    TurnState::TurnOf(Side::A) => println!("Player's turn!"),
                    TurnState::TurnOf(Side::B) => println!("Opponent's turn!"),
                    TurnState::Won(_) => break,
                }
                game.play_turn()?;
                if let Some(shot) = game.last_shot().filter(|s| s.side == Side::B) {
                    println!("Opponent fires at: {} ({:?})", shot.target, shot.outcome);
                }
            }
            println!("{}", "-".repeat(20));
            match game.state().winner() {
                Some(Side::A) => println!("Player wins!"),
                Some(Side::B) => println!("Opponent wins!"),
                None => {}
            }
        }
        Commands::Auto { seed, size } => {
            let config = GameConfig::with_board_size(size);
            config.validate()?;
            let mut rng = make_rng(seed);
            let rng_a = SmallRng::seed_from_u64(rand::Rng::random(&mut rng));
            let rng_b = SmallRng::seed_from_u64(rand::Rng::random(&mut rng));
            let mut game = Game::with_random_boards(
                &mut rng,
                Box::new(AiPlayer::new(rng_a, size)),
                Box::new(AiPlayer::new(rng_b, size)),
                &config,
            )?;
            let winner = game.run()?;
            for side in [Side::A, Side::B] {
                println!("Board of {:?}:", side);
                println!("{}", BoardView::revealed(game.board(side)));
            }
            println!(
                "{:?} wins ({} shots vs {})",
                winner,
                game.shots_fired(winner),
                game.shots_fired(winner.opponent())
            );
        }
    }
    Ok(())
}
