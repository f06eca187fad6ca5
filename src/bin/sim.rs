#[cfg(not(feature = "std"))]
fn main() {}

/// Name to show in usage text. The argument list may be empty.
#[cfg(feature = "std")]
fn program_name(args: &[String]) -> &str {
    args.first().map_or("sim", String::as_str)
}

#[cfg(feature = "std")]
fn main() -> anyhow::Result<()> {
    use rand::{rngs::SmallRng, SeedableRng};
    use seabattle::{init_logging, random_board, AiPlayer, Game, GameConfig, Side};
    use serde_json::json;

    init_logging();
    let args: Vec<String> = std::env::args().collect();
    if args.len() != 3 {
        eprintln!("Usage: {} <seed1> <seed2>", program_name(&args));
        std::process::exit(1);
    }
    let seed1: u64 = args[1].parse()?;
    let seed2: u64 = args[2].parse()?;

    let config = GameConfig::default();
    let mut rng1 = SmallRng::seed_from_u64(seed1);
    let mut rng2 = SmallRng::seed_from_u64(seed2);
    let board1 = random_board(&mut rng1, &config);
    let board2 = random_board(&mut rng2, &config);

    let mut game = Game::new(
        board1,
        Box::new(AiPlayer::new(rng1, config.board_size)),
        board2,
        Box::new(AiPlayer::new(rng2, config.board_size)),
        &config,
    )?;
    let winner = game.run()?;

    let result = json!({
        "player1": {
            "shots": game.shots_fired(Side::A),
            "destroyed": game.board(Side::B).destroyed_count(),
        },
        "player2": {
            "shots": game.shots_fired(Side::B),
            "destroyed": game.board(Side::A).destroyed_count(),
        },
        "winner": match winner {
            Side::A => "player1",
            Side::B => "player2",
        },
    });

    println!("{}", serde_json::to_string(&result)?);
    Ok(())
}

#[cfg(all(test, feature = "std"))]
mod tests {
    use super::program_name;

    #[test]
    fn program_name_falls_back_without_argv() {
        assert_eq!(program_name(&[]), "sim");
        assert_eq!(program_name(&["./sim".to_string()]), "./sim");
    }
}
