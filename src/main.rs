use std::error::Error;
use std::io;

use clap::Parser;
use log::{info, LevelFilter};

use chess_puzzle::console::console_top::{run_stdio_loop, ConsoleState};
use chess_puzzle::game_state::chess_rules::GameConfig;
use chess_puzzle::game_state::chess_types::PromotionPiece;
use chess_puzzle::puzzle::puzzle_goal::PuzzleGoal;

/// Chess puzzle console: set up a position, then play it move by move.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// Initial placement list, e.g. "Ke1 ke8 Ra1"
    #[arg(long)]
    setup: Option<String>,

    /// Puzzle goal, e.g. "mate:3:black" or "avoid:4:white"
    #[arg(long)]
    goal: Option<PuzzleGoal>,

    /// Default promotion piece: q, r, b or n
    #[arg(long, default_value_t = 'q')]
    promotion: char,

    /// Seed for the `random` command
    #[arg(long)]
    seed: Option<u64>,

    #[arg(long, default_value_t = LevelFilter::Warn)]
    log_level: LevelFilter,
}

fn setup_logger(level: LevelFilter) -> Result<(), log::SetLoggerError> {
    fern::Dispatch::new()
        .format(|out, message, record| {
            out.finish(format_args!(
                "[{} {} {}] {}",
                chrono::Local::now().format("%H:%M:%S%.3f"),
                record.level(),
                record.target(),
                message
            ))
        })
        .level(level)
        .chain(io::stderr())
        .apply()
}

fn main() -> Result<(), Box<dyn Error>> {
    let args = Args::parse();
    setup_logger(args.log_level)?;

    let default_promotion = PromotionPiece::from_letter(args.promotion)
        .ok_or_else(|| format!("invalid promotion piece '{}'", args.promotion))?;
    let config = GameConfig {
        default_promotion,
        ..GameConfig::default()
    };

    let mut console = match args.seed {
        Some(seed) => ConsoleState::with_seed(config, seed),
        None => ConsoleState::new(config),
    };
    if let Some(placement) = &args.setup {
        console.setup(placement)?;
    }
    console.set_goal(args.goal);
    info!("console ready, goal {:?}", args.goal);

    run_stdio_loop(&mut console)?;
    Ok(())
}
