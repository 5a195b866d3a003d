//! Dual-Othello command line.
//!
//! ## Usage
//!
//! - `dual-othello` - Start the text protocol on stdin/stdout
//! - `dual-othello play` - Same as above
//! - `dual-othello demo` - Play a few moves and print the board
//!
//! Set `RUST_LOG=debug` to log every move to stderr.

use anyhow::Context;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use dual_othello::game::{Game, GameConfig, MoveOutcome};
use dual_othello::protocol::{ProtocolEngine, str_coord};

/// Dual-Othello: a two-attribute flipping-stone game
#[derive(Parser)]
#[command(name = "dual-othello")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Seed for the attribute draws
    #[arg(long, global = true)]
    seed: Option<u64>,

    /// Let the Subtractor capture non-contiguous stones
    #[arg(long, global = true)]
    advantage: bool,

    /// Give the Subtractor's placed stone a random value
    #[arg(long, global = true)]
    special_placement: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Read commands from stdin and answer on stdout
    Play,
    /// Play the first legal move a few times and show the result
    Demo {
        /// Number of moves to play
        #[arg(long, default_value_t = 4)]
        moves: usize,
    },
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = GameConfig {
        advantage_mode: cli.advantage,
        special_placement: cli.special_placement,
        seed: cli.seed,
    };

    match cli.command {
        Some(Commands::Play) | None => {
            let mut engine = ProtocolEngine::with_config(config);
            engine.run().context("protocol session failed")?;
        }
        Some(Commands::Demo { moves }) => run_demo(config, moves),
    }
    Ok(())
}

fn run_demo(config: GameConfig, moves: usize) {
    println!("Dual-Othello\n");
    let mut game = Game::with_config(config);

    for _ in 0..moves {
        println!(
            "Turn {}: {} to move, attribute {}",
            game.turn_count(),
            game.current_player(),
            game.current_attribute()
        );
        println!("{}", game.board().render(game.legal_moves()));

        let Some(&(row, col)) = game.legal_moves().first() else {
            println!("No legal move available.");
            break;
        };
        match game.apply_move(row, col) {
            Ok(report) => {
                let flipped: Vec<String> = report.flipped.iter().map(|&c| str_coord(c)).collect();
                println!(
                    "{} plays {} flipping {}\n",
                    report.player,
                    str_coord(report.placed),
                    flipped.join(" ")
                );
                match report.outcome {
                    MoveOutcome::Continue => {}
                    MoveOutcome::Passed { skipped } => println!("{skipped} passes.\n"),
                    MoveOutcome::GameOver(score) => {
                        println!("Game over after {} turns: {score}", game.turns_played());
                        break;
                    }
                }
            }
            Err(e) => {
                println!("{e}");
                break;
            }
        }
    }

    println!("{}", game.board());
    let (black, purple) = game.tally();
    println!("Black: {black} | Purple: {purple}");
}
