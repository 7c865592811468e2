//! Unbeatable tic-tac-toe - command-line entry point.

use anyhow::Result;
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;
use unbeatable::{Cli, Command, Comparison, Settings, Shell, best_move_report};
use unbeatable_tictactoe::{Board, GameSession};

fn main() -> Result<()> {
    // Load .env if present
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let settings = Settings::load(cli.config.as_deref())?;
    init_tracing(settings.log_level());

    match cli.command {
        Command::Play {
            strategy,
            think_delay_ms,
        } => {
            let settings = settings.with_overrides(strategy, think_delay_ms);
            info!(strategy = %settings.strategy(), "Starting terminal game");
            let stdin = std::io::stdin();
            let stdout = std::io::stdout();
            let mut shell = Shell::new(
                GameSession::new(*settings.strategy()),
                stdin.lock(),
                stdout.lock(),
                settings.think_delay(),
            );
            shell.run()?;
        }
        Command::BestMove {
            board,
            strategy,
            json,
        } => {
            let strategy = strategy.unwrap_or(*settings.strategy());
            let report = best_move_report(&board, strategy)?;
            if json {
                println!("{}", report.to_json()?);
            } else {
                print!("{}", report.to_text());
            }
        }
        Command::Compare { board } => {
            let board = board.unwrap_or_else(Board::new);
            println!("{board}\n");
            print!("{}", Comparison::run(&board)?.to_text());
        }
    }

    Ok(())
}

/// Logs go to stderr so they never mix with the game on stdout.
fn init_tracing(default_level: &str) {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .init();
}
