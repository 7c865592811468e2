//! Command-line interface.

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use unbeatable_tictactoe::{Board, Strategy};

/// Unbeatable - perfect-play tic-tac-toe
#[derive(Parser, Debug)]
#[command(name = "unbeatable")]
#[command(about = "Perfect-play tic-tac-toe engine", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to a TOML settings file
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play a game in the terminal (you are O and move first)
    Play {
        /// Search strategy: exhaustive or pruned
        #[arg(short, long)]
        strategy: Option<Strategy>,

        /// Pause before each engine move, in milliseconds
        #[arg(long)]
        think_delay_ms: Option<u64>,
    },

    /// Print the engine's move for a position (engine is X and on turn)
    BestMove {
        /// Nine cells in row-major order, e.g. "XO..X...O"
        board: Board,

        /// Search strategy: exhaustive or pruned
        #[arg(short, long)]
        strategy: Option<Strategy>,

        /// Emit the report as JSON
        #[arg(long)]
        json: bool,
    },

    /// Run both strategies on a position and compare their work
    Compare {
        /// Nine cells in row-major order (defaults to the empty board)
        board: Option<Board>,
    },
}
