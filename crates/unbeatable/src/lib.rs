//! Terminal front end for the unbeatable tic-tac-toe engine.
//!
//! - [`cli`]: command-line parsing
//! - [`config`]: TOML settings
//! - [`shell`]: interactive game loop
//! - [`report`]: output for the analysis commands

#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod cli;
pub mod config;
pub mod report;
pub mod shell;

pub use cli::{Cli, Command};
pub use config::{ConfigError, DEFAULT_CONFIG_FILE, Settings};
pub use report::{BestMoveReport, Comparison, best_move_report};
pub use shell::{Shell, ShellCommand};
