//! Line-oriented game loop for playing in a terminal.
//!
//! The human plays `O` and moves first. Each prompt accepts a cell
//! (`1`-`9`, or `row col`) or one of the single-letter commands.

use anyhow::{Context, Result};
use std::io::{BufRead, Write};
use std::time::Duration;
use tracing::{debug, instrument, warn};
use unbeatable_tictactoe::{GameSession, Phase, Position};

/// One line of player input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShellCommand {
    /// Place the player's mark.
    Move(Position),
    /// Switch between the two search strategies.
    Toggle,
    /// Start a new game.
    Restart,
    /// Show the command list.
    Help,
    /// Leave the shell.
    Quit,
}

impl ShellCommand {
    /// Parses a line of input, `None` if it means nothing.
    pub fn parse(line: &str) -> Option<Self> {
        match line.trim().to_ascii_lowercase().as_str() {
            "p" => Some(Self::Toggle),
            "r" => Some(Self::Restart),
            "h" | "?" | "help" => Some(Self::Help),
            "q" | "quit" | "exit" => Some(Self::Quit),
            other => Position::parse_input(other).map(Self::Move),
        }
    }
}

const HELP: &str = "\
Enter 1-9 or \"row col\" (0-based) to place O.
  p  toggle search strategy
  r  restart
  q  quit";

/// Interactive game over any reader and writer.
pub struct Shell<R, W> {
    session: GameSession,
    input: R,
    output: W,
    think_delay: Duration,
}

impl<R: BufRead, W: Write> Shell<R, W> {
    /// Creates a shell around `session`.
    pub fn new(session: GameSession, input: R, output: W, think_delay: Duration) -> Self {
        Self {
            session,
            input,
            output,
            think_delay,
        }
    }

    /// Runs until the player quits or input ends.
    #[instrument(skip(self))]
    pub fn run(&mut self) -> Result<()> {
        writeln!(self.output, "{HELP}\n")?;

        loop {
            if self.session.phase() == Phase::EngineTurn {
                self.engine_turn()?;
                continue;
            }

            self.render()?;
            write!(self.output, "> ")?;
            self.output.flush()?;

            let mut line = String::new();
            if self.input.read_line(&mut line)? == 0 {
                debug!("Input closed");
                break;
            }

            match ShellCommand::parse(&line) {
                Some(ShellCommand::Quit) => break,
                Some(ShellCommand::Help) => writeln!(self.output, "{HELP}")?,
                Some(ShellCommand::Restart) => {
                    self.session.reset();
                    writeln!(self.output, "New game.")?;
                }
                Some(ShellCommand::Toggle) => {
                    let strategy = self.session.toggle_strategy();
                    writeln!(self.output, "Algorithm: {}", strategy.label())?;
                }
                Some(ShellCommand::Move(pos)) => {
                    if let Err(e) = self.session.apply_player_move(pos.row(), pos.col()) {
                        warn!(error = %e, "Move rejected");
                        writeln!(self.output, "{e}")?;
                    }
                }
                None => writeln!(self.output, "Unrecognized input {:?}, h for help", line.trim())?,
            }
        }

        writeln!(self.output, "Goodbye.")?;
        Ok(())
    }

    /// Pauses, then lets the engine reply.
    fn engine_turn(&mut self) -> Result<()> {
        if !self.think_delay.is_zero() {
            std::thread::sleep(self.think_delay);
        }
        let (pos, _) = self
            .session
            .request_engine_move()
            .context("engine failed to move")?;

        let nodes = self.session.last_search().map(|r| r.stats().nodes).unwrap_or_default();
        writeln!(self.output, "Engine plays {pos} ({nodes} nodes searched)")?;
        Ok(())
    }

    fn render(&mut self) -> Result<()> {
        let status = match self.session.phase() {
            Phase::Finished(outcome) => format!("{outcome} Press r to play again or q to quit."),
            _ => "Your turn (O).".to_string(),
        };
        writeln!(
            self.output,
            "\n{}\n\n{} [{}]",
            self.session.board(),
            status,
            self.session.strategy().label()
        )?;
        Ok(())
    }

    /// The game being played.
    pub fn session(&self) -> &GameSession {
        &self.session
    }

    /// Consumes the shell, returning its output sink.
    pub fn into_output(self) -> W {
        self.output
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use unbeatable_tictactoe::{Board, Outcome, Strategy};

    fn run_script(script: &str, strategy: Strategy) -> (GameSession, String) {
        let mut shell = Shell::new(
            GameSession::new(strategy),
            script.as_bytes(),
            Vec::new(),
            Duration::ZERO,
        );
        shell.run().unwrap();
        let session = shell.session().clone();
        let output = String::from_utf8(shell.into_output()).unwrap();
        (session, output)
    }

    #[test]
    fn test_parse_commands() {
        assert_eq!(ShellCommand::parse("P\n"), Some(ShellCommand::Toggle));
        assert_eq!(ShellCommand::parse(" r "), Some(ShellCommand::Restart));
        assert_eq!(ShellCommand::parse("q"), Some(ShellCommand::Quit));
        assert_eq!(ShellCommand::parse("5"), Some(ShellCommand::Move(Position::Center)));
        assert_eq!(ShellCommand::parse("2 0"), Some(ShellCommand::Move(Position::BottomLeft)));
        assert_eq!(ShellCommand::parse("10"), None);
        assert_eq!(ShellCommand::parse("x"), None);
    }

    #[test]
    fn test_engine_replies_to_player() {
        let (session, output) = run_script("5\nq\n", Strategy::Pruned);
        assert!(output.contains(&format!("Engine plays {}", Position::TopLeft)));
        assert_eq!(session.board().occupied(), 2);
        assert!(output.ends_with("Goodbye.\n"));
    }

    #[test]
    fn test_engine_wins_against_blunders() {
        let (session, output) = run_script("1\n2\n4\n", Strategy::Exhaustive);
        assert_eq!(session.outcome(), Some(Outcome::Lose));
        assert!(output.contains("You lose!"));
    }

    #[test]
    fn test_occupied_cell_reported() {
        let (session, output) = run_script("1\n1\nq\n", Strategy::Pruned);
        assert!(output.contains("Illegal move at (0, 0)"));
        assert_eq!(session.board().occupied(), 2);
    }

    #[test]
    fn test_toggle_and_restart() {
        let (session, output) = run_script("p\n5\nr\n", Strategy::Exhaustive);
        assert!(output.contains("Algorithm: Alpha-Beta Pruning"));
        assert!(output.contains("New game."));
        assert_eq!(session.strategy(), Strategy::Pruned);
        assert_eq!(session.board(), &Board::new());
    }

    #[test]
    fn test_unknown_input() {
        let (_, output) = run_script("hello\n", Strategy::Pruned);
        assert!(output.contains("Unrecognized input \"hello\""));
    }
}
