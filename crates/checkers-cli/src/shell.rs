//! Interactive line-based shell around a [`Game`].

use crate::command::{ShellCommand, HELP};
use crate::config::DisplayConfig;
use crate::render::{describe_selection, describe_undo, render_board, render_status};
use checkers_core::Color;
use checkers_engine::{Game, SelectionOutcome};
use std::io::{BufRead, Write};

/// Reads commands from `reader` and answers on `writer`.
pub struct Shell<R: BufRead, W: Write> {
    reader: R,
    writer: W,
    game: Game,
    display: DisplayConfig,
}

impl<R: BufRead, W: Write> Shell<R, W> {
    pub fn new(reader: R, writer: W, game: Game, display: DisplayConfig) -> Self {
        Self {
            reader,
            writer,
            game,
            display,
        }
    }

    /// Runs until `quit` or end of input.
    pub fn run(&mut self) -> anyhow::Result<()> {
        self.show_board()?;

        let mut line = String::new();
        loop {
            line.clear();
            if self.reader.read_line(&mut line)? == 0 {
                break;
            }

            let command = match ShellCommand::parse(&line) {
                Ok(command) => command,
                Err(err) => {
                    writeln!(self.writer, "{err}")?;
                    continue;
                }
            };

            if !self.execute(command)? {
                break;
            }
            self.writer.flush()?;
        }

        self.writer.flush()?;
        Ok(())
    }

    /// Executes one command. Returns false when the shell should stop.
    fn execute(&mut self, command: ShellCommand) -> anyhow::Result<bool> {
        match command {
            ShellCommand::Select(cell) => {
                let outcome = self.game.select_cell(cell);
                writeln!(self.writer, "{}", describe_selection(&outcome))?;
                if let SelectionOutcome::GameOver { .. } = outcome {
                    writeln!(
                        self.writer,
                        "Score: Red {} - Black {}",
                        self.game.games_won(Color::Red),
                        self.game.games_won(Color::Black)
                    )?;
                }
                if !outcome.is_rejection() {
                    self.show_board()?;
                }
            }
            ShellCommand::Moves => {
                let moves: Vec<String> = self
                    .game
                    .legal_moves()
                    .iter()
                    .map(|m| m.to_string())
                    .collect();
                writeln!(self.writer, "{}", moves.join(" "))?;
            }
            ShellCommand::Undo => {
                let outcome = self.game.undo();
                writeln!(self.writer, "{}", describe_undo(&outcome))?;
                self.show_board()?;
            }
            ShellCommand::New => {
                self.game.new_game();
                self.show_board()?;
            }
            ShellCommand::Board => self.show_board()?,
            ShellCommand::State => {
                let json = serde_json::to_string_pretty(&self.game.current_state())?;
                writeln!(self.writer, "{json}")?;
            }
            ShellCommand::Help => writeln!(self.writer, "{HELP}")?,
            ShellCommand::Quit => return Ok(false),
            ShellCommand::Unknown(text) if text.is_empty() => {}
            ShellCommand::Unknown(text) => {
                writeln!(self.writer, "Unknown command: {text} (try 'help')")?;
            }
        }
        Ok(true)
    }

    fn show_board(&mut self) -> std::io::Result<()> {
        let state = self.game.current_state();
        writeln!(self.writer, "{}", render_board(&state, &self.display))?;
        writeln!(self.writer, "{}", render_status(&state))
    }

    /// Returns the game driven by this shell.
    pub fn game(&self) -> &Game {
        &self.game
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn run(input: &str, game: Game) -> (String, Game) {
        let mut output = Vec::new();
        let mut shell = Shell::new(
            Cursor::new(input.as_bytes()),
            &mut output,
            game,
            DisplayConfig::default(),
        );
        shell.run().unwrap();
        let game = shell.game().clone();
        drop(shell);
        (String::from_utf8(output).unwrap(), game)
    }

    #[test]
    fn plays_a_move() {
        let (output, game) = run("d3\ne4\n", Game::new());
        assert!(output.contains("d3 selected, can move to c4, e4"));
        assert!(output.contains("Moved"));
        assert!(output.contains("Black to move"));
        assert_eq!(game.current_player(), Color::Black);
    }

    #[test]
    fn rejections_are_reported() {
        let (output, game) = run("a6\nc4\nc3\n", Game::new());
        assert!(output.contains("That piece is not yours"));
        assert!(output.contains("There is no piece there"));
        assert!(output.contains("light square"));
        assert!(game.history().is_empty());
    }

    #[test]
    fn undo_and_moves() {
        let (output, game) = run("d3\ne4\nundo\nmoves\n", Game::new());
        assert!(output.contains("Took back d3-e4"));
        assert!(output.contains("b3-a4 b3-c4"));
        assert_eq!(game.current_player(), Color::Red);
    }

    #[test]
    fn game_over_reports_score() {
        let game = Game::from_layout("4/4/4/1b2/2r1/4/4/4 r").unwrap();
        let (output, game) = run("e4\nc6\n", game);
        assert!(output.contains("Red wins!"));
        assert!(output.contains("Score: Red 1 - Black 0"));
        assert_eq!(game.history().len(), 0);
    }

    #[test]
    fn state_is_json() {
        let (output, _) = run("state\nquit\nd3\n", Game::new());
        let start = output.find('{').unwrap();
        let value: serde_json::Value = serde_json::from_str(&output[start..]).unwrap();
        assert_eq!(value["current_player"], "red");
        assert_eq!(value["chain_active"], false);
    }

    #[test]
    fn unknown_command_and_help() {
        let (output, _) = run("\nfly\nhelp\n", Game::new());
        assert!(output.contains("Unknown command: fly"));
        assert!(output.contains("take back the last hop"));
    }
}
