//! Shell command parsing.

use checkers_core::{Cell, CellParseError};

/// Commands typed into the shell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShellCommand {
    /// Click on a cell.
    Select(Cell),
    /// List the hops available to the player to move.
    Moves,
    /// Take back the last hop.
    Undo,
    /// Start a new game.
    New,
    /// Redraw the board.
    Board,
    /// Print the game state as JSON.
    State,
    /// Show the command list.
    Help,
    /// Leave the shell.
    Quit,
    /// Unknown command (blank lines included).
    Unknown(String),
}

impl ShellCommand {
    /// Parse one line of input.
    ///
    /// Anything shaped like a cell name (a column letter and a row digit) is
    /// parsed as a cell, so naming a light square is an error rather than
    /// an unknown command.
    pub fn parse(input: &str) -> Result<Self, CellParseError> {
        let input = input.trim();
        let lowered = input.to_ascii_lowercase();

        let command = match lowered.as_str() {
            "moves" | "m" => ShellCommand::Moves,
            "undo" | "u" => ShellCommand::Undo,
            "new" => ShellCommand::New,
            "board" | "b" => ShellCommand::Board,
            "state" => ShellCommand::State,
            "help" | "?" => ShellCommand::Help,
            "quit" | "exit" | "q" => ShellCommand::Quit,
            name if looks_like_cell(name) => ShellCommand::Select(Cell::from_name(name)?),
            _ => ShellCommand::Unknown(input.to_string()),
        };
        Ok(command)
    }
}

fn looks_like_cell(input: &str) -> bool {
    matches!(input.as_bytes(), [b'a'..=b'h', b'1'..=b'8'])
}

/// Text printed for the `help` command.
pub const HELP: &str = "\
Commands:
  <cell>   select a piece or a destination, e.g. d3
  moves    list the legal hops
  undo     take back the last hop
  new      start a new game
  board    redraw the board
  state    print the game state as JSON
  help     show this list
  quit     leave";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_cell() {
        let cmd = ShellCommand::parse("d3").unwrap();
        assert_eq!(cmd, ShellCommand::Select(Cell::from_name("d3").unwrap()));

        let cmd = ShellCommand::parse("  E4\n").unwrap();
        assert_eq!(cmd, ShellCommand::Select(Cell::from_name("e4").unwrap()));
    }

    #[test]
    fn test_parse_light_square_is_an_error() {
        assert_eq!(
            ShellCommand::parse("c3"),
            Err(CellParseError::NotPlayable("c3".to_string()))
        );
    }

    #[test]
    fn test_parse_keywords() {
        assert_eq!(ShellCommand::parse("undo").unwrap(), ShellCommand::Undo);
        assert_eq!(ShellCommand::parse("u").unwrap(), ShellCommand::Undo);
        assert_eq!(ShellCommand::parse("new").unwrap(), ShellCommand::New);
        assert_eq!(ShellCommand::parse("board").unwrap(), ShellCommand::Board);
        assert_eq!(ShellCommand::parse("state").unwrap(), ShellCommand::State);
        assert_eq!(ShellCommand::parse("moves").unwrap(), ShellCommand::Moves);
        assert_eq!(ShellCommand::parse("HELP").unwrap(), ShellCommand::Help);
        assert_eq!(ShellCommand::parse("quit").unwrap(), ShellCommand::Quit);
        assert_eq!(ShellCommand::parse("exit").unwrap(), ShellCommand::Quit);
    }

    #[test]
    fn test_parse_unknown() {
        assert_eq!(
            ShellCommand::parse("castle").unwrap(),
            ShellCommand::Unknown("castle".to_string())
        );
        assert_eq!(
            ShellCommand::parse("i9").unwrap(),
            ShellCommand::Unknown("i9".to_string())
        );
        assert_eq!(
            ShellCommand::parse("   ").unwrap(),
            ShellCommand::Unknown(String::new())
        );
    }
}
