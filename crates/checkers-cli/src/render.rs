//! Text rendering of the board and of game outcomes.

use crate::config::DisplayConfig;
use checkers_core::{Cell, Color, Piece};
use checkers_engine::{GameState, SelectionOutcome, UndoOutcome};

/// Draws the board with row 8 at the top.
///
/// Light squares are blank, empty dark squares are dots. With highlights on,
/// the selected piece is bracketed and its destinations are starred.
pub fn render_board(state: &GameState, display: &DisplayConfig) -> String {
    let mut lines = Vec::with_capacity(9);

    for row in (1..=8u8).rev() {
        let mut line = String::new();
        if display.show_coordinates {
            line.push_str(&format!("{row} "));
        }
        for column in 1..=8u8 {
            match Cell::new(row, column) {
                Some(cell) => line.push_str(&cell_text(state, cell, display)),
                None => line.push_str("   "),
            }
        }
        lines.push(line.trim_end().to_string());
    }

    if display.show_coordinates {
        let letters: String = ('a'..='h').map(|c| format!(" {c} ")).collect();
        lines.push(format!("  {}", letters.trim_end()));
    }

    lines.join("\n")
}

fn cell_text(state: &GameState, cell: Cell, display: &DisplayConfig) -> String {
    let glyph = match state.board.piece_at(cell) {
        Some(piece) => piece_glyph(piece, display.unicode),
        None => '.',
    };

    if display.show_highlights {
        if state.selected == Some(cell) {
            return format!("[{glyph}]");
        }
        if state.highlighted_destinations.contains(&cell) {
            return " * ".to_string();
        }
    }
    format!(" {glyph} ")
}

fn piece_glyph(piece: Piece, unicode: bool) -> char {
    if !unicode {
        return piece.to_char();
    }
    match (piece.color, piece.is_king) {
        (Color::Red, false) => '⛀',
        (Color::Red, true) => '⛁',
        (Color::Black, false) => '⛂',
        (Color::Black, true) => '⛃',
    }
}

/// One-line summary of whose turn it is.
pub fn render_status(state: &GameState) -> String {
    let counts = format!(
        "(Red {} - Black {})",
        state.board.red_count, state.board.black_count
    );
    let player = state.current_player;

    if state.chain_active {
        if let Some(cell) = state.selected {
            return format!("{player} must keep jumping with {cell} {counts}");
        }
    }
    if state.mandatory_jump_origins.is_empty() {
        format!("{player} to move {counts}")
    } else {
        let origins: Vec<String> = state
            .mandatory_jump_origins
            .iter()
            .map(|c| c.to_string())
            .collect();
        format!("{player} to move, must jump with {} {counts}", origins.join(", "))
    }
}

/// Describes the answer to a cell selection.
pub fn describe_selection(outcome: &SelectionOutcome) -> String {
    match outcome {
        SelectionOutcome::Highlighted {
            selected,
            destinations,
        } => {
            let targets: Vec<String> = destinations.iter().map(|c| c.to_string()).collect();
            format!("{selected} selected, can move to {}", targets.join(", "))
        }
        SelectionOutcome::Deselected => "Selection cleared".to_string(),
        SelectionOutcome::RejectedNotYourTurn => "That piece is not yours".to_string(),
        SelectionOutcome::RejectedMandatoryJump => "A jump is available and must be taken".to_string(),
        SelectionOutcome::RejectedIllegalDestination => {
            "The selected piece cannot move there".to_string()
        }
        SelectionOutcome::RejectedNoMoves => "That piece has no legal move".to_string(),
        SelectionOutcome::RejectedEmptyCell => "There is no piece there".to_string(),
        SelectionOutcome::MoveApplied {
            captured_cell,
            promoted,
            chain_continues,
        } => {
            let mut text = match captured_cell {
                Some(cell) => format!("Captured {cell}"),
                None => "Moved".to_string(),
            };
            if *promoted {
                text.push_str(", crowned");
            }
            if *chain_continues {
                text.push_str(", jump again");
            }
            text
        }
        SelectionOutcome::GameOver { winner } => {
            format!("{winner} wins! A new game has started")
        }
    }
}

/// Describes the answer to an undo request.
pub fn describe_undo(outcome: &UndoOutcome) -> String {
    match outcome {
        UndoOutcome::Reverted {
            from,
            to,
            restored_capture,
            demoted,
            chain_active,
        } => {
            let mut text = format!("Took back {from}-{to}");
            if let Some(cell) = restored_capture {
                text.push_str(&format!(", restored {cell}"));
            }
            if *demoted {
                text.push_str(", uncrowned");
            }
            if *chain_active {
                text.push_str(", jump chain resumed");
            }
            text
        }
        UndoOutcome::NoOpEmptyHistory => "Nothing to undo".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use checkers_engine::Game;

    fn cell(name: &str) -> Cell {
        Cell::from_name(name).unwrap()
    }

    #[test]
    fn startpos_with_coordinates() {
        let state = Game::new().current_state();
        let text = render_board(&state, &DisplayConfig::default());
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines.len(), 9);
        assert!(lines[0].starts_with("8  b "));
        assert_eq!(lines[4], "4  .     .     .     .");
        assert_eq!(lines[8], "   a  b  c  d  e  f  g  h");
        assert_eq!(text.matches('r').count(), 12);
        assert_eq!(text.matches('b').count(), 12 + 1);
    }

    #[test]
    fn without_coordinates() {
        let state = Game::new().current_state();
        let display = DisplayConfig {
            show_coordinates: false,
            ..DisplayConfig::default()
        };
        let text = render_board(&state, &display);
        assert_eq!(text.lines().count(), 8);
        assert_eq!(text.lines().nth(4), Some(" .     .     .     ."));
    }

    #[test]
    fn highlights_selection_and_destinations() {
        let mut game = Game::new();
        game.select_cell(cell("d3"));
        let state = game.current_state();

        let text = render_board(&state, &DisplayConfig::default());
        let lines: Vec<&str> = text.lines().collect();
        assert!(lines[5].contains("[r]"));
        assert_eq!(lines[4].matches('*').count(), 2);

        let plain = DisplayConfig {
            show_highlights: false,
            ..DisplayConfig::default()
        };
        let text = render_board(&state, &plain);
        assert!(!text.contains('['));
        assert!(!text.contains('*'));
    }

    #[test]
    fn unicode_glyphs() {
        let game = Game::from_layout("4/4/4/1B2/2r1/4/4/4 r").unwrap();
        let display = DisplayConfig {
            unicode: true,
            ..DisplayConfig::default()
        };
        let text = render_board(&game.current_state(), &display);
        assert!(text.contains('⛃'));
        assert!(text.contains('⛀'));
        assert!(!text.contains('r'));
    }

    #[test]
    fn status_lines() {
        let state = Game::new().current_state();
        assert_eq!(render_status(&state), "Red to move (Red 12 - Black 12)");

        let game = Game::from_layout("4/4/4/1b2/2r1/4/r3/4 r").unwrap();
        assert_eq!(
            render_status(&game.current_state()),
            "Red to move, must jump with e4 (Red 2 - Black 1)"
        );

        let mut game = Game::from_layout("4/3b/2b1/4/1b2/r3/4/4 r").unwrap();
        game.make_move(cell("b3"), cell("d5"));
        assert_eq!(
            render_status(&game.current_state()),
            "Red must keep jumping with d5 (Red 1 - Black 2)"
        );
    }

    #[test]
    fn selection_descriptions() {
        let outcome = SelectionOutcome::Highlighted {
            selected: cell("d3"),
            destinations: vec![cell("c4"), cell("e4")],
        };
        assert_eq!(describe_selection(&outcome), "d3 selected, can move to c4, e4");

        let outcome = SelectionOutcome::MoveApplied {
            captured_cell: Some(cell("d7")),
            promoted: true,
            chain_continues: true,
        };
        assert_eq!(
            describe_selection(&outcome),
            "Captured d7, crowned, jump again"
        );

        let outcome = SelectionOutcome::GameOver {
            winner: Color::Black,
        };
        assert_eq!(
            describe_selection(&outcome),
            "Black wins! A new game has started"
        );
    }

    #[test]
    fn undo_descriptions() {
        assert_eq!(
            describe_undo(&UndoOutcome::NoOpEmptyHistory),
            "Nothing to undo"
        );
        let outcome = UndoOutcome::Reverted {
            from: cell("d5"),
            to: cell("f7"),
            restored_capture: Some(cell("e6")),
            demoted: false,
            chain_active: true,
        };
        assert_eq!(
            describe_undo(&outcome),
            "Took back d5-f7, restored e6, jump chain resumed"
        );
    }
}
