//! Turn control, move history and undo.
//!
//! The [`Game`] struct is the single owner of the board and turn state. It
//! is driven by cell selections, the way a board UI reports clicks:
//! - selecting one of your pieces highlights where it can go
//! - selecting a highlighted cell plays the move
//! - a piece that has just jumped must keep jumping while it can
//!
//! Misclicks are answered with a rejection outcome and change nothing.

use crate::executor::{apply_move, revert, UndoRecord};
use crate::movegen::{jump_origins, jumps_from, legal_moves, piece_moves};
use crate::rules::{evaluate, GameResult};
use crate::{Board, BoardSnapshot, CellSet};
use checkers_core::{Cell, Color, LayoutError, Move};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, info, warn};

/// Where the current player is within their turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TurnPhase {
    /// Nothing selected yet.
    AwaitingSelection,
    /// A piece is selected and its destinations are highlighted.
    PieceSelected(Cell),
    /// The piece on this cell has jumped and must jump again.
    JumpChainActive(Cell),
}

/// Answer to a cell selection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SelectionOutcome {
    /// A piece was selected; these are its legal destinations.
    Highlighted {
        selected: Cell,
        destinations: Vec<Cell>,
    },
    /// The selected piece was selected again and is no longer selected.
    Deselected,
    /// The cell holds an opponent's piece.
    RejectedNotYourTurn,
    /// A capture is available and must be taken instead.
    RejectedMandatoryJump,
    /// The selected piece cannot go to that cell.
    RejectedIllegalDestination,
    /// The piece belongs to the current player but cannot move.
    RejectedNoMoves,
    /// Nothing is selected and the cell is empty.
    RejectedEmptyCell,
    /// A hop was played.
    MoveApplied {
        captured_cell: Option<Cell>,
        promoted: bool,
        chain_continues: bool,
    },
    /// The hop ended the game; the board has been reset for the next one.
    GameOver { winner: Color },
}

impl SelectionOutcome {
    /// Returns true for the outcomes that left the game untouched.
    pub fn is_rejection(&self) -> bool {
        matches!(
            self,
            SelectionOutcome::RejectedNotYourTurn
                | SelectionOutcome::RejectedMandatoryJump
                | SelectionOutcome::RejectedIllegalDestination
                | SelectionOutcome::RejectedNoMoves
                | SelectionOutcome::RejectedEmptyCell
        )
    }
}

/// Answer to an undo request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UndoOutcome {
    /// One hop was taken back.
    Reverted {
        from: Cell,
        to: Cell,
        /// Cell where a captured piece was put back.
        restored_capture: Option<Cell>,
        /// The hop had crowned its piece, which is a man again.
        demoted: bool,
        /// The same player is mid-chain on `from` and must jump again.
        chain_active: bool,
    },
    /// There was nothing to undo.
    NoOpEmptyHistory,
}

/// Everything a renderer needs to draw the game.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    pub board: BoardSnapshot,
    pub current_player: Color,
    pub phase: TurnPhase,
    pub selected: Option<Cell>,
    pub highlighted_destinations: Vec<Cell>,
    pub mandatory_jump_origins: Vec<Cell>,
    pub chain_active: bool,
    pub layout: String,
}

/// Error type for setting up a game.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum GameError {
    /// The layout string could not be parsed.
    #[error("invalid layout: {0}")]
    Layout(#[from] LayoutError),

    /// The side to move has already lost in the given position.
    #[error("position is already decided: {winner} wins")]
    AlreadyDecided { winner: Color },
}

/// A checkers game with turn control and undo.
#[derive(Debug, Clone)]
pub struct Game {
    board: Board,
    current_player: Color,
    /// Pieces that must be moved because they can capture.
    mandatory_jump_origins: CellSet,
    phase: TurnPhase,
    /// One record per hop, oldest first.
    history: Vec<UndoRecord>,
    wins: [u32; 2],
    last_result: Option<GameResult>,
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

impl Game {
    /// Creates a new game with the standard starting board, Red to move.
    pub fn new() -> Self {
        let board = Board::startpos();
        let mandatory_jump_origins = jump_origins(&board, Color::Red);
        Game {
            board,
            current_player: Color::Red,
            mandatory_jump_origins,
            phase: TurnPhase::AwaitingSelection,
            history: Vec::new(),
            wins: [0; 2],
            last_result: None,
        }
    }

    /// Creates a game from an arbitrary board.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::AlreadyDecided`] if `to_move` has no pieces or
    /// no legal move.
    pub fn from_board(board: Board, to_move: Color) -> Result<Self, GameError> {
        if let Some(result) = evaluate(&board, to_move) {
            return Err(GameError::AlreadyDecided {
                winner: result.winner,
            });
        }
        let mandatory_jump_origins = jump_origins(&board, to_move);
        Ok(Game {
            board,
            current_player: to_move,
            mandatory_jump_origins,
            phase: TurnPhase::AwaitingSelection,
            history: Vec::new(),
            wins: [0; 2],
            last_result: None,
        })
    }

    /// Creates a game from a layout string.
    pub fn from_layout(layout: &str) -> Result<Self, GameError> {
        let (board, to_move) = Board::parse_layout(layout)?;
        Self::from_board(board, to_move)
    }

    /// Starts over from the standard starting board.
    ///
    /// The tally of won games is kept.
    pub fn new_game(&mut self) -> BoardSnapshot {
        self.reset();
        info!("new game started");
        self.board.snapshot()
    }

    fn reset(&mut self) {
        self.board = Board::startpos();
        self.current_player = Color::Red;
        self.mandatory_jump_origins = jump_origins(&self.board, Color::Red);
        self.phase = TurnPhase::AwaitingSelection;
        self.history.clear();
    }

    /// Returns a reference to the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the player whose turn it is.
    pub fn current_player(&self) -> Color {
        self.current_player
    }

    /// Returns the current turn phase.
    pub fn phase(&self) -> TurnPhase {
        self.phase
    }

    /// Returns the hops played so far, oldest first.
    pub fn history(&self) -> &[UndoRecord] {
        &self.history
    }

    /// Returns the pieces that must move this turn because they can jump.
    ///
    /// Empty when no capture is available.
    pub fn mandatory_jump_origins(&self) -> CellSet {
        self.mandatory_jump_origins
    }

    /// Returns true while a piece is in the middle of a multi-jump.
    pub fn is_chain_active(&self) -> bool {
        matches!(self.phase, TurnPhase::JumpChainActive(_))
    }

    /// Returns the number of games `color` has won with this instance.
    pub fn games_won(&self, color: Color) -> u32 {
        self.wins[color.index()]
    }

    /// Returns how the most recently finished game ended.
    pub fn last_result(&self) -> Option<GameResult> {
        self.last_result
    }

    /// Returns every hop the current player may play right now.
    pub fn legal_moves(&self) -> Vec<Move> {
        match self.phase {
            TurnPhase::JumpChainActive(cell) => jumps_from(&self.board, cell),
            _ => legal_moves(&self.board, self.current_player),
        }
    }

    /// Returns the legal hops of the piece on `cell` in the current phase.
    fn moves_from(&self, cell: Cell) -> Vec<Move> {
        let Some(piece) = self.board.piece_at(cell) else {
            return Vec::new();
        };
        if piece.color != self.current_player {
            return Vec::new();
        }

        let moves = piece_moves(&self.board, cell, piece);
        match self.phase {
            TurnPhase::JumpChainActive(active) if active == cell => moves.jumps,
            TurnPhase::JumpChainActive(_) => Vec::new(),
            _ if self.mandatory_jump_origins.is_not_empty() => moves.jumps,
            _ => moves.steps,
        }
    }

    /// Returns the state needed to render the game.
    pub fn current_state(&self) -> GameState {
        let selected = match self.phase {
            TurnPhase::PieceSelected(cell) | TurnPhase::JumpChainActive(cell) => Some(cell),
            TurnPhase::AwaitingSelection => None,
        };
        let highlighted_destinations = selected
            .map(|cell| self.moves_from(cell).iter().map(|m| m.to).collect())
            .unwrap_or_default();

        GameState {
            board: self.board.snapshot(),
            current_player: self.current_player,
            phase: self.phase,
            selected,
            highlighted_destinations,
            mandatory_jump_origins: self.mandatory_jump_origins.into_iter().collect(),
            chain_active: self.is_chain_active(),
            layout: self.board.to_layout(self.current_player).to_string(),
        }
    }

    /// Handles a click on `cell`.
    pub fn select_cell(&mut self, cell: Cell) -> SelectionOutcome {
        let outcome = match self.phase {
            TurnPhase::JumpChainActive(active) => self.select_in_chain(active, cell),
            TurnPhase::PieceSelected(selected) => self.select_with_piece(selected, cell),
            TurnPhase::AwaitingSelection => match self.board.piece_at(cell) {
                None => SelectionOutcome::RejectedEmptyCell,
                Some(piece) if piece.color != self.current_player => {
                    SelectionOutcome::RejectedNotYourTurn
                }
                Some(_) => self.select_piece(cell),
            },
        };
        debug!(%cell, player = %self.current_player, ?outcome, "cell selected");
        outcome
    }

    /// Selects `from` if needed and then `to`.
    ///
    /// Returns the first rejection, or the outcome of selecting `to`.
    pub fn make_move(&mut self, from: Cell, to: Cell) -> SelectionOutcome {
        let ready = matches!(
            self.phase,
            TurnPhase::PieceSelected(cell) | TurnPhase::JumpChainActive(cell) if cell == from
        );
        if !ready {
            let outcome = self.select_cell(from);
            if !matches!(outcome, SelectionOutcome::Highlighted { .. }) {
                return outcome;
            }
        }
        self.select_cell(to)
    }

    fn select_piece(&mut self, cell: Cell) -> SelectionOutcome {
        if self.mandatory_jump_origins.is_not_empty()
            && !self.mandatory_jump_origins.contains(cell)
        {
            return SelectionOutcome::RejectedMandatoryJump;
        }

        let destinations: Vec<Cell> = self.moves_from(cell).iter().map(|m| m.to).collect();
        if destinations.is_empty() {
            return SelectionOutcome::RejectedNoMoves;
        }

        self.phase = TurnPhase::PieceSelected(cell);
        SelectionOutcome::Highlighted {
            selected: cell,
            destinations,
        }
    }

    fn select_with_piece(&mut self, selected: Cell, cell: Cell) -> SelectionOutcome {
        if cell == selected {
            self.phase = TurnPhase::AwaitingSelection;
            return SelectionOutcome::Deselected;
        }

        if let Some(mv) = self.moves_from(selected).into_iter().find(|m| m.to == cell) {
            return self.play(mv);
        }

        match self.board.piece_at(cell) {
            Some(piece) if piece.color == self.current_player => self.select_piece(cell),
            Some(_) => SelectionOutcome::RejectedNotYourTurn,
            None => SelectionOutcome::RejectedIllegalDestination,
        }
    }

    fn select_in_chain(&mut self, active: Cell, cell: Cell) -> SelectionOutcome {
        if let Some(mv) = self.moves_from(active).into_iter().find(|m| m.to == cell) {
            return self.play(mv);
        }

        match self.board.piece_at(cell) {
            Some(piece) if piece.color != self.current_player => {
                SelectionOutcome::RejectedNotYourTurn
            }
            _ => SelectionOutcome::RejectedMandatoryJump,
        }
    }

    /// Plays a legal hop for the current player and advances the turn.
    fn play(&mut self, mv: Move) -> SelectionOutcome {
        let record = match apply_move(&mut self.board, mv, self.current_player) {
            Ok(record) => record,
            Err(err) => {
                warn!(%mv, %err, "generated hop was refused");
                return SelectionOutcome::RejectedIllegalDestination;
            }
        };
        self.history.push(record);
        debug!(%mv, player = %self.current_player, promoted = record.promoted, "hop played");

        // crowning happens first, so a new king continues in all directions
        if record.is_jump && !jumps_from(&self.board, mv.to).is_empty() {
            self.phase = TurnPhase::JumpChainActive(mv.to);
            self.mandatory_jump_origins = CellSet::from_cell(mv.to);
            return SelectionOutcome::MoveApplied {
                captured_cell: record.captured_cell,
                promoted: record.promoted,
                chain_continues: true,
            };
        }

        self.current_player = self.current_player.opposite();
        if let Some(result) = self.begin_turn() {
            return SelectionOutcome::GameOver {
                winner: result.winner,
            };
        }

        SelectionOutcome::MoveApplied {
            captured_cell: record.captured_cell,
            promoted: record.promoted,
            chain_continues: false,
        }
    }

    /// Sets up the turn of the current player, or ends the game if they lost.
    fn begin_turn(&mut self) -> Option<GameResult> {
        self.phase = TurnPhase::AwaitingSelection;

        if let Some(result) = evaluate(&self.board, self.current_player) {
            info!(winner = %result.winner, reason = ?result.reason, "game over");
            self.wins[result.winner.index()] += 1;
            self.last_result = Some(result);
            self.reset();
            return Some(result);
        }

        self.mandatory_jump_origins = jump_origins(&self.board, self.current_player);
        None
    }

    /// Takes back the most recent hop.
    ///
    /// Undoing a hop that continued a jump chain leaves the same player
    /// mid-chain on the cell the piece returned to. Otherwise the turn goes
    /// back to the player who made the hop, with the returned piece selected
    /// if it can still move.
    pub fn undo(&mut self) -> UndoOutcome {
        let Some(record) = self.history.pop() else {
            return UndoOutcome::NoOpEmptyHistory;
        };

        if let Err(err) = revert(&mut self.board, &record) {
            warn!(mv = %record.as_move(), %err, "history does not match the board");
            self.history.push(record);
            return UndoOutcome::NoOpEmptyHistory;
        }
        self.current_player = record.mover;

        let chain_active = self
            .history
            .last()
            .is_some_and(|previous| previous.mover == record.mover);
        if chain_active {
            self.phase = TurnPhase::JumpChainActive(record.from);
            self.mandatory_jump_origins = CellSet::from_cell(record.from);
        } else {
            self.phase = TurnPhase::AwaitingSelection;
            self.mandatory_jump_origins = jump_origins(&self.board, record.mover);
            if !self.moves_from(record.from).is_empty() {
                self.phase = TurnPhase::PieceSelected(record.from);
            }
        }
        debug!(mv = %record.as_move(), player = %record.mover, chain_active, "hop undone");

        UndoOutcome::Reverted {
            from: record.from,
            to: record.to,
            restored_capture: record.captured_cell,
            demoted: record.promoted,
            chain_active,
        }
    }
}
