//! Move generation.
//!
//! Candidate moves come from a single table of directions per piece kind
//! (see [`Piece::directions`]): for each direction the adjacent cell is a
//! step if empty, and the cell beyond an opposing piece is a jump if empty.

pub mod perft;

use crate::{Board, CellSet};
use checkers_core::{Cell, Color, Move, Piece};
use thiserror::Error;

/// Errors raised by engine calls that break their preconditions.
///
/// These never result from player input; the controller only passes cells
/// and moves that the generator produced.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum EngineError {
    #[error("no piece on {0}")]
    EmptyCell(Cell),

    #[error("cell {0} is already occupied")]
    OccupiedCell(Cell),

    #[error("the piece on {cell} does not belong to {mover}")]
    WrongMover { cell: Cell, mover: Color },

    #[error("{0} is not a step or jump this piece can make")]
    IllegalHop(Move),

    #[error("no opposing piece to capture on {0}")]
    InvalidCapture(Cell),
}

/// Steps and jumps available to one piece.
///
/// The two lists never share a destination.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CandidateMoves {
    pub steps: Vec<Move>,
    pub jumps: Vec<Move>,
}

impl CandidateMoves {
    /// Returns true if at least one jump is available.
    #[inline]
    pub fn is_capturing(&self) -> bool {
        !self.jumps.is_empty()
    }

    /// Returns true if the piece cannot move at all.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty() && self.jumps.is_empty()
    }

    /// Returns every landing cell, steps first.
    pub fn destinations(&self) -> Vec<Cell> {
        self.steps.iter().chain(&self.jumps).map(|m| m.to).collect()
    }

    /// Returns the landing cells of the jumps only.
    pub fn jump_destinations(&self) -> Vec<Cell> {
        self.jumps.iter().map(|m| m.to).collect()
    }
}

/// Computes the candidate moves of the piece on `cell`.
///
/// # Errors
///
/// Returns [`EngineError::EmptyCell`] if there is no piece on `cell`.
pub fn candidate_moves(board: &Board, cell: Cell) -> Result<CandidateMoves, EngineError> {
    let piece = board.piece_at(cell).ok_or(EngineError::EmptyCell(cell))?;
    Ok(piece_moves(board, cell, piece))
}

/// Candidate moves for a piece known to stand on `from`.
pub(crate) fn piece_moves(board: &Board, from: Cell, piece: Piece) -> CandidateMoves {
    let mut moves = CandidateMoves::default();
    let empty = board.empty_cells();
    let opponents = board.pieces_of(piece.color.opposite());

    for &direction in piece.directions() {
        let Some(next) = from.offset(direction) else {
            continue;
        };
        if empty.contains(next) {
            moves.steps.push(Move::step(from, next));
        } else if opponents.contains(next) {
            if let Some(landing) = next.offset(direction) {
                if empty.contains(landing) {
                    moves.jumps.push(Move::jump(from, next, landing));
                }
            }
        }
    }

    moves
}

/// Returns the jumps available to the piece on `cell` (none if it is empty).
pub fn jumps_from(board: &Board, cell: Cell) -> Vec<Move> {
    match board.piece_at(cell) {
        Some(piece) => piece_moves(board, cell, piece).jumps,
        None => Vec::new(),
    }
}

/// Returns the cells of `color`'s pieces that have a jump available.
pub fn jump_origins(board: &Board, color: Color) -> CellSet {
    board
        .pieces_of(color)
        .into_iter()
        .filter(|&cell| !jumps_from(board, cell).is_empty())
        .collect()
}

/// Returns true if any of `color`'s pieces has a step or a jump.
pub fn has_any_move(board: &Board, color: Color) -> bool {
    board.pieces_of(color).into_iter().any(|cell| {
        board
            .piece_at(cell)
            .is_some_and(|piece| !piece_moves(board, cell, piece).is_empty())
    })
}

/// Generates every legal hop for `color` at the start of a turn.
///
/// Capturing is mandatory: when any piece can jump, only jumps are returned.
pub fn legal_moves(board: &Board, color: Color) -> Vec<Move> {
    let mut steps = Vec::new();
    let mut jumps = Vec::new();

    for cell in board.pieces_of(color) {
        if let Some(piece) = board.piece_at(cell) {
            let moves = piece_moves(board, cell, piece);
            steps.extend(moves.steps);
            jumps.extend(moves.jumps);
        }
    }

    if jumps.is_empty() {
        steps
    } else {
        jumps
    }
}
