//! Win detection.
//!
//! Checkers has no draws in this engine: a game ends only when the player
//! about to move has no pieces left or none of their pieces can move.

use crate::movegen::has_any_move;
use crate::Board;
use checkers_core::Color;
use serde::{Deserialize, Serialize};

/// Why the losing side lost.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LossReason {
    /// Every piece has been captured.
    NoPieces,
    /// Pieces remain but none has a step or a jump.
    Blocked,
}

/// Result of a finished game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameResult {
    pub winner: Color,
    pub reason: LossReason,
}

impl GameResult {
    /// Returns the losing side.
    #[inline]
    pub const fn loser(self) -> Color {
        self.winner.opposite()
    }
}

/// Decides whether `to_move` has lost before starting their turn.
pub fn evaluate(board: &Board, to_move: Color) -> Option<GameResult> {
    let reason = if board.count(to_move) == 0 {
        LossReason::NoPieces
    } else if !has_any_move(board, to_move) {
        LossReason::Blocked
    } else {
        return None;
    };

    Some(GameResult {
        winner: to_move.opposite(),
        reason,
    })
}
