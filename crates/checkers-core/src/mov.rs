//! Move representation.

use crate::Cell;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A single hop of a checker: a step to an adjacent cell, or a jump over
/// an opposing piece.
///
/// A multi-jump turn is a sequence of jump moves by the same piece.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    pub from: Cell,
    pub to: Cell,
    /// The cell of the piece removed by this hop, if it is a jump.
    pub captured: Option<Cell>,
}

impl Move {
    /// Creates a simple step.
    #[inline]
    pub const fn step(from: Cell, to: Cell) -> Self {
        Move {
            from,
            to,
            captured: None,
        }
    }

    /// Creates a jump from `from` over `over` landing on `to`.
    #[inline]
    pub const fn jump(from: Cell, over: Cell, to: Cell) -> Self {
        Move {
            from,
            to,
            captured: Some(over),
        }
    }

    /// Returns true if this move captures a piece.
    #[inline]
    pub const fn is_jump(self) -> bool {
        self.captured.is_some()
    }
}

impl fmt::Debug for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Move({})", self)
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sep = if self.is_jump() { 'x' } else { '-' };
        write!(f, "{}{}{}", self.from, sep, self.to)
    }
}
