//! Checkers piece representation.

use crate::{Color, Direction};
use serde::{Deserialize, Serialize};

/// A checker: a man, or a king once crowned on the far row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Piece {
    pub color: Color,
    pub is_king: bool,
}

impl Piece {
    /// Creates an uncrowned piece.
    #[inline]
    pub const fn man(color: Color) -> Self {
        Piece {
            color,
            is_king: false,
        }
    }

    /// Creates a king.
    #[inline]
    pub const fn king(color: Color) -> Self {
        Piece {
            color,
            is_king: true,
        }
    }

    /// Returns the directions this piece may move and capture in.
    ///
    /// Men only go toward the opponent's back row; kings go all four ways.
    #[inline]
    pub fn directions(self) -> &'static [Direction] {
        match (self.is_king, self.color) {
            (true, _) => &Direction::ALL,
            (false, Color::Red) => &Direction::UP,
            (false, Color::Black) => &Direction::DOWN,
        }
    }

    /// Returns the layout character for this piece.
    pub const fn to_char(self) -> char {
        match (self.color, self.is_king) {
            (Color::Red, false) => 'r',
            (Color::Red, true) => 'R',
            (Color::Black, false) => 'b',
            (Color::Black, true) => 'B',
        }
    }

    /// Parses a layout character into a piece.
    pub const fn from_char(c: char) -> Option<Self> {
        match c {
            'r' => Some(Piece::man(Color::Red)),
            'R' => Some(Piece::king(Color::Red)),
            'b' => Some(Piece::man(Color::Black)),
            'B' => Some(Piece::king(Color::Black)),
            _ => None,
        }
    }
}

impl std::fmt::Display for Piece {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.is_king {
            write!(f, "{} king", self.color)
        } else {
            write!(f, "{} man", self.color)
        }
    }
}
