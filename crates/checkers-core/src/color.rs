//! Player color representation.

use serde::{Deserialize, Serialize};

/// Represents the two players in checkers.
///
/// Red starts on rows 1-3 and moves first; Black starts on rows 6-8.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[repr(u8)]
pub enum Color {
    Red = 0,
    Black = 1,
}

impl Color {
    /// Both colors, Red first.
    pub const ALL: [Color; 2] = [Color::Red, Color::Black];

    /// Returns the opposite color.
    #[inline]
    pub const fn opposite(self) -> Self {
        match self {
            Color::Red => Color::Black,
            Color::Black => Color::Red,
        }
    }

    /// Returns the index (0 for Red, 1 for Black).
    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Returns the row on which men of this color are crowned (8 for Red, 1 for Black).
    #[inline]
    pub const fn promotion_row(self) -> u8 {
        match self {
            Color::Red => 8,
            Color::Black => 1,
        }
    }

    /// Returns the layout character for the side to move ('r' or 'b').
    #[inline]
    pub const fn to_char(self) -> char {
        match self {
            Color::Red => 'r',
            Color::Black => 'b',
        }
    }

    /// Parses a side-to-move character, ignoring case.
    #[inline]
    pub const fn from_char(c: char) -> Option<Self> {
        match c {
            'r' | 'R' => Some(Color::Red),
            'b' | 'B' => Some(Color::Black),
            _ => None,
        }
    }
}

impl std::fmt::Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Color::Red => write!(f, "Red"),
            Color::Black => write!(f, "Black"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn opposite_color() {
        assert_eq!(Color::Red.opposite(), Color::Black);
        assert_eq!(Color::Black.opposite(), Color::Red);
    }

    #[test]
    fn color_index() {
        assert_eq!(Color::Red.index(), 0);
        assert_eq!(Color::Black.index(), 1);
    }

    #[test]
    fn promotion_row() {
        assert_eq!(Color::Red.promotion_row(), 8);
        assert_eq!(Color::Black.promotion_row(), 1);
    }

    #[test]
    fn char_roundtrip() {
        for color in Color::ALL {
            assert_eq!(Color::from_char(color.to_char()), Some(color));
        }
        assert_eq!(Color::from_char('w'), None);
    }

    #[test]
    fn display() {
        assert_eq!(format!("{}", Color::Red), "Red");
        assert_eq!(format!("{}", Color::Black), "Black");
    }

    #[test]
    fn serializes_lowercase() {
        assert_eq!(serde_json::to_string(&Color::Red).unwrap(), "\"red\"");
    }
}
