//! Board cell and direction representation.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Errors that can occur when parsing a cell name.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CellParseError {
    #[error("invalid cell '{0}': expected a column a-h followed by a row 1-8")]
    InvalidFormat(String),

    #[error("cell '{0}' is a light square and never holds a piece")]
    NotPlayable(String),
}

/// One of the four diagonal directions.
///
/// "Up" points toward row 8, "left" toward column a.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    UpLeft,
    UpRight,
    DownLeft,
    DownRight,
}

impl Direction {
    /// All four diagonals.
    pub const ALL: [Direction; 4] = [
        Direction::UpLeft,
        Direction::UpRight,
        Direction::DownLeft,
        Direction::DownRight,
    ];

    /// The two diagonals toward row 8.
    pub const UP: [Direction; 2] = [Direction::UpLeft, Direction::UpRight];

    /// The two diagonals toward row 1.
    pub const DOWN: [Direction; 2] = [Direction::DownLeft, Direction::DownRight];

    /// Row delta of one step in this direction.
    #[inline]
    pub const fn row_delta(self) -> i8 {
        match self {
            Direction::UpLeft | Direction::UpRight => 1,
            Direction::DownLeft | Direction::DownRight => -1,
        }
    }

    /// Column delta of one step in this direction.
    #[inline]
    pub const fn column_delta(self) -> i8 {
        match self {
            Direction::UpLeft | Direction::DownLeft => -1,
            Direction::UpRight | Direction::DownRight => 1,
        }
    }
}

/// A playable (dark) cell of the 8x8 board.
///
/// Rows and columns both run 1-8; a cell is playable when `row + column` is
/// odd, which leaves 32 cells. They are indexed densely, row by row:
/// - b1 = 0, d1 = 1, f1 = 2, h1 = 3
/// - a2 = 4, ..., g8 = 31
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Cell(u8);

impl Cell {
    /// Number of playable cells.
    pub const COUNT: usize = 32;

    /// Creates a cell from row and column (both 1-8).
    ///
    /// Returns `None` off the board and on light squares.
    #[inline]
    pub const fn new(row: u8, column: u8) -> Option<Self> {
        if row < 1 || row > 8 || column < 1 || column > 8 || (row + column) % 2 == 0 {
            return None;
        }
        Some(Cell((row - 1) * 4 + (column - 1) / 2))
    }

    /// Creates a cell from its dense index (0-31).
    #[inline]
    pub const fn from_index(index: u8) -> Option<Self> {
        if (index as usize) < Self::COUNT {
            Some(Cell(index))
        } else {
            None
        }
    }

    /// Returns the dense index (0-31).
    #[inline]
    pub const fn index(self) -> u8 {
        self.0
    }

    /// Returns the row (1-8).
    #[inline]
    pub const fn row(self) -> u8 {
        self.0 / 4 + 1
    }

    /// Returns the column (1-8).
    #[inline]
    pub const fn column(self) -> u8 {
        // odd rows hold the even columns and vice versa
        let first = if self.row() % 2 == 1 { 2 } else { 1 };
        (self.0 % 4) * 2 + first
    }

    /// Returns the neighbouring cell in the given direction, if it is on the board.
    #[inline]
    pub const fn offset(self, direction: Direction) -> Option<Self> {
        let row = self.row() as i8 + direction.row_delta();
        let column = self.column() as i8 + direction.column_delta();
        if row < 1 || row > 8 || column < 1 || column > 8 {
            return None;
        }
        Cell::new(row as u8, column as u8)
    }

    /// Returns the cell midway between two cells two diagonal steps apart.
    pub fn midpoint(self, other: Cell) -> Option<Cell> {
        let dr = other.row() as i8 - self.row() as i8;
        let dc = other.column() as i8 - self.column() as i8;
        if dr.abs() != 2 || dc.abs() != 2 {
            return None;
        }
        Cell::new(
            (self.row() as i8 + dr / 2) as u8,
            (self.column() as i8 + dc / 2) as u8,
        )
    }

    /// Iterates over all 32 playable cells in index order.
    pub fn all() -> impl Iterator<Item = Cell> {
        (0..Self::COUNT as u8).map(Cell)
    }

    /// Parses a cell name such as "b1".
    pub fn from_name(s: &str) -> Result<Self, CellParseError> {
        let bytes = s.as_bytes();
        if bytes.len() != 2 {
            return Err(CellParseError::InvalidFormat(s.to_string()));
        }
        let column = match bytes[0].to_ascii_lowercase() {
            c @ b'a'..=b'h' => c - b'a' + 1,
            _ => return Err(CellParseError::InvalidFormat(s.to_string())),
        };
        let row = match bytes[1] {
            r @ b'1'..=b'8' => r - b'0',
            _ => return Err(CellParseError::InvalidFormat(s.to_string())),
        };
        Cell::new(row, column).ok_or_else(|| CellParseError::NotPlayable(s.to_string()))
    }

    /// Returns the cell name, e.g. "b1".
    pub fn name(self) -> String {
        format!("{}{}", (b'a' + self.column() - 1) as char, self.row())
    }
}

impl FromStr for Cell {
    type Err = CellParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Cell::from_name(s)
    }
}

impl fmt::Debug for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Cell({})", self.name())
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl Serialize for Cell {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.name())
    }
}

impl<'de> Deserialize<'de> for Cell {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let name = String::deserialize(deserializer)?;
        Cell::from_name(&name).map_err(serde::de::Error::custom)
    }
}
