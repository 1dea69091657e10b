//! Board layout strings.
//!
//! A layout lists the board from row 8 down to row 1, one group per row
//! separated by `/`. Each group covers that row's four playable cells from
//! left to right: `r`/`R` for a red man/king, `b`/`B` for a black man/king,
//! or a digit 1-4 for a run of empty cells. A space and the side to move
//! (`r` or `b`) follow.
//!
//! Men on their own promotion row are refused: such a piece would already
//! have been crowned.

use crate::{Cell, Color, Piece};
use std::fmt;
use thiserror::Error;

/// Errors that can occur when parsing layout strings.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum LayoutError {
    #[error("invalid layout: expected 2 parts, got {0}")]
    InvalidPartCount(usize),

    #[error("invalid layout: expected 8 rows, got {0}")]
    InvalidRowCount(usize),

    #[error("invalid row '{0}': must describe exactly 4 cells")]
    InvalidRowLength(String),

    #[error("invalid piece character '{0}'")]
    InvalidPiece(char),

    #[error("invalid side to move: expected 'r' or 'b', got '{0}'")]
    InvalidSideToMove(String),

    #[error("uncrowned {color} man on row {row}, where it would be a king")]
    UncrownedMan { color: Color, row: u8 },
}

/// A parsed layout: the contents of every playable cell and the side to move.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Layout {
    /// Cell contents indexed by [`Cell::index`].
    pub cells: [Option<Piece>; Cell::COUNT],
    pub to_move: Color,
}

impl Layout {
    /// The standard starting layout: twelve men per side, Red to move.
    pub const STARTPOS: &'static str = "bbbb/bbbb/bbbb/4/4/rrrr/rrrr/rrrr r";

    /// Parses a layout string.
    pub fn parse(layout: &str) -> Result<Self, LayoutError> {
        let parts: Vec<&str> = layout.split_whitespace().collect();
        if parts.len() != 2 {
            return Err(LayoutError::InvalidPartCount(parts.len()));
        }

        let rows: Vec<&str> = parts[0].split('/').collect();
        if rows.len() != 8 {
            return Err(LayoutError::InvalidRowCount(rows.len()));
        }

        let mut cells = [None; Cell::COUNT];
        for (i, row_str) in rows.iter().enumerate() {
            let row = 8 - i;
            let mut slot = 0usize;
            for c in row_str.chars() {
                if let Some(run) = c.to_digit(10) {
                    if run == 0 {
                        return Err(LayoutError::InvalidRowLength(row_str.to_string()));
                    }
                    slot += run as usize;
                } else {
                    let piece = Piece::from_char(c).ok_or(LayoutError::InvalidPiece(c))?;
                    if slot >= 4 {
                        return Err(LayoutError::InvalidRowLength(row_str.to_string()));
                    }
                    if !piece.is_king && usize::from(piece.color.promotion_row()) == row {
                        return Err(LayoutError::UncrownedMan {
                            color: piece.color,
                            row: piece.color.promotion_row(),
                        });
                    }
                    cells[(row - 1) * 4 + slot] = Some(piece);
                    slot += 1;
                }
            }
            if slot != 4 {
                return Err(LayoutError::InvalidRowLength(row_str.to_string()));
            }
        }

        let mut side = parts[1].chars();
        let to_move = match (side.next().and_then(Color::from_char), side.next()) {
            (Some(color), None) => color,
            _ => return Err(LayoutError::InvalidSideToMove(parts[1].to_string())),
        };

        Ok(Layout { cells, to_move })
    }

    /// Returns the piece on a cell.
    #[inline]
    pub fn piece_at(&self, cell: Cell) -> Option<Piece> {
        self.cells[cell.index() as usize]
    }
}

impl fmt::Display for Layout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in (0..8usize).rev() {
            let mut empty = 0;
            for slot in 0..4 {
                match self.cells[row * 4 + slot] {
                    Some(piece) => {
                        if empty > 0 {
                            write!(f, "{}", empty)?;
                            empty = 0;
                        }
                        write!(f, "{}", piece.to_char())?;
                    }
                    None => empty += 1,
                }
            }
            if empty > 0 {
                write!(f, "{}", empty)?;
            }
            if row > 0 {
                write!(f, "/")?;
            }
        }
        write!(f, " {}", self.to_move.to_char())
    }
}
