//! Checkers board representation.

use checkers_core::{Cell, Color, Layout, LayoutError, Piece};
use serde::{Deserialize, Serialize};

use crate::CellSet;

/// Placement of every piece on the board.
///
/// Each playable cell holds at most one piece; light cells cannot be
/// addressed at all, so pieces never stand on them.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Board {
    /// Cells occupied by each color's pieces.
    pub colors: [CellSet; 2],

    /// Cells occupied by kings of either color.
    pub kings: CellSet,
}

/// A piece and the cell it stands on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlacedPiece {
    pub cell: Cell,
    #[serde(flatten)]
    pub piece: Piece,
}

/// A rendering-friendly copy of the board.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardSnapshot {
    /// Every piece, in cell index order.
    pub pieces: Vec<PlacedPiece>,
    pub red_count: u32,
    pub black_count: u32,
}

impl BoardSnapshot {
    /// Returns the piece on a cell.
    pub fn piece_at(&self, cell: Cell) -> Option<Piece> {
        self.pieces
            .iter()
            .find(|placed| placed.cell == cell)
            .map(|placed| placed.piece)
    }
}

impl Board {
    /// Creates an empty board.
    pub fn empty() -> Self {
        Board {
            colors: [CellSet::EMPTY; 2],
            kings: CellSet::EMPTY,
        }
    }

    /// Creates the standard starting board: twelve men per side on the
    /// three rows nearest each player.
    pub fn startpos() -> Self {
        Board {
            colors: [CellSet::RED_HOME, CellSet::BLACK_HOME],
            kings: CellSet::EMPTY,
        }
    }

    /// Creates a board from a parsed layout.
    pub fn from_layout(layout: &Layout) -> Self {
        let mut board = Board::empty();
        for cell in Cell::all() {
            if let Some(piece) = layout.piece_at(cell) {
                board.place(cell, piece);
            }
        }
        board
    }

    /// Parses a layout string into a board and the side to move.
    pub fn parse_layout(layout: &str) -> Result<(Self, Color), LayoutError> {
        let parsed = Layout::parse(layout)?;
        Ok((Board::from_layout(&parsed), parsed.to_move))
    }

    /// Converts the board to a layout with the given side to move.
    pub fn to_layout(&self, to_move: Color) -> Layout {
        let mut cells = [None; Cell::COUNT];
        for cell in Cell::all() {
            cells[cell.index() as usize] = self.piece_at(cell);
        }
        Layout { cells, to_move }
    }

    /// Returns the piece at the given cell, if any.
    pub fn piece_at(&self, cell: Cell) -> Option<Piece> {
        let color = if self.colors[Color::Red.index()].contains(cell) {
            Color::Red
        } else if self.colors[Color::Black.index()].contains(cell) {
            Color::Black
        } else {
            return None;
        };

        Some(Piece {
            color,
            is_king: self.kings.contains(cell),
        })
    }

    /// Puts a piece on a cell, replacing whatever stood there.
    pub fn place(&mut self, cell: Cell, piece: Piece) {
        self.remove(cell);
        self.colors[piece.color.index()].set(cell);
        if piece.is_king {
            self.kings.set(cell);
        }
    }

    /// Takes the piece off a cell and returns it.
    pub fn remove(&mut self, cell: Cell) -> Option<Piece> {
        let piece = self.piece_at(cell)?;
        self.colors[piece.color.index()].clear(cell);
        self.kings.clear(cell);
        Some(piece)
    }

    /// Crowns the piece on a cell.
    #[inline]
    pub fn crown(&mut self, cell: Cell) {
        if self.occupied().contains(cell) {
            self.kings.set(cell);
        }
    }

    /// Turns the king on a cell back into a man.
    #[inline]
    pub fn uncrown(&mut self, cell: Cell) {
        self.kings.clear(cell);
    }

    /// Returns a set of all occupied cells.
    #[inline]
    pub fn occupied(&self) -> CellSet {
        self.colors[0] | self.colors[1]
    }

    /// Returns a set of all empty cells.
    #[inline]
    pub fn empty_cells(&self) -> CellSet {
        !self.occupied()
    }

    /// Returns the cells holding pieces of the given color.
    #[inline]
    pub fn pieces_of(&self, color: Color) -> CellSet {
        self.colors[color.index()]
    }

    /// Returns the number of pieces of the given color.
    #[inline]
    pub fn count(&self, color: Color) -> u32 {
        self.colors[color.index()].count()
    }

    /// Returns a copy of the board for rendering.
    pub fn snapshot(&self) -> BoardSnapshot {
        let pieces = self
            .occupied()
            .into_iter()
            .filter_map(|cell| self.piece_at(cell).map(|piece| PlacedPiece { cell, piece }))
            .collect();
        BoardSnapshot {
            pieces,
            red_count: self.count(Color::Red),
            black_count: self.count(Color::Black),
        }
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::startpos()
    }
}
