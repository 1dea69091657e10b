//! Cell set representation and operations.
//!
//! A cell set is a 32-bit integer where each bit represents one playable
//! cell, indexed by [`Cell::index`]. Piece placement, king status and the
//! set of cells that must jump are all stored this way.

use checkers_core::Cell;
use std::fmt;
use std::ops::{BitAnd, BitAndAssign, BitOr, BitOrAssign, Not};

/// A set of playable cells.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct CellSet(pub u32);

impl CellSet {
    /// Empty set.
    pub const EMPTY: CellSet = CellSet(0);

    // Home rows of each side in the standard setup
    pub const RED_HOME: CellSet = CellSet(0x0000_0FFF);
    pub const BLACK_HOME: CellSet = CellSet(0xFFF0_0000);

    /// Creates a set from a raw u32.
    #[inline]
    pub const fn new(bits: u32) -> Self {
        CellSet(bits)
    }

    /// Creates a set containing a single cell.
    #[inline]
    pub const fn from_cell(cell: Cell) -> Self {
        CellSet(1u32 << cell.index())
    }

    /// Returns true if the set is empty.
    #[inline]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Returns true if the set is not empty.
    #[inline]
    pub const fn is_not_empty(self) -> bool {
        self.0 != 0
    }

    /// Returns the number of cells in the set.
    #[inline]
    pub const fn count(self) -> u32 {
        self.0.count_ones()
    }

    /// Returns true if the given cell is in the set.
    #[inline]
    pub const fn contains(self, cell: Cell) -> bool {
        (self.0 & (1u32 << cell.index())) != 0
    }

    /// Adds the given cell.
    #[inline]
    pub fn set(&mut self, cell: Cell) {
        self.0 |= 1u32 << cell.index();
    }

    /// Removes the given cell.
    #[inline]
    pub fn clear(&mut self, cell: Cell) {
        self.0 &= !(1u32 << cell.index());
    }

    /// Pops and returns the lowest-indexed cell.
    #[inline]
    pub fn pop_lowest(&mut self) -> Option<Cell> {
        if self.0 == 0 {
            None
        } else {
            let index = self.0.trailing_zeros() as u8;
            self.0 &= self.0 - 1;
            Cell::from_index(index)
        }
    }
}

impl BitAnd for CellSet {
    type Output = Self;
    #[inline]
    fn bitand(self, rhs: Self) -> Self::Output {
        CellSet(self.0 & rhs.0)
    }
}

impl BitAndAssign for CellSet {
    #[inline]
    fn bitand_assign(&mut self, rhs: Self) {
        self.0 &= rhs.0;
    }
}

impl BitOr for CellSet {
    type Output = Self;
    #[inline]
    fn bitor(self, rhs: Self) -> Self::Output {
        CellSet(self.0 | rhs.0)
    }
}

impl BitOrAssign for CellSet {
    #[inline]
    fn bitor_assign(&mut self, rhs: Self) {
        self.0 |= rhs.0;
    }
}

impl Not for CellSet {
    type Output = Self;
    #[inline]
    fn not(self) -> Self::Output {
        CellSet(!self.0)
    }
}

impl FromIterator<Cell> for CellSet {
    fn from_iter<I: IntoIterator<Item = Cell>>(iter: I) -> Self {
        let mut set = CellSet::EMPTY;
        for cell in iter {
            set.set(cell);
        }
        set
    }
}

impl fmt::Debug for CellSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(*self).finish()
    }
}

/// Iterator over the cells in a set, lowest index first.
pub struct CellSetIter(CellSet);

impl Iterator for CellSetIter {
    type Item = Cell;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.0.pop_lowest()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let count = self.0.count() as usize;
        (count, Some(count))
    }
}

impl IntoIterator for CellSet {
    type Item = Cell;
    type IntoIter = CellSetIter;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        CellSetIter(self)
    }
}
