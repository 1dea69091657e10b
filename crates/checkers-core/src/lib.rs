//! Core types for checkers.
//!
//! This crate provides the fundamental types used across the engine:
//! - [`Piece`] and [`Color`] for piece representation
//! - [`Cell`] and [`Direction`] for board coordinates
//! - [`Move`] for a single step or jump
//! - [`Layout`] parsing and serialization

mod cell;
mod color;
mod layout;
mod mov;
mod piece;

pub use cell::{Cell, CellParseError, Direction};
pub use color::Color;
pub use layout::{Layout, LayoutError};
pub use mov::Move;
pub use piece::Piece;
