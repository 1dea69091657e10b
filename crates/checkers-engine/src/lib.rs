//! Rule engine for American checkers.
//!
//! This crate provides:
//! - [`CellSet`] - 32-bit set of playable cells
//! - [`Board`] - piece placement with men and kings of both colors
//! - [`Game`] - turn control driven by cell selections, with undo
//! - Move generation with mandatory captures and multi-jumps
//! - Win detection when a player has no pieces or no moves
//!
//! # Architecture
//!
//! Only the 32 dark cells are represented. Each color's pieces and the set
//! of kings are bitsets over those cells, and move generation walks one
//! table of diagonal directions per piece kind.
//!
//! # Example
//!
//! ```
//! use checkers_core::{Cell, Color};
//! use checkers_engine::{Game, SelectionOutcome};
//!
//! let mut game = Game::new();
//! let d3 = Cell::from_name("d3").unwrap();
//! let e4 = Cell::from_name("e4").unwrap();
//!
//! assert!(matches!(game.select_cell(d3), SelectionOutcome::Highlighted { .. }));
//! game.select_cell(e4);
//! assert_eq!(game.current_player(), Color::Black);
//!
//! game.undo();
//! assert_eq!(game.current_player(), Color::Red);
//! ```

mod board;
mod cellset;
mod executor;
mod game;
pub mod movegen;
pub mod rules;

pub use board::{Board, BoardSnapshot, PlacedPiece};
pub use cellset::CellSet;
pub use executor::{apply_move, revert, UndoRecord};
pub use game::{Game, GameError, GameState, SelectionOutcome, TurnPhase, UndoOutcome};
pub use movegen::{
    candidate_moves, has_any_move, jump_origins, jumps_from, legal_moves, CandidateMoves,
    EngineError,
};
pub use rules::{evaluate, GameResult, LossReason};
