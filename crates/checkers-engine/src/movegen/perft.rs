//! Perft for move generator validation.
//!
//! Perft counts the number of distinct turn sequences of a given length.
//! A whole multi-jump is one turn, so a chain of hops is followed to its end
//! without using up depth.

use super::{jumps_from, legal_moves, EngineError};
use crate::executor::{apply_move, revert};
use crate::Board;
use checkers_core::{Color, Move};

/// Counts the number of leaf nodes at the given depth.
///
/// # Errors
///
/// Returns an [`EngineError`] if a generated hop cannot be played or taken
/// back, which means the generator and the executor disagree.
pub fn perft(board: &Board, to_move: Color, depth: u32) -> Result<u64, EngineError> {
    if depth == 0 {
        return Ok(1);
    }

    let mut board = board.clone();
    count(&mut board, to_move, depth)
}

/// Perft with divide: node count below each opening hop, sorted by hop.
pub fn perft_divide(
    board: &Board,
    to_move: Color,
    depth: u32,
) -> Result<Vec<(String, u64)>, EngineError> {
    let mut board = board.clone();
    let mut results = Vec::new();
    for mv in legal_moves(&board, to_move) {
        let nodes = play_turn(&mut board, mv, to_move, depth.max(1))?;
        results.push((mv.to_string(), nodes));
    }

    results.sort_by(|a, b| a.0.cmp(&b.0));
    Ok(results)
}

fn count(board: &mut Board, to_move: Color, depth: u32) -> Result<u64, EngineError> {
    let mut nodes = 0;
    for mv in legal_moves(board, to_move) {
        nodes += play_turn(board, mv, to_move, depth)?;
    }
    Ok(nodes)
}

/// Plays `mv` and every chain it may start, counting the leaves below.
fn play_turn(board: &mut Board, mv: Move, mover: Color, depth: u32) -> Result<u64, EngineError> {
    let record = apply_move(board, mv, mover)?;
    let continuations = if record.is_jump {
        jumps_from(board, mv.to)
    } else {
        Vec::new()
    };

    let nodes = if !continuations.is_empty() {
        let mut nodes = 0;
        for next in continuations {
            nodes += play_turn(board, next, mover, depth)?;
        }
        nodes
    } else if depth == 1 {
        1
    } else {
        count(board, mover.opposite(), depth - 1)?
    };

    revert(board, &record)?;
    Ok(nodes)
}
