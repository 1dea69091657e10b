//! Applying and reverting single hops.

use crate::movegen::EngineError;
use crate::Board;
use checkers_core::{Cell, Color, Direction, Move, Piece};
use serde::{Deserialize, Serialize};

/// Everything needed to take one hop back.
///
/// The captured piece is stored explicitly (color and king flag) so that a
/// king taken by a man comes back as a king.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct UndoRecord {
    pub from: Cell,
    pub to: Cell,
    pub mover: Color,
    pub is_jump: bool,
    pub captured_cell: Option<Cell>,
    pub captured_piece: Option<Piece>,
    pub promoted: bool,
}

impl UndoRecord {
    /// Returns the hop this record describes.
    pub fn as_move(&self) -> Move {
        Move {
            from: self.from,
            to: self.to,
            captured: self.captured_cell,
        }
    }
}

/// Checks that `mv` is a hop `mover` can make and returns the moving piece.
fn check_hop(board: &Board, mv: Move, mover: Color) -> Result<Piece, EngineError> {
    let piece = board
        .piece_at(mv.from)
        .ok_or(EngineError::EmptyCell(mv.from))?;
    if piece.color != mover {
        return Err(EngineError::WrongMover {
            cell: mv.from,
            mover,
        });
    }
    if board.piece_at(mv.to).is_some() {
        return Err(EngineError::OccupiedCell(mv.to));
    }

    let reach = |direction: Direction| {
        let next = mv.from.offset(direction);
        if mv.is_jump() {
            next.and_then(|cell| cell.offset(direction))
        } else {
            next
        }
    };
    if !piece.directions().iter().any(|&d| reach(d) == Some(mv.to)) {
        return Err(EngineError::IllegalHop(mv));
    }

    if let Some(captured) = mv.captured {
        let victim = board.piece_at(captured).map(|p| p.color);
        if mv.from.midpoint(mv.to) != Some(captured) || victim != Some(mover.opposite()) {
            return Err(EngineError::InvalidCapture(captured));
        }
    }

    Ok(piece)
}

/// Plays one hop on the board and returns the record that reverses it.
///
/// The piece is relocated, a jumped piece is removed, and a man reaching
/// its promotion row is crowned.
///
/// # Errors
///
/// Returns an [`EngineError`] and leaves the board untouched if `mv` is not
/// a step or jump the piece on `mv.from` can make for `mover`.
pub fn apply_move(board: &mut Board, mv: Move, mover: Color) -> Result<UndoRecord, EngineError> {
    let piece = check_hop(board, mv, mover)?;

    board.remove(mv.from);
    board.place(mv.to, piece);
    let captured_piece = mv.captured.and_then(|cell| board.remove(cell));

    let promoted = !piece.is_king && mv.to.row() == piece.color.promotion_row();
    if promoted {
        board.crown(mv.to);
    }

    Ok(UndoRecord {
        from: mv.from,
        to: mv.to,
        mover,
        is_jump: mv.is_jump(),
        captured_cell: mv.captured,
        captured_piece,
        promoted,
    })
}

/// Reverses a hop previously played with [`apply_move`].
///
/// # Errors
///
/// Returns an [`EngineError`] and leaves the board untouched if the record
/// does not match the board: nothing on `to`, something on `from` or on the
/// captured cell, or a capture without the captured piece.
pub fn revert(board: &mut Board, record: &UndoRecord) -> Result<(), EngineError> {
    let piece = board
        .piece_at(record.to)
        .ok_or(EngineError::EmptyCell(record.to))?;
    if board.piece_at(record.from).is_some() {
        return Err(EngineError::OccupiedCell(record.from));
    }

    let restored = match (record.captured_cell, record.captured_piece) {
        (Some(cell), _) if board.piece_at(cell).is_some() => {
            return Err(EngineError::OccupiedCell(cell));
        }
        (Some(cell), Some(captured)) => Some((cell, captured)),
        (Some(cell), None) => return Err(EngineError::InvalidCapture(cell)),
        (None, _) => None,
    };

    board.remove(record.to);
    board.place(record.from, piece);
    if record.promoted {
        board.uncrown(record.from);
    }
    if let Some((cell, captured)) = restored {
        board.place(cell, captured);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cell(name: &str) -> Cell {
        Cell::from_name(name).unwrap()
    }

    fn board(layout: &str) -> Board {
        Board::parse_layout(layout).unwrap().0
    }

    #[test]
    fn step_relocates_piece() {
        let mut board = Board::startpos();
        let record =
            apply_move(&mut board, Move::step(cell("d3"), cell("e4")), Color::Red).unwrap();
        assert_eq!(board.piece_at(cell("d3")), None);
        assert_eq!(board.piece_at(cell("e4")), Some(Piece::man(Color::Red)));
        assert!(!record.is_jump);
        assert!(!record.promoted);
        assert_eq!(record.captured_piece, None);
    }

    #[test]
    fn jump_removes_captured_piece() {
        let mut board = board("4/4/4/1B2/2r1/4/4/4 r");
        let record = apply_move(
            &mut board,
            Move::jump(cell("e4"), cell("d5"), cell("c6")),
            Color::Red,
        )
        .unwrap();
        assert_eq!(board.count(Color::Black), 0);
        assert_eq!(record.captured_cell, Some(cell("d5")));
        assert_eq!(record.captured_piece, Some(Piece::king(Color::Black)));
    }

    #[test]
    fn reaching_far_row_promotes() {
        let mut board = board("4/1r2/4/4/4/4/4/4 r");
        let record =
            apply_move(&mut board, Move::step(cell("d7"), cell("c8")), Color::Red).unwrap();
        assert!(record.promoted);
        assert_eq!(board.piece_at(cell("c8")), Some(Piece::king(Color::Red)));

        let mut board = board_black_near_row_one();
        let record =
            apply_move(&mut board, Move::step(cell("c2"), cell("b1")), Color::Black).unwrap();
        assert!(record.promoted);
        assert_eq!(board.piece_at(cell("b1")), Some(Piece::king(Color::Black)));
    }

    fn board_black_near_row_one() -> Board {
        board("4/4/4/4/4/4/1b2/4 b")
    }

    #[test]
    fn kings_are_not_promoted_again() {
        let mut board = board("4/1R2/4/4/4/4/4/4 r");
        let record =
            apply_move(&mut board, Move::step(cell("d7"), cell("c8")), Color::Red).unwrap();
        assert!(!record.promoted);
    }

    #[test]
    fn revert_restores_exact_board() {
        let original = board("4/4/4/1B2/2r1/4/4/4 r");
        let mut board = original.clone();
        let record = apply_move(
            &mut board,
            Move::jump(cell("e4"), cell("d5"), cell("c6")),
            Color::Red,
        )
        .unwrap();
        revert(&mut board, &record).unwrap();
        assert_eq!(board, original);
    }

    #[test]
    fn revert_demotes() {
        let original = board("4/1r2/4/4/4/4/4/4 r");
        let mut board = original.clone();
        let record =
            apply_move(&mut board, Move::step(cell("d7"), cell("c8")), Color::Red).unwrap();
        revert(&mut board, &record).unwrap();
        assert_eq!(board, original);
        assert!(board.kings.is_empty());
    }

    #[test]
    fn record_converts_back_to_move() {
        let mv = Move::jump(cell("e4"), cell("d5"), cell("c6"));
        let mut board = board("4/4/4/1b2/2r1/4/4/4 r");
        let record = apply_move(&mut board, mv, Color::Red).unwrap();
        assert_eq!(record.as_move(), mv);
    }

    #[test]
    fn empty_origin_is_rejected() {
        let mut board = Board::startpos();
        assert_eq!(
            apply_move(&mut board, Move::step(cell("c4"), cell("d5")), Color::Red),
            Err(EngineError::EmptyCell(cell("c4")))
        );
        assert_eq!(board, Board::startpos());
        assert_eq!(board.count(Color::Red), 12);
    }

    #[test]
    fn occupied_landing_is_rejected() {
        let mut board = Board::startpos();
        assert_eq!(
            apply_move(&mut board, Move::step(cell("d3"), cell("c2")), Color::Red),
            Err(EngineError::OccupiedCell(cell("c2")))
        );
        assert_eq!(board, Board::startpos());
    }

    #[test]
    fn wrong_mover_is_rejected() {
        let mut board = Board::startpos();
        assert_eq!(
            apply_move(&mut board, Move::step(cell("c6"), cell("d5")), Color::Red),
            Err(EngineError::WrongMover {
                cell: cell("c6"),
                mover: Color::Red,
            })
        );
        assert_eq!(board, Board::startpos());
    }

    #[test]
    fn men_cannot_hop_backward_or_far() {
        let mut board = board("4/4/4/4/2r1/4/4/4 r");
        let backward = Move::step(cell("e4"), cell("d3"));
        assert_eq!(
            apply_move(&mut board, backward, Color::Red),
            Err(EngineError::IllegalHop(backward))
        );
        let far = Move::step(cell("e4"), cell("g6"));
        assert_eq!(
            apply_move(&mut board, far, Color::Red),
            Err(EngineError::IllegalHop(far))
        );
    }

    #[test]
    fn jump_needs_an_opposing_piece() {
        let original = board("4/4/4/4/2r1/4/4/4 r");
        let mut board = original.clone();
        assert_eq!(
            apply_move(
                &mut board,
                Move::jump(cell("e4"), cell("d5"), cell("c6")),
                Color::Red
            ),
            Err(EngineError::InvalidCapture(cell("d5")))
        );
        assert_eq!(board, original);

        let original = self::board("4/4/4/1r2/2r1/4/4/4 r");
        let mut board = original.clone();
        assert_eq!(
            apply_move(
                &mut board,
                Move::jump(cell("e4"), cell("d5"), cell("c6")),
                Color::Red
            ),
            Err(EngineError::InvalidCapture(cell("d5")))
        );
        assert_eq!(board, original);
    }

    #[test]
    fn captured_cell_must_be_the_midpoint() {
        let mut board = board("4/4/4/1b2/2r1/4/4/4 r");
        assert_eq!(
            apply_move(
                &mut board,
                Move::jump(cell("e4"), cell("f5"), cell("c6")),
                Color::Red
            ),
            Err(EngineError::InvalidCapture(cell("f5")))
        );
    }

    #[test]
    fn revert_rejects_mismatched_records() {
        let original = board("4/4/4/1b2/2r1/4/4/4 r");
        let mut board = original.clone();

        let missing_piece = UndoRecord {
            from: cell("c2"),
            to: cell("d3"),
            mover: Color::Red,
            is_jump: false,
            captured_cell: None,
            captured_piece: None,
            promoted: false,
        };
        assert_eq!(
            revert(&mut board, &missing_piece),
            Err(EngineError::EmptyCell(cell("d3")))
        );

        let phantom_capture = UndoRecord {
            from: cell("c2"),
            to: cell("e4"),
            mover: Color::Red,
            is_jump: true,
            captured_cell: Some(cell("d3")),
            captured_piece: None,
            promoted: false,
        };
        assert_eq!(
            revert(&mut board, &phantom_capture),
            Err(EngineError::InvalidCapture(cell("d3")))
        );

        let occupied_origin = UndoRecord {
            from: cell("d5"),
            ..phantom_capture
        };
        assert_eq!(
            revert(&mut board, &occupied_origin),
            Err(EngineError::OccupiedCell(cell("d5")))
        );
        assert_eq!(board, original);
    }
}
