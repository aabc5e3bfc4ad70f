//! Check-safety filtering over pseudo-legal candidates.
//!
//! Every candidate move is played out on a deep scratch clone of the board,
//! the clone is reclassified (refreshing its own king cache), and the move
//! is discarded when the mover's king square shows up among the opponent's
//! pseudo-legal destinations. Full re-derivation per candidate is the
//! costliest part of the engine and fine at 8x8 scale.

use log::trace;

use crate::board::chess_board::Board;
use crate::board::chess_types::{Color, PieceKind, Square};
use crate::board::square_status::{classify, StatusTable};
use crate::move_generation::pseudo_moves::pseudo_legal_moves;

/// Legality-filtered destinations for one piece.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PieceMoves {
    pub from: Square,
    pub kind: PieceKind,
    pub moves: Vec<Square>,
}

fn collect_pieces(board: &Board, color: Color) -> Vec<(Square, PieceKind)> {
    let mut pieces = Vec::new();
    for row in 0..8 {
        for col in 0..8 {
            let square = Square::at(row, col);
            if let Some(piece) = board.piece_at(square) {
                if piece.color == color {
                    pieces.push((square, piece.kind));
                }
            }
        }
    }
    pieces
}

/// Every pseudo-legal destination reachable by any piece of `color`,
/// flattened into one list. Membership of a king square in this list is the
/// check test.
pub fn all_pseudo_destinations(
    board: &Board,
    color: Color,
    statuses: &StatusTable,
) -> Vec<Square> {
    let mut out = Vec::new();
    for (from, kind) in collect_pieces(board, color) {
        out.extend(pseudo_legal_moves(kind, from, color, statuses));
    }
    out
}

/// Whether the `color` king currently stands on a square the opponent can
/// reach. Classifies the given board, so its king cache is refreshed first.
pub fn is_king_in_check(board: &mut Board, color: Color) -> bool {
    let tables = classify(board);
    let enemy = color.opposite();
    let enemy_destinations = all_pseudo_destinations(board, enemy, tables.for_color(enemy));
    enemy_destinations.contains(&board.king_square(color))
}

/// The legality-filtered move sets for every piece of `color`.
///
/// Each candidate is simulated on a fresh clone: the piece is relocated with
/// no other side effects, the clone reclassified, and the candidate kept
/// only if the mover's king is not attacked afterwards. Surviving lists are
/// also written back into each piece's `cached_moves`.
pub fn generate_legal_moves(board: &mut Board, color: Color) -> Vec<PieceMoves> {
    let tables = classify(board);
    let own_statuses = tables.for_color(color);

    let mut result = Vec::new();
    for (from, kind) in collect_pieces(board, color) {
        let candidates = pseudo_legal_moves(kind, from, color, own_statuses);

        let mut safe = Vec::with_capacity(candidates.len());
        for to in candidates {
            let mut scratch = board.clone();
            scratch.relocate(from, to);
            if is_king_in_check(&mut scratch, color) {
                trace!("discarding {kind} {from} -> {to}: own king left attacked");
                continue;
            }
            safe.push(to);
        }

        if let Some(piece) = board.piece_at_mut(from) {
            piece.cached_moves = safe.clone();
        }
        result.push(PieceMoves {
            from,
            kind,
            moves: safe,
        });
    }
    result
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;

    use super::*;
    use crate::board::chess_types::Piece;

    fn legal_set(board: &mut Board, color: Color, from: Square) -> BTreeSet<Square> {
        generate_legal_moves(board, color)
            .into_iter()
            .find(|piece_moves| piece_moves.from == from)
            .map(|piece_moves| piece_moves.moves.into_iter().collect())
            .unwrap_or_default()
    }

    #[test]
    fn a_pinned_piece_may_not_leave_the_pin_line() {
        let mut board = Board::empty();
        board.place(Piece::new(PieceKind::King, Color::White, Square::at(7, 4)));
        board.place(Piece::new(PieceKind::Bishop, Color::White, Square::at(5, 4)));
        board.place(Piece::new(PieceKind::Rook, Color::Black, Square::at(0, 4)));
        board.place(Piece::new(PieceKind::King, Color::Black, Square::at(0, 0)));

        // Every bishop move is diagonal and would expose the king to the
        // rook behind it.
        let bishop = legal_set(&mut board, Color::White, Square::at(5, 4));
        assert!(bishop.is_empty());
    }

    #[test]
    fn the_king_may_not_stay_on_an_attacked_file() {
        let mut board = Board::empty();
        board.place(Piece::new(PieceKind::King, Color::White, Square::at(7, 4)));
        board.place(Piece::new(PieceKind::Rook, Color::Black, Square::at(0, 4)));
        board.place(Piece::new(PieceKind::King, Color::Black, Square::at(0, 0)));

        let king = legal_set(&mut board, Color::White, Square::at(7, 4));
        assert!(!king.contains(&Square::at(6, 4)));
        assert_eq!(
            king,
            BTreeSet::from([
                Square::at(6, 3),
                Square::at(6, 5),
                Square::at(7, 3),
                Square::at(7, 5),
            ])
        );
    }

    #[test]
    fn check_detection_respects_blockers() {
        let mut board = Board::empty();
        board.place(Piece::new(PieceKind::King, Color::White, Square::at(7, 4)));
        board.place(Piece::new(PieceKind::Rook, Color::Black, Square::at(0, 4)));
        board.place(Piece::new(PieceKind::King, Color::Black, Square::at(0, 0)));

        assert!(is_king_in_check(&mut board, Color::White));

        board.place(Piece::new(PieceKind::Pawn, Color::White, Square::at(3, 4)));
        assert!(!is_king_in_check(&mut board, Color::White));
    }

    #[test]
    fn capturing_the_checking_piece_is_legal() {
        let mut board = Board::empty();
        board.place(Piece::new(PieceKind::King, Color::White, Square::at(7, 4)));
        board.place(Piece::new(PieceKind::Rook, Color::Black, Square::at(7, 0)));
        board.place(Piece::new(PieceKind::Rook, Color::White, Square::at(5, 0)));
        board.place(Piece::new(PieceKind::King, Color::Black, Square::at(0, 7)));

        // While in check, the white rook's only legal move is to capture
        // the attacker; none of its other squares resolve the check.
        let rook = legal_set(&mut board, Color::White, Square::at(5, 0));
        assert_eq!(rook, BTreeSet::from([Square::at(7, 0)]));
    }

    #[test]
    fn legal_moves_are_written_back_into_the_piece_cache() {
        let mut board = Board::new();
        let moves = generate_legal_moves(&mut board, Color::White);

        let pawn_entry = moves
            .iter()
            .find(|piece_moves| piece_moves.from == Square::at(6, 4))
            .expect("e2 pawn present");
        let cached = &board
            .piece_at(Square::at(6, 4))
            .expect("e2 pawn present")
            .cached_moves;
        assert_eq!(&pawn_entry.moves, cached);
        assert_eq!(pawn_entry.moves.len(), 2);
    }

    #[test]
    fn the_initial_position_has_twenty_legal_moves_per_side() {
        let mut board = Board::new();
        for color in [Color::White, Color::Black] {
            let total: usize = generate_legal_moves(&mut board, color)
                .iter()
                .map(|piece_moves| piece_moves.moves.len())
                .sum();
            assert_eq!(total, 20);
        }
    }
}
