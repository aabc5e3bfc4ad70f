//! Terminal-oriented Unicode board renderer.
//!
//! Builds a human-readable board view from per-square piece queries for
//! debugging, tests, and the demo driver. Lives outside the rules core; it
//! only needs `Board::piece_at`.

use crate::board::chess_board::Board;
use crate::board::chess_types::{Color, PieceKind, Square};

/// Render the board to a Unicode string for terminal output.
///
/// Row 0 (the black back rank) is printed on top as rank 8.
pub fn render_board(board: &Board) -> String {
    let mut out = String::new();

    out.push_str("  a b c d e f g h\n");

    for row in 0..8 {
        let rank = char::from(b'8' - row as u8);
        out.push(rank);
        out.push(' ');

        for col in 0..8 {
            match board.piece_at(Square::at(row, col)) {
                Some(piece) => out.push(piece_to_unicode(piece.color, piece.kind)),
                None => out.push('·'),
            }
            if col < 7 {
                out.push(' ');
            }
        }

        out.push(' ');
        out.push(rank);
        out.push('\n');
    }

    out.push_str("  a b c d e f g h");

    out
}

fn piece_to_unicode(color: Color, kind: PieceKind) -> char {
    match (color, kind) {
        (Color::White, PieceKind::Pawn) => '♙',
        (Color::White, PieceKind::Knight) => '♘',
        (Color::White, PieceKind::Bishop) => '♗',
        (Color::White, PieceKind::Rook) => '♖',
        (Color::White, PieceKind::Queen) => '♕',
        (Color::White, PieceKind::King) => '♔',
        (Color::Black, PieceKind::Pawn) => '♟',
        (Color::Black, PieceKind::Knight) => '♞',
        (Color::Black, PieceKind::Bishop) => '♝',
        (Color::Black, PieceKind::Rook) => '♜',
        (Color::Black, PieceKind::Queen) => '♛',
        (Color::Black, PieceKind::King) => '♚',
    }
}
