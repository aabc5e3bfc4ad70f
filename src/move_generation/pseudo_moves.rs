//! Piece-wise pseudo-legal move generation.
//!
//! Each generator reads only its own color's status table plus board
//! geometry and pushes candidate destinations into an out vector; none of
//! them touch the board. Check safety is the legality filter's concern.

use crate::board::chess_types::{Color, PieceKind, Square};
use crate::board::square_status::StatusTable;
use crate::move_generation::slider_rays::{
    generate_slider_moves, BISHOP_DIRECTIONS, ROOK_DIRECTIONS,
};
use crate::move_generation::step_offsets::{
    generate_step_moves, KING_OFFSETS, KNIGHT_OFFSETS,
};

/// Pawns move toward decreasing rows as white, increasing rows as black.
/// The double step is only available from the starting rank and only when
/// both forward squares are clear; diagonal steps are capture-only.
pub fn generate_pawn_moves(
    from: Square,
    color: Color,
    statuses: &StatusTable,
    out: &mut Vec<Square>,
) {
    let (starting_row, step) = match color {
        Color::White => (6, -1),
        Color::Black => (1, 1),
    };

    if from.row == starting_row {
        if let (Some(one_ahead), Some(two_ahead)) =
            (from.offset(step, 0), from.offset(2 * step, 0))
        {
            if statuses.at(one_ahead).is_empty() && statuses.at(two_ahead).is_empty() {
                out.push(two_ahead);
            }
        }
    }

    if let Some(one_ahead) = from.offset(step, 0) {
        if statuses.at(one_ahead).is_empty() {
            out.push(one_ahead);
        }
    }

    for side in [-1, 1] {
        if let Some(target) = from.offset(step, side) {
            if statuses.at(target).is_enemy() {
                out.push(target);
            }
        }
    }
}

pub fn generate_knight_moves(from: Square, statuses: &StatusTable, out: &mut Vec<Square>) {
    generate_step_moves(from, &KNIGHT_OFFSETS, statuses, out);
}

pub fn generate_bishop_moves(from: Square, statuses: &StatusTable, out: &mut Vec<Square>) {
    generate_slider_moves(from, &BISHOP_DIRECTIONS, statuses, out);
}

pub fn generate_rook_moves(from: Square, statuses: &StatusTable, out: &mut Vec<Square>) {
    generate_slider_moves(from, &ROOK_DIRECTIONS, statuses, out);
}

/// Queen moves are the union of the bishop and rook ray sets from the same
/// square; there is no separate queen algorithm.
pub fn generate_queen_moves(from: Square, statuses: &StatusTable, out: &mut Vec<Square>) {
    generate_bishop_moves(from, statuses, out);
    generate_rook_moves(from, statuses, out);
}

pub fn generate_king_moves(from: Square, statuses: &StatusTable, out: &mut Vec<Square>) {
    generate_step_moves(from, &KING_OFFSETS, statuses, out);
}

/// Dispatch on the closed piece kind to the matching generator.
pub fn pseudo_legal_moves(
    kind: PieceKind,
    from: Square,
    color: Color,
    statuses: &StatusTable,
) -> Vec<Square> {
    let mut out = Vec::new();
    match kind {
        PieceKind::Pawn => generate_pawn_moves(from, color, statuses, &mut out),
        PieceKind::Knight => generate_knight_moves(from, statuses, &mut out),
        PieceKind::Bishop => generate_bishop_moves(from, statuses, &mut out),
        PieceKind::Rook => generate_rook_moves(from, statuses, &mut out),
        PieceKind::Queen => generate_queen_moves(from, statuses, &mut out),
        PieceKind::King => generate_king_moves(from, statuses, &mut out),
    }
    out
}
