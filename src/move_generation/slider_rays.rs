//! Shared ray walker for the sliding pieces.
//!
//! Bishop, rook, and queen differ only in their direction sets, so a single
//! walker parameterized by directions serves all three.

use crate::board::chess_types::Square;
use crate::board::square_status::{SquareStatus, StatusTable};

pub const BISHOP_DIRECTIONS: [(i8, i8); 4] = [(1, 1), (1, -1), (-1, 1), (-1, -1)];
pub const ROOK_DIRECTIONS: [(i8, i8); 4] = [(1, 0), (-1, 0), (0, 1), (0, -1)];

/// Walk each ray outward from `from` until the board edge or the first
/// occupied square. Empty squares along the way are candidates; the first
/// occupied square ends the ray and is itself a candidate only when it holds
/// an enemy.
pub fn generate_slider_moves(
    from: Square,
    directions: &[(i8, i8)],
    statuses: &StatusTable,
    out: &mut Vec<Square>,
) {
    for &(d_row, d_col) in directions {
        let mut distance = 1;
        while let Some(target) = from.offset(d_row * distance, d_col * distance) {
            match statuses.at(target) {
                SquareStatus::Ally { .. } => break,
                SquareStatus::Enemy { .. } => {
                    out.push(target);
                    break;
                }
                SquareStatus::Empty => out.push(target),
            }
            distance += 1;
        }
    }
}
