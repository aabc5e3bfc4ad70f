//! Shared single-step walker for the offset-table pieces.
//!
//! Knight and king both test a fixed table of eight offsets; only the tables
//! differ. A target is a candidate when it is on the board and not held by
//! an ally, which covers quiet moves and captures alike.

use crate::board::chess_types::Square;
use crate::board::square_status::StatusTable;

pub const KNIGHT_OFFSETS: [(i8, i8); 8] = [
    (-1, 2),
    (1, 2),
    (1, -2),
    (-1, -2),
    (-2, 1),
    (2, 1),
    (2, -1),
    (-2, -1),
];

pub const KING_OFFSETS: [(i8, i8); 8] = [
    (1, -1),
    (-1, 1),
    (1, 1),
    (-1, -1),
    (0, 1),
    (0, -1),
    (-1, 0),
    (1, 0),
];

pub fn generate_step_moves(
    from: Square,
    offsets: &[(i8, i8)],
    statuses: &StatusTable,
    out: &mut Vec<Square>,
) {
    for &(d_row, d_col) in offsets {
        if let Some(target) = from.offset(d_row, d_col) {
            if !statuses.at(target).is_ally() {
                out.push(target);
            }
        }
    }
}
