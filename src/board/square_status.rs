//! Per-color classification of board squares.
//!
//! Move generators never look at `Piece` values directly; they read a
//! [`StatusTable`] built for their own color, where every square is tagged
//! Ally, Enemy, or Empty. "Ally" is relative, so one classification pass
//! produces two tables, one per viewpoint.

use crate::board::chess_board::Board;
use crate::board::chess_types::{Color, PieceKind, Square};

/// What one square looks like from a given color's perspective.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SquareStatus {
    #[default]
    Empty,
    Ally {
        kind: PieceKind,
        move_count: u32,
    },
    Enemy {
        kind: PieceKind,
        move_count: u32,
    },
}

impl SquareStatus {
    #[inline]
    pub const fn is_empty(self) -> bool {
        matches!(self, SquareStatus::Empty)
    }

    #[inline]
    pub const fn is_ally(self) -> bool {
        matches!(self, SquareStatus::Ally { .. })
    }

    #[inline]
    pub const fn is_enemy(self) -> bool {
        matches!(self, SquareStatus::Enemy { .. })
    }
}

/// 8x8 grid of statuses for one viewing color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct StatusTable {
    squares: [[SquareStatus; 8]; 8],
}

impl StatusTable {
    #[inline]
    pub fn at(&self, square: Square) -> SquareStatus {
        self.squares[square.row_index()][square.col_index()]
    }

    #[inline]
    fn set(&mut self, square: Square, status: SquareStatus) {
        self.squares[square.row_index()][square.col_index()] = status;
    }
}

/// One table per viewing color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct StatusTables {
    tables: [StatusTable; 2],
}

impl StatusTables {
    #[inline]
    pub fn for_color(&self, color: Color) -> &StatusTable {
        &self.tables[color.index()]
    }
}

/// Classify every square of the board from both colors' perspectives.
///
/// Always a full recomputation: moves are simulated on scratch copies, so
/// there is no reliable delta to patch from. Side effect: whenever a King is
/// encountered, the board's cached king square for that color is refreshed
/// from the slot coordinates.
pub fn classify(board: &mut Board) -> StatusTables {
    let mut tables = StatusTables::default();
    let mut kings: [Option<Square>; 2] = [None, None];

    for row in 0..8 {
        for col in 0..8 {
            let square = Square::at(row, col);
            let Some(piece) = board.piece_at(square) else {
                continue;
            };
            let (color, kind, move_count) = (piece.color, piece.kind, piece.move_count);

            tables.tables[color.index()].set(square, SquareStatus::Ally { kind, move_count });
            tables.tables[color.opposite().index()]
                .set(square, SquareStatus::Enemy { kind, move_count });

            if kind == PieceKind::King {
                kings[color.index()] = Some(square);
            }
        }
    }

    for color in [Color::White, Color::Black] {
        if let Some(square) = kings[color.index()] {
            board.set_king_square(color, square);
        }
    }

    tables
}
