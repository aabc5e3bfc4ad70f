//! The 8x8 mailbox board and its move pipeline.
//!
//! `Board` owns the piece grid and the per-color king cache, and drives the
//! classify -> generate -> filter -> apply sequence when a move is requested.

use log::debug;

use crate::board::chess_types::{Color, Piece, PieceKind, Square};
use crate::errors::ChessError;
use crate::move_generation::legal_moves::generate_legal_moves;

const BACK_RANK: [PieceKind; 8] = [
    PieceKind::Rook,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Queen,
    PieceKind::King,
    PieceKind::Bishop,
    PieceKind::Knight,
    PieceKind::Rook,
];

/// Mailbox board: an 8x8 grid of optional pieces plus a cached king square
/// per color.
///
/// The king cache is refreshed by classification as it encounters King
/// pieces; it is never derived lazily. Scratch copies used during legality
/// filtering are full deep clones, so their classification runs cannot
/// contaminate the canonical board's cache.
#[derive(Debug, Clone, PartialEq)]
pub struct Board {
    grid: [[Option<Piece>; 8]; 8],
    king_squares: [Square; 2],
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl Board {
    /// A board with the standard initial placement.
    pub fn new() -> Self {
        let mut board = Self::empty();
        board.reset();
        board
    }

    /// A board with no pieces at all. The king cache starts at the standard
    /// king squares and stays stale until classification sees a king.
    pub fn empty() -> Self {
        Self {
            grid: std::array::from_fn(|_| std::array::from_fn(|_| None)),
            king_squares: [Square::at(7, 4), Square::at(0, 4)],
        }
    }

    /// Repopulate the grid with the standard initial position, discarding
    /// all piece state. Rows 0-1 are black, rows 6-7 white.
    pub fn reset(&mut self) {
        self.grid = std::array::from_fn(|_| std::array::from_fn(|_| None));
        self.king_squares = [Square::at(7, 4), Square::at(0, 4)];

        for (col, &kind) in BACK_RANK.iter().enumerate() {
            let col = col as i8;
            self.place(Piece::new(kind, Color::Black, Square::at(0, col)));
            self.place(Piece::new(PieceKind::Pawn, Color::Black, Square::at(1, col)));
            self.place(Piece::new(PieceKind::Pawn, Color::White, Square::at(6, col)));
            self.place(Piece::new(kind, Color::White, Square::at(7, col)));
        }
    }

    /// Read-only per-square query; all a renderer needs.
    #[inline]
    pub fn piece_at(&self, square: Square) -> Option<&Piece> {
        self.grid[square.row_index()][square.col_index()].as_ref()
    }

    #[inline]
    pub(crate) fn piece_at_mut(&mut self, square: Square) -> Option<&mut Piece> {
        self.grid[square.row_index()][square.col_index()].as_mut()
    }

    /// Put a piece on the square it claims to occupy. Overwrites whatever
    /// was there; used by setup code and tests building positions.
    pub fn place(&mut self, piece: Piece) {
        let square = piece.square;
        self.grid[square.row_index()][square.col_index()] = Some(piece);
    }

    #[inline]
    pub fn king_square(&self, color: Color) -> Square {
        self.king_squares[color.index()]
    }

    #[inline]
    pub(crate) fn set_king_square(&mut self, color: Color, square: Square) {
        self.king_squares[color.index()] = square;
    }

    /// Simulation primitive: lift the piece off `from` and drop it on `to`,
    /// overwriting any occupant. No move count, history, or capture
    /// bookkeeping happens here.
    pub(crate) fn relocate(&mut self, from: Square, to: Square) {
        if let Some(mut piece) = self.grid[from.row_index()][from.col_index()].take() {
            piece.square = to;
            self.grid[to.row_index()][to.col_index()] = Some(piece);
        }
    }

    /// Validate, filter, and apply a move.
    ///
    /// Coordinates are range-checked before any board state is read. The
    /// destination must be in the moving piece's legality-filtered set. On
    /// success the destination receives a new piece value (move count + 1,
    /// history extended) and the source square is cleared; on any error the
    /// board is left exactly as it was.
    pub fn move_piece(
        &mut self,
        from_row: i8,
        from_col: i8,
        to_row: i8,
        to_col: i8,
    ) -> Result<(), ChessError> {
        let from = Square::new(from_row, from_col, "move_piece")?;
        let to = Square::new(to_row, to_col, "move_piece")?;

        let color = match self.piece_at(from) {
            Some(piece) => piece.color,
            None => return Err(ChessError::EmptySourceSquare(from)),
        };

        let legal = generate_legal_moves(self, color);
        let allowed = legal
            .iter()
            .find(|piece_moves| piece_moves.from == from)
            .is_some_and(|piece_moves| piece_moves.moves.contains(&to));
        if !allowed {
            debug!("rejected {from} -> {to}: not in the {color} legal set");
            return Err(ChessError::IllegalMove { from, to });
        }

        let Some(piece) = self.grid[from.row_index()][from.col_index()].take() else {
            return Err(ChessError::EmptySourceSquare(from));
        };
        let moved = piece.moved_to(to);
        debug!("applied {moved} {from} -> {to} (move {})", moved.move_count);
        self.grid[to.row_index()][to.col_index()] = Some(moved);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn initial_position_matches_standard_setup() {
        let board = Board::new();

        let mut white = 0;
        let mut black = 0;
        for row in 0..8 {
            for col in 0..8 {
                if let Some(piece) = board.piece_at(Square::at(row, col)) {
                    match piece.color {
                        Color::White => white += 1,
                        Color::Black => black += 1,
                    }
                }
            }
        }
        assert_eq!(white, 16);
        assert_eq!(black, 16);

        assert_eq!(board.king_square(Color::White), Square::at(7, 4));
        assert_eq!(board.king_square(Color::Black), Square::at(0, 4));
        for (col, &kind) in BACK_RANK.iter().enumerate() {
            let col = col as i8;
            assert_eq!(board.piece_at(Square::at(0, col)).map(|p| p.kind), Some(kind));
            assert_eq!(board.piece_at(Square::at(7, col)).map(|p| p.kind), Some(kind));
            assert_eq!(
                board.piece_at(Square::at(1, col)).map(|p| p.kind),
                Some(PieceKind::Pawn)
            );
            assert_eq!(
                board.piece_at(Square::at(6, col)).map(|p| p.kind),
                Some(PieceKind::Pawn)
            );
        }
    }

    #[test]
    fn legal_move_replaces_piece_value_at_destination() {
        let mut board = Board::new();
        board.move_piece(6, 4, 4, 4).expect("e2-e4 is legal");

        assert!(board.piece_at(Square::at(6, 4)).is_none());
        let pawn = board.piece_at(Square::at(4, 4)).expect("pawn arrived");
        assert_eq!(pawn.kind, PieceKind::Pawn);
        assert_eq!(pawn.move_count, 1);
        assert_eq!(pawn.square, Square::at(4, 4));
        assert_eq!(pawn.history.len(), 1);
        let record = pawn.history.get(&0).expect("keyed by pre-increment count");
        assert_eq!(record.from, Square::at(6, 4));
        assert_eq!(record.to, Square::at(4, 4));
    }

    #[test]
    fn illegal_destination_leaves_board_unchanged() {
        let mut board = Board::new();
        let before = board.clone();

        let result = board.move_piece(6, 4, 3, 3);
        assert_eq!(
            result,
            Err(ChessError::IllegalMove {
                from: Square::at(6, 4),
                to: Square::at(3, 3),
            })
        );
        assert_eq!(board, before);
    }

    #[test]
    fn out_of_range_coordinates_are_rejected_before_state_is_read() {
        let mut board = Board::new();
        let before = board.clone();

        let result = board.move_piece(6, 4, 8, 4);
        assert_eq!(
            result,
            Err(ChessError::CoordinateOutOfRange {
                value: 8,
                operation: "move_piece"
            })
        );
        assert_eq!(board, before);
    }

    #[test]
    fn empty_source_square_is_reported() {
        let mut board = Board::new();
        let before = board.clone();

        let result = board.move_piece(4, 4, 3, 4);
        assert_eq!(
            result,
            Err(ChessError::EmptySourceSquare(Square::at(4, 4)))
        );
        assert_eq!(board, before);
    }

    #[test]
    fn reset_restores_the_initial_position() {
        let mut board = Board::new();
        board.move_piece(6, 4, 4, 4).expect("e2-e4 is legal");
        board.reset();
        assert_eq!(board, Board::new());
    }
}
