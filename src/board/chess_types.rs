//! Core value types shared by the whole engine.
//!
//! Squares carry their own bounds discipline: `Square::new` validates raw
//! coordinates at the API boundary and `Square::offset` clamps every derived
//! target to the board, so move generators never index out of range.

use std::collections::BTreeMap;
use std::fmt;

use crate::errors::ChessError;

/// Side a piece belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    White,
    Black,
}

impl Color {
    #[inline]
    pub const fn index(self) -> usize {
        match self {
            Color::White => 0,
            Color::Black => 1,
        }
    }

    #[inline]
    pub const fn opposite(self) -> Self {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::White => write!(f, "white"),
            Color::Black => write!(f, "black"),
        }
    }
}

/// Piece kind (color is represented separately).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}

impl PieceKind {
    #[inline]
    pub const fn index(self) -> usize {
        match self {
            PieceKind::Pawn => 0,
            PieceKind::Knight => 1,
            PieceKind::Bishop => 2,
            PieceKind::Rook => 3,
            PieceKind::Queen => 4,
            PieceKind::King => 5,
        }
    }
}

impl fmt::Display for PieceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            PieceKind::Pawn => "Pawn",
            PieceKind::Knight => "Knight",
            PieceKind::Bishop => "Bishop",
            PieceKind::Rook => "Rook",
            PieceKind::Queen => "Queen",
            PieceKind::King => "King",
        };
        write!(f, "{name}")
    }
}

/// One board cell, `row` and `col` both in `0..8`.
///
/// Row 0 is the black back rank, row 7 the white back rank.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Square {
    pub row: i8,
    pub col: i8,
}

impl Square {
    /// Validating constructor for coordinates coming from outside the
    /// engine. `operation` names the caller for the error payload.
    pub fn new(row: i8, col: i8, operation: &'static str) -> Result<Self, ChessError> {
        for value in [row, col] {
            if !(0..8).contains(&value) {
                return Err(ChessError::CoordinateOutOfRange { value, operation });
            }
        }
        Ok(Self { row, col })
    }

    /// Unchecked constructor for coordinates already known to be on the
    /// board (setup tables, squares produced by `offset`).
    #[inline]
    pub const fn at(row: i8, col: i8) -> Self {
        Self { row, col }
    }

    /// Target square after stepping by the given deltas, or `None` when the
    /// step leaves the board.
    #[inline]
    pub fn offset(self, d_row: i8, d_col: i8) -> Option<Square> {
        let row = self.row + d_row;
        let col = self.col + d_col;
        if (0..8).contains(&row) && (0..8).contains(&col) {
            Some(Square { row, col })
        } else {
            None
        }
    }

    #[inline]
    pub const fn row_index(self) -> usize {
        self.row as usize
    }

    #[inline]
    pub const fn col_index(self) -> usize {
        self.col as usize
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},{})", self.row, self.col)
    }
}

/// One entry of a piece's move history.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveRecord {
    pub from: Square,
    pub to: Square,
}

/// A single chess piece.
///
/// Pieces are value-like: applying a move produces a fresh `Piece` at the
/// destination via [`Piece::moved_to`] rather than mutating the old value in
/// place. Classification and filtering read a piece's authoritative state
/// only through its board slot, so the old and new value must never alias.
#[derive(Debug, Clone)]
pub struct Piece {
    pub kind: PieceKind,
    pub color: Color,
    pub square: Square,
    /// Incremented on every applied move.
    pub move_count: u32,
    /// Applied moves keyed by the move count they were played at.
    pub history: BTreeMap<u32, MoveRecord>,
    /// Last move list computed for this piece; refreshed by generation and
    /// pruned by the legality filter. A cache, never an input.
    pub cached_moves: Vec<Square>,
}

impl Piece {
    /// Every instance owns freshly initialized containers.
    pub fn new(kind: PieceKind, color: Color, square: Square) -> Self {
        Self {
            kind,
            color,
            square,
            move_count: 0,
            history: BTreeMap::new(),
            cached_moves: Vec::new(),
        }
    }

    /// The piece value placed on the destination after a move: move count
    /// incremented, history extended under the pre-increment count, cache
    /// dropped as stale.
    pub fn moved_to(&self, to: Square) -> Piece {
        let mut moved = self.clone();
        moved.history.insert(
            self.move_count,
            MoveRecord {
                from: self.square,
                to,
            },
        );
        moved.move_count += 1;
        moved.square = to;
        moved.cached_moves = Vec::new();
        moved
    }
}

/// Equality covers identity and move state only. `cached_moves` is derived
/// data refreshed by any generation pass, so two boards that differ only in
/// caches are the same position.
impl PartialEq for Piece {
    fn eq(&self, other: &Self) -> bool {
        self.kind == other.kind
            && self.color == other.color
            && self.square == other.square
            && self.move_count == other.move_count
            && self.history == other.history
    }
}

impl Eq for Piece {}

impl fmt::Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.color, self.kind)
    }
}
