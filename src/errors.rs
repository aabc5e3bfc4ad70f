//! Errors used throughout the rules engine.
//!
//! This module defines the canonical error type returned by board operations.
//! The enum `ChessError` is used as the single error type across the crate to
//! simplify propagation and matching. Each variant carries contextual
//! information where appropriate to aid diagnostics.

use std::error::Error;
use std::fmt;

use crate::board::chess_types::Square;

/// Unified error type for the rules engine.
///
/// Every variant is recoverable: the board is never mutated before a failing
/// operation returns, so callers can retry with corrected input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChessError {
    /// A row or column index lies outside `0..8`.
    ///
    /// Payload: the offending value and the name of the operation that
    /// received it.
    CoordinateOutOfRange { value: i8, operation: &'static str },

    /// A move was requested from a square that holds no piece.
    EmptySourceSquare(Square),

    /// The requested destination is not in the moving piece's legal set.
    ///
    /// The board is left untouched; callers wanting to know the legal set
    /// up front should query `generate_legal_moves` themselves.
    IllegalMove { from: Square, to: Square },
}

impl fmt::Display for ChessError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ChessError::CoordinateOutOfRange { value, operation } => {
                write!(
                    f,
                    "{operation}: coordinate {value} is outside the board range 0..8"
                )
            }
            ChessError::EmptySourceSquare(square) => {
                write!(f, "no piece on source square {square}")
            }
            ChessError::IllegalMove { from, to } => {
                write!(f, "{from} -> {to} is not a legal move")
            }
        }
    }
}

impl Error for ChessError {}
