//! Prelude module for convenient imports.
//!
//! This module re-exports the most commonly used types and functions.
//!
//! # Example
//! ```
//! use chess_rules::board::prelude::*;
//!
//! let game = GameState::new();
//! assert_eq!(game.current_turn(), Color::White);
//! ```

pub use super::{
    apply_move, is_legal_move, legal_destinations, Board, BoardBuilder, Color, FenError, Move,
    MoveError, MoveParseError, Piece, PieceKind, Square, SquareError,
};
pub use crate::game::{ClickOutcome, GameState};
