//! Pseudo-legal chess move rules.
//!
//! [`board`] holds the board model and the rules: per-piece movement
//! geometry, obstruction of sliding pieces, captures and move execution.
//! [`game`] adds the side to move and gates moves by turn. [`frontend`] is a
//! small text driver for playing through the rules by hand.
//!
//! Check, checkmate, castling, en passant and promotion are not modelled.

pub mod board;
pub mod frontend;
pub mod game;

pub use board::{Board, Color, Move, Piece, PieceKind, Square};
pub use game::{ClickOutcome, GameState};
