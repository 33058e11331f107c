//! Core chess types.
//!
//! This module contains the value types shared by every part of the engine:
//! - `PieceKind`, `Color` and `Piece` - what stands on a square
//! - `Square` - a bounds-checked board coordinate
//! - `Move` - an origin/target pair in coordinate notation

mod moves;
mod piece;
mod square;

pub use moves::Move;
pub use piece::{Color, Piece, PieceKind};
pub use square::Square;
