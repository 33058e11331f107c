//! Chess board representation and pseudo-legal move rules.
//!
//! The board is a plain 8x8 grid of optional pieces. Rules answer whether a
//! piece's movement geometry allows a move, including obstruction of sliding
//! pieces and capture rules. King safety, castling, en passant and promotion
//! are not modelled.
//!
//! # Example
//! ```
//! use chess_rules::board::{Board, Square};
//!
//! let mut board = Board::new();
//! let e2: Square = "e2".parse().unwrap();
//! let e4: Square = "e4".parse().unwrap();
//! assert!(board.is_legal_move(e2, e4));
//! board.apply_move(e2, e4);
//! assert!(board.occupant_at(e2).is_none());
//! ```

mod builder;
mod error;
pub(crate) mod fen;
mod make_move;
mod movegen;
mod path;
pub mod prelude;
mod render;
mod state;
mod types;

#[cfg(test)]
mod tests;

// Public API - types users need
pub use builder::BoardBuilder;
pub use error::{FenError, MoveError, MoveParseError, SquareError};
pub use fen::STARTING_PLACEMENT;
pub use render::RenderStyle;
pub use state::{initialize_standard_board, Board};
pub use types::{Color, Move, Piece, PieceKind, Square};

// Public API - rule functions in free-function form
pub use make_move::apply_move;
pub use movegen::{is_legal_move, legal_destinations};
pub use path::{is_path_clear, squares_between};
