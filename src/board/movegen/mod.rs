//! Pseudo-legal move rules.
//!
//! A move is pseudo-legal when the piece's own movement geometry allows it,
//! sliding pieces are not blocked, and the target does not hold a friendly
//! piece. King safety is never considered.

mod kings;
mod knights;
mod pawns;
mod sliders;

use kings::king_move_is_legal;
use knights::knight_move_is_legal;

use super::{Board, PieceKind, Square};

/// Signed displacement between two squares.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct Delta {
    pub(crate) rank: isize,
    pub(crate) file: isize,
}

impl Delta {
    pub(crate) fn between(from: Square, to: Square) -> Self {
        Delta {
            rank: to.rank() as isize - from.rank() as isize,
            file: to.file() as isize - from.file() as isize,
        }
    }

    /// Absolute file distance.
    #[inline]
    pub(crate) const fn dx(self) -> usize {
        self.file.unsigned_abs()
    }

    /// Absolute rank distance.
    #[inline]
    pub(crate) const fn dy(self) -> usize {
        self.rank.unsigned_abs()
    }
}

impl Board {
    /// Is moving the piece on `from` to `to` pseudo-legal?
    ///
    /// Returns `false` for an empty origin, a null move, or a friendly target.
    pub fn is_legal_move(&self, from: Square, to: Square) -> bool {
        let Some(piece) = self.occupant_at(from) else {
            return false;
        };
        if from == to {
            return false;
        }
        if self
            .occupant_at(to)
            .is_some_and(|target| target.color == piece.color)
        {
            return false;
        }

        let delta = Delta::between(from, to);
        match piece.kind {
            PieceKind::Pawn => self.pawn_move_is_legal(piece, from, to, delta),
            PieceKind::Knight => knight_move_is_legal(delta),
            PieceKind::Bishop | PieceKind::Rook | PieceKind::Queen => {
                self.slider_move_is_legal(piece.kind, from, to, delta)
            }
            PieceKind::King => king_move_is_legal(delta),
        }
    }

    /// Every square the piece on `from` may move to, in a1..h8 order.
    ///
    /// Built by running every square through [`Board::is_legal_move`].
    pub fn legal_destinations(&self, from: Square) -> Vec<Square> {
        Square::all()
            .filter(|&to| self.is_legal_move(from, to))
            .collect()
    }
}

/// Free-function form of [`Board::is_legal_move`].
#[must_use]
pub fn is_legal_move(board: &Board, from: Square, to: Square) -> bool {
    board.is_legal_move(from, to)
}

/// Free-function form of [`Board::legal_destinations`].
#[must_use]
pub fn legal_destinations(board: &Board, from: Square) -> Vec<Square> {
    board.legal_destinations(from)
}
