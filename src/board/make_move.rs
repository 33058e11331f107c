use log::trace;

use super::{Board, Piece, Square};

impl Board {
    /// Move the piece on `from` to `to`, capturing whatever stands there.
    ///
    /// The move must already have been accepted by [`Board::is_legal_move`];
    /// nothing is re-validated here. Returns the captured piece, if any.
    ///
    /// An empty origin or a null move is a contract violation: it trips a
    /// debug assertion and otherwise leaves the board untouched.
    pub fn apply_move(&mut self, from: Square, to: Square) -> Option<Piece> {
        debug_assert!(self.is_occupied(from), "apply_move from empty square {from}");
        debug_assert_ne!(from, to, "apply_move with null move on {from}");

        let mover = self.occupant_at(from)?;
        if from == to {
            return None;
        }

        let captured = self.occupant_at(to);
        self.place(to, Some(mover));
        self.place(from, None);

        trace!("{from}{to}: {mover} moved, captured {captured:?}");
        captured
    }
}

/// Free-function form of [`Board::apply_move`].
pub fn apply_move(board: &mut Board, from: Square, to: Square) -> Option<Piece> {
    board.apply_move(from, to)
}
