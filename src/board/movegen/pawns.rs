use super::super::{Board, Piece, Square};
use super::Delta;

impl Board {
    /// Pawns move toward the opponent only.
    ///
    /// A straight step is allowed onto any non-friendly square: the target is
    /// not required to be empty, and the double step from the start rank does
    /// not look at the square it passes over. A diagonal step needs a piece
    /// on the target to capture.
    pub(crate) fn pawn_move_is_legal(
        &self,
        pawn: Piece,
        from: Square,
        to: Square,
        delta: Delta,
    ) -> bool {
        let forward = delta.rank * pawn.color.pawn_direction();
        match delta.dx() {
            0 => forward == 1 || (forward == 2 && from.rank() == pawn.color.pawn_start_rank()),
            1 => forward == 1 && self.is_occupied(to),
            _ => false,
        }
    }
}
