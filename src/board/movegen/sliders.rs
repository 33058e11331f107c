use super::super::path::is_path_clear;
use super::super::{Board, PieceKind, Square};
use super::Delta;

impl Board {
    pub(crate) fn slider_move_is_legal(
        &self,
        kind: PieceKind,
        from: Square,
        to: Square,
        delta: Delta,
    ) -> bool {
        let (dx, dy) = (delta.dx(), delta.dy());
        let diagonal = dx == dy && dx > 0;
        let straight = (dx == 0) != (dy == 0);

        let geometry = match kind {
            PieceKind::Bishop => diagonal,
            PieceKind::Rook => straight,
            PieceKind::Queen => diagonal || straight,
            _ => false,
        };
        geometry && is_path_clear(self, from, to)
    }
}
