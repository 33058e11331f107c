use super::Delta;

/// One square in any direction. The null move is filtered out by the caller.
pub(super) fn king_move_is_legal(delta: Delta) -> bool {
    delta.dx() <= 1 && delta.dy() <= 1
}
