use super::Delta;

/// Knights jump two squares one way and one square the other.
pub(super) fn knight_move_is_legal(delta: Delta) -> bool {
    matches!((delta.dx(), delta.dy()), (1, 2) | (2, 1))
}
