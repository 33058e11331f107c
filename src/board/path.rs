//! Obstruction checks for sliding moves.

use super::{Board, Square};

/// Unit step from `from` toward `to`, if the two squares share a rank, file
/// or diagonal.
pub(crate) fn step_toward(from: Square, to: Square) -> Option<(isize, isize)> {
    let d_rank = to.rank() as isize - from.rank() as isize;
    let d_file = to.file() as isize - from.file() as isize;
    let aligned = d_rank == 0 || d_file == 0 || d_rank.abs() == d_file.abs();
    aligned.then(|| (d_rank.signum(), d_file.signum()))
}

/// Squares strictly between two aligned squares, walking from `from` toward
/// `to`. Empty for adjacent or unaligned squares.
pub fn squares_between(from: Square, to: Square) -> impl Iterator<Item = Square> {
    let step = step_toward(from, to).filter(|_| from != to);
    let mut current = from;
    std::iter::from_fn(move || {
        let (d_rank, d_file) = step?;
        current = current.offset(d_rank, d_file)?;
        (current != to).then_some(current)
    })
}

/// Returns true if every square strictly between `from` and `to` is empty.
///
/// `from` and `to` must share a rank, file or diagonal. For unaligned squares
/// the answer is `false`.
pub fn is_path_clear(board: &Board, from: Square, to: Square) -> bool {
    if step_toward(from, to).is_none() {
        return false;
    }
    squares_between(from, to).all(|sq| !board.is_occupied(sq))
}
