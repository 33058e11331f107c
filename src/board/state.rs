#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::{Color, Piece, PieceKind, Square};

/// The 8x8 grid of optional occupants.
///
/// Every square always has an entry, and a square holds at most one piece.
/// The board performs no rule checking of its own.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Board {
    pub(crate) squares: [[Option<Piece>; 8]; 8], // [rank][file]
}

impl Board {
    /// The standard starting position.
    pub fn new() -> Self {
        let mut board = Board::empty();
        for (file, &kind) in PieceKind::BACK_RANK.iter().enumerate() {
            for color in Color::BOTH {
                board.squares[color.back_rank()][file] = Some(Piece::new(kind, color));
                board.squares[color.pawn_start_rank()][file] =
                    Some(Piece::new(PieceKind::Pawn, color));
            }
        }
        board
    }

    /// A board with no pieces at all.
    #[must_use]
    pub const fn empty() -> Self {
        Board {
            squares: [[None; 8]; 8],
        }
    }

    #[inline]
    pub fn occupant_at(&self, sq: Square) -> Option<Piece> {
        self.squares[sq.rank()][sq.file()]
    }

    /// Set or clear the occupant of a square.
    #[inline]
    pub fn place(&mut self, sq: Square, occupant: Option<Piece>) {
        self.squares[sq.rank()][sq.file()] = occupant;
    }

    #[inline]
    pub fn is_occupied(&self, sq: Square) -> bool {
        self.occupant_at(sq).is_some()
    }

    /// Number of squares holding a piece.
    pub fn occupied_count(&self) -> usize {
        self.squares.iter().flatten().filter(|sq| sq.is_some()).count()
    }

    /// Every occupied square with its piece, in a1..h8 order.
    pub fn pieces(&self) -> impl Iterator<Item = (Square, Piece)> + '_ {
        Square::all().filter_map(|sq| self.occupant_at(sq).map(|piece| (sq, piece)))
    }

    /// Total material of one side, in pawns.
    pub fn material(&self, color: Color) -> u32 {
        self.pieces()
            .filter(|(_, piece)| piece.color == color)
            .map(|(_, piece)| piece.kind.value())
            .sum()
    }
}

impl Default for Board {
    fn default() -> Self {
        Board::new()
    }
}

/// Produces the fixed starting position.
#[must_use]
pub fn initialize_standard_board() -> Board {
    Board::new()
}
