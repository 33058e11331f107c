//! Game state: a board plus the side to move.
//!
//! `GameState` is the turn coordinator. It gates which side's pieces may
//! move, runs the legality check, applies the move and hands the turn over.
//! Each game owns its own state; nothing is shared between games.

mod selection;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use log::debug;

use crate::board::fen::parse_side;
use crate::board::{Board, Color, FenError, Move, MoveError, Piece, Square};

pub use selection::ClickOutcome;

/// Board and side to move.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct GameState {
    board: Board,
    active: Color,
    #[cfg_attr(feature = "serde", serde(skip))]
    selected: Option<Square>,
}

impl GameState {
    /// Standard starting position, White to move.
    #[must_use]
    pub fn new() -> Self {
        GameState::from_board(Board::new(), Color::White)
    }

    #[must_use]
    pub const fn from_board(board: Board, active: Color) -> Self {
        GameState {
            board,
            active,
            selected: None,
        }
    }

    /// Load a placement field and a side to move (`w` or `b`).
    pub fn from_placement(placement: &str, side: &str) -> Result<Self, FenError> {
        let board = Board::from_placement(placement)?;
        Ok(GameState::from_board(board, parse_side(side)?))
    }

    #[inline]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[inline]
    pub fn current_turn(&self) -> Color {
        self.active
    }

    /// Hand the move to the other side.
    ///
    /// [`GameState::play`] does this itself; call it directly only when
    /// driving [`Board::apply_move`] by hand.
    pub fn advance_turn(&mut self) {
        self.active = self.active.opponent();
    }

    /// The piece on `square`, provided it belongs to the side to move.
    pub fn movable_piece(&self, square: Square) -> Result<Piece, MoveError> {
        let piece = self
            .board
            .occupant_at(square)
            .ok_or(MoveError::EmptySquare { square })?;
        if piece.color != self.active {
            return Err(MoveError::WrongTurn {
                square,
                to_move: self.active,
            });
        }
        Ok(piece)
    }

    /// Turn gate plus pseudo-legality.
    pub fn is_legal(&self, from: Square, to: Square) -> bool {
        self.movable_piece(from).is_ok() && self.board.is_legal_move(from, to)
    }

    /// Check, apply and hand over the turn. Returns the captured piece.
    pub fn play(&mut self, from: Square, to: Square) -> Result<Option<Piece>, MoveError> {
        let piece = self.movable_piece(from).inspect_err(|e| debug!("refused {from}{to}: {e}"))?;
        if !self.board.is_legal_move(from, to) {
            debug!("refused {from}{to}: illegal for {piece}");
            return Err(MoveError::Illegal { from, to });
        }

        let captured = self.board.apply_move(from, to);
        self.selected = None;
        self.advance_turn();
        debug!(
            "played {from}{to} ({piece}), captured {captured:?}, {} to move",
            self.active
        );
        Ok(captured)
    }

    /// [`GameState::play`] for a move in coordinate notation (`e2e4`).
    pub fn play_str(&mut self, mv: &str) -> Result<Option<Piece>, MoveError> {
        let mv: Move = mv.parse()?;
        self.play(mv.from, mv.to)
    }

    /// Every move available to the side to move, ordered by origin then target.
    pub fn legal_moves(&self) -> Vec<Move> {
        self.board
            .pieces()
            .filter(|(_, piece)| piece.color == self.active)
            .flat_map(|(from, _)| {
                self.board
                    .legal_destinations(from)
                    .into_iter()
                    .map(move |to| Move::new(from, to))
            })
            .collect()
    }
}

impl Default for GameState {
    fn default() -> Self {
        GameState::new()
    }
}
