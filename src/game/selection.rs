//! Two-click move entry: pick up a piece, then pick its destination.

use log::trace;

use super::GameState;
use crate::board::{MoveError, Piece, Square};

/// What a click did to the game.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ClickOutcome {
    /// A piece of the side to move was picked up.
    Selected {
        square: Square,
        destinations: Vec<Square>,
    },
    /// The selected piece moved and the turn passed.
    Moved {
        from: Square,
        to: Square,
        captured: Option<Piece>,
    },
    /// The click was not a legal destination; the selection was dropped.
    Deselected,
    /// Nothing was selected and the click did not pick anything up.
    Ignored,
}

impl GameState {
    /// The square currently picked up, if any.
    #[inline]
    pub fn selected(&self) -> Option<Square> {
        self.selected
    }

    /// Pick up the piece on `square` if it belongs to the side to move.
    pub fn select(&mut self, square: Square) -> Result<Vec<Square>, MoveError> {
        self.movable_piece(square)?;
        self.selected = Some(square);
        trace!("selected {square}");
        Ok(self.board.legal_destinations(square))
    }

    pub fn deselect(&mut self) {
        if let Some(square) = self.selected.take() {
            trace!("deselected {square}");
        }
    }

    /// Handle a click on `square`.
    ///
    /// With nothing selected, a click on a piece of the side to move selects
    /// it. With a piece selected, a click on one of its legal destinations
    /// plays the move; any other click drops the selection.
    pub fn click(&mut self, square: Square) -> ClickOutcome {
        let Some(from) = self.selected.take() else {
            return match self.select(square) {
                Ok(destinations) => ClickOutcome::Selected {
                    square,
                    destinations,
                },
                Err(_) => ClickOutcome::Ignored,
            };
        };

        match self.play(from, square) {
            Ok(captured) => ClickOutcome::Moved {
                from,
                to: square,
                captured,
            },
            Err(e) => {
                trace!("deselected {from}: {e}");
                ClickOutcome::Deselected
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::{Board, Color};

    fn sq(s: &str) -> Square {
        s.parse().unwrap()
    }

    #[test]
    fn test_click_selects_own_piece() {
        let mut game = GameState::new();
        let outcome = game.click(sq("g1"));
        assert_eq!(
            outcome,
            ClickOutcome::Selected {
                square: sq("g1"),
                destinations: vec![sq("f3"), sq("h3")],
            }
        );
        assert_eq!(game.selected(), Some(sq("g1")));
    }

    #[test]
    fn test_click_ignores_opponent_and_empty() {
        let mut game = GameState::new();
        assert_eq!(game.click(sq("g8")), ClickOutcome::Ignored);
        assert_eq!(game.click(sq("e4")), ClickOutcome::Ignored);
        assert_eq!(game.selected(), None);
    }

    #[test]
    fn test_second_click_moves() {
        let mut game = GameState::new();
        game.click(sq("e2"));
        let outcome = game.click(sq("e4"));
        assert_eq!(
            outcome,
            ClickOutcome::Moved {
                from: sq("e2"),
                to: sq("e4"),
                captured: None,
            }
        );
        assert_eq!(game.selected(), None);
        assert_eq!(game.current_turn(), Color::Black);
    }

    #[test]
    fn test_second_click_elsewhere_deselects() {
        let mut game = GameState::new();
        game.click(sq("e2"));
        assert_eq!(game.click(sq("e5")), ClickOutcome::Deselected);
        assert_eq!(game.selected(), None);
        assert_eq!(game.current_turn(), Color::White);
        assert_eq!(game.board(), &Board::new());
    }

    #[test]
    fn test_clicking_another_own_piece_only_deselects() {
        let mut game = GameState::new();
        game.click(sq("e2"));
        assert_eq!(game.click(sq("d2")), ClickOutcome::Deselected);
        assert_eq!(game.selected(), None);
    }

    #[test]
    fn test_select_reports_gate_error() {
        let mut game = GameState::new();
        assert_eq!(
            game.select(sq("a7")),
            Err(MoveError::WrongTurn {
                square: sq("a7"),
                to_move: Color::White
            })
        );
        assert_eq!(game.select(sq("a2")), Ok(vec![sq("a3"), sq("a4")]));
        assert_eq!(game.selected(), Some(sq("a2")));
        game.deselect();
        assert_eq!(game.selected(), None);
    }
}
