//! Property-based tests using proptest.

use crate::board::{Board, Square};
use crate::game::GameState;
use proptest::prelude::*;
use rand::prelude::*;

/// Strategy to generate a random move sequence length
fn move_count_strategy() -> impl Strategy<Value = usize> {
    1..=40usize
}

/// Strategy to generate a random seed for move selection
fn seed_strategy() -> impl Strategy<Value = u64> {
    any::<u64>()
}

fn square_strategy() -> impl Strategy<Value = Square> {
    prop::sample::select(Square::all().collect::<Vec<_>>())
}

/// Play up to `num_moves` random legal moves from the starting position.
fn random_game(seed: u64, num_moves: usize) -> GameState {
    let mut game = GameState::new();
    let mut rng = StdRng::seed_from_u64(seed);
    for _ in 0..num_moves {
        let moves = game.legal_moves();
        let Some(mv) = moves.choose(&mut rng) else {
            break;
        };
        game.play(mv.from, mv.to).unwrap();
    }
    game
}

proptest! {
    /// Property: applying a legal move relocates the mover, empties the origin
    /// and loses exactly the captured piece
    #[test]
    fn prop_apply_move_bookkeeping(seed in seed_strategy(), num_moves in move_count_strategy()) {
        let mut game = GameState::new();
        let mut rng = StdRng::seed_from_u64(seed);

        for _ in 0..num_moves {
            let moves = game.legal_moves();
            let Some(mv) = moves.choose(&mut rng).copied() else {
                break;
            };
            let before = game.board().occupied_count();
            let mover = game.board().occupant_at(mv.from);
            let defender = game.board().occupant_at(mv.to);
            let side = game.current_turn();

            let captured = game.play(mv.from, mv.to).unwrap();

            prop_assert_eq!(captured, defender);
            prop_assert!(game.board().occupant_at(mv.from).is_none());
            prop_assert_eq!(game.board().occupant_at(mv.to), mover);
            let expected = before - usize::from(captured.is_some());
            prop_assert_eq!(game.board().occupied_count(), expected);
            prop_assert_eq!(game.current_turn(), side.opponent());
        }
    }

    /// Property: no legal move lands on a friendly piece or stays in place
    #[test]
    fn prop_no_friendly_captures(seed in seed_strategy(), num_moves in move_count_strategy()) {
        let game = random_game(seed, num_moves);
        let board = game.board();
        for mv in game.legal_moves() {
            prop_assert_ne!(mv.from, mv.to);
            let mover = board.occupant_at(mv.from).unwrap();
            if let Some(target) = board.occupant_at(mv.to) {
                prop_assert_ne!(target.color, mover.color);
            }
        }
    }

    /// Property: every legal move belongs to the side to move
    #[test]
    fn prop_legal_moves_respect_turn(seed in seed_strategy(), num_moves in move_count_strategy()) {
        let game = random_game(seed, num_moves);
        for mv in game.legal_moves() {
            let mover = game.board().occupant_at(mv.from).unwrap();
            prop_assert_eq!(mover.color, game.current_turn());
        }
    }

    /// Property: placement text round-trips after random play
    #[test]
    fn prop_placement_roundtrip(seed in seed_strategy(), num_moves in move_count_strategy()) {
        let game = random_game(seed, num_moves);
        let placement = game.board().to_placement();
        let restored = Board::from_placement(&placement).unwrap();
        prop_assert_eq!(&restored, game.board());
    }

    /// Property: the null move is illegal from every square of every position
    #[test]
    fn prop_null_move_illegal(seed in seed_strategy(), num_moves in move_count_strategy(), square in square_strategy()) {
        let game = random_game(seed, num_moves);
        prop_assert!(!game.board().is_legal_move(square, square));
    }

    /// Property: square notation round-trips
    #[test]
    fn prop_square_notation_roundtrip(square in square_strategy()) {
        let parsed: Square = square.to_string().parse().unwrap();
        prop_assert_eq!(parsed, square);
        prop_assert_eq!(Square::new(square.rank(), square.file()), Some(square));
        prop_assert_eq!(Square::all().nth(square.as_index()), Some(square));
    }
}
