//! Benchmarks for rule evaluation.

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use chess_rules::board::{Board, Square};
use chess_rules::GameState;

fn bench_legality(c: &mut Criterion) {
    let mut group = c.benchmark_group("legality");

    let startpos = Board::new();
    let queen_board: Board = "8/8/8/3Q4/8/8/8/8".parse().unwrap();
    let d5: Square = "d5".parse().unwrap();

    group.bench_function("startpos_all_pairs", |b| {
        b.iter(|| {
            Square::all()
                .flat_map(|from| Square::all().map(move |to| (from, to)))
                .filter(|&(from, to)| black_box(&startpos).is_legal_move(from, to))
                .count()
        })
    });

    group.bench_function("queen_destinations", |b| {
        b.iter(|| black_box(&queen_board).legal_destinations(black_box(d5)))
    });

    group.finish();
}

fn bench_game(c: &mut Criterion) {
    let mut group = c.benchmark_group("game");

    group.bench_function("legal_moves_startpos", |b| {
        let game = GameState::new();
        b.iter(|| black_box(&game).legal_moves())
    });

    group.bench_function("play_opening", |b| {
        b.iter(|| {
            let mut game = GameState::new();
            for mv in ["e2e4", "e7e5", "g1f3", "b8c6", "f1c4", "g8f6"] {
                game.play_str(black_box(mv)).unwrap();
            }
            game
        })
    });

    group.finish();
}

criterion_group!(benches, bench_legality, bench_game);
criterion_main!(benches);
