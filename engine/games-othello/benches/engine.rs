use criterion::{black_box, criterion_group, criterion_main, BatchSize, Criterion};
use engine_core::{Position, Side};
use games_othello::Board;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;

/// Play `plies` random moves from the opening to reach a midgame board.
fn midgame_board(plies: usize, seed: u64) -> (Board, Side) {
    let mut rng = ChaCha20Rng::seed_from_u64(seed);
    let mut board = Board::new();
    let mut side = Side::Black;

    for _ in 0..plies {
        if let Some(&mv) = board.legal_moves(side).choose(&mut rng) {
            board.apply_move(mv, side);
        }
        side = side.opponent();
    }

    (board, side)
}

fn bench_legal_moves(c: &mut Criterion) {
    let mut group = c.benchmark_group("othello_legal_moves");

    group.bench_function("opening", |b| {
        let board = Board::new();
        b.iter(|| black_box(board.legal_moves(Side::Black)));
    });

    group.bench_function("midgame", |b| {
        let (board, side) = midgame_board(20, 42);
        b.iter(|| black_box(board.legal_moves(side)));
    });

    group.finish();
}

fn bench_apply_move(c: &mut Criterion) {
    let mut group = c.benchmark_group("othello_apply_move");

    group.bench_function("midgame_first_move", |b| {
        let (board, side) = midgame_board(20, 42);
        let mv = board.legal_moves(side)[0];
        b.iter_batched(
            || board.deep_copy(),
            |mut board| {
                board.apply_move(mv, side);
                board
            },
            BatchSize::SmallInput,
        );
    });

    group.finish();
}

fn bench_random_playout(c: &mut Criterion) {
    let mut group = c.benchmark_group("othello_playout");

    group.bench_function("full_random_game", |b| {
        b.iter_batched(
            || ChaCha20Rng::seed_from_u64(7),
            |mut rng| {
                let mut board = Board::new();
                let mut side = Side::Black;
                while !board.is_terminal() {
                    if let Some(&mv) = board.legal_moves(side).choose(&mut rng) {
                        board.apply_move(mv, side);
                    }
                    side = side.opponent();
                }
                black_box(board.winner())
            },
            BatchSize::SmallInput,
        );
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_legal_moves,
    bench_apply_move,
    bench_random_playout
);
criterion_main!(benches);
