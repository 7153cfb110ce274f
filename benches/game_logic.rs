use criterion::{black_box, criterion_group, criterion_main, Criterion};
use gridfall::core::{Game, Grid, SequenceRng, Snapshot};
use gridfall::types::{Cell, PieceKind, BOARD_WIDTH};

fn bench_gravity_tick(c: &mut Criterion) {
    let mut game = Game::new(12345);

    c.bench_function("gravity_tick", |b| {
        b.iter(|| {
            game.move_piece(black_box(0), black_box(1));
        })
    });
}

fn bench_rotate(c: &mut Criterion) {
    let mut game = Game::with_rng(SequenceRng::new([PieceKind::T]));

    c.bench_function("rotate_piece", |b| {
        b.iter(|| {
            game.rotate_piece();
        })
    });
}

fn bench_clear_four_rows(c: &mut Criterion) {
    c.bench_function("clear_4_rows", |b| {
        b.iter(|| {
            let mut grid = Grid::new();
            for y in 16..20 {
                for x in 0..BOARD_WIDTH as i8 {
                    grid.set(x, y, Cell::Filled);
                }
            }
            grid.clear_full_rows()
        })
    });
}

fn bench_snapshot(c: &mut Criterion) {
    let game = Game::new(12345);
    let mut snapshot = Snapshot::default();

    c.bench_function("snapshot_into", |b| {
        b.iter(|| {
            game.snapshot_into(&mut snapshot);
        })
    });
}

criterion_group!(
    benches,
    bench_gravity_tick,
    bench_rotate,
    bench_clear_four_rows,
    bench_snapshot
);
criterion_main!(benches);
