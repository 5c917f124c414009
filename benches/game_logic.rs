use std::time::Duration;

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use gridfall::core::{GameSession, Grid};
use gridfall::types::{BlockColor, GameAction, GRID_WIDTH};

fn bench_update(c: &mut Criterion) {
    let mut session = GameSession::new(12345);

    c.bench_function("session_update_16ms", |b| {
        b.iter(|| {
            session.update(black_box(Duration::from_millis(16)), &[]);
            if session.game_over() {
                session.update(Duration::ZERO, &[GameAction::Restart]);
            }
        })
    });
}

fn bench_clear_rows(c: &mut Criterion) {
    c.bench_function("clear_2_rows", |b| {
        b.iter(|| {
            let mut grid = Grid::new();
            for y in [14, 15] {
                let cells: Vec<(i8, i8)> = (0..GRID_WIDTH as i8).map(|x| (x, y)).collect();
                grid.lock(&cells, BlockColor::Cyan);
            }
            black_box(grid.clear_full_rows())
        })
    });
}

fn bench_drop(c: &mut Criterion) {
    let mut session = GameSession::new(12345);

    c.bench_function("drop_piece", |b| {
        b.iter(|| {
            session.update(Duration::ZERO, &[GameAction::Drop]);
            if session.game_over() {
                session.update(Duration::ZERO, &[GameAction::Restart]);
            }
        })
    });
}

fn bench_move_and_rotate(c: &mut Criterion) {
    let mut session = GameSession::new(12345);
    let actions = [
        GameAction::MoveLeft,
        GameAction::RotateCw,
        GameAction::MoveRight,
    ];

    c.bench_function("move_and_rotate", |b| {
        b.iter(|| {
            session.update(Duration::ZERO, black_box(&actions));
        })
    });
}

criterion_group!(
    benches,
    bench_update,
    bench_clear_rows,
    bench_drop,
    bench_move_and_rotate
);
criterion_main!(benches);
