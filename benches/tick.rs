use criterion::{black_box, criterion_group, criterion_main, Criterion};
use pixel_snake::{
    game::{render, FoodPlacer, GameState},
    grid::{Board, Coord, Direction},
};

/// A long snake snaking back and forth across the top rows.
fn make_game(board: Board, length: i64) -> GameState {
    let width = board.width();
    let body = (0..length).rev().map(|i| {
        let row = i / width;
        let col = if row % 2 == 0 { i % width } else { width - 1 - i % width };
        Coord::new(col, row)
    });
    GameState::new(
        board,
        body,
        Coord::new(0, board.height() - 1),
        Direction::Right,
    )
}

fn bench_step(c: &mut Criterion) {
    let board = Board::default();
    let game = make_game(board, 20);
    let mut placer = FoodPlacer::seeded(0);

    c.bench_function("step", |b| {
        b.iter(|| black_box(&game).step(Direction::Down, &mut placer));
    });
}

fn bench_render(c: &mut Criterion) {
    let game = make_game(Board::default(), 200);

    c.bench_function("render", |b| {
        b.iter(|| render(black_box(&game)));
    });
}

criterion_group!(benches, bench_step, bench_render);
criterion_main!(benches);
