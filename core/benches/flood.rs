use criterion::{Criterion, criterion_group, criterion_main};
use sapper_core::*;
use std::hint::black_box;

fn flood_benchmark(c: &mut Criterion) {
    let empty = Board::from_layout(MineLayout::from_mine_coords((200, 200), &[]).unwrap());
    c.bench_function("flood 200x200 empty", |b| {
        b.iter(|| {
            let mut board = empty.clone();
            board.reveal_cell(black_box((100, 100))).unwrap()
        })
    });

    let config = GameConfig::new(100, 100, 1500).unwrap();
    let sparse = Board::with_placer(config, RandomPlacer::new(42));
    let start = sparse
        .cells()
        .find(|cell| !cell.is_mine() && cell.surrounding_mines() == 0)
        .map(Cell::coords)
        .unwrap_or((0, 0));
    c.bench_function("flood 100x100 sparse", |b| {
        b.iter(|| {
            let mut board = sparse.clone();
            board.reveal_cell(black_box(start)).unwrap()
        })
    });
}

fn placement_benchmark(c: &mut Criterion) {
    let dense = GameConfig::new(100, 100, 9999).unwrap();
    c.bench_function("place 100x100 dense", |b| {
        b.iter(|| RandomPlacer::new(black_box(7)).place(&dense))
    });
}

criterion_group!(benches, flood_benchmark, placement_benchmark);
criterion_main!(benches);
