use aoc_search::graph::generators::{generate_grid, generate_maze};
use aoc_search::graph::Graph;
use aoc_search::{bfs_distance, dijkstra, MinHeap, Point};
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

fn heap_benchmark(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(7);
    let priorities: Vec<u32> = (0..10_000).map(|_| rng.gen_range(0..1_000_000)).collect();

    c.bench_function("min_heap 10k push/pop", |b| {
        b.iter(|| {
            let mut heap = MinHeap::with_capacity(priorities.len());
            for (i, &p) in priorities.iter().enumerate() {
                heap.push(p, i);
            }
            while let Some(entry) = heap.pop() {
                black_box(entry);
            }
        })
    });
}

fn search_benchmark(c: &mut Criterion) {
    let graph = generate_grid(100, 100);
    let goal = Point::new(99, 99);

    c.bench_function("bfs grid 100x100", |b| {
        b.iter(|| bfs_distance(&Point::ORIGIN, &goal, |p| graph.successors(p)))
    });
    c.bench_function("dijkstra grid 100x100", |b| {
        b.iter(|| dijkstra(&Point::ORIGIN, &goal, |p| graph.weighted_successors(p)))
    });

    let mut rng = StdRng::seed_from_u64(11);
    let maze = generate_maze(100, 100, 0.25, &mut rng);
    c.bench_function("bfs maze 100x100", |b| {
        b.iter(|| {
            bfs_distance(&Point::ORIGIN, &goal, |p| {
                maze.passable_neighbors(*p, |cell| *cell == '.')
            })
        })
    });
}

criterion_group!(benches, heap_benchmark, search_benchmark);
criterion_main!(benches);
