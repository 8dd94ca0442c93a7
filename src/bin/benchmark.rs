use std::env;
use std::time::{Duration, Instant};

use aoc_search::graph::generators::{generate_grid, generate_maze, generate_random};
use aoc_search::graph::Graph;
use aoc_search::{bfs_all, bfs_distance, dijkstra, dijkstra_all, MinHeap, Point};
use log::info;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

fn time<T>(name: &str, f: impl FnOnce() -> T) -> (T, Duration) {
    let start = Instant::now();
    let result = f();
    let duration = start.elapsed();
    println!("  - {:<28} {:>10.2?}", name, duration);
    (result, duration)
}

fn bench_heap(ops: usize, rng: &mut StdRng) {
    let mut heap = MinHeap::with_capacity(ops);
    let (popped, _) = time(&format!("heap: {} push + pop", ops), || {
        for i in 0..ops {
            heap.push(rng.gen_range(0..1_000_000u32), i);
        }
        let mut popped = 0;
        while heap.pop().is_some() {
            popped += 1;
        }
        popped
    });
    assert_eq!(popped, ops);
}

fn bench_grid(side: i64) {
    let graph = generate_grid(side, side);
    println!("Grid {}x{} ({} nodes, {} edges)", side, side, graph.node_count(), graph.edge_count());

    let start = Point::ORIGIN;
    let goal = Point::new(side - 1, side - 1);
    let (distance, _) = time("bfs distance corner-corner", || {
        bfs_distance(&start, &goal, |p| graph.successors(p))
    });
    let (weighted, _) = time("dijkstra corner-corner", || {
        dijkstra(&start, &goal, |p| graph.weighted_successors(p))
    });
    assert_eq!(distance.map(|d| d as u64), weighted);

    let (all, _) = time("bfs all distances", || bfs_all(&start, |p| graph.successors(p)));
    info!("bfs reached {} nodes", all.len());
}

fn bench_maze(side: i64, rng: &mut StdRng) {
    let maze = generate_maze(side, side, 0.3, rng);
    println!("Maze {}x{} (30% walls)", side, side);

    let goal = Point::new(side - 1, side - 1);
    let (distance, _) = time("bfs through maze", || {
        bfs_distance(&Point::ORIGIN, &goal, |p| maze.passable_neighbors(*p, |c| *c != '#'))
    });
    match distance {
        Some(d) => println!("    exit reached in {} steps", d),
        None => println!("    exit unreachable"),
    }
}

fn bench_random(n: usize, rng: &mut StdRng) {
    let graph = generate_random(n, 2.0, rng);
    println!("Random graph ({} nodes, {} edges)", graph.node_count(), graph.edge_count());

    let (all, _) = time("dijkstra all distances", || {
        dijkstra_all(&0usize, |v| graph.weighted_successors(v))
    });
    println!("    {} reachable vertices", all.len());
}

fn main() {
    env_logger::init();

    // benchmark [grid side] [random graph vertices] [heap operations]
    let args: Vec<String> = env::args().collect();
    let arg = |i: usize, default: usize| -> usize {
        args.get(i).and_then(|s| s.parse().ok()).unwrap_or(default)
    };
    let side = arg(1, 300) as i64;
    let vertices = arg(2, 100_000);
    let heap_ops = arg(3, 100_000);

    let mut rng = StdRng::seed_from_u64(2015);

    println!("=====================================================");
    println!("Benchmark: BFS / Dijkstra / MinHeap");
    println!("=====================================================");

    bench_heap(heap_ops, &mut rng);
    bench_grid(side);
    bench_maze(side, &mut rng);
    bench_random(vertices, &mut rng);
}
