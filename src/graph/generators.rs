use crate::graph::{DirectedGraph, MutableGraph};
use crate::grid::{Grid, Point};
use rand::prelude::*;

/// Generates a `width` x `height` grid graph with 4-connectivity and unit weights.
/// Nodes are labelled by their `(x, y)` coordinate.
pub fn generate_grid(width: i64, height: i64) -> DirectedGraph<Point, u64> {
    let mut graph = DirectedGraph::new();

    for y in 0..height {
        for x in 0..width {
            let current = Point::new(x, y);
            graph.add_node(current);

            for neighbor in current.adjacent(false) {
                if (0..width).contains(&neighbor.x) && (0..height).contains(&neighbor.y) {
                    // Unit weights are never negative
                    let _ = graph.add_edge(current, neighbor, 1);
                }
            }
        }
    }

    graph
}

/// Generates a random directed graph on `n` vertices with roughly
/// `edge_factor * n` edges and integer weights in `1..100`
pub fn generate_random<R: Rng>(n: usize, edge_factor: f64, rng: &mut R) -> DirectedGraph<usize, u64> {
    let mut graph = DirectedGraph::new();
    for v in 0..n {
        graph.add_node(v);
    }

    let num_edges = (edge_factor * n as f64) as usize;
    for _ in 0..num_edges {
        let u = rng.gen_range(0..n);
        let v = rng.gen_range(0..n);
        // Avoid self-loops
        if u != v {
            let _ = graph.add_edge(u, v, rng.gen_range(1..100));
        }
    }

    graph
}

/// Generates a `width` x `height` maze of `.` floor and `#` wall cells.
/// The top-left and bottom-right corners are always floor.
pub fn generate_maze<R: Rng>(width: i64, height: i64, wall_probability: f64, rng: &mut R) -> Grid<char> {
    let mut grid = Grid::new();
    for y in 0..height {
        for x in 0..width {
            let cell = if rng.gen_bool(wall_probability) { '#' } else { '.' };
            grid.set(Point::new(x, y), cell);
        }
    }
    grid.set(Point::ORIGIN, '.');
    grid.set(Point::new(width - 1, height - 1), '.');
    grid
}
