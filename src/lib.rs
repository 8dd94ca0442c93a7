//! AoC Search - breadth-first and Dijkstra search over implicit graphs
//!
//! The graph is never materialised: callers hand in a start node, optionally a
//! goal, and a function producing the neighbors of a node. Node identity is a
//! canonical key derived from each node, which defaults to the node itself.
//!
//! Around the search core sit the helpers puzzle solutions lean on: a 2D
//! point/grid toolkit with a position counter, integer helpers, explicit adjacency-list graphs and line-oriented input
//! readers.

pub mod algorithm;
pub mod data_structures;
pub mod graph;
pub mod grid;
pub mod input;
pub mod math;

pub use algorithm::{
    bfs::{bfs_all, bfs_distance, bfs_path, Bfs},
    dijkstra::{dijkstra, dijkstra_all, dijkstra_path, Dijkstra},
};
/// Re-export main types for convenient use
pub use data_structures::MinHeap;
pub use graph::directed::DirectedGraph;
pub use grid::{Counter, Direction, Grid, Point};

/// Error types for the library
#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("Negative edge weight from {from} to {to}")]
    NegativeWeight { from: String, to: String },

    #[error("Invalid point: {0:?}")]
    InvalidPoint(String),

    #[error("Invalid direction: {0:?}")]
    InvalidDirection(String),

    #[error("Invalid number on line {line}: {text:?}")]
    InvalidNumber { line: usize, text: String },

    #[error("Failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

/// Result type for the library
pub type Result<T> = std::result::Result<T, Error>;
