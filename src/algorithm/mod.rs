pub mod batch;
pub mod bfs;
pub mod dijkstra;

pub use batch::{bfs_distance_table, dijkstra_distance_table};
pub use bfs::Bfs;
pub use dijkstra::Dijkstra;
