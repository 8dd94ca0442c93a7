//! Distance tables between a fixed set of points of interest.
//!
//! One all-distances search runs per source, in parallel. Each search owns its
//! own visited set and heap, so the neighbor function only needs to be safe
//! to call from several threads at once.

use std::fmt::Debug;
use std::hash::Hash;

use log::debug;
use num_traits::Zero;
use rayon::prelude::*;

use crate::algorithm::bfs::bfs_all;
use crate::algorithm::dijkstra::dijkstra_all;

/// Hop counts between every pair of `points`.
///
/// Entry `[i][j]` is the distance from `points[i]` to `points[j]`, or `None`
/// when `points[j]` cannot be reached from `points[i]`.
pub fn bfs_distance_table<N, FN, IN>(points: &[N], neighbors: FN) -> Vec<Vec<Option<usize>>>
where
    N: Hash + Eq + Clone + Sync,
    FN: Fn(&N) -> IN + Sync,
    IN: IntoIterator<Item = N>,
{
    debug!("building bfs distance table for {} points", points.len());
    points
        .par_iter()
        .map(|source| {
            let distances = bfs_all(source, &neighbors);
            points
                .iter()
                .map(|target| distances.get(target).copied())
                .collect()
        })
        .collect()
}

/// Minimal total costs between every pair of `points`
pub fn dijkstra_distance_table<N, W, FN, IN>(points: &[N], neighbors: FN) -> Vec<Vec<Option<W>>>
where
    N: Hash + Eq + Clone + Sync,
    W: Zero + Copy + PartialOrd + Debug + Send,
    FN: Fn(&N) -> IN + Sync,
    IN: IntoIterator<Item = (N, W)>,
{
    debug!("building dijkstra distance table for {} points", points.len());
    points
        .par_iter()
        .map(|source| {
            let distances = dijkstra_all(source, &neighbors);
            points
                .iter()
                .map(|target| distances.get(target).copied())
                .collect()
        })
        .collect()
}
