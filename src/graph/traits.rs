use std::fmt::Debug;
use num_traits::Zero;

use crate::Result;

/// Trait representing an explicit weighted directed graph with labelled nodes
pub trait Graph<N, W>: Debug
where
    W: Zero + Copy + PartialOrd + Debug,
{
    /// Returns the number of nodes in the graph
    fn node_count(&self) -> usize;

    /// Returns the number of edges in the graph
    fn edge_count(&self) -> usize;

    /// Returns an iterator over the outgoing edges from a node
    fn outgoing_edges(&self, node: &N) -> Box<dyn Iterator<Item = (N, W)> + '_>;

    /// Returns true if the node exists in the graph
    fn has_node(&self, node: &N) -> bool;

    /// Returns true if there's an edge between the two nodes
    fn has_edge(&self, from: &N, to: &N) -> bool;

    /// Gets the weight of an edge if it exists
    fn edge_weight(&self, from: &N, to: &N) -> Option<W>;

    /// Targets of the outgoing edges of `node`, for unweighted search
    fn successors(&self, node: &N) -> Vec<N> {
        self.outgoing_edges(node).map(|(target, _)| target).collect()
    }

    /// Outgoing edges of `node` with their weights, for weighted search
    fn weighted_successors(&self, node: &N) -> Vec<(N, W)> {
        self.outgoing_edges(node).collect()
    }
}

/// Trait for mutable graph operations
pub trait MutableGraph<N, W>: Graph<N, W>
where
    W: Zero + Copy + PartialOrd + Debug,
{
    /// Adds a node; returns false if it was already present
    fn add_node(&mut self, node: N) -> bool;

    /// Adds a directed edge, creating missing endpoints. An existing edge
    /// between the same nodes has its weight replaced.
    fn add_edge(&mut self, from: N, to: N, weight: W) -> Result<()>;

    /// Removes an edge from the graph
    fn remove_edge(&mut self, from: &N, to: &N) -> bool;

    /// Adds edges in both directions with the same weight
    fn add_undirected_edge(&mut self, a: N, b: N, weight: W) -> Result<()>
    where
        N: Clone,
    {
        self.add_edge(a.clone(), b.clone(), weight)?;
        self.add_edge(b, a, weight)
    }
}
