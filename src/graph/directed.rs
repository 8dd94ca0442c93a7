use crate::graph::traits::{Graph, MutableGraph};
use crate::{Error, Result};
use num_traits::Zero;
use std::collections::HashMap;
use std::fmt::Debug;
use std::hash::Hash;

/// A directed graph implementation using adjacency lists keyed by node label
#[derive(Debug, Clone)]
pub struct DirectedGraph<N, W>
where
    N: Hash + Eq + Clone + Debug,
    W: Zero + Copy + PartialOrd + Debug,
{
    /// Nodes in insertion order
    nodes: Vec<N>,

    /// Outgoing edges for each node: node -> [(target, weight)]
    outgoing_edges: HashMap<N, Vec<(N, W)>>,
}

impl<N, W> DirectedGraph<N, W>
where
    N: Hash + Eq + Clone + Debug,
    W: Zero + Copy + PartialOrd + Debug,
{
    /// Creates a new empty directed graph
    pub fn new() -> Self {
        DirectedGraph {
            nodes: Vec::new(),
            outgoing_edges: HashMap::new(),
        }
    }

    /// Builds a graph from `(from, to, weight)` triples
    pub fn from_edges<I>(edges: I) -> Result<Self>
    where
        I: IntoIterator<Item = (N, N, W)>,
    {
        let mut graph = DirectedGraph::new();
        for (from, to, weight) in edges {
            graph.add_edge(from, to, weight)?;
        }
        Ok(graph)
    }

    /// Nodes in the order they were first added
    pub fn nodes(&self) -> impl Iterator<Item = &N> + '_ {
        self.nodes.iter()
    }
}

impl<N, W> Default for DirectedGraph<N, W>
where
    N: Hash + Eq + Clone + Debug,
    W: Zero + Copy + PartialOrd + Debug,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<N, W> Graph<N, W> for DirectedGraph<N, W>
where
    N: Hash + Eq + Clone + Debug,
    W: Zero + Copy + PartialOrd + Debug,
{
    fn node_count(&self) -> usize {
        self.nodes.len()
    }

    fn edge_count(&self) -> usize {
        self.outgoing_edges.values().map(|edges| edges.len()).sum()
    }

    fn outgoing_edges(&self, node: &N) -> Box<dyn Iterator<Item = (N, W)> + '_> {
        if let Some(edges) = self.outgoing_edges.get(node) {
            Box::new(edges.iter().cloned())
        } else {
            Box::new(std::iter::empty())
        }
    }

    fn has_node(&self, node: &N) -> bool {
        self.outgoing_edges.contains_key(node)
    }

    fn has_edge(&self, from: &N, to: &N) -> bool {
        if let Some(edges) = self.outgoing_edges.get(from) {
            edges.iter().any(|(target, _)| target == to)
        } else {
            false
        }
    }

    fn edge_weight(&self, from: &N, to: &N) -> Option<W> {
        self.outgoing_edges
            .get(from)?
            .iter()
            .find(|(target, _)| target == to)
            .map(|(_, weight)| *weight)
    }
}

impl<N, W> MutableGraph<N, W> for DirectedGraph<N, W>
where
    N: Hash + Eq + Clone + Debug,
    W: Zero + Copy + PartialOrd + Debug,
{
    fn add_node(&mut self, node: N) -> bool {
        if self.outgoing_edges.contains_key(&node) {
            return false;
        }
        self.nodes.push(node.clone());
        self.outgoing_edges.insert(node, Vec::new());
        true
    }

    fn add_edge(&mut self, from: N, to: N, weight: W) -> Result<()> {
        if weight < W::zero() {
            return Err(Error::NegativeWeight {
                from: format!("{:?}", from),
                to: format!("{:?}", to),
            });
        }

        self.add_node(from.clone());
        self.add_node(to.clone());

        let outgoing = self.outgoing_edges.entry(from).or_default();
        match outgoing.iter_mut().find(|(target, _)| *target == to) {
            Some(edge) => edge.1 = weight,
            None => outgoing.push((to, weight)),
        }
        Ok(())
    }

    fn remove_edge(&mut self, from: &N, to: &N) -> bool {
        if let Some(outgoing) = self.outgoing_edges.get_mut(from) {
            let len_before = outgoing.len();
            outgoing.retain(|(target, _)| target != to);
            len_before > outgoing.len()
        } else {
            false
        }
    }
}
