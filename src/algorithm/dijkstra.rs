use std::collections::HashMap;
use std::fmt::Debug;
use std::hash::Hash;

use log::{debug, trace};
use num_traits::Zero;

use crate::data_structures::{MinHeap, SearchTree};

/// Classic Dijkstra's algorithm over an implicit weighted graph.
///
/// Edge costs must be non-negative. This is not checked: negative costs give
/// meaningless distances and may keep the search from terminating. The cost
/// type must also be wide enough to hold every accumulated distance; path
/// costs are summed with plain `+`, which panics on integer overflow in debug
/// builds.
///
/// Improved distances are pushed as fresh heap entries rather than decreasing
/// keys in place; an entry popped with a cost above the recorded best for its
/// node is stale and skipped.
#[derive(Debug, Clone, Copy)]
pub struct Dijkstra<W> {
    /// Candidate costs above this bound are never recorded
    max_cost: Option<W>,
}

struct Traversal<N, K, W> {
    tree: SearchTree<N, W>,
    best: HashMap<K, W>,
    goal: Option<usize>,
}

impl<W> Default for Dijkstra<W> {
    fn default() -> Self {
        Dijkstra { max_cost: None }
    }
}

impl<W> Dijkstra<W>
where
    W: Zero + Copy + PartialOrd + Debug,
{
    /// Creates a new Dijkstra search with no cost bound
    pub fn new() -> Self {
        Dijkstra::default()
    }

    /// Ignore every node whose shortest distance would exceed `cost`
    pub fn with_max_cost(mut self, cost: W) -> Self {
        self.max_cost = Some(cost);
        self
    }

    fn traverse<N, K, FN, IN, FK, FG>(
        &self,
        start: &N,
        mut neighbors: FN,
        key: FK,
        mut is_goal: FG,
    ) -> Traversal<N, K, W>
    where
        N: Clone,
        K: Hash + Eq,
        FN: FnMut(&N) -> IN,
        IN: IntoIterator<Item = (N, W)>,
        FK: Fn(&N) -> K,
        FG: FnMut(&N) -> bool,
    {
        let mut tree = SearchTree::with_root(start.clone(), W::zero());
        let mut best = HashMap::new();
        best.insert(key(start), W::zero());

        let mut queue = MinHeap::new();
        queue.push(W::zero(), 0);

        let mut settled = 0usize;
        let mut stale = 0usize;
        let mut goal = None;

        while let Some((cost, index)) = queue.pop() {
            let node = tree.node(index);

            // A cheaper route to this node was found after this entry was pushed
            if best.get(&key(node)).is_some_and(|recorded| cost > *recorded) {
                stale += 1;
                continue;
            }
            settled += 1;

            if is_goal(node) {
                goal = Some(index);
                break;
            }

            trace!("dijkstra settling entry {} at cost {:?}", index, cost);
            let successors = neighbors(node);
            for (next, weight) in successors {
                let candidate = cost + weight;
                if self.max_cost.is_some_and(|max| candidate > max) {
                    continue;
                }

                let next_key = key(&next);
                let improves = match best.get(&next_key) {
                    None => true,
                    Some(recorded) => candidate < *recorded,
                };

                if improves {
                    best.insert(next_key, candidate);
                    let child = tree.insert(next, candidate, index);
                    queue.push(candidate, child);
                }
            }
        }

        debug!(
            "dijkstra settled {} of {} discovered entries, skipped {} stale",
            settled,
            tree.len(),
            stale
        );

        Traversal { tree, best, goal }
    }

    /// Minimal total cost from `start` to `goal`, comparing nodes by `key`
    pub fn distance_by_key<N, K, FN, IN, FK>(
        &self,
        start: &N,
        goal: &N,
        neighbors: FN,
        key: FK,
    ) -> Option<W>
    where
        N: Clone,
        K: Hash + Eq,
        FN: FnMut(&N) -> IN,
        IN: IntoIterator<Item = (N, W)>,
        FK: Fn(&N) -> K,
    {
        let goal_key = key(goal);
        let traversal = self.traverse(start, neighbors, &key, |node| key(node) == goal_key);
        traversal.goal.map(|index| traversal.tree.get(index).cost)
    }

    /// Cheapest path from `start` to `goal` together with its total cost
    pub fn path_by_key<N, K, FN, IN, FK>(
        &self,
        start: &N,
        goal: &N,
        neighbors: FN,
        key: FK,
    ) -> Option<(Vec<N>, W)>
    where
        N: Clone,
        K: Hash + Eq,
        FN: FnMut(&N) -> IN,
        IN: IntoIterator<Item = (N, W)>,
        FK: Fn(&N) -> K,
    {
        let goal_key = key(goal);
        let traversal = self.traverse(start, neighbors, &key, |node| key(node) == goal_key);
        traversal
            .goal
            .map(|index| (traversal.tree.path_to(index), traversal.tree.get(index).cost))
    }

    /// Minimal total cost to every node reachable from `start`, keyed by `key`
    pub fn all_distances_by_key<N, K, FN, IN, FK>(
        &self,
        start: &N,
        neighbors: FN,
        key: FK,
    ) -> HashMap<K, W>
    where
        N: Clone,
        K: Hash + Eq,
        FN: FnMut(&N) -> IN,
        IN: IntoIterator<Item = (N, W)>,
        FK: Fn(&N) -> K,
    {
        self.traverse(start, neighbors, key, |_| false).best
    }

    /// Minimal total cost from `start` to the cheapest node satisfying `is_goal`
    pub fn distance_until<N, FN, IN, FG>(&self, start: &N, neighbors: FN, is_goal: FG) -> Option<W>
    where
        N: Hash + Eq + Clone,
        FN: FnMut(&N) -> IN,
        IN: IntoIterator<Item = (N, W)>,
        FG: FnMut(&N) -> bool,
    {
        let traversal = self.traverse(start, neighbors, N::clone, is_goal);
        traversal.goal.map(|index| traversal.tree.get(index).cost)
    }

    /// Cheapest path to a node satisfying `is_goal`, with its total cost
    pub fn path_until<N, FN, IN, FG>(
        &self,
        start: &N,
        neighbors: FN,
        is_goal: FG,
    ) -> Option<(Vec<N>, W)>
    where
        N: Hash + Eq + Clone,
        FN: FnMut(&N) -> IN,
        IN: IntoIterator<Item = (N, W)>,
        FG: FnMut(&N) -> bool,
    {
        let traversal = self.traverse(start, neighbors, N::clone, is_goal);
        traversal
            .goal
            .map(|index| (traversal.tree.path_to(index), traversal.tree.get(index).cost))
    }
}

/// Minimal total cost from `start` to `goal`, or `None` when unreachable.
///
/// # Example
///
/// ```
/// use aoc_search::dijkstra;
///
/// let edges = |node: &char| match node {
///     'A' => vec![('B', 1), ('C', 4)],
///     'B' => vec![('C', 2), ('D', 5)],
///     'C' => vec![('D', 1)],
///     _ => vec![],
/// };
/// assert_eq!(dijkstra(&'A', &'D', edges), Some(4));
/// ```
pub fn dijkstra<N, W, FN, IN>(start: &N, goal: &N, neighbors: FN) -> Option<W>
where
    N: Hash + Eq + Clone,
    W: Zero + Copy + PartialOrd + Debug,
    FN: FnMut(&N) -> IN,
    IN: IntoIterator<Item = (N, W)>,
{
    Dijkstra::new().distance_by_key(start, goal, neighbors, N::clone)
}

/// Cheapest path from `start` to `goal` (both inclusive) and its total cost
pub fn dijkstra_path<N, W, FN, IN>(start: &N, goal: &N, neighbors: FN) -> Option<(Vec<N>, W)>
where
    N: Hash + Eq + Clone,
    W: Zero + Copy + PartialOrd + Debug,
    FN: FnMut(&N) -> IN,
    IN: IntoIterator<Item = (N, W)>,
{
    Dijkstra::new().path_by_key(start, goal, neighbors, N::clone)
}

/// Minimal total cost to every node reachable from `start`, including `start`
pub fn dijkstra_all<N, W, FN, IN>(start: &N, neighbors: FN) -> HashMap<N, W>
where
    N: Hash + Eq + Clone,
    W: Zero + Copy + PartialOrd + Debug,
    FN: FnMut(&N) -> IN,
    IN: IntoIterator<Item = (N, W)>,
{
    Dijkstra::new().all_distances_by_key(start, neighbors, N::clone)
}
