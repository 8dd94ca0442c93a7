use std::collections::hash_map::Entry;
use std::collections::{HashMap, VecDeque};
use std::hash::Hash;

use log::{debug, trace};

use crate::data_structures::SearchTree;

/// Breadth-first search over an implicit unweighted graph.
///
/// Every edge counts as one hop. A node is marked as seen the moment it is
/// enqueued, so each node enters the queue at most once even when the graph
/// has cycles.
#[derive(Debug, Clone, Copy, Default)]
pub struct Bfs {
    /// Nodes further than this many hops from the start are never enqueued
    max_depth: Option<usize>,
}

/// Everything a finished traversal knows
struct Traversal<N, K> {
    tree: SearchTree<N, usize>,
    seen: HashMap<K, usize>,
    goal: Option<usize>,
}

impl Bfs {
    /// Creates an unbounded breadth-first search
    pub fn new() -> Self {
        Bfs { max_depth: None }
    }

    /// Limit the search to nodes at most `depth` hops from the start
    pub fn with_max_depth(mut self, depth: usize) -> Self {
        self.max_depth = Some(depth);
        self
    }

    fn traverse<N, K, FN, IN, FK, FG>(
        &self,
        start: &N,
        mut neighbors: FN,
        key: FK,
        mut is_goal: FG,
    ) -> Traversal<N, K>
    where
        N: Clone,
        K: Hash + Eq,
        FN: FnMut(&N) -> IN,
        IN: IntoIterator<Item = N>,
        FK: Fn(&N) -> K,
        FG: FnMut(&N) -> bool,
    {
        let mut tree = SearchTree::with_root(start.clone(), 0);
        let mut seen = HashMap::new();
        seen.insert(key(start), 0);

        let mut queue = VecDeque::from([0]);
        let mut goal = None;

        while let Some(index) = queue.pop_front() {
            let node = tree.node(index);
            if is_goal(node) {
                goal = Some(index);
                break;
            }

            let depth = tree.get(index).cost;
            if self.max_depth.is_some_and(|max| depth >= max) {
                continue;
            }

            trace!("bfs expanding entry {} at depth {}", index, depth);
            let successors = neighbors(node);
            for next in successors {
                if let Entry::Vacant(slot) = seen.entry(key(&next)) {
                    let child = tree.insert(next, depth + 1, index);
                    slot.insert(child);
                    queue.push_back(child);
                }
            }
        }

        debug!(
            "bfs discovered {} nodes, goal {}",
            tree.len(),
            if goal.is_some() { "reached" } else { "not reached" }
        );

        Traversal { tree, seen, goal }
    }

    /// Path from `start` to `goal` (both inclusive), comparing nodes by `key`
    pub fn path_by_key<N, K, FN, IN, FK>(
        &self,
        start: &N,
        goal: &N,
        neighbors: FN,
        key: FK,
    ) -> Option<Vec<N>>
    where
        N: Clone,
        K: Hash + Eq,
        FN: FnMut(&N) -> IN,
        IN: IntoIterator<Item = N>,
        FK: Fn(&N) -> K,
    {
        let goal_key = key(goal);
        let traversal = self.traverse(start, neighbors, &key, |node| key(node) == goal_key);
        traversal.goal.map(|index| traversal.tree.path_to(index))
    }

    /// Hop count from `start` to `goal`, comparing nodes by `key`
    pub fn distance_by_key<N, K, FN, IN, FK>(
        &self,
        start: &N,
        goal: &N,
        neighbors: FN,
        key: FK,
    ) -> Option<usize>
    where
        N: Clone,
        K: Hash + Eq,
        FN: FnMut(&N) -> IN,
        IN: IntoIterator<Item = N>,
        FK: Fn(&N) -> K,
    {
        let goal_key = key(goal);
        let traversal = self.traverse(start, neighbors, &key, |node| key(node) == goal_key);
        traversal.goal.map(|index| traversal.tree.get(index).cost)
    }

    /// Hop counts to every node reachable from `start`, keyed by `key`.
    ///
    /// The start itself is included at distance 0. Unreachable nodes are
    /// absent.
    pub fn all_distances_by_key<N, K, FN, IN, FK>(
        &self,
        start: &N,
        neighbors: FN,
        key: FK,
    ) -> HashMap<K, usize>
    where
        N: Clone,
        K: Hash + Eq,
        FN: FnMut(&N) -> IN,
        IN: IntoIterator<Item = N>,
        FK: Fn(&N) -> K,
    {
        let Traversal { tree, seen, .. } = self.traverse(start, neighbors, key, |_| false);
        seen.into_iter()
            .map(|(key, index)| (key, tree.get(index).cost))
            .collect()
    }

    /// Path from `start` to the first dequeued node satisfying `is_goal`
    pub fn path_until<N, FN, IN, FG>(&self, start: &N, neighbors: FN, is_goal: FG) -> Option<Vec<N>>
    where
        N: Hash + Eq + Clone,
        FN: FnMut(&N) -> IN,
        IN: IntoIterator<Item = N>,
        FG: FnMut(&N) -> bool,
    {
        let traversal = self.traverse(start, neighbors, N::clone, is_goal);
        traversal.goal.map(|index| traversal.tree.path_to(index))
    }

    /// Hop count from `start` to the nearest node satisfying `is_goal`
    pub fn distance_until<N, FN, IN, FG>(&self, start: &N, neighbors: FN, is_goal: FG) -> Option<usize>
    where
        N: Hash + Eq + Clone,
        FN: FnMut(&N) -> IN,
        IN: IntoIterator<Item = N>,
        FG: FnMut(&N) -> bool,
    {
        let traversal = self.traverse(start, neighbors, N::clone, is_goal);
        traversal.goal.map(|index| traversal.tree.get(index).cost)
    }
}

/// Shortest (fewest hops) path from `start` to `goal`, both inclusive.
///
/// Returns `[start]` without calling `neighbors` when the two are equal, and
/// `None` when `goal` is unreachable.
///
/// # Example
///
/// ```
/// use aoc_search::bfs_path;
///
/// let path = bfs_path(&1u32, &10, |&n: &u32| [n + 1, n * 2].into_iter().filter(|&m| m <= 10));
/// assert_eq!(path, Some(vec![1, 2, 4, 5, 10]));
/// ```
pub fn bfs_path<N, FN, IN>(start: &N, goal: &N, neighbors: FN) -> Option<Vec<N>>
where
    N: Hash + Eq + Clone,
    FN: FnMut(&N) -> IN,
    IN: IntoIterator<Item = N>,
{
    Bfs::new().path_by_key(start, goal, neighbors, N::clone)
}

/// Hop count from `start` to `goal`, or `None` when unreachable
pub fn bfs_distance<N, FN, IN>(start: &N, goal: &N, neighbors: FN) -> Option<usize>
where
    N: Hash + Eq + Clone,
    FN: FnMut(&N) -> IN,
    IN: IntoIterator<Item = N>,
{
    Bfs::new().distance_by_key(start, goal, neighbors, N::clone)
}

/// Hop counts to every node reachable from `start`, including `start` at 0
pub fn bfs_all<N, FN, IN>(start: &N, neighbors: FN) -> HashMap<N, usize>
where
    N: Hash + Eq + Clone,
    FN: FnMut(&N) -> IN,
    IN: IntoIterator<Item = N>,
{
    Bfs::new().all_distances_by_key(start, neighbors, N::clone)
}
