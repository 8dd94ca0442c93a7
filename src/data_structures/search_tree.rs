/// A node discovered during a search, together with how it was reached
#[derive(Debug, Clone)]
pub struct TreeEntry<N, C> {
    /// The discovered node
    pub node: N,

    /// Depth or accumulated cost at which the node was discovered
    pub cost: C,

    /// Index of the entry this node was reached from (None for the root)
    pub parent: Option<usize>,
}

/// Arena of discovered nodes linked to their predecessors.
///
/// Both search engines record every discovery here instead of carrying whole
/// paths in their worklists, so a frontier entry is just an index.
#[derive(Debug, Clone)]
pub struct SearchTree<N, C> {
    entries: Vec<TreeEntry<N, C>>,
}

impl<N, C> SearchTree<N, C> {
    /// Creates a tree holding only the root node
    pub fn with_root(node: N, cost: C) -> Self {
        SearchTree {
            entries: vec![TreeEntry {
                node,
                cost,
                parent: None,
            }],
        }
    }

    /// Records `node` as reached from `parent` and returns its index
    pub fn insert(&mut self, node: N, cost: C, parent: usize) -> usize {
        debug_assert!(parent < self.entries.len());
        self.entries.push(TreeEntry {
            node,
            cost,
            parent: Some(parent),
        });
        self.entries.len() - 1
    }

    /// Returns the entry at `index`
    pub fn get(&self, index: usize) -> &TreeEntry<N, C> {
        &self.entries[index]
    }

    /// Returns the node at `index`
    pub fn node(&self, index: usize) -> &N {
        &self.entries[index].node
    }

    /// Number of recorded discoveries
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if nothing has been recorded
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<N: Clone, C> SearchTree<N, C> {
    /// Returns the path from the root to the node at `index`, both inclusive
    pub fn path_to(&self, index: usize) -> Vec<N> {
        let mut path = Vec::new();
        let mut current = Some(index);

        // Parents always precede their children in the arena, so this ends
        while let Some(i) = current {
            let entry = &self.entries[i];
            path.push(entry.node.clone());
            current = entry.parent;
        }

        path.reverse();
        path
    }
}
