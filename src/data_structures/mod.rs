pub mod priority_queue;
pub mod search_tree;

pub use priority_queue::MinHeap;
pub use search_tree::{SearchTree, TreeEntry};
