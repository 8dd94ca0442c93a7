/// Array-backed binary min-heap of `(priority, value)` pairs.
///
/// Only priorities are compared, so values can be any type, including ones
/// with no ordering at all. Among entries sharing the minimum priority, `pop`
/// makes no promise about which one comes out first.
#[derive(Debug, Clone)]
pub struct MinHeap<P, V> {
    entries: Vec<(P, V)>,
}

impl<P, V> MinHeap<P, V>
where
    P: PartialOrd,
{
    /// Creates a new empty priority queue
    pub fn new() -> Self {
        MinHeap {
            entries: Vec::new(),
        }
    }

    /// Creates an empty priority queue with room for `capacity` entries
    pub fn with_capacity(capacity: usize) -> Self {
        MinHeap {
            entries: Vec::with_capacity(capacity),
        }
    }

    /// Returns true if the priority queue is empty
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns the number of entries in the priority queue
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Inserts `value` with the given priority
    pub fn push(&mut self, priority: P, value: V) {
        self.entries.push((priority, value));
        self.sift_up(self.entries.len() - 1);
    }

    /// Removes the entry with the smallest priority
    pub fn pop(&mut self) -> Option<(P, V)> {
        if self.entries.is_empty() {
            return None;
        }
        let last = self.entries.len() - 1;
        self.entries.swap(0, last);
        let min = self.entries.pop();
        self.sift_down(0);
        min
    }

    /// Returns the entry with the smallest priority without removing it
    pub fn peek(&self) -> Option<(&P, &V)> {
        self.entries.first().map(|(priority, value)| (priority, value))
    }

    /// Clears the priority queue
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    fn sift_up(&mut self, mut index: usize) {
        while index > 0 {
            let parent = (index - 1) / 2;
            if self.entries[index].0 < self.entries[parent].0 {
                self.entries.swap(index, parent);
                index = parent;
            } else {
                break;
            }
        }
    }

    fn sift_down(&mut self, mut index: usize) {
        let len = self.entries.len();
        loop {
            let left = 2 * index + 1;
            let right = left + 1;
            let mut smallest = index;

            if left < len && self.entries[left].0 < self.entries[smallest].0 {
                smallest = left;
            }
            if right < len && self.entries[right].0 < self.entries[smallest].0 {
                smallest = right;
            }
            if smallest == index {
                break;
            }
            self.entries.swap(index, smallest);
            index = smallest;
        }
    }
}

impl<P, V> Default for MinHeap<P, V>
where
    P: PartialOrd,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<P, V> Extend<(P, V)> for MinHeap<P, V>
where
    P: PartialOrd,
{
    fn extend<I: IntoIterator<Item = (P, V)>>(&mut self, iter: I) {
        for (priority, value) in iter {
            self.push(priority, value);
        }
    }
}

impl<P, V> FromIterator<(P, V)> for MinHeap<P, V>
where
    P: PartialOrd,
{
    fn from_iter<I: IntoIterator<Item = (P, V)>>(iter: I) -> Self {
        let mut heap = MinHeap::new();
        heap.extend(iter);
        heap
    }
}
