use std::collections::HashMap;

use crate::grid::point::Point;

/// Tally of signed counts per [`Point`].
///
/// Positions never added read as zero. Queries returning several positions
/// sort them row by row so results are stable.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Counter {
    counts: HashMap<Point, i64>,
}

impl Counter {
    /// Creates an empty counter
    pub fn new() -> Self {
        Counter::default()
    }

    /// Adds `count` to the tally at `p`
    pub fn add(&mut self, p: Point, count: i64) {
        *self.counts.entry(p).or_insert(0) += count;
    }

    /// Adds one to the tally at `p`
    pub fn increment(&mut self, p: Point) {
        self.add(p, 1);
    }

    /// Count at `p`, zero when it was never added
    pub fn get(&self, p: Point) -> i64 {
        self.counts.get(&p).copied().unwrap_or(0)
    }

    /// Number of distinct positions tracked
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Positions whose count is at least `threshold`
    pub fn positions_above_threshold(&self, threshold: i64) -> Vec<Point> {
        self.sorted_positions(|count| count >= threshold)
    }

    /// Largest count, or zero for an empty counter
    pub fn max_count(&self) -> i64 {
        self.counts.values().copied().max().unwrap_or(0)
    }

    /// Positions holding the largest count.
    ///
    /// Empty when the counter is empty or the largest count is zero.
    pub fn max_positions(&self) -> Vec<Point> {
        let max = self.max_count();
        if max == 0 {
            return Vec::new();
        }
        self.sorted_positions(|count| count == max)
    }

    /// Iterates over every tracked position and its count in arbitrary order
    pub fn iter(&self) -> impl Iterator<Item = (Point, i64)> + '_ {
        self.counts.iter().map(|(p, count)| (*p, *count))
    }

    fn sorted_positions<F>(&self, pred: F) -> Vec<Point>
    where
        F: Fn(i64) -> bool,
    {
        let mut found: Vec<Point> = self
            .counts
            .iter()
            .filter(|&(_, count)| pred(*count))
            .map(|(p, _)| *p)
            .collect();
        found.sort_by_key(|p| (p.y, p.x));
        found
    }
}

impl Extend<Point> for Counter {
    fn extend<I: IntoIterator<Item = Point>>(&mut self, iter: I) {
        for p in iter {
            self.increment(p);
        }
    }
}

impl FromIterator<Point> for Counter {
    fn from_iter<I: IntoIterator<Item = Point>>(iter: I) -> Self {
        let mut counter = Counter::new();
        counter.extend(iter);
        counter
    }
}
