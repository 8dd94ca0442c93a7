use std::collections::HashMap;
use std::fmt;

use crate::grid::point::Point;

/// Sparse 2D grid keyed by [`Point`].
///
/// Cells missing from the map are outside the grid, so ragged input and holes
/// are fine. `width` and `height` span from the origin to the largest
/// coordinate present.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid<T> {
    cells: HashMap<Point, T>,
    width: i64,
    height: i64,
}

impl<T> Grid<T> {
    /// Creates an empty grid
    pub fn new() -> Self {
        Grid {
            cells: HashMap::new(),
            width: 0,
            height: 0,
        }
    }

    /// One past the largest `x` present
    pub fn width(&self) -> i64 {
        self.width
    }

    /// One past the largest `y` present
    pub fn height(&self) -> i64 {
        self.height
    }

    /// Number of cells present
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Returns true if no cell is present
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Returns the cell at `p`, if present
    pub fn get(&self, p: Point) -> Option<&T> {
        self.cells.get(&p)
    }

    /// Returns a mutable reference to the cell at `p`, if present
    pub fn get_mut(&mut self, p: Point) -> Option<&mut T> {
        self.cells.get_mut(&p)
    }

    /// Stores `value` at `p`, returning what was there before
    pub fn set(&mut self, p: Point, value: T) -> Option<T> {
        self.width = self.width.max(p.x + 1);
        self.height = self.height.max(p.y + 1);
        self.cells.insert(p, value)
    }

    /// Returns true if a cell is present at `p`
    pub fn contains(&self, p: Point) -> bool {
        self.cells.contains_key(&p)
    }

    /// Removes the cell at `p`, shrinking the bounds when it was on an edge
    pub fn remove(&mut self, p: Point) -> Option<T> {
        let removed = self.cells.remove(&p);
        if removed.is_some() && (p.x + 1 == self.width || p.y + 1 == self.height) {
            self.recompute_bounds();
        }
        removed
    }

    /// Whether `p` lies inside the `width` x `height` rectangle
    pub fn in_bounds(&self, p: Point) -> bool {
        (0..self.width).contains(&p.x) && (0..self.height).contains(&p.y)
    }

    /// Neighbors of `p` that are present in the grid
    pub fn adjacent(&self, p: Point, include_diagonals: bool) -> Vec<Point> {
        p.adjacent(include_diagonals)
            .into_iter()
            .filter(|q| self.cells.contains_key(q))
            .collect()
    }

    /// Orthogonal neighbors of `p` whose cell satisfies `passable`.
    ///
    /// Plugs straight into the breadth-first search functions:
    /// `bfs_distance(&start, &goal, |p| grid.passable_neighbors(*p, |c| *c != '#'))`.
    pub fn passable_neighbors<F>(&self, p: Point, passable: F) -> Vec<Point>
    where
        F: Fn(&T) -> bool,
    {
        p.adjacent(false)
            .into_iter()
            .filter(|q| self.cells.get(q).is_some_and(&passable))
            .collect()
    }

    /// Iterates over every present cell in arbitrary order
    pub fn iter(&self) -> impl Iterator<Item = (Point, &T)> + '_ {
        self.cells.iter().map(|(p, v)| (*p, v))
    }

    /// Positions whose cell satisfies `pred`, sorted row by row
    pub fn positions<F>(&self, pred: F) -> Vec<Point>
    where
        F: Fn(&T) -> bool,
    {
        let mut found: Vec<Point> = self
            .cells
            .iter()
            .filter(|&(_, v)| pred(v))
            .map(|(p, _)| *p)
            .collect();
        found.sort_by_key(|p| (p.y, p.x));
        found
    }

    fn recompute_bounds(&mut self) {
        self.width = self.cells.keys().map(|p| p.x + 1).max().unwrap_or(0);
        self.height = self.cells.keys().map(|p| p.y + 1).max().unwrap_or(0);
    }
}

impl<T: PartialEq> Grid<T> {
    /// First position (row by row) holding `value`
    pub fn find(&self, value: &T) -> Option<Point> {
        self.positions(|v| v == value).into_iter().next()
    }
}

impl Grid<char> {
    /// One cell per character, `x` by column and `y` by line.
    /// Trailing whitespace on each line is dropped.
    pub fn parse<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut grid = Grid::new();
        for (y, line) in lines.into_iter().enumerate() {
            for (x, c) in line.as_ref().trim_end().chars().enumerate() {
                grid.set(Point::new(x as i64, y as i64), c);
            }
        }
        grid
    }
}

impl<T> Default for Grid<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> FromIterator<(Point, T)> for Grid<T> {
    fn from_iter<I: IntoIterator<Item = (Point, T)>>(iter: I) -> Self {
        let mut grid = Grid::new();
        for (p, value) in iter {
            grid.set(p, value);
        }
        grid
    }
}

/// Renders rows top to bottom, with a space for missing cells
impl<T: fmt::Display> fmt::Display for Grid<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for y in 0..self.height {
            for x in 0..self.width {
                match self.cells.get(&Point::new(x, y)) {
                    Some(v) => write!(f, "{}", v)?,
                    None => write!(f, " ")?,
                }
            }
            if y + 1 < self.height {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}
