use std::fmt;
use std::ops::{Add, AddAssign, Mul, Neg, Sub};
use std::str::FromStr;

use crate::grid::direction::{ALL_8, CARDINAL};
use crate::{Error, Result};

/// A 2D integer coordinate. `y` grows downward, matching puzzle input layout.
///
/// The canonical string form is `"x,y"`, produced by `Display` and read back
/// by `FromStr`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point {
    pub x: i64,
    pub y: i64,
}

impl Point {
    pub const ORIGIN: Point = Point { x: 0, y: 0 };

    /// Creates a point at `(x, y)`
    pub const fn new(x: i64, y: i64) -> Self {
        Point { x, y }
    }

    /// Sum of the absolute coordinate differences
    pub fn manhattan_distance(&self, other: &Point) -> u64 {
        self.x.abs_diff(other.x) + self.y.abs_diff(other.y)
    }

    /// The 4 orthogonal neighbors (N, E, S, W), plus the diagonals
    /// (NE, SE, SW, NW) when `include_diagonals` is set.
    pub fn adjacent(&self, include_diagonals: bool) -> Vec<Point> {
        if include_diagonals {
            // Keep the orthogonal neighbors first
            CARDINAL
                .iter()
                .chain(ALL_8.iter().filter(|d| d.x != 0 && d.y != 0))
                .map(|d| *self + *d)
                .collect()
        } else {
            CARDINAL.iter().map(|d| *self + *d).collect()
        }
    }

    /// Returns the coordinates as an `(x, y)` pair
    pub fn to_tuple(self) -> (i64, i64) {
        (self.x, self.y)
    }
}

impl From<(i64, i64)> for Point {
    fn from((x, y): (i64, i64)) -> Self {
        Point { x, y }
    }
}

impl Add for Point {
    type Output = Point;

    fn add(self, other: Point) -> Point {
        Point::new(self.x + other.x, self.y + other.y)
    }
}

impl AddAssign for Point {
    fn add_assign(&mut self, other: Point) {
        self.x += other.x;
        self.y += other.y;
    }
}

impl Sub for Point {
    type Output = Point;

    fn sub(self, other: Point) -> Point {
        Point::new(self.x - other.x, self.y - other.y)
    }
}

impl Neg for Point {
    type Output = Point;

    fn neg(self) -> Point {
        Point::new(-self.x, -self.y)
    }
}

impl Mul<i64> for Point {
    type Output = Point;

    fn mul(self, factor: i64) -> Point {
        Point::new(self.x * factor, self.y * factor)
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.x, self.y)
    }
}

impl FromStr for Point {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let invalid = || Error::InvalidPoint(s.to_string());
        let (x, y) = s.split_once(',').ok_or_else(invalid)?;
        let x = x.trim().parse().map_err(|_| invalid())?;
        let y = y.trim().parse().map_err(|_| invalid())?;
        Ok(Point { x, y })
    }
}
