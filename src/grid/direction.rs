use std::fmt;
use std::str::FromStr;

use crate::grid::point::Point;
use crate::{Error, Result};

/// Unit steps N, E, S, W
pub const CARDINAL: [Point; 4] = [
    Point::new(0, -1),
    Point::new(1, 0),
    Point::new(0, 1),
    Point::new(-1, 0),
];

/// Unit steps clockwise from N, diagonals included
pub const ALL_8: [Point; 8] = [
    Point::new(0, -1),
    Point::new(1, -1),
    Point::new(1, 0),
    Point::new(1, 1),
    Point::new(0, 1),
    Point::new(-1, 1),
    Point::new(-1, 0),
    Point::new(-1, -1),
];

/// One of the four compass directions on a grid whose `y` axis points down
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Direction {
    North,
    East,
    South,
    West,
}

impl Direction {
    /// All directions, clockwise from North
    pub const ALL: [Direction; 4] = [
        Direction::North,
        Direction::East,
        Direction::South,
        Direction::West,
    ];

    pub fn delta(self) -> Point {
        CARDINAL[self as usize]
    }

    /// Turn 90 degrees clockwise
    pub fn turn_right(self) -> Self {
        Self::ALL[(self as usize + 1) % 4]
    }

    /// Turn 90 degrees counter-clockwise
    pub fn turn_left(self) -> Self {
        Self::ALL[(self as usize + 3) % 4]
    }

    pub fn opposite(self) -> Self {
        Self::ALL[(self as usize + 2) % 4]
    }

    /// Parses an arrow (`^>v<`), compass letter (`NESW`) or `UDLR` letter
    pub fn from_char(c: char) -> Result<Self> {
        use Direction::*;
        match c.to_ascii_uppercase() {
            '^' | 'N' | 'U' => Ok(North),
            '>' | 'E' | 'R' => Ok(East),
            'V' | 'S' | 'D' => Ok(South),
            '<' | 'W' | 'L' => Ok(West),
            _ => Err(Error::InvalidDirection(c.to_string())),
        }
    }
}

impl FromStr for Direction {
    type Err = Error;

    /// Accepts everything `from_char` does plus full names like `north`, `up`
    fn from_str(s: &str) -> Result<Self> {
        use Direction::*;
        match s.trim().to_ascii_uppercase().as_str() {
            "NORTH" | "UP" => Ok(North),
            "EAST" | "RIGHT" => Ok(East),
            "SOUTH" | "DOWN" => Ok(South),
            "WEST" | "LEFT" => Ok(West),
            other => {
                let mut chars = other.chars();
                match (chars.next(), chars.next()) {
                    (Some(c), None) => Direction::from_char(c),
                    _ => Err(Error::InvalidDirection(s.to_string())),
                }
            }
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let arrow = match self {
            Direction::North => '^',
            Direction::East => '>',
            Direction::South => 'v',
            Direction::West => '<',
        };
        write!(f, "{}", arrow)
    }
}
