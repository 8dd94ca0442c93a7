pub mod counter;
pub mod direction;
pub mod grid2d;
pub mod point;

pub use counter::Counter;
pub use direction::{Direction, ALL_8, CARDINAL};
pub use grid2d::Grid;
pub use point::Point;
