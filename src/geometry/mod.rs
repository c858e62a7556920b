//! Value-typed 2D primitives used by the pathfinder

pub mod point;
pub mod rectangle;
pub mod segment;

pub use point::*;
pub use rectangle::*;
pub use segment::*;
