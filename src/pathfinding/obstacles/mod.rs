//! Capability traits connecting the pathfinder to the scene's collision data

use crate::geometry::{Point, Rectangle};

pub mod collision_world;
pub mod snapshot;

pub use collision_world::*;
pub use snapshot::*;

/// Anything that can report the collidable rectangles currently in the scene
pub trait ObstacleSource {
    /// Complete set of collision boxes at call time. Ordering carries no meaning
    /// but must be stable for the duration of one query.
    fn all_collision_boxes(&self) -> Vec<Rectangle>;
}

/// A mover with a rectangular collision footprint
pub trait CollisionEntity {
    fn collision_footprint(&self) -> Rectangle;

    /// Paths start here
    fn center(&self) -> Point {
        self.collision_footprint().center()
    }
}

impl ObstacleSource for Vec<Rectangle> {
    fn all_collision_boxes(&self) -> Vec<Rectangle> {
        self.clone()
    }
}

impl<const N: usize> ObstacleSource for [Rectangle; N] {
    fn all_collision_boxes(&self) -> Vec<Rectangle> {
        self.to_vec()
    }
}

impl CollisionEntity for Rectangle {
    fn collision_footprint(&self) -> Rectangle {
        *self
    }
}
