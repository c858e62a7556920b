//! Centralized registry of the collision boxes present in a scene

use super::ObstacleSource;
use crate::geometry::{Point, Rectangle};
use bevy::prelude::Resource;

/// Static boxes (walls, props) persist; dynamic boxes (moving bodies) are
/// rebuilt every update.
#[derive(Debug, Clone, Default, Resource)]
pub struct CollisionWorld {
    static_boxes: Vec<Rectangle>,
    dynamic_boxes: Vec<Rectangle>,
}

impl CollisionWorld {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_static_box(&mut self, rect: Rectangle) {
        self.static_boxes.push(rect);
    }

    pub fn add_static_boxes(&mut self, rects: impl IntoIterator<Item = Rectangle>) {
        self.static_boxes.extend(rects);
    }

    pub fn add_dynamic_box(&mut self, rect: Rectangle) {
        self.dynamic_boxes.push(rect);
    }

    /// Clear all dynamic boxes (called each frame/update)
    pub fn clear_dynamic(&mut self) {
        self.dynamic_boxes.clear();
    }

    pub fn clear_static(&mut self) {
        self.static_boxes.clear();
    }

    pub fn clear_all(&mut self) {
        self.static_boxes.clear();
        self.dynamic_boxes.clear();
    }

    /// (static, dynamic)
    pub fn box_counts(&self) -> (usize, usize) {
        (self.static_boxes.len(), self.dynamic_boxes.len())
    }

    pub fn static_boxes(&self) -> &[Rectangle] {
        &self.static_boxes
    }

    pub fn dynamic_boxes(&self) -> &[Rectangle] {
        &self.dynamic_boxes
    }

    /// Check if any collision box covers the position, boundary included
    pub fn is_position_blocked(&self, position: Point) -> bool {
        self.static_boxes
            .iter()
            .chain(&self.dynamic_boxes)
            .any(|rect| rect.contains_point(position))
    }
}

impl ObstacleSource for CollisionWorld {
    fn all_collision_boxes(&self) -> Vec<Rectangle> {
        self.static_boxes
            .iter()
            .chain(&self.dynamic_boxes)
            .copied()
            .collect()
    }
}
