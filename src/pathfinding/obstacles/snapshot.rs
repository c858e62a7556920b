//! Per-query immutable view of the obstacle set

use super::ObstacleSource;
use crate::geometry::{Point, Rectangle, Segment};

/// Margin-expanded obstacles captured once at the start of a path query.
///
/// The requesting entity's own footprint is excluded and geometrically equal
/// rectangles collapse into one, keeping the order of first occurrence.
#[derive(Debug, Clone, Default)]
pub struct ObstacleSnapshot {
    expanded: Vec<Rectangle>,
}

impl ObstacleSnapshot {
    pub fn capture(
        source: &dyn ObstacleSource,
        own_footprint: &Rectangle,
        inflate: impl Fn(&Rectangle) -> Rectangle,
    ) -> Self {
        let mut raw: Vec<Rectangle> = Vec::new();
        for rect in source.all_collision_boxes() {
            if rect == *own_footprint || raw.contains(&rect) {
                continue;
            }
            raw.push(rect);
        }

        Self {
            expanded: raw.iter().map(inflate).collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.expanded.len()
    }

    pub fn is_empty(&self) -> bool {
        self.expanded.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Rectangle> {
        self.expanded.iter()
    }

    /// Obstacle whose interior the segment enters closest to its start, with the entry point.
    ///
    /// Equal distances keep the obstacle seen first.
    pub fn first_blocking(&self, segment: Segment) -> Option<(Rectangle, Point)> {
        let mut nearest: Option<(Rectangle, Point, f64)> = None;

        for rect in &self.expanded {
            let Some(hit) = segment.intersection_with_rectangle(rect) else {
                continue;
            };
            let distance = segment.start.distance_squared(hit);
            if nearest.is_none_or(|(_, _, best)| distance < best) {
                nearest = Some((*rect, hit, distance));
            }
        }

        nearest.map(|(rect, hit, _)| (rect, hit))
    }

    /// True when no obstacle other than `excluded` blocks the segment
    pub fn is_clear_except(&self, segment: Segment, excluded: &Rectangle) -> bool {
        self.expanded
            .iter()
            .filter(|rect| *rect != excluded)
            .all(|rect| !segment.intersects_rectangle(rect))
    }

    pub fn is_clear(&self, segment: Segment) -> bool {
        self.expanded
            .iter()
            .all(|rect| !segment.intersects_rectangle(rect))
    }
}
