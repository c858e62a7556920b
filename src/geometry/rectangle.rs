use super::Point;
use derive_more::Display;
use serde::{Deserialize, Serialize};

/// Axis-aligned box given by its minimum corner and its extents.
///
/// Two rectangles with identical bounds compare equal and are treated as the
/// same obstacle.
#[derive(Debug, Clone, Copy, Default, PartialEq, Display, Serialize, Deserialize)]
#[display("[{x:.2}, {y:.2}, {width:.2}x{height:.2}]")]
pub struct Rectangle {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rectangle {
    pub const fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Build a rectangle of the given extents centered on `center`
    pub fn from_center(center: Point, width: f64, height: f64) -> Self {
        Self::new(
            center.x - width / 2.0,
            center.y - height / 2.0,
            width,
            height,
        )
    }

    pub fn min_x(&self) -> f64 {
        self.x
    }

    pub fn max_x(&self) -> f64 {
        self.x + self.width
    }

    pub fn min_y(&self) -> f64 {
        self.y
    }

    pub fn max_y(&self) -> f64 {
        self.y + self.height
    }

    pub fn center(&self) -> Point {
        Point::new(self.x + self.width / 2.0, self.y + self.height / 2.0)
    }

    /// Corners in enumeration order: (min, min), (max, min), (max, max), (min, max)
    pub fn corners(&self) -> [Point; 4] {
        [
            Point::new(self.min_x(), self.min_y()),
            Point::new(self.max_x(), self.min_y()),
            Point::new(self.max_x(), self.max_y()),
            Point::new(self.min_x(), self.max_y()),
        ]
    }

    /// Closed containment, boundary included
    pub fn contains_point(&self, point: Point) -> bool {
        point.x >= self.min_x()
            && point.x <= self.max_x()
            && point.y >= self.min_y()
            && point.y <= self.max_y()
    }

    /// Interior containment, boundary excluded
    pub fn contains_point_strict(&self, point: Point) -> bool {
        point.x > self.min_x()
            && point.x < self.max_x()
            && point.y > self.min_y()
            && point.y < self.max_y()
    }

    /// Grow the rectangle by `dx` on the left and right and by `dy` on the top and bottom
    pub fn expand(&self, dx: f64, dy: f64) -> Rectangle {
        Rectangle::new(
            self.x - dx,
            self.y - dy,
            self.width + dx * 2.0,
            self.height + dy * 2.0,
        )
    }

    /// True when the interiors of the two rectangles overlap
    pub fn intersects(&self, other: &Rectangle) -> bool {
        self.min_x() < other.max_x()
            && other.min_x() < self.max_x()
            && self.min_y() < other.max_y()
            && other.min_y() < self.max_y()
    }

    /// A usable collision footprint has a finite origin and positive, finite extents
    pub fn is_valid_footprint(&self) -> bool {
        self.x.is_finite()
            && self.y.is_finite()
            && self.width.is_finite()
            && self.height.is_finite()
            && self.width > 0.0
            && self.height > 0.0
    }

    /// Corner closest to `point`; ties go to the earlier corner in enumeration order
    pub fn nearest_corner(&self, point: Point) -> Point {
        let corners = self.corners();
        let mut nearest = corners[0];
        let mut nearest_distance = point.distance_squared(nearest);
        for corner in &corners[1..] {
            let distance = point.distance_squared(*corner);
            if distance < nearest_distance {
                nearest = *corner;
                nearest_distance = distance;
            }
        }
        nearest
    }

    /// Corners not occluded by this rectangle itself when seen from `origin`.
    ///
    /// A corner is visible when `origin` lies in the closed outer half-plane of
    /// at least one of the two edges meeting at that corner. An origin strictly
    /// inside the rectangle sees no corner.
    pub fn visible_corners(&self, origin: Point) -> Vec<Point> {
        let facing_min_x = origin.x <= self.min_x();
        let facing_max_x = origin.x >= self.max_x();
        let facing_min_y = origin.y <= self.min_y();
        let facing_max_y = origin.y >= self.max_y();

        let visibility = [
            facing_min_x || facing_min_y,
            facing_max_x || facing_min_y,
            facing_max_x || facing_max_y,
            facing_min_x || facing_max_y,
        ];

        self.corners()
            .into_iter()
            .zip(visibility)
            .filter_map(|(corner, visible)| visible.then_some(corner))
            .collect()
    }
}
