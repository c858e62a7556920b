use derive_more::{Add, AddAssign, Display, Mul, Sub};
use serde::{Deserialize, Serialize};

/// An immutable 2D coordinate in world units
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Add, Sub, Mul, AddAssign, Display, Serialize, Deserialize,
)]
#[display("({x:.2}, {y:.2})")]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const ORIGIN: Point = Point { x: 0.0, y: 0.0 };

    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn distance(self, other: Point) -> f64 {
        self.distance_squared(other).sqrt()
    }

    /// Squared Euclidean distance, cheaper when only ordering matters
    pub fn distance_squared(self, other: Point) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        dx * dx + dy * dy
    }

    pub fn length(self) -> f64 {
        self.distance(Point::ORIGIN)
    }

    /// Unit vector in the same direction, or zero for a zero vector
    pub fn normalize_or_zero(self) -> Point {
        let length = self.length();
        if length > 0.0 && length.is_finite() {
            Point::new(self.x / length, self.y / length)
        } else {
            Point::ORIGIN
        }
    }

    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}
