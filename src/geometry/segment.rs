use super::{Point, Rectangle};
use serde::{Deserialize, Serialize};

/// Directed line segment used for line-of-sight and intersection queries
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Segment {
    pub start: Point,
    pub end: Point,
}

impl Segment {
    pub const fn new(start: Point, end: Point) -> Self {
        Self { start, end }
    }

    pub fn direction(&self) -> Point {
        self.end - self.start
    }

    pub fn length(&self) -> f64 {
        self.start.distance(self.end)
    }

    /// Zero-length segments never intersect anything
    pub fn is_degenerate(&self) -> bool {
        self.start == self.end
    }

    /// Point at parameter `t`, where 0 is the start and 1 the end
    pub fn point_at(&self, t: f64) -> Point {
        self.start + self.direction() * t
    }

    /// Nearest point along the segment where it enters the rectangle's interior.
    ///
    /// Returns the start itself when the start lies inside the interior. A
    /// segment that only runs along an edge or touches a corner does not
    /// intersect.
    pub fn intersection_with_rectangle(&self, rect: &Rectangle) -> Option<Point> {
        self.interior_entry(rect).map(|t| self.point_at(t))
    }

    pub fn intersects_rectangle(&self, rect: &Rectangle) -> bool {
        self.interior_entry(rect).is_some()
    }

    /// Liang-Barsky clipping against the open interior of `rect`
    fn interior_entry(&self, rect: &Rectangle) -> Option<f64> {
        if self.is_degenerate() {
            return None;
        }

        let direction = self.direction();
        let mut lower = f64::NEG_INFINITY;
        let mut upper = f64::INFINITY;

        for (origin, delta, min, max) in [
            (self.start.x, direction.x, rect.min_x(), rect.max_x()),
            (self.start.y, direction.y, rect.min_y(), rect.max_y()),
        ] {
            if delta == 0.0 {
                if origin <= min || origin >= max {
                    return None;
                }
                continue;
            }

            let t_min = (min - origin) / delta;
            let t_max = (max - origin) / delta;
            lower = lower.max(t_min.min(t_max));
            upper = upper.min(t_min.max(t_max));
        }

        if lower < upper && lower < 1.0 && upper > 0.0 {
            Some(lower.max(0.0))
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn obstacle() -> Rectangle {
        Rectangle::new(34.0, -11.0, 32.0, 32.0)
    }

    #[test]
    fn test_segment_through_rectangle_reports_entry_point() {
        let segment = Segment::new(Point::new(0.0, 0.0), Point::new(100.0, 0.0));
        assert_eq!(
            segment.intersection_with_rectangle(&obstacle()),
            Some(Point::new(34.0, 0.0))
        );
    }

    #[test]
    fn test_reversed_segment_enters_from_other_side() {
        let segment = Segment::new(Point::new(100.0, 0.0), Point::new(0.0, 0.0));
        assert_eq!(
            segment.intersection_with_rectangle(&obstacle()),
            Some(Point::new(66.0, 0.0))
        );
    }

    #[test]
    fn test_segment_starting_inside_reports_start() {
        let segment = Segment::new(Point::new(50.0, 5.0), Point::new(100.0, 0.0));
        assert_eq!(
            segment.intersection_with_rectangle(&obstacle()),
            Some(Point::new(50.0, 5.0))
        );
    }

    #[test]
    fn test_segment_ending_inside_intersects() {
        let segment = Segment::new(Point::new(0.0, 0.0), Point::new(40.0, 0.0));
        assert!(segment.intersects_rectangle(&obstacle()));
    }

    #[test]
    fn test_segment_stopping_short_misses() {
        let segment = Segment::new(Point::new(0.0, 0.0), Point::new(30.0, 0.0));
        assert!(!segment.intersects_rectangle(&obstacle()));
    }

    #[test]
    fn test_segment_along_edge_does_not_intersect() {
        let rect = Rectangle::new(0.0, 0.0, 10.0, 10.0);
        let segment = Segment::new(Point::new(-5.0, 0.0), Point::new(15.0, 0.0));
        assert!(!segment.intersects_rectangle(&rect));

        let vertical = Segment::new(Point::new(10.0, -5.0), Point::new(10.0, 15.0));
        assert!(!vertical.intersects_rectangle(&rect));
    }

    #[test]
    fn test_segment_touching_corner_does_not_intersect() {
        let rect = Rectangle::new(0.0, 0.0, 10.0, 10.0);
        let segment = Segment::new(Point::new(-5.0, 5.0), Point::new(5.0, -5.0));
        assert!(!segment.intersects_rectangle(&rect));
    }

    #[test]
    fn test_segment_from_corner_into_interior_intersects_at_corner() {
        let rect = Rectangle::new(0.0, 0.0, 10.0, 10.0);
        let segment = Segment::new(Point::new(0.0, 0.0), Point::new(20.0, 5.0));
        assert_eq!(
            segment.intersection_with_rectangle(&rect),
            Some(Point::new(0.0, 0.0))
        );
    }

    #[test]
    fn test_degenerate_segment_never_intersects() {
        let rect = Rectangle::new(0.0, 0.0, 10.0, 10.0);
        let inside = Segment::new(Point::new(5.0, 5.0), Point::new(5.0, 5.0));
        assert!(inside.is_degenerate());
        assert!(!inside.intersects_rectangle(&rect));
    }

    #[test]
    fn test_length_and_point_at() {
        let segment = Segment::new(Point::new(0.0, 0.0), Point::new(6.0, 8.0));
        assert_eq!(segment.length(), 10.0);
        assert_eq!(segment.point_at(0.5), Point::new(3.0, 4.0));
        assert_eq!(segment.direction(), Point::new(6.0, 8.0));
    }
}
