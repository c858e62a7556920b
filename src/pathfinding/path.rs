use super::obstacles::ObstacleSnapshot;
use crate::geometry::{Point, Segment};
use derive_more::Display;
use serde::{Deserialize, Serialize};

/// Why the waypoint search stopped
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Serialize, Deserialize)]
pub enum PathOutcome {
    /// Nothing blocked the final approach to the target
    #[display("direct")]
    Direct,
    /// Every visible corner of the blocking obstacle was obstructed
    #[display("stuck")]
    Stuck,
    /// The search came back to a waypoint it had already visited
    #[display("cycle")]
    Cycle,
    /// The loop hit its iteration cap
    #[display("iteration cap")]
    IterationCap,
}

/// Polyline from an entity's center to a target.
///
/// The first point is always the start and the last is always the target;
/// consecutive points never repeat. Only `Direct` outcomes guarantee the last
/// leg is clear of obstacles.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Path {
    start: Point,
    target: Point,
    points: Vec<Point>,
    outcome: PathOutcome,
}

impl Path {
    pub(crate) fn new(start: Point, target: Point, points: Vec<Point>, outcome: PathOutcome) -> Self {
        Self {
            start,
            target,
            points,
            outcome,
        }
    }

    /// Straight line from start to target
    pub fn direct(start: Point, target: Point) -> Self {
        let points = if start == target {
            vec![start]
        } else {
            vec![start, target]
        };
        Self::new(start, target, points, PathOutcome::Direct)
    }

    pub fn start(&self) -> Point {
        self.start
    }

    pub fn target(&self) -> Point {
        self.target
    }

    pub fn points(&self) -> &[Point] {
        &self.points
    }

    pub fn outcome(&self) -> PathOutcome {
        self.outcome
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Waypoints strictly between start and target
    pub fn interior_points(&self) -> &[Point] {
        match self.points.len() {
            0..=2 => &[],
            n => &self.points[1..n - 1],
        }
    }

    pub fn is_direct(&self) -> bool {
        self.points.len() <= 2
    }

    pub fn segments(&self) -> impl Iterator<Item = Segment> + '_ {
        self.points
            .windows(2)
            .map(|pair| Segment::new(pair[0], pair[1]))
    }

    /// Total polyline length
    pub fn length(&self) -> f64 {
        self.segments().map(|segment| segment.length()).sum()
    }

    /// Re-validate every leg against a snapshot, for callers needing strict safety
    pub fn is_unobstructed(&self, obstacles: &ObstacleSnapshot) -> bool {
        self.segments().all(|segment| obstacles.is_clear(segment))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::Rectangle;

    #[test]
    fn test_direct_path() {
        let path = Path::direct(Point::new(0.0, 0.0), Point::new(3.0, 4.0));
        assert_eq!(path.points(), &[Point::new(0.0, 0.0), Point::new(3.0, 4.0)]);
        assert_eq!(path.length(), 5.0);
        assert!(path.is_direct());
        assert!(path.interior_points().is_empty());
        assert_eq!(path.outcome(), PathOutcome::Direct);
    }

    #[test]
    fn test_direct_path_to_start_is_single_point() {
        let start = Point::new(2.0, 2.0);
        let path = Path::direct(start, start);
        assert_eq!(path.points(), &[start]);
        assert_eq!(path.length(), 0.0);
        assert_eq!(path.segments().count(), 0);
    }

    #[test]
    fn test_interior_points_and_segments() {
        let points = vec![
            Point::new(0.0, 0.0),
            Point::new(0.0, 3.0),
            Point::new(4.0, 3.0),
            Point::new(4.0, 0.0),
        ];
        let path = Path::new(points[0], points[3], points.clone(), PathOutcome::Direct);

        assert_eq!(path.interior_points(), &points[1..3]);
        assert_eq!(path.segments().count(), 3);
        assert_eq!(path.length(), 10.0);
        assert!(!path.is_direct());
    }

    #[test]
    fn test_unobstructed_check() {
        let own = Rectangle::new(-1.0, -1.0, 2.0, 2.0);
        let obstacles = vec![Rectangle::new(4.0, -2.0, 2.0, 4.0)];
        let snapshot = ObstacleSnapshot::capture(&obstacles, &own, |rect| *rect);

        let blocked = Path::direct(Point::new(0.0, 0.0), Point::new(10.0, 0.0));
        assert!(!blocked.is_unobstructed(&snapshot));

        let detour = Path::new(
            Point::new(0.0, 0.0),
            Point::new(10.0, 0.0),
            vec![
                Point::new(0.0, 0.0),
                Point::new(4.0, 2.0),
                Point::new(6.0, 2.0),
                Point::new(10.0, 0.0),
            ],
            PathOutcome::Direct,
        );
        assert!(detour.is_unobstructed(&snapshot));
    }

    #[test]
    fn test_outcome_display() {
        assert_eq!(PathOutcome::IterationCap.to_string(), "iteration cap");
        assert_eq!(PathOutcome::Cycle.to_string(), "cycle");
    }
}
