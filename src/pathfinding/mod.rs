use crate::errors::{GeopathError, GeopathResult};
use crate::geometry::{Point, Rectangle, Segment};
use bevy::log::{debug, warn};

pub mod obstacles;
pub mod path;

pub use obstacles::*;
pub use path::*;

/// Clearance kept between a mover's body and any obstacle, in world units
pub const DEFAULT_CLEARANCE_MARGIN: f64 = 1.0;

/// Configuration for geometric path searches
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PathfindingConfig {
    /// Extra clearance added on top of the mover's half-footprint when inflating obstacles
    pub clearance_margin: f64,
    /// Hard cap on waypoint search iterations. `None` uses `4 * obstacle_count + 4`,
    /// one iteration per corner of every obstacle plus a small constant.
    pub max_iterations: Option<usize>,
}

impl Default for PathfindingConfig {
    fn default() -> Self {
        Self {
            clearance_margin: DEFAULT_CLEARANCE_MARGIN,
            max_iterations: None,
        }
    }
}

/// Expand `rect` by the mover's half-footprint plus `clearance` on every side.
///
/// Testing the mover's center point against the result is equivalent to
/// testing its whole body against `rect` with `clearance` to spare.
pub fn apply_path_margin(footprint: &Rectangle, rect: &Rectangle, clearance: f64) -> Rectangle {
    rect.expand(
        footprint.width / 2.0 + clearance,
        footprint.height / 2.0 + clearance,
    )
}

/// A strategy producing walkable routes for rectangular movers
pub trait PathFinder: Send + Sync {
    fn find_path(
        &self,
        entity: &dyn CollisionEntity,
        obstacles: &dyn ObstacleSource,
        target: Point,
    ) -> GeopathResult<Path>;

    fn apply_path_margin(&self, entity: &dyn CollisionEntity, rect: &Rectangle) -> Rectangle;
}

/// Greedy corner-hopping pathfinder working directly on obstacle rectangles.
///
/// Each step resolves only the nearest obstruction on the way to the target by
/// moving to one of its visible corners, so routes are local and not
/// guaranteed shortest.
#[derive(Debug, Clone, Default)]
pub struct GeometricPathFinder {
    config: PathfindingConfig,
}

impl GeometricPathFinder {
    pub fn new(config: PathfindingConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &PathfindingConfig {
        &self.config
    }

    /// Every waypoint other than the target is a corner of some expanded
    /// obstacle and none repeats, so this bound is never reached by a search the
    /// cycle check would have let through.
    fn iteration_cap(&self, obstacle_count: usize) -> usize {
        self.config
            .max_iterations
            .unwrap_or(obstacle_count * 4 + 4)
    }

    fn next_waypoint(
        snapshot: &ObstacleSnapshot,
        blocker: &Rectangle,
        current: Point,
        target: Point,
    ) -> Option<Point> {
        // Inside or on an inflated bound: move to the closest corner. A waypoint
        // already on a corner yields itself and ends the search as a cycle.
        if blocker.contains_point(current) {
            return Some(blocker.nearest_corner(current));
        }

        let mut candidates = blocker.visible_corners(current);
        if candidates.is_empty() {
            return Some(target);
        }

        candidates.sort_by(|a, b| {
            a.distance_squared(target)
                .total_cmp(&b.distance_squared(target))
        });

        candidates
            .into_iter()
            .find(|corner| snapshot.is_clear_except(Segment::new(current, *corner), blocker))
    }
}

impl PathFinder for GeometricPathFinder {
    fn find_path(
        &self,
        entity: &dyn CollisionEntity,
        obstacles: &dyn ObstacleSource,
        target: Point,
    ) -> GeopathResult<Path> {
        let footprint = entity.collision_footprint();
        if !footprint.is_valid_footprint() {
            return Err(GeopathError::InvalidFootprint {
                width: footprint.width,
                height: footprint.height,
            });
        }

        let start = entity.center();
        if !start.is_finite() {
            return Err(GeopathError::NonFiniteCoordinate {
                context: "entity center".to_string(),
            });
        }
        if !target.is_finite() {
            return Err(GeopathError::NonFiniteCoordinate {
                context: "path target".to_string(),
            });
        }

        let snapshot = ObstacleSnapshot::capture(obstacles, &footprint, |rect| {
            self.apply_path_margin(entity, rect)
        });

        if snapshot.is_empty() {
            debug!("No obstacles, direct path from {} to {}", start, target);
            return Ok(Path::direct(start, target));
        }

        let max_iterations = self.iteration_cap(snapshot.len());
        let mut current = start;
        let mut points = vec![start];
        let mut outcome = PathOutcome::IterationCap;

        for _ in 0..max_iterations {
            let Some((blocker, hit)) = snapshot.first_blocking(Segment::new(current, target)) else {
                outcome = PathOutcome::Direct;
                break;
            };

            let Some(next) = Self::next_waypoint(&snapshot, &blocker, current, target) else {
                outcome = PathOutcome::Stuck;
                break;
            };

            if points.contains(&next) {
                outcome = PathOutcome::Cycle;
                break;
            }

            debug!(
                "Blocked by {} at {}, next waypoint {}",
                blocker, hit, next
            );
            points.push(next);
            current = next;
        }

        if outcome == PathOutcome::IterationCap {
            warn!(
                "Path search from {} to {} hit the iteration cap ({})",
                start, target, max_iterations
            );
        }

        if points.last() != Some(&target) {
            points.push(target);
        }

        debug!(
            "Path from {} to {}: {} waypoints, outcome {}",
            start,
            target,
            points.len(),
            outcome
        );

        Ok(Path::new(start, target, points, outcome))
    }

    fn apply_path_margin(&self, entity: &dyn CollisionEntity, rect: &Rectangle) -> Rectangle {
        apply_path_margin(
            &entity.collision_footprint(),
            rect,
            self.config.clearance_margin,
        )
    }
}
