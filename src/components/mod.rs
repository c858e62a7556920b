use crate::geometry::{Point, Rectangle};
use crate::pathfinding::{CollisionEntity, Path};
use bevy::prelude::*;

/// Axis-aligned collision bounds of an entity in world units
#[derive(Component, Debug, Clone, Copy, PartialEq)]
pub struct CollisionBox(pub Rectangle);

impl CollisionBox {
    pub fn from_center(center: Point, width: f64, height: f64) -> Self {
        Self(Rectangle::from_center(center, width, height))
    }

    /// Shift the box without changing its extents
    pub fn translate(&mut self, offset: Point) {
        self.0.x += offset.x;
        self.0.y += offset.y;
    }
}

impl CollisionEntity for CollisionBox {
    fn collision_footprint(&self) -> Rectangle {
        self.0
    }
}

/// Cursor over a computed path, consumed one waypoint at a time
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NavigationPath {
    waypoints: Vec<Point>,
    current_index: usize,
}

impl NavigationPath {
    /// The start point is where the mover already is, so following begins at the
    /// second waypoint.
    pub fn from_path(path: &Path) -> Self {
        Self {
            waypoints: path.points().to_vec(),
            current_index: 1.min(path.len().saturating_sub(1)),
        }
    }

    pub fn current_waypoint(&self) -> Option<Point> {
        self.waypoints.get(self.current_index).copied()
    }

    pub fn advance(&mut self) {
        if self.current_index < self.waypoints.len() {
            self.current_index += 1;
        }
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    pub fn len(&self) -> usize {
        self.waypoints.len()
    }

    pub fn is_empty(&self) -> bool {
        self.waypoints.is_empty()
    }

    pub fn is_complete(&self) -> bool {
        self.current_index >= self.waypoints.len()
    }

    pub fn clear(&mut self) {
        self.waypoints.clear();
        self.current_index = 0;
    }
}

/// Marks an entity that moves along pathfinder routes
#[derive(Component, Debug, Clone)]
pub struct PathfindingAgent {
    pub destination: Option<Point>,
    pub nav_path: NavigationPath,
    /// Distance at which a waypoint counts as reached
    pub waypoint_reach_distance: f64,
    /// Set when the current destination has been planned for
    pub planned: bool,
}

impl Default for PathfindingAgent {
    fn default() -> Self {
        Self {
            destination: None,
            nav_path: NavigationPath::default(),
            waypoint_reach_distance: 0.5,
            planned: false,
        }
    }
}

impl PathfindingAgent {
    pub fn new(waypoint_reach_distance: f64) -> Self {
        Self {
            waypoint_reach_distance,
            ..Default::default()
        }
    }

    /// Request a route to `destination`; planning happens on the next update
    pub fn set_destination(&mut self, destination: Point) {
        self.destination = Some(destination);
        self.nav_path.clear();
        self.planned = false;
    }

    pub fn set_path(&mut self, path: &Path) {
        self.nav_path = NavigationPath::from_path(path);
        self.planned = true;
    }

    pub fn current_waypoint(&self) -> Option<Point> {
        self.nav_path.current_waypoint()
    }

    pub fn advance_waypoint(&mut self) {
        self.nav_path.advance();
    }

    pub fn needs_path(&self) -> bool {
        self.destination.is_some() && !self.planned
    }
}
