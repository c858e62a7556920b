pub mod components;
pub mod config;
pub mod errors;
pub mod geometry;
pub mod movement;
pub mod pathfinding;
pub mod plugins;
pub mod scene;

// Selective re-exports for external consumers

pub use plugins::{PathPlanner, PathfindingPlugin};

pub use errors::{GeopathError, GeopathResult};

pub use geometry::{Point, Rectangle, Segment};

pub use pathfinding::{
    CollisionEntity, GeometricPathFinder, ObstacleSource, Path, PathFinder, PathOutcome,
    PathfindingConfig,
};
