use crate::components::{CollisionBox, PathfindingAgent};
use crate::config::PathfinderSettings;
use crate::movement::{MovementConfig, calculate_movement, validate_target};
use crate::pathfinding::{CollisionEntity, CollisionWorld, GeometricPathFinder, PathFinder, PathfindingConfig};
use bevy::prelude::*;

/// Pathfinder and movement parameters shared by all agents
#[derive(Resource, Debug, Clone, Default)]
pub struct PathPlanner {
    pub finder: GeometricPathFinder,
    pub movement: MovementConfig,
}

#[derive(Debug, Clone, Default)]
pub struct PathfindingPlugin {
    pub config: PathfindingConfig,
    pub movement: MovementConfig,
}

impl PathfindingPlugin {
    pub fn from_settings(settings: &PathfinderSettings) -> Self {
        Self {
            config: settings.pathfinding_config(),
            movement: settings.movement_config(),
        }
    }
}

impl Plugin for PathfindingPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<CollisionWorld>()
            .insert_resource(PathPlanner {
                finder: GeometricPathFinder::new(self.config),
                movement: self.movement,
            })
            .add_systems(
                Update,
                (
                    sync_collision_world,
                    plan_paths,
                    move_agents,
                    update_pathfinding_agents,
                )
                    .chain(),
            );
    }
}

/// Rebuild the dynamic part of the collision world from every collision box
pub fn sync_collision_world(mut world: ResMut<CollisionWorld>, boxes: Query<&CollisionBox>) {
    world.clear_dynamic();
    for collision_box in boxes.iter() {
        world.add_dynamic_box(collision_box.0);
    }
}

/// Plan paths for agents with an unplanned destination
pub fn plan_paths(
    mut agents_query: Query<(&mut PathfindingAgent, &CollisionBox)>,
    world: Res<CollisionWorld>,
    planner: Res<PathPlanner>,
) {
    for (mut agent, collision_box) in agents_query.iter_mut() {
        if !agent.needs_path() {
            continue;
        }
        let Some(destination) = agent.destination else {
            continue;
        };

        let start = collision_box.center();
        if !validate_target(start, destination) {
            debug!("Ignoring destination {} from {}", destination, start);
            agent.destination = None;
            continue;
        }

        match planner.finder.find_path(collision_box, &*world, destination) {
            Ok(path) => {
                info!(
                    "Planned path with {} waypoints from {} to {} ({})",
                    path.len(),
                    start,
                    destination,
                    path.outcome()
                );
                agent.set_path(&path);
            }
            Err(err) => {
                warn!("Failed to plan path from {} to {}: {}", start, destination, err);
                agent.destination = None;
                agent.nav_path.clear();
            }
        }
    }
}

/// Step each agent toward its current waypoint
pub fn move_agents(
    mut agents_query: Query<(&PathfindingAgent, &mut CollisionBox)>,
    planner: Res<PathPlanner>,
) {
    for (agent, mut collision_box) in agents_query.iter_mut() {
        let movement = calculate_movement(
            collision_box.center(),
            agent.current_waypoint(),
            planner.movement,
        );
        if movement.should_move {
            collision_box.translate(movement.movement_vector);
        }
    }
}

/// Advance waypoints when reached and clear finished destinations
pub fn update_pathfinding_agents(mut agents_query: Query<(&mut PathfindingAgent, &CollisionBox)>) {
    for (mut agent, collision_box) in agents_query.iter_mut() {
        let Some(waypoint) = agent.current_waypoint() else {
            continue;
        };

        if collision_box.center().distance(waypoint) > agent.waypoint_reach_distance {
            continue;
        }

        agent.advance_waypoint();
        debug!(
            "Waypoint {} reached, index {} of {}",
            waypoint,
            agent.nav_path.current_index(),
            agent.nav_path.len()
        );

        if agent.nav_path.is_complete() {
            info!("Path completed - clearing destination");
            agent.destination = None;
        }
    }
}
