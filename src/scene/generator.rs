//! Seeded random scene generation for demos and stress runs

use super::SceneDefinition;
use crate::errors::{GeopathError, GeopathResult};
use crate::geometry::{Point, Rectangle};
use bevy::log::debug;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg64;

/// Parameters for a random scene
#[derive(Debug, Clone)]
pub struct SceneGenerationConfig {
    pub name: String,
    pub seed: u64,
    pub obstacle_count: usize,
    /// Obstacles, agent and target all fall inside a square of this side, centered on the origin
    pub world_size: f64,
    pub obstacle_size_range: (f64, f64),
    pub agent_size: (f64, f64),
    /// Gap kept free around the agent and the target
    pub clearance: f64,
}

impl Default for SceneGenerationConfig {
    fn default() -> Self {
        Self {
            name: "random_scene".to_string(),
            seed: 0,
            obstacle_count: 20,
            world_size: 200.0,
            obstacle_size_range: (5.0, 30.0),
            agent_size: (10.0, 10.0),
            clearance: 1.0,
        }
    }
}

pub struct SceneGenerator;

impl SceneGenerator {
    const ATTEMPTS_PER_OBSTACLE: usize = 20;

    pub fn generate(config: &SceneGenerationConfig) -> GeopathResult<SceneDefinition> {
        let (min_size, max_size) = config.obstacle_size_range;
        if !(min_size > 0.0 && min_size <= max_size && max_size < config.world_size) {
            return Err(GeopathError::InvalidArgument {
                reason: format!(
                    "Obstacle size range {min_size}..{max_size} does not fit a world of size {}",
                    config.world_size
                ),
            });
        }

        let mut rng = Pcg64::seed_from_u64(config.seed);
        let half = config.world_size / 2.0;

        let (agent_width, agent_height) = config.agent_size;
        let agent_center = Point::new(
            rng.gen_range(-half..-half / 2.0),
            rng.gen_range(-half / 2.0..half / 2.0),
        );
        let agent = Rectangle::from_center(agent_center, agent_width, agent_height);
        let target = Point::new(
            rng.gen_range(half / 2.0..half),
            rng.gen_range(-half / 2.0..half / 2.0),
        );

        let keep_out = [
            agent.expand(config.clearance, config.clearance),
            Rectangle::from_center(target, agent_width, agent_height)
                .expand(config.clearance, config.clearance),
        ];

        let mut obstacles = Vec::with_capacity(config.obstacle_count);
        let mut attempts = 0;
        while obstacles.len() < config.obstacle_count
            && attempts < config.obstacle_count * Self::ATTEMPTS_PER_OBSTACLE
        {
            attempts += 1;
            let width = rng.gen_range(min_size..=max_size);
            let height = rng.gen_range(min_size..=max_size);
            let candidate = Rectangle::new(
                rng.gen_range(-half..half - width),
                rng.gen_range(-half..half - height),
                width,
                height,
            );

            if keep_out.iter().any(|zone| zone.intersects(&candidate)) {
                continue;
            }
            obstacles.push(candidate);
        }

        debug!(
            "Generated {} of {} obstacles in {} attempts (seed {})",
            obstacles.len(),
            config.obstacle_count,
            attempts,
            config.seed
        );

        SceneDefinition::new(config.name.clone(), agent, target, obstacles)
    }
}
