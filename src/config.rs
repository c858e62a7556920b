use crate::errors::{GeopathError, GeopathResult};
use crate::movement::MovementConfig;
use crate::pathfinding::PathfindingConfig;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

pub mod range_types;

pub use range_types::*;

/// User-tunable pathfinding and movement parameters, persisted as TOML
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
#[serde(default)]
pub struct PathfinderSettings {
    pub clearance_margin: ClearanceMargin,
    pub max_iterations: Option<usize>,
    pub waypoint_reach_distance: ReachDistance,
    pub movement_speed: MovementSpeed,
    pub stopping_distance: StoppingDistance,
    pub slowdown_distance: SlowdownDistance,
}

impl PathfinderSettings {
    pub fn pathfinding_config(&self) -> PathfindingConfig {
        PathfindingConfig {
            clearance_margin: self.clearance_margin.get(),
            max_iterations: self.max_iterations,
        }
    }

    pub fn movement_config(&self) -> MovementConfig {
        MovementConfig {
            speed: self.movement_speed.get(),
            stopping_distance: self.stopping_distance.get(),
            slowdown_distance: self.slowdown_distance.get(),
            ..Default::default()
        }
    }
}

pub fn get_config_path() -> Option<PathBuf> {
    let mut path = dirs::config_dir()?;
    path.push("geopath");
    fs::create_dir_all(&path).ok()?;
    path.push("config.toml");
    Some(path)
}

/// Load settings from the user config dir, falling back to defaults
pub fn load_settings() -> PathfinderSettings {
    get_config_path()
        .and_then(|path| load_settings_from(path).ok())
        .unwrap_or_default()
}

pub fn load_settings_from<P: AsRef<Path>>(path: P) -> GeopathResult<PathfinderSettings> {
    let contents = fs::read_to_string(path)?;
    Ok(toml::from_str(&contents)?)
}

pub fn save_settings(settings: &PathfinderSettings) -> GeopathResult<()> {
    let path = get_config_path().ok_or(GeopathError::ConfigDirNotFound)?;
    save_settings_to(settings, path)
}

pub fn save_settings_to<P: AsRef<Path>>(settings: &PathfinderSettings, path: P) -> GeopathResult<()> {
    let contents = toml::to_string_pretty(settings)?;
    fs::write(path, contents)?;
    Ok(())
}
