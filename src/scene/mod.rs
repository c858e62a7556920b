use crate::errors::{GeopathError, GeopathResult};
use crate::geometry::{Point, Rectangle};
use crate::pathfinding::{Path, PathFinder};
use serde::{Deserialize, Serialize};
use std::path::Path as FilePath;
use validator::{Validate, ValidationError, ValidationErrors};

pub mod generator;

pub use generator::*;

/// A self-contained path query: a mover, where it wants to go, and what is in the way
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct SceneDefinition {
    #[validate(length(min = 1, max = 128))]
    pub name: String,
    #[validate(custom(function = "validate_footprint"))]
    pub agent: Rectangle,
    #[validate(custom(function = "validate_point"))]
    pub target: Point,
    #[validate(length(max = 10000), custom(function = "validate_obstacles"))]
    pub obstacles: Vec<Rectangle>,
}

fn validate_footprint(rect: &Rectangle) -> Result<(), ValidationError> {
    if rect.is_valid_footprint() {
        Ok(())
    } else {
        Err(ValidationError::new("invalid_footprint"))
    }
}

fn validate_point(point: &Point) -> Result<(), ValidationError> {
    if point.is_finite() {
        Ok(())
    } else {
        Err(ValidationError::new("non_finite_point"))
    }
}

fn validate_obstacles(obstacles: &Vec<Rectangle>) -> Result<(), ValidationError> {
    let valid = obstacles.iter().all(|rect| {
        rect.x.is_finite()
            && rect.y.is_finite()
            && rect.width.is_finite()
            && rect.height.is_finite()
            && rect.width >= 0.0
            && rect.height >= 0.0
    });
    if valid {
        Ok(())
    } else {
        Err(ValidationError::new("invalid_obstacle"))
    }
}

fn describe_validation_errors(errors: &ValidationErrors) -> String {
    errors
        .field_errors()
        .iter()
        .map(|(field, errors)| {
            let error_msgs: Vec<String> = errors.iter().map(|e| e.code.to_string()).collect();
            format!("{field}: {}", error_msgs.join(", "))
        })
        .collect::<Vec<String>>()
        .join("; ")
}

enum SceneFormat {
    Toml,
    Binary,
}

impl SceneFormat {
    fn from_path(path: &FilePath) -> Self {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("toml") => SceneFormat::Toml,
            _ => SceneFormat::Binary,
        }
    }
}

impl SceneDefinition {
    /// Create a new scene definition with validation
    pub fn new(
        name: String,
        agent: Rectangle,
        target: Point,
        obstacles: Vec<Rectangle>,
    ) -> GeopathResult<Self> {
        let scene = Self {
            name,
            agent,
            target,
            obstacles,
        };
        scene.check()?;
        Ok(scene)
    }

    fn check(&self) -> GeopathResult<()> {
        self.validate()
            .map_err(|errors| GeopathError::SceneValidationFailed {
                reason: describe_validation_errors(&errors),
            })
    }

    /// Load a scene; `.toml` files are read as TOML, anything else as bincode
    pub fn load_from_file<P: AsRef<FilePath>>(path: P) -> GeopathResult<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(GeopathError::SceneFileNotFound {
                path: path.to_path_buf(),
            });
        }

        let scene: SceneDefinition = match SceneFormat::from_path(path) {
            SceneFormat::Toml => {
                let contents = std::fs::read_to_string(path)?;
                toml::from_str(&contents).map_err(|e| GeopathError::CorruptedSceneFile {
                    reason: format!("Failed to parse scene TOML: {e}"),
                })?
            }
            SceneFormat::Binary => {
                let data = std::fs::read(path)?;
                let (scene, _): (SceneDefinition, usize) =
                    bincode::serde::decode_from_slice(&data, bincode::config::standard()).map_err(
                        |e| GeopathError::CorruptedSceneFile {
                            reason: format!("Failed to deserialize scene data: {e}"),
                        },
                    )?;
                scene
            }
        };

        scene.check()?;
        Ok(scene)
    }

    pub fn save_to_file<P: AsRef<FilePath>>(&self, path: P) -> GeopathResult<()> {
        self.check()?;

        let path = path.as_ref();
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }

        let data = match SceneFormat::from_path(path) {
            SceneFormat::Toml => toml::to_string_pretty(self)?.into_bytes(),
            SceneFormat::Binary => bincode::serde::encode_to_vec(self, bincode::config::standard())
                .map_err(|e| GeopathError::InvalidArgument {
                    reason: format!("Failed to serialize scene: {e}"),
                })?,
        };

        std::fs::write(path, data)?;
        Ok(())
    }

    /// Run `finder` from the agent's center to the scene target
    pub fn find_path(&self, finder: &dyn PathFinder) -> GeopathResult<Path> {
        finder.find_path(&self.agent, &self.obstacles, self.target)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pathfinding::GeometricPathFinder;
    use std::path::PathBuf;

    fn temp_path(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join("geopath-scene-tests");
        std::fs::create_dir_all(&dir).unwrap();
        dir.join(name)
    }

    fn sample_scene() -> SceneDefinition {
        SceneDefinition::new(
            "single_wall".to_string(),
            Rectangle::from_center(Point::new(0.0, 0.0), 10.0, 10.0),
            Point::new(100.0, 0.0),
            vec![Rectangle::new(40.0, -5.0, 20.0, 20.0)],
        )
        .unwrap()
    }

    #[test]
    fn test_scene_validation_rejects_bad_footprint() {
        let result = SceneDefinition::new(
            "flat".to_string(),
            Rectangle::new(0.0, 0.0, 0.0, 5.0),
            Point::new(1.0, 1.0),
            Vec::new(),
        );

        let Err(GeopathError::SceneValidationFailed { reason }) = result else {
            panic!("expected validation failure");
        };
        assert!(reason.contains("agent"));
    }

    #[test]
    fn test_scene_validation_rejects_bad_obstacles_and_target() {
        let agent = Rectangle::new(0.0, 0.0, 1.0, 1.0);
        assert!(
            SceneDefinition::new(
                "neg".to_string(),
                agent,
                Point::new(1.0, 1.0),
                vec![Rectangle::new(0.0, 0.0, -1.0, 1.0)],
            )
            .is_err()
        );
        assert!(
            SceneDefinition::new("nan".to_string(), agent, Point::new(f64::NAN, 1.0), Vec::new())
                .is_err()
        );
        assert!(
            SceneDefinition::new(String::new(), agent, Point::new(1.0, 1.0), Vec::new()).is_err()
        );
    }

    #[test]
    fn test_toml_scene_round_trip() {
        let path = temp_path("single_wall.toml");
        let scene = sample_scene();

        scene.save_to_file(&path).unwrap();
        let loaded = SceneDefinition::load_from_file(&path).unwrap();

        assert_eq!(loaded, scene);
    }

    #[test]
    fn test_binary_scene_round_trip() {
        let path = temp_path("single_wall.bin");
        let scene = sample_scene();

        scene.save_to_file(&path).unwrap();
        let loaded = SceneDefinition::load_from_file(&path).unwrap();

        assert_eq!(loaded, scene);
    }

    #[test]
    fn test_missing_scene_file() {
        let result = SceneDefinition::load_from_file(temp_path("does_not_exist.bin"));
        assert!(matches!(result, Err(GeopathError::SceneFileNotFound { .. })));
    }

    #[test]
    fn test_corrupted_scene_file() {
        let path = temp_path("corrupted.bin");
        std::fs::write(&path, [0xffu8, 0x00, 0x13]).unwrap();

        let result = SceneDefinition::load_from_file(&path);
        assert!(matches!(result, Err(GeopathError::CorruptedSceneFile { .. })));
    }

    #[test]
    fn test_scene_find_path() {
        let path = sample_scene()
            .find_path(&GeometricPathFinder::default())
            .unwrap();

        assert_eq!(path.start(), Point::new(0.0, 0.0));
        assert_eq!(path.target(), Point::new(100.0, 0.0));
        assert_eq!(path.len(), 3);
    }
}
