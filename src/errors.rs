use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum GeopathError {
    // Pathfinding preconditions
    #[error("Invalid collision footprint: {width}x{height}")]
    InvalidFootprint { width: f64, height: f64 },

    #[error("Non-finite coordinate in {context}")]
    NonFiniteCoordinate { context: String },

    // Config-related errors
    #[error("Failed to get config directory")]
    ConfigDirNotFound,

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to serialize config: {0}")]
    SerializationFailed(#[from] toml::ser::Error),

    #[error("Failed to deserialize config: {0}")]
    DeserializationFailed(#[from] toml::de::Error),

    // Scene-related errors
    #[error("Scene file not found at path: {path}")]
    SceneFileNotFound { path: PathBuf },

    #[error("Corrupted scene file: {reason}")]
    CorruptedSceneFile { reason: String },

    #[error("Scene validation failed: {reason}")]
    SceneValidationFailed { reason: String },

    #[error("Invalid argument: {reason}")]
    InvalidArgument { reason: String },
}

/// Result type alias for all operations
pub type GeopathResult<T> = Result<T, GeopathError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_geopath_error_display() {
        let err = GeopathError::InvalidFootprint {
            width: 0.0,
            height: 10.0,
        };
        assert!(err.to_string().contains("Invalid collision footprint"));

        let err = GeopathError::ConfigDirNotFound;
        assert_eq!(err.to_string(), "Failed to get config directory");
    }

    #[test]
    fn test_io_error_converts() {
        fn read_missing() -> GeopathResult<String> {
            Ok(std::fs::read_to_string("/definitely/not/a/real/geopath/file")?)
        }

        assert!(matches!(read_missing(), Err(GeopathError::Io(_))));
    }
}
