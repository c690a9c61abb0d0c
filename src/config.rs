//! Server configuration.
//!
//! Carries the endpoint path, the agreed tensor shape, and the maximum
//! accepted frame size. Loadable from a JSON file; missing fields fall
//! back to defaults, and fluent setters allow overrides on top.
//!
//! # Example
//!
//! ```
//! use tensorwire::{ServerConfig, TensorShape};
//!
//! let config = ServerConfig::new("/tmp/tensorwire.sock")
//!     .shape(TensorShape::new(1, 3, 224, 224))
//!     .max_frame_size(1024 * 1024);
//!
//! assert_eq!(config.max_frame_size, 1024 * 1024);
//! ```

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::protocol::DEFAULT_MAX_FRAME_SIZE;
use crate::tensor::TensorShape;

/// Default endpoint path when none is configured.
pub const DEFAULT_SOCKET_PATH: &str = "/tmp/tensorwire.sock";

/// Configuration for a [`crate::FrameServer`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Filesystem path of the Unix socket endpoint.
    pub socket_path: PathBuf,
    /// Tensor shape every payload must match.
    pub shape: TensorShape,
    /// Maximum accepted frame payload size in bytes.
    pub max_frame_size: u32,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            socket_path: PathBuf::from(DEFAULT_SOCKET_PATH),
            shape: TensorShape::default(),
            max_frame_size: DEFAULT_MAX_FRAME_SIZE,
        }
    }
}

impl ServerConfig {
    /// Create a configuration for the given endpoint path, with default
    /// shape and frame size cap.
    pub fn new(socket_path: impl Into<PathBuf>) -> Self {
        Self {
            socket_path: socket_path.into(),
            ..Self::default()
        }
    }

    /// Set the tensor shape.
    pub fn shape(mut self, shape: TensorShape) -> Self {
        self.shape = shape;
        self
    }

    /// Set the maximum accepted frame payload size.
    pub fn max_frame_size(mut self, max_frame_size: u32) -> Self {
        self.max_frame_size = max_frame_size;
        self
    }

    /// Load configuration from a JSON file.
    ///
    /// Fields absent from the file take their default values.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&contents)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::WireError;

    #[test]
    fn test_defaults() {
        let config = ServerConfig::default();
        assert_eq!(config.socket_path, Path::new(DEFAULT_SOCKET_PATH));
        assert_eq!(config.shape, TensorShape::default());
        assert_eq!(config.max_frame_size, DEFAULT_MAX_FRAME_SIZE);
    }

    #[test]
    fn test_fluent_setters() {
        let config = ServerConfig::new("/run/worker.sock")
            .shape(TensorShape::new(1, 1, 2, 2))
            .max_frame_size(64);

        assert_eq!(config.socket_path, Path::new("/run/worker.sock"));
        assert_eq!(config.shape.byte_len(), 4);
        assert_eq!(config.max_frame_size, 64);
    }

    #[test]
    fn test_from_json_file_with_partial_fields() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(
            &path,
            r#"{"socket_path": "/tmp/custom.sock", "shape": {"batch": 1, "channels": 1, "height": 1, "width": 4}}"#,
        )
        .unwrap();

        let config = ServerConfig::from_json_file(&path).unwrap();
        assert_eq!(config.socket_path, Path::new("/tmp/custom.sock"));
        assert_eq!(config.shape.byte_len(), 4);
        // Absent field falls back to default.
        assert_eq!(config.max_frame_size, DEFAULT_MAX_FRAME_SIZE);
    }

    #[test]
    fn test_from_json_file_rejects_malformed_input() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(&path, "{not json").unwrap();

        let err = ServerConfig::from_json_file(&path).unwrap_err();
        assert!(matches!(err, WireError::Config(_)));
    }

    #[test]
    fn test_json_roundtrip() {
        let config = ServerConfig::new("/tmp/rt.sock").max_frame_size(128);
        let json = serde_json::to_string(&config).unwrap();
        let back: ServerConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(back, config);
    }
}
