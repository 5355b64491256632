//! Runtime options with TOML file support.
//!
//! Every tweakable value of the viewer (camera projections, integrator
//! rates, cube pass, frame pacing, test scene) lives here. All sections use
//! `#[serde(default)]`, so a file only needs the keys it overrides.

mod camera;
mod cube;
mod motion;
mod probe;
mod scene;
mod timing;

use std::path::Path;

pub use camera::CameraOptions;
pub use cube::CubeOptions;
pub use motion::MotionOptions;
pub use probe::ProbeOptions;
pub use scene::SceneOptions;
use serde::{Deserialize, Serialize};
pub use timing::TimingOptions;

use crate::error::CubeviewError;

/// Top-level options container.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(default)]
pub struct Options {
    /// Viewer-facing camera.
    pub camera: CameraOptions,
    /// Cube-map probe camera.
    pub probe: ProbeOptions,
    /// Integrator rates.
    pub motion: MotionOptions,
    /// Composite pass and render mode.
    pub cube: CubeOptions,
    /// Fixed tick and frame limiter.
    pub timing: TimingOptions,
    /// Procedural test scene.
    pub scene: SceneOptions,
}

impl Options {
    /// Parse options from TOML text. Missing fields use defaults.
    pub fn from_toml_str(content: &str) -> Result<Self, CubeviewError> {
        toml::from_str(content)
            .map_err(|e| CubeviewError::OptionsParse(e.to_string()))
    }

    /// Load options from a TOML file. Missing fields use defaults.
    pub fn load(path: &Path) -> Result<Self, CubeviewError> {
        let content =
            std::fs::read_to_string(path).map_err(CubeviewError::Io)?;
        Self::from_toml_str(&content)
    }

    /// Save options to a TOML file (pretty-printed).
    pub fn save(&self, path: &Path) -> Result<(), CubeviewError> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| CubeviewError::OptionsParse(e.to_string()))?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(CubeviewError::Io)?;
        }
        std::fs::write(path, content).map_err(CubeviewError::Io)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cube::CameraRole;

    #[test]
    fn default_round_trips_through_toml() {
        let opts = Options::default();
        let toml_str = toml::to_string_pretty(&opts).unwrap();
        let parsed = Options::from_toml_str(&toml_str).unwrap();
        assert_eq!(opts, parsed);
    }

    #[test]
    fn partial_toml_fills_defaults() {
        let toml_str = r#"
[probe]
resolution = 256
perspective = true

[cube]
scene_camera = "app"
"#;
        let opts = Options::from_toml_str(toml_str).unwrap();
        assert_eq!(opts.probe.resolution, 256);
        assert!(opts.probe.perspective);
        assert_eq!(opts.cube.scene_camera, CameraRole::App);
        // Everything else should be default
        assert_eq!(opts.probe.scale, 10.0);
        assert_eq!(opts.timing.tick_ms, 16);
        assert_eq!(opts.camera.start_offset, [2.5, 3.0, 0.0]);
    }

    #[test]
    fn malformed_toml_is_an_options_error() {
        let err = Options::from_toml_str("[timing]\ntick_ms = \"fast\"")
            .unwrap_err();
        assert!(matches!(err, CubeviewError::OptionsParse(_)));
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let err =
            Options::load(Path::new("/nonexistent/cubeview.toml")).unwrap_err();
        assert!(matches!(err, CubeviewError::Io(_)));
    }
}
