use serde::{Deserialize, Serialize};

use crate::cube::CameraRole;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
/// Composite pass and render-mode settings.
pub struct CubeOptions {
    /// World translation of the environment cube drawn for the app camera.
    pub model_translation: [f32; 3],
    /// Clear color of the window while drawing the environment cube.
    pub clear_color: [f32; 4],
    /// Start in cube mode (`true`) or draw the scene directly.
    pub render_cube: bool,
    /// Camera used when drawing the scene directly.
    pub scene_camera: CameraRole,
}

impl Default for CubeOptions {
    fn default() -> Self {
        Self {
            model_translation: [0.0, 1.5, -5.0],
            clear_color: [0.2, 0.3, 0.2, 1.0],
            render_cube: true,
            scene_camera: CameraRole::Probe,
        }
    }
}
