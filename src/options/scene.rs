use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
/// Procedural test scene.
pub struct SceneOptions {
    /// Clear color of each cube face and of the direct scene pass.
    pub clear_color: [f32; 4],
    /// Milliseconds per radian of animation phase.
    pub period_ms: f32,
    /// Rest position of the bobbing cube.
    pub anchor: [f32; 3],
}

impl Default for SceneOptions {
    fn default() -> Self {
        Self {
            clear_color: [0.2, 0.2, 0.2, 1.0],
            period_ms: 400.0,
            anchor: [0.0, 1.5, -5.0],
        }
    }
}
