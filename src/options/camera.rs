use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
/// Projection parameters of the viewer-facing camera.
pub struct CameraOptions {
    /// Vertical field of view in radians.
    pub fov: f32,
    /// Near clipping plane distance.
    pub near: f32,
    /// Far clipping plane distance.
    pub far: f32,
    /// Orthographic half-height.
    pub scale: f32,
    /// Translation applied to the camera right after construction.
    pub start_offset: [f32; 3],
}

impl Default for CameraOptions {
    fn default() -> Self {
        Self {
            fov: std::f32::consts::FRAC_PI_4,
            near: 0.1,
            far: 10000.0,
            scale: 1.0,
            start_offset: [2.5, 3.0, 0.0],
        }
    }
}
