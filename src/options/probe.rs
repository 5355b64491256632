use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
/// Probe camera that fills the cube map.
pub struct ProbeOptions {
    /// Side length in pixels of each square cube face.
    pub resolution: u32,
    /// Vertical field of view in radians.
    pub fov: f32,
    /// Near clipping plane distance.
    pub near: f32,
    /// Far clipping plane distance.
    pub far: f32,
    /// Orthographic half-height, also the eye offset of each face.
    pub scale: f32,
    /// Start with the perspective projection instead of orthographic.
    pub perspective: bool,
    /// Canonical eye position.
    pub position: [f32; 3],
    /// Canonical look-at point.
    pub target: [f32; 3],
}

impl Default for ProbeOptions {
    fn default() -> Self {
        Self {
            resolution: 512,
            fov: std::f32::consts::FRAC_PI_4,
            near: 0.01,
            far: 10000.0,
            scale: 10.0,
            perspective: false,
            position: [0.0, 1.5, -1.0],
            target: [0.0, 1.5, 1.0],
        }
    }
}
