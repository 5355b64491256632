use serde::{Deserialize, Serialize};

use crate::camera::MotionRates;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(default)]
/// Integrator rates shared by every camera.
pub struct MotionOptions {
    /// World units per millisecond of dolly or strafe.
    pub translate_per_ms: f32,
    /// Orthographic scale change per millisecond of zoom.
    pub zoom_per_ms: f32,
    /// Yaw input per millisecond, scaled by the field of view.
    pub yaw_per_ms: f32,
}

impl Default for MotionOptions {
    fn default() -> Self {
        let rates = MotionRates::default();
        Self {
            translate_per_ms: rates.translate_per_ms,
            zoom_per_ms: rates.zoom_per_ms,
            yaw_per_ms: rates.yaw_per_ms,
        }
    }
}

impl From<MotionOptions> for MotionRates {
    fn from(options: MotionOptions) -> Self {
        Self {
            translate_per_ms: options.translate_per_ms,
            zoom_per_ms: options.zoom_per_ms,
            yaw_per_ms: options.yaw_per_ms,
        }
    }
}
