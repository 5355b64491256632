//! First-person camera with targeting and free-look modes.
//!
//! The camera is pure math state: it owns a pose, cached perspective and
//! orthographic projections, and latched key intents that a fixed-rate
//! integrator ([`Camera::step`]) turns into motion.

/// Camera state, projections and the per-tick integrator.
pub mod core;
/// Input event routing onto a camera.
mod input;
/// Latched key intents and integrator rates.
pub mod intent;

pub use self::core::{Camera, CameraPose, CameraView, Orientation, MIN_SCALE};
pub use intent::{
    HorizontalIntent, MotionIntents, MotionRates, RotateIntent,
    VerticalIntent, ZoomIntent,
};
