//! Small utilities shared by the engine and viewer.

/// Fixed integration tick, frame limiting and FPS smoothing.
pub mod frame_clock;
