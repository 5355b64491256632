//! Cube-map orchestration: camera registry, per-face probe poses and the
//! renderer that sequences the face and composite passes.

/// Per-face probe pose derivation.
pub mod face;
/// Indexed camera ownership with a focused slot.
pub mod registry;
/// Face and composite pass sequencing.
pub mod renderer;

pub use face::{CubeFace, FacePose, ProbeFrame, FACE_COUNT};
pub use registry::{CameraId, CameraRegistry, CameraRole};
pub use renderer::{CubeRenderer, FrameTargets};
