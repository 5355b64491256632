//! Per-face probe poses for the six cube passes.
//!
//! The probe's frame is snapshotted once per frame into a [`ProbeFrame`];
//! every face pose is then a pure function of that snapshot, so no state
//! leaks from one face (or one frame) into the next.

use glam::Vec3;

use crate::camera::Camera;

/// Number of cube faces.
pub const FACE_COUNT: usize = 6;

/// One face of the cube map, in render order. Face `i` is drawn into cube
/// layer `i`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CubeFace {
    /// Offset against the probe's right axis.
    NegX,
    /// Offset along the probe's right axis.
    PosX,
    /// Offset along the probe's up axis.
    PosY,
    /// Offset against the probe's up axis.
    NegY,
    /// Eye at the probe origin.
    PosZ,
    /// Eye past the center, opposite the origin.
    NegZ,
}

impl CubeFace {
    /// All faces in layer order.
    pub const ALL: [Self; FACE_COUNT] = [
        Self::NegX,
        Self::PosX,
        Self::PosY,
        Self::NegY,
        Self::PosZ,
        Self::NegZ,
    ];

    /// Face for a layer index; out-of-range indices clamp to the last face.
    #[must_use]
    pub fn from_index(index: usize) -> Self {
        Self::ALL[index.min(FACE_COUNT - 1)]
    }

    /// Cube layer this face renders into.
    #[must_use]
    pub fn index(self) -> usize {
        self as usize
    }

    /// Short label used for GPU object names.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::NegX => "-X",
            Self::PosX => "+X",
            Self::PosY => "+Y",
            Self::NegY => "-Y",
            Self::PosZ => "+Z",
            Self::NegZ => "-Z",
        }
    }

    /// Eye, target and up for this face.
    ///
    /// Every face looks at the frame's center; the eye sits `extent` away
    /// from it along one of the frame's axes. The two faces whose view axis
    /// is parallel to `up` use `±direction` as their up vector instead.
    #[must_use]
    pub fn pose(self, frame: &ProbeFrame) -> FacePose {
        let center = frame.center();
        let s = frame.extent;
        let (eye, up) = match self {
            Self::NegX => (center - frame.right * s, frame.up),
            Self::PosX => (center + frame.right * s, frame.up),
            Self::PosY => (center + frame.up * s, frame.direction),
            Self::NegY => (center - frame.up * s, -frame.direction),
            Self::PosZ => (frame.origin, frame.up),
            Self::NegZ => (center + frame.direction * s, frame.up),
        };
        FacePose {
            eye,
            target: center,
            up,
        }
    }
}

/// Orthonormal snapshot of the probe camera taken before the face passes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProbeFrame {
    /// Probe eye position.
    pub origin: Vec3,
    /// Unit view direction.
    pub direction: Vec3,
    /// Unit up, orthogonal to `direction`.
    pub up: Vec3,
    /// Unit right, `direction × up`.
    pub right: Vec3,
    /// Distance from the origin to the center (the probe's scale).
    pub extent: f32,
}

impl ProbeFrame {
    /// Build a frame from raw vectors. `up` is re-orthogonalized against
    /// `direction`; if the two are parallel a perpendicular axis is picked.
    #[must_use]
    pub fn new(origin: Vec3, direction: Vec3, up: Vec3, extent: f32) -> Self {
        let direction = direction.normalize_or(Vec3::NEG_Z);
        let right = direction
            .cross(up)
            .try_normalize()
            .unwrap_or_else(|| direction.any_orthonormal_vector());
        let up = right.cross(direction);
        Self {
            origin,
            direction,
            up,
            right,
            extent,
        }
    }

    /// Snapshot a camera's current pose.
    #[must_use]
    pub fn from_camera(camera: &Camera) -> Self {
        Self::new(
            camera.position(),
            camera.direction(),
            camera.up(),
            camera.scale(),
        )
    }

    /// `origin + direction * extent`.
    #[must_use]
    pub fn center(&self) -> Vec3 {
        self.origin + self.direction * self.extent
    }
}

/// Camera placement for one face pass.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FacePose {
    /// Eye position.
    pub eye: Vec3,
    /// Look-at point.
    pub target: Vec3,
    /// Unit up vector.
    pub up: Vec3,
}

impl FacePose {
    /// Move `camera` into this pose.
    pub fn apply(&self, camera: &mut Camera) {
        camera.look_from(self.eye, self.target, self.up);
    }
}
