use glam::{Mat4, Quat, Vec3};

use super::intent::{
    HorizontalIntent, MotionIntents, MotionRates, RotateIntent,
    VerticalIntent, ZoomIntent,
};

/// Look-at point of a freshly constructed camera.
const DEFAULT_TARGET: Vec3 = Vec3::new(0.0, 1.5, -5.0);

/// Used when the eye sits exactly on its target.
const FALLBACK_DIRECTION: Vec3 = Vec3::NEG_Z;

/// Smallest orthographic half-height the camera accepts.
pub const MIN_SCALE: f32 = 0.01;

/// Read-only view of a camera, as consumed by scenes.
pub trait CameraView {
    /// World-to-view transform.
    fn view(&self) -> Mat4;

    /// Currently selected projection matrix.
    fn projection(&self) -> Mat4;

    /// `projection * view`.
    fn view_projection(&self) -> Mat4 {
        self.projection() * self.view()
    }
}

/// How the camera's view direction is defined.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Orientation {
    /// Always looking at `target`; the direction is derived from the eye.
    Targeting {
        /// World-space look-at point.
        target: Vec3,
        /// Unit up vector.
        up: Vec3,
    },
    /// Free-look with an explicit unit direction.
    FreeLook {
        /// Unit view direction.
        direction: Vec3,
        /// Unit up vector.
        up: Vec3,
        /// Look-at point restored when targeting resumes.
        target: Vec3,
    },
}

impl Orientation {
    /// Unit up vector.
    #[must_use]
    pub fn up(&self) -> Vec3 {
        match *self {
            Self::Targeting { up, .. } | Self::FreeLook { up, .. } => up,
        }
    }

    /// Look-at point (remembered while in free-look).
    #[must_use]
    pub fn target(&self) -> Vec3 {
        match *self {
            Self::Targeting { target, .. } | Self::FreeLook { target, .. } => {
                target
            }
        }
    }

    /// Whether the direction tracks the target.
    #[must_use]
    pub fn is_targeting(&self) -> bool {
        matches!(self, Self::Targeting { .. })
    }

    /// Effective unit view direction for an eye at `position`.
    #[must_use]
    pub fn direction_from(&self, position: Vec3) -> Vec3 {
        match *self {
            Self::Targeting { target, .. } => {
                (target - position).normalize_or(FALLBACK_DIRECTION)
            }
            Self::FreeLook { direction, .. } => direction,
        }
    }
}

/// Snapshot of the parts of a camera the cube pass moves around.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraPose {
    /// Eye position.
    pub position: Vec3,
    /// Orientation, including the remembered target.
    pub orientation: Orientation,
    /// Orthographic half-height.
    pub scale: f32,
}

/// First-person camera with cached perspective and orthographic projections
/// and a fixed-rate integrator for latched key intents.
#[derive(Debug, Clone, PartialEq)]
pub struct Camera {
    position: Vec3,
    orientation: Orientation,
    /// Vertical field of view in radians.
    fov: f32,
    near: f32,
    far: f32,
    /// Half-height of the orthographic frustum.
    scale: f32,
    width: f32,
    height: f32,
    perspective: Mat4,
    orthographic: Mat4,
    use_perspective: bool,
    pub(crate) intents: MotionIntents,
    rates: MotionRates,
}

impl Camera {
    /// Create a targeting camera at the origin looking at `(0, 1.5, -5)`.
    ///
    /// `fov` is in radians. Non-positive viewport dimensions are clamped to
    /// one pixel.
    #[must_use]
    pub fn new(
        width: f32,
        height: f32,
        fov: f32,
        near: f32,
        far: f32,
        scale: f32,
    ) -> Self {
        let mut camera = Self {
            position: Vec3::ZERO,
            orientation: Orientation::Targeting {
                target: DEFAULT_TARGET,
                up: Vec3::Y,
            },
            fov,
            near,
            far,
            scale: scale.max(MIN_SCALE),
            width: width.max(1.0),
            height: height.max(1.0),
            perspective: Mat4::IDENTITY,
            orthographic: Mat4::IDENTITY,
            use_perspective: true,
            intents: MotionIntents::default(),
            rates: MotionRates::default(),
        };
        camera.reproject();
        camera
    }

    /// Replace the integrator rates.
    #[must_use]
    pub fn with_rates(mut self, rates: MotionRates) -> Self {
        self.rates = rates;
        self
    }

    // ── Accessors ───────────────────────────────────────────────────────

    /// Eye position in world space.
    #[must_use]
    pub fn position(&self) -> Vec3 {
        self.position
    }

    /// Unit view direction, consistent with the active orientation mode.
    #[must_use]
    pub fn direction(&self) -> Vec3 {
        self.orientation.direction_from(self.position)
    }

    /// Unit up vector.
    #[must_use]
    pub fn up(&self) -> Vec3 {
        self.orientation.up()
    }

    /// Look-at point (remembered while in free-look).
    #[must_use]
    pub fn target(&self) -> Vec3 {
        self.orientation.target()
    }

    /// Current orientation representation.
    #[must_use]
    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    /// Whether the camera is in targeting mode.
    #[must_use]
    pub fn is_targeting(&self) -> bool {
        self.orientation.is_targeting()
    }

    /// Whether [`CameraView::projection`] returns the perspective matrix.
    #[must_use]
    pub fn is_perspective(&self) -> bool {
        self.use_perspective
    }

    /// Orthographic half-height.
    #[must_use]
    pub fn scale(&self) -> f32 {
        self.scale
    }

    /// Vertical field of view in radians.
    #[must_use]
    pub fn fov(&self) -> f32 {
        self.fov
    }

    /// Viewport size used for the aspect ratio.
    #[must_use]
    pub fn size(&self) -> (f32, f32) {
        (self.width, self.height)
    }

    /// Currently latched motion intents.
    #[must_use]
    pub fn intents(&self) -> MotionIntents {
        self.intents
    }

    /// Cached perspective matrix.
    #[must_use]
    pub fn perspective(&self) -> Mat4 {
        self.perspective
    }

    /// Cached orthographic matrix.
    #[must_use]
    pub fn orthographic(&self) -> Mat4 {
        self.orthographic
    }

    // ── Projection ──────────────────────────────────────────────────────

    /// Select the perspective (`true`) or orthographic matrix. Both are
    /// already cached, so nothing is recomputed.
    pub fn set_perspective(&mut self, enabled: bool) {
        self.use_perspective = enabled;
    }

    /// Update the viewport size and reproject.
    ///
    /// Returns `false` and leaves the camera untouched when either dimension
    /// is not strictly positive.
    pub fn resize(&mut self, width: f32, height: f32) -> bool {
        if !(width > 0.0 && height > 0.0) {
            log::warn!("ignoring camera resize to {width}x{height}");
            return false;
        }
        self.width = width;
        self.height = height;
        self.reproject();
        true
    }

    /// Set the orthographic half-height (clamped to [`MIN_SCALE`]) and
    /// reproject.
    pub fn set_scale(&mut self, scale: f32) {
        self.scale = scale.max(MIN_SCALE);
        self.reproject();
    }

    /// Recompute both cached projection matrices.
    pub fn reproject(&mut self) {
        let aspect = self.width / self.height;
        self.perspective =
            Mat4::perspective_rh(self.fov, aspect, self.near, self.far);
        let half_width = self.scale * aspect;
        self.orthographic = Mat4::orthographic_rh(
            -half_width,
            half_width,
            -self.scale,
            self.scale,
            self.near,
            self.far,
        );
    }

    // ── Pose ────────────────────────────────────────────────────────────

    /// Move the eye. In targeting mode the direction follows automatically;
    /// in free-look the direction is left as it was.
    pub fn set_position(&mut self, position: Vec3) {
        self.position = position;
    }

    /// Translate the eye by `delta` and return the new position.
    pub fn move_by(&mut self, delta: Vec3) -> Vec3 {
        self.set_position(self.position + delta);
        self.position
    }

    /// Retarget, keeping the current up vector.
    pub fn set_target(&mut self, target: Vec3) {
        self.set_target_with_up(target, self.up());
    }

    /// Retarget with a new up vector. Does not change the targeting mode;
    /// in free-look the direction is re-aimed at `target`.
    pub fn set_target_with_up(&mut self, target: Vec3, up: Vec3) {
        let up = up.normalize_or(self.up());
        self.orientation = match self.orientation {
            Orientation::Targeting { .. } => {
                Orientation::Targeting { target, up }
            }
            Orientation::FreeLook { direction, .. } => Orientation::FreeLook {
                direction: (target - self.position).normalize_or(direction),
                up,
                target,
            },
        };
    }

    /// Place the eye and aim it in one go, whatever the mode.
    pub fn look_from(&mut self, eye: Vec3, target: Vec3, up: Vec3) {
        self.set_position(eye);
        self.set_target_with_up(target, up);
    }

    /// Switch between targeting and free-look. The view direction is
    /// continuous across the switch into free-look; switching back resumes
    /// looking at the remembered target.
    pub fn set_targeting(&mut self, enabled: bool) {
        self.orientation = match (self.orientation, enabled) {
            (Orientation::Targeting { target, up }, false) => {
                Orientation::FreeLook {
                    direction: self.direction(),
                    up,
                    target,
                }
            }
            (Orientation::FreeLook { up, target, .. }, true) => {
                Orientation::Targeting { target, up }
            }
            (unchanged, _) => unchanged,
        };
    }

    /// Flip between targeting and free-look.
    pub fn toggle_targeting(&mut self) {
        self.set_targeting(!self.is_targeting());
    }

    /// Turn the view direction. Only has an effect in free-look.
    ///
    /// Yaws around `up` by `delta_x * fov`, then pitches around
    /// `direction × up` by `delta_y * fov`.
    pub fn rotate(&mut self, delta_x: f32, delta_y: f32) {
        let Orientation::FreeLook {
            direction,
            up,
            target,
        } = self.orientation
        else {
            return;
        };
        let yawed = rotate_about(direction, up, delta_x * self.fov);
        let pitched = rotate_about(yawed, yawed.cross(up), delta_y * self.fov);
        self.orientation = Orientation::FreeLook {
            direction: pitched.normalize_or(direction),
            up,
            target,
        };
    }

    /// Capture position, orientation and scale.
    #[must_use]
    pub fn pose(&self) -> CameraPose {
        CameraPose {
            position: self.position,
            orientation: self.orientation,
            scale: self.scale,
        }
    }

    /// Restore a pose captured with [`pose`](Self::pose).
    pub fn restore(&mut self, pose: &CameraPose) {
        self.position = pose.position;
        self.orientation = pose.orientation;
        if self.scale != pose.scale {
            self.scale = pose.scale;
            self.reproject();
        }
    }

    // ── Integrator ──────────────────────────────────────────────────────

    /// Advance the latched intents by `delta_ms` milliseconds.
    ///
    /// Order: direction refresh, zoom, dolly, strafe, yaw. All deltas are
    /// linear in `delta_ms`.
    ///
    /// Strafing moves along the unit `direction × up`, so left and right
    /// cover the same distance as forward and back even when the camera
    /// pitches toward `up`. An unnormalized cross product would slow it by
    /// the sine of that angle.
    pub fn step(&mut self, delta_ms: u32) {
        let dt = delta_ms as f32;
        let direction = self.direction();

        let zoom = dt * self.rates.zoom_per_ms;
        match self.intents.zoom {
            ZoomIntent::Increase => self.set_scale(self.scale + zoom),
            ZoomIntent::Decrease => self.set_scale(self.scale - zoom),
            ZoomIntent::Idle => {}
        }

        let distance = dt * self.rates.translate_per_ms;
        match self.intents.vertical {
            VerticalIntent::Forward => self.position += direction * distance,
            VerticalIntent::Backward => self.position -= direction * distance,
            VerticalIntent::Idle => {}
        }

        let right = direction.cross(self.up()).normalize_or_zero();
        match self.intents.horizontal {
            HorizontalIntent::Left => self.position -= right * distance,
            HorizontalIntent::Right => self.position += right * distance,
            HorizontalIntent::Idle => {}
        }

        let yaw = dt * self.rates.yaw_per_ms;
        match self.intents.rotate {
            RotateIntent::Left => self.rotate(yaw, 0.0),
            RotateIntent::Right => self.rotate(-yaw, 0.0),
            RotateIntent::Idle => {}
        }
    }
}

impl CameraView for Camera {
    /// Looks along [`Camera::direction`], so an eye sitting on its target
    /// falls back to `-Z`. An up parallel to the direction is swapped for
    /// an arbitrary perpendicular one.
    fn view(&self) -> Mat4 {
        let direction = self.direction();
        let up = self.up();
        let up = if direction.cross(up).length_squared() > f32::EPSILON {
            up
        } else {
            direction.any_orthonormal_vector()
        };
        Mat4::look_to_rh(self.position, direction, up)
    }

    fn projection(&self) -> Mat4 {
        if self.use_perspective {
            self.perspective
        } else {
            self.orthographic
        }
    }
}

/// Rotate `v` by `angle` radians around `axis`; a degenerate axis leaves
/// `v` as is.
fn rotate_about(v: Vec3, axis: Vec3, angle: f32) -> Vec3 {
    axis.try_normalize()
        .map_or(v, |axis| Quat::from_axis_angle(axis, angle) * v)
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f32 = 1e-5;

    fn camera() -> Camera {
        Camera::new(1024.0, 768.0, 0.785, 0.1, 10000.0, 1.0)
    }

    fn free_look_camera() -> Camera {
        let mut cam = camera();
        cam.set_targeting(false);
        cam
    }

    #[test]
    fn construction_defaults() {
        let cam = camera();
        assert_eq!(cam.position(), Vec3::ZERO);
        assert!(cam.is_targeting());
        assert!(cam.is_perspective());
        assert_eq!(cam.target(), DEFAULT_TARGET);
        assert_eq!(cam.up(), Vec3::Y);
        assert!(cam.intents().is_idle());
        assert_eq!(cam.projection(), cam.perspective());
    }

    #[test]
    fn view_at_origin_looking_down_negative_z_is_identity() {
        let mut cam = camera();
        cam.set_target(Vec3::NEG_Z);
        assert!(cam.view().abs_diff_eq(Mat4::IDENTITY, EPS));
    }

    #[test]
    fn view_with_eye_on_target_falls_back_to_negative_z() {
        let mut cam = camera();
        cam.set_position(DEFAULT_TARGET);
        assert_eq!(cam.direction(), FALLBACK_DIRECTION);
        let view = cam.view();
        assert!(view.is_finite());
        let ahead = view.transform_point3(DEFAULT_TARGET + FALLBACK_DIRECTION);
        assert!(ahead.abs_diff_eq(Vec3::NEG_Z, EPS));
    }

    #[test]
    fn view_with_target_along_up_stays_finite() {
        let mut cam = camera();
        let target = Vec3::new(0.0, 5.0, 0.0);
        cam.set_target(target);
        assert!(cam.direction().abs_diff_eq(Vec3::Y, EPS));
        let view = cam.view();
        assert!(view.is_finite());
        let eye_space = view.transform_point3(target);
        assert!(eye_space.abs_diff_eq(Vec3::new(0.0, 0.0, -5.0), EPS));
    }

    #[test]
    fn set_position_keeps_direction_on_target() {
        let mut cam = camera();
        for pos in [
            Vec3::new(1.0, 2.0, 3.0),
            Vec3::new(-4.0, 0.5, 7.0),
            Vec3::new(0.0, 1.5, 10.0),
        ] {
            cam.set_position(pos);
            let expected = (cam.target() - pos).normalize();
            assert!(cam.direction().abs_diff_eq(expected, EPS));
            assert!((cam.direction().length() - 1.0).abs() < EPS);
        }
    }

    #[test]
    fn move_in_targeting_mode_reaims_at_target() {
        let mut cam = camera();
        let pos = cam.move_by(Vec3::new(2.5, 3.0, 0.0));
        assert!(pos.abs_diff_eq(Vec3::new(2.5, 3.0, 0.0), EPS));
        let expected = (DEFAULT_TARGET - pos).normalize();
        assert!(cam.direction().abs_diff_eq(expected, EPS));
    }

    #[test]
    fn move_in_free_look_keeps_direction() {
        let mut cam = free_look_camera();
        let before = cam.direction();
        let _ = cam.move_by(Vec3::new(3.0, -1.0, 2.0));
        assert_eq!(cam.direction(), before);
    }

    #[test]
    fn resizes_with_same_aspect_give_same_perspective() {
        let mut a = camera();
        let mut b = camera();
        assert!(a.resize(800.0, 600.0));
        assert!(b.resize(1024.0, 768.0));
        assert_eq!(a.perspective(), b.perspective());
        assert_eq!(a.projection(), b.projection());
    }

    #[test]
    fn zero_resize_is_rejected() {
        let mut cam = camera();
        let before = cam.clone();
        assert!(!cam.resize(0.0, 600.0));
        assert!(!cam.resize(800.0, 0.0));
        assert_eq!(cam, before);
    }

    #[test]
    fn orthographic_bounds_follow_scale_and_aspect() {
        let mut cam = camera();
        cam.set_scale(2.0);
        let half_width = 2.0 * 1024.0 / 768.0;
        let expected = Mat4::orthographic_rh(
            -half_width,
            half_width,
            -2.0,
            2.0,
            0.1,
            10000.0,
        );
        assert!(cam.orthographic().abs_diff_eq(expected, EPS));
    }

    #[test]
    fn perspective_toggle_round_trips() {
        let mut cam = camera();
        let original = cam.projection();
        cam.set_perspective(true);
        cam.set_perspective(false);
        assert_eq!(cam.projection(), cam.orthographic());
        cam.set_perspective(true);
        assert_eq!(cam.projection(), original);
    }

    #[test]
    fn rotate_is_ignored_while_targeting() {
        let mut cam = camera();
        let before = cam.direction();
        cam.rotate(0.3, 0.2);
        assert_eq!(cam.direction(), before);
    }

    #[test]
    fn rotate_in_free_look_yaws_around_up() {
        let mut cam = free_look_camera();
        cam.set_target(cam.position() + Vec3::NEG_Z);
        let quarter = std::f32::consts::FRAC_PI_2 / cam.fov();
        cam.rotate(quarter, 0.0);
        assert!(cam.direction().abs_diff_eq(Vec3::NEG_X, EPS));
        assert!((cam.direction().length() - 1.0).abs() < EPS);
    }

    #[test]
    fn targeting_toggle_is_continuous() {
        let mut cam = camera();
        let _ = cam.move_by(Vec3::new(1.0, 0.0, 0.0));
        let before = cam.direction();
        cam.toggle_targeting();
        assert!(!cam.is_targeting());
        assert!(cam.direction().abs_diff_eq(before, EPS));

        cam.rotate(0.2, 0.0);
        cam.toggle_targeting();
        assert!(cam.is_targeting());
        assert_eq!(cam.target(), DEFAULT_TARGET);
        assert!(cam.direction().abs_diff_eq(before, EPS));
    }

    #[test]
    fn step_forward_moves_along_direction() {
        let mut cam = camera();
        let direction = cam.direction();
        cam.intents.vertical = VerticalIntent::Forward;
        cam.step(16);
        let expected = direction * (16.0 * 0.01);
        assert!(cam.position().abs_diff_eq(expected, EPS));
    }

    #[test]
    fn step_is_linear_in_delta() {
        let mut once = free_look_camera();
        once.intents.vertical = VerticalIntent::Backward;
        once.intents.horizontal = HorizontalIntent::Right;
        let mut twice = once.clone();

        once.step(16);
        twice.step(8);
        twice.step(8);
        assert!(once.position().abs_diff_eq(twice.position(), EPS));
    }

    #[test]
    fn strafe_is_perpendicular_to_direction() {
        let mut cam = free_look_camera();
        cam.intents.horizontal = HorizontalIntent::Left;
        let direction = cam.direction();
        cam.step(100);
        assert!(cam.position().dot(direction).abs() < EPS);
        assert!((cam.position().length() - 1.0).abs() < EPS);
    }

    #[test]
    fn strafe_speed_ignores_pitch() {
        let mut cam = camera();
        let start = Vec3::new(2.5, 3.0, 0.0);
        cam.set_position(start);
        let direction = cam.direction();
        cam.intents.horizontal = HorizontalIntent::Right;
        cam.step(16);
        let moved = cam.position() - start;
        assert!((moved.length() - 16.0 * 0.01).abs() < EPS);
        assert!(moved.dot(direction).abs() < EPS);
    }

    #[test]
    fn step_zoom_reprojects() {
        let mut cam = camera();
        cam.intents.zoom = ZoomIntent::Increase;
        let before = cam.orthographic();
        cam.step(50);
        assert!((cam.scale() - 1.5).abs() < EPS);
        assert_ne!(cam.orthographic(), before);

        cam.intents.zoom = ZoomIntent::Decrease;
        cam.step(10_000);
        assert_eq!(cam.scale(), MIN_SCALE);
    }

    #[test]
    fn step_yaw_only_turns_in_free_look() {
        let mut cam = camera();
        cam.intents.rotate = RotateIntent::Left;
        let before = cam.direction();
        cam.step(16);
        assert_eq!(cam.direction(), before);

        cam.set_targeting(false);
        cam.step(16);
        assert!(!cam.direction().abs_diff_eq(before, EPS));
        assert!((cam.direction().length() - 1.0).abs() < EPS);
    }

    #[test]
    fn pose_restore_is_exact() {
        let mut cam = camera();
        let pose = cam.pose();
        cam.look_from(Vec3::splat(4.0), Vec3::ZERO, Vec3::Z);
        cam.set_scale(7.0);
        cam.restore(&pose);
        assert_eq!(cam.pose(), pose);
        assert_eq!(cam, camera());
    }
}
