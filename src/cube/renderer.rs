use glam::{Mat4, Vec3};

use super::face::{CubeFace, ProbeFrame};
use super::registry::{CameraId, CameraRegistry, CameraRole};
use crate::camera::{Camera, CameraView, MotionRates};
use crate::input::{InputEvent, Key};
use crate::options::Options;
use crate::scene::Scene;

/// Render targets the cube renderer drives. Implemented by the GPU frame and
/// by recording doubles in tests.
pub trait FrameTargets {
    /// Make cube layer `face` the current target at `resolution`².
    fn bind_face(&mut self, face: CubeFace, resolution: u32);

    /// Make the window the current target.
    fn bind_viewport(&mut self, width: u32, height: u32);

    /// Clear the current target and draw the environment cube with the given
    /// `projection * view * model` matrix, sampling the six faces.
    fn draw_environment_cube(&mut self, world: Mat4);
}

/// Owns the app and probe cameras and sequences the six face passes and the
/// composite pass every frame.
#[derive(Debug, Clone)]
pub struct CubeRenderer {
    cameras: CameraRegistry,
    app: CameraId,
    probe: CameraId,
    viewport: (u32, u32),
    probe_resolution: u32,
    cube_mode: bool,
    scene_camera: CameraRole,
    cube_model: Mat4,
}

impl CubeRenderer {
    /// Create both cameras from `options`. The app camera starts focused.
    #[must_use]
    pub fn new(width: u32, height: u32, options: &Options) -> Self {
        let rates = MotionRates::from(options.motion);

        let app_opts = &options.camera;
        let mut app_camera = Camera::new(
            width as f32,
            height as f32,
            app_opts.fov,
            app_opts.near,
            app_opts.far,
            app_opts.scale,
        )
        .with_rates(rates);
        let _ = app_camera.move_by(Vec3::from_array(app_opts.start_offset));

        let probe_opts = &options.probe;
        let probe_resolution = probe_opts.resolution.max(1);
        let side = probe_resolution as f32;
        let mut probe_camera = Camera::new(
            side,
            side,
            probe_opts.fov,
            probe_opts.near,
            probe_opts.far,
            probe_opts.scale,
        )
        .with_rates(rates);
        probe_camera.look_from(
            Vec3::from_array(probe_opts.position),
            Vec3::from_array(probe_opts.target),
            Vec3::Y,
        );
        probe_camera.set_perspective(probe_opts.perspective);

        let mut cameras = CameraRegistry::new();
        let app = cameras.insert(app_camera);
        let probe = cameras.insert(probe_camera);
        cameras.focus(app);

        Self {
            cameras,
            app,
            probe,
            viewport: (width.max(1), height.max(1)),
            probe_resolution,
            cube_mode: options.cube.render_cube,
            scene_camera: options.cube.scene_camera,
            cube_model: Mat4::from_translation(Vec3::from_array(
                options.cube.model_translation,
            )),
        }
    }

    // ── Accessors ───────────────────────────────────────────────────────

    /// Viewer-facing camera.
    #[must_use]
    pub fn app_camera(&self) -> &Camera {
        &self.cameras[self.app]
    }

    /// Cube-map probe camera.
    #[must_use]
    pub fn probe_camera(&self) -> &Camera {
        &self.cameras[self.probe]
    }

    /// Camera for a role.
    #[must_use]
    pub fn camera(&self, role: CameraRole) -> &Camera {
        &self.cameras[self.id(role)]
    }

    /// Role of the camera currently receiving input.
    #[must_use]
    pub fn focused_role(&self) -> CameraRole {
        if self.cameras.focused() == self.probe {
            CameraRole::Probe
        } else {
            CameraRole::App
        }
    }

    /// Whether [`render`](Self::render) draws the cube map.
    #[must_use]
    pub fn is_cube_mode(&self) -> bool {
        self.cube_mode
    }

    /// Choose between cube mode and the direct scene pass.
    pub fn set_cube_mode(&mut self, enabled: bool) {
        self.cube_mode = enabled;
    }

    /// Window size in pixels.
    #[must_use]
    pub fn viewport(&self) -> (u32, u32) {
        self.viewport
    }

    /// Side length of each cube face in pixels.
    #[must_use]
    pub fn probe_resolution(&self) -> u32 {
        self.probe_resolution
    }

    fn id(&self, role: CameraRole) -> CameraId {
        match role {
            CameraRole::App => self.app,
            CameraRole::Probe => self.probe,
        }
    }

    // ── Per frame ───────────────────────────────────────────────────────

    /// Resize the window viewport. Zero-sized requests are rejected.
    pub fn resize(&mut self, width: u32, height: u32) -> bool {
        let accepted =
            self.cameras[self.app].resize(width as f32, height as f32);
        if accepted {
            self.viewport = (width, height);
        }
        accepted
    }

    /// Advance both cameras' integrators, focused or not.
    pub fn step(&mut self, delta_ms: u32) {
        for camera in self.cameras.iter_mut() {
            camera.step(delta_ms);
        }
    }

    /// Draw one frame in the current mode.
    pub fn render<T, S>(&mut self, targets: &mut T, scene: &mut S)
    where
        T: FrameTargets + ?Sized,
        S: Scene<T> + ?Sized,
    {
        if self.cube_mode {
            self.render_cube(targets, scene);
        } else {
            self.render_scene(targets, scene);
        }
    }

    /// Six face passes from the probe, then the environment cube from the
    /// app camera.
    ///
    /// The probe's pose is snapshotted first and restored afterwards, so
    /// every frame starts from the same center.
    pub fn render_cube<T, S>(&mut self, targets: &mut T, scene: &mut S)
    where
        T: FrameTargets + ?Sized,
        S: Scene<T> + ?Sized,
    {
        let resolution = self.probe_resolution;
        let probe = &mut self.cameras[self.probe];
        let saved = probe.pose();
        let frame = ProbeFrame::from_camera(probe);

        for face in CubeFace::ALL {
            targets.bind_face(face, resolution);
            face.pose(&frame).apply(probe);
            scene.render(targets, &*probe);
        }
        probe.restore(&saved);

        let (width, height) = self.viewport;
        targets.bind_viewport(width, height);
        let world = self.cameras[self.app].view_projection() * self.cube_model;
        targets.draw_environment_cube(world);
    }

    /// Draw the scene straight into the window with the configured camera.
    pub fn render_scene<T, S>(&mut self, targets: &mut T, scene: &mut S)
    where
        T: FrameTargets + ?Sized,
        S: Scene<T> + ?Sized,
    {
        let (width, height) = self.viewport;
        targets.bind_viewport(width, height);
        scene.render(targets, &self.cameras[self.id(self.scene_camera)]);
    }

    /// `V` release toggles cube mode, `C` release moves input focus to the
    /// other camera; everything else goes to the focused camera.
    ///
    /// Returns `true` when the event changed any state.
    pub fn handle_input_event(&mut self, event: &InputEvent) -> bool {
        match *event {
            InputEvent::KeyUp { key: Key::V } => {
                self.cube_mode = !self.cube_mode;
                log::debug!("cube mode: {}", self.cube_mode);
                true
            }
            InputEvent::KeyUp { key: Key::C } => {
                let _ = self.cameras.cycle_focus();
                log::debug!("input focus: {:?}", self.focused_role());
                true
            }
            _ => self
                .cameras
                .focused_mut()
                .is_some_and(|camera| camera.handle_input_event(event)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::camera::CameraPose;

    const EPS: f32 = 1e-5;

    #[derive(Debug, Clone, PartialEq)]
    enum Call {
        Face(CubeFace, u32),
        Viewport(u32, u32),
        Environment(Mat4),
    }

    #[derive(Default)]
    struct Recorder {
        calls: Vec<Call>,
    }

    impl FrameTargets for Recorder {
        fn bind_face(&mut self, face: CubeFace, resolution: u32) {
            self.calls.push(Call::Face(face, resolution));
        }

        fn bind_viewport(&mut self, width: u32, height: u32) {
            self.calls.push(Call::Viewport(width, height));
        }

        fn draw_environment_cube(&mut self, world: Mat4) {
            self.calls.push(Call::Environment(world));
        }
    }

    /// Records the view matrix of every render and how many targets were
    /// bound at that point.
    #[derive(Default)]
    struct RecordingScene {
        views: Vec<Mat4>,
        bound_before: Vec<usize>,
    }

    impl Scene<Recorder> for RecordingScene {
        fn advance(&mut self, _delta_ms: u32) {}

        fn render(&mut self, targets: &mut Recorder, camera: &dyn CameraView) {
            self.views.push(camera.view());
            self.bound_before.push(targets.calls.len());
        }
    }

    fn renderer() -> CubeRenderer {
        CubeRenderer::new(800, 600, &Options::default())
    }

    fn render(renderer: &mut CubeRenderer) -> (Recorder, RecordingScene) {
        let mut targets = Recorder::default();
        let mut scene = RecordingScene::default();
        renderer.render(&mut targets, &mut scene);
        (targets, scene)
    }

    fn key_up(key: Key) -> InputEvent {
        InputEvent::KeyUp { key }
    }

    fn key_down(key: Key) -> InputEvent {
        InputEvent::KeyDown { key }
    }

    #[test]
    fn construction_places_both_cameras() {
        let r = renderer();
        let app = r.app_camera();
        assert!(app.position().abs_diff_eq(Vec3::new(2.5, 3.0, 0.0), EPS));
        assert!(app.is_targeting());
        assert!(app.is_perspective());
        assert_eq!(app.size(), (800.0, 600.0));

        let probe = r.probe_camera();
        assert_eq!(probe.position(), Vec3::new(0.0, 1.5, -1.0));
        assert!(probe.direction().abs_diff_eq(Vec3::Z, EPS));
        assert!(!probe.is_perspective());
        assert_eq!(probe.size(), (512.0, 512.0));
        assert_eq!(probe.scale(), 10.0);

        assert_eq!(r.focused_role(), CameraRole::App);
        assert!(r.is_cube_mode());
    }

    #[test]
    fn cube_mode_renders_six_faces_then_composite() {
        let mut r = renderer();
        let frame = ProbeFrame::from_camera(r.probe_camera());
        let expected_world = r.app_camera().view_projection()
            * Mat4::from_translation(Vec3::new(0.0, 1.5, -5.0));

        let (targets, scene) = render(&mut r);

        let mut expected: Vec<Call> = CubeFace::ALL
            .iter()
            .map(|&face| Call::Face(face, 512))
            .collect();
        expected.push(Call::Viewport(800, 600));
        expected.push(Call::Environment(expected_world));
        assert_eq!(targets.calls, expected);

        // Each face render happens right after its face was bound.
        assert_eq!(scene.bound_before, vec![1, 2, 3, 4, 5, 6]);
        for (face, view) in CubeFace::ALL.iter().zip(&scene.views) {
            let pose = face.pose(&frame);
            let want = Mat4::look_at_rh(pose.eye, pose.target, pose.up);
            assert!(view.abs_diff_eq(want, EPS), "{face:?}");
        }
    }

    #[test]
    fn probe_pose_is_restored_every_frame() {
        let mut r = renderer();
        let _ = r.handle_input_event(&key_up(Key::C));
        let _ = r.handle_input_event(&key_down(Key::Minus));

        for frame in 0..1000 {
            if frame == 500 {
                let _ = r.handle_input_event(&key_up(Key::Minus));
                let _ = r.handle_input_event(&key_down(Key::Equal));
            }
            r.step(16);
            let before: CameraPose = r.probe_camera().pose();
            let _ = render(&mut r);
            assert_eq!(r.probe_camera().pose(), before, "frame {frame}");
        }
    }

    #[test]
    fn scene_mode_renders_once_with_configured_camera() {
        let mut r = renderer();
        assert!(r.handle_input_event(&key_up(Key::V)));
        assert!(!r.is_cube_mode());

        let (targets, scene) = render(&mut r);
        assert_eq!(targets.calls, vec![Call::Viewport(800, 600)]);
        assert_eq!(scene.views, vec![r.probe_camera().view()]);

        let mut options = Options::default();
        options.cube.render_cube = false;
        options.cube.scene_camera = CameraRole::App;
        let mut r = CubeRenderer::new(800, 600, &options);
        let (_, scene) = render(&mut r);
        assert_eq!(scene.views, vec![r.app_camera().view()]);
    }

    #[test]
    fn focus_swap_routes_input() {
        let mut r = renderer();
        assert!(r.handle_input_event(&key_down(Key::W)));
        assert!(!r.app_camera().intents().is_idle());

        assert!(r.handle_input_event(&key_up(Key::C)));
        assert_eq!(r.focused_role(), CameraRole::Probe);
        assert!(r.handle_input_event(&key_down(Key::Q)));
        assert!(!r.probe_camera().intents().is_idle());

        assert!(r.handle_input_event(&key_up(Key::C)));
        assert_eq!(r.focused_role(), CameraRole::App);
    }

    #[test]
    fn v_and_c_key_down_are_not_consumed_by_the_renderer() {
        let mut r = renderer();
        assert!(!r.handle_input_event(&key_down(Key::V)));
        assert!(!r.handle_input_event(&key_down(Key::C)));
        assert!(r.is_cube_mode());
        assert_eq!(r.focused_role(), CameraRole::App);
    }

    #[test]
    fn step_advances_both_cameras() {
        let mut r = renderer();
        let _ = r.handle_input_event(&key_down(Key::W));
        let _ = r.handle_input_event(&key_up(Key::C));
        let _ = r.handle_input_event(&key_down(Key::W));
        let app_before = r.app_camera().position();
        let probe_before = r.probe_camera().position();

        r.step(16);
        assert!(r.app_camera().position() != app_before);
        assert!(r
            .probe_camera()
            .position()
            .abs_diff_eq(probe_before + Vec3::Z * 0.16, EPS));
    }

    #[test]
    fn resize_rejects_zero_and_updates_viewport() {
        let mut r = renderer();
        assert!(!r.resize(0, 600));
        assert_eq!(r.viewport(), (800, 600));
        assert!(r.resize(1024, 768));
        assert_eq!(r.viewport(), (1024, 768));
        assert_eq!(r.app_camera().size(), (1024.0, 768.0));
        assert_eq!(r.probe_camera().size(), (512.0, 512.0));
    }
}
