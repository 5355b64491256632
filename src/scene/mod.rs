//! Scenes rendered by the cube renderer.
//!
//! A scene only ever reads the camera it is handed; the renderer owns every
//! camera and decides which target is bound when [`Scene::render`] runs.

/// Pure bobbing motion of the test cube.
pub mod animation;
/// GPU test scene drawing the animated cube.
pub mod test_scene;

pub use animation::CubeAnimation;
pub use test_scene::TestScene;

use crate::camera::CameraView;

/// Something that can be advanced in time and drawn from a camera into the
/// currently bound target of `T`.
pub trait Scene<T: ?Sized> {
    /// Advance internal time by `delta_ms` milliseconds.
    fn advance(&mut self, delta_ms: u32);

    /// Draw into the target currently bound on `targets`.
    fn render(&mut self, targets: &mut T, camera: &dyn CameraView);
}
