use super::core::Camera;
use crate::input::{InputEvent, Key};

impl Camera {
    /// Route one input event to the camera.
    ///
    /// Returns `true` when the event changed any camera state.
    pub fn handle_input_event(&mut self, event: &InputEvent) -> bool {
        match *event {
            InputEvent::KeyDown { key } => self.handle_key(key, true),
            InputEvent::KeyUp { key } => self.handle_key(key, false),
            InputEvent::PointerMotion { dx, dy } => {
                self.handle_pointer_motion(dx, dy)
            }
        }
    }

    fn handle_key(&mut self, key: Key, pressed: bool) -> bool {
        match (key, pressed) {
            (Key::Tab, true) => {
                self.toggle_targeting();
                log::debug!("camera targeting: {}", self.is_targeting());
                true
            }
            (Key::P, false) => {
                self.set_perspective(!self.is_perspective());
                log::debug!("camera perspective: {}", self.is_perspective());
                true
            }
            _ => {
                let next = self.intents.transition(key, pressed);
                let changed = next != self.intents;
                self.intents = next;
                changed
            }
        }
    }

    /// Pixel deltas are normalized by the viewport before turning, so a
    /// full-width sweep turns by one field of view.
    fn handle_pointer_motion(&mut self, dx: f32, dy: f32) -> bool {
        let (width, height) = self.size();
        let before = self.direction();
        self.rotate(dx / width, dy / height);
        self.direction() != before
    }
}

#[cfg(test)]
mod tests {
    use glam::Vec3;

    use super::*;
    use crate::camera::intent::{RotateIntent, VerticalIntent, ZoomIntent};
    use crate::camera::CameraView;

    fn camera() -> Camera {
        Camera::new(800.0, 600.0, 0.785, 0.1, 100.0, 1.0)
    }

    fn down(key: Key) -> InputEvent {
        InputEvent::KeyDown { key }
    }

    fn up(key: Key) -> InputEvent {
        InputEvent::KeyUp { key }
    }

    #[test]
    fn tab_flips_targeting_on_press_only() {
        let mut cam = camera();
        assert!(cam.handle_input_event(&down(Key::Tab)));
        assert!(!cam.is_targeting());
        assert!(!cam.handle_input_event(&up(Key::Tab)));
        assert!(!cam.is_targeting());
        assert!(cam.handle_input_event(&down(Key::Tab)));
        assert!(cam.is_targeting());
    }

    #[test]
    fn p_toggles_projection_on_release_only() {
        let mut cam = camera();
        assert!(!cam.handle_input_event(&down(Key::P)));
        assert!(cam.is_perspective());
        assert!(cam.handle_input_event(&up(Key::P)));
        assert!(!cam.is_perspective());
        assert_eq!(cam.projection(), cam.orthographic());
    }

    #[test]
    fn motion_keys_latch_through_events() {
        let mut cam = camera();
        assert!(cam.handle_input_event(&down(Key::W)));
        assert!(!cam.handle_input_event(&down(Key::S)));
        assert_eq!(cam.intents().vertical, VerticalIntent::Forward);
        assert!(!cam.handle_input_event(&up(Key::S)));
        assert!(cam.handle_input_event(&up(Key::W)));
        assert!(cam.intents().is_idle());

        assert!(cam.handle_input_event(&down(Key::A)));
        assert!(cam.handle_input_event(&down(Key::Minus)));
        assert_eq!(cam.intents().rotate, RotateIntent::Left);
        assert_eq!(cam.intents().zoom, ZoomIntent::Increase);
    }

    #[test]
    fn unbound_keys_are_not_consumed() {
        let mut cam = camera();
        let before = cam.clone();
        assert!(!cam.handle_input_event(&down(Key::Other)));
        assert!(!cam.handle_input_event(&up(Key::V)));
        assert_eq!(cam, before);
    }

    #[test]
    fn pointer_motion_only_turns_in_free_look() {
        let mut cam = camera();
        let motion = InputEvent::PointerMotion { dx: 40.0, dy: 0.0 };
        assert!(!cam.handle_input_event(&motion));

        let _ = cam.handle_input_event(&down(Key::Tab));
        let before = cam.direction();
        assert!(cam.handle_input_event(&motion));
        let after = cam.direction();
        let expected_angle = 40.0 / 800.0 * cam.fov();
        assert!((before.angle_between(after) - expected_angle).abs() < 1e-4);
        assert!((after.length() - 1.0).abs() < 1e-5);
        assert_eq!(cam.up(), Vec3::Y);
    }
}
