//! Latched motion intents driven by key press/release edges.
//!
//! Each intent is a small tagged state. A press only moves a slot out of
//! `Idle`; a release only returns it to `Idle` when the slot still holds the
//! state that key set. Holding `W` and then pressing `S` therefore keeps the
//! camera moving forward, and releasing `S` afterwards changes nothing.

use crate::input::Key;

/// Forward/backward dolly along the view direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum VerticalIntent {
    /// No dolly requested.
    #[default]
    Idle,
    /// Move along the view direction.
    Forward,
    /// Move against the view direction.
    Backward,
}

/// Sideways strafe along the camera's right axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HorizontalIntent {
    /// No strafe requested.
    #[default]
    Idle,
    /// Strafe to the left.
    Left,
    /// Strafe to the right.
    Right,
}

/// Continuous yaw around the camera's up vector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RotateIntent {
    /// No yaw requested.
    #[default]
    Idle,
    /// Yaw counter-clockwise (seen from above).
    Left,
    /// Yaw clockwise (seen from above).
    Right,
}

/// Continuous change of the orthographic half-height.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ZoomIntent {
    /// No zoom requested.
    #[default]
    Idle,
    /// Grow the orthographic frustum (zoom out).
    Increase,
    /// Shrink the orthographic frustum (zoom in).
    Decrease,
}

/// The four independent intent slots of one camera.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MotionIntents {
    /// Dolly slot (`W` / `S`).
    pub vertical: VerticalIntent,
    /// Strafe slot (`Q` / `E`).
    pub horizontal: HorizontalIntent,
    /// Yaw slot (`A` / `D`).
    pub rotate: RotateIntent,
    /// Zoom slot (`-` / `=`).
    pub zoom: ZoomIntent,
}

impl MotionIntents {
    /// Apply one key edge and return the resulting intents.
    ///
    /// Keys that do not drive an intent slot return `self` unchanged.
    #[must_use]
    pub fn transition(self, key: Key, pressed: bool) -> Self {
        match key {
            Key::W => Self {
                vertical: latch(
                    self.vertical,
                    VerticalIntent::Forward,
                    pressed,
                ),
                ..self
            },
            Key::S => Self {
                vertical: latch(
                    self.vertical,
                    VerticalIntent::Backward,
                    pressed,
                ),
                ..self
            },
            Key::Q => Self {
                horizontal: latch(
                    self.horizontal,
                    HorizontalIntent::Left,
                    pressed,
                ),
                ..self
            },
            Key::E => Self {
                horizontal: latch(
                    self.horizontal,
                    HorizontalIntent::Right,
                    pressed,
                ),
                ..self
            },
            Key::A => Self {
                rotate: latch(self.rotate, RotateIntent::Left, pressed),
                ..self
            },
            Key::D => Self {
                rotate: latch(self.rotate, RotateIntent::Right, pressed),
                ..self
            },
            Key::Minus => Self {
                zoom: latch(self.zoom, ZoomIntent::Increase, pressed),
                ..self
            },
            Key::Equal => Self {
                zoom: latch(self.zoom, ZoomIntent::Decrease, pressed),
                ..self
            },
            _ => self,
        }
    }

    /// Whether every slot is idle.
    #[must_use]
    pub fn is_idle(&self) -> bool {
        *self == Self::default()
    }
}

/// Press moves `Idle -> held`; release moves `held -> Idle`. Everything
/// else is a no-op.
fn latch<T: Copy + PartialEq + Default>(state: T, held: T, pressed: bool) -> T {
    let idle = T::default();
    if pressed {
        if state == idle {
            held
        } else {
            state
        }
    } else if state == held {
        idle
    } else {
        state
    }
}

/// Per-millisecond rates used by the camera integrator.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MotionRates {
    /// World units travelled per millisecond of dolly or strafe.
    pub translate_per_ms: f32,
    /// Orthographic half-height change per millisecond of zoom.
    pub zoom_per_ms: f32,
    /// Normalized yaw input per millisecond (scaled by the field of view).
    pub yaw_per_ms: f32,
}

impl Default for MotionRates {
    fn default() -> Self {
        Self {
            translate_per_ms: 0.01,
            zoom_per_ms: 0.01,
            yaw_per_ms: 0.004,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn press_then_release_returns_to_idle() {
        let held = MotionIntents::default().transition(Key::W, true);
        assert_eq!(held.vertical, VerticalIntent::Forward);
        let released = held.transition(Key::W, false);
        assert!(released.is_idle());
    }

    #[test]
    fn opposing_press_is_ignored_while_held() {
        let held = MotionIntents::default()
            .transition(Key::W, true)
            .transition(Key::S, true);
        assert_eq!(held.vertical, VerticalIntent::Forward);

        // Releasing the ignored key must not clear the active intent.
        let after = held.transition(Key::S, false);
        assert_eq!(after.vertical, VerticalIntent::Forward);
    }

    #[test]
    fn slots_are_independent() {
        let intents = MotionIntents::default()
            .transition(Key::W, true)
            .transition(Key::Q, true)
            .transition(Key::D, true)
            .transition(Key::Minus, true);
        assert_eq!(intents.vertical, VerticalIntent::Forward);
        assert_eq!(intents.horizontal, HorizontalIntent::Left);
        assert_eq!(intents.rotate, RotateIntent::Right);
        assert_eq!(intents.zoom, ZoomIntent::Increase);

        let intents = intents.transition(Key::Q, false);
        assert_eq!(intents.horizontal, HorizontalIntent::Idle);
        assert_eq!(intents.vertical, VerticalIntent::Forward);
    }

    #[test]
    fn unbound_keys_do_nothing() {
        let intents = MotionIntents::default().transition(Key::E, true);
        for key in [Key::Tab, Key::P, Key::V, Key::C, Key::Other] {
            assert_eq!(intents.transition(key, true), intents);
            assert_eq!(intents.transition(key, false), intents);
        }
    }

    #[test]
    fn release_without_press_is_noop() {
        let intents = MotionIntents::default().transition(Key::Equal, false);
        assert!(intents.is_idle());
    }
}
